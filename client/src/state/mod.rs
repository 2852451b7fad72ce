//! Shared client-side state modules.
//!
//! DESIGN
//! ======
//! State is split by concern (`ui` chrome versus the `demo` simulation) so
//! components depend on small focused models. Both are plain structs held in
//! `RwSignal`s by the components that own them.

pub mod demo;
pub mod ui;
