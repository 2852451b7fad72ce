//! Utility helpers shared across client UI modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Utility modules isolate browser timer wiring and display formatting from
//! the section components so the pure parts stay natively testable.

pub mod format;
pub mod severity;
pub mod ticker;
