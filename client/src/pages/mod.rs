//! Page modules for route-level screens.
//!
//! ARCHITECTURE
//! ============
//! The site has a single route. The page only orders the sections; rendering
//! details live in `components`.

pub mod home;
