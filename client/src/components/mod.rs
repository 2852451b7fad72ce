//! Page section components.
//!
//! SYSTEM CONTEXT
//! ==============
//! Each module renders one section of the landing page. Only `hero` and
//! `demo` hold live state; they share `route_map` and `alert_card` for the
//! animated parts. The rest are static copy built from `cards`.

pub mod alert_card;
pub mod benefits;
pub mod cards;
pub mod cta;
pub mod demo;
pub mod features;
pub mod footer;
pub mod hero;
pub mod market;
pub mod nav;
pub mod route_map;
pub mod stats;
pub mod technology;
