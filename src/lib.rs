//! Personal portfolio site.
//!
//! Client-rendered Leptos UI on top of the `pf-*` crates: the bootstrap wires
//! configuration, logging and adapters; components render the views.

pub mod adapters;
pub mod app;
pub mod bootstrap;
pub mod components;

pub use bootstrap::run;
