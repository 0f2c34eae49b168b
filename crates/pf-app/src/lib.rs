//! Portfolio application orchestration layer
//!
//! Use cases that sit between the pure domain in `pf-core` and the browser UI:
//! contact submission, project resolution, navigation and reveal tracking.

pub mod app;
pub mod deps;
pub mod lifecycle;
pub mod usecases;

pub use app::{App, AppError};
pub use deps::AppDeps;
pub use lifecycle::{MountGuard, RunGuards};
