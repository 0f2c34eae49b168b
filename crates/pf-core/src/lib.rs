//! # pf-core
//!
//! Core domain models and business rules for the portfolio site.
//!
//! This crate contains pure logic without any browser or network dependencies:
//! the project catalog, route parsing, scroll and visibility bookkeeping for the
//! reveal animation, the contact-form state machine, configuration DTOs and the
//! port traits implemented by `pf-infra` and the UI.

pub mod catalog;
pub mod config;
pub mod contact;
pub mod navigation;
pub mod ports;
pub mod reveal;

pub use catalog::{CatalogError, ProjectCatalog, ProjectLinks, ProjectRecord, Resolution};
pub use config::SiteConfig;
pub use contact::{
    ContactAction, ContactEvent, ContactField, ContactFields, ContactFormState,
    ContactStateMachine, Feedback, FeedbackLevel, SubmissionStatus,
};
pub use navigation::{NavigationTarget, RouteTarget, ScrollTarget, View};
pub use reveal::{RevealState, ScrollDirection, ScrollTracker};
