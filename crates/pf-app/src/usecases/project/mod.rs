mod resolve_project;

pub use resolve_project::{ProjectDetailOutcome, ResolveProject, ResolveProjectError};
