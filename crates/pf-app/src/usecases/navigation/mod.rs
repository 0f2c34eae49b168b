mod navigate;

pub use navigate::{Navigate, NavigationCommand};
