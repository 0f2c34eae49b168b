mod contact;
mod footer;
mod navbar;
mod presentation;
mod project_detail;
mod projects;

pub use contact::ContactSection;
pub use footer::Footer;
pub use navbar::{Navbar, NavbarProject};
pub use presentation::PresentationPage;
pub use project_detail::ProjectDetailPage;
pub use projects::{ProjectCard, ProjectsSection, TechChips};
