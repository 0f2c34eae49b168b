mod emailjs;

pub use emailjs::{EmailClientError, EmailJsClient, SEND_PATH};
