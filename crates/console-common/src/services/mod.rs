//! API services used by the console screens

pub mod auth;
pub mod inquiry;
pub mod resource;
pub mod school;

pub use auth::{AuthService, SignIn, SignUp};
pub use inquiry::InquiryService;
pub use resource::ResourceService;
pub use school::SchoolCountService;
