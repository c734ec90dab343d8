//! Screens that are not generic resource managers

mod contacts;
mod dashboard;
mod not_found;
mod school;
mod sign_in;
mod sign_up;

pub use contacts::ContactList;
pub use dashboard::Dashboard;
pub use not_found::NotFound;
pub use school::SchoolInfo;
pub use sign_in::SignInPage;
pub use sign_up::SignUpPage;

/// Shared look of the sign-in and sign-up text inputs
pub(crate) const AUTH_INPUT_CLASS: &str = "w-full px-4 py-2 border border-gray-300 rounded-lg bg-white text-gray-900 focus:ring-2 focus:ring-blue-500 focus:border-transparent";
