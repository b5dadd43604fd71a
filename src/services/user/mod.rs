pub mod user_service;
pub mod validation;

pub use user_service::{Registration, UserService};
pub use validation::UserValidationService;
