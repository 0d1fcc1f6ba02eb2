//! Authentication

mod errors;
mod models;
pub mod passwords;
mod service;
mod token;

pub use errors::*;
pub use models::*;
pub use service::*;
pub use token::*;
