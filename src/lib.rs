// Data-access layer for the Skillboard admin dashboard
// Exposes project and user services over a pluggable document store

pub mod config;
pub mod dates;
pub mod error;
pub mod models;
pub mod query;
pub mod services;
pub mod session;
pub mod store;

pub use error::{AppError, AppResult};
pub use query::{Page, Pagination};
pub use services::{ProjectService, UserService};
