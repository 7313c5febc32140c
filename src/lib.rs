pub mod argument_parsing;
pub mod database;
pub mod error;
pub mod menu;
pub mod postgres;
pub mod postgres_queries;
pub mod reports;
pub mod sqlite;
pub mod sqlite_queries;

pub use database::Database;
pub use error::AppError;
pub use reports::{Outcome, Report};
