// src/infrastructure/repositories/mod.rs
mod error;
mod postgres_category;
mod postgres_module;

pub(crate) use error::{is_unique_violation, map_sqlx};
pub use postgres_category::PostgresCategoryRepository;
pub use postgres_module::{PostgresModuleReadRepository, PostgresModuleWriteRepository};
