// tests/support/mocks/mod.rs
mod category_repo;
mod module_repos;
mod time;

pub use category_repo::InMemoryCategories;
pub use module_repos::{FailingLookup, InMemoryModules};
pub use time::{FIXED_NOW, FixedClock};
