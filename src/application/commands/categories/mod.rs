mod create;
mod delete;
mod service;

pub use create::CreateCategoryCommand;
pub use delete::DeleteCategoryCommand;
pub use service::CategoryCommandService;
