mod create;
mod delete;
mod publish;
mod service;
mod update;

pub use create::{CreateModuleCommand, CreateModuleCommandBuilder};
pub use delete::DeleteModuleCommand;
pub use publish::SetPublishStateCommand;
pub use service::ModuleCommandService;
pub use update::UpdateModuleCommand;
