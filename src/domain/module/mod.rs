pub mod entity;
pub mod repository;
pub mod services;
pub mod value_objects;

pub use entity::{ModuleEntry, ModuleUpdate, NewModuleEntry};
pub use repository::{ModuleListFilter, ModuleReadRepository, ModuleWriteRepository};
pub use value_objects::{
    CustomField, ModuleDescription, ModuleId, ModuleSlug, ModuleSummary, ModuleTitle,
};
