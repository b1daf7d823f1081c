mod get_by_identifier;
mod list;
mod service;

pub use get_by_identifier::GetModuleByIdentifierQuery;
pub use list::ListModulesQuery;
pub use service::ModuleQueryService;
