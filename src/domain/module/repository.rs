use crate::domain::errors::DomainResult;
use crate::domain::module::entity::{ModuleEntry, ModuleUpdate, NewModuleEntry};
use crate::domain::module::value_objects::ModuleId;
use crate::domain::module_type::ModuleType;
use crate::domain::resolver::IdentifierLookup;
use async_trait::async_trait;

/// Listing filter. `published: None` means "everything" — the admin surface.
/// Public handlers pin `published: Some(true)`; the store itself has no
/// notion of who is asking.
#[derive(Debug, Clone, Default)]
pub struct ModuleListFilter {
    pub published: Option<bool>,
    pub category: Option<String>,
}

#[async_trait]
pub trait ModuleWriteRepository: Send + Sync {
    async fn insert(&self, entry: NewModuleEntry) -> DomainResult<ModuleEntry>;
    async fn update(&self, update: ModuleUpdate) -> DomainResult<ModuleEntry>;
    async fn delete(&self, id: &ModuleId) -> DomainResult<()>;
}

#[async_trait]
pub trait ModuleReadRepository: IdentifierLookup<Entity = ModuleEntry> {
    async fn find_by_id(&self, id: &ModuleId) -> DomainResult<Option<ModuleEntry>>;
    async fn list_by_module_type(
        &self,
        module_type: ModuleType,
        filter: &ModuleListFilter,
    ) -> DomainResult<Vec<ModuleEntry>>;
}
