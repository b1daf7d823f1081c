use crate::domain::category::entity::{Category, NewCategory};
use crate::domain::category::value_objects::CategoryId;
use crate::domain::errors::DomainResult;
use crate::domain::module_type::ModuleType;
use async_trait::async_trait;

#[async_trait]
pub trait CategoryRepository: Send + Sync {
    /// Fails with `DomainError::DuplicateCategory` when (name, module_type)
    /// already exists.
    async fn insert(&self, category: NewCategory) -> DomainResult<Category>;
    /// Insertion order.
    async fn list_by_module_type(&self, module_type: ModuleType) -> DomainResult<Vec<Category>>;
    /// Unconditional; referencing module entries keep their label.
    async fn delete(&self, id: &CategoryId) -> DomainResult<()>;
}
