// tests/support/mocks/category_repo.rs
use async_trait::async_trait;
use compass_core::domain::category::{
    Category, CategoryId, CategoryRepository, NewCategory,
};
use compass_core::domain::errors::{DomainError, DomainResult};
use compass_core::domain::module_type::ModuleType;
use std::sync::{
    Mutex,
    atomic::{AtomicU64, Ordering},
};

/// In-memory category store with the compound (name, module_type) uniqueness
/// the Postgres adapter gets from its index.
#[derive(Default)]
pub struct InMemoryCategories {
    categories: Mutex<Vec<Category>>,
    next_id: AtomicU64,
}

impl InMemoryCategories {
    pub fn len(&self) -> usize {
        self.categories.lock().unwrap().len()
    }
}

#[async_trait]
impl CategoryRepository for InMemoryCategories {
    async fn insert(&self, category: NewCategory) -> DomainResult<Category> {
        let mut categories = self.categories.lock().unwrap();

        let duplicate = categories.iter().any(|existing| {
            existing.name.as_str() == category.name.as_str()
                && existing.module_type == category.module_type
        });
        if duplicate {
            return Err(DomainError::DuplicateCategory(format!(
                "{} ({})",
                category.name, category.module_type
            )));
        }

        let n = self.next_id.fetch_add(1, Ordering::SeqCst) + 1;
        let stored = Category {
            id: CategoryId::new(format!("{n:024x}")).unwrap(),
            name: category.name,
            module_type: category.module_type,
            created_at: category.created_at,
        };
        categories.push(stored.clone());
        Ok(stored)
    }

    async fn list_by_module_type(&self, module_type: ModuleType) -> DomainResult<Vec<Category>> {
        let categories = self.categories.lock().unwrap();
        Ok(categories
            .iter()
            .filter(|category| category.module_type == module_type)
            .cloned()
            .collect())
    }

    async fn delete(&self, id: &CategoryId) -> DomainResult<()> {
        let mut categories = self.categories.lock().unwrap();
        let before = categories.len();
        categories.retain(|category| category.id != *id);
        if categories.len() == before {
            return Err(DomainError::NotFound("category not found".into()));
        }
        Ok(())
    }
}
