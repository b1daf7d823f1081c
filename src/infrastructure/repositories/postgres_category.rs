// src/infrastructure/repositories/postgres_category.rs
use super::error::CNT_CATEGORY_NAME_TYPE;
use super::{is_unique_violation, map_sqlx};
use crate::domain::category::{Category, CategoryId, CategoryName, CategoryRepository, NewCategory};
use crate::domain::errors::{DomainError, DomainResult};
use crate::domain::module_type::ModuleType;
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::{FromRow, PgPool};

#[derive(Clone)]
pub struct PostgresCategoryRepository {
    pool: PgPool,
}

impl PostgresCategoryRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[derive(Debug, FromRow)]
struct CategoryRow {
    id: String,
    name: String,
    module_type: String,
    created_at: DateTime<Utc>,
}

impl TryFrom<CategoryRow> for Category {
    type Error = DomainError;

    fn try_from(row: CategoryRow) -> Result<Self, Self::Error> {
        Ok(Category {
            id: CategoryId::new(row.id)?,
            name: CategoryName::new(row.name)?,
            module_type: row.module_type.parse::<ModuleType>()?,
            created_at: row.created_at,
        })
    }
}

#[async_trait]
impl CategoryRepository for PostgresCategoryRepository {
    async fn insert(&self, category: NewCategory) -> DomainResult<Category> {
        let NewCategory {
            name,
            module_type,
            created_at,
        } = category;
        let name_value = String::from(name);

        let row = sqlx::query_as::<_, CategoryRow>(
            "INSERT INTO module_categories (name, module_type, created_at) \
             VALUES ($1, $2, $3) \
             RETURNING id, name, module_type, created_at",
        )
        .bind(&name_value)
        .bind(module_type.as_str())
        .bind(created_at)
        .fetch_one(&self.pool)
        .await
        .map_err(|err| {
            if is_unique_violation(&err, CNT_CATEGORY_NAME_TYPE) {
                DomainError::DuplicateCategory(format!("{name_value} ({module_type})"))
            } else {
                map_sqlx(err)
            }
        })?;

        Category::try_from(row)
    }

    async fn list_by_module_type(&self, module_type: ModuleType) -> DomainResult<Vec<Category>> {
        let rows = sqlx::query_as::<_, CategoryRow>(
            "SELECT id, name, module_type, created_at \
             FROM module_categories WHERE module_type = $1 \
             ORDER BY created_at ASC, id ASC",
        )
        .bind(module_type.as_str())
        .fetch_all(&self.pool)
        .await
        .map_err(map_sqlx)?;

        rows.into_iter().map(Category::try_from).collect()
    }

    async fn delete(&self, id: &CategoryId) -> DomainResult<()> {
        let result = sqlx::query("DELETE FROM module_categories WHERE id = $1")
            .bind(id.as_str())
            .execute(&self.pool)
            .await
            .map_err(map_sqlx)?;
        if result.rows_affected() == 0 {
            return Err(DomainError::NotFound("category not found".into()));
        }
        Ok(())
    }
}
