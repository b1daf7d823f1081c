// src/domain/category/entity.rs
use crate::domain::category::value_objects::{CategoryId, CategoryName};
use crate::domain::module_type::ModuleType;
use chrono::{DateTime, Utc};

/// A named bucket for `ModuleEntry.category`, scoped to one vertical.
///
/// Categories are advisory labels, not foreign keys: module entries reference
/// them by value and deleting a category never touches the entries using its
/// name.
#[derive(Debug, Clone)]
pub struct Category {
    pub id: CategoryId,
    pub name: CategoryName,
    pub module_type: ModuleType,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone)]
pub struct NewCategory {
    pub name: CategoryName,
    pub module_type: ModuleType,
    pub created_at: DateTime<Utc>,
}
