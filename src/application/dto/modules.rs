use crate::domain::module::{CustomField, ModuleEntry};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct CustomFieldDto {
    pub key: String,
    pub value: String,
}

impl From<CustomField> for CustomFieldDto {
    fn from(field: CustomField) -> Self {
        Self {
            key: field.key,
            value: field.value,
        }
    }
}

impl From<CustomFieldDto> for CustomField {
    fn from(dto: CustomFieldDto) -> Self {
        Self {
            key: dto.key,
            value: dto.value,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct ModuleEntryDto {
    pub id: String,
    pub module_type: String,
    pub title: String,
    pub slug: Option<String>,
    pub summary: String,
    pub description: String,
    pub category: String,
    pub custom_fields: Vec<CustomFieldDto>,
    pub highlights: Vec<String>,
    pub cover_image: Option<String>,
    pub gallery_images: Vec<String>,
    pub published: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<ModuleEntry> for ModuleEntryDto {
    fn from(entry: ModuleEntry) -> Self {
        Self {
            id: entry.id.into(),
            module_type: entry.module_type.as_str().into(),
            title: entry.title.into(),
            slug: entry.slug.map(Into::into),
            summary: entry.summary.into(),
            description: entry.description.into(),
            category: entry.category,
            custom_fields: entry.custom_fields.into_iter().map(Into::into).collect(),
            highlights: entry.highlights,
            cover_image: entry.cover_image,
            gallery_images: entry.gallery_images,
            published: entry.published,
            created_at: entry.created_at,
            updated_at: entry.updated_at,
        }
    }
}
