// src/infrastructure/repositories/postgres_module.rs
use super::error::CNT_MODULE_SLUG;
use super::{is_unique_violation, map_sqlx};
use crate::domain::errors::{DomainError, DomainResult};
use crate::domain::module::{
    CustomField, ModuleDescription, ModuleEntry, ModuleId, ModuleListFilter,
    ModuleReadRepository, ModuleSlug, ModuleSummary, ModuleTitle, ModuleUpdate,
    ModuleWriteRepository, NewModuleEntry,
};
use crate::domain::module_type::ModuleType;
use crate::domain::resolver::IdentifierLookup;
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::{FromRow, PgPool, Postgres, QueryBuilder, types::Json};

const MODULE_COLUMNS: &str = "id, module_type, title, slug, summary, description, category, \
     custom_fields, highlights, cover_image, gallery_images, published, created_at, updated_at";

#[derive(Clone)]
pub struct PostgresModuleWriteRepository {
    pool: PgPool,
}

impl PostgresModuleWriteRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[derive(Clone)]
pub struct PostgresModuleReadRepository {
    pool: PgPool,
}

impl PostgresModuleReadRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

/// Storage shape of one custom field; kept separate from the domain type so
/// the domain stays serde-free.
#[derive(Debug, Serialize, Deserialize)]
struct CustomFieldRecord {
    key: String,
    value: String,
}

impl From<CustomField> for CustomFieldRecord {
    fn from(field: CustomField) -> Self {
        Self {
            key: field.key,
            value: field.value,
        }
    }
}

impl From<CustomFieldRecord> for CustomField {
    fn from(record: CustomFieldRecord) -> Self {
        Self {
            key: record.key,
            value: record.value,
        }
    }
}

#[derive(Debug, FromRow)]
struct ModuleEntryRow {
    id: String,
    module_type: String,
    title: String,
    slug: Option<String>,
    summary: String,
    description: String,
    category: String,
    custom_fields: Json<Vec<CustomFieldRecord>>,
    highlights: Vec<String>,
    cover_image: Option<String>,
    gallery_images: Vec<String>,
    published: bool,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

impl TryFrom<ModuleEntryRow> for ModuleEntry {
    type Error = DomainError;

    fn try_from(row: ModuleEntryRow) -> Result<Self, Self::Error> {
        Ok(ModuleEntry {
            id: ModuleId::new(row.id)?,
            module_type: row.module_type.parse::<ModuleType>()?,
            title: ModuleTitle::new(row.title)?,
            slug: row.slug.map(ModuleSlug::new).transpose()?,
            summary: ModuleSummary::new(row.summary)?,
            description: ModuleDescription::new(row.description)?,
            category: row.category,
            custom_fields: row.custom_fields.0.into_iter().map(Into::into).collect(),
            highlights: row.highlights,
            cover_image: row.cover_image,
            gallery_images: row.gallery_images,
            published: row.published,
            created_at: row.created_at,
            updated_at: row.updated_at,
        })
    }
}

#[async_trait]
impl ModuleWriteRepository for PostgresModuleWriteRepository {
    async fn insert(&self, entry: NewModuleEntry) -> DomainResult<ModuleEntry> {
        let NewModuleEntry {
            module_type,
            title,
            slug,
            summary,
            description,
            category,
            custom_fields,
            highlights,
            cover_image,
            gallery_images,
            published,
            created_at,
            updated_at,
        } = entry;

        let slug_value: Option<String> = slug.map(Into::into);
        let fields: Vec<CustomFieldRecord> = custom_fields.into_iter().map(Into::into).collect();

        let sql = format!(
            "INSERT INTO module_entries \
             (module_type, title, slug, summary, description, category, custom_fields, \
              highlights, cover_image, gallery_images, published, created_at, updated_at) \
             VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11, $12, $13) \
             RETURNING {MODULE_COLUMNS}"
        );

        let row = sqlx::query_as::<_, ModuleEntryRow>(&sql)
            .bind(module_type.as_str())
            .bind(title.as_str())
            .bind(&slug_value)
            .bind(summary.as_str())
            .bind(description.as_str())
            .bind(&category)
            .bind(Json(fields))
            .bind(&highlights)
            .bind(&cover_image)
            .bind(&gallery_images)
            .bind(published)
            .bind(created_at)
            .bind(updated_at)
            .fetch_one(&self.pool)
            .await
            .map_err(|err| {
                if is_unique_violation(&err, CNT_MODULE_SLUG) {
                    DomainError::DuplicateSlug(slug_value.unwrap_or_default())
                } else {
                    map_sqlx(err)
                }
            })?;

        ModuleEntry::try_from(row)
    }

    async fn update(&self, update: ModuleUpdate) -> DomainResult<ModuleEntry> {
        let ModuleUpdate {
            id,
            title,
            summary,
            description,
            category,
            custom_fields,
            highlights,
            cover_image,
            gallery_images,
            published,
            updated_at,
        } = update;

        let mut builder: QueryBuilder<Postgres> =
            QueryBuilder::new("UPDATE module_entries SET updated_at = ");
        builder.push_bind(updated_at);

        if let Some(title) = title {
            builder.push(", title = ");
            builder.push_bind(String::from(title));
        }

        if let Some(summary) = summary {
            builder.push(", summary = ");
            builder.push_bind(String::from(summary));
        }

        if let Some(description) = description {
            builder.push(", description = ");
            builder.push_bind(String::from(description));
        }

        if let Some(category) = category {
            builder.push(", category = ");
            builder.push_bind(category);
        }

        if let Some(fields) = custom_fields {
            let records: Vec<CustomFieldRecord> = fields.into_iter().map(Into::into).collect();
            builder.push(", custom_fields = ");
            builder.push_bind(Json(records));
        }

        if let Some(highlights) = highlights {
            builder.push(", highlights = ");
            builder.push_bind(highlights);
        }

        if let Some(cover_image) = cover_image {
            builder.push(", cover_image = ");
            builder.push_bind(cover_image);
        }

        if let Some(gallery_images) = gallery_images {
            builder.push(", gallery_images = ");
            builder.push_bind(gallery_images);
        }

        if let Some(published) = published {
            builder.push(", published = ");
            builder.push_bind(published);
        }

        builder.push(" WHERE id = ");
        builder.push_bind(String::from(id));
        builder.push(format!(" RETURNING {MODULE_COLUMNS}"));

        let maybe_row = builder
            .build_query_as::<ModuleEntryRow>()
            .fetch_optional(&self.pool)
            .await
            .map_err(map_sqlx)?;

        let row =
            maybe_row.ok_or_else(|| DomainError::NotFound("module entry not found".into()))?;

        ModuleEntry::try_from(row)
    }

    async fn delete(&self, id: &ModuleId) -> DomainResult<()> {
        let result = sqlx::query("DELETE FROM module_entries WHERE id = $1")
            .bind(id.as_str())
            .execute(&self.pool)
            .await
            .map_err(map_sqlx)?;
        if result.rows_affected() == 0 {
            return Err(DomainError::NotFound("module entry not found".into()));
        }
        Ok(())
    }
}

impl PostgresModuleReadRepository {
    async fn fetch_one_where(
        &self,
        condition: &str,
        value: &str,
    ) -> DomainResult<Option<ModuleEntry>> {
        let sql = format!("SELECT {MODULE_COLUMNS} FROM module_entries WHERE {condition} LIMIT 1");
        let row = sqlx::query_as::<_, ModuleEntryRow>(&sql)
            .bind(value)
            .fetch_optional(&self.pool)
            .await
            .map_err(map_sqlx)?;

        row.map(ModuleEntry::try_from).transpose()
    }
}

#[async_trait]
impl IdentifierLookup for PostgresModuleReadRepository {
    type Entity = ModuleEntry;

    async fn lookup_by_id(&self, id: &str) -> DomainResult<Option<ModuleEntry>> {
        self.fetch_one_where("id = $1", &id.to_ascii_lowercase())
            .await
    }

    async fn lookup_by_slug(&self, slug: &str) -> DomainResult<Option<ModuleEntry>> {
        self.fetch_one_where("slug = $1", slug).await
    }

    async fn lookup_by_name_pattern(&self, pattern: &str) -> DomainResult<Option<ModuleEntry>> {
        // `~*` gives the case-insensitive match; which row wins on ambiguous
        // patterns is deliberately unspecified.
        self.fetch_one_where("title ~* $1", pattern).await
    }
}

#[async_trait]
impl ModuleReadRepository for PostgresModuleReadRepository {
    async fn find_by_id(&self, id: &ModuleId) -> DomainResult<Option<ModuleEntry>> {
        self.fetch_one_where("id = $1", id.as_str()).await
    }

    async fn list_by_module_type(
        &self,
        module_type: ModuleType,
        filter: &ModuleListFilter,
    ) -> DomainResult<Vec<ModuleEntry>> {
        let mut builder: QueryBuilder<Postgres> = QueryBuilder::new(format!(
            "SELECT {MODULE_COLUMNS} FROM module_entries WHERE module_type = "
        ));
        builder.push_bind(module_type.as_str());

        if let Some(published) = filter.published {
            builder.push(" AND published = ");
            builder.push_bind(published);
        }

        if let Some(category) = &filter.category {
            builder.push(" AND category = ");
            builder.push_bind(category.clone());
        }

        builder.push(" ORDER BY created_at DESC, id DESC");

        let rows = builder
            .build_query_as::<ModuleEntryRow>()
            .fetch_all(&self.pool)
            .await
            .map_err(map_sqlx)?;

        rows.into_iter().map(ModuleEntry::try_from).collect()
    }
}
