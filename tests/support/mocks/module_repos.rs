// tests/support/mocks/module_repos.rs
use async_trait::async_trait;
use compass_core::domain::errors::{DomainError, DomainResult};
use compass_core::domain::module::{
    ModuleEntry, ModuleId, ModuleListFilter, ModuleReadRepository, ModuleUpdate,
    ModuleWriteRepository, NewModuleEntry,
};
use compass_core::domain::module_type::ModuleType;
use compass_core::domain::resolver::IdentifierLookup;
use std::sync::{
    Mutex,
    atomic::{AtomicU64, Ordering},
};

/// In-memory stand-in for the Postgres module repositories. Mirrors the real
/// adapter's behavior: global slug uniqueness on insert, NULL slugs exempt,
/// newest-first listing, case-insensitive regex for the name fallback.
#[derive(Default)]
pub struct InMemoryModules {
    entries: Mutex<Vec<ModuleEntry>>,
    next_id: AtomicU64,
}

impl InMemoryModules {
    /// Seed an entry directly, bypassing create-time slug derivation. Used to
    /// model records that predate slugs.
    pub fn seed(&self, entry: NewModuleEntry) -> ModuleEntry {
        let id = self.fresh_id();
        let stored = materialize(entry, id);
        self.entries.lock().unwrap().push(stored.clone());
        stored
    }

    pub fn len(&self) -> usize {
        self.entries.lock().unwrap().len()
    }

    fn fresh_id(&self) -> ModuleId {
        let n = self.next_id.fetch_add(1, Ordering::SeqCst) + 1;
        ModuleId::new(format!("{n:024x}")).unwrap()
    }
}

fn materialize(entry: NewModuleEntry, id: ModuleId) -> ModuleEntry {
    ModuleEntry {
        id,
        module_type: entry.module_type,
        title: entry.title,
        slug: entry.slug,
        summary: entry.summary,
        description: entry.description,
        category: entry.category,
        custom_fields: entry.custom_fields,
        highlights: entry.highlights,
        cover_image: entry.cover_image,
        gallery_images: entry.gallery_images,
        published: entry.published,
        created_at: entry.created_at,
        updated_at: entry.updated_at,
    }
}

#[async_trait]
impl ModuleWriteRepository for InMemoryModules {
    async fn insert(&self, entry: NewModuleEntry) -> DomainResult<ModuleEntry> {
        let id = self.fresh_id();
        let mut entries = self.entries.lock().unwrap();

        if let Some(slug) = &entry.slug {
            let taken = entries
                .iter()
                .any(|existing| existing.slug.as_ref() == Some(slug));
            if taken {
                return Err(DomainError::DuplicateSlug(slug.as_str().into()));
            }
        }

        let stored = materialize(entry, id);
        entries.push(stored.clone());
        Ok(stored)
    }

    async fn update(&self, update: ModuleUpdate) -> DomainResult<ModuleEntry> {
        let mut entries = self.entries.lock().unwrap();
        let entry = entries
            .iter_mut()
            .find(|entry| entry.id == update.id)
            .ok_or_else(|| DomainError::NotFound("module entry not found".into()))?;

        if let Some(title) = update.title {
            entry.title = title;
        }
        if let Some(summary) = update.summary {
            entry.summary = summary;
        }
        if let Some(description) = update.description {
            entry.description = description;
        }
        if let Some(category) = update.category {
            entry.category = category;
        }
        if let Some(custom_fields) = update.custom_fields {
            entry.custom_fields = custom_fields;
        }
        if let Some(highlights) = update.highlights {
            entry.highlights = highlights;
        }
        if let Some(cover_image) = update.cover_image {
            entry.cover_image = Some(cover_image);
        }
        if let Some(gallery_images) = update.gallery_images {
            entry.gallery_images = gallery_images;
        }
        if let Some(published) = update.published {
            entry.published = published;
        }
        entry.updated_at = update.updated_at;

        Ok(entry.clone())
    }

    async fn delete(&self, id: &ModuleId) -> DomainResult<()> {
        let mut entries = self.entries.lock().unwrap();
        let before = entries.len();
        entries.retain(|entry| entry.id != *id);
        if entries.len() == before {
            return Err(DomainError::NotFound("module entry not found".into()));
        }
        Ok(())
    }
}

#[async_trait]
impl IdentifierLookup for InMemoryModules {
    type Entity = ModuleEntry;

    async fn lookup_by_id(&self, id: &str) -> DomainResult<Option<ModuleEntry>> {
        let id = id.to_ascii_lowercase();
        let entries = self.entries.lock().unwrap();
        Ok(entries.iter().find(|entry| entry.id.as_str() == id).cloned())
    }

    async fn lookup_by_slug(&self, slug: &str) -> DomainResult<Option<ModuleEntry>> {
        let entries = self.entries.lock().unwrap();
        Ok(entries
            .iter()
            .find(|entry| entry.slug.as_ref().is_some_and(|s| s.as_str() == slug))
            .cloned())
    }

    async fn lookup_by_name_pattern(&self, pattern: &str) -> DomainResult<Option<ModuleEntry>> {
        let re = regex::RegexBuilder::new(pattern)
            .case_insensitive(true)
            .build()
            .map_err(|err| DomainError::Validation(err.to_string()))?;
        let entries = self.entries.lock().unwrap();
        Ok(entries
            .iter()
            .find(|entry| re.is_match(entry.title.as_str()))
            .cloned())
    }
}

#[async_trait]
impl ModuleReadRepository for InMemoryModules {
    async fn find_by_id(&self, id: &ModuleId) -> DomainResult<Option<ModuleEntry>> {
        self.lookup_by_id(id.as_str()).await
    }

    async fn list_by_module_type(
        &self,
        module_type: ModuleType,
        filter: &ModuleListFilter,
    ) -> DomainResult<Vec<ModuleEntry>> {
        let entries = self.entries.lock().unwrap();
        let mut matched: Vec<ModuleEntry> = entries
            .iter()
            .filter(|entry| entry.module_type == module_type)
            .filter(|entry| {
                filter
                    .published
                    .is_none_or(|published| entry.published == published)
            })
            .filter(|entry| {
                filter
                    .category
                    .as_ref()
                    .is_none_or(|category| &entry.category == category)
            })
            .cloned()
            .collect();

        matched.sort_by(|a, b| {
            b.created_at
                .cmp(&a.created_at)
                .then_with(|| b.id.as_str().cmp(a.id.as_str()))
        });
        Ok(matched)
    }
}

/// A lookup source whose storage is down; every call fails.
pub struct FailingLookup;

#[async_trait]
impl IdentifierLookup for FailingLookup {
    type Entity = ModuleEntry;

    async fn lookup_by_id(&self, _id: &str) -> DomainResult<Option<ModuleEntry>> {
        Err(DomainError::StorageUnavailable("connection refused".into()))
    }

    async fn lookup_by_slug(&self, _slug: &str) -> DomainResult<Option<ModuleEntry>> {
        Err(DomainError::StorageUnavailable("connection refused".into()))
    }

    async fn lookup_by_name_pattern(&self, _pattern: &str) -> DomainResult<Option<ModuleEntry>> {
        Err(DomainError::StorageUnavailable("connection refused".into()))
    }
}
