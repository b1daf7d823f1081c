// src/domain/module/services/mod.rs
use std::sync::Arc;

use crate::application::ports::util::SlugGenerator;
use crate::domain::errors::DomainResult;
use crate::domain::module::value_objects::{ModuleSlug, ModuleTitle};

/// Derives the URL slug for a new module entry. Collision handling is not
/// done here — slug uniqueness is a storage constraint and a colliding write
/// fails rather than getting a suffixed retry.
pub struct ModuleSlugService {
    generator: Arc<dyn SlugGenerator>,
}

impl ModuleSlugService {
    pub fn new(generator: Arc<dyn SlugGenerator>) -> Self {
        Self { generator }
    }

    /// A title that reduces to nothing produces no slug at all; the entry is
    /// stored slugless and stays reachable by id only.
    pub fn derive(&self, title: &ModuleTitle) -> DomainResult<Option<ModuleSlug>> {
        let base = self.generator.slugify(title.as_str());
        if base.is_empty() {
            return Ok(None);
        }
        ModuleSlug::new(base).map(Some)
    }
}
