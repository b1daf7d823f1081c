// src/domain/module/entity.rs
use crate::domain::module::value_objects::{
    CustomField, ModuleDescription, ModuleId, ModuleSlug, ModuleSummary, ModuleTitle,
};
use crate::domain::module_type::ModuleType;
use chrono::{DateTime, Utc};

/// One piece of content belonging to exactly one vertical.
///
/// `slug` is `None` when the title reduced to nothing at creation time; such
/// entries are reachable by id only. `module_type` is fixed at creation — no
/// update path carries it.
#[derive(Debug, Clone)]
pub struct ModuleEntry {
    pub id: ModuleId,
    pub module_type: ModuleType,
    pub title: ModuleTitle,
    pub slug: Option<ModuleSlug>,
    pub summary: ModuleSummary,
    pub description: ModuleDescription,
    pub category: String,
    pub custom_fields: Vec<CustomField>,
    pub highlights: Vec<String>,
    pub cover_image: Option<String>,
    pub gallery_images: Vec<String>,
    pub published: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl ModuleEntry {
    pub fn publish(&mut self, now: DateTime<Utc>) {
        self.published = true;
        self.updated_at = now;
    }

    pub fn unpublish(&mut self, now: DateTime<Utc>) {
        self.published = false;
        self.updated_at = now;
    }
}

#[derive(Debug, Clone)]
pub struct NewModuleEntry {
    pub module_type: ModuleType,
    pub title: ModuleTitle,
    pub slug: Option<ModuleSlug>,
    pub summary: ModuleSummary,
    pub description: ModuleDescription,
    pub category: String,
    pub custom_fields: Vec<CustomField>,
    pub highlights: Vec<String>,
    pub cover_image: Option<String>,
    pub gallery_images: Vec<String>,
    pub published: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Partial update. There is deliberately no `slug` and no `module_type` field:
/// renaming an entry keeps its published URL stable, and entries never move
/// between verticals.
#[derive(Debug, Clone)]
pub struct ModuleUpdate {
    pub id: ModuleId,
    pub title: Option<ModuleTitle>,
    pub summary: Option<ModuleSummary>,
    pub description: Option<ModuleDescription>,
    pub category: Option<String>,
    pub custom_fields: Option<Vec<CustomField>>,
    pub highlights: Option<Vec<String>>,
    pub cover_image: Option<String>,
    pub gallery_images: Option<Vec<String>>,
    pub published: Option<bool>,
    pub updated_at: DateTime<Utc>,
}

impl ModuleUpdate {
    pub fn new(id: ModuleId, updated_at: DateTime<Utc>) -> Self {
        Self {
            id,
            title: None,
            summary: None,
            description: None,
            category: None,
            custom_fields: None,
            highlights: None,
            cover_image: None,
            gallery_images: None,
            published: None,
            updated_at,
        }
    }

    pub fn is_noop(&self) -> bool {
        self.title.is_none()
            && self.summary.is_none()
            && self.description.is_none()
            && self.category.is_none()
            && self.custom_fields.is_none()
            && self.highlights.is_none()
            && self.cover_image.is_none()
            && self.gallery_images.is_none()
            && self.published.is_none()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_entry() -> ModuleEntry {
        ModuleEntry {
            id: ModuleId::new("507f1f77bcf86cd799439011").unwrap(),
            module_type: ModuleType::StudyIndia,
            title: ModuleTitle::new("IIT Delhi - B.Tech").unwrap(),
            slug: Some(ModuleSlug::new("iit-delhi-b-tech").unwrap()),
            summary: ModuleSummary::new("Undergraduate engineering").unwrap(),
            description: ModuleDescription::new("Four-year programme").unwrap(),
            category: "Engineering".into(),
            custom_fields: vec![CustomField {
                key: "fees".into(),
                value: "2.2L/year".into(),
            }],
            highlights: vec!["NIRF #2".into()],
            cover_image: None,
            gallery_images: vec![],
            published: false,
            created_at: Utc::now(),
            updated_at: Utc::now(),
        }
    }

    #[test]
    fn publish_toggle_is_symmetric() {
        let mut entry = sample_entry();
        let now = Utc::now();
        entry.publish(now);
        assert!(entry.published);
        entry.unpublish(now);
        assert!(!entry.published);
    }

    #[test]
    fn empty_update_is_noop() {
        let entry = sample_entry();
        let update = ModuleUpdate::new(entry.id.clone(), Utc::now());
        assert!(update.is_noop());
    }
}
