// src/application/commands/modules/create.rs
use super::ModuleCommandService;
use crate::{
    application::{
        dto::{CustomFieldDto, ModuleEntryDto},
        error::ApplicationResult,
    },
    domain::module::{
        ModuleDescription, ModuleSlug, ModuleSummary, ModuleTitle, NewModuleEntry,
    },
    domain::module_type::ModuleType,
};

pub struct CreateModuleCommand {
    pub module_type: String,
    pub title: String,
    pub summary: String,
    pub description: String,
    pub category: String,
    pub custom_fields: Vec<CustomFieldDto>,
    pub highlights: Vec<String>,
    pub cover_image: Option<String>,
    pub gallery_images: Vec<String>,
    pub slug: Option<String>,
    pub publish: bool,
}

impl CreateModuleCommand {
    pub fn builder() -> CreateModuleCommandBuilder {
        CreateModuleCommandBuilder::default()
    }
}

#[derive(Default)]
pub struct CreateModuleCommandBuilder {
    module_type: Option<String>,
    title: Option<String>,
    summary: Option<String>,
    description: Option<String>,
    category: String,
    custom_fields: Vec<CustomFieldDto>,
    highlights: Vec<String>,
    cover_image: Option<String>,
    gallery_images: Vec<String>,
    slug: Option<String>,
    publish: bool,
}

impl CreateModuleCommandBuilder {
    pub fn module_type(mut self, module_type: impl Into<String>) -> Self {
        self.module_type = Some(module_type.into());
        self
    }

    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    pub fn summary(mut self, summary: impl Into<String>) -> Self {
        self.summary = Some(summary.into());
        self
    }

    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    pub fn category(mut self, category: impl Into<String>) -> Self {
        self.category = category.into();
        self
    }

    pub fn custom_field(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.custom_fields.push(CustomFieldDto {
            key: key.into(),
            value: value.into(),
        });
        self
    }

    pub fn highlight(mut self, highlight: impl Into<String>) -> Self {
        self.highlights.push(highlight.into());
        self
    }

    pub fn cover_image(mut self, reference: impl Into<String>) -> Self {
        self.cover_image = Some(reference.into());
        self
    }

    pub fn gallery_image(mut self, reference: impl Into<String>) -> Self {
        self.gallery_images.push(reference.into());
        self
    }

    pub fn slug(mut self, slug: impl Into<String>) -> Self {
        self.slug = Some(slug.into());
        self
    }

    pub fn publish(mut self, publish: bool) -> Self {
        self.publish = publish;
        self
    }

    pub fn build(self) -> Result<CreateModuleCommand, &'static str> {
        Ok(CreateModuleCommand {
            module_type: self.module_type.ok_or("module_type is required")?,
            title: self.title.ok_or("title is required")?,
            summary: self.summary.ok_or("summary is required")?,
            description: self.description.ok_or("description is required")?,
            category: self.category,
            custom_fields: self.custom_fields,
            highlights: self.highlights,
            cover_image: self.cover_image,
            gallery_images: self.gallery_images,
            slug: self.slug,
            publish: self.publish,
        })
    }
}

impl ModuleCommandService {
    pub async fn create_module(
        &self,
        command: CreateModuleCommand,
    ) -> ApplicationResult<ModuleEntryDto> {
        let module_type = command.module_type.parse::<ModuleType>()?;
        let title = ModuleTitle::new(command.title)?;
        let summary = ModuleSummary::new(command.summary)?;
        let description = ModuleDescription::new(command.description)?;

        // An explicit slug is stored as supplied; otherwise it is derived from
        // the title exactly once, here. Uniqueness is left to the store.
        let slug = match command.slug {
            Some(explicit) => Some(ModuleSlug::new(explicit)?),
            None => self.slug_service.derive(&title)?,
        };

        let now = self.clock.now();
        let entry = NewModuleEntry {
            module_type,
            title,
            slug,
            summary,
            description,
            category: command.category,
            custom_fields: command.custom_fields.into_iter().map(Into::into).collect(),
            highlights: command.highlights,
            cover_image: command.cover_image,
            gallery_images: command.gallery_images,
            published: command.publish,
            created_at: now,
            updated_at: now,
        };

        let created = self.write_repo.insert(entry).await?;
        Ok(created.into())
    }
}
