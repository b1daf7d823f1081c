use super::ModuleCommandService;
use crate::{
    application::{
        dto::{CustomFieldDto, ModuleEntryDto},
        error::{ApplicationError, ApplicationResult},
    },
    domain::module::{
        ModuleDescription, ModuleId, ModuleSummary, ModuleTitle, ModuleUpdate,
    },
};

pub struct UpdateModuleCommand {
    pub id: String,
    pub title: Option<String>,
    pub summary: Option<String>,
    pub description: Option<String>,
    pub category: Option<String>,
    pub custom_fields: Option<Vec<CustomFieldDto>>,
    pub highlights: Option<Vec<String>>,
    pub cover_image: Option<String>,
    pub gallery_images: Option<Vec<String>>,
    pub publish: Option<bool>,
}

impl ModuleCommandService {
    /// Partial update. A changed title does NOT regenerate the slug: renamed
    /// entries keep the URL they were published under, stale as it may read.
    pub async fn update_module(
        &self,
        command: UpdateModuleCommand,
    ) -> ApplicationResult<ModuleEntryDto> {
        let id = ModuleId::new(command.id)?;
        let existing = self
            .read_repo
            .find_by_id(&id)
            .await?
            .ok_or_else(|| ApplicationError::not_found("module entry not found"))?;

        let mut update = ModuleUpdate::new(id, self.clock.now());
        update.title = command.title.map(ModuleTitle::new).transpose()?;
        update.summary = command.summary.map(ModuleSummary::new).transpose()?;
        update.description = command
            .description
            .map(ModuleDescription::new)
            .transpose()?;
        update.category = command.category;
        update.custom_fields = command
            .custom_fields
            .map(|fields| fields.into_iter().map(Into::into).collect());
        update.highlights = command.highlights;
        update.cover_image = command.cover_image;
        update.gallery_images = command.gallery_images;
        update.published = command.publish;

        if update.is_noop() {
            return Ok(existing.into());
        }

        let updated = self.write_repo.update(update).await?;
        Ok(updated.into())
    }
}
