use super::ModuleCommandService;
use crate::{
    application::{
        dto::ModuleEntryDto,
        error::{ApplicationError, ApplicationResult},
    },
    domain::module::{ModuleId, ModuleUpdate},
};

pub struct SetPublishStateCommand {
    pub id: String,
    pub publish: bool,
}

impl ModuleCommandService {
    /// Draft/published is a symmetric toggle with no terminal state and no
    /// transition history.
    pub async fn set_publish_state(
        &self,
        command: SetPublishStateCommand,
    ) -> ApplicationResult<ModuleEntryDto> {
        let id = ModuleId::new(command.id)?;
        let mut entry = self
            .read_repo
            .find_by_id(&id)
            .await?
            .ok_or_else(|| ApplicationError::not_found("module entry not found"))?;

        if entry.published == command.publish {
            return Ok(entry.into());
        }

        let now = self.clock.now();
        if command.publish {
            entry.publish(now);
        } else {
            entry.unpublish(now);
        }

        let mut update = ModuleUpdate::new(id, now);
        update.published = Some(entry.published);
        let updated = self.write_repo.update(update).await?;
        Ok(updated.into())
    }
}
