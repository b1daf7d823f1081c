use super::ModuleCommandService;
use crate::{
    application::error::ApplicationResult,
    domain::module::ModuleId,
};

pub struct DeleteModuleCommand {
    pub id: String,
}

impl ModuleCommandService {
    /// Hard delete. No cascade: categories and uploaded assets referenced by
    /// the entry are owned elsewhere and stay behind.
    pub async fn delete_module(&self, command: DeleteModuleCommand) -> ApplicationResult<()> {
        let id = ModuleId::new(command.id)?;
        self.write_repo.delete(&id).await?;
        Ok(())
    }
}
