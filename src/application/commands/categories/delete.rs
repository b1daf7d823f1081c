use super::CategoryCommandService;
use crate::{application::error::ApplicationResult, domain::category::CategoryId};

pub struct DeleteCategoryCommand {
    pub id: String,
}

impl CategoryCommandService {
    /// Unconditional. Module entries carrying this category's name keep it;
    /// orphaned labels are accepted by design.
    pub async fn delete_category(&self, command: DeleteCategoryCommand) -> ApplicationResult<()> {
        let id = CategoryId::new(command.id)?;
        self.repo.delete(&id).await?;
        Ok(())
    }
}
