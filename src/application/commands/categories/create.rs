use super::CategoryCommandService;
use crate::{
    application::{dto::CategoryDto, error::ApplicationResult},
    domain::category::{CategoryName, NewCategory},
    domain::module_type::ModuleType,
};

pub struct CreateCategoryCommand {
    pub name: String,
    pub module_type: String,
}

impl CategoryCommandService {
    /// The only validation beyond a known vertical and a non-empty name is
    /// the per-vertical uniqueness constraint enforced by the store.
    pub async fn create_category(
        &self,
        command: CreateCategoryCommand,
    ) -> ApplicationResult<CategoryDto> {
        let module_type = command.module_type.parse::<ModuleType>()?;
        let name = CategoryName::new(command.name)?;

        let created = self
            .repo
            .insert(NewCategory {
                name,
                module_type,
                created_at: self.clock.now(),
            })
            .await?;

        Ok(created.into())
    }
}
