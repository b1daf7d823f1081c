use super::ModuleQueryService;
use crate::{
    application::{dto::ModuleEntryDto, error::ApplicationResult},
    domain::module::ModuleListFilter,
    domain::module_type::ModuleType,
};

/// `published: None` lists everything; admin handlers pass that, public
/// handlers pin `Some(true)`. The distinction lives in the caller, not here.
pub struct ListModulesQuery {
    pub module_type: String,
    pub published: Option<bool>,
    pub category: Option<String>,
}

impl ModuleQueryService {
    pub async fn list_modules(
        &self,
        query: ListModulesQuery,
    ) -> ApplicationResult<Vec<ModuleEntryDto>> {
        let module_type = query.module_type.parse::<ModuleType>()?;
        let filter = ModuleListFilter {
            published: query.published,
            category: query.category,
        };

        let entries = self
            .read_repo
            .list_by_module_type(module_type, &filter)
            .await?;

        Ok(entries.into_iter().map(Into::into).collect())
    }
}
