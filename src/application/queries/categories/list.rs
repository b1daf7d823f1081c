use super::CategoryQueryService;
use crate::{
    application::{dto::CategoryDto, error::ApplicationResult},
    domain::module_type::ModuleType,
};

pub struct ListCategoriesQuery {
    pub module_type: String,
}

impl CategoryQueryService {
    pub async fn list_categories(
        &self,
        query: ListCategoriesQuery,
    ) -> ApplicationResult<Vec<CategoryDto>> {
        let module_type = query.module_type.parse::<ModuleType>()?;
        let categories = self.repo.list_by_module_type(module_type).await?;
        Ok(categories.into_iter().map(Into::into).collect())
    }
}
