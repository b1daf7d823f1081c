use super::ModuleQueryService;
use crate::{
    application::{
        dto::ModuleEntryDto,
        error::{ApplicationError, ApplicationResult},
    },
    domain::resolver,
};

/// The identifier may be a record id, a stored slug, or a stale hyphenated
/// title; one route parameter serves all three shapes.
pub struct GetModuleByIdentifierQuery {
    pub identifier: String,
}

impl ModuleQueryService {
    pub async fn get_module_by_identifier(
        &self,
        query: GetModuleByIdentifierQuery,
    ) -> ApplicationResult<ModuleEntryDto> {
        resolver::resolve(self.read_repo.as_ref(), &query.identifier)
            .await
            .map(Into::into)
            .ok_or_else(|| ApplicationError::not_found("module entry not found"))
    }
}
