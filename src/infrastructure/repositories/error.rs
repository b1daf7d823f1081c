use crate::domain::errors::DomainError;

pub(crate) const CNT_MODULE_SLUG: &str = "module_entries_slug_key";
pub(crate) const CNT_CATEGORY_NAME_TYPE: &str = "module_categories_name_module_type_key";

/// True when `err` is a violation of the named unique constraint. Callers use
/// this to attach the offending value before falling back to `map_sqlx`.
pub(crate) fn is_unique_violation(err: &sqlx::Error, constraint: &str) -> bool {
    matches!(err, sqlx::Error::Database(db_err) if db_err.constraint() == Some(constraint))
}

pub(crate) fn map_sqlx(err: sqlx::Error) -> DomainError {
    match &err {
        sqlx::Error::Database(db_err) => {
            if let Some(constraint) = db_err.constraint() {
                return match constraint {
                    CNT_MODULE_SLUG => DomainError::DuplicateSlug(db_err.message().to_string()),
                    CNT_CATEGORY_NAME_TYPE => {
                        DomainError::DuplicateCategory(db_err.message().to_string())
                    }
                    other => DomainError::Conflict(format!("constraint violation: {other}")),
                };
            }

            if let Some(code) = db_err.code() {
                if code.as_ref() == "23505" {
                    return DomainError::Conflict("unique constraint violated".into());
                }
            }

            DomainError::StorageUnavailable(db_err.message().to_string())
        }
        sqlx::Error::RowNotFound => DomainError::NotFound("record not found".into()),
        _ => DomainError::StorageUnavailable(err.to_string()),
    }
}
