use crate::domain::errors::{DomainError, DomainResult};
use crate::domain::resolver::is_record_id;
use std::fmt;

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ModuleId(String);

impl ModuleId {
    pub fn new(value: impl Into<String>) -> DomainResult<Self> {
        let value = value.into().to_ascii_lowercase();
        if !is_record_id(&value) {
            return Err(DomainError::Validation(
                "module id must be a 24-character hex string".into(),
            ));
        }
        Ok(Self(value))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ModuleId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<ModuleId> for String {
    fn from(value: ModuleId) -> Self {
        value.0
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ModuleTitle(String);

impl ModuleTitle {
    pub fn new(value: impl Into<String>) -> DomainResult<Self> {
        let value = value.into();
        if value.trim().is_empty() {
            return Err(DomainError::Validation("title cannot be empty".into()));
        }
        Ok(Self(value))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ModuleTitle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<ModuleTitle> for String {
    fn from(value: ModuleTitle) -> Self {
        value.0
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ModuleSlug(String);

impl ModuleSlug {
    pub fn new(value: impl Into<String>) -> DomainResult<Self> {
        let value = value.into();
        if value.trim().is_empty() {
            return Err(DomainError::Validation("slug cannot be empty".into()));
        }
        Ok(Self(value))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ModuleSlug {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<ModuleSlug> for String {
    fn from(value: ModuleSlug) -> Self {
        value.0
    }
}

/// Short teaser text shown on listing cards.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ModuleSummary(String);

impl ModuleSummary {
    pub fn new(value: impl Into<String>) -> DomainResult<Self> {
        let value = value.into();
        if value.trim().is_empty() {
            return Err(DomainError::Validation("summary cannot be empty".into()));
        }
        Ok(Self(value))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<ModuleSummary> for String {
    fn from(value: ModuleSummary) -> Self {
        value.0
    }
}

/// Full detail-page body text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ModuleDescription(String);

impl ModuleDescription {
    pub fn new(value: impl Into<String>) -> DomainResult<Self> {
        let value = value.into();
        if value.trim().is_empty() {
            return Err(DomainError::Validation("description cannot be empty".into()));
        }
        Ok(Self(value))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<ModuleDescription> for String {
    fn from(value: ModuleDescription) -> Self {
        value.0
    }
}

/// One vertical-specific attribute. Twelve structurally different verticals
/// (loan interest rates, job salary bands, course fees) share one schema by
/// carrying their particulars as an ordered key/value sequence instead of
/// dedicated columns.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CustomField {
    pub key: String,
    pub value: String,
}
