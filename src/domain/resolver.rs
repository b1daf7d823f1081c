// src/domain/resolver.rs
use crate::domain::errors::DomainResult;
use async_trait::async_trait;

/// Record ids are document-store style: 24 hexadecimal characters.
pub fn is_record_id(value: &str) -> bool {
    value.len() == 24 && value.bytes().all(|b| b.is_ascii_hexdigit())
}

/// Builds the anchored fallback pattern for a route identifier: hyphens in the
/// identifier match any run of hyphens or whitespace in the stored name, so
/// `harvard-university` still finds the record titled "Harvard University".
///
/// The output must parse under both the Rust `regex` engine and Postgres `~*`,
/// hence the POSIX `[:space:]` class instead of `\s`.
pub fn name_pattern(identifier: &str) -> String {
    let escaped = regex::escape(identifier);
    let flexible = escaped.replace(r"\-", "[-[:space:]]+");
    format!("^{flexible}$")
}

/// The minimal lookup capability the resolver needs from a store. Adapters
/// decide which field `lookup_by_name_pattern` matches (title for module
/// entries) and apply the pattern case-insensitively, anchored as given.
#[async_trait]
pub trait IdentifierLookup: Send + Sync {
    type Entity: Send;

    async fn lookup_by_id(&self, id: &str) -> DomainResult<Option<Self::Entity>>;
    async fn lookup_by_slug(&self, slug: &str) -> DomainResult<Option<Self::Entity>>;
    async fn lookup_by_name_pattern(&self, pattern: &str) -> DomainResult<Option<Self::Entity>>;
}

/// Resolves a route identifier that may be a record id, a stored slug, or a
/// stale/free-text name. Steps are tried in order and the first hit wins; a
/// miss falls through to the next step.
///
/// Read-only and deliberately infallible: storage failures are logged and
/// reported as `None` so callers render "not found" instead of surfacing a
/// data-layer error.
pub async fn resolve<L>(store: &L, identifier: &str) -> Option<L::Entity>
where
    L: IdentifierLookup + ?Sized,
{
    if identifier.is_empty() {
        return None;
    }

    if is_record_id(identifier) {
        match store.lookup_by_id(identifier).await {
            Ok(Some(hit)) => return Some(hit),
            Ok(None) => {}
            Err(err) => {
                tracing::warn!(identifier, error = %err, "id lookup failed");
                return None;
            }
        }
    }

    match store.lookup_by_slug(identifier).await {
        Ok(Some(hit)) => return Some(hit),
        Ok(None) => {}
        Err(err) => {
            tracing::warn!(identifier, error = %err, "slug lookup failed");
            return None;
        }
    }

    match store.lookup_by_name_pattern(&name_pattern(identifier)).await {
        Ok(hit) => hit,
        Err(err) => {
            tracing::warn!(identifier, error = %err, "name fallback lookup failed");
            None
        }
    }
}
