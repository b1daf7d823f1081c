// src/application/ports/util.rs

/// Free text to URL-safe slug. Pure; collision detection is the storage
/// layer's job.
pub trait SlugGenerator: Send + Sync {
    fn slugify(&self, input: &str) -> String;
}
