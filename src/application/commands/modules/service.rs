// src/application/commands/modules/service.rs
use std::sync::Arc;

use crate::{
    application::ports::time::Clock,
    domain::module::{
        ModuleReadRepository, ModuleWriteRepository, services::ModuleSlugService,
    },
};

pub struct ModuleCommandService {
    pub(super) write_repo: Arc<dyn ModuleWriteRepository>,
    pub(super) read_repo: Arc<dyn ModuleReadRepository>,
    pub(super) slug_service: Arc<ModuleSlugService>,
    pub(super) clock: Arc<dyn Clock>,
}

impl ModuleCommandService {
    pub fn new(
        write_repo: Arc<dyn ModuleWriteRepository>,
        read_repo: Arc<dyn ModuleReadRepository>,
        slug_service: Arc<ModuleSlugService>,
        clock: Arc<dyn Clock>,
    ) -> Self {
        Self {
            write_repo,
            read_repo,
            slug_service,
            clock,
        }
    }
}
