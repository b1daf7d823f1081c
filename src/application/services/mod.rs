// src/application/services/mod.rs
use std::sync::Arc;

use crate::{
    application::{
        commands::{categories::CategoryCommandService, modules::ModuleCommandService},
        ports::{time::Clock, util::SlugGenerator},
        queries::{categories::CategoryQueryService, modules::ModuleQueryService},
    },
    domain::{
        category::CategoryRepository,
        module::{ModuleReadRepository, ModuleWriteRepository, services::ModuleSlugService},
    },
};

pub struct ApplicationServices {
    pub module_commands: Arc<ModuleCommandService>,
    pub module_queries: Arc<ModuleQueryService>,
    pub category_commands: Arc<CategoryCommandService>,
    pub category_queries: Arc<CategoryQueryService>,
}

impl ApplicationServices {
    pub fn new(
        module_write_repo: Arc<dyn ModuleWriteRepository>,
        module_read_repo: Arc<dyn ModuleReadRepository>,
        category_repo: Arc<dyn CategoryRepository>,
        clock: Arc<dyn Clock>,
        slugger: Arc<dyn SlugGenerator>,
    ) -> Self {
        let slug_service = Arc::new(ModuleSlugService::new(Arc::clone(&slugger)));

        let module_commands = Arc::new(ModuleCommandService::new(
            Arc::clone(&module_write_repo),
            Arc::clone(&module_read_repo),
            Arc::clone(&slug_service),
            Arc::clone(&clock),
        ));

        let module_queries = Arc::new(ModuleQueryService::new(Arc::clone(&module_read_repo)));

        let category_commands = Arc::new(CategoryCommandService::new(
            Arc::clone(&category_repo),
            Arc::clone(&clock),
        ));

        let category_queries = Arc::new(CategoryQueryService::new(Arc::clone(&category_repo)));

        Self {
            module_commands,
            module_queries,
            category_commands,
            category_queries,
        }
    }
}
