// tests/support/helpers.rs
use std::sync::Arc;

use super::mocks::{FixedClock, InMemoryCategories, InMemoryModules};
use compass_core::application::ports::{time::Clock, util::SlugGenerator};
use compass_core::application::services::ApplicationServices;
use compass_core::domain::category::CategoryRepository;
use compass_core::domain::module::{ModuleReadRepository, ModuleWriteRepository};
use compass_core::infrastructure::util::DefaultSlugGenerator;
use compass_core::presentation::http::{routes::build_router, state::HttpState};

pub struct TestContext {
    pub services: Arc<ApplicationServices>,
    pub modules: Arc<InMemoryModules>,
    pub categories: Arc<InMemoryCategories>,
}

/// Wire the application services against in-memory repositories, the real
/// slug generator, and a fixed clock.
pub fn build_context() -> TestContext {
    let modules = Arc::new(InMemoryModules::default());
    let categories = Arc::new(InMemoryCategories::default());

    let module_write: Arc<dyn ModuleWriteRepository> = modules.clone();
    let module_read: Arc<dyn ModuleReadRepository> = modules.clone();
    let category_repo: Arc<dyn CategoryRepository> = categories.clone();
    let clock: Arc<dyn Clock> = Arc::new(FixedClock);
    let slugger: Arc<dyn SlugGenerator> = Arc::new(DefaultSlugGenerator);

    let services = Arc::new(ApplicationServices::new(
        module_write,
        module_read,
        category_repo,
        clock,
        slugger,
    ));

    TestContext {
        services,
        modules,
        categories,
    }
}

pub fn make_router(context: &TestContext) -> axum::Router {
    build_router(HttpState {
        services: Arc::clone(&context.services),
    })
}
