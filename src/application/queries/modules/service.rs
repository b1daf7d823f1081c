use std::sync::Arc;

use crate::domain::module::ModuleReadRepository;

pub struct ModuleQueryService {
    pub(super) read_repo: Arc<dyn ModuleReadRepository>,
}

impl ModuleQueryService {
    pub fn new(read_repo: Arc<dyn ModuleReadRepository>) -> Self {
        Self { read_repo }
    }
}
