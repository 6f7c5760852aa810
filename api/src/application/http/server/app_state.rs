use std::sync::Arc;

use aerodesk_core::application::AerodeskService;

use crate::args::Args;

#[derive(Clone)]
pub struct AppState {
    pub args: Arc<Args>,
    pub service: AerodeskService,
}

impl AppState {
    pub fn new(args: Arc<Args>, service: AerodeskService) -> Self {
        Self { args, service }
    }
}
