use std::sync::Arc;

use crate::{config::AppConfig, description::DescriptionDocument};

#[derive(Clone)]
pub struct AppState {
    pub config: AppConfig,
    pub document: Arc<DescriptionDocument>,
}

impl AppState {
    pub fn new(config: AppConfig, document: DescriptionDocument) -> Arc<Self> {
        Arc::new(Self {
            config,
            document: Arc::new(document),
        })
    }
}
