use std::sync::Arc;

use crate::{
    description::DescriptionDocument, services::description_service::DescriptionService,
    state::AppState,
};

#[derive(Clone)]
pub struct ServiceContext {
    document: Arc<DescriptionDocument>,
}

impl ServiceContext {
    pub fn new(document: Arc<DescriptionDocument>) -> Self {
        Self { document }
    }

    pub fn from_state(state: &AppState) -> Self {
        Self::new(Arc::clone(&state.document))
    }

    pub fn description(&self) -> DescriptionService {
        DescriptionService::new(Arc::clone(&self.document))
    }
}
