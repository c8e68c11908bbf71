use std::sync::Arc;

use serde_json::Value;

use crate::description::DescriptionDocument;

#[derive(Clone)]
pub struct DescriptionService {
    document: Arc<DescriptionDocument>,
}

impl DescriptionService {
    pub fn new(document: Arc<DescriptionDocument>) -> Self {
        Self { document }
    }

    /// Value stored under `category`, or the whole document when the
    /// category is absent, empty or unknown.
    pub fn describe(&self, category: Option<&str>) -> &Value {
        let Some(name) = category.filter(|name| !name.is_empty()) else {
            return self.document.root();
        };

        match self.document.category(name) {
            Some(value) => value,
            None => {
                tracing::debug!(category = name, "unknown category, serving full document");
                self.document.root()
            }
        }
    }
}
