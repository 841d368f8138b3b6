use std::sync::Arc;

use crate::catalog::Catalog;
use crate::services::assistant::AssistantClient;
use crate::services::classifier::Classifier;

/// Shared application state passed to all route handlers.
#[derive(Clone)]
pub struct AppState {
    pub catalog: Arc<Catalog>,
    pub assistant: Arc<AssistantClient>,
    pub classifier: Arc<dyn Classifier>,
}

impl AppState {
    pub fn new(
        catalog: Catalog,
        assistant: AssistantClient,
        classifier: impl Classifier + 'static,
    ) -> Self {
        Self {
            catalog: Arc::new(catalog),
            assistant: Arc::new(assistant),
            classifier: Arc::new(classifier),
        }
    }
}
