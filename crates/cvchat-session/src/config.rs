/// Orchestrator configuration, injected at construction.
///
/// There is deliberately no ambient/global configuration read at call
/// time: the assistant to run against and the index to resolve documents
/// from are fixed when the engine is built.
#[derive(Debug, Clone)]
pub struct SessionConfig {
    /// Default assistant id every run is started against.
    pub assistant_id: String,
    /// Search index holding the resume documents.
    pub index: String,
}

impl SessionConfig {
    pub fn new(assistant_id: impl Into<String>, index: impl Into<String>) -> Self {
        Self {
            assistant_id: assistant_id.into(),
            index: index.into(),
        }
    }
}
