use tracing::warn;

use cvchat_search::error::Result;
use cvchat_search::{DocumentStore, ResumeSummary};

/// How a list of document ids is resolved against the store.
///
/// Both behaviors exist in the session lifecycle on purpose: session
/// start must not create a thread over partial context, while reading an
/// existing thread's documents should not let one bad id hide the rest.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResolutionPolicy {
    /// One batched fetch; any failure is fatal to the whole resolution.
    Strict,
    /// Sequential per-id fetches; failures are logged and skipped, the
    /// result is the best-effort subset.
    Lenient,
}

pub async fn resolve_documents(
    store: &dyn DocumentStore,
    index: &str,
    ids: &[String],
    policy: ResolutionPolicy,
) -> Result<Vec<ResumeSummary>> {
    match policy {
        ResolutionPolicy::Strict => store.fetch_by_ids(index, ids).await,
        ResolutionPolicy::Lenient => {
            let mut documents = Vec::with_capacity(ids.len());
            for id in ids {
                match store.fetch_by_id(index, id).await {
                    Ok(document) => documents.push(document),
                    Err(e) => warn!("skipping resume {}: {}", id, e),
                }
            }
            Ok(documents)
        }
    }
}
