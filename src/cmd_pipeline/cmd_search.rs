use async_trait::async_trait;
use clap::Args;
use tracing::info;

use super::interface::{HitList, PipelineCommand, PipelineValues};

use crate::abstract_server::{Result, SearchRequest, ServerError, TreemapServer};
use crate::session::ExplorerSession;

/// Search the uploaded dataset.  With a model selected the search is limited
/// to that model; with "nothing" selected it spans all models.  The query and
/// the returned hits are recorded on the session so a later `show-hit` can
/// pick from them and highlight the term.
#[derive(Debug, Args)]
pub struct Search {
    /// Query text.
    pub query: String,

    /// Maximum number of hits to request.
    #[clap(long, default_value_t = 200)]
    pub limit: u32,
}

#[derive(Debug)]
pub struct SearchCommand {
    pub args: Search,
}

#[async_trait]
impl PipelineCommand for SearchCommand {
    async fn execute(
        &self,
        server: &Box<dyn TreemapServer + Send + Sync>,
        session: &mut ExplorerSession,
        _input: PipelineValues,
    ) -> Result<PipelineValues> {
        let dataset_id = session.require_dataset()?.to_string();
        let query = self.args.query.trim().to_string();
        if query.is_empty() {
            return Err(ServerError::bad_input("Empty query; nothing to search."));
        }

        let request = SearchRequest {
            dataset_id,
            query: query.clone(),
            limit: self.args.limit,
            model: session.selected_model().map(|m| m.to_string()),
        };
        let hits = server.search(&request).await?;
        info!(query = %query, hit_count = hits.len(), "search complete");

        session.note_search(&query, hits.clone());

        Ok(PipelineValues::HitList(HitList { hits }))
    }
}
