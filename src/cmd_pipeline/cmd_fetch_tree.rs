use async_trait::async_trait;
use clap::Args;

use super::interface::{ModelTree, PipelineCommand, PipelineValues};

use crate::abstract_server::{Result, TreemapServer};
use crate::session::ExplorerSession;

/// Fetch the selected model's tree for rendering: the "draw"
/// action.  Requires an uploaded dataset and a concrete model selection;
/// the emitted tree is titled with the model name and carries no highlight.
#[derive(Debug, Args)]
pub struct FetchTree {}

#[derive(Debug)]
pub struct FetchTreeCommand {
    pub args: FetchTree,
}

#[async_trait]
impl PipelineCommand for FetchTreeCommand {
    async fn execute(
        &self,
        server: &Box<dyn TreemapServer + Send + Sync>,
        session: &mut ExplorerSession,
        _input: PipelineValues,
    ) -> Result<PipelineValues> {
        let dataset_id = session.require_dataset()?.to_string();
        let model = session.require_model()?.to_string();

        let root = server.fetch_model_tree(&dataset_id, &model).await?;

        Ok(PipelineValues::ModelTree(ModelTree {
            title: model,
            highlight: String::new(),
            root,
        }))
    }
}
