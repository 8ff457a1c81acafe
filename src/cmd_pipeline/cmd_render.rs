use async_trait::async_trait;
use clap::Args;

use super::interface::{PipelineCommand, PipelineValues};

use crate::abstract_server::{Result, ServerError, TreemapServer};
use crate::flatten::{flatten_tree, TreemapFigure};
use crate::session::ExplorerSession;

/// Flatten a piped-in tree into the Plotly treemap figure JSON.
#[derive(Debug, Args)]
pub struct Render {}

#[derive(Debug)]
pub struct RenderCommand {
    pub args: Render,
}

#[async_trait]
impl PipelineCommand for RenderCommand {
    async fn execute(
        &self,
        _server: &Box<dyn TreemapServer + Send + Sync>,
        _session: &mut ExplorerSession,
        input: PipelineValues,
    ) -> Result<PipelineValues> {
        let model_tree = match input {
            PipelineValues::ModelTree(mt) => mt,
            _ => {
                return Err(ServerError::bad_input(
                    "render needs a tree; pipe `fetch-tree` or `show-hit` into it.",
                ));
            }
        };

        let chart = flatten_tree(&model_tree.root, &model_tree.highlight);
        let figure = TreemapFigure::from_chart(chart, &model_tree.title);

        Ok(PipelineValues::TreemapFigure(figure))
    }
}
