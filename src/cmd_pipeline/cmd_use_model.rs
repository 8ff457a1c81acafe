use async_trait::async_trait;
use clap::Args;

use super::interface::{PipelineCommand, PipelineValues};

use crate::abstract_server::{Result, TreemapServer};
use crate::session::ExplorerSession;

/// Select which model subsequent `fetch-tree` and `search` commands operate
/// on.  Omitting the name returns to the "nothing" selection: search spans
/// all models and drawing is blocked until a concrete model is picked.
#[derive(Debug, Args)]
pub struct UseModel {
    /// Model name from the uploaded dataset's model list.
    pub model: Option<String>,
}

#[derive(Debug)]
pub struct UseModelCommand {
    pub args: UseModel,
}

#[async_trait]
impl PipelineCommand for UseModelCommand {
    async fn execute(
        &self,
        _server: &Box<dyn TreemapServer + Send + Sync>,
        session: &mut ExplorerSession,
        _input: PipelineValues,
    ) -> Result<PipelineValues> {
        session.select_model(self.args.model.clone())?;
        Ok(PipelineValues::Void)
    }
}
