use async_trait::async_trait;
use clap::Args;

use super::interface::{PipelineCommand, PipelineValues};

use crate::abstract_server::{Result, TreemapServer};
use crate::session::ExplorerSession;

/// Clear the session back to its pre-upload state: dataset, model list,
/// selection, last query, and hits are all dropped.
#[derive(Debug, Args)]
pub struct Reset {}

#[derive(Debug)]
pub struct ResetCommand {
    pub args: Reset,
}

#[async_trait]
impl PipelineCommand for ResetCommand {
    async fn execute(
        &self,
        _server: &Box<dyn TreemapServer + Send + Sync>,
        session: &mut ExplorerSession,
        _input: PipelineValues,
    ) -> Result<PipelineValues> {
        session.reset();
        Ok(PipelineValues::Void)
    }
}
