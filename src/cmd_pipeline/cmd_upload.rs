use std::path::PathBuf;

use async_trait::async_trait;
use clap::Args;
use tracing::info;

use super::interface::{PipelineCommand, PipelineValues};

use crate::abstract_server::{Result, TreemapServer};
use crate::session::ExplorerSession;

/// Upload a dataset file to the backend, establishing the session's dataset
/// and its list of models.  Any previous model selection and search results
/// are discarded.
#[derive(Debug, Args)]
pub struct Upload {
    /// Dataset file (CSV/XLSX) to hand to the backend.
    #[clap(value_parser)]
    pub file: PathBuf,
}

#[derive(Debug)]
pub struct UploadCommand {
    pub args: Upload,
}

#[async_trait]
impl PipelineCommand for UploadCommand {
    async fn execute(
        &self,
        server: &Box<dyn TreemapServer + Send + Sync>,
        session: &mut ExplorerSession,
        _input: PipelineValues,
    ) -> Result<PipelineValues> {
        let contents = tokio::fs::read(&self.args.file).await?;
        let file_name = self
            .args
            .file
            .file_name()
            .and_then(|name| name.to_str())
            .unwrap_or("dataset")
            .to_string();

        let summary = server.upload_dataset(&file_name, contents).await?;
        session.note_upload(&summary);
        info!(dataset_id = %summary.dataset_id, models = ?summary.models, "upload complete");

        Ok(PipelineValues::UploadSummary(summary))
    }
}
