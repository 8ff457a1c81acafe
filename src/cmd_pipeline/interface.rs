use std::fmt::Debug;

use async_trait::async_trait;
use serde::Serialize;
use serde_json::to_string_pretty;
use tracing::{trace, trace_span, Instrument};

pub use crate::abstract_server::{Result, TreemapServer};
use crate::flatten::TreemapFigure;
use crate::session::ExplorerSession;
use crate::tree::{SearchHit, TreeNode, UploadSummary};

/// A tree ready for rendering: the root to flatten plus the title and the
/// highlight term the resulting figure should carry.  `fetch-tree` emits one
/// with no highlight; `show-hit` emits the drill-down skeleton with the
/// session's last query as highlight.
#[derive(Debug, Serialize)]
pub struct ModelTree {
    pub title: String,
    pub highlight: String,
    pub root: TreeNode,
}

/// Ordered search hits, as returned by the backend (ancestors collapsed,
/// sorted by model then path).
#[derive(Debug, Serialize)]
pub struct HitList {
    pub hits: Vec<SearchHit>,
}

/// The input and output of each pipeline segment.
#[derive(Debug, Serialize)]
pub enum PipelineValues {
    UploadSummary(UploadSummary),
    ModelTree(ModelTree),
    HitList(HitList),
    TreemapFigure(TreemapFigure),
    Void,
}

/// A command that takes a single input and produces a single output.  At the
/// start of the pipeline, the input may be ignored / expected to be void.
/// Commands also read and mutate the explorer session, which is how state
/// like the dataset id flows between separate pipeline runs' worth of
/// actions.
#[async_trait]
pub trait PipelineCommand: Debug {
    async fn execute(
        &self,
        server: &Box<dyn TreemapServer + Send + Sync>,
        session: &mut ExplorerSession,
        input: PipelineValues,
    ) -> Result<PipelineValues>;
}

/// Multiple-use linear pipeline sequence.
pub struct ServerPipeline {
    pub server: Box<dyn TreemapServer + Send + Sync>,
    pub commands: Vec<Box<dyn PipelineCommand + Send + Sync>>,
}

impl ServerPipeline {
    pub async fn run(&self, session: &mut ExplorerSession) -> Result<PipelineValues> {
        let mut cur_values = PipelineValues::Void;

        for cmd in &self.commands {
            let span = trace_span!("run_pipeline_step", cmd = ?cmd);

            match cmd
                .execute(&self.server, session, cur_values)
                .instrument(span.clone())
                .await
            {
                Ok(next_values) => {
                    cur_values = next_values;
                }
                Err(err) => {
                    trace!(err = ?err);
                    return Err(err);
                }
            }

            let _span_guard = span.entered();
            if let Ok(value_str) = to_string_pretty(&cur_values) {
                trace!(output_json = %value_str);
            }
        }

        Ok(cur_values)
    }
}
