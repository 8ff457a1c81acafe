use async_trait::async_trait;
use clap::Args;
use regex::Regex;

use super::interface::{ModelTree, PipelineCommand, PipelineValues};

use crate::abstract_server::{Result, ServerError, TreemapServer};
use crate::navigate::{build_skeleton, find_subtree};
use crate::session::ExplorerSession;
use crate::tree::SearchHit;

lazy_static! {
    /// The `"(Model) path"` prefix of a hit's display label; last resort of
    /// the title fallback chain.
    static ref LABEL_MODEL_RE: Regex = Regex::new(r"^\(([^)]+)\)").unwrap();
}

/// Drill into one search hit: fetch the hit model's tree, navigate to the
/// hit's subtree, and emit the skeleton view (the ancestor chain without its
/// siblings, then the hit's full children) with the search term as highlight.
/// The default index 0 matches the auto-selection of the first hit right
/// after a search.
#[derive(Debug, Args)]
pub struct ShowHit {
    /// Zero-based index into the hit list.
    #[clap(default_value_t = 0)]
    pub index: usize,
}

#[derive(Debug)]
pub struct ShowHitCommand {
    pub args: ShowHit,
}

impl ShowHitCommand {
    /// Title fallback, in order: the explicitly selected model, the hit's own
    /// model, the `"(Model)"` prefix parsed back out of the display label,
    /// and finally a generic placeholder.
    fn figure_title(session: &ExplorerSession, hit: &SearchHit) -> String {
        if let Some(model) = session.selected_model() {
            return model.to_string();
        }
        if !hit.model.is_empty() {
            return hit.model.clone();
        }
        if let Some(caps) = LABEL_MODEL_RE.captures(&hit.display_label()) {
            return caps[1].to_string();
        }
        "Treemap".to_string()
    }
}

#[async_trait]
impl PipelineCommand for ShowHitCommand {
    async fn execute(
        &self,
        server: &Box<dyn TreemapServer + Send + Sync>,
        session: &mut ExplorerSession,
        input: PipelineValues,
    ) -> Result<PipelineValues> {
        let dataset_id = session.require_dataset()?.to_string();

        // Piped-in hits win; otherwise fall back to the session's last search
        // so a bare `show-hit 2` can revisit a different hit later.
        let hit = match &input {
            PipelineValues::HitList(hit_list) => hit_list.hits.get(self.args.index).cloned(),
            _ => session.hits().get(self.args.index).cloned(),
        };
        let hit = hit.ok_or_else(|| {
            ServerError::bad_input(format!(
                "No search hit at index {}; run `search` first.",
                self.args.index
            ))
        })?;

        let tree = server.fetch_model_tree(&dataset_id, &hit.model).await?;

        // Lookup failure inside find_subtree silently yields the full tree;
        // the skeleton then reconstructs the anchor chain over it, so the
        // user always gets something to look at.
        let subtree = find_subtree(&tree, &hit.anchor_parts);
        let skeleton = build_skeleton(&hit.anchor_parts, &subtree);

        let title = ShowHitCommand::figure_title(session, &hit);
        let highlight = session.last_query().to_string();

        Ok(PipelineValues::ModelTree(ModelTree {
            title,
            highlight,
            root: skeleton,
        }))
    }
}
