//! Explorer session state.  Rather than a free-floating `dataset_id` global
//! read by every action, the session is an explicit object with a lifecycle: populated by a successful upload, consulted by draw and
//! search, cleared on reset.

use crate::abstract_server::{Result, ServerError};
use crate::tree::{SearchHit, UploadSummary};

#[derive(Debug, Default)]
pub struct ExplorerSession {
    dataset_id: Option<String>,
    models: Vec<String>,
    /// `None` is the dropdown's "nothing" entry: search spans all models,
    /// drawing requires picking a concrete one first.
    selected_model: Option<String>,
    last_query: String,
    hits: Vec<SearchHit>,
}

impl ExplorerSession {
    pub fn new() -> ExplorerSession {
        ExplorerSession::default()
    }

    /// Record a successful upload.  The model selection resets to "nothing"
    /// since the new dataset brings its own model list.
    pub fn note_upload(&mut self, summary: &UploadSummary) {
        self.dataset_id = Some(summary.dataset_id.clone());
        self.models = summary.models.clone();
        self.selected_model = None;
        self.last_query.clear();
        self.hits.clear();
    }

    /// Select a model for subsequent actions; `None` (or an empty name)
    /// returns to "nothing".  Names not in the uploaded model list are
    /// rejected up front, before anything is requested.
    pub fn select_model(&mut self, model: Option<String>) -> Result<()> {
        match model {
            None => {
                self.selected_model = None;
                Ok(())
            }
            Some(name) if name.is_empty() => {
                self.selected_model = None;
                Ok(())
            }
            Some(name) => {
                if self.models.iter().any(|m| m == &name) {
                    self.selected_model = Some(name);
                    Ok(())
                } else {
                    Err(ServerError::bad_input(format!(
                        "Unknown model '{}'; uploaded models are: {}",
                        name,
                        self.models.join(", ")
                    )))
                }
            }
        }
    }

    pub fn note_search(&mut self, query: &str, hits: Vec<SearchHit>) {
        self.last_query = query.to_string();
        self.hits = hits;
    }

    /// Clear everything back to the pre-upload state.
    pub fn reset(&mut self) {
        *self = ExplorerSession::default();
    }

    pub fn dataset_id(&self) -> Option<&str> {
        self.dataset_id.as_deref()
    }

    pub fn models(&self) -> &[String] {
        &self.models
    }

    pub fn selected_model(&self) -> Option<&str> {
        self.selected_model.as_deref()
    }

    pub fn last_query(&self) -> &str {
        &self.last_query
    }

    pub fn hits(&self) -> &[SearchHit] {
        &self.hits
    }

    /// The dataset precondition shared by draw and search; errors before any
    /// request goes out.
    pub fn require_dataset(&self) -> Result<&str> {
        self.dataset_id
            .as_deref()
            .ok_or_else(|| ServerError::bad_input("No dataset uploaded yet; run `upload` first."))
    }

    /// Drawing additionally needs a concrete model, not "nothing".
    pub fn require_model(&self) -> Result<&str> {
        self.selected_model.as_deref().ok_or_else(|| {
            ServerError::bad_input(
                "Pick a dataset and a model first (not \"nothing\"); see `use-model`.",
            )
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::abstract_server::{ErrorDetails, ErrorLayer};

    fn summary() -> UploadSummary {
        UploadSummary {
            dataset_id: "ds-1".to_string(),
            models: vec!["ModelA".to_string(), "ModelB".to_string()],
        }
    }

    #[test]
    fn preconditions_fail_before_upload() {
        let session = ExplorerSession::new();
        match session.require_dataset() {
            Err(ServerError::StickyProblem(ErrorDetails { layer, .. })) => {
                assert_eq!(layer, ErrorLayer::BadInput)
            }
            other => panic!("expected BadInput, got {:?}", other),
        }
        assert!(session.require_model().is_err());
    }

    #[test]
    fn upload_sets_state_and_resets_selection() {
        let mut session = ExplorerSession::new();
        session.note_upload(&summary());
        session.select_model(Some("ModelA".to_string())).unwrap();
        assert_eq!(session.selected_model(), Some("ModelA"));

        session.note_upload(&summary());
        assert_eq!(session.selected_model(), None);
        assert_eq!(session.require_dataset().unwrap(), "ds-1");
    }

    #[test]
    fn unknown_model_is_rejected() {
        let mut session = ExplorerSession::new();
        session.note_upload(&summary());
        assert!(session.select_model(Some("Nope".to_string())).is_err());
        // Empty string is the "nothing" placeholder, not an error.
        session.select_model(Some(String::new())).unwrap();
        assert_eq!(session.selected_model(), None);
    }

    #[test]
    fn reset_clears_everything() {
        let mut session = ExplorerSession::new();
        session.note_upload(&summary());
        session.note_search(
            "beam",
            vec![SearchHit {
                model: "ModelA".to_string(),
                path_label: "root > x".to_string(),
                anchor_parts: vec!["root".to_string(), "x".to_string()],
            }],
        );
        session.reset();
        assert!(session.dataset_id().is_none());
        assert!(session.models().is_empty());
        assert!(session.hits().is_empty());
        assert_eq!(session.last_query(), "");
    }
}
