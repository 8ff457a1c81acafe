use async_trait::async_trait;
use serde::Serialize;

use crate::tree::{SearchHit, TreeNode, UploadSummary};

pub type Result<T> = std::result::Result<T, ServerError>;

// JSON parse errors are sticky data problems.
impl From<serde_json::Error> for ServerError {
    fn from(err: serde_json::Error) -> ServerError {
        ServerError::StickyProblem(ErrorDetails {
            layer: ErrorLayer::DataLayer,
            message: err.to_string(),
        })
    }
}

impl From<std::io::Error> for ServerError {
    fn from(err: std::io::Error) -> ServerError {
        ServerError::StickyProblem(ErrorDetails {
            layer: ErrorLayer::BadInput,
            message: err.to_string(),
        })
    }
}

/// Express whether the error seems to be happening in the server or the data.
#[derive(Debug, PartialEq)]
pub enum ErrorLayer {
    /// The request could not be issued at all: missing session state (no
    /// dataset uploaded, no model chosen, empty query), an unreadable local
    /// file, or a malformed pipeline.  These abort the action before any
    /// HTTP request goes out; the message is what a UI would surface as a
    /// blocking alert.
    BadInput,
    /// The error seems to involve backend logic rather than this dataset.
    ServerLayer,
    /// The error seems to be about the uploaded data in question rather than
    /// the server, like an unknown dataset_id or model name.
    DataLayer,
    /// We're not sure if it was a server issue or a data issue.
    UnknownLayer,
}

/// ServerError payload to provide details about what went wrong for
/// investigation purposes.
#[derive(Debug, PartialEq)]
pub struct ErrorDetails {
    /// Attempt to distinguish backend failures from bad requests.  A 500
    /// response is a `ServerLayer` problem; a 404 for a missing dataset is a
    /// `DataLayer` problem.
    pub layer: ErrorLayer,
    /// Stringified version of the lower level error.  For HTTP failures this
    /// is the raw response body, surfaced verbatim to the user.
    pub message: String,
}

/// Does a retry make sense or not?  We implement no retries (a failed action
/// just reports), but the distinction keeps the failure mode legible in
/// output and in tests.
#[derive(Debug, PartialEq)]
pub enum ServerError {
    /// An error that will persist for this request.  For example a 404, or a
    /// precondition the session does not meet.
    StickyProblem(ErrorDetails),
    /// An error that might go away if retried later.  For example a 504
    /// "Gateway timeout".
    TransientProblem(ErrorDetails),
}

impl ServerError {
    /// Shorthand for the abort-before-request case.
    pub fn bad_input(message: impl Into<String>) -> ServerError {
        ServerError::StickyProblem(ErrorDetails {
            layer: ErrorLayer::BadInput,
            message: message.into(),
        })
    }

    pub fn message(&self) -> &str {
        match self {
            ServerError::StickyProblem(details) => &details.message,
            ServerError::TransientProblem(details) => &details.message,
        }
    }
}

/// Body of `POST /search` as the backend expects it.  `model: None`
/// serializes as JSON null, which the backend reads as "all models".
#[derive(Clone, Debug, Serialize)]
pub struct SearchRequest {
    pub dataset_id: String,
    pub query: String,
    pub limit: u32,
    pub model: Option<String>,
}

/// The treemap backend's endpoints as consumed by this layer.  The backend
/// itself (dataset parsing, tree pruning, the search index) is an external
/// collaborator; this trait exists so commands can run against the real
/// remote server or an in-memory test double.
#[async_trait]
pub trait TreemapServer {
    /// `POST /upload`: hand the backend a dataset file, get back a dataset id
    /// and the model names found in it.
    async fn upload_dataset(&self, file_name: &str, contents: Vec<u8>) -> Result<UploadSummary>;

    /// `GET /tree?dataset_id=&model=`: the pruned tree for one model.
    async fn fetch_model_tree(&self, dataset_id: &str, model: &str) -> Result<TreeNode>;

    /// `POST /search`: ordered hits for a query, optionally filtered to one
    /// model.
    async fn search(&self, request: &SearchRequest) -> Result<Vec<SearchHit>>;
}
