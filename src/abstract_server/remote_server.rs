use async_trait::async_trait;
use reqwest::multipart::{Form, Part};
use url::{ParseError, Url};

use super::server_interface::{
    ErrorDetails, ErrorLayer, Result, SearchRequest, ServerError, TreemapServer,
};
use crate::tree::{SearchHit, TreeNode, UploadSummary};

/// reqwest won't return an error for an unhappy status code itself; someone
/// would need to call `Response::error_for_status`, so for now we'll generally
/// assume everything is some kind of transient problem.
impl From<reqwest::Error> for ServerError {
    fn from(err: reqwest::Error) -> ServerError {
        ServerError::TransientProblem(ErrorDetails {
            layer: ErrorLayer::ServerLayer,
            message: err.to_string(),
        })
    }
}

impl From<ParseError> for ServerError {
    fn from(err: ParseError) -> ServerError {
        ServerError::StickyProblem(ErrorDetails {
            layer: ErrorLayer::BadInput,
            message: err.to_string(),
        })
    }
}

#[derive(Debug)]
struct RemoteServer {
    client: reqwest::Client,
    upload_url: Url,
    tree_url: Url,
    search_url: Url,
}

/// On a non-success status the raw response body becomes the error message;
/// nothing downstream retries, the text just gets surfaced to the user.
/// Server errors are considered transient, everything else sticky.
async fn check_status(res: reqwest::Response) -> Result<reqwest::Response> {
    let status = res.status();
    if status.is_success() {
        return Ok(res);
    }

    let body = res.text().await.unwrap_or_else(|_| status.to_string());
    if status.is_server_error() {
        Err(ServerError::TransientProblem(ErrorDetails {
            layer: ErrorLayer::ServerLayer,
            message: body,
        }))
    } else {
        Err(ServerError::StickyProblem(ErrorDetails {
            layer: ErrorLayer::DataLayer,
            message: body,
        }))
    }
}

#[async_trait]
impl TreemapServer for RemoteServer {
    async fn upload_dataset(&self, file_name: &str, contents: Vec<u8>) -> Result<UploadSummary> {
        let form = Form::new().part(
            "file",
            Part::bytes(contents).file_name(file_name.to_string()),
        );
        let res = self
            .client
            .post(self.upload_url.clone())
            .multipart(form)
            .send()
            .await?;
        let summary = check_status(res).await?.json::<UploadSummary>().await?;
        Ok(summary)
    }

    async fn fetch_model_tree(&self, dataset_id: &str, model: &str) -> Result<TreeNode> {
        let mut url = self.tree_url.clone();
        url.query_pairs_mut()
            .append_pair("dataset_id", dataset_id)
            .append_pair("model", model);
        let res = self
            .client
            .get(url)
            .header("Accept", "application/json")
            .send()
            .await?;
        let tree = check_status(res).await?.json::<TreeNode>().await?;
        Ok(tree)
    }

    async fn search(&self, request: &SearchRequest) -> Result<Vec<SearchHit>> {
        let res = self
            .client
            .post(self.search_url.clone())
            .json(request)
            .send()
            .await?;
        let hits = check_status(res).await?.json::<Vec<SearchHit>>().await?;
        Ok(hits)
    }
}

pub fn make_remote_server(server_base_url: Url) -> Result<Box<dyn TreemapServer + Send + Sync>> {
    let upload_url = server_base_url.join("upload")?;
    let tree_url = server_base_url.join("tree")?;
    let search_url = server_base_url.join("search")?;

    Ok(Box::new(RemoteServer {
        client: reqwest::Client::new(),
        upload_url,
        tree_url,
        search_url,
    }))
}
