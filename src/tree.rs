use serde::{Deserialize, Serialize};

/// A node in a model's hierarchy as returned by the backend's `/tree`
/// endpoint.  A leaf either omits `children` or carries an empty array; the
/// two forms are equivalent and we normalize to an empty `Vec` on
/// deserialization while omitting the field again on serialization.
///
/// Child order comes from the backend and is observable: the prefix-match
/// tie-break in `navigate::find_subtree` resolves to the first child in
/// source order.
#[derive(Clone, Debug, Deserialize, PartialEq, Serialize)]
pub struct TreeNode {
    pub name: String,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub children: Vec<TreeNode>,
}

impl TreeNode {
    pub fn leaf(name: &str) -> TreeNode {
        TreeNode {
            name: name.to_string(),
            children: vec![],
        }
    }

    pub fn branch(name: &str, children: Vec<TreeNode>) -> TreeNode {
        TreeNode {
            name: name.to_string(),
            children,
        }
    }

    pub fn is_leaf(&self) -> bool {
        self.children.is_empty()
    }
}

/// One search result from the backend's `/search` endpoint.  `anchor_parts`
/// is the root-to-node name chain locating the hit inside its model's tree,
/// with `anchor_parts[0]` naming the root.
#[derive(Clone, Debug, Deserialize, PartialEq, Serialize)]
pub struct SearchHit {
    pub model: String,
    pub path_label: String,
    pub anchor_parts: Vec<String>,
}

impl SearchHit {
    /// The human-readable form shown when listing hits.  The title-fallback
    /// logic in `show-hit` re-parses the `"(model)"` prefix out of this, so
    /// the format is load-bearing.
    pub fn display_label(&self) -> String {
        format!("({}) {}", self.model, self.path_label)
    }
}

/// Response payload of `POST /upload`.
#[derive(Clone, Debug, Deserialize, PartialEq, Serialize)]
pub struct UploadSummary {
    pub dataset_id: String,
    pub models: Vec<String>,
}
