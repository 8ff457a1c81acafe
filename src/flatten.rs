//! Flattening a model tree into the parallel arrays a Plotly `treemap` trace
//! consumes, with optional highlight styling for a search term.

use serde::Serialize;

use crate::tree::TreeNode;

const NEUTRAL_LINE_WIDTH: u32 = 1;
const HIGHLIGHT_LINE_WIDTH: u32 = 3;
const NEUTRAL_LINE_COLOR: &str = "rgba(0,0,0,0.3)";
const HIGHLIGHT_LINE_COLOR: &str = "crimson";
const HIGHLIGHT_FILL_COLOR: &str = "rgba(220,20,60,0.1)";

/// Index-aligned parallel arrays describing one treemap cell per index.
/// Cells are appended in post-order (children before their parent), but the
/// id/parent linkage is what the chart consumes, so order only matters for
/// reproducibility.
#[derive(Debug, Default, PartialEq, Serialize)]
pub struct FlattenedChart {
    pub labels: Vec<String>,
    pub ids: Vec<String>,
    pub parents: Vec<String>,
    pub values: Vec<u64>,
    /// Display text per cell; on a highlight hit the first occurrence of the
    /// term is wrapped in `<b>` markup.
    pub text: Vec<String>,
    pub line_widths: Vec<u32>,
    pub line_colors: Vec<String>,
    /// `None` leaves the cell on the chart's default fill.
    pub fill_colors: Vec<Option<String>>,
}

impl FlattenedChart {
    pub fn len(&self) -> usize {
        self.labels.len()
    }

    pub fn is_empty(&self) -> bool {
        self.labels.is_empty()
    }
}

/// Flatten `tree` into chart arrays, highlighting every node whose
/// lower-cased name contains the lower-cased `highlight_term` as a substring.
/// An empty term highlights nothing.
///
/// Each node's id is its parent's id joined with `" / "`; the root's parent
/// id is the empty string, which Plotly treats as the implicit chart root.
/// Aggregate values are computed bottom-up: a leaf counts 1, an inner node
/// sums its children with a floor of 1 so no cell ever renders zero-sized.
pub fn flatten_tree(tree: &TreeNode, highlight_term: &str) -> FlattenedChart {
    let mut chart = FlattenedChart::default();
    let term = highlight_term.to_lowercase();
    append_node(tree, "", &term, &mut chart);
    chart
}

fn append_node(node: &TreeNode, parent_id: &str, term: &str, chart: &mut FlattenedChart) -> u64 {
    let lower_name = node.name.to_lowercase();
    let is_hit = !term.is_empty() && lower_name.contains(term);
    let my_id = if parent_id.is_empty() {
        node.name.clone()
    } else {
        format!("{} / {}", parent_id, node.name)
    };

    let value = if node.children.is_empty() {
        1
    } else {
        let sum: u64 = node
            .children
            .iter()
            .map(|child| append_node(child, &my_id, term, chart))
            .sum();
        std::cmp::max(sum, 1)
    };

    let display = if is_hit {
        bolden_first_match(&node.name, &lower_name, term)
    } else {
        node.name.clone()
    };

    chart.labels.push(node.name.clone());
    chart.text.push(display);
    chart.ids.push(my_id);
    chart.parents.push(parent_id.to_string());
    chart.values.push(value);
    chart.line_widths.push(if is_hit {
        HIGHLIGHT_LINE_WIDTH
    } else {
        NEUTRAL_LINE_WIDTH
    });
    chart.line_colors.push(
        if is_hit {
            HIGHLIGHT_LINE_COLOR
        } else {
            NEUTRAL_LINE_COLOR
        }
        .to_string(),
    );
    chart
        .fill_colors
        .push(if is_hit { Some(HIGHLIGHT_FILL_COLOR.to_string()) } else { None });

    value
}

/// Wrap the first occurrence of `term` (located on the lower-cased name) in
/// `<b>`/`</b>` within the original name.  Case folding can change byte
/// lengths for some scripts; when the folded offsets don't land on char
/// boundaries of the original name we keep the plain name, so the cell still
/// gets hit styling but no bold span.
fn bolden_first_match(name: &str, lower_name: &str, term: &str) -> String {
    let idx = match lower_name.find(term) {
        Some(idx) => idx,
        None => return name.to_string(),
    };
    let end = idx + term.len();
    if end <= name.len() && name.is_char_boundary(idx) && name.is_char_boundary(end) {
        format!("{}<b>{}</b>{}", &name[..idx], &name[idx..end], &name[end..])
    } else {
        name.to_string()
    }
}

/// The Plotly `treemap` trace, shaped exactly as `Plotly.newPlot` consumes
/// it.
#[derive(Debug, Serialize)]
pub struct TreemapTrace {
    #[serde(rename = "type")]
    pub trace_type: String,
    pub labels: Vec<String>,
    pub parents: Vec<String>,
    pub ids: Vec<String>,
    pub values: Vec<u64>,
    pub text: Vec<String>,
    pub textinfo: String,
    pub hoverinfo: String,
    pub marker: TraceMarker,
    pub branchvalues: String,
    pub maxdepth: i32,
    pub pathbar: PathBar,
}

#[derive(Debug, Serialize)]
pub struct TraceMarker {
    pub line: MarkerLine,
    pub colors: Vec<Option<String>>,
}

#[derive(Debug, Serialize)]
pub struct MarkerLine {
    pub width: Vec<u32>,
    pub color: Vec<String>,
}

#[derive(Debug, Serialize)]
pub struct PathBar {
    pub visible: bool,
}

#[derive(Debug, Serialize)]
pub struct FigureLayout {
    pub title: String,
    pub height: u32,
    pub margin: FigureMargin,
}

#[derive(Debug, Serialize)]
pub struct FigureMargin {
    pub t: u32,
    pub l: u32,
    pub r: u32,
    pub b: u32,
}

/// A complete figure: one treemap trace plus the layout.
#[derive(Debug, Serialize)]
pub struct TreemapFigure {
    pub data: Vec<TreemapTrace>,
    pub layout: FigureLayout,
}

impl TreemapFigure {
    /// Assemble the single-trace figure with the fixed plot configuration.
    pub fn from_chart(chart: FlattenedChart, title: &str) -> TreemapFigure {
        TreemapFigure {
            data: vec![TreemapTrace {
                trace_type: "treemap".to_string(),
                labels: chart.labels,
                parents: chart.parents,
                ids: chart.ids,
                values: chart.values,
                text: chart.text,
                textinfo: "label".to_string(),
                hoverinfo: "label+value+percent parent".to_string(),
                marker: TraceMarker {
                    line: MarkerLine {
                        width: chart.line_widths,
                        color: chart.line_colors,
                    },
                    colors: chart.fill_colors,
                },
                branchvalues: "total".to_string(),
                maxdepth: -1,
                pathbar: PathBar { visible: true },
            }],
            layout: FigureLayout {
                title: title.to_string(),
                height: 700,
                margin: FigureMargin {
                    t: 50,
                    l: 25,
                    r: 25,
                    b: 25,
                },
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tree::TreeNode;

    fn sample_tree() -> TreeNode {
        TreeNode::branch(
            "root",
            vec![
                TreeNode::branch("A", vec![TreeNode::leaf("x"), TreeNode::leaf("y")]),
                TreeNode::leaf("B"),
            ],
        )
    }

    fn count_leaves(node: &TreeNode) -> u64 {
        if node.is_leaf() {
            1
        } else {
            node.children.iter().map(count_leaves).sum()
        }
    }

    #[test]
    fn worked_example_values_and_order() {
        let chart = flatten_tree(&sample_tree(), "");
        // Post-order emission: A's subtree, then B, then root.
        assert_eq!(chart.labels, vec!["x", "y", "A", "B", "root"]);
        assert_eq!(chart.values, vec![1, 1, 2, 1, 4]);
        assert_eq!(
            chart.ids,
            vec![
                "root / A / x",
                "root / A / y",
                "root / A",
                "root / B",
                "root"
            ]
        );
        assert_eq!(
            chart.parents,
            vec!["root / A", "root / A", "root", "root", ""]
        );
    }

    #[test]
    fn root_value_equals_leaf_count() {
        let trees = vec![
            sample_tree(),
            TreeNode::leaf("solo"),
            TreeNode::branch(
                "deep",
                vec![TreeNode::branch(
                    "mid",
                    vec![TreeNode::branch("low", vec![TreeNode::leaf("l1")])],
                )],
            ),
        ];
        for tree in trees {
            let chart = flatten_tree(&tree, "");
            let root_value = *chart.values.last().unwrap();
            assert_eq!(root_value, count_leaves(&tree));
        }
    }

    #[test]
    fn flatten_is_deterministic() {
        let a = flatten_tree(&sample_tree(), "y");
        let b = flatten_tree(&sample_tree(), "y");
        assert_eq!(a, b);
    }

    #[test]
    fn empty_children_array_is_a_leaf() {
        let explicit: TreeNode = serde_json::from_str(r#"{"name":"n","children":[]}"#).unwrap();
        let implicit: TreeNode = serde_json::from_str(r#"{"name":"n"}"#).unwrap();
        assert_eq!(
            flatten_tree(&explicit, ""),
            flatten_tree(&implicit, "")
        );
        assert_eq!(flatten_tree(&explicit, "").values, vec![1]);
    }

    #[test]
    fn highlight_marks_only_matching_nodes() {
        let chart = flatten_tree(&sample_tree(), "y");
        let hit = chart.labels.iter().position(|l| l == "y").unwrap();
        assert_eq!(chart.text[hit], "<b>y</b>");
        assert_eq!(chart.line_widths[hit], 3);
        assert_eq!(chart.line_colors[hit], "crimson");
        assert_eq!(chart.fill_colors[hit].as_deref(), Some("rgba(220,20,60,0.1)"));

        for i in 0..chart.len() {
            if i != hit {
                assert_eq!(chart.text[i], chart.labels[i]);
                assert_eq!(chart.line_widths[i], 1);
                assert_eq!(chart.line_colors[i], "rgba(0,0,0,0.3)");
                assert_eq!(chart.fill_colors[i], None);
            }
        }
    }

    #[test]
    fn highlight_is_case_insensitive_and_wraps_first_occurrence() {
        let tree = TreeNode::leaf("Low Beam headLamp");
        let chart = flatten_tree(&tree, "LAMP");
        assert_eq!(chart.text[0], "Low Beam head<b>Lamp</b>");
    }

    #[test]
    fn empty_term_never_highlights() {
        let chart = flatten_tree(&sample_tree(), "");
        assert!(chart.line_widths.iter().all(|w| *w == 1));
        assert!(chart.fill_colors.iter().all(|c| c.is_none()));
    }

    #[test]
    fn figure_carries_plot_configuration() {
        let figure = TreemapFigure::from_chart(flatten_tree(&sample_tree(), ""), "ModelX");
        let json = serde_json::to_value(&figure).unwrap();
        assert_eq!(json["data"][0]["type"], "treemap");
        assert_eq!(json["data"][0]["branchvalues"], "total");
        assert_eq!(json["data"][0]["maxdepth"], -1);
        assert_eq!(json["data"][0]["pathbar"]["visible"], true);
        assert_eq!(json["layout"]["title"], "ModelX");
        assert_eq!(json["layout"]["height"], 700);
        assert_eq!(json["layout"]["margin"]["t"], 50);
    }
}
