// Display tree - surface-independent output of the value renderer

use serde_json::Value;

use super::value::{format_fixed2, CheckPayload, Leaf, ResultNode};

/// Pass/fail verdict shown as a colored badge
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Verdict {
    pub passed: bool,
}

impl Verdict {
    pub fn new(passed: bool) -> Self {
        Self { passed }
    }

    /// Visible badge label
    pub fn label(&self) -> &'static str {
        if self.passed {
            "Yes"
        } else {
            "No"
        }
    }

    /// Accessible description of the badge
    pub fn aria_label(&self) -> &'static str {
        if self.passed {
            "Passed"
        } else {
            "Failed"
        }
    }
}

/// Rendered form of a result tree
#[derive(Debug, Clone, PartialEq)]
pub enum DisplayNode {
    /// Plain text (empty for null)
    Text(String),
    /// Standalone pass/fail badge
    Badge(Verdict),
    /// Badge followed by the checked value
    Check { verdict: Verdict, text: String },
    /// Badge followed by a labeled numeric series
    Series {
        verdict: Verdict,
        label: String,
        values: Vec<String>,
    },
    /// Unordered list
    List(Vec<DisplayNode>),
    /// Unordered list of `key: value` entries
    Fields(Vec<(String, DisplayNode)>),
}

impl DisplayNode {
    /// True when the node fits on the line that introduces it.
    pub fn is_inline(&self) -> bool {
        !matches!(self, DisplayNode::List(_) | DisplayNode::Fields(_))
    }
}

/// Render an arbitrary JSON value. Total and side-effect free.
pub fn render(value: &Value) -> DisplayNode {
    render_node(&ResultNode::classify(value))
}

/// Render an already classified node.
pub fn render_node(node: &ResultNode) -> DisplayNode {
    match node {
        ResultNode::PairCheck { payload, passed } => {
            let verdict = Verdict::new(*passed);
            match payload {
                CheckPayload::Series(values) => DisplayNode::Series {
                    verdict,
                    label: series_label(values.len()),
                    values: values.iter().map(|v| format_fixed2(*v)).collect(),
                },
                CheckPayload::Scalar(text) => DisplayNode::Check {
                    verdict,
                    text: text.clone(),
                },
            }
        }
        ResultNode::Sequence(items) => DisplayNode::List(items.iter().map(render_node).collect()),
        ResultNode::Mapping(entries) => DisplayNode::Fields(
            entries
                .iter()
                .map(|(key, value)| (key.clone(), render_node(value)))
                .collect(),
        ),
        ResultNode::Leaf(Leaf::Bool(b)) => DisplayNode::Badge(Verdict::new(*b)),
        ResultNode::Leaf(leaf) => DisplayNode::Text(leaf.display()),
    }
}

fn series_label(len: usize) -> String {
    format!("Last {} periods", len)
}
