// Text projections of the display tree
//
// Both the TUI and plain output walk the same row layout; they only differ
// in how segments are styled.

use ratatui::{
    style::{Modifier, Style},
    text::{Line, Span},
};

use super::display::{DisplayNode, Verdict};
use crate::config::ColorScheme;

const INDENT: &str = "  ";
const PLAIN_BULLET: &str = "- ";
const TUI_BULLET: &str = "• ";

#[derive(Debug, Clone, PartialEq)]
enum Segment {
    Text(String),
    Key(String),
    Badge(Verdict),
}

#[derive(Debug, Clone, PartialEq)]
struct Row {
    depth: usize,
    bullet: bool,
    segments: Vec<Segment>,
}

fn layout(node: &DisplayNode) -> Vec<Row> {
    let mut rows = Vec::new();
    match node {
        DisplayNode::List(items) => {
            for item in items {
                push_item(&mut rows, 0, None, item);
            }
        }
        DisplayNode::Fields(entries) => {
            for (key, value) in entries {
                push_item(&mut rows, 0, Some(key), value);
            }
        }
        inline => rows.push(Row {
            depth: 0,
            bullet: false,
            segments: inline_segments(inline),
        }),
    }
    rows
}

fn push_item(rows: &mut Vec<Row>, depth: usize, key: Option<&str>, node: &DisplayNode) {
    let mut segments: Vec<Segment> = key.map(|k| vec![Segment::Key(k.to_string())]).unwrap_or_default();

    if node.is_inline() {
        segments.extend(inline_segments(node));
        rows.push(Row { depth, bullet: true, segments });
        return;
    }

    // Keyed containers get a header row; bare nested lists just indent.
    if key.is_some() {
        rows.push(Row { depth, bullet: true, segments });
    }
    match node {
        DisplayNode::List(items) => {
            for item in items {
                push_item(rows, depth + 1, None, item);
            }
        }
        DisplayNode::Fields(entries) => {
            for (k, v) in entries {
                push_item(rows, depth + 1, Some(k), v);
            }
        }
        _ => {}
    }
}

fn inline_segments(node: &DisplayNode) -> Vec<Segment> {
    match node {
        DisplayNode::Text(text) => vec![Segment::Text(text.clone())],
        DisplayNode::Badge(verdict) => vec![Segment::Badge(*verdict)],
        DisplayNode::Check { verdict, text } => {
            let mut segments = vec![Segment::Badge(*verdict)];
            if !text.is_empty() {
                segments.push(Segment::Text(format!(" {}", text)));
            }
            segments
        }
        DisplayNode::Series { verdict, label, values } => vec![
            Segment::Badge(*verdict),
            Segment::Text(format!(" {}: {}", label, values.join(","))),
        ],
        DisplayNode::List(_) | DisplayNode::Fields(_) => Vec::new(),
    }
}

/// Plain text rendering (`[Yes]` / `[No]` badges, `- ` bullets).
pub fn to_plain(node: &DisplayNode) -> String {
    layout(node)
        .iter()
        .map(|row| {
            let mut line = INDENT.repeat(row.depth);
            if row.bullet {
                line.push_str(PLAIN_BULLET);
            }
            for segment in &row.segments {
                match segment {
                    Segment::Text(text) => line.push_str(text),
                    Segment::Key(key) => {
                        line.push_str(key);
                        line.push_str(": ");
                    }
                    Segment::Badge(verdict) => {
                        line.push('[');
                        line.push_str(verdict.label());
                        line.push(']');
                    }
                }
            }
            line.trim_end().to_string()
        })
        .collect::<Vec<_>>()
        .join("\n")
}

/// Styled lines for the TUI result area.
pub fn to_lines(node: &DisplayNode, colors: &ColorScheme) -> Vec<Line<'static>> {
    layout(node)
        .into_iter()
        .map(|row| {
            let mut spans = Vec::with_capacity(row.segments.len() + 1);
            let mut prefix = INDENT.repeat(row.depth);
            if row.bullet {
                prefix.push_str(TUI_BULLET);
            }
            if !prefix.is_empty() {
                spans.push(Span::styled(prefix, Style::default().fg(colors.ui.border.to_color())));
            }
            for segment in row.segments {
                spans.push(match segment {
                    Segment::Text(text) => Span::raw(text),
                    Segment::Key(key) => Span::styled(
                        format!("{}: ", key),
                        Style::default()
                            .fg(colors.ui.key.to_color())
                            .add_modifier(Modifier::BOLD),
                    ),
                    Segment::Badge(verdict) => badge_span(verdict, colors),
                });
            }
            Line::from(spans)
        })
        .collect()
}

/// Colored pass/fail badge
pub fn badge_span(verdict: Verdict, colors: &ColorScheme) -> Span<'static> {
    let bg = if verdict.passed {
        colors.badges.passed.to_color()
    } else {
        colors.badges.failed.to_color()
    };
    Span::styled(
        format!(" {} ", verdict.label()),
        Style::default()
            .fg(colors.badges.label.to_color())
            .bg(bg)
            .add_modifier(Modifier::BOLD),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::render::render;
    use serde_json::json;

    #[test]
    fn test_plain_mapping_layout() {
        let value: serde_json::Value = serde_json::from_str(r#"{"a": true, "b": [1, 2]}"#).unwrap();
        let text = to_plain(&render(&value));
        assert_eq!(text, "- a: [Yes]\n- b:\n  - 1\n  - 2");
    }

    #[test]
    fn test_plain_series() {
        let text = to_plain(&render(&json!({"eps": [[1.0, 2.0, 3.0], false]})));
        assert_eq!(text, "- eps: [No] Last 3 periods: 1.00,2.00,3.00");
    }

    #[test]
    fn test_plain_nested_fields() {
        let value: serde_json::Value =
            serde_json::from_str(r#"{"criteria": {"size": [700, true], "note": null}}"#).unwrap();
        let text = to_plain(&render(&value));
        assert_eq!(text, "- criteria:\n  - size: [Yes] 700\n  - note:");
    }

    #[test]
    fn test_plain_scalar_root() {
        assert_eq!(to_plain(&render(&json!("hello"))), "hello");
        assert_eq!(to_plain(&render(&json!(null))), "");
    }

    #[test]
    fn test_lines_carry_badge_span() {
        let colors = ColorScheme::default();
        let lines = to_lines(&render(&json!([3.5, true])), &colors);
        assert_eq!(lines.len(), 1);
        let content: String = lines[0].spans.iter().map(|s| s.content.as_ref()).collect();
        assert_eq!(content, " Yes  3.5");
    }

    #[test]
    fn test_lines_indent_nested_lists() {
        let colors = ColorScheme::default();
        let lines = to_lines(&render(&json!([[1, 2, 3]])), &colors);
        assert_eq!(lines.len(), 3);
        assert!(lines[0].spans[0].content.starts_with("  "));
    }
}
