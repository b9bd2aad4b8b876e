//! A generic structured-value renderer.
//!
//! Flattens a [`serde_json::Value`] into displayable lines, honoring a set
//! of expanded node paths. Nested levels below the configured collapse
//! depth start hidden and expand on user interaction. The renderer holds
//! no per-value state; flattening is a pure function of the value and the
//! expansion set.

use std::collections::BTreeSet;

use serde_json::Value;

/// One displayable line of a flattened value tree.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TreeLine {
    /// Stable path of the node, e.g. `$.columns[0].name`.
    pub path: String,
    /// Nesting depth, for indentation.
    pub depth: usize,
    /// The line's text.
    pub text: String,
    /// Whether the node has children to expand.
    pub expandable: bool,
    /// Whether the node is currently expanded.
    pub expanded: bool,
}

/// Render configuration for the structured-value tree.
pub struct ValueTreeRenderer {
    /// Label for the root node; `None` renders the root without a name.
    pub root_label: Option<String>,
    /// Container levels below this depth start collapsed.
    pub collapse_depth: usize,
    /// Whether scalar lines are annotated with their data type.
    pub show_types: bool,
}

impl ValueTreeRenderer {
    /// Creates a renderer with the given configuration.
    pub fn new(root_label: Option<String>, collapse_depth: usize, show_types: bool) -> Self {
        Self {
            root_label,
            collapse_depth,
            show_types,
        }
    }

    /// The configuration the detail viewer uses: no root label, one
    /// expanded level, data-type annotations suppressed.
    pub fn session() -> Self {
        Self::new(None, 1, false)
    }

    /// The paths expanded when a value is first shown: every container
    /// above the collapse depth.
    pub fn initial_expansion(&self, value: &Value) -> BTreeSet<String> {
        let mut expanded = BTreeSet::new();
        seed(value, "$".to_string(), 0, self.collapse_depth, &mut expanded);
        expanded
    }

    /// Flattens a value into lines, descending only into expanded nodes.
    pub fn flatten(&self, value: &Value, expanded: &BTreeSet<String>) -> Vec<TreeLine> {
        let mut lines = Vec::new();
        self.walk(
            value,
            "$".to_string(),
            self.root_label.as_deref(),
            0,
            expanded,
            &mut lines,
        );
        lines
    }

    fn walk(
        &self,
        value: &Value,
        path: String,
        label: Option<&str>,
        depth: usize,
        expanded: &BTreeSet<String>,
        out: &mut Vec<TreeLine>,
    ) {
        match value {
            Value::Object(fields) => {
                let is_expanded = expanded.contains(&path);
                out.push(TreeLine {
                    text: container_text(label, fields.len(), "fields"),
                    path: path.clone(),
                    depth,
                    expandable: true,
                    expanded: is_expanded,
                });

                if is_expanded {
                    for (key, child) in fields {
                        self.walk(
                            child,
                            format!("{path}.{key}"),
                            Some(key),
                            depth + 1,
                            expanded,
                            out,
                        );
                    }
                }
            }
            Value::Array(items) => {
                let is_expanded = expanded.contains(&path);
                out.push(TreeLine {
                    text: container_text(label, items.len(), "items"),
                    path: path.clone(),
                    depth,
                    expandable: true,
                    expanded: is_expanded,
                });

                if is_expanded {
                    for (index, child) in items.iter().enumerate() {
                        let label = format!("[{index}]");
                        self.walk(
                            child,
                            format!("{path}[{index}]"),
                            Some(label.as_str()),
                            depth + 1,
                            expanded,
                            out,
                        );
                    }
                }
            }
            scalar => {
                let mut text = match label {
                    Some(label) => format!("{label}: {scalar}"),
                    None => scalar.to_string(),
                };
                if self.show_types {
                    text.push_str(&format!(" <{}>", type_name(scalar)));
                }

                out.push(TreeLine {
                    path,
                    depth,
                    text,
                    expandable: false,
                    expanded: false,
                });
            }
        }
    }
}

fn container_text(label: Option<&str>, count: usize, noun: &str) -> String {
    match label {
        Some(label) => format!("{label} ({count} {noun})"),
        None => format!("({count} {noun})"),
    }
}

fn seed(value: &Value, path: String, depth: usize, limit: usize, out: &mut BTreeSet<String>) {
    if depth >= limit {
        return;
    }

    match value {
        Value::Object(fields) => {
            out.insert(path.clone());
            for (key, child) in fields {
                seed(child, format!("{path}.{key}"), depth + 1, limit, out);
            }
        }
        Value::Array(items) => {
            out.insert(path.clone());
            for (index, child) in items.iter().enumerate() {
                seed(child, format!("{path}[{index}]"), depth + 1, limit, out);
            }
        }
        _ => (),
    }
}

fn type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "bool",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    fn entity() -> Value {
        json!({
            "id": 1,
            "name": "orders",
            "columns": [{"name": "id", "typeName": "int4"}],
        })
    }

    #[test]
    fn collapse_depth_one_shows_root_and_collapsed_children() {
        let renderer = ValueTreeRenderer::session();
        let value = entity();
        let lines = renderer.flatten(&value, &renderer.initial_expansion(&value));

        let texts: Vec<_> = lines.iter().map(|line| line.text.as_str()).collect();
        assert_eq!(
            texts,
            [
                "(3 fields)",
                "columns (1 items)",
                "id: 1",
                "name: \"orders\"",
            ]
        );

        // The nested array stays collapsed until the user expands it.
        assert!(lines[1].expandable);
        assert!(!lines[1].expanded);
    }

    #[test]
    fn expanding_a_path_reveals_its_children() {
        let renderer = ValueTreeRenderer::session();
        let value = entity();

        let mut expanded = renderer.initial_expansion(&value);
        expanded.insert("$.columns".to_string());
        expanded.insert("$.columns[0]".to_string());

        let lines = renderer.flatten(&value, &expanded);
        let texts: Vec<_> = lines.iter().map(|line| line.text.as_str()).collect();
        assert_eq!(
            texts,
            [
                "(3 fields)",
                "columns (1 items)",
                "[0] (2 fields)",
                "name: \"id\"",
                "typeName: \"int4\"",
                "id: 1",
                "name: \"orders\"",
            ]
        );
    }

    #[test]
    fn flattening_is_a_pure_function_of_value_and_expansion() {
        let renderer = ValueTreeRenderer::session();
        let value = entity();
        let expanded = renderer.initial_expansion(&value);

        assert_eq!(
            renderer.flatten(&value, &expanded),
            renderer.flatten(&value, &expanded)
        );
    }

    #[test]
    fn type_annotations_are_suppressed_by_default() {
        let renderer = ValueTreeRenderer::session();
        let value = entity();
        let lines = renderer.flatten(&value, &renderer.initial_expansion(&value));
        assert!(lines.iter().all(|line| !line.text.contains('<')));

        let annotated = ValueTreeRenderer::new(None, 1, true);
        let lines = annotated.flatten(&value, &annotated.initial_expansion(&value));
        assert!(lines.iter().any(|line| line.text.ends_with("<number>")));
    }

    #[test]
    fn root_label_is_used_when_present() {
        let renderer = ValueTreeRenderer::new(Some("entity".to_string()), 1, false);
        let value = entity();
        let lines = renderer.flatten(&value, &renderer.initial_expansion(&value));
        assert_eq!(lines[0].text, "entity (3 fields)");
    }
}
