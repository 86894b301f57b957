use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// One export declaration: a target path, an ordered fallback list, or an
/// ordered condition map (`types`, `module`, `default`, ...) whose values
/// nest recursively.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ExportValue {
    Target(String),
    Fallbacks(Vec<ExportValue>),
    Conditions(IndexMap<String, ExportValue>),
}

/// Rewrites every target path in a declaration to resolve from the package
/// root by prefixing it with the vendored package's dist path. Shape and key
/// order are preserved; only leaf strings change.
pub fn rewrite_export_value(value: &ExportValue, dist_path: &str) -> ExportValue {
    match value {
        ExportValue::Target(target) => ExportValue::Target(prefixed_subpath(dist_path, target)),
        ExportValue::Fallbacks(entries) => ExportValue::Fallbacks(
            entries
                .iter()
                .map(|entry| rewrite_export_value(entry, dist_path))
                .collect(),
        ),
        ExportValue::Conditions(conditions) => ExportValue::Conditions(
            conditions
                .iter()
                .map(|(condition, nested)| {
                    (condition.clone(), rewrite_export_value(nested, dist_path))
                })
                .collect(),
        ),
    }
}

pub fn prefixed_subpath(dist_path: &str, subpath: &str) -> String {
    format!("./{}", join_slash_paths(dist_path, subpath))
}

/// Joins two slash paths, collapsing `.` and empty segments and resolving
/// `..` against earlier segments. Backslashes are treated as separators so
/// Windows-authored manifest values normalize to slash form.
pub fn join_slash_paths(left: &str, right: &str) -> String {
    let mut segments: Vec<&str> = Vec::new();
    for segment in left.split(['/', '\\']).chain(right.split(['/', '\\'])) {
        match segment {
            "" | "." => {}
            ".." => {
                if matches!(segments.last(), Some(&"..")) || segments.is_empty() {
                    segments.push("..");
                } else {
                    segments.pop();
                }
            }
            other => segments.push(other),
        }
    }
    segments.join("/")
}
