//! Data model for Workona workspace-export documents.
//!
//! A Workona export is a nested tree: workspace groups contain
//! sub-workspaces, which contain resource collections (with resource
//! items) and tabs. Every level is a JSON object whose keys are opaque,
//! stable identifiers assigned by Workona; the keys survive renames and
//! are what lets two exports of the same account be correlated.
//!
//! The model is read-only once parsed. `IndexMap` keeps children in the
//! insertion order of the export file, which is the order notes are
//! generated in.

use indexmap::IndexMap;
use serde::Deserialize;

/// Failed to parse an export document.
#[derive(Debug, thiserror::Error)]
pub enum ExportError {
    #[error("invalid export document: {0}")]
    Json(#[from] serde_json::Error),
}

/// Root of an export document. The top-level `"Workspaces"` object maps
/// group keys to workspace groups.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct WorkspaceDocument {
    #[serde(default, rename = "Workspaces")]
    pub workspaces: IndexMap<String, WorkspaceGroup>,
}

/// A workspace group: the outermost named level of the export.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct WorkspaceGroup {
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub workspaces: IndexMap<String, SubWorkspace>,
}

/// A sub-workspace, holding resource collections and tabs.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct SubWorkspace {
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub resources: IndexMap<String, ResourceCollection>,
    #[serde(default)]
    pub tabs: IndexMap<String, TabItem>,
}

/// A named collection of resource items within a sub-workspace.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ResourceCollection {
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub resources: IndexMap<String, ResourceItem>,
}

/// A saved resource: a URL with a title and optional description.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ResourceItem {
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub url: String,
    #[serde(default)]
    pub description: Option<String>,
}

/// An open tab: a URL with a title.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct TabItem {
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub url: String,
}

impl WorkspaceDocument {
    /// Parse an export document from JSON text.
    ///
    /// Missing objects at any level deserialize to empty maps rather
    /// than failing, so a partial export degrades to an empty subtree.
    pub fn from_json(text: &str) -> Result<Self, ExportError> {
        Ok(serde_json::from_str(text)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE: &str = r#"{
        "Workspaces": {
            "g1": {
                "title": "Group",
                "workspaces": {
                    "s1": {
                        "title": "Sub",
                        "resources": {
                            "c1": {
                                "title": "Reading",
                                "resources": {
                                    "r1": { "title": "A", "url": "http://a", "description": "first" },
                                    "r2": { "title": "B", "url": "http://b" }
                                }
                            }
                        },
                        "tabs": {
                            "t1": { "title": "T", "url": "http://t" }
                        }
                    }
                }
            }
        }
    }"#;

    #[test]
    fn parses_full_document_shape() {
        let doc = WorkspaceDocument::from_json(SAMPLE).unwrap();
        let group = &doc.workspaces["g1"];
        assert_eq!(group.title, "Group");
        let sub = &group.workspaces["s1"];
        assert_eq!(sub.title, "Sub");
        let coll = &sub.resources["c1"];
        assert_eq!(coll.title, "Reading");
        assert_eq!(coll.resources["r1"].url, "http://a");
        assert_eq!(coll.resources["r1"].description.as_deref(), Some("first"));
        assert_eq!(coll.resources["r2"].description, None);
        assert_eq!(sub.tabs["t1"].url, "http://t");
    }

    #[test]
    fn preserves_insertion_order() {
        let text = r#"{
            "Workspaces": {
                "z": { "title": "Last?" },
                "a": { "title": "First?" },
                "m": { "title": "Middle?" }
            }
        }"#;
        let doc = WorkspaceDocument::from_json(text).unwrap();
        let keys: Vec<&str> = doc.workspaces.keys().map(String::as_str).collect();
        assert_eq!(keys, vec!["z", "a", "m"]);
    }

    #[test]
    fn missing_levels_default_to_empty() {
        let doc = WorkspaceDocument::from_json("{}").unwrap();
        assert!(doc.workspaces.is_empty());

        let doc = WorkspaceDocument::from_json(
            r#"{ "Workspaces": { "g1": { "title": "G" } } }"#,
        )
        .unwrap();
        let group = &doc.workspaces["g1"];
        assert!(group.workspaces.is_empty());
    }

    #[test]
    fn sub_workspace_without_tabs_or_resources() {
        let doc = WorkspaceDocument::from_json(
            r#"{ "Workspaces": { "g": { "title": "G", "workspaces": { "s": { "title": "S" } } } } }"#,
        )
        .unwrap();
        let sub = &doc.workspaces["g"].workspaces["s"];
        assert!(sub.resources.is_empty());
        assert!(sub.tabs.is_empty());
    }

    #[test]
    fn malformed_json_is_an_error() {
        let result = WorkspaceDocument::from_json("{ not json");
        assert!(matches!(result, Err(ExportError::Json(_))));
    }
}
