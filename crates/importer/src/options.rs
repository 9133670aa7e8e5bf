//! Import run configuration.
//!
//! Options are an explicit value threaded into [`crate::run`], not
//! ambient state; persisting them across runs is the host's business.

/// Configuration for one import run.
#[derive(Debug, Clone)]
pub struct ImportOptions {
    /// Destination folder inside the vault that all output lives under.
    pub destination_folder: String,
    /// Replace existing notes at computed paths. When off, existing
    /// notes are left in place and each skip is reported.
    pub overwrite_existing: bool,
    /// Walk the resources subtree of each sub-workspace.
    pub import_resources: bool,
    /// Walk the tabs subtree of each sub-workspace.
    pub import_tabs: bool,
    /// Custom resource template text; the built-in default when `None`.
    pub resource_template: Option<String>,
    /// Custom tab template text; the built-in default when `None`.
    pub tab_template: Option<String>,
    /// Date stamp for note frontmatter. Defaults to today; pin it for
    /// reproducible output.
    pub date: Option<String>,
}

impl Default for ImportOptions {
    fn default() -> Self {
        Self {
            destination_folder: "Workona".to_string(),
            overwrite_existing: true,
            import_resources: true,
            import_tabs: true,
            resource_template: None,
            tab_template: None,
            date: None,
        }
    }
}
