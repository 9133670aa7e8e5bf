//! Placeholder templates for generated Obsidian notes.
//!
//! Each leaf category (resource, tab) gets one template. Templates are
//! plain text with `{{name}}` placeholders; they are compiled once per
//! run and rendered once per note. The engine is behind the
//! [`TemplateEngine`] capability trait so another substitution engine
//! can be dropped in without touching the import core.

mod engine;

pub use engine::PlaceholderEngine;

use std::collections::HashMap;

/// Which leaf category a template renders.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TemplateRole {
    Resource,
    Tab,
}

impl TemplateRole {
    /// Placeholder names a template of this role may reference.
    pub fn placeholders(self) -> &'static [&'static str] {
        match self {
            TemplateRole::Resource => &[
                "title",
                "date",
                "workspaceSectionTitleTag",
                "workspaceSubSectionTitleTag",
                "resourceSectionTitleTag",
                "url",
                "description",
            ],
            TemplateRole::Tab => &[
                "title",
                "date",
                "workspaceSectionTitleTag",
                "workspaceSubSectionTitleTag",
                "url",
            ],
        }
    }
}

/// The built-in template used when the caller supplies no custom text
/// for a role.
pub fn default_template(role: TemplateRole) -> &'static str {
    match role {
        TemplateRole::Resource => DEFAULT_RESOURCE_TEMPLATE,
        TemplateRole::Tab => DEFAULT_TAB_TEMPLATE,
    }
}

const DEFAULT_RESOURCE_TEMPLATE: &str = "\
---
date created: {{date}}
date modified: {{date}}
tags: Workona, {{workspaceSectionTitleTag}}, {{workspaceSubSectionTitleTag}}, {{resourceSectionTitleTag}}
---
# {{title}}
Source url: {{url}}
Description: {{description}}
";

const DEFAULT_TAB_TEMPLATE: &str = "\
---
date created: {{date}}
date modified: {{date}}
tags: Workona, {{workspaceSectionTitleTag}}, {{workspaceSubSectionTitleTag}}
---
# {{title}}
Source url: {{url}}
";

/// Values substituted into a template for one note.
///
/// Built per leaf and discarded after rendering; never persisted.
#[derive(Debug, Clone, Default)]
pub struct RenderContext {
    values: HashMap<&'static str, String>,
}

impl RenderContext {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, name: &'static str, value: impl Into<String>) {
        self.values.insert(name, value.into());
    }

    pub fn get(&self, name: &str) -> Option<&str> {
        self.values.get(name).map(String::as_str)
    }
}

/// A template of this role failed to compile. Fatal for the run: a
/// broken template would produce a broken note for every leaf.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum TemplateError {
    #[error("unclosed placeholder starting at offset {offset}")]
    UnclosedPlaceholder { offset: usize },
    #[error("unknown placeholder {{{{{name}}}}} for {role:?} template")]
    UnknownPlaceholder { role: TemplateRole, name: String },
}

/// A compiled template, ready to render.
pub trait Render: Send + Sync {
    /// Substitute context values into the template. Placeholders absent
    /// from the context render as the empty string.
    fn render(&self, context: &RenderContext) -> String;
}

/// Capability for compiling template text into render functions.
pub trait TemplateEngine: Send + Sync {
    fn compile(&self, role: TemplateRole, text: &str) -> Result<Box<dyn Render>, TemplateError>;
}
