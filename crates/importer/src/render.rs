//! Per-leaf note rendering.
//!
//! Compiles the two role templates once at run start and builds the
//! throwaway render context for each changed leaf.

use note_templates::{
    Render, RenderContext, TemplateEngine, TemplateError, TemplateRole, default_template,
};

use crate::correlate::{LeafDecision, LeafRef};
use crate::options::ImportOptions;

/// Holds the compiled resource and tab templates plus the run's date
/// stamp.
pub struct NoteRenderer {
    resource: Box<dyn Render>,
    tab: Box<dyn Render>,
    date: String,
}

impl NoteRenderer {
    /// Compile both role templates. Custom template text from the
    /// options takes precedence over the built-in defaults. A compile
    /// failure here aborts the run before any note is written.
    pub fn new(
        engine: &dyn TemplateEngine,
        options: &ImportOptions,
        date: String,
    ) -> Result<Self, TemplateError> {
        let resource_text = options
            .resource_template
            .as_deref()
            .unwrap_or(default_template(TemplateRole::Resource));
        let tab_text = options
            .tab_template
            .as_deref()
            .unwrap_or(default_template(TemplateRole::Tab));

        Ok(Self {
            resource: engine.compile(TemplateRole::Resource, resource_text)?,
            tab: engine.compile(TemplateRole::Tab, tab_text)?,
            date,
        })
    }

    /// Render the note body for one leaf.
    pub fn render(&self, decision: &LeafDecision<'_>) -> String {
        let mut ctx = RenderContext::new();
        ctx.insert("title", decision.leaf.title());
        ctx.insert("date", self.date.as_str());
        ctx.insert("workspaceSectionTitleTag", tag_token(decision.group_title));
        ctx.insert(
            "workspaceSubSectionTitleTag",
            tag_token(decision.sub_title),
        );
        ctx.insert("url", decision.leaf.url());

        match decision.leaf {
            LeafRef::Resource(item) => {
                if let Some(coll_title) = decision.collection_title {
                    ctx.insert("resourceSectionTitleTag", tag_token(coll_title));
                }
                ctx.insert(
                    "description",
                    item.description.as_deref().unwrap_or("Not provided"),
                );
                self.resource.render(&ctx)
            }
            LeafRef::Tab(_) => self.tab.render(&ctx),
        }
    }
}

/// Turn an ancestor title into a tag token by dropping the first
/// embedded space. Only the first occurrence — "My Work Space" becomes
/// "MyWork Space". This mirrors the upstream exporter's behavior and is
/// preserved faithfully.
fn tag_token(title: &str) -> String {
    title.replacen(' ', "", 1)
}
