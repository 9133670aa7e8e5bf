//! Tree-diffing import engine: Workona exports to Obsidian notes.
//!
//! Walks a parsed Workona export, correlates each leaf against an
//! optional previous export of the same account, renders the stale
//! leaves through the note templates and writes them to the vault.
//! Leaves whose URL is unchanged since the previous export cost
//! nothing: no render, no vault call.

mod correlate;
mod materialize;
mod options;
mod render;
mod sanitize;

pub use correlate::{LeafDecision, LeafRef, Toggles, Verdict, leaf_decisions};
pub use materialize::RunReport;
pub use options::ImportOptions;
pub use render::NoteRenderer;
pub use sanitize::sanitize;

use note_templates::{PlaceholderEngine, TemplateEngine, TemplateError};
use vault_store::{Notifier, VaultStore};
use workona_export::WorkspaceDocument;

/// An import run failed outright. Everything else (store failures,
/// policy skips, malformed subtrees) is handled per leaf and reported
/// in the [`RunReport`].
#[derive(Debug, thiserror::Error)]
pub enum ImportError {
    #[error(transparent)]
    Template(#[from] TemplateError),
}

/// Run one import with the built-in placeholder template engine.
pub async fn run(
    document: &WorkspaceDocument,
    previous: Option<&WorkspaceDocument>,
    options: &ImportOptions,
    store: &dyn VaultStore,
    notifier: &dyn Notifier,
) -> Result<RunReport, ImportError> {
    run_with_engine(document, previous, options, store, notifier, &PlaceholderEngine).await
}

/// Run one import with a caller-supplied template engine.
///
/// The walk is depth-first over the new document only, in its insertion
/// order, and runs to completion: there is no cancellation mid-run.
pub async fn run_with_engine(
    document: &WorkspaceDocument,
    previous: Option<&WorkspaceDocument>,
    options: &ImportOptions,
    store: &dyn VaultStore,
    notifier: &dyn Notifier,
    engine: &dyn TemplateEngine,
) -> Result<RunReport, ImportError> {
    let date = options
        .date
        .clone()
        .unwrap_or_else(|| chrono::Local::now().format("%Y-%m-%d").to_string());
    let renderer = NoteRenderer::new(engine, options, date)?;

    let toggles = Toggles {
        resources: options.import_resources,
        tabs: options.import_tabs,
    };
    let decisions = leaf_decisions(document, previous, toggles);

    let report = materialize::materialize(
        store,
        notifier,
        &renderer,
        decisions,
        &options.destination_folder,
        options.overwrite_existing,
    )
    .await;

    tracing::info!("import finished: {}", report.summary());
    notifier.notify(&format!("Import finished: {}", report.summary()));
    Ok(report)
}
