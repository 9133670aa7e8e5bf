//! Materialization: apply the correlator's decisions to the vault.
//!
//! The walk is strictly sequential; every store call is awaited before
//! the next, so folder creation for a given path can never race itself.
//! Store failures are caught per call and the walk continues — at most
//! one attempt per leaf, no retries, no rollback.

use std::collections::HashSet;

use vault_store::{Notifier, VaultError, VaultStore};

use crate::correlate::{LeafDecision, LeafRef, Verdict};
use crate::render::NoteRenderer;
use crate::sanitize::sanitize;

/// Counts of what a run did to the vault.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RunReport {
    /// Notes written to previously empty paths.
    pub created: usize,
    /// Notes that replaced an existing file.
    pub overwritten: usize,
    /// Existing notes left in place because overwrite was off.
    pub skipped_existing: usize,
    /// Leaves skipped entirely because the snapshot showed no change.
    pub unchanged: usize,
    /// Leaves whose write failed.
    pub failed: usize,
}

impl RunReport {
    pub fn summary(&self) -> String {
        format!(
            "{} created, {} overwritten, {} skipped, {} unchanged, {} failed",
            self.created, self.overwritten, self.skipped_existing, self.unchanged, self.failed
        )
    }
}

enum Applied {
    Created,
    Overwritten,
    SkippedExisting,
}

/// Run the decision stream to completion against the store.
pub(crate) async fn materialize<'a, I>(
    store: &dyn VaultStore,
    notifier: &dyn Notifier,
    renderer: &NoteRenderer,
    decisions: I,
    dest_root: &str,
    overwrite: bool,
) -> RunReport
where
    I: Iterator<Item = LeafDecision<'a>>,
{
    let mut report = RunReport::default();
    let mut ensured: HashSet<String> = HashSet::new();

    for decision in decisions {
        if decision.verdict == Verdict::Unchanged {
            report.unchanged += 1;
            continue;
        }

        let body = renderer.render(&decision);
        let leaf_folder = match decision.leaf {
            LeafRef::Resource(_) => "Resources",
            LeafRef::Tab(_) => "Tabs",
        };
        let folder = format!(
            "{dest_root}/Workspaces/{}/{}/{leaf_folder}",
            sanitize(decision.group_title),
            sanitize(decision.sub_title),
        );
        ensure_folders(store, &mut ensured, &folder).await;

        let path = format!("{folder}/{}.md", sanitize(decision.leaf.title()));
        match apply(store, notifier, &path, &body, overwrite).await {
            Ok(Applied::Created) => {
                tracing::debug!(path = %path, "created note");
                report.created += 1;
            }
            Ok(Applied::Overwritten) => {
                tracing::debug!(path = %path, "overwrote note");
                report.overwritten += 1;
            }
            Ok(Applied::SkippedExisting) => report.skipped_existing += 1,
            Err(e) => {
                tracing::warn!(path = %path, "failed to write note: {e}");
                report.failed += 1;
            }
        }
    }

    report
}

/// Create every missing prefix of `folder`, each at most once per run.
/// Creation failures are logged, not propagated: the file write for
/// that path will fail on its own and is tolerated too.
async fn ensure_folders(store: &dyn VaultStore, ensured: &mut HashSet<String>, folder: &str) {
    let mut prefix = String::new();
    for segment in folder.split('/') {
        if !prefix.is_empty() {
            prefix.push('/');
        }
        prefix.push_str(segment);

        if !ensured.insert(prefix.clone()) {
            continue;
        }
        match store.exists(&prefix).await {
            Ok(true) => {}
            Ok(false) => {
                if let Err(e) = store.create_folder(&prefix).await {
                    tracing::warn!(path = %prefix, "failed to create folder: {e}");
                }
            }
            Err(e) => {
                tracing::warn!(path = %prefix, "failed to check folder: {e}");
            }
        }
    }
}

/// Write one rendered note under the overwrite policy.
async fn apply(
    store: &dyn VaultStore,
    notifier: &dyn Notifier,
    path: &str,
    body: &str,
    overwrite: bool,
) -> Result<Applied, VaultError> {
    match store.get_entry(path).await? {
        None => {
            store.create(path, body).await?;
            Ok(Applied::Created)
        }
        Some(entry) => {
            if !overwrite {
                notifier.notify(&format!(
                    "Note already exists for '{path}' - ignoring entry in data file"
                ));
                return Ok(Applied::SkippedExisting);
            }
            // Delete failure is logged and the create still attempted;
            // the create then reports the real failure for this leaf.
            if let Err(e) = store.delete(&entry).await {
                tracing::warn!(path = %path, "failed to delete old note: {e}");
            }
            store.create(path, body).await?;
            Ok(Applied::Overwritten)
        }
    }
}
