use std::path::PathBuf;

use anyhow::Context;
use clap::Parser;
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

use importer::ImportOptions;
use vault_store::{LocalVault, TracingNotifier};
use workona_export::WorkspaceDocument;

mod config;

/// CLI arguments for the importer.
#[derive(Parser)]
#[command(name = "workona-import")]
#[command(about = "Generate Obsidian notes from a Workona export")]
struct Cli {
    /// Workona export JSON files, imported in order
    #[arg(required = true)]
    exports: Vec<PathBuf>,

    /// Export from a previous run; entries with an unchanged url are skipped
    #[arg(long)]
    previous: Option<PathBuf>,

    /// Vault root directory (falls back to OBSIDIAN_VAULT_PATH)
    #[arg(long)]
    vault: Option<PathBuf>,

    /// Destination folder inside the vault
    #[arg(long, default_value = "Workona")]
    folder_name: String,

    /// Leave existing notes in place instead of overwriting them
    #[arg(long)]
    no_overwrite: bool,

    /// Do not import resource items
    #[arg(long)]
    skip_resources: bool,

    /// Do not import tabs
    #[arg(long)]
    skip_tabs: bool,

    /// File with a custom resource template
    #[arg(long)]
    resource_template: Option<PathBuf>,

    /// File with a custom tab template
    #[arg(long)]
    tab_template: Option<PathBuf>,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing for logging
    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(std::io::stderr))
        .with(EnvFilter::from_default_env())
        .init();

    let cli = Cli::parse();

    let vault_path = config::resolve_vault_path(cli.vault)?;
    tracing::info!("Vault path: {}", vault_path.display());

    let previous = match &cli.previous {
        Some(path) => Some(read_document(path).await?),
        None => None,
    };

    let options = ImportOptions {
        destination_folder: cli.folder_name,
        overwrite_existing: !cli.no_overwrite,
        import_resources: !cli.skip_resources,
        import_tabs: !cli.skip_tabs,
        resource_template: read_optional(&cli.resource_template).await?,
        tab_template: read_optional(&cli.tab_template).await?,
        ..ImportOptions::default()
    };

    let store = LocalVault::new(vault_path);
    for export in &cli.exports {
        let document = read_document(export).await?;
        let report =
            importer::run(&document, previous.as_ref(), &options, &store, &TracingNotifier)
                .await?;
        println!("{}: {}", export.display(), report.summary());
    }
    Ok(())
}

async fn read_document(path: &PathBuf) -> anyhow::Result<WorkspaceDocument> {
    let text = tokio::fs::read_to_string(path)
        .await
        .with_context(|| format!("reading {}", path.display()))?;
    WorkspaceDocument::from_json(&text)
        .with_context(|| format!("parsing {}", path.display()))
}

async fn read_optional(path: &Option<PathBuf>) -> anyhow::Result<Option<String>> {
    match path {
        Some(path) => {
            let text = tokio::fs::read_to_string(path)
                .await
                .with_context(|| format!("reading {}", path.display()))?;
            Ok(Some(text))
        }
        None => Ok(None),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_multiple_export_files() {
        let cli = Cli::try_parse_from(["workona-import", "first.json", "second.json"]).unwrap();
        assert_eq!(
            cli.exports,
            vec![PathBuf::from("first.json"), PathBuf::from("second.json")]
        );
    }

    #[test]
    fn requires_at_least_one_export_file() {
        assert!(Cli::try_parse_from(["workona-import"]).is_err());
    }
}
