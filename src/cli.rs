//! `agentgit` command-line front end.
//!
//! Plays the part of the extension popup: an HTML file stands in for the
//! active tab, and results are printed on stdout.

use std::io::{self, Write};
use std::path::{Path, PathBuf};

use ag_app::usecases::{CommitProjection, DEFAULT_EXPORT_FILE_NAME};
use ag_app::{App, AppPaths};
use ag_core::ports::AppDirsPort;
use ag_core::{Commit, CommitId, CommitLabel};
use ag_infra::DirsAppDirsAdapter;
use anyhow::Context;
use clap::{Parser, Subcommand};

use crate::bootstrap::tracing::init_tracing_subscriber;
use crate::bootstrap::{resolve_config, wire_app, ResolvedSettings};

#[derive(Parser, Debug)]
#[command(name = "agentgit")]
#[command(about = "Extract page content and keep it as labeled commits", long_about = None)]
pub struct Cli {
    /// Configuration file (defaults to config.toml in the app data directory)
    #[arg(short, long, global = true, value_name = "PATH")]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug, PartialEq, Eq)]
pub enum Commands {
    /// Print the content that would be committed from a page
    Extract {
        /// Saved HTML page
        #[arg(short, long)]
        page: PathBuf,
    },
    /// Extract content from a page and save it under a label
    Commit {
        /// Saved HTML page
        #[arg(short, long)]
        page: PathBuf,
        /// Commit message
        #[arg(short, long)]
        label: String,
    },
    /// List saved commits, newest first
    List,
    /// Print one commit in full
    Show { id: String },
    /// Delete a commit
    Delete { id: String },
    /// Write a commit's content to a text file
    Export {
        id: String,
        /// Output file (defaults to markdown-content.txt in the downloads directory)
        #[arg(short, long)]
        out: Option<PathBuf>,
    },
}

impl Commands {
    fn page(&self) -> Option<&Path> {
        match self {
            Commands::Extract { page } | Commands::Commit { page, .. } => Some(page.as_path()),
            _ => None,
        }
    }
}

/// Resolves configuration, initializes tracing and runs one command.
pub async fn run(cli: Cli) -> anyhow::Result<()> {
    let app_dirs = DirsAppDirsAdapter::new()
        .get_app_dirs()
        .context("Failed to resolve app data directory")?;
    let paths = AppPaths::from_app_dirs(&app_dirs);

    let config = resolve_config(cli.config, &paths)?;
    let settings = ResolvedSettings::resolve(&config, &paths);
    let _log_guard = init_tracing_subscriber(settings.log_dir.as_deref())
        .context("Failed to initialize tracing")?;

    let app = wire_app(&settings, cli.command.page())?;
    let export_dir = dirs::download_dir().unwrap_or(paths.exports_dir);

    let result = execute(&app, cli.command, &export_dir, &mut io::stdout().lock()).await;
    if let Err(err) = &result {
        tracing::error!(error = %format!("{err:#}"), "command failed");
    }
    result
}

/// Runs `command` against `app`, writing user-facing output to `out`.
pub async fn execute<W: Write>(
    app: &App,
    command: Commands,
    export_dir: &Path,
    out: &mut W,
) -> anyhow::Result<()> {
    match command {
        Commands::Extract { .. } => {
            let pending = app.stage_commit().execute().await?;
            writeln!(out, "{}", pending.content())?;
        }
        Commands::Commit { label, .. } => {
            let pending = app.stage_commit().execute().await?;
            let label = CommitLabel::parse(&label)?;
            let commit = app.confirm_commit().execute(pending, label).await?;
            writeln!(out, "committed {} {}", commit.id, commit.label)?;
        }
        Commands::List => {
            let rows = app.list_commit_projections().execute().await?;
            write!(out, "{}", render_rows(&rows))?;
        }
        Commands::Show { id } => {
            let id = CommitId::from_string(id);
            match app.get_commit().execute(&id).await? {
                Some(commit) => write!(out, "{}", render_commit(&commit))?,
                None => writeln!(out, "commit not found: {id}")?,
            }
        }
        Commands::Delete { id } => {
            app.delete_commit()
                .execute(&CommitId::from_string(id))
                .await?;
        }
        Commands::Export { id, out: path } => {
            let id = CommitId::from_string(id);
            let path = path.unwrap_or_else(|| export_dir.join(DEFAULT_EXPORT_FILE_NAME));
            match app.export_commit().execute(&id, &path).await? {
                Some(written) => writeln!(out, "exported to {}", written.display())?,
                None => writeln!(out, "commit not found: {id}")?,
            }
        }
    }
    Ok(())
}

fn render_rows(rows: &[CommitProjection]) -> String {
    if rows.is_empty() {
        return "no commits yet\n".to_string();
    }

    let mut text = String::new();
    for row in rows {
        let preview = row.preview.split_whitespace().collect::<Vec<_>>().join(" ");
        text.push_str(&format!(
            "{}  {}  {}\n    {}\n",
            row.id, row.created_at_display, row.label, preview
        ));
    }
    text
}

fn render_commit(commit: &Commit) -> String {
    format!(
        "id:      {}\nmessage: {}\ndate:    {}\n\n{}\n",
        commit.id,
        commit.label,
        commit.created_at.to_rfc3339(),
        commit.content
    )
}
