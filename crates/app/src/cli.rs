use std::path::{Path, PathBuf};

use clap::{Args, Parser, Subcommand};
use status_core::model::ReportDraft;

pub const DEFAULT_DB_URL: &str = "sqlite:status-reports.sqlite3";

#[derive(Debug, Parser)]
#[command(name = "status-report", version, about = "Write, keep and export weekly status reports")]
pub struct Cli {
    /// SQLite database holding saved reports.
    #[arg(long = "db", env = "STATUS_DB_URL", default_value = DEFAULT_DB_URL, global = true)]
    pub db_url: String,

    /// Directory exported reports are written into.
    #[arg(long, env = "STATUS_EXPORT_DIR", default_value = ".", global = true)]
    pub export_dir: PathBuf,

    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Open the report window (default).
    Ui,
    /// Print saved reports, newest first.
    List,
    /// Save a new report.
    Save(ReportFields),
    /// Delete the report at a position shown by `list`.
    Delete {
        index: usize,
        /// Skip the confirmation prompt.
        #[arg(long, short)]
        yes: bool,
    },
    /// Write a plain-text report without saving it.
    Export {
        #[command(flatten)]
        fields: ReportFields,
        /// Export the saved report at this position instead of the field flags.
        #[arg(long)]
        saved: Option<usize>,
        /// Overrides --export-dir for this export.
        #[arg(long)]
        out: Option<PathBuf>,
    },
}

#[derive(Debug, Clone, Default, Args)]
pub struct ReportFields {
    #[arg(long, default_value = "")]
    pub title: String,
    #[arg(long, default_value = "")]
    pub goal: String,
    #[arg(long, default_value = "")]
    pub manager: String,
    #[arg(long, default_value = "")]
    pub health: String,
    #[arg(long, default_value = "")]
    pub accomplishments: String,
    #[arg(long, default_value = "")]
    pub next_week_plans: String,
    #[arg(long, default_value = "")]
    pub milestones: String,
    #[arg(long, default_value = "")]
    pub issues: String,
    #[arg(long, default_value = "")]
    pub changes: String,
}

impl ReportFields {
    #[must_use]
    pub fn into_draft(self) -> ReportDraft {
        ReportDraft {
            title: self.title,
            goal: self.goal,
            manager: self.manager,
            health: self.health,
            accomplishments: self.accomplishments,
            next_week_plans: self.next_week_plans,
            milestones: self.milestones,
            issues: self.issues,
            changes: self.changes,
        }
    }
}

/// Turn a relative `sqlite:` path into an absolute `sqlite://` URL.
pub fn normalize_sqlite_url(raw: &str) -> String {
    if raw == "sqlite::memory:" || raw.starts_with("sqlite://") {
        return raw.to_string();
    }

    let trimmed = raw.trim();
    let path_str = trimmed.strip_prefix("sqlite:").unwrap_or(trimmed);
    let path = Path::new(path_str);
    let absolute = if path.is_absolute() {
        path.to_path_buf()
    } else {
        std::env::current_dir()
            .unwrap_or_else(|_| PathBuf::from("."))
            .join(path)
    };
    format!("sqlite://{}", absolute.display())
}

/// Make sure the database file and its parent directory exist.
///
/// # Errors
///
/// Returns an error for a URL without a file path, or if the file cannot be created.
pub fn prepare_sqlite_file(db_url: &str) -> anyhow::Result<()> {
    if db_url == "sqlite::memory:" {
        return Ok(());
    }

    let path = db_url
        .strip_prefix("sqlite://")
        .ok_or_else(|| anyhow::anyhow!("invalid --db value: {db_url}"))?;
    let path = path.split('?').next().unwrap_or(path);
    if path.is_empty() {
        anyhow::bail!("invalid --db value: {db_url}");
    }

    let path = Path::new(path);
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)?;
    }

    if !path.exists() {
        std::fs::OpenOptions::new()
            .create(true)
            .write(true)
            .truncate(false)
            .open(path)?;
    }

    Ok(())
}
