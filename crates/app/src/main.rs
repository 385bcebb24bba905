use std::path::PathBuf;
use std::process::ExitCode;
use std::sync::Arc;

use clap::Parser;
use dioxus::LaunchBuilder;
use dioxus::desktop::{Config as DesktopConfig, WindowBuilder};
use services::{AppServices, Clock, DeleteOutcome, ReportService, ReportServiceError};
use status_core::model::Report;
use tracing_subscriber::EnvFilter;
use ui::{App, UiApp, build_app_context};

mod cli;
mod prompter;

use cli::{Cli, Command, normalize_sqlite_url, prepare_sqlite_file};
use prompter::TerminalPrompter;

struct DesktopApp {
    reports: Arc<ReportService>,
    export_dir: PathBuf,
}

impl UiApp for DesktopApp {
    fn reports(&self) -> Arc<ReportService> {
        Arc::clone(&self.reports)
    }

    fn export_dir(&self) -> PathBuf {
        self.export_dir.clone()
    }
}

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

async fn run(cli: Cli) -> anyhow::Result<ExitCode> {
    // Open + migrate SQLite at startup. Keep this in the binary glue so core/services stay pure.
    let db_url = normalize_sqlite_url(&cli.db_url);
    prepare_sqlite_file(&db_url)?;
    let services =
        AppServices::new_sqlite(&db_url, Clock::default_clock(), cli.export_dir.clone()).await?;
    let reports = services.reports();
    tracing::debug!(db_url = %db_url, export_dir = %services.export_dir().display(), "services ready");

    match cli.command.unwrap_or(Command::Ui) {
        Command::Ui => {
            launch_ui(&services);
            Ok(ExitCode::SUCCESS)
        }
        Command::List => {
            print!("{}", reports.render().await?);
            Ok(ExitCode::SUCCESS)
        }
        Command::Save(fields) => {
            let prompter = TerminalPrompter::new(true);
            match reports.save_report(fields.into_draft(), &prompter).await {
                Ok(saved) => {
                    print!("{}", saved.listing);
                    Ok(ExitCode::SUCCESS)
                }
                // The prompter already told the user.
                Err(ReportServiceError::Validation(_)) => Ok(ExitCode::from(1)),
                Err(err) => Err(err.into()),
            }
        }
        Command::Delete { index, yes } => {
            let prompter = TerminalPrompter::new(yes);
            match reports.delete_report(index, &prompter).await {
                Ok(DeleteOutcome::Removed { report, listing }) => {
                    eprintln!("Deleted \"{}\".", report.title());
                    print!("{listing}");
                    Ok(ExitCode::SUCCESS)
                }
                Ok(DeleteOutcome::Cancelled) => {
                    eprintln!("Cancelled.");
                    Ok(ExitCode::SUCCESS)
                }
                Err(ReportServiceError::IndexOutOfRange { .. }) => Ok(ExitCode::from(1)),
                Err(err) => Err(err.into()),
            }
        }
        Command::Export { fields, saved, out } => {
            let draft = match saved {
                Some(index) => reports
                    .list_reports()
                    .await?
                    .get(index)
                    .map(Report::to_draft)
                    .ok_or_else(|| anyhow::anyhow!("no saved report at index {index}"))?,
                None => fields.into_draft(),
            };
            let dir = out.unwrap_or_else(|| services.export_dir().to_path_buf());
            let path = reports.export_to_dir(&draft, &dir)?;
            println!("{}", path.display());
            Ok(ExitCode::SUCCESS)
        }
    }
}

fn launch_ui(services: &AppServices) {
    let app: Arc<dyn UiApp> = Arc::new(DesktopApp {
        reports: services.reports(),
        export_dir: services.export_dir().to_path_buf(),
    });
    let context = build_app_context(&app);

    // On macOS, Dioxus/tao can default to an always-on-top window in some dev setups.
    // Explicitly disable it so the app doesn't behave like a modal window.
    let desktop_cfg = DesktopConfig::new().with_window(
        WindowBuilder::new()
            .with_title("Weekly Status Report")
            .with_always_on_top(false),
    );

    LaunchBuilder::desktop()
        .with_cfg(desktop_cfg)
        .with_context(context)
        .launch(App);
}

#[tokio::main]
async fn main() -> ExitCode {
    init_tracing();
    let cli = Cli::parse();
    match run(cli).await {
        Ok(code) => code,
        Err(err) => {
            // At this layer (binary glue), printing once is fine.
            eprintln!("{err:#}");
            ExitCode::from(2)
        }
    }
}
