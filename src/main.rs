use bitlocker_inventory::adapters::outbound::console::StderrProgressReporter;
use bitlocker_inventory::adapters::outbound::directory::LdapDirectoryGateway;
use bitlocker_inventory::adapters::outbound::filesystem::{FileSystemWriter, StdoutPresenter};
use bitlocker_inventory::application::dto::InventoryRequest;
use bitlocker_inventory::application::use_cases::RunInventoryUseCase;
use bitlocker_inventory::cli::Args;
use bitlocker_inventory::config;
use bitlocker_inventory::inventory::services::{CsvExporter, DatasetView};
use bitlocker_inventory::ports::outbound::OutputPresenter;
use bitlocker_inventory::shared::error::ExitCode;
use bitlocker_inventory::shared::Result;
use chrono::{DateTime, Utc};
use std::path::PathBuf;
use std::process;

#[tokio::main]
async fn main() {
    if let Err(e) = run().await {
        eprintln!("\n❌ An error occurred:\n");
        eprintln!("{}", e);

        // Display error chain
        let mut source = e.source();
        while let Some(err) = source {
            eprintln!("\nCaused by: {}", err);
            source = err.source();
        }

        eprintln!();
        process::exit(ExitCode::ApplicationError.as_i32());
    }
}

async fn run() -> Result<()> {
    // Parse command-line arguments
    let args = Args::parse_args();

    init_tracing();

    // Load configuration (environment error if absent - the directory
    // connection cannot be defaulted)
    let config = config::resolve_config(args.config.as_deref())?;

    // CLI options override configured policy defaults
    let scope = args.scope.clone().or_else(|| config.policy.scope.clone());
    let include_servers = args.include_servers || config.policy.include_servers;
    let max_last_logon_age_days = args
        .max_last_logon_age_days
        .unwrap_or(config.policy.max_last_logon_age_days);

    let now = Utc::now();

    // Create adapters (Dependency Injection); connect + bind happens here,
    // before any inventory query
    let directory_gateway = LdapDirectoryGateway::connect(&config.directory).await?;
    let progress_reporter = StderrProgressReporter::new();

    // Create use case with injected dependencies
    let use_case = RunInventoryUseCase::new(directory_gateway, progress_reporter)
        .with_concurrent_queries(config.directory.concurrent_queries);

    let request = InventoryRequest::new(scope, include_servers, max_last_logon_age_days, now);
    let response = use_case.execute(request).await?;

    // Console summary
    let summary = response.report.summary();
    println!(
        "Summary: {} of {} devices have BitLocker recovery keys in AD. ({} without)",
        summary.with_key, summary.total, summary.without_key
    );

    // Filter the view and export the visible rows
    let mut view = DatasetView::new(&response.report);
    if let Some(query) = args.filter.as_deref() {
        view.set_filter(query);
    }
    let csv = CsvExporter::render(&view.visible_rows());

    let presenter: Box<dyn OutputPresenter> = match args.output.as_deref() {
        Some("-") => Box::new(StdoutPresenter::new()),
        Some(path) => Box::new(FileSystemWriter::new(PathBuf::from(path))),
        None => Box::new(FileSystemWriter::new(PathBuf::from(
            default_report_filename(now),
        ))),
    };

    presenter.present(&csv)?;

    Ok(())
}

/// Default export destination, named for the moment the inventory ran.
fn default_report_filename(now: DateTime<Utc>) -> String {
    format!("BitLockerReport_{}.csv", now.format("%Y%m%d_%H%M%S"))
}

fn init_tracing() {
    use tracing_subscriber::layer::SubscriberExt;
    use tracing_subscriber::util::SubscriberInitExt;

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn")),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();
}
