//! Statement export binary
//!
//! Renders the seed statement through the configured rendering service and
//! writes the document into the output directory.
//!
//! # Usage
//!
//! ```bash
//! STATEMENT_RENDERER_BASE_URL=http://localhost:3000 cargo run --bin statement-export
//! ```
//!
//! # Environment Variables
//!
//! * `STATEMENT_RENDERER_BASE_URL` - Rendering service URL (default: http://localhost:3000)
//! * `STATEMENT_PRIMARY_ENDPOINT` - Endpoint tried first (default: /api/index.py)
//! * `STATEMENT_FALLBACK_ENDPOINT` - Endpoint tried second (default: /api)
//! * `STATEMENT_TIMEOUT_SECS` - Request timeout, 1 to 300 (default: 30)
//! * `STATEMENT_OUTPUT_DIR` - Where the document is written (default: .)
//! * `STATEMENT_LOG_LEVEL` - trace, debug, info, warn, error (default: info)

use std::process::ExitCode;
use std::sync::Arc;

use anyhow::Context;
use core_kernel::format_statement_amount;
use domain_export::{DirectorySink, ExportPipeline, HttpRenderAdapter};
use interface_app::{telemetry::init_tracing, AppConfig, AppError, StatementSession};

#[tokio::main]
async fn main() -> ExitCode {
    match run().await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            let message = e
                .downcast_ref::<AppError>()
                .map(AppError::user_message)
                .unwrap_or_else(|| format!("{e:#}"));
            tracing::error!(error = %format!("{e:#}"), "Export failed");
            eprintln!("{message}");
            ExitCode::FAILURE
        }
    }
}

async fn run() -> anyhow::Result<()> {
    let config = AppConfig::load().context("loading configuration")?;
    init_tracing(&config.log_level);

    tracing::info!(
        renderer = %config.renderer_base_url,
        output_dir = %config.output_dir.display(),
        "Starting statement export"
    );

    let adapter = HttpRenderAdapter::new(config.render_config()).map_err(AppError::from)?;
    let pipeline = Arc::new(ExportPipeline::new(Arc::new(adapter), config.endpoint_policy()));
    let session = StatementSession::new(pipeline);

    let summary = session.summary();
    tracing::info!(
        trips_total = %format_statement_amount(summary.trips_total),
        deductions_total = %format_statement_amount(summary.deductions_total),
        check_amount = %format_statement_amount(summary.check_amount),
        mismatches = summary.mismatches.len(),
        "Statement ready"
    );

    let receipt = session
        .export_to(&DirectorySink::new(&config.output_dir))
        .await
        .map_err(AppError::from)?;

    tracing::info!(path = %receipt.location, size = receipt.size, "Statement written");
    println!("{}", receipt.location);
    Ok(())
}
