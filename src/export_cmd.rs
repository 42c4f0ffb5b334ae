use std::path::{Path, PathBuf};

use anyhow::{Result, bail};
use chrono::Utc;
use tracing::{error, info, info_span};

use leavecal_io::{
    BuiltinCapabilities, CapabilityProvider, ExportContext, ExportFormat, IoError, exporter_for,
    run_export, write_artifacts,
};

use crate::cli::ExportArgs;
use crate::convert;
use crate::state::AppState;

/// Runs every requested export independently and reports each outcome.
pub fn run(args: &ExportArgs, state: &AppState) -> Result<()> {
    let _span = info_span!("export").entered();
    let settings = convert::build_export_settings(&state.config.export)?;
    let output_dir = args
        .output_dir
        .clone()
        .unwrap_or_else(|| state.config.export.output_dir.clone());
    let formats = requested_formats(args);

    let ctx = ExportContext {
        dataset: &state.dataset,
        roc_year: state.config.roc_year(),
        settings: &settings,
        generated_at: Utc::now(),
    };

    let mut failed = Vec::new();
    for format in formats {
        match export_one(format, &BuiltinCapabilities, &ctx, &output_dir) {
            Ok(paths) => {
                for path in &paths {
                    println!("✅ {format}: {}", path.display());
                }
            }
            Err(e) => {
                error!(%format, error = %e, "export failed");
                println!("❌ {format}: {e}");
                failed.push(format);
            }
        }
    }

    if !failed.is_empty() {
        let names: Vec<&str> = failed.iter().map(|f| f.name()).collect();
        bail!("{} export(s) failed: {}", failed.len(), names.join(", "));
    }
    info!(dir = %output_dir.display(), "exports finished");
    Ok(())
}

/// Flag order with duplicates removed; all formats when none are given.
fn requested_formats(args: &ExportArgs) -> Vec<ExportFormat> {
    if args.format.is_empty() {
        return ExportFormat::ALL.to_vec();
    }
    let mut formats: Vec<ExportFormat> = Vec::new();
    for f in args.format.iter().copied().map(ExportFormat::from) {
        if !formats.contains(&f) {
            formats.push(f);
        }
    }
    formats
}

fn export_one(
    format: ExportFormat,
    provider: &dyn CapabilityProvider,
    ctx: &ExportContext<'_>,
    dir: &Path,
) -> Result<Vec<PathBuf>, IoError> {
    let exporter = exporter_for(format);
    let artifacts = run_export(exporter.as_ref(), provider, ctx)?;
    write_artifacts(dir, &artifacts)
}
