use std::time::Instant;

use anyhow::{Context, Result};
use comfy_table::Table;
use tracing::info;

use mts_cli::cli::{ExportArgs, ExportFormatArg, KindsArgs, ShowArgs};
use mts_cli::config::{load_case, load_kinds, select_batch_loads};
use mts_export::{ExportFormat, ExportOptions, ExportSummary, export_case};
use mts_normalize::normalize;

use crate::summary::{apply_table_style, print_batch_settings};

pub fn run_export(args: &ExportArgs) -> Result<ExportSummary> {
    let case = load_case(&args.case_file)?;
    let kinds = load_kinds(args.kinds.as_deref())?;
    let options = ExportOptions::new(&args.output_dir).with_format(export_format(args.format));

    let start = Instant::now();
    let summary = export_case(Some(&case), &kinds, &options)
        .with_context(|| format!("export case {}", case.name))?;
    info!(
        batch_loads = summary.batches.len(),
        files = summary.file_count(),
        duration_ms = start.elapsed().as_millis(),
        "export complete"
    );
    Ok(summary)
}

pub fn run_show(args: &ShowArgs) -> Result<()> {
    let case = load_case(&args.case_file)?;
    let kinds = load_kinds(args.kinds.as_deref())?;

    for batch_load in select_batch_loads(&case, args.batch.as_deref())? {
        let settings = normalize(batch_load, &kinds)?;
        print_batch_settings(&batch_load.batch_id, &settings);
    }
    Ok(())
}

pub fn run_kinds(args: &KindsArgs) -> Result<()> {
    let kinds = load_kinds(args.kinds.as_deref())?;
    let mut table = Table::new();
    table.set_header(vec!["Kind", "Mime Types"]);
    apply_table_style(&mut table);
    for (kind, types) in kinds.iter() {
        let members = types.iter().map(String::as_str).collect::<Vec<_>>();
        table.add_row(vec![kind.to_string(), members.join("\n")]);
    }
    println!("{table}");
    Ok(())
}

fn export_format(format: ExportFormatArg) -> ExportFormat {
    match format {
        ExportFormatArg::Json => ExportFormat::Json,
        ExportFormatArg::Csv => ExportFormat::Csv,
        ExportFormatArg::Both => ExportFormat::Both,
    }
}
