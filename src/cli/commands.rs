use crate::config::ExportConfig;
use crate::error::ExportResult;
use crate::excel::{ExcelExport, ExcelInspector};
use crate::export::run_export;
use crate::parser;
use colored::Colorize;
use std::path::PathBuf;

/// Execute the export command
pub fn export(
    input: PathBuf,
    output_dir: PathBuf,
    sheet_name: String,
    verbose: bool,
) -> ExportResult<()> {
    println!("{}", "📡 Network Monitor - Excel Export".bold().green());
    println!("   Input:  {}", input.display());

    if verbose {
        println!("{}", "📖 Reading log...".cyan());
    }

    let log = parser::parse_readings(&input)?;

    if verbose {
        println!(
            "   Found {} columns, {} rows",
            log.column_count(),
            log.row_count()
        );
        let ragged = log.ragged_rows();
        if !ragged.is_empty() {
            println!(
                "   {} {} rows differ in width from the header",
                "⚠️".yellow(),
                ragged.len()
            );
        }
        println!("{}", "📊 Exporting to Excel...".cyan());
    }

    let config = ExportConfig::new(output_dir).with_sheet_name(sheet_name);
    let mut exporter = ExcelExport::new(config);
    let summary = run_export(&mut exporter, &log)?;

    println!("   Output: {}\n", summary.path.display());
    println!("{}", "✅ Export Complete!".bold().green());
    println!(
        "   {} rows  {} {}  {} {}",
        summary.rows_written,
        "PASS:".green(),
        summary.pass_cells.to_string().green(),
        "FAIL:".red(),
        summary.fail_cells.to_string().red()
    );

    Ok(())
}

/// Execute the inspect command
pub fn inspect(file: PathBuf, verbose: bool) -> ExportResult<()> {
    println!("{}", "🔍 Network Monitor - Inspect".bold().green());
    println!("   File: {}\n", file.display());

    let summary = ExcelInspector::new(&file).inspect()?;

    println!("   Sheet:   {}", summary.sheet_name.bright_blue());
    println!("   Columns: {}", summary.columns.join(", "));
    println!("   Rows:    {}", summary.row_count());
    println!(
        "   {} {}  {} {}",
        "PASS:".green(),
        summary.pass_count.to_string().green(),
        "FAIL:".red(),
        summary.fail_count.to_string().red()
    );

    if verbose {
        println!();
        for (idx, row) in summary.rows.iter().enumerate() {
            println!("   {:>5}  {}", idx + 1, row.join(" | "));
        }
    }

    Ok(())
}
