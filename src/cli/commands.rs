use crate::error::TranscodeResult;
use crate::excel::CaseReader;
use crate::writer::{ShapeWriter, WriteMode};
use colored::Colorize;
use std::path::PathBuf;

fn build_reader(input: &PathBuf, sheet: Option<String>) -> CaseReader {
    let reader = CaseReader::new(input);
    match sheet {
        Some(name) => reader.with_sheet(name),
        None => reader,
    }
}

/// Execute the emit command
pub fn emit(
    input: PathBuf,
    output: PathBuf,
    sheet: Option<String>,
    append: bool,
    verbose: bool,
) -> TranscodeResult<()> {
    println!("{}", "🔩 Convshape - Emitting fixture list".bold().green());
    println!("   Input:  {}", input.display());
    println!("   Output: {}\n", output.display());

    if verbose {
        println!("{}", "📖 Reading workbook...".cyan());
    }

    let cases = build_reader(&input, sheet).read()?;

    if verbose {
        println!("   Sheet: {}", cases.sheet_name.bright_blue());
        println!(
            "   Scanned {} rows ({} skipped by the in_h sentinel)\n",
            cases.rows_scanned, cases.rows_skipped
        );
    }

    let mode = if append {
        WriteMode::Append
    } else {
        WriteMode::Truncate
    };

    if verbose {
        let mode_label = match mode {
            WriteMode::Truncate => "truncate",
            WriteMode::Append => "append",
        };
        println!("{}", format!("💾 Writing fixture lines ({})...", mode_label).cyan());
    }

    let written = ShapeWriter::new(&output, mode).write(&cases.cases)?;

    println!("{}", "✅ Emit Complete!".bold().green());
    println!(
        "   {} lines written, {} rows skipped\n",
        written, cases.rows_skipped
    );

    Ok(())
}

/// Execute the check command
pub fn check(input: PathBuf, sheet: Option<String>, verbose: bool) -> TranscodeResult<()> {
    println!("{}", "🔩 Convshape - Checking workbook".bold().green());
    println!("   Input: {}\n", input.display());

    let cases = build_reader(&input, sheet).read()?;

    if verbose {
        for case in &cases.cases {
            println!("   {}", case.format_line());
        }
        if !cases.cases.is_empty() {
            println!();
        }
    }

    println!("{}", "✅ Workbook OK".bold().green());
    println!("   Sheet: {}", cases.sheet_name.bright_blue());
    println!(
        "   {} fixture lines would be emitted, {} rows skipped\n",
        cases.cases.len(),
        cases.rows_skipped
    );

    Ok(())
}
