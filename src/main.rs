use clap::{Parser, Subcommand};
use convshape::cli;
use convshape::error::TranscodeResult;
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "convshape")]
#[command(about = "Transcode 3D convolution test-case spreadsheets into conv_param_t fixture lists.")]
#[command(long_about = "Convshape - Convolution test-shape transcoder

Reads a fixed 22-column .xlsx test matrix (batch, channels, input dims,
groups, kernel, stride, padding, dilation) and emits one line per row:

  conv_param_t<3>(1,3,8,{4,16,16},1,{1,3,3},{1,1,1},{0,0,0,0,0,0},{1,1,1}),

ROW RULES:
  - A row whose in_h cell is empty or zero is skipped (blank trailing rows)
  - Empty padding cells default to 0, empty dilation cells default to 1
  - Everything else passes through verbatim, unvalidated

COMMANDS:
  emit   - Transcode a workbook into a fixture list file
  check  - Dry run: report line/skip counts without writing

EXAMPLES:
  convshape emit test_file_3d.xlsx shape_conv3d
  convshape emit test_file_3d.xlsx shape_conv_dw --sheet depthwise --append
  convshape check test_file_3d.xlsx --verbose")]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    #[command(long_about = "Transcode a workbook into a fixture list file.

Scans every row of the selected sheet (the first sheet unless --sheet is
given), skipping rows whose in_h cell is empty or zero, and writes one
conv_param_t<3>(...) line per remaining row, in source row order.

OUTPUT MODE:
  Default is create/overwrite, so reruns are byte-identical.
  Use --append to add lines to an existing fixture list instead
  (useful when collecting shapes from several workbooks into one file).

EXAMPLES:
  convshape emit test_file_3d.xlsx shape_conv3d
  convshape emit test_file_dw.xlsx shape_conv_dw --append")]
    /// Transcode a workbook into a fixture list file
    Emit {
        /// Path to the test-matrix workbook (.xlsx)
        input: PathBuf,

        /// Output fixture list path
        output: PathBuf,

        /// Sheet to read (default: first sheet in the workbook)
        #[arg(short, long)]
        sheet: Option<String>,

        /// Append to the output file instead of overwriting it
        #[arg(short, long)]
        append: bool,

        /// Show verbose transcoding steps
        #[arg(short, long)]
        verbose: bool,
    },

    #[command(long_about = "Dry run: scan a workbook without writing anything.

Opens the workbook, validates that the sheet is wide enough for the
required columns (through stride_w), and reports how many fixture lines
would be emitted and how many rows the in_h sentinel skips.

Use --verbose to print every line that emit would produce.

EXAMPLES:
  convshape check test_file_3d.xlsx
  convshape check test_file_3d.xlsx --sheet depthwise --verbose")]
    /// Dry run: report line/skip counts without writing
    Check {
        /// Path to the test-matrix workbook (.xlsx)
        input: PathBuf,

        /// Sheet to read (default: first sheet in the workbook)
        #[arg(short, long)]
        sheet: Option<String>,

        /// Print every line that emit would produce
        #[arg(short, long)]
        verbose: bool,
    },
}

fn main() -> TranscodeResult<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Emit {
            input,
            output,
            sheet,
            append,
            verbose,
        } => cli::emit(input, output, sheet, append, verbose),

        Commands::Check {
            input,
            sheet,
            verbose,
        } => cli::check(input, sheet, verbose),
    }
}
