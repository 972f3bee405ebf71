//! Fixture-list writer - test cases → one `conv_param_t<3>` line each

use crate::error::TranscodeResult;
use crate::types::ConvCase;
use std::fs::{File, OpenOptions};
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

/// How the output file is opened.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum WriteMode {
    /// Create or overwrite. Rerunning on unchanged input is byte-identical.
    #[default]
    Truncate,
    /// Append to an existing file (created if missing).
    Append,
}

/// Writer for the generated fixture list.
pub struct ShapeWriter {
    path: PathBuf,
    mode: WriteMode,
}

impl ShapeWriter {
    pub fn new<P: AsRef<Path>>(path: P, mode: WriteMode) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
            mode,
        }
    }

    /// Write one newline-terminated line per case, in case order.
    /// Returns the number of lines written.
    pub fn write(&self, cases: &[ConvCase]) -> TranscodeResult<usize> {
        let file = match self.mode {
            WriteMode::Truncate => File::create(&self.path)?,
            WriteMode::Append => OpenOptions::new()
                .create(true)
                .append(true)
                .open(&self.path)?,
        };

        let mut out = BufWriter::new(file);
        for case in cases {
            writeln!(out, "{}", case.format_line())?;
        }
        out.flush()?;

        Ok(cases.len())
    }
}
