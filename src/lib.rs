//! Convshape - 3D convolution test-shape transcoder
//!
//! This library reads tabular convolution test-case data from an .xlsx
//! workbook (fixed 22-column layout) and emits one `conv_param_t<3>(...)`
//! fixture line per populated row, for use by a convolution benchmark suite.
//!
//! # Features
//!
//! - Named 22-column schema with a fail-fast width check
//! - Row skipping via the `in_h` sentinel (empty or zero)
//! - Defaulting: empty pad cells → 0, empty dilation cells → 1
//! - Truncate or append output modes
//!
//! # Example
//!
//! ```no_run
//! use convshape::excel::CaseReader;
//! use convshape::writer::{ShapeWriter, WriteMode};
//!
//! let cases = CaseReader::new("test_file_3d.xlsx").read()?;
//! let written = ShapeWriter::new("shape_conv3d", WriteMode::Truncate).write(&cases.cases)?;
//!
//! println!("{} fixture lines", written);
//! # Ok::<(), convshape::error::TranscodeError>(())
//! ```

pub mod cli;
pub mod error;
pub mod excel;
pub mod schema;
pub mod types;
pub mod writer;

// Re-export commonly used types
pub use error::{TranscodeError, TranscodeResult};
pub use excel::{CaseReader, CaseSheet};
pub use types::ConvCase;
pub use writer::{ShapeWriter, WriteMode};
