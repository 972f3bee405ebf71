//! Excel import module
//!
//! Reads the fixed-layout convolution test matrix from an .xlsx workbook
//! and produces one [`ConvCase`](crate::types::ConvCase) per populated row.

mod reader;

pub use reader::{CaseReader, CaseSheet};
