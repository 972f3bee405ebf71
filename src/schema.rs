//! Named column schema for the fixed 22-column test-case layout.
//!
//! The spreadsheet contract used to live implicitly in cell coordinates;
//! this module names every column once so the reader and the width check
//! share a single source of truth.

use crate::error::{TranscodeError, TranscodeResult};

/// One named column of the test-case sheet.
pub struct ColumnSpec {
    pub name: &'static str,
    /// 1-based spreadsheet column.
    pub column: u32,
    /// Required columns must be present in the sheet; optional ones
    /// fall back to a default when empty.
    pub required: bool,
}

const fn req(name: &'static str, column: u32) -> ColumnSpec {
    ColumnSpec {
        name,
        column,
        required: true,
    }
}

const fn opt(name: &'static str, column: u32) -> ColumnSpec {
    ColumnSpec {
        name,
        column,
        required: false,
    }
}

pub const COLUMN_COUNT: usize = 22;

/// Column layout of one convolution test case.
///
/// Order here is the cell order expected by `ConvCase::from_cells`.
pub const SCHEMA: [ColumnSpec; COLUMN_COUNT] = [
    req("batch", 1),
    req("in_channels", 2),
    req("out_channels", 3),
    req("in_t", 4),
    req("in_h", 5),
    req("in_w", 6),
    req("groups", 7),
    req("kernel_t", 8),
    req("kernel_h", 9),
    req("kernel_w", 10),
    req("stride_t", 11),
    req("stride_h", 12),
    req("stride_w", 13),
    opt("pad_front", 14),
    opt("pad_top", 15),
    opt("pad_left", 16),
    opt("pad_back", 17),
    opt("pad_bottom", 18),
    opt("pad_right", 19),
    opt("dilation_t", 20),
    opt("dilation_h", 21),
    opt("dilation_w", 22),
];

/// Index of the sentinel field (`in_h`) within [`SCHEMA`]. A row whose
/// sentinel cell is empty or zero is skipped entirely.
pub const SENTINEL_INDEX: usize = 4;

/// Highest 1-based column a sheet must actually contain.
///
/// The pad and dilation columns are excluded: an all-empty trailing block
/// there is the normal "use defaults" case, not a layout mismatch.
pub fn required_width() -> u32 {
    SCHEMA
        .iter()
        .filter(|spec| spec.required)
        .map(|spec| spec.column)
        .max()
        .unwrap_or(0)
}

/// Fail fast when the sheet is too narrow for the required columns.
pub fn validate_width(found: u32) -> TranscodeResult<()> {
    let needed = required_width();
    if found < needed {
        let last_required = SCHEMA
            .iter()
            .filter(|spec| spec.required)
            .max_by_key(|spec| spec.column)
            .map(|spec| spec.name)
            .unwrap_or("?");
        return Err(TranscodeError::Schema(format!(
            "sheet has {} populated columns, need at least {} (through '{}')",
            found, needed, last_required
        )));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_schema_covers_all_columns_in_order() {
        assert_eq!(SCHEMA.len(), COLUMN_COUNT);
        for (idx, spec) in SCHEMA.iter().enumerate() {
            assert_eq!(spec.column as usize, idx + 1, "column {} out of order", spec.name);
        }
    }

    #[test]
    fn test_sentinel_is_in_h() {
        assert_eq!(SCHEMA[SENTINEL_INDEX].name, "in_h");
        assert!(SCHEMA[SENTINEL_INDEX].required);
    }

    #[test]
    fn test_required_width_is_through_stride() {
        assert_eq!(required_width(), 13);
    }

    #[test]
    fn test_validate_width_accepts_full_and_minimal_sheets() {
        assert!(validate_width(22).is_ok());
        assert!(validate_width(13).is_ok());
    }

    #[test]
    fn test_validate_width_rejects_narrow_sheet() {
        let err = validate_width(12).unwrap_err();
        let msg = err.to_string();
        assert!(msg.contains("12"), "message was: {}", msg);
        assert!(msg.contains("stride_w"), "message was: {}", msg);
    }

    #[test]
    fn test_validate_width_rejects_empty_sheet() {
        assert!(validate_width(0).is_err());
    }
}
