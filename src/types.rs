use crate::schema;
use calamine::Data;

//==============================================================================
// Convolution test case
//==============================================================================

/// One convolution test case, read from one spreadsheet row.
///
/// Fields hold the already-rendered decimal strings that go into the output
/// line. Values are carried verbatim; only the pad and dilation blocks are
/// defaulted (to 0 and 1) when their cells are empty or zero.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConvCase {
    pub batch: String,
    pub in_channels: String,
    pub out_channels: String,
    /// Input dimensions: time/depth, height, width.
    pub input: [String; 3],
    pub groups: String,
    pub kernel: [String; 3],
    pub stride: [String; 3],
    /// front, top, left, back, bottom, right.
    pub pad: [String; 6],
    pub dilation: [String; 3],
}

impl ConvCase {
    /// Build a case from one row of cells, in [`schema::SCHEMA`] order.
    ///
    /// Returns `None` when the sentinel cell (`in_h`) is empty or zero,
    /// which marks a blank or malformed row to be skipped.
    pub fn from_cells(cells: &[Data; schema::COLUMN_COUNT]) -> Option<Self> {
        if is_falsy(&cells[schema::SENTINEL_INDEX]) {
            return None;
        }

        Some(Self {
            batch: render(&cells[0]),
            in_channels: render(&cells[1]),
            out_channels: render(&cells[2]),
            input: [render(&cells[3]), render(&cells[4]), render(&cells[5])],
            groups: render(&cells[6]),
            kernel: [render(&cells[7]), render(&cells[8]), render(&cells[9])],
            stride: [render(&cells[10]), render(&cells[11]), render(&cells[12])],
            pad: [
                render_or(&cells[13], "0"),
                render_or(&cells[14], "0"),
                render_or(&cells[15], "0"),
                render_or(&cells[16], "0"),
                render_or(&cells[17], "0"),
                render_or(&cells[18], "0"),
            ],
            dilation: [
                render_or(&cells[19], "1"),
                render_or(&cells[20], "1"),
                render_or(&cells[21], "1"),
            ],
        })
    }

    /// Format the case as one `conv_param_t<3>(...)` fixture line.
    ///
    /// Comma-separated, no spaces, trailing comma after the closing
    /// parenthesis. The trailing newline is the writer's job.
    pub fn format_line(&self) -> String {
        format!(
            "conv_param_t<3>({},{},{},{{{}}},{},{{{}}},{{{}}},{{{}}},{{{}}}),",
            self.batch,
            self.in_channels,
            self.out_channels,
            self.input.join(","),
            self.groups,
            self.kernel.join(","),
            self.stride.join(","),
            self.pad.join(","),
            self.dilation.join(","),
        )
    }
}

//==============================================================================
// Cell rendering
//==============================================================================

/// Empty-or-zero test used for the skip sentinel and for defaulting.
///
/// Deliberately conflates an empty cell with a literal zero, matching the
/// original data convention: a pad of 0 and an absent pad are the same
/// thing, and dilation 0 does not occur in the source data.
pub fn is_falsy(cell: &Data) -> bool {
    match cell {
        Data::Empty => true,
        Data::Int(i) => *i == 0,
        Data::Float(f) => *f == 0.0,
        Data::String(s) => s.is_empty(),
        _ => false,
    }
}

/// Plain decimal rendering of a cell value.
///
/// Integral floats print without the trailing `.0` (xlsx stores most
/// integers as floats). Anything else passes through its literal string
/// form, unvalidated.
pub fn render(cell: &Data) -> String {
    match cell {
        Data::Int(i) => i.to_string(),
        Data::Float(f) if f.is_finite() && f.fract() == 0.0 => (*f as i64).to_string(),
        other => other.to_string(),
    }
}

fn render_or(cell: &Data, default: &str) -> String {
    if is_falsy(cell) {
        default.to_string()
    } else {
        render(cell)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn cells_from_ints(values: [i64; schema::COLUMN_COUNT]) -> [Data; schema::COLUMN_COUNT] {
        values.map(Data::Int)
    }

    fn minimal_row() -> [Data; schema::COLUMN_COUNT] {
        // batch=1, ic=3, oc=8, input=(4,16,16), groups=1, kernel=(1,3,3),
        // stride=(1,1,1), pad and dilation cells empty.
        let mut cells = cells_from_ints([1, 3, 8, 4, 16, 16, 1, 1, 3, 3, 1, 1, 1, 0, 0, 0, 0, 0, 0, 0, 0, 0]);
        for cell in cells.iter_mut().skip(13) {
            *cell = Data::Empty;
        }
        cells
    }

    #[test]
    fn test_format_line_with_defaults() {
        let case = ConvCase::from_cells(&minimal_row()).unwrap();
        assert_eq!(
            case.format_line(),
            "conv_param_t<3>(1,3,8,{4,16,16},1,{1,3,3},{1,1,1},{0,0,0,0,0,0},{1,1,1}),"
        );
    }

    #[test]
    fn test_explicit_pad_and_dilation_pass_verbatim() {
        let cells = cells_from_ints([1, 3, 8, 4, 16, 16, 1, 1, 3, 3, 1, 1, 1, 1, 1, 1, 1, 1, 1, 2, 2, 2]);
        let case = ConvCase::from_cells(&cells).unwrap();
        assert_eq!(
            case.format_line(),
            "conv_param_t<3>(1,3,8,{4,16,16},1,{1,3,3},{1,1,1},{1,1,1,1,1,1},{2,2,2}),"
        );
    }

    #[test]
    fn test_sentinel_empty_skips_row() {
        let mut cells = minimal_row();
        cells[schema::SENTINEL_INDEX] = Data::Empty;
        assert!(ConvCase::from_cells(&cells).is_none());
    }

    #[test]
    fn test_sentinel_zero_skips_row() {
        let mut cells = minimal_row();
        cells[schema::SENTINEL_INDEX] = Data::Float(0.0);
        assert!(ConvCase::from_cells(&cells).is_none());

        cells[schema::SENTINEL_INDEX] = Data::String(String::new());
        assert!(ConvCase::from_cells(&cells).is_none());
    }

    #[test]
    fn test_zero_pad_keeps_zero_and_zero_dilation_becomes_one() {
        let mut cells = minimal_row();
        cells[13] = Data::Int(0); // pad_front explicitly 0
        cells[19] = Data::Int(0); // dilation_t explicitly 0
        let case = ConvCase::from_cells(&cells).unwrap();
        assert_eq!(case.pad[0], "0");
        assert_eq!(case.dilation[0], "1");
    }

    #[test]
    fn test_render_integral_float_drops_point_zero() {
        assert_eq!(render(&Data::Float(16.0)), "16");
        assert_eq!(render(&Data::Int(16)), "16");
    }

    #[test]
    fn test_render_non_numeric_passes_through() {
        assert_eq!(render(&Data::String("abc".to_string())), "abc");
        assert_eq!(render(&Data::Float(1.5)), "1.5");
        assert_eq!(render(&Data::Empty), "");
    }

    #[test]
    fn test_is_falsy() {
        assert!(is_falsy(&Data::Empty));
        assert!(is_falsy(&Data::Int(0)));
        assert!(is_falsy(&Data::Float(0.0)));
        assert!(is_falsy(&Data::String(String::new())));
        assert!(!is_falsy(&Data::Int(16)));
        assert!(!is_falsy(&Data::String("16".to_string())));
    }

    #[test]
    fn test_malformed_required_field_passes_through() {
        let mut cells = minimal_row();
        cells[0] = Data::String("n/a".to_string());
        let case = ConvCase::from_cells(&cells).unwrap();
        assert!(case.format_line().starts_with("conv_param_t<3>(n/a,3,8,"));
    }
}
