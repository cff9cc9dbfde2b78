//! Layout dimension constants for TUI rendering.

/// Height of the input row (border + content).
pub const INPUT_ROW_HEIGHT: u16 = 3;

/// Height of the status bar in lines.
pub const STATUS_BAR_HEIGHT: u16 = 1;

/// Lines of the table area not used by data rows: two borders and the header.
pub const TABLE_CHROME_HEIGHT: u16 = 3;

/// Width percentage of the filter input; the multiplier takes the rest.
pub const FILTER_INPUT_WIDTH_PERCENT: u16 = 70;

/// Width of the height, mass and power columns.
pub const NUMERIC_COLUMN_WIDTH: u16 = 10;

/// Spinner frames shown while the fetch is in flight.
pub const SPINNER_FRAMES: [&str; 4] = ["|", "/", "-", "\\"];
