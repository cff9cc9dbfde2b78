//! Screen layout: input row, people table and status bar.
//!
//! Pure rendering. Everything drawn comes in through [`Screen`]; nothing here
//! mutates application state.

use super::LoadState;
use super::constants::{
    FILTER_INPUT_WIDTH_PERCENT, INPUT_ROW_HEIGHT, NUMERIC_COLUMN_WIDTH, SPINNER_FRAMES,
    STATUS_BAR_HEIGHT, TABLE_CHROME_HEIGHT,
};
use super::styles::TableStyles;
use super::table::{TableRow, TableView};
use crate::model::MISSING_MARKER;
use crate::state::{InputField, MULTIPLIER_MAX, MULTIPLIER_MIN, UiState};
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::Style,
    text::Line,
    widgets::{Block, Borders, Cell, Paragraph, Row, Table},
};
use unicode_width::UnicodeWidthStr;

/// Everything one frame needs.
pub struct Screen<'a> {
    /// Rendered rows and the multiplier buffer.
    pub table: &'a TableView,
    /// Current store state; the filter field shows `state.filter`.
    pub state: &'a UiState,
    /// Input field receiving keystrokes.
    pub focus: InputField,
    /// Progress of the initial fetch.
    pub load: &'a LoadState,
    /// Advances once per tick while loading.
    pub spinner_frame: usize,
    /// Styles for this run.
    pub styles: &'a TableStyles,
}

/// Render the input row (top), table (middle) and status bar (bottom).
pub fn render_layout(frame: &mut Frame, screen: &Screen<'_>) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(INPUT_ROW_HEIGHT),
            Constraint::Min(0),
            Constraint::Length(STATUS_BAR_HEIGHT),
        ])
        .split(frame.area());

    render_inputs(frame, chunks[0], screen);
    render_table(frame, chunks[1], screen);
    render_status_bar(frame, chunks[2], screen);
}

/// Number of data rows visible in a frame of `frame_area`.
pub fn table_body_height(frame_area: Rect) -> u16 {
    frame_area
        .height
        .saturating_sub(INPUT_ROW_HEIGHT)
        .saturating_sub(STATUS_BAR_HEIGHT)
        .saturating_sub(TABLE_CHROME_HEIGHT)
}

fn render_inputs(frame: &mut Frame, area: Rect, screen: &Screen<'_>) {
    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage(FILTER_INPUT_WIDTH_PERCENT),
            Constraint::Percentage(100 - FILTER_INPUT_WIDTH_PERCENT),
        ])
        .split(area);

    let multiplier_title = format!(
        " Multiplier ({}-{}) ",
        MULTIPLIER_MIN as u32, MULTIPLIER_MAX as u32
    );
    let fields = [
        (
            InputField::Filter,
            chunks[0],
            " Filter by name ".to_string(),
            screen.state.filter.as_str(),
        ),
        (
            InputField::Multiplier,
            chunks[1],
            multiplier_title,
            screen.table.multiplier_input().as_str(),
        ),
    ];

    for (field, field_area, title, text) in fields {
        let focused = field == screen.focus;
        let border_style = if focused {
            screen.styles.focused_border
        } else {
            screen.styles.border
        };
        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(border_style)
            .title(title);
        frame.render_widget(Paragraph::new(text).block(block), field_area);

        if focused {
            // Inner area starts one cell in from the border
            let max_x = field_area.right().saturating_sub(2);
            let text_width = u16::try_from(text.width()).unwrap_or(u16::MAX);
            let x = (field_area.x + 1).saturating_add(text_width).min(max_x);
            frame.set_cursor_position((x, field_area.y + 1));
        }
    }
}

fn render_table(frame: &mut Frame, area: Rect, screen: &Screen<'_>) {
    let rows = screen.table.rows();
    let visible = area.height.saturating_sub(TABLE_CHROME_HEIGHT) as usize;
    let offset = screen.table.scroll().min(rows.len().saturating_sub(visible));

    let title = match screen.load {
        LoadState::Loaded { total } => format!(" People {}/{} ", rows.len(), total),
        _ => " People ".to_string(),
    };

    let header = Row::new(
        ["Name", "Height", "Mass", "Power"]
            .into_iter()
            .map(Cell::from)
            .collect::<Vec<_>>(),
    )
    .style(screen.styles.header);

    let body = rows
        .iter()
        .skip(offset)
        .take(visible)
        .map(|row| table_row(row, screen.styles));

    let widths = [
        Constraint::Min(12),
        Constraint::Length(NUMERIC_COLUMN_WIDTH),
        Constraint::Length(NUMERIC_COLUMN_WIDTH),
        Constraint::Length(NUMERIC_COLUMN_WIDTH),
    ];

    let table = Table::new(body, widths).header(header).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(screen.styles.border)
            .title(title),
    );
    frame.render_widget(table, area);
}

fn table_row<'a>(row: &'a TableRow, styles: &TableStyles) -> Row<'a> {
    let power_style = if row.power == MISSING_MARKER {
        styles.missing
    } else {
        Style::default()
    };
    Row::new(vec![
        Cell::from(row.name.as_str()),
        Cell::from(Line::from(row.height.as_str()).alignment(Alignment::Right)),
        Cell::from(Line::from(row.mass.as_str()).alignment(Alignment::Right)),
        Cell::from(Line::from(row.power.as_str()).alignment(Alignment::Right)).style(power_style),
    ])
}

fn render_status_bar(frame: &mut Frame, area: Rect, screen: &Screen<'_>) {
    let (text, style) = match screen.load {
        LoadState::Loading => {
            let spinner = SPINNER_FRAMES[screen.spinner_frame % SPINNER_FRAMES.len()];
            (
                format!(" {spinner} Loading people... | Ctrl+C: quit"),
                screen.styles.status,
            )
        }
        LoadState::Loaded { total } => (
            format!(
                " {} of {} shown | Tab: switch field | Esc: reset | Up/Down: scroll | Ctrl+C: quit",
                screen.table.rows().len(),
                total
            ),
            screen.styles.status,
        ),
        LoadState::Failed(message) => (
            format!(" Failed to load people: {message} | Ctrl+C: quit"),
            screen.styles.error,
        ),
    };

    frame.render_widget(Paragraph::new(Line::from(text)).style(style), area);
}

#[cfg(test)]
#[path = "layout_tests.rs"]
mod tests;
