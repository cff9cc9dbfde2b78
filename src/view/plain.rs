//! Non-interactive table output for `--print`.

use crate::model::{AppError, compute_power};
use crate::source::{PageSource, fetch_all};
use crate::state::{Store, Transition, UiState};
use std::io::Write;
use tracing::info;
use unicode_width::UnicodeWidthStr;

const HEADERS: [&str; 4] = ["Name", "Height", "Mass", "Power"];
const COLUMN_GAP: &str = "  ";

/// Filter and multiplier applied before printing.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PrintOptions {
    /// Name filter; `None` keeps the default.
    pub filter: Option<String>,
    /// Multiplier; `None` keeps the default.
    pub multiplier: Option<f64>,
}

/// Fetch every entity, apply `options` through the store and write the
/// table to `out`.
///
/// # Errors
///
/// Returns `AppError::Network` if the fetch fails and `AppError::Io` if
/// writing fails. Nothing is written when the fetch fails.
pub fn run_print<S, W>(
    source: &S,
    start_url: &str,
    options: &PrintOptions,
    out: &mut W,
) -> Result<(), AppError>
where
    S: PageSource + ?Sized,
    W: Write,
{
    let entities = fetch_all(source, start_url)?;

    let mut store = Store::new();
    store.dispatch(Transition::Initialize {
        entities: &entities,
    });
    if let Some(filter) = options.filter.as_deref() {
        store.dispatch(Transition::FilterChanged {
            filter,
            entities: &entities,
        });
    }
    if let Some(multiplier) = options.multiplier {
        store.dispatch(Transition::MultiplierChanged { multiplier });
    }

    info!(
        shown = store.state().filtered_entities.len(),
        total = entities.len(),
        "Printing table"
    );
    out.write_all(render_plain_table(store.state()).as_bytes())?;
    out.flush()?;
    Ok(())
}

/// Render the visible rows of `state` as an aligned text table.
///
/// Name, height and mass are left-aligned; power is right-aligned. Every
/// line ends with a newline. With no rows a `(no matches)` line follows the
/// header.
pub fn render_plain_table(state: &UiState) -> String {
    let rows: Vec<[String; 4]> = state
        .filtered_entities
        .iter()
        .map(|entity| {
            [
                entity.name.clone(),
                entity.height.clone(),
                entity.mass.clone(),
                compute_power(entity, state.multiplier).to_string(),
            ]
        })
        .collect();

    let mut widths = HEADERS.map(UnicodeWidthStr::width);
    for row in &rows {
        for (width, cell) in widths.iter_mut().zip(row) {
            *width = (*width).max(cell.width());
        }
    }

    let mut output = String::new();
    push_line(&mut output, &HEADERS.map(str::to_string), &widths);
    push_line(&mut output, &widths.map(|w| "-".repeat(w)), &widths);
    if rows.is_empty() {
        output.push_str("(no matches)\n");
    }
    for row in &rows {
        push_line(&mut output, row, &widths);
    }
    output
}

fn push_line(output: &mut String, cells: &[String; 4], widths: &[usize; 4]) {
    let mut line = String::new();
    for (index, (cell, width)) in cells.iter().zip(widths).enumerate() {
        if index > 0 {
            line.push_str(COLUMN_GAP);
        }
        let padding = " ".repeat(width.saturating_sub(cell.width()));
        if index == cells.len() - 1 {
            line.push_str(&padding);
            line.push_str(cell);
        } else {
            line.push_str(cell);
            line.push_str(&padding);
        }
    }
    output.push_str(line.trim_end());
    output.push('\n');
}
