//! One-shot terminal drawing for the widget preview.
//!
//! The preview is painted inline below the cursor, so no alternate screen or
//! raw mode is held after the call returns.

use std::io::{self, Stdout};

use ratatui::{Terminal, TerminalOptions, Viewport, backend::CrosstermBackend};

use crate::domain::DisplayFields;
use crate::widgets::HomeWidget;

pub type Tui = Terminal<CrosstermBackend<Stdout>>;

/// Create an inline terminal of `height` rows.
///
/// # Errors
///
/// Returns an error if the terminal cannot be queried.
pub fn init_inline(height: u16) -> io::Result<Tui> {
    let backend = CrosstermBackend::new(io::stdout());
    Terminal::with_options(
        backend,
        TerminalOptions {
            viewport: Viewport::Inline(height),
        },
    )
}

/// Draw `fields` once as a `width`-column widget.
///
/// # Errors
///
/// Returns an error if drawing to stdout fails.
pub fn draw_preview(fields: &DisplayFields, width: u16) -> io::Result<()> {
    let widget = HomeWidget::new(fields);
    let mut terminal = init_inline(widget.height())?;
    terminal.draw(|frame| {
        let mut area = frame.area();
        area.width = area.width.min(width);
        frame.render_widget(widget, area);
    })?;
    // Leave the cursor below the drawing.
    println!();
    Ok(())
}
