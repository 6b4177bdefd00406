//! Home-screen widget preview.
//!
//! Paints resolved [`DisplayFields`] into a terminal buffer, laid out like
//! the phone widget.

use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Constraint, Layout, Rect},
    style::Style,
    symbols::border,
    text::{Line, Span},
    widgets::{Block, Borders, Gauge, Paragraph, Widget},
};

use crate::domain::DisplayFields;
use crate::theme::{AMOUNT_STYLE, BORDER_STYLE, MUTED_STYLE, TITLE_STYLE, gauge_color};

/// Label of the add-expense button.
const ADD_BUTTON_LABEL: &str = "[+]";

/// Frame title.
const TITLE: &str = " SmartSpend ";

// ============================================================================
// HomeWidget
// ============================================================================

/// Terminal rendition of a small or medium home-screen widget.
///
/// # Example
///
/// ```text
/// ╭ SmartSpend ─────────────────────────────╮
/// │1 234,56 €                            [+]│
/// │Aujourd'hui 12,40 € · Semaine 86,10 €    │
/// │█████████████████████61%                 │
/// │Mis à jour à 18:42                       │
/// ╰─────────────────────────────────────────╯
/// ```
#[derive(Debug, Clone, Copy)]
pub struct HomeWidget<'a> {
    fields: &'a DisplayFields,
}

impl<'a> HomeWidget<'a> {
    #[must_use]
    pub const fn new(fields: &'a DisplayFields) -> Self {
        Self { fields }
    }

    /// Rows this widget needs, borders included.
    #[must_use]
    pub const fn height(&self) -> u16 {
        self.fields.variant.preview_height()
    }

    fn breakdown_line(&self) -> Option<Line<'a>> {
        let fields: &'a DisplayFields = self.fields;
        fields.breakdown.as_ref().map(|breakdown| {
            Line::from(vec![
                Span::styled("Aujourd'hui ", MUTED_STYLE),
                Span::raw(breakdown.today.as_str()),
                Span::styled(" · ", MUTED_STYLE),
                Span::styled("Semaine ", MUTED_STYLE),
                Span::raw(breakdown.week.as_str()),
            ])
        })
    }

    /// Last line: budget info on the small layout, refresh time on the medium one.
    fn footer_line(&self) -> Line<'a> {
        let fields: &'a DisplayFields = self.fields;
        match &fields.breakdown {
            Some(breakdown) => Line::styled(breakdown.last_updated.as_str(), MUTED_STYLE),
            None => Line::styled(fields.budget_info.as_str(), MUTED_STYLE),
        }
    }

    fn gauge_label(&self) -> String {
        match &self.fields.breakdown {
            Some(breakdown) => breakdown.percent_label.clone(),
            None => format!("{}%", self.fields.percent),
        }
    }
}

impl Widget for HomeWidget<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let block = Block::default()
            .borders(Borders::ALL)
            .border_set(border::ROUNDED)
            .border_style(BORDER_STYLE)
            .title(TITLE)
            .title_style(TITLE_STYLE);
        let inner = block.inner(area);
        block.render(area, buf);

        if inner.height == 0 || inner.width == 0 {
            return;
        }

        let breakdown = self.breakdown_line();
        let rows = Layout::vertical(vec![
            Constraint::Length(1);
            if breakdown.is_some() { 4 } else { 3 }
        ])
        .split(inner);

        let [amount_area, button_area] = Layout::horizontal([
            Constraint::Min(0),
            Constraint::Length(ADD_BUTTON_LABEL.len() as u16),
        ])
        .areas(rows[0]);
        Paragraph::new(Line::styled(self.fields.amount.as_str(), AMOUNT_STYLE)).render(amount_area, buf);
        Paragraph::new(ADD_BUTTON_LABEL)
            .style(TITLE_STYLE)
            .alignment(Alignment::Right)
            .render(button_area, buf);

        let mut next = 1;
        if let Some(line) = breakdown {
            Paragraph::new(line).render(rows[next], buf);
            next += 1;
        }

        Gauge::default()
            .gauge_style(Style::new().fg(gauge_color(self.fields.percent)))
            .percent(u16::from(self.fields.percent))
            .label(self.gauge_label())
            .render(rows[next], buf);

        Paragraph::new(self.footer_line()).render(rows[next + 1], buf);
    }
}

// ============================================================================
// Tests
// ============================================================================
