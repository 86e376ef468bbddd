//! Vitals input form.

use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use crate::domain::{Field, RawFormInput};
use crate::tui::styles::CardioTheme;

/// Fields shown in the left ("Physical Metrics") column.
const PHYSICAL: [Field; 4] = [Field::Age, Field::Gender, Field::Height, Field::Weight];

/// Fields shown in the right ("Medical Stats") column.
const MEDICAL: [Field; 5] = [
    Field::SysBp,
    Field::DiaBp,
    Field::Smoke,
    Field::Alco,
    Field::Active,
];

/// Cursor over the form fields.
#[derive(Debug, Default)]
pub struct FormCursor {
    selected: usize,
}

impl FormCursor {
    #[must_use]
    pub fn field(&self) -> Field {
        Field::ALL[self.selected]
    }

    pub fn next(&mut self) {
        self.selected = (self.selected + 1) % Field::ALL.len();
    }

    pub fn prev(&mut self) {
        if self.selected == 0 {
            self.selected = Field::ALL.len() - 1;
        } else {
            self.selected -= 1;
        }
    }

    pub fn reset(&mut self) {
        self.selected = 0;
    }
}

/// Render the form fields in two columns.
pub fn render_form(f: &mut Frame, area: Rect, raw: &RawFormInput, selected: Field) {
    let columns = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
        .margin(1)
        .split(area);

    render_column(f, columns[0], "Physical Metrics", &PHYSICAL, raw, selected);
    render_column(f, columns[1], "Medical Stats", &MEDICAL, raw, selected);
}

fn render_column(
    f: &mut Frame,
    area: Rect,
    heading: &str,
    fields: &[Field],
    raw: &RawFormInput,
    selected: Field,
) {
    let constraints: Vec<Constraint> = std::iter::once(Constraint::Length(1))
        .chain(fields.iter().map(|_| Constraint::Length(3)))
        .chain(std::iter::once(Constraint::Min(0)))
        .collect();

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints(constraints)
        .split(area);

    f.render_widget(
        Paragraph::new(Span::styled(
            heading.to_uppercase(),
            CardioTheme::muted(),
        )),
        chunks[0],
    );

    for (i, field) in fields.iter().enumerate() {
        let is_selected = *field == selected;
        let block = Block::default()
            .title(Span::styled(
                format!(" {} ", field.label()),
                CardioTheme::field_title(is_selected),
            ))
            .borders(Borders::ALL)
            .border_style(CardioTheme::frame(is_selected));

        let value = raw.display_value(*field);
        let mut spans = vec![Span::raw(" ")];
        if field.is_numeric() {
            if value.is_empty() {
                spans.push(Span::styled(field.hint(), CardioTheme::muted()));
            } else {
                spans.push(Span::styled(value.to_string(), CardioTheme::value()));
            }
            if is_selected {
                spans.push(Span::styled("▌", CardioTheme::accent()));
            }
        } else {
            let (left, right) = if is_selected { ("◀ ", " ▶") } else { ("", "") };
            spans.push(Span::styled(left, CardioTheme::accent()));
            spans.push(Span::styled(value.to_string(), CardioTheme::value()));
            spans.push(Span::styled(right, CardioTheme::accent()));
        }

        f.render_widget(Paragraph::new(Line::from(spans)).block(block), chunks[i + 1]);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cursor_wraps() {
        let mut cursor = FormCursor::default();
        assert_eq!(cursor.field(), Field::Age);

        cursor.prev();
        assert_eq!(cursor.field(), Field::Active);

        cursor.next();
        cursor.next();
        assert_eq!(cursor.field(), Field::Gender);

        cursor.reset();
        assert_eq!(cursor.field(), Field::Age);
    }

    #[test]
    fn test_columns_cover_every_field_once() {
        let mut all: Vec<Field> = PHYSICAL.iter().chain(MEDICAL.iter()).copied().collect();
        assert_eq!(all.len(), Field::ALL.len());
        all.dedup();
        for field in Field::ALL {
            assert!(all.contains(&field));
        }
    }
}
