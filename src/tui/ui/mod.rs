//! UI module: View components for the TUI.

pub mod assessment;
pub mod form;

use ratatui::{
    layout::Rect,
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
    Frame,
};

use crate::domain::SubmissionState;
use crate::tui::styles::CardioTheme;

/// Reachability of the scoring service, as last probed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ServiceStatus {
    Checking,
    Online,
    Offline(String),
}

pub fn render_header(f: &mut Frame, area: Rect, endpoint: &str, status: &ServiceStatus) {
    let (badge, style) = match status {
        ServiceStatus::Checking => ("checking".to_string(), CardioTheme::pending()),
        ServiceStatus::Online => ("online".to_string(), CardioTheme::online()),
        ServiceStatus::Offline(reason) => (format!("offline: {}", reason), CardioTheme::error()),
    };

    let header = Paragraph::new(Line::from(vec![
        Span::styled(" ", CardioTheme::value()),
        Span::styled("Heart Disease Prediction", CardioTheme::heading()),
        Span::styled(" │ ", CardioTheme::label()),
        Span::styled(endpoint.to_string(), CardioTheme::muted()),
        Span::styled(" ● ", style),
        Span::styled(badge, style),
    ]))
    .block(
        Block::default()
            .borders(Borders::BOTTOM)
            .border_style(CardioTheme::frame(false)),
    );

    f.render_widget(header, area);
}

pub fn render_footer(f: &mut Frame, area: Rect, state: &SubmissionState, ready: bool) {
    let submit = if state.is_submitting() {
        Span::styled("Analyzing... ", CardioTheme::muted())
    } else if ready {
        Span::styled("Predict Risk ", CardioTheme::emphasis())
    } else {
        Span::styled("Predict Risk ", CardioTheme::label())
    };

    // Point at the next useful key once something is on screen.
    let new_style = if state.result().is_some() {
        CardioTheme::emphasis()
    } else {
        CardioTheme::label()
    };

    let mut spans = vec![
        Span::styled("[↑↓] ", CardioTheme::emphasis()),
        Span::styled("Navigate ", CardioTheme::label()),
        Span::styled("[←→] ", CardioTheme::emphasis()),
        Span::styled("Toggle ", CardioTheme::label()),
        Span::styled("[Enter] ", CardioTheme::emphasis()),
        submit,
        Span::styled("[S] ", CardioTheme::emphasis()),
        Span::styled("Sample ", CardioTheme::label()),
        Span::styled("[N] ", CardioTheme::emphasis()),
        Span::styled("New ", new_style),
        Span::styled("[Esc] ", CardioTheme::emphasis()),
        Span::styled("Quit", CardioTheme::label()),
    ];
    if state.error_message().is_some() {
        spans.push(Span::styled("  edit any field to retry", CardioTheme::error()));
    }
    let content = Line::from(spans);

    let footer = Paragraph::new(content).block(
        Block::default()
            .borders(Borders::TOP)
            .border_style(CardioTheme::frame(false)),
    );

    f.render_widget(footer, area);
}

pub fn render_disclaimer(f: &mut Frame, area: Rect) {
    let text = vec![Line::from(vec![Span::styled(
        "DISCLAIMER: This tool provides indicative estimates and does not replace professional medical evaluation.",
        CardioTheme::muted(),
    )])];

    let block = Block::default()
        .borders(Borders::TOP)
        .border_style(CardioTheme::frame(false));

    let p = Paragraph::new(text).block(block).wrap(Wrap { trim: true });

    f.render_widget(p, area);
}
