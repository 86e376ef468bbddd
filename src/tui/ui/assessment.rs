//! Status panel: loading gauge, result card or error.

use std::time::Instant;

use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::Modifier,
    text::{Line, Span},
    widgets::{Block, Borders, Gauge, Paragraph, Wrap},
    Frame,
};

use crate::domain::{PredictionResult, SubmissionState, BMI_NORMAL_RANGE, RESULT_DISCLAIMER};
use crate::tui::styles::CardioTheme;

/// Render the panel for the current submission state.
pub fn render_assessment(f: &mut Frame, area: Rect, state: &SubmissionState) {
    match state {
        SubmissionState::Idle => render_idle(f, area),
        SubmissionState::Submitting { started_at } => render_submitting(f, area, *started_at),
        SubmissionState::Success { result, settled_at } => {
            render_result(f, area, result, settled_at)
        }
        SubmissionState::Error { message, .. } => render_error(f, area, message),
    }
}

/// Smooth, monotonic fake progress that approaches but never reaches 100%.
#[must_use]
pub fn loading_progress(elapsed_secs: f64) -> f64 {
    const TARGET: f64 = 0.95;
    const TAU: f64 = 0.8;
    (TARGET * (1.0 - (-elapsed_secs.max(0.0) / TAU).exp())).clamp(0.0, TARGET)
}

fn render_idle(f: &mut Frame, area: Rect) {
    let content = Paragraph::new(vec![
        Line::from(""),
        Line::from(Span::styled(
            "Fill in the vitals and press Enter to predict risk",
            CardioTheme::label(),
        )),
        Line::from(Span::styled(
            "Nothing is stored; values are cleared on [N]",
            CardioTheme::muted(),
        )),
    ])
    .alignment(Alignment::Center)
    .block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(CardioTheme::frame(false)),
    );

    f.render_widget(content, area);
}

fn render_submitting(f: &mut Frame, area: Rect, started_at: Instant) {
    let progress = loading_progress(started_at.elapsed().as_secs_f64());

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(2), Constraint::Length(3), Constraint::Min(0)])
        .margin(1)
        .split(area);

    let label = Paragraph::new(Line::from(Span::styled(
        "Analyzing...",
        CardioTheme::emphasis(),
    )))
    .alignment(Alignment::Center);
    f.render_widget(label, chunks[0]);

    let gauge = Gauge::default()
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(CardioTheme::frame(false)),
        )
        .gauge_style(CardioTheme::progress())
        .ratio(progress)
        .label("");
    f.render_widget(gauge, chunks[1]);
}

fn render_result(
    f: &mut Frame,
    area: Rect,
    result: &PredictionResult,
    settled_at: &chrono::DateTime<chrono::Utc>,
) {
    let risk_style = CardioTheme::risk(result.polarity);

    let block = Block::default()
        .title(Span::styled(
            format!(" {} ", result.polarity.headline()),
            risk_style.add_modifier(Modifier::BOLD),
        ))
        .title_bottom(Span::styled(
            format!(" {} UTC ", settled_at.format("%H:%M:%S")),
            CardioTheme::muted(),
        ))
        .borders(Borders::ALL)
        .border_style(risk_style);

    let inner = block.inner(area);
    f.render_widget(block, area);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1), // Label
            Constraint::Length(3), // Probability + BMI
            Constraint::Min(3),    // Tips
            Constraint::Length(2), // Disclaimer
        ])
        .horizontal_margin(1)
        .split(inner);

    let label = Paragraph::new(Line::from(vec![
        Span::styled("Assessment: ", CardioTheme::label()),
        Span::styled(result.risk_label.clone(), CardioTheme::value()),
    ]));
    f.render_widget(label, chunks[0]);

    let metrics = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
        .split(chunks[1]);

    let probability = Gauge::default()
        .block(
            Block::default()
                .title(Span::styled(" Probability ", CardioTheme::label()))
                .borders(Borders::ALL)
                .border_style(CardioTheme::frame(false)),
        )
        .gauge_style(risk_style)
        .ratio(result.probability.clamp(0.0, 1.0))
        .label(result.percent_display());
    f.render_widget(probability, metrics[0]);

    let bmi = Paragraph::new(Line::from(vec![
        Span::styled(result.bmi_display(), CardioTheme::heading()),
        Span::styled(format!("  {}", BMI_NORMAL_RANGE), CardioTheme::muted()),
    ]))
    .block(
        Block::default()
            .title(Span::styled(" BMI ", CardioTheme::label()))
            .borders(Borders::ALL)
            .border_style(CardioTheme::frame(false)),
    );
    f.render_widget(bmi, metrics[1]);

    let mut tips = vec![Line::from(Span::styled(
        "ACTIONABLE TIPS",
        CardioTheme::muted(),
    ))];
    tips.extend(result.polarity.tips().iter().map(|tip| {
        Line::from(vec![
            Span::styled("• ", risk_style),
            Span::styled(*tip, CardioTheme::value()),
        ])
    }));
    f.render_widget(Paragraph::new(tips).wrap(Wrap { trim: true }), chunks[2]);

    let disclaimer = Paragraph::new(Span::styled(RESULT_DISCLAIMER, CardioTheme::muted()))
        .wrap(Wrap { trim: true });
    f.render_widget(disclaimer, chunks[3]);
}

fn render_error(f: &mut Frame, area: Rect, message: &str) {
    let content = Paragraph::new(vec![
        Line::from(""),
        Line::from(Span::styled("! Error", CardioTheme::error())),
        Line::from(Span::styled(message.to_string(), CardioTheme::value())),
    ])
    .alignment(Alignment::Center)
    .wrap(Wrap { trim: true })
    .block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(CardioTheme::error()),
    );

    f.render_widget(content, area);
}
