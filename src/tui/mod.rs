//! TUI module: Terminal User Interface using Ratatui.
//!
//! A single screen hosting the vitals form, the submission status panel and
//! the returned assessment.

mod app;
mod styles;
mod ui;

pub use app::App;
pub use styles::CardioTheme;
