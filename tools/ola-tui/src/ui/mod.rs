//! UI module for TUI rendering.

pub mod channels;
pub mod overview;

use crate::app::{App, View};
use ratatui::Frame;

/// Render the appropriate view.
pub fn render(frame: &mut Frame, app: &App) {
    match app.view {
        View::Overview => overview::render(frame, app),
        View::Channels => channels::render(frame, app),
    }
}
