use ratatui::{
    layout::{Alignment, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
    Frame,
};
use std::time::{Duration, Instant};

/// An overlay left unhidden disappears on its own after this long.
pub const OVERLAY_AUTO_HIDE: Duration = Duration::from_secs(10);

const SPINNER_FRAMES: [&str; 4] = ["|", "/", "-", "\\"];

/// Full-screen blocking indicator for long-running actions. At most one
/// exists: showing over a visible overlay replaces its message and
/// resets the auto-hide deadline instead of stacking a second one.
#[derive(Debug, Clone, Default)]
pub struct LoadingOverlay {
    state: Option<OverlayState>,
}

#[derive(Debug, Clone)]
struct OverlayState {
    message: String,
    shown_at: Instant,
    hide_at: Instant,
}

impl LoadingOverlay {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn show(&mut self, message: impl Into<String>, now: Instant) {
        self.state = Some(OverlayState {
            message: message.into(),
            shown_at: now,
            hide_at: now + OVERLAY_AUTO_HIDE,
        });
    }

    pub fn show_default(&mut self, now: Instant) {
        self.show("Cargando...", now);
    }

    /// No-op when nothing is shown.
    pub fn hide(&mut self) {
        self.state = None;
    }

    pub fn tick(&mut self, now: Instant) {
        if let Some(state) = &self.state {
            if now >= state.hide_at {
                self.state = None;
            }
        }
    }

    pub fn is_visible(&self) -> bool {
        self.state.is_some()
    }

    pub fn message(&self) -> Option<&str> {
        self.state.as_ref().map(|s| s.message.as_str())
    }

    pub fn render(&self, frame: &mut Frame, area: Rect, now: Instant) {
        let Some(state) = &self.state else {
            return;
        };

        let modal = super::center_rect(50, 20, area);
        frame.render_widget(Clear, modal);

        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::Cyan));

        let inner = block.inner(modal);
        frame.render_widget(block, modal);

        let elapsed_ms = now.saturating_duration_since(state.shown_at).as_millis();
        let spinner = SPINNER_FRAMES[(elapsed_ms / 100) as usize % SPINNER_FRAMES.len()];

        let text = vec![
            Line::from(""),
            Line::from(Span::styled(
                spinner,
                Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD),
            )),
            Line::from(state.message.as_str()),
        ];

        let paragraph = Paragraph::new(text).alignment(Alignment::Center);
        frame.render_widget(paragraph, inner);
    }
}
