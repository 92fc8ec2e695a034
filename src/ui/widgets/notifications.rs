use ratatui::{
    layout::Rect,
    style::{Color, Style},
    text::Line,
    widgets::{Block, Borders, Clear, Paragraph, Wrap},
    Frame,
};
use std::time::{Duration, Instant};

/// How long a notification stays visible if the user never dismisses it.
pub const NOTIFICATION_TTL: Duration = Duration::from_secs(5);

const BANNER_WIDTH: u16 = 38;
const BANNER_HEIGHT: u16 = 3;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    Info,
    Success,
    Warning,
    Error,
}

impl Severity {
    fn color(&self) -> Color {
        match self {
            Severity::Info => Color::Cyan,
            Severity::Success => Color::Green,
            Severity::Warning => Color::Yellow,
            Severity::Error => Color::Red,
        }
    }
}

#[derive(Debug, Clone)]
pub struct Notification {
    pub message: String,
    pub severity: Severity,
    expires_at: Instant,
}

/// Stacked, dismissible banners pinned to the top-right corner.
/// No dedup, no mutual exclusion; banners expire independently.
#[derive(Debug, Clone, Default)]
pub struct NotificationStack {
    items: Vec<Notification>,
}

impl NotificationStack {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, message: impl Into<String>, severity: Severity, now: Instant) {
        self.items.push(Notification {
            message: message.into(),
            severity,
            expires_at: now + NOTIFICATION_TTL,
        });
    }

    /// Drop every banner whose lifetime has elapsed.
    pub fn tick(&mut self, now: Instant) {
        self.items.retain(|n| n.expires_at > now);
    }

    /// Manual dismissal removes the oldest visible banner.
    pub fn dismiss_oldest(&mut self) {
        if !self.items.is_empty() {
            self.items.remove(0);
        }
    }

    pub fn items(&self) -> &[Notification] {
        &self.items
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn render(&self, frame: &mut Frame, area: Rect) {
        let width = BANNER_WIDTH.min(area.width);
        let x = area.right().saturating_sub(width);

        for (idx, notification) in self.items.iter().enumerate() {
            let y = area.y + idx as u16 * BANNER_HEIGHT;
            if y + BANNER_HEIGHT > area.bottom() {
                break;
            }
            let banner_area = Rect::new(x, y, width, BANNER_HEIGHT);
            frame.render_widget(Clear, banner_area);

            let block = Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(notification.severity.color()));

            let paragraph = Paragraph::new(Line::from(notification.message.as_str()))
                .style(Style::default().fg(notification.severity.color()))
                .wrap(Wrap { trim: true })
                .block(block);
            frame.render_widget(paragraph, banner_area);
        }
    }
}
