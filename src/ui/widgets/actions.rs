use crate::feeds::TweetKind;
use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem},
    Frame,
};
use std::time::{Duration, Instant};

/// A test button stays in its loading state this long before it is
/// unconditionally restored.
pub const BUTTON_RESTORE_DELAY: Duration = Duration::from_secs(3);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ActionId {
    TestTweet(TweetKind),
    ExportLogs,
    TestConnections,
}

#[derive(Debug, Clone)]
struct ActionButton {
    id: ActionId,
    label: String,
    processing_until: Option<Instant>,
}

impl ActionButton {
    fn is_processing(&self) -> bool {
        self.processing_until.is_some()
    }
}

/// Vertical list of quick actions. Test-tweet buttons carry a loading
/// state while the post is in flight; the placeholder actions do not.
#[derive(Debug, Clone)]
pub struct ActionsPanel {
    buttons: Vec<ActionButton>,
    selected: usize,
}

impl ActionsPanel {
    pub fn new() -> Self {
        let buttons = vec![
            test_button(TweetKind::Weather),
            test_button(TweetKind::Currency),
            test_button(TweetKind::News),
            ActionButton {
                id: ActionId::ExportLogs,
                label: "Exportar logs".to_string(),
                processing_until: None,
            },
            ActionButton {
                id: ActionId::TestConnections,
                label: "Probar conexiones".to_string(),
                processing_until: None,
            },
        ];
        Self {
            buttons,
            selected: 0,
        }
    }

    pub fn select_previous(&mut self) {
        if self.selected > 0 {
            self.selected -= 1;
        }
    }

    pub fn select_next(&mut self) {
        if self.selected + 1 < self.buttons.len() {
            self.selected += 1;
        }
    }

    /// Activate the selected button. A processing button is disabled,
    /// so activating it again is a no-op. Test buttons enter their
    /// loading state; the restore fires at the 3 s deadline.
    pub fn activate(&mut self, now: Instant) -> Option<ActionId> {
        let button = &mut self.buttons[self.selected];
        if button.is_processing() {
            return None;
        }
        if matches!(button.id, ActionId::TestTweet(_)) {
            button.processing_until = Some(now + BUTTON_RESTORE_DELAY);
        }
        Some(button.id)
    }

    /// Restore every button whose deadline has passed, whether or not
    /// the triggering request ever came back.
    pub fn tick(&mut self, now: Instant) {
        for button in &mut self.buttons {
            if let Some(deadline) = button.processing_until {
                if now >= deadline {
                    button.processing_until = None;
                }
            }
        }
    }

    pub fn is_processing(&self, id: ActionId) -> bool {
        self.buttons
            .iter()
            .any(|b| b.id == id && b.is_processing())
    }

    pub fn render(&self, frame: &mut Frame, area: Rect, focused: bool) {
        let border_style = if focused {
            Style::default().fg(Color::Cyan)
        } else {
            Style::default().fg(Color::Gray)
        };

        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(border_style)
            .title("Acciones");

        let items: Vec<ListItem> = self
            .buttons
            .iter()
            .enumerate()
            .map(|(idx, button)| {
                let line = if button.is_processing() {
                    Line::from(Span::styled(
                        "⏳ Procesando...",
                        Style::default().fg(Color::DarkGray),
                    ))
                } else {
                    let style = if idx == self.selected {
                        Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD)
                    } else {
                        Style::default().fg(Color::White)
                    };
                    let marker = if idx == self.selected { "> " } else { "  " };
                    Line::from(vec![Span::raw(marker), Span::styled(&button.label, style)])
                };
                ListItem::new(line)
            })
            .collect();

        let list = List::new(items).block(block);
        frame.render_widget(list, area);
    }
}

impl Default for ActionsPanel {
    fn default() -> Self {
        Self::new()
    }
}

fn test_button(kind: TweetKind) -> ActionButton {
    ActionButton {
        id: ActionId::TestTweet(kind),
        label: format!("Tweet de prueba: {}", kind.label()),
        processing_until: None,
    }
}
