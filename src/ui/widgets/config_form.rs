use crate::config::Config;
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

const MIN_POLL_INTERVAL_SECS: u64 = 10;

/// Constraint a field re-checks on blur and, once invalid, on input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum FieldRule {
    RequiredText,
    RequiredU64Min(u64),
}

impl FieldRule {
    fn check(&self, value: &str) -> bool {
        let value = value.trim();
        match self {
            FieldRule::RequiredText => !value.is_empty(),
            FieldRule::RequiredU64Min(min) => {
                value.parse::<u64>().map(|n| n >= *min).unwrap_or(false)
            }
        }
    }
}

/// Mutually exclusive visual validity flags.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Validity {
    Pristine,
    Valid,
    Invalid,
}

#[derive(Debug, Clone)]
pub struct FormField {
    label: &'static str,
    hint: &'static str,
    value: String,
    validity: Validity,
    rule: FieldRule,
}

impl FormField {
    fn new(label: &'static str, hint: &'static str, value: String, rule: FieldRule) -> Self {
        Self {
            label,
            hint,
            value,
            validity: Validity::Pristine,
            rule,
        }
    }

    fn validate(&mut self) -> bool {
        let ok = self.rule.check(&self.value);
        self.validity = if ok { Validity::Valid } else { Validity::Invalid };
        ok
    }

    pub fn validity(&self) -> Validity {
        self.validity
    }

    pub fn value(&self) -> &str {
        &self.value
    }
}

const FIELD_BASE_URL: usize = 0;
const FIELD_POLL_INTERVAL: usize = 1;
const FIELD_TIMEOUT: usize = 2;

/// The configuration form. Fields validate when they lose focus, and —
/// once marked invalid — re-validate on every edit. Submission is
/// blocked while any required field fails its constraint.
#[derive(Debug, Clone)]
pub struct ConfigForm {
    fields: Vec<FormField>,
    focused: usize,
    was_validated: bool,
}

impl ConfigForm {
    pub fn from_config(config: &Config) -> Self {
        let fields = vec![
            FormField::new(
                "URL del servidor",
                "ej: http://127.0.0.1:5000",
                config.base_url.clone(),
                FieldRule::RequiredText,
            ),
            FormField::new(
                "Intervalo de actualización (s)",
                "mínimo 10",
                config.poll_interval_secs.to_string(),
                FieldRule::RequiredU64Min(MIN_POLL_INTERVAL_SECS),
            ),
            FormField::new(
                "Tiempo de espera (s)",
                "mínimo 1",
                config.timeout_secs.to_string(),
                FieldRule::RequiredU64Min(1),
            ),
        ];
        Self {
            fields,
            focused: 0,
            was_validated: false,
        }
    }

    pub fn focused(&self) -> usize {
        self.focused
    }

    pub fn field(&self, idx: usize) -> &FormField {
        &self.fields[idx]
    }

    /// Moving focus away is the blur event: the field left behind is
    /// validated.
    pub fn focus_next(&mut self) {
        self.fields[self.focused].validate();
        self.focused = (self.focused + 1) % self.fields.len();
    }

    pub fn focus_previous(&mut self) {
        self.fields[self.focused].validate();
        self.focused = (self.focused + self.fields.len() - 1) % self.fields.len();
    }

    pub fn input_char(&mut self, c: char) {
        let field = &mut self.fields[self.focused];
        field.value.push(c);
        if field.validity == Validity::Invalid {
            field.validate();
        }
    }

    pub fn backspace(&mut self) {
        let field = &mut self.fields[self.focused];
        field.value.pop();
        if field.validity == Validity::Invalid {
            field.validate();
        }
    }

    /// Validate everything and mark the form as validated regardless of
    /// the outcome. Returns the new configuration only when every field
    /// passes; otherwise submission is blocked.
    pub fn submit(&mut self) -> Option<Config> {
        let mut all_valid = true;
        for field in &mut self.fields {
            all_valid &= field.validate();
        }
        self.was_validated = true;

        if !all_valid {
            return None;
        }

        Some(Config {
            base_url: self.fields[FIELD_BASE_URL].value.trim().to_string(),
            poll_interval_secs: self.fields[FIELD_POLL_INTERVAL]
                .value
                .trim()
                .parse()
                .unwrap_or(MIN_POLL_INTERVAL_SECS),
            timeout_secs: self.fields[FIELD_TIMEOUT].value.trim().parse().unwrap_or(1),
        })
    }

    pub fn was_validated(&self) -> bool {
        self.was_validated
    }

    pub fn render(&self, frame: &mut Frame, area: Rect) {
        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::Cyan))
            .title("Configuración");

        let inner = block.inner(area);
        frame.render_widget(block, area);

        let mut constraints: Vec<Constraint> =
            self.fields.iter().map(|_| Constraint::Length(3)).collect();
        constraints.push(Constraint::Min(2));

        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints(constraints)
            .split(inner);

        for (idx, field) in self.fields.iter().enumerate() {
            self.render_field(frame, chunks[idx], field, idx == self.focused);
        }

        let footer = Paragraph::new(Line::from(Span::styled(
            "Tab: siguiente campo | Enter: guardar | Esc: volver",
            Style::default().fg(Color::DarkGray),
        )));
        frame.render_widget(footer, chunks[self.fields.len()]);
    }

    fn render_field(&self, frame: &mut Frame, area: Rect, field: &FormField, focused: bool) {
        let border_color = match field.validity {
            Validity::Invalid => Color::Red,
            Validity::Valid => Color::Green,
            Validity::Pristine => {
                if focused {
                    Color::Cyan
                } else {
                    Color::Gray
                }
            }
        };

        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(border_color))
            .title(field.label);

        let inner = block.inner(area);
        frame.render_widget(block, area);

        let shown = if field.value.is_empty() {
            Span::styled(field.hint, Style::default().fg(Color::DarkGray))
        } else {
            Span::styled(field.value.as_str(), Style::default().fg(Color::White))
        };

        let mut spans = vec![shown];
        if focused {
            spans.push(Span::styled(
                "█",
                Style::default().fg(Color::White).add_modifier(Modifier::SLOW_BLINK),
            ));
        }
        frame.render_widget(Paragraph::new(Line::from(spans)), inner);
    }
}
