use crate::feeds::StatsSnapshot;
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};
use std::time::{Duration, Instant};

/// Fixed window over which a counter animates to its new value.
pub const ANIMATION_WINDOW: Duration = Duration::from_millis(1000);

/// An integer counter that animates linearly toward a target,
/// floor-truncating intermediate frames. The final frame always
/// displays exactly the target.
#[derive(Debug, Clone)]
pub struct AnimatedCounter {
    displayed: i64,
    animation: Option<Animation>,
}

#[derive(Debug, Clone)]
struct Animation {
    from: i64,
    to: i64,
    started: Instant,
}

impl AnimatedCounter {
    pub fn new(initial: i64) -> Self {
        Self {
            displayed: initial,
            animation: None,
        }
    }

    /// Start animating from the currently displayed value toward `target`.
    /// A retarget mid-flight restarts from wherever the display is now.
    pub fn set_target(&mut self, target: i64, now: Instant) {
        if target == self.displayed && self.animation.is_none() {
            return;
        }
        self.animation = Some(Animation {
            from: self.displayed,
            to: target,
            started: now,
        });
    }

    pub fn tick(&mut self, now: Instant) {
        if let Some(animation) = &self.animation {
            let elapsed = now.saturating_duration_since(animation.started);
            if elapsed >= ANIMATION_WINDOW {
                self.displayed = animation.to;
                self.animation = None;
            } else {
                let progress = elapsed.as_secs_f64() / ANIMATION_WINDOW.as_secs_f64();
                let delta = (animation.to - animation.from) as f64;
                self.displayed = (animation.from as f64 + delta * progress).floor() as i64;
            }
        }
    }

    pub fn value(&self) -> i64 {
        self.displayed
    }

    pub fn is_animating(&self) -> bool {
        self.animation.is_some()
    }
}

/// The three stat boxes at the top of the dashboard.
#[derive(Debug, Clone)]
pub struct CountersPanel {
    total_tweets: AnimatedCounter,
    today_tweets: AnimatedCounter,
    success_rate: Option<f64>,
}

impl CountersPanel {
    pub fn new() -> Self {
        Self {
            total_tweets: AnimatedCounter::new(0),
            today_tweets: AnimatedCounter::new(0),
            success_rate: None,
        }
    }

    /// Apply a fresh snapshot. Integer counters animate; the success
    /// rate is shown as-is so the fractional part survives.
    pub fn apply(&mut self, snapshot: &StatsSnapshot, now: Instant) {
        self.total_tweets.set_target(snapshot.total_tweets, now);
        self.today_tweets.set_target(snapshot.today_tweets, now);
        self.success_rate = Some(snapshot.success_rate);
    }

    pub fn tick(&mut self, now: Instant) {
        self.total_tweets.tick(now);
        self.today_tweets.tick(now);
    }

    pub fn total_text(&self) -> String {
        self.total_tweets.value().to_string()
    }

    pub fn today_text(&self) -> String {
        self.today_tweets.value().to_string()
    }

    pub fn success_rate_text(&self) -> String {
        match self.success_rate {
            Some(rate) => format!("{}%", rate),
            None => "--".to_string(),
        }
    }

    pub fn render(&self, frame: &mut Frame, area: Rect) {
        let chunks = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([
                Constraint::Percentage(34),
                Constraint::Percentage(33),
                Constraint::Percentage(33),
            ])
            .split(area);

        render_stat(frame, chunks[0], "Total de tweets", &self.total_text(), Color::Cyan);
        render_stat(frame, chunks[1], "Tweets de hoy", &self.today_text(), Color::Cyan);
        render_stat(
            frame,
            chunks[2],
            "Tasa de éxito",
            &self.success_rate_text(),
            Color::Green,
        );
    }
}

impl Default for CountersPanel {
    fn default() -> Self {
        Self::new()
    }
}

fn render_stat(frame: &mut Frame, area: Rect, label: &str, value: &str, color: Color) {
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Gray))
        .title(label);

    let inner = block.inner(area);
    frame.render_widget(block, area);

    let text = vec![
        Line::from(""),
        Line::from(Span::styled(
            value.to_string(),
            Style::default().fg(color).add_modifier(Modifier::BOLD),
        )),
    ];

    let paragraph = Paragraph::new(text).alignment(Alignment::Center);
    frame.render_widget(paragraph, inner);
}

#[cfg(test)]
mod tests {
    use super::*;

    fn snapshot(total: i64, today: i64, rate: f64) -> StatsSnapshot {
        StatsSnapshot {
            total_tweets: total,
            today_tweets: today,
            success_rate: rate,
            last_tweet: None,
        }
    }

    #[test]
    fn test_counter_converges_exactly() {
        let start = Instant::now();
        let mut counter = AnimatedCounter::new(140);
        counter.set_target(150, start);

        counter.tick(start + Duration::from_millis(999));
        assert!(counter.value() >= 140 && counter.value() <= 150);

        counter.tick(start + ANIMATION_WINDOW);
        assert_eq!(counter.value(), 150);
        assert!(!counter.is_animating());
    }

    #[test]
    fn test_counter_intermediate_frames_are_floored() {
        let start = Instant::now();
        let mut counter = AnimatedCounter::new(140);
        counter.set_target(150, start);

        counter.tick(start + Duration::from_millis(500));
        assert_eq!(counter.value(), 145);

        counter.tick(start + Duration::from_millis(750));
        assert_eq!(counter.value(), 147);
    }

    #[test]
    fn test_counter_negative_delta() {
        let start = Instant::now();
        let mut counter = AnimatedCounter::new(150);
        counter.set_target(140, start);

        counter.tick(start + Duration::from_millis(500));
        assert_eq!(counter.value(), 145);

        counter.tick(start + Duration::from_millis(1200));
        assert_eq!(counter.value(), 140);
    }

    #[test]
    fn test_counter_monotonic_toward_target() {
        let start = Instant::now();
        let mut counter = AnimatedCounter::new(0);
        counter.set_target(37, start);

        let mut previous = counter.value();
        for ms in (0..=1000).step_by(50) {
            counter.tick(start + Duration::from_millis(ms));
            assert!(counter.value() >= previous);
            previous = counter.value();
        }
        assert_eq!(counter.value(), 37);
    }

    #[test]
    fn test_counter_same_target_is_a_noop() {
        let start = Instant::now();
        let mut counter = AnimatedCounter::new(42);
        counter.set_target(42, start);
        assert!(!counter.is_animating());
        assert_eq!(counter.value(), 42);
    }

    #[test]
    fn test_counter_retarget_restarts_from_display() {
        let start = Instant::now();
        let mut counter = AnimatedCounter::new(0);
        counter.set_target(100, start);
        counter.tick(start + Duration::from_millis(500));
        assert_eq!(counter.value(), 50);

        let retarget = start + Duration::from_millis(500);
        counter.set_target(60, retarget);
        counter.tick(retarget + ANIMATION_WINDOW);
        assert_eq!(counter.value(), 60);
    }

    #[test]
    fn test_panel_applies_snapshot() {
        let start = Instant::now();
        let mut panel = CountersPanel::new();
        panel.apply(&snapshot(150, 12, 97.5), start);
        panel.tick(start + ANIMATION_WINDOW);

        assert_eq!(panel.total_text(), "150");
        assert_eq!(panel.today_text(), "12");
        assert_eq!(panel.success_rate_text(), "97.5%");
    }

    #[test]
    fn test_panel_success_rate_formats_whole_numbers_bare() {
        let start = Instant::now();
        let mut panel = CountersPanel::new();
        panel.apply(&snapshot(1, 1, 100.0), start);
        assert_eq!(panel.success_rate_text(), "100%");
    }

    #[test]
    fn test_panel_placeholder_before_first_snapshot() {
        let panel = CountersPanel::new();
        assert_eq!(panel.success_rate_text(), "--");
    }
}
