use crate::feeds::LastTweet;
use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
    Frame,
};

/// Panel showing the most recently posted tweet, if any.
#[derive(Debug, Clone, Default)]
pub struct LastTweetPanel {
    tweet: Option<LastTweet>,
}

impl LastTweetPanel {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the panel content wholesale; an absent `last_tweet` in a
    /// snapshot leaves whatever was shown before untouched.
    pub fn update(&mut self, tweet: LastTweet) {
        self.tweet = Some(tweet);
    }

    pub fn tweet(&self) -> Option<&LastTweet> {
        self.tweet.as_ref()
    }

    pub fn render(&self, frame: &mut Frame, area: Rect) {
        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::Gray))
            .title("Último tweet");

        let inner = block.inner(area);
        frame.render_widget(block, area);

        let Some(tweet) = &self.tweet else {
            let paragraph = Paragraph::new(Line::from(Span::styled(
                "Sin tweets todavía",
                Style::default().fg(Color::DarkGray),
            )));
            frame.render_widget(paragraph, inner);
            return;
        };

        let width = inner.width.saturating_sub(1).max(10) as usize;
        let mut lines: Vec<Line> = textwrap::wrap(&tweet.content, width)
            .into_iter()
            .map(|wrapped| Line::from(wrapped.into_owned()))
            .collect();

        lines.push(Line::from(vec![
            Span::styled(
                format!("#{}", tweet.kind),
                Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD),
            ),
            Span::raw("  "),
            Span::styled(
                tweet.posted_at.clone(),
                Style::default().fg(Color::DarkGray),
            ),
        ]));

        let paragraph = Paragraph::new(lines).wrap(Wrap { trim: false });
        frame.render_widget(paragraph, inner);
    }
}
