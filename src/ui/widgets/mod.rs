pub mod actions;
pub mod config_form;
pub mod counters;
pub mod last_tweet;
pub mod notifications;
pub mod overlay;

use ratatui::layout::{Constraint, Direction, Layout, Rect};

/// Centered sub-rectangle sized as a percentage of `r`, used by
/// modal-style widgets.
pub fn center_rect(percent_x: u16, percent_y: u16, r: Rect) -> Rect {
    let popup_layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage((100 - percent_y) / 2),
            Constraint::Percentage(percent_y),
            Constraint::Percentage((100 - percent_y) / 2),
        ])
        .split(r);

    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage((100 - percent_x) / 2),
            Constraint::Percentage(percent_x),
            Constraint::Percentage((100 - percent_x) / 2),
        ])
        .split(popup_layout[1])[1]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_center_rect_is_contained() {
        let outer = Rect::new(0, 0, 100, 40);
        let inner = center_rect(50, 20, outer);
        assert!(inner.x >= outer.x && inner.right() <= outer.right());
        assert!(inner.y >= outer.y && inner.bottom() <= outer.bottom());
        assert_eq!(inner.width, 50);
        assert_eq!(inner.height, 8);
    }
}
