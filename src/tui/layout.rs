//! Layout definitions for the TUI
//!
//! Sidebar form on the left, summary and expenses on the right, a status
//! bar along the bottom.

use ratatui::layout::{Constraint, Direction, Layout, Rect};

/// Layout regions for the TUI
pub struct AppLayout {
    /// Sidebar area (budget and add-expense form)
    pub sidebar: Rect,
    /// Main content area
    pub main: Rect,
    /// Status bar at the bottom
    pub status_bar: Rect,
}

impl AppLayout {
    /// Calculate layout from available area
    pub fn new(area: Rect) -> Self {
        let vertical = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Min(3),    // Main area
                Constraint::Length(1), // Status bar
            ])
            .split(area);

        let horizontal = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([
                Constraint::Length(36), // Sidebar (fixed width)
                Constraint::Min(40),    // Main content
            ])
            .split(vertical[0]);

        Self {
            sidebar: horizontal[0],
            main: horizontal[1],
            status_bar: vertical[1],
        }
    }
}

/// Layout for the main panel
pub struct MainLayout {
    /// Budget / spent / remaining metrics
    pub summary: Rect,
    /// Expense table
    pub expenses: Rect,
    /// Category chart, when one is shown
    pub chart: Option<Rect>,
}

impl MainLayout {
    /// Calculate main panel layout
    pub fn new(area: Rect, show_chart: bool) -> Self {
        if show_chart {
            let chunks = Layout::default()
                .direction(Direction::Vertical)
                .constraints([
                    Constraint::Length(3),
                    Constraint::Min(5),
                    Constraint::Percentage(45),
                ])
                .split(area);

            Self {
                summary: chunks[0],
                expenses: chunks[1],
                chart: Some(chunks[2]),
            }
        } else {
            let chunks = Layout::default()
                .direction(Direction::Vertical)
                .constraints([Constraint::Length(3), Constraint::Min(3)])
                .split(area);

            Self {
                summary: chunks[0],
                expenses: chunks[1],
                chart: None,
            }
        }
    }
}

/// Create a centered rect for dialogs
pub fn centered_rect(percent_x: u16, percent_y: u16, r: Rect) -> Rect {
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

/// Create a fixed-size centered rect for dialogs
pub fn centered_rect_fixed(width: u16, height: u16, r: Rect) -> Rect {
    let x = r.x + (r.width.saturating_sub(width)) / 2;
    let y = r.y + (r.height.saturating_sub(height)) / 2;
    Rect::new(x, y, width.min(r.width), height.min(r.height))
}

/// Area for a toast in the top-right corner of `r`
pub fn toast_rect(width: u16, height: u16, r: Rect) -> Rect {
    let width = width.min(r.width);
    let height = height.min(r.height);
    Rect::new(r.x + r.width - width, r.y, width, height)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_app_layout_splits() {
        let layout = AppLayout::new(Rect::new(0, 0, 120, 40));
        assert_eq!(layout.sidebar.width, 36);
        assert_eq!(layout.main.width, 84);
        assert_eq!(layout.status_bar.height, 1);
        assert_eq!(layout.status_bar.y, 39);
    }

    #[test]
    fn test_main_layout_chart_toggle() {
        let area = Rect::new(0, 0, 80, 40);
        assert!(MainLayout::new(area, false).chart.is_none());

        let with_chart = MainLayout::new(area, true);
        assert_eq!(with_chart.summary.height, 3);
        assert!(with_chart.chart.is_some());
    }

    #[test]
    fn test_centered_and_toast_rects_fit() {
        let area = Rect::new(0, 0, 20, 10);
        let centered = centered_rect_fixed(50, 4, area);
        assert_eq!(centered.width, 20);
        assert_eq!(centered.y, 3);

        let toast = toast_rect(8, 3, area);
        assert_eq!(toast, Rect::new(12, 0, 8, 3));
    }
}
