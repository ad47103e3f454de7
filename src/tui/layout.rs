use ratatui::layout::{Constraint, Direction, Layout, Rect};

/// Screen regions of the browser
pub struct AppLayout {
    pub search_area: Rect,
    pub table_area: Rect,
    pub detail_area: Rect,
    pub status_area: Rect,
}

impl AppLayout {
    /// Create split-pane layout:
    /// - Search line: top row
    /// - Alumni table: 60% width (left)
    /// - Detail panel: 40% width (right)
    /// - Status bar: bottom row
    pub fn new(area: Rect) -> Self {
        let vertical_chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(1), // Search line
                Constraint::Min(3),    // Main area (at least 3 rows)
                Constraint::Length(1), // Status bar
            ])
            .split(area);

        let horizontal_chunks = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Percentage(60), Constraint::Percentage(40)])
            .split(vertical_chunks[1]);

        Self {
            search_area: vertical_chunks[0],
            table_area: horizontal_chunks[0],
            detail_area: horizontal_chunks[1],
            status_area: vertical_chunks[2],
        }
    }
}
