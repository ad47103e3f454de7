use ratatui::Frame;
use ratatui::layout::{Constraint, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span, Text};
use ratatui::widgets::{Block, Borders, Cell, Paragraph, Row, Table, TableState, Wrap};

use super::app::{Focus, LoadState, MessageType, StatusMessage, split_input};
use super::layout::AppLayout;
use crate::models::{AlumniStats, Alumnus};
use crate::search::{SortColumn, SortOrder};
use crate::timeline::{job_facts, job_heading, job_tags, timeline};
use crate::utils::sanitize_for_terminal;

const BRIGHT: Color = Color::Rgb(250, 250, 250);
const MUTED: Color = Color::Rgb(113, 113, 122);
const ACCENT: Color = Color::Rgb(16, 185, 129);
const ERROR: Color = Color::Rgb(239, 68, 68);
const BAR_BG: Color = Color::Rgb(24, 24, 27);

/// Everything the renderer needs for one frame
pub struct RenderState<'a> {
    /// Visible rows in display order
    pub rows: &'a [&'a Alumnus],
    pub selected_idx: usize,
    pub search_query: &'a str,
    pub load_state: LoadState,
    pub stats: &'a AlumniStats,
    pub total_count: usize,
    pub active_filter: Option<&'a str>,
    pub sort_order: SortOrder,
    pub focus: Focus,
    pub detail_scroll: u16,
    pub search_pending: bool,
    pub current_year: i32,
    pub filter_error: Option<&'a str>,
    pub status_message: Option<&'a StatusMessage>,
}

/// Render the entire UI
pub fn render_ui(frame: &mut Frame, state: &RenderState) {
    let layout = AppLayout::new(frame.area());

    render_search_line(frame, layout.search_area, state);
    render_table(frame, layout.table_area, state);
    render_detail(frame, layout.detail_area, state);
    render_status_bar(frame, layout.status_area, state);
}

fn pane_block(title: String, focused: bool) -> Block<'static> {
    let border = if focused { ACCENT } else { MUTED };
    Block::default().borders(Borders::ALL).border_style(Style::default().fg(border)).title(title)
}

fn text_field(value: Option<&str>) -> String {
    value.map(sanitize_for_terminal).unwrap_or_default()
}

fn render_search_line(frame: &mut Frame, area: Rect, state: &RenderState) {
    let mut spans = vec![Span::styled("Search: ", Style::default().fg(MUTED))];

    if state.search_query.is_empty() {
        spans.push(Span::styled(
            "name, company, title or location (filters: comp:acme loc:pune | text)",
            Style::default().fg(MUTED).add_modifier(Modifier::ITALIC),
        ));
    } else {
        spans.push(Span::styled(state.search_query.to_string(), Style::default().fg(BRIGHT)));
        if state.search_pending {
            spans.push(Span::styled(" …", Style::default().fg(MUTED)));
        }
    }

    frame.render_widget(Paragraph::new(Line::from(spans)), area);
}

fn render_table(frame: &mut Frame, area: Rect, state: &RenderState) {
    let focused = state.focus == Focus::Table;

    if state.load_state == LoadState::Loading {
        let paragraph = Paragraph::new("Loading alumni data...")
            .style(Style::default().fg(MUTED))
            .block(pane_block(" Alumni ".to_string(), focused));
        frame.render_widget(paragraph, area);
        return;
    }

    let block = pane_block(format!(" Alumni ({}) ", state.rows.len()), focused);

    if state.rows.is_empty() {
        let paragraph = Paragraph::new("No alumni match the current search")
            .style(Style::default().fg(MUTED))
            .block(block);
        frame.render_widget(paragraph, area);
        return;
    }

    let header = Row::new(["Name", "Grad", "Company", "Title", "Location"])
        .style(Style::default().fg(MUTED).add_modifier(Modifier::BOLD));

    let rows = state.rows.iter().map(|alumnus| {
        let job = alumnus.first_job();
        Row::new(vec![
            Cell::from(sanitize_for_terminal(alumnus.name())),
            Cell::from(alumnus.grad_yr().map(|year| year.to_string()).unwrap_or_default()),
            Cell::from(text_field(job.comp.as_deref())),
            Cell::from(text_field(job.title.as_deref())),
            Cell::from(text_field(job.loc.as_deref())),
        ])
        .style(Style::default().fg(MUTED))
    });

    let widths = [
        Constraint::Percentage(24),
        Constraint::Length(4),
        Constraint::Percentage(26),
        Constraint::Percentage(26),
        Constraint::Percentage(20),
    ];

    let table = Table::new(rows, widths)
        .header(header)
        .block(block)
        .column_spacing(1)
        .row_highlight_style(Style::default().fg(BRIGHT).bg(ACCENT).add_modifier(Modifier::BOLD));

    let selected = state.selected_idx.min(state.rows.len() - 1);
    let mut table_state = TableState::default().with_selected(Some(selected));
    frame.render_stateful_widget(table, area, &mut table_state);
}

fn render_detail(frame: &mut Frame, area: Rect, state: &RenderState) {
    let block = pane_block(" Details ".to_string(), state.focus == Focus::Detail);

    let content = match (state.load_state, state.rows.get(state.selected_idx)) {
        (LoadState::Loading, _) => Text::from("Waiting for data..."),
        (LoadState::Ready, Some(alumnus)) => Text::from(detail_lines(alumnus, state.current_year)),
        (LoadState::Ready, None) => Text::from("No alumni selected"),
    };

    let paragraph = Paragraph::new(content)
        .block(block)
        .wrap(Wrap { trim: false })
        .scroll((state.detail_scroll, 0));

    frame.render_widget(paragraph, area);
}

/// Detail panel content: profile header followed by the job history, newest first
pub(super) fn detail_lines(alumnus: &Alumnus, current_year: i32) -> Vec<Line<'static>> {
    let person = alumnus.person();
    let label = Style::default().fg(MUTED);

    let mut lines = vec![Line::from(Span::styled(
        sanitize_for_terminal(alumnus.name()),
        Style::default().fg(BRIGHT).add_modifier(Modifier::BOLD),
    ))];

    let profile = [
        ("Graduated", alumnus.grad_yr().map(|year| year.to_string())),
        ("ID", person.id.as_deref().map(sanitize_for_terminal)),
        ("Email", person.email.as_deref().map(sanitize_for_terminal)),
        (
            "LinkedIn",
            Some(
                alumnus
                    .link_ln()
                    .map(sanitize_for_terminal)
                    .unwrap_or_else(|| "No LinkedIn found".to_string()),
            ),
        ),
    ];
    for (name, value) in profile {
        if let Some(value) = value {
            lines.push(Line::from(vec![
                Span::styled(format!("{}: ", name), label),
                Span::raw(value),
            ]));
        }
    }

    let jobs = timeline(alumnus);
    lines.push(Line::from(""));
    lines.push(Line::from(Span::styled(
        format!("Career history ({} {})", jobs.len(), if jobs.len() == 1 { "job" } else { "jobs" }),
        label.add_modifier(Modifier::BOLD),
    )));

    for job in jobs {
        lines.push(Line::from(""));
        lines.push(Line::from(Span::styled(
            sanitize_for_terminal(&job_heading(job)),
            Style::default().fg(ACCENT).add_modifier(Modifier::BOLD),
        )));

        let facts = job_facts(job, current_year);
        if !facts.is_empty() {
            lines.push(Line::from(format!("  {}", sanitize_for_terminal(&facts.join(" · ")))));
        }

        let tags = job_tags(job);
        if !tags.is_empty() {
            let tags = sanitize_for_terminal(&tags.join(" · "));
            lines.push(Line::from(Span::styled(format!("  {}", tags), label)));
        }

        if !job.skill_tags.is_empty() {
            let skills = sanitize_for_terminal(&job.skill_tags.join(", "));
            lines.push(Line::from(Span::styled(format!("  Skills: {}", skills), label)));
        }
    }

    lines
}

fn render_status_bar(frame: &mut Frame, area: Rect, state: &RenderState) {
    let bar = Style::default().fg(BRIGHT).bg(BAR_BG);

    let (status_text, style) = if let Some(message) = state.status_message {
        let fg = match message.message_type {
            MessageType::Success => ACCENT,
            MessageType::Error => ERROR,
        };
        (format!(" {} ", message.text), Style::default().fg(fg).bg(BAR_BG))
    } else if let Some(error) = state.filter_error {
        (format!(" [ERROR] {} ", error), Style::default().fg(ERROR).bg(BAR_BG))
    } else if state.load_state == LoadState::Loading {
        (" Loading alumni data... | Ctrl+C: quit ".to_string(), bar)
    } else {
        let stats = state.stats;
        let mut parts = vec![format!(
            "{} alumni · {} jobs · {} companies · {} locations",
            stats.total_alumni, stats.total_jobs, stats.unique_companies, stats.unique_locations
        )];

        if state.rows.len() < state.total_count {
            parts.push(format!("{}/{} shown", state.rows.len(), state.total_count));
        }

        if let Some(filter) = state.active_filter {
            parts.push(format!("filter: {}", filter));
        }

        if state.sort_order.column != SortColumn::Original {
            parts.push(format!("sort: {}", state.sort_order.describe()));
        }

        if !state.rows.is_empty() {
            parts.push(format!("{}/{}", state.selected_idx + 1, state.rows.len()));
        }

        let (_, text) = split_input(state.search_query);
        if !text.is_empty() {
            parts.push("Esc: clear".to_string());
        }
        parts.push("Tab: focus".to_string());
        parts.push("^S/^R: sort".to_string());
        parts.push("^Y: copy link".to_string());
        parts.push("^C: quit".to_string());

        (format!(" {} ", parts.join(" | ")), bar)
    };

    frame.render_widget(Paragraph::new(status_text).style(style), area);
}
