//! Browser state and event handling.
//!
//! The `App` struct owns the loaded alumni, the derived view (field filter, text search,
//! sort order, selection) and the event loop driven by `run()`.
//!
//! # Input
//!
//! The search line accepts `filter_expr | text`:
//! - Filter portion (left of `|`): applied when Enter is pressed, reduces the alumni set
//! - Text portion (right of `|`, or the whole input without `|`): substring search, applied
//!   once typing settles for [`SEARCH_DEBOUNCE`]
//!
//! # Loading
//!
//! A browser created with [`App::loading`] renders a Loading state until the background
//! load delivers. If the load fails the browser stays in Loading; the failure is in the log.

use std::time::{Duration, Instant};

use anyhow::Result;
use ratatui::Terminal;
use ratatui::backend::Backend;
use tracing::{debug, info};

use super::events::{Action, poll_event};
use super::rendering::{RenderState, detail_lines, render_ui};
use crate::analysis::compute_stats;
use crate::clipboard::copy_profile_link;
use crate::dataset::{LoadHandle, LoadPoll};
use crate::filters::{FilterExpr, evaluate_filter, parse_filter};
use crate::models::{AlumniStats, Alumnus};
use crate::search::{
    Debouncer, SEARCH_DEBOUNCE, SortColumn, SortOrder, compare_alumni, matches_query,
};
use crate::timeline::current_year;

/// Duration for success status messages (milliseconds)
const STATUS_SUCCESS_DURATION_MS: u64 = 3000;
/// Duration for error status messages (milliseconds)
const STATUS_ERROR_DURATION_MS: u64 = 5000;
/// Longest accepted search input, in characters
const MAX_QUERY_CHARS: usize = 256;
/// Minimum gap between two Enter presses that both apply the filter
const ENTER_REPEAT_GUARD: Duration = Duration::from_millis(150);
/// Redraw at least this often (terminal resizes) and poll input at most this long
const FRAME_INTERVAL: Duration = Duration::from_millis(100);
const PAGE_SIZE: isize = 10;

/// Type of status message
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MessageType {
    Success,
    Error,
}

/// Transient status message with expiry
#[derive(Debug, Clone)]
pub struct StatusMessage {
    pub text: String,
    pub message_type: MessageType,
    pub expires_at: Instant,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoadState {
    Loading,
    Ready,
}

/// Pane receiving navigation keys
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Focus {
    Table,
    Detail,
}

/// Split browser input into its filter portion (if any) and its text portion
pub(super) fn split_input(input: &str) -> (Option<&str>, &str) {
    if let Some(pipe_pos) = input.find('|') {
        let filter_part = input[..pipe_pos].trim();
        let text_part = input[pipe_pos + 1..].trim();

        let filter = if filter_part.is_empty() { None } else { Some(filter_part) };

        (filter, text_part)
    } else {
        // No pipe: treat entire input as text search
        (None, input)
    }
}

struct AppliedFilter {
    text: String,
    expr: FilterExpr,
}

pub struct App {
    loader: Option<LoadHandle>,
    load_state: LoadState,
    all_people: Vec<Alumnus>,
    stats: AlumniStats,
    /// Indices into `all_people` passing the field filter, in dataset order
    filtered: Vec<usize>,
    /// Indices into `all_people` shown in the table, in display order
    visible: Vec<usize>,
    search_query: String,
    /// Text search currently reflected in `visible`
    applied_text: String,
    debouncer: Debouncer<String>,
    sort_order: SortOrder,
    focus: Focus,
    selected_idx: usize,
    detail_scroll: u16,
    current_year: i32,
    should_quit: bool,
    current_filter: Option<AppliedFilter>,
    filter_error: Option<String>,
    last_enter_time: Option<Instant>,
    status_message: Option<StatusMessage>,
    needs_redraw: bool,
    last_draw_time: Instant,
}

impl App {
    /// Browser over an already loaded dataset
    pub fn new(people: Vec<Alumnus>) -> Self {
        let mut app = Self::empty(None);
        app.set_people(people);
        app
    }

    /// Browser that shows the Loading state until `loader` delivers
    pub fn loading(loader: LoadHandle) -> Self {
        Self::empty(Some(loader))
    }

    fn empty(loader: Option<LoadHandle>) -> Self {
        Self {
            loader,
            load_state: LoadState::Loading,
            all_people: Vec::new(),
            stats: AlumniStats::default(),
            filtered: Vec::new(),
            visible: Vec::new(),
            search_query: String::new(),
            applied_text: String::new(),
            debouncer: Debouncer::new(SEARCH_DEBOUNCE),
            sort_order: SortOrder::default(),
            focus: Focus::Table,
            selected_idx: 0,
            detail_scroll: 0,
            current_year: current_year(),
            should_quit: false,
            current_filter: None,
            filter_error: None,
            last_enter_time: None,
            status_message: None,
            needs_redraw: true, // Initial draw needed
            last_draw_time: Instant::now(),
        }
    }

    fn set_people(&mut self, people: Vec<Alumnus>) {
        self.stats = compute_stats(&people);
        self.all_people = people;
        self.load_state = LoadState::Ready;
        self.refilter();
        self.recompute_visible();
    }

    /// Pick up the background load result, if it has arrived
    fn poll_loader(&mut self) {
        let Some(loader) = self.loader.as_mut() else {
            return;
        };

        match loader.poll() {
            LoadPoll::Pending => {}
            LoadPoll::Ready(people) => {
                self.loader = None;
                info!("Browser ready with {} alumni", people.len());
                self.set_people(people);
            }
            LoadPoll::Failed => {
                // Already logged by the loader; keep showing Loading
                self.loader = None;
            }
        }
    }

    /// Set a transient status message with automatic expiry
    fn set_status(&mut self, text: impl Into<String>, message_type: MessageType, duration_ms: u64) {
        self.status_message = Some(StatusMessage {
            text: text.into(),
            message_type,
            expires_at: Instant::now() + Duration::from_millis(duration_ms),
        });
        self.needs_redraw = true;
    }

    /// Check and clear expired status messages
    fn check_and_clear_expired_status(&mut self) {
        let should_clear =
            self.status_message.as_ref().is_some_and(|msg| Instant::now() >= msg.expires_at);
        if should_clear {
            self.status_message = None;
            self.needs_redraw = true;
        }
    }

    /// Apply the debounced text search once its delay has elapsed
    fn tick(&mut self, now: Instant) {
        if let Some(text) = self.debouncer.poll(now) {
            self.apply_search(text);
        }
    }

    pub fn run<B: Backend>(&mut self, terminal: &mut Terminal<B>) -> Result<()> {
        while !self.should_quit {
            self.poll_loader();
            self.check_and_clear_expired_status();

            let now = Instant::now();
            self.tick(now);

            // Draw if dirty or if it's been a frame interval (for terminal resize handling)
            if self.needs_redraw || now.duration_since(self.last_draw_time) >= FRAME_INTERVAL {
                self.draw(terminal)?;
                self.needs_redraw = false;
                self.last_draw_time = now;
            }

            // Wake up in time for a pending search
            let timeout = self
                .debouncer
                .time_remaining(Instant::now())
                .map_or(FRAME_INTERVAL, |remaining| remaining.min(FRAME_INTERVAL));
            let action = poll_event(timeout)?;
            self.handle_action(action);
        }

        Ok(())
    }

    fn draw<B: Backend>(&self, terminal: &mut Terminal<B>) -> Result<()> {
        let rows = self.visible_rows();
        terminal.draw(|f| {
            let state = RenderState {
                rows: &rows,
                selected_idx: self.selected_idx,
                search_query: &self.search_query,
                load_state: self.load_state,
                stats: &self.stats,
                total_count: self.all_people.len(),
                active_filter: self.current_filter.as_ref().map(|f| f.text.as_str()),
                sort_order: self.sort_order,
                focus: self.focus,
                detail_scroll: self.detail_scroll,
                search_pending: self.debouncer.is_pending(),
                current_year: self.current_year,
                filter_error: self.filter_error.as_deref(),
                status_message: self.status_message.as_ref(),
            };
            render_ui(f, &state);
        })?;
        Ok(())
    }

    fn visible_rows(&self) -> Vec<&Alumnus> {
        self.visible.iter().map(|&idx| &self.all_people[idx]).collect()
    }

    fn selected_alumnus(&self) -> Option<&Alumnus> {
        self.visible.get(self.selected_idx).map(|&idx| &self.all_people[idx])
    }

    /// Handle a user action (extracted for testing)
    fn handle_action(&mut self, action: Action) {
        match action {
            Action::Quit => self.should_quit = true,
            Action::ClearSearch => {
                if self.search_query.is_empty() {
                    self.should_quit = true;
                } else {
                    self.clear_search();
                }
            }
            Action::MoveUp => self.navigate(-1),
            Action::MoveDown => self.navigate(1),
            Action::PageUp => self.navigate(-PAGE_SIZE),
            Action::PageDown => self.navigate(PAGE_SIZE),
            Action::Home => self.navigate(isize::MIN),
            Action::End => self.navigate(isize::MAX),
            Action::UpdateSearch(c) => self.update_search(c),
            Action::DeleteChar => self.delete_char(),
            Action::ApplyFilter => {
                // Only apply if the guard has elapsed since the last Enter
                let should_apply = self
                    .last_enter_time
                    .is_none_or(|last_time| last_time.elapsed() >= ENTER_REPEAT_GUARD);

                if should_apply {
                    self.apply_filter();
                    self.last_enter_time = Some(Instant::now());
                }
            }
            Action::CopyLink => self.copy_link(),
            Action::ToggleFocus => {
                self.focus = match self.focus {
                    Focus::Table => Focus::Detail,
                    Focus::Detail => Focus::Table,
                };
                self.needs_redraw = true;
            }
            Action::CycleSort => {
                let order = SortOrder { column: self.sort_order.column.next(), ..self.sort_order };
                self.set_sort_order(order);
            }
            Action::ReverseSort => {
                let order =
                    SortOrder { direction: self.sort_order.direction.toggled(), ..self.sort_order };
                self.set_sort_order(order);
            }
            Action::None => {}
        }
    }

    fn navigate(&mut self, delta: isize) {
        match self.focus {
            Focus::Table => self.move_selection(delta),
            Focus::Detail => self.scroll_detail(delta),
        }
    }

    fn move_selection(&mut self, delta: isize) {
        let total = self.visible.len();
        if total == 0 {
            self.selected_idx = 0;
            return;
        }

        let old_idx = self.selected_idx;
        let new_idx = (self.selected_idx as isize).saturating_add(delta).max(0) as usize;
        self.selected_idx = new_idx.min(total - 1);

        if old_idx != self.selected_idx {
            self.detail_scroll = 0;
            self.needs_redraw = true;
        }
    }

    fn scroll_detail(&mut self, delta: isize) {
        let max_scroll = self
            .selected_alumnus()
            .map_or(0, |alumnus| detail_lines(alumnus, self.current_year).len().saturating_sub(1));
        let max_scroll = u16::try_from(max_scroll).unwrap_or(u16::MAX) as isize;

        let old_scroll = self.detail_scroll;
        let new_scroll = (self.detail_scroll as isize).saturating_add(delta).clamp(0, max_scroll);
        self.detail_scroll = new_scroll as u16;

        if old_scroll != self.detail_scroll {
            self.needs_redraw = true;
        }
    }

    fn update_search(&mut self, c: char) {
        // Limit search input to prevent runaway redraw work
        if self.search_query.chars().count() < MAX_QUERY_CHARS {
            self.search_query.push(c);
            self.schedule_search();
        }
    }

    fn delete_char(&mut self) {
        if self.search_query.pop().is_some() {
            self.schedule_search();
        }
    }

    /// Restart the debounce timer with the current text portion
    fn schedule_search(&mut self) {
        let (_, text) = split_input(&self.search_query);
        let text = text.to_string();
        self.debouncer.schedule(text, Instant::now());
        self.needs_redraw = true;
    }

    fn apply_search(&mut self, text: String) {
        if text == self.applied_text {
            return;
        }
        debug!("Applying search: {:?}", text);
        self.applied_text = text;
        self.selected_idx = 0;
        self.detail_scroll = 0;
        self.recompute_visible();
    }

    fn clear_search(&mut self) {
        self.search_query.clear();
        self.debouncer.cancel();
        self.applied_text.clear();
        self.current_filter = None;
        self.filter_error = None;
        self.selected_idx = 0;
        self.detail_scroll = 0;
        self.refilter();
        self.recompute_visible();
    }

    /// Apply the filter portion of the input, and settle the text portion with it
    fn apply_filter(&mut self) {
        let (filter_part, text_part) = split_input(&self.search_query);
        let filter_part = filter_part.map(str::to_string);
        let text = text_part.to_string();

        self.current_filter = match filter_part {
            None => None,
            Some(filter_text) => match parse_filter(&filter_text) {
                Ok(expr) => Some(AppliedFilter { text: filter_text, expr }),
                Err(e) => {
                    self.filter_error = Some(format!("Filter error: {:#}", e));
                    self.needs_redraw = true;
                    return;
                }
            },
        };
        self.filter_error = None;

        // The pending text, when there is one, is the text portion of the same input
        self.applied_text = self.debouncer.flush().unwrap_or(text);
        self.selected_idx = 0;
        self.detail_scroll = 0;
        self.refilter();
        self.recompute_visible();
    }

    /// Recompute the field-filtered set from the full dataset
    fn refilter(&mut self) {
        let people = &self.all_people;
        let filtered = match &self.current_filter {
            None => (0..people.len()).collect(),
            Some(filter) => (0..people.len())
                .filter(|&idx| evaluate_filter(&people[idx], &filter.expr))
                .collect(),
        };
        self.filtered = filtered;
    }

    /// Recompute the visible rows: text search over the filtered set, then sort
    fn recompute_visible(&mut self) {
        let people = &self.all_people;
        let text = self.applied_text.as_str();
        let order = self.sort_order;

        let mut visible: Vec<usize> = self
            .filtered
            .iter()
            .copied()
            .filter(|&idx| matches_query(&people[idx], text))
            .collect();
        if order.column != SortColumn::Original {
            visible.sort_by(|&a, &b| compare_alumni(&people[a], &people[b], order));
        }

        self.visible = visible;
        self.selected_idx = self.selected_idx.min(self.visible.len().saturating_sub(1));
        self.needs_redraw = true;
    }

    /// Change the sort order, keeping the selected person selected
    fn set_sort_order(&mut self, order: SortOrder) {
        let selected = self.visible.get(self.selected_idx).copied();
        self.sort_order = order;
        self.recompute_visible();

        if let Some(person_idx) = selected
            && let Some(position) = self.visible.iter().position(|&idx| idx == person_idx)
        {
            self.selected_idx = position;
        }
    }

    fn copy_link(&mut self) {
        let result = self.selected_alumnus().map(|alumnus| copy_profile_link(alumnus.link_ln()));

        match result {
            None => self.set_status(
                "✗ No alumni selected",
                MessageType::Error,
                STATUS_ERROR_DURATION_MS,
            ),
            Some(Ok(link)) => self.set_status(
                format!("✓ Copied {}", link),
                MessageType::Success,
                STATUS_SUCCESS_DURATION_MS,
            ),
            Some(Err(e)) => {
                self.set_status(format!("✗ {}", e), MessageType::Error, STATUS_ERROR_DURATION_MS)
            }
        }
    }
}
