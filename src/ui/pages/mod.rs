//! Pages: routes, the state every resource page shares, and table rendering.

pub mod cinemas;
pub mod dashboard;
pub mod login;
pub mod rooms;
pub mod seats;
pub mod showtimes;

use ratatui::layout::{Constraint, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Cell, Paragraph, Row, Table, TableState};
use ratatui::Frame;

use crate::api::{Entity, Resource};
use crate::dispatch_mvi;
use crate::store::{AppState, CrudRequest, SliceIntent, Store, StoreSlice};
use crate::ui::form::{
    ConfirmIntent, ConfirmReducer, ConfirmState, EditForm, EditorIntent, EditorReducer,
    EditorState,
};
use crate::ui::theme::{spinner, ACCENT, ACTIVE_HIGHLIGHT, GLOBAL_BORDER, HEADER_TEXT, MUTED_TEXT};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Route {
    Login,
    Dashboard,
    Cinemas,
    Rooms,
    Seats,
    Showtimes,
}

impl Route {
    /// Routes reachable from the tab bar, in order.
    pub const TABS: [Route; 5] = [
        Route::Dashboard,
        Route::Cinemas,
        Route::Rooms,
        Route::Seats,
        Route::Showtimes,
    ];

    pub fn title(self) -> &'static str {
        match self {
            Route::Login => "Login",
            Route::Dashboard => "Dashboard",
            Route::Cinemas => "Cinemas",
            Route::Rooms => "Rooms",
            Route::Seats => "Seats",
            Route::Showtimes => "Showtimes",
        }
    }

    /// Route for a path; the root path lands on the dashboard.
    pub fn from_path(path: &str) -> Option<Route> {
        match path.trim_end_matches('/') {
            "" | "/dashboard" => Some(Route::Dashboard),
            "/login" => Some(Route::Login),
            "/cinemas" => Some(Route::Cinemas),
            "/rooms" => Some(Route::Rooms),
            "/seats" => Some(Route::Seats),
            "/showtimes" => Some(Route::Showtimes),
            _ => None,
        }
    }

    /// Tab selected by a `1`-`5` key.
    pub fn from_digit(digit: char) -> Option<Route> {
        let index = digit.to_digit(10)? as usize;
        Self::TABS.get(index.checked_sub(1)?).copied()
    }

    pub fn tab_index(self) -> Option<usize> {
        Self::TABS.iter().position(|tab| *tab == self)
    }

    pub fn next_tab(self) -> Route {
        self.step(1)
    }

    pub fn prev_tab(self) -> Route {
        self.step(Self::TABS.len() - 1)
    }

    fn step(self, by: usize) -> Route {
        match self.tab_index() {
            Some(index) => Self::TABS[(index + by) % Self::TABS.len()],
            None => Route::Dashboard,
        }
    }
}

/// Short description of an entity for prompts, e.g. `room "Hall 2"`.
pub trait Labeled {
    fn label(&self) -> String;
}

/// Local state of a resource page: row selection, editor and delete prompt.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct ResourcePage<F: EditForm> {
    selected: usize,
    editor: EditorState<F>,
    confirm: ConfirmState,
}

impl<F: EditForm> ResourcePage<F> {
    pub fn editor(&self) -> &EditorState<F> {
        &self.editor
    }

    pub fn confirm(&self) -> &ConfirmState {
        &self.confirm
    }
}

impl<F> ResourcePage<F>
where
    F: EditForm,
    F::Entity: StoreSlice + Labeled,
{
    /// Selected row, clamped to the current collection length.
    pub fn selected(&self, state: &AppState) -> Option<usize> {
        let len = F::Entity::slice(state).len();
        (len > 0).then(|| self.selected.min(len - 1))
    }

    pub fn selected_entity<'a>(&self, state: &'a AppState) -> Option<&'a F::Entity> {
        let index = self.selected(state)?;
        F::Entity::slice(state).items().get(index)
    }

    pub fn select_next(&mut self, state: &AppState) {
        let len = F::Entity::slice(state).len();
        if len > 0 {
            self.selected = (self.selected.min(len - 1) + 1) % len;
        }
    }

    pub fn select_prev(&mut self, state: &AppState) {
        let len = F::Entity::slice(state).len();
        if len > 0 {
            self.selected = (self.selected.min(len - 1) + len - 1) % len;
        }
    }

    pub fn dispatch_editor(&mut self, intent: EditorIntent<F>) {
        dispatch_mvi!(self.editor, EditorReducer<F>, intent);
    }

    fn dispatch_confirm(&mut self, intent: ConfirmIntent) {
        dispatch_mvi!(self.confirm, ConfirmReducer, intent);
    }

    pub fn open_create(&mut self, form: F) {
        self.dispatch_editor(EditorIntent::OpenCreate { form });
    }

    /// Open the editor on the selected row; no-op on an empty table.
    pub fn open_edit(&mut self, state: &AppState) {
        let Some(entity) = self.selected_entity(state) else {
            return;
        };
        let intent = EditorIntent::OpenEdit {
            id: entity.id().to_string(),
            form: F::from_entity(entity),
        };
        self.dispatch_editor(intent);
    }

    /// Validate the buffer and dispatch create or update.
    pub fn submit(&mut self, store: &mut Store) {
        let Some(form) = self.editor.form() else {
            return;
        };
        if self.editor.is_submitting() {
            return;
        }
        let draft = match form.to_draft() {
            Ok(draft) => draft,
            Err(err) => {
                self.dispatch_editor(EditorIntent::ValidationFailed {
                    message: err.to_string(),
                });
                return;
            }
        };
        let request = match self.editor.editing() {
            Some(id) => CrudRequest::Update {
                id: id.to_string(),
                draft,
            },
            None => CrudRequest::Create { draft },
        };

        self.dispatch_editor(EditorIntent::Submitted);
        if let Err(message) = store.request::<F::Entity>(request) {
            self.dispatch_editor(EditorIntent::SubmitFailed { message });
        }
    }

    /// Close or fail the editor once its own request settles.
    pub fn settle(&mut self, intent: &SliceIntent<F::Entity>) {
        if !self.editor.is_submitting() || intent.settled_op() != Some(self.editor.submit_op()) {
            return;
        }
        let next = match intent {
            SliceIntent::Rejected { message, .. } => EditorIntent::SubmitFailed {
                message: message.clone(),
            },
            _ => EditorIntent::SubmitSucceeded,
        };
        self.dispatch_editor(next);
    }

    pub fn request_delete(&mut self, state: &AppState) {
        let Some(entity) = self.selected_entity(state) else {
            return;
        };
        let intent = ConfirmIntent::Ask {
            id: entity.id().to_string(),
            label: entity.label(),
        };
        self.dispatch_confirm(intent);
    }

    /// Answer the delete prompt; only `yes` sends the request.
    pub fn answer_delete(&mut self, store: &mut Store, yes: bool) {
        let target = self.confirm.target().map(str::to_string);
        self.dispatch_confirm(ConfirmIntent::Answer);
        if let (true, Some(id)) = (yes, target) {
            // A refused send is already recorded in the slice error.
            let _ = store.request::<F::Entity>(CrudRequest::Delete { id });
        }
    }

    /// Drop transient state when the user leaves the page.
    pub fn reset(&mut self) {
        self.dispatch_editor(EditorIntent::Close);
        self.dispatch_confirm(ConfirmIntent::Answer);
    }
}

/// Common table frame: title with count and spinner, header row, selection.
pub struct TableView<'a, const N: usize> {
    pub title: String,
    pub headers: [&'static str; N],
    pub widths: [Constraint; N],
    pub rows: Vec<[String; N]>,
    pub selected: Option<usize>,
    pub loading: bool,
    pub tick: u8,
    pub empty_hint: &'a str,
}

impl<const N: usize> TableView<'_, N> {
    pub fn render(self, frame: &mut Frame, area: Rect) {
        let mut title = vec![Span::styled(
            format!(" {} ({}) ", self.title, self.rows.len()),
            Style::default().fg(ACCENT),
        )];
        if self.loading {
            title.push(Span::styled(
                format!("{} loading ", spinner(self.tick)),
                Style::default().fg(MUTED_TEXT),
            ));
        }
        let block = Block::default()
            .title(Line::from(title))
            .borders(Borders::ALL)
            .border_style(Style::default().fg(GLOBAL_BORDER));

        if self.rows.is_empty() {
            let hint = if self.loading { "" } else { self.empty_hint };
            let paragraph = Paragraph::new(Line::from(Span::styled(
                hint.to_string(),
                Style::default().fg(MUTED_TEXT),
            )))
            .block(block);
            frame.render_widget(paragraph, area);
            return;
        }

        let header = Row::new(self.headers.map(|h| {
            Cell::from(h).style(Style::default().add_modifier(Modifier::BOLD))
        }))
        .style(Style::default().fg(HEADER_TEXT));
        let rows = self.rows.into_iter().map(|cells| Row::new(cells.map(Cell::from)));
        let table = Table::new(rows, self.widths)
            .header(header)
            .block(block)
            .row_highlight_style(Style::default().bg(ACTIVE_HIGHLIGHT).fg(ACCENT))
            .highlight_symbol("▶ ");

        let mut table_state = TableState::default().with_selected(self.selected);
        frame.render_stateful_widget(table, area, &mut table_state);
    }
}

/// Number of rows of a slice, shown on the dashboard.
pub fn count_label<R: Resource>(len: usize, loading: bool) -> String {
    if loading && len == 0 {
        "…".to_string()
    } else {
        format!("{} {}", len, R::COLLECTION)
    }
}
