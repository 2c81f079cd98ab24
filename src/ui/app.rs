use crate::api::{Cinema, Room, Seat, SeatQuery, Showtime};
use crate::config::ConfigStore;
use crate::dispatch_mvi;
use crate::store::{AppState, AuthIntent, CrudRequest, Store, StoreIntent, StoreSlice};
use crate::ui::form::{CinemaForm, EditorIntent, RoomForm, SeatForm, ShowtimeForm};
use crate::ui::pages::login::{LoginIntent, LoginReducer, LoginState};
use crate::ui::pages::seats::RoomFilter;
use crate::ui::pages::{rooms, seats, ResourcePage, Route};
use crate::worker::CommandSender;

/// Editor keystrokes, independent of which form is open.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EditorKey {
    FocusNext,
    FocusPrev,
    Input(char),
    Backspace,
    Submit,
    Cancel,
}

/// What currently captures the keyboard on a resource page.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Overlay {
    None,
    Editor,
    Confirm,
}

/// Runs `$body` with `$page` bound to the active resource page.
macro_rules! with_page {
    ($self:ident, |$page:ident| $body:expr, $default:expr) => {
        match $self.route {
            Route::Cinemas => {
                let $page = &mut $self.cinemas;
                $body
            }
            Route::Rooms => {
                let $page = &mut $self.rooms;
                $body
            }
            Route::Seats => {
                let $page = &mut $self.seats;
                $body
            }
            Route::Showtimes => {
                let $page = &mut $self.showtimes;
                $body
            }
            Route::Login | Route::Dashboard => $default,
        }
    };
}

pub struct App {
    config: ConfigStore,
    config_error: Option<String>,
    store: Store,
    route: Route,
    auth_required: bool,
    login: LoginState,
    cinemas: ResourcePage<CinemaForm>,
    rooms: ResourcePage<RoomForm>,
    seats: ResourcePage<SeatForm>,
    seat_filter: RoomFilter,
    showtimes: ResourcePage<ShowtimeForm>,
    should_quit: bool,
    animation_tick: u8,
}

impl App {
    pub fn new(config: ConfigStore, commands: CommandSender) -> Self {
        let current = config.get();
        Self {
            config,
            config_error: None,
            store: Store::new(commands),
            route: Route::Login,
            auth_required: current.auth.required,
            login: LoginState::with_email(current.auth.email.unwrap_or_default()),
            cinemas: ResourcePage::default(),
            rooms: ResourcePage::default(),
            seats: ResourcePage::default(),
            seat_filter: RoomFilter::default(),
            showtimes: ResourcePage::default(),
            should_quit: false,
            animation_tick: 0,
        }
    }

    /// Enter the first page. Every page other than login sits behind the
    /// gate when authentication is required.
    pub fn start(&mut self, requested: Route) {
        self.route = if self.is_gated() {
            Route::Login
        } else {
            requested
        };
        tracing::info!(route = ?self.route, "UI started");
        self.mount(self.route);
    }

    pub fn state(&self) -> &AppState {
        self.store.state()
    }

    pub fn route(&self) -> Route {
        self.route
    }

    pub fn login(&self) -> &LoginState {
        &self.login
    }

    pub fn cinemas(&self) -> &ResourcePage<CinemaForm> {
        &self.cinemas
    }

    pub fn rooms(&self) -> &ResourcePage<RoomForm> {
        &self.rooms
    }

    pub fn seats(&self) -> &ResourcePage<SeatForm> {
        &self.seats
    }

    pub fn seat_filter(&self) -> &RoomFilter {
        &self.seat_filter
    }

    pub fn showtimes(&self) -> &ResourcePage<ShowtimeForm> {
        &self.showtimes
    }

    pub fn animation_tick(&self) -> u8 {
        self.animation_tick
    }

    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    pub fn request_quit(&mut self) {
        self.should_quit = true;
    }

    /// True while the login gate blocks every page.
    pub fn is_gated(&self) -> bool {
        self.auth_required && !self.state().auth.is_authenticated()
    }

    pub fn session_name(&self) -> Option<&str> {
        self.state()
            .auth
            .session()
            .map(|session| session.display_name.as_str())
    }

    pub fn on_tick(&mut self) {
        self.animation_tick = self.animation_tick.wrapping_add(1);
    }

    // ========================================================================
    // Navigation
    // ========================================================================

    pub fn navigate(&mut self, target: Route) {
        let target = if target != Route::Login && self.is_gated() {
            Route::Login
        } else {
            target
        };
        if target == self.route {
            return;
        }
        tracing::debug!(from = ?self.route, to = ?target, "Navigate");
        self.leave(self.route);
        self.route = target;
        self.mount(target);
    }

    /// Re-run the current page's fetches.
    pub fn refresh(&mut self) {
        self.mount(self.route);
    }

    fn mount(&mut self, route: Route) {
        match route {
            Route::Login => {}
            Route::Dashboard => {
                self.fetch::<Cinema>(());
                self.fetch::<Room>(());
                self.fetch::<Seat>(SeatQuery::all());
                self.fetch::<Showtime>(());
            }
            Route::Cinemas => self.fetch::<Cinema>(()),
            Route::Rooms => {
                self.fetch::<Room>(());
                self.fetch::<Cinema>(());
            }
            Route::Seats => {
                self.fetch::<Room>(());
                self.fetch::<Seat>(self.seat_filter.query());
            }
            Route::Showtimes => {
                self.fetch::<Showtime>(());
                self.fetch::<Room>(());
            }
        }
    }

    /// Drop the page's transient state and detach its slice from requests
    /// still in flight.
    fn leave(&mut self, route: Route) {
        match route {
            Route::Login => {}
            Route::Dashboard => {
                self.store.invalidate::<Cinema>();
                self.store.invalidate::<Room>();
                self.store.invalidate::<Seat>();
                self.store.invalidate::<Showtime>();
            }
            Route::Cinemas => {
                self.cinemas.reset();
                self.store.invalidate::<Cinema>();
            }
            Route::Rooms => {
                self.rooms.reset();
                self.store.invalidate::<Room>();
            }
            Route::Seats => {
                self.seats.reset();
                self.store.invalidate::<Seat>();
            }
            Route::Showtimes => {
                self.showtimes.reset();
                self.store.invalidate::<Showtime>();
            }
        }
    }

    fn fetch<R: StoreSlice>(&mut self, query: R::Query) {
        // A refused send is recorded in the slice error.
        let _ = self.store.request::<R>(CrudRequest::FetchAll { query });
    }

    // ========================================================================
    // Settlements from the API worker
    // ========================================================================

    pub fn on_settled(&mut self, intent: StoreIntent) {
        if self.store.is_stale(&intent) {
            tracing::warn!(slice = intent.slice(), "Discarding stale settlement");
            return;
        }

        match &intent {
            StoreIntent::Cinema(settled) => self.cinemas.settle(settled),
            StoreIntent::Room(settled) => self.rooms.settle(settled),
            StoreIntent::Seat(settled) => self.seats.settle(settled),
            StoreIntent::Showtime(settled) => self.showtimes.settle(settled),
            StoreIntent::Auth(AuthIntent::LoginRejected { .. }) => {
                dispatch_mvi!(self.login, LoginReducer, LoginIntent::ClearPassword);
            }
            StoreIntent::Auth(_) => {}
        }

        let logged_in = matches!(intent, StoreIntent::Auth(AuthIntent::LoginSucceeded { .. }));
        self.store.apply(intent);
        if logged_in && self.route == Route::Login {
            self.navigate(Route::Dashboard);
        }
    }

    // ========================================================================
    // Login page
    // ========================================================================

    pub fn login_intent(&mut self, intent: LoginIntent) {
        if matches!(intent, LoginIntent::Input(_) | LoginIntent::Backspace)
            && self.state().auth.error().is_some()
        {
            self.store.apply(StoreIntent::Auth(AuthIntent::ClearError));
        }
        dispatch_mvi!(self.login, LoginReducer, intent);
    }

    pub fn submit_login(&mut self) {
        if self.state().auth.is_loading() {
            return;
        }
        match self.login.to_request() {
            Ok(request) => {
                tracing::info!(email = %request.email, "Logging in");
                self.store.login(request);
            }
            Err(message) => self.login_intent(LoginIntent::Invalid { message }),
        }
    }

    /// Drop the session. Ignored while a login is still in flight.
    pub fn logout(&mut self) {
        if !self.auth_required || self.state().auth.is_loading() {
            return;
        }
        self.leave(self.route);
        self.store.logout();
        self.login = LoginState::with_email(self.login.email());
        self.route = Route::Login;
    }

    // ========================================================================
    // Config
    // ========================================================================

    /// Re-read the config file and apply the auth settings. API and UI
    /// settings take effect on the next start.
    pub fn reload_config(&mut self) {
        if let Err(err) = self.config.reload() {
            tracing::warn!(
                error = %err,
                path = %self.config.path().display(),
                "Config reload failed"
            );
            self.config_error = Some(err.to_string());
            return;
        }
        let config = self.config.get();
        tracing::info!(path = %self.config.path().display(), "Config reloaded");
        self.config_error = None;
        self.auth_required = config.auth.required;
        if let Some(email) = config.auth.email {
            if self.login.email().is_empty() {
                self.login = LoginState::with_email(email);
            }
        }

        if self.is_gated() {
            self.navigate(Route::Login);
        } else if self.route == Route::Login {
            self.navigate(Route::Dashboard);
        }
    }

    // ========================================================================
    // Resource pages
    // ========================================================================

    pub fn overlay(&self) -> Overlay {
        let (editor, confirm) = match self.route {
            Route::Cinemas => (self.cinemas.editor().is_visible(), self.cinemas.confirm().is_visible()),
            Route::Rooms => (self.rooms.editor().is_visible(), self.rooms.confirm().is_visible()),
            Route::Seats => (self.seats.editor().is_visible(), self.seats.confirm().is_visible()),
            Route::Showtimes => (
                self.showtimes.editor().is_visible(),
                self.showtimes.confirm().is_visible(),
            ),
            Route::Login | Route::Dashboard => (false, false),
        };
        match (editor, confirm) {
            (true, _) => Overlay::Editor,
            (false, true) => Overlay::Confirm,
            (false, false) => Overlay::None,
        }
    }

    pub fn select_next(&mut self) {
        with_page!(self, |page| page.select_next(self.store.state()), ())
    }

    pub fn select_prev(&mut self) {
        with_page!(self, |page| page.select_prev(self.store.state()), ())
    }

    pub fn open_create(&mut self) {
        let state = self.store.state();
        match self.route {
            Route::Cinemas => self.cinemas.open_create(CinemaForm::default()),
            Route::Rooms => {
                let form = RoomForm::for_cinema(rooms::default_cinema(state, &self.rooms));
                self.rooms.open_create(form);
            }
            Route::Seats => {
                let form = SeatForm::for_room(seats::default_room(state, &self.seat_filter));
                self.seats.open_create(form);
            }
            Route::Showtimes => self.showtimes.open_create(ShowtimeForm::default()),
            Route::Login | Route::Dashboard => {}
        }
    }

    pub fn open_edit(&mut self) {
        with_page!(self, |page| page.open_edit(self.store.state()), ())
    }

    pub fn request_delete(&mut self) {
        with_page!(self, |page| page.request_delete(self.store.state()), ())
    }

    pub fn answer_delete(&mut self, yes: bool) {
        with_page!(self, |page| page.answer_delete(&mut self.store, yes), ())
    }

    pub fn editor_key(&mut self, key: EditorKey) {
        with_page!(
            self,
            |page| match key {
                EditorKey::Submit => page.submit(&mut self.store),
                EditorKey::Cancel => page.dispatch_editor(EditorIntent::Close),
                EditorKey::FocusNext => page.dispatch_editor(EditorIntent::FocusNext),
                EditorKey::FocusPrev => page.dispatch_editor(EditorIntent::FocusPrev),
                EditorKey::Input(ch) => page.dispatch_editor(EditorIntent::Input(ch)),
                EditorKey::Backspace => page.dispatch_editor(EditorIntent::Backspace),
            },
            ()
        )
    }

    /// Step the seats page through its room filter and refetch.
    pub fn cycle_seat_room(&mut self, forward: bool) {
        if self.route != Route::Seats {
            return;
        }
        let rooms = self.store.state().room.items();
        self.seat_filter.cycle(rooms, forward);
        self.store.invalidate::<Seat>();
        self.fetch::<Seat>(self.seat_filter.query());
    }

    /// Errors of the slices the current page shows, with their slice name.
    pub fn banner_errors(&self) -> Vec<(&'static str, &str)> {
        let state = self.state();
        let shown: &[(&'static str, Option<&str>)] = match self.route {
            Route::Login => &[],
            Route::Dashboard => &[
                ("cinemas", state.cinema.error()),
                ("rooms", state.room.error()),
                ("seats", state.seat.error()),
                ("showtimes", state.showtime.error()),
            ],
            Route::Cinemas => &[("cinemas", state.cinema.error())],
            Route::Rooms => &[("rooms", state.room.error()), ("cinemas", state.cinema.error())],
            Route::Seats => &[("seats", state.seat.error()), ("rooms", state.room.error())],
            Route::Showtimes => &[
                ("showtimes", state.showtime.error()),
                ("rooms", state.room.error()),
            ],
        };
        self.config_error
            .iter()
            .map(|message| ("config", message.as_str()))
            .chain(
                shown
                    .iter()
                    .filter_map(|(slice, error)| error.map(|message| (*slice, message))),
            )
            .collect()
    }

    /// Dismiss the banner: clear the error slots the page shows, no retry.
    pub fn dismiss_errors(&mut self) {
        self.config_error = None;
        match self.route {
            Route::Login => {}
            Route::Dashboard => {
                self.store.clear_error::<Cinema>();
                self.store.clear_error::<Room>();
                self.store.clear_error::<Seat>();
                self.store.clear_error::<Showtime>();
            }
            Route::Cinemas => self.store.clear_error::<Cinema>(),
            Route::Rooms => {
                self.store.clear_error::<Room>();
                self.store.clear_error::<Cinema>();
            }
            Route::Seats => {
                self.store.clear_error::<Seat>();
                self.store.clear_error::<Room>();
            }
            Route::Showtimes => {
                self.store.clear_error::<Showtime>();
                self.store.clear_error::<Room>();
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::{Session, SeatStatus};
    use crate::config::{Config, Overrides, SecureString};
    use crate::store::{Command, CrudOp, Epoch, SliceIntent};
    use tokio::sync::mpsc;

    fn make_app(auth_required: bool) -> (App, mpsc::Receiver<Command>) {
        let mut config = Config::default();
        config.auth.required = auth_required;
        let (tx, rx) = mpsc::channel(64);
        let mut app = App::new(ConfigStore::new(config, "config.toml".into()), tx);
        app.start(Route::Dashboard);
        (app, rx)
    }

    fn drain(rx: &mut mpsc::Receiver<Command>) -> Vec<String> {
        std::iter::from_fn(|| rx.try_recv().ok())
            .map(|command| command.label())
            .collect()
    }

    fn seat(id: &str) -> Seat {
        seat_in(id, "r1")
    }

    fn seat_in(id: &str, room_id: &str) -> Seat {
        Seat {
            id: id.into(),
            room_id: room_id.into(),
            seat_number: id.to_uppercase(),
            status: SeatStatus::Available,
            showtime_id: None,
        }
    }

    #[test]
    fn gate_redirects_to_login() {
        let (mut app, mut rx) = make_app(true);
        assert_eq!(app.route(), Route::Login);
        assert!(drain(&mut rx).is_empty());

        app.navigate(Route::Cinemas);
        assert_eq!(app.route(), Route::Login);
    }

    #[test]
    fn login_success_lands_on_dashboard() {
        let (mut app, mut rx) = make_app(true);
        for ch in "a@b.c".chars() {
            app.login_intent(LoginIntent::Input(ch));
        }
        app.login_intent(LoginIntent::SwitchField);
        app.login_intent(LoginIntent::Input('p'));
        app.submit_login();
        assert_eq!(drain(&mut rx), vec!["auth:login"]);
        assert!(app.state().auth.is_loading());

        app.on_settled(StoreIntent::Auth(AuthIntent::LoginSucceeded {
            session: Session {
                display_name: "Ada".into(),
                token: SecureString::new("t".into()),
            },
        }));
        assert_eq!(app.route(), Route::Dashboard);
        assert_eq!(app.session_name(), Some("Ada"));
        assert_eq!(
            drain(&mut rx),
            vec!["cinema:fetch", "room:fetch", "seat:fetch", "showtime:fetch"]
        );
    }

    #[test]
    fn without_gate_root_is_dashboard() {
        let (app, mut rx) = make_app(false);
        assert_eq!(app.route(), Route::Dashboard);
        assert_eq!(drain(&mut rx).len(), 4);
    }

    #[test]
    fn rooms_page_also_fetches_cinemas() {
        let (mut app, mut rx) = make_app(false);
        drain(&mut rx);
        app.navigate(Route::Rooms);
        assert_eq!(drain(&mut rx), vec!["room:fetch", "cinema:fetch"]);
    }

    #[test]
    fn leaving_a_page_discards_its_late_results() {
        let (mut app, mut rx) = make_app(false);
        app.navigate(Route::Seats);
        drain(&mut rx);
        let epoch = app.state().seat.epoch();

        app.navigate(Route::Dashboard);
        app.on_settled(StoreIntent::Seat(SliceIntent::Fetched {
            epoch,
            items: vec![seat("s1")],
        }));
        assert!(app.state().seat.is_empty());
    }

    #[test]
    fn delete_flow_on_seats_page() {
        let (mut app, mut rx) = make_app(false);
        app.navigate(Route::Seats);
        drain(&mut rx);
        let epoch = app.state().seat.epoch();
        app.on_settled(StoreIntent::Seat(SliceIntent::Fetched {
            epoch,
            items: vec![seat("s5"), seat("s6")],
        }));

        app.request_delete();
        assert_eq!(app.overlay(), Overlay::Confirm);
        app.answer_delete(true);
        assert_eq!(app.overlay(), Overlay::None);
        assert_eq!(drain(&mut rx), vec!["seat:delete"]);

        app.on_settled(StoreIntent::Seat(SliceIntent::Deleted {
            epoch,
            id: "s5".into(),
        }));
        let ids: Vec<_> = app.state().seat.items().iter().map(|s| s.id.as_str()).collect();
        assert_eq!(ids, vec!["s6"]);
        assert!(!app.state().seat.is_loading());
    }

    #[test]
    fn dashboard_seat_fetch_cannot_overwrite_room_filter() {
        let (mut app, mut rx) = make_app(false);
        app.navigate(Route::Seats);
        drain(&mut rx);
        let epoch = app.state().room.epoch();
        app.on_settled(StoreIntent::Room(SliceIntent::Fetched {
            epoch,
            items: vec![Room {
                id: "r7".into(),
                cinema_id: "c1".into(),
                hall_number: 7,
                total_seats: 10,
            }],
        }));
        app.cycle_seat_room(true);
        drain(&mut rx);

        app.navigate(Route::Dashboard);
        app.navigate(Route::Seats);
        let seat_fetches: Vec<(Epoch, SeatQuery)> = std::iter::from_fn(|| rx.try_recv().ok())
            .filter_map(|command| match command {
                Command::Seat {
                    epoch,
                    request: CrudRequest::FetchAll { query },
                } => Some((epoch, query)),
                _ => None,
            })
            .collect();
        assert_eq!(seat_fetches.len(), 2);
        let (all_epoch, all_query) = seat_fetches[0].clone();
        let (scoped_epoch, scoped_query) = seat_fetches[1].clone();
        assert_eq!(all_query, SeatQuery::all());
        assert_eq!(scoped_query, SeatQuery::room("r7"));
        assert_ne!(all_epoch, scoped_epoch);

        app.on_settled(StoreIntent::Seat(SliceIntent::Fetched {
            epoch: scoped_epoch,
            items: vec![seat_in("s1", "r7")],
        }));
        app.on_settled(StoreIntent::Seat(SliceIntent::Fetched {
            epoch: all_epoch,
            items: vec![seat_in("s1", "r7"), seat_in("s2", "r1")],
        }));
        let rooms: Vec<_> = app
            .state()
            .seat
            .items()
            .iter()
            .map(|s| s.room_id.as_str())
            .collect();
        assert_eq!(rooms, vec!["r7"]);
        assert!(!app.state().seat.is_loading());
    }

    #[test]
    fn editor_stays_open_on_rejection() {
        let (mut app, mut rx) = make_app(false);
        app.navigate(Route::Rooms);
        drain(&mut rx);

        app.open_create();
        assert_eq!(app.overlay(), Overlay::Editor);
        for ch in "c1".chars() {
            app.editor_key(EditorKey::Input(ch));
        }
        app.editor_key(EditorKey::FocusNext);
        app.editor_key(EditorKey::Input('2'));
        app.editor_key(EditorKey::FocusNext);
        for ch in "80".chars() {
            app.editor_key(EditorKey::Input(ch));
        }
        app.editor_key(EditorKey::Submit);
        assert_eq!(drain(&mut rx), vec!["room:add"]);

        let epoch = app.state().room.epoch();
        app.on_settled(StoreIntent::Room(SliceIntent::Rejected {
            epoch,
            op: CrudOp::Create,
            message: "Failed to add room".into(),
        }));
        assert_eq!(app.overlay(), Overlay::Editor);
        assert_eq!(app.rooms().editor().error(), Some("Failed to add room"));

        app.editor_key(EditorKey::Cancel);
        assert_eq!(app.overlay(), Overlay::None);
    }

    #[test]
    fn seat_filter_refetches_scoped() {
        let (mut app, mut rx) = make_app(false);
        app.navigate(Route::Seats);
        drain(&mut rx);
        let epoch = app.state().room.epoch();
        app.on_settled(StoreIntent::Room(SliceIntent::Fetched {
            epoch,
            items: vec![Room {
                id: "r7".into(),
                cinema_id: "c1".into(),
                hall_number: 7,
                total_seats: 10,
            }],
        }));

        app.cycle_seat_room(true);
        assert_eq!(app.seat_filter().room_id(), Some("r7"));
        match rx.try_recv().unwrap() {
            Command::Seat { request, .. } => match request {
                CrudRequest::FetchAll { query } => assert_eq!(query, SeatQuery::room("r7")),
                other => panic!("unexpected {:?}", other.op()),
            },
            other => panic!("unexpected {}", other.label()),
        }
    }

    #[test]
    fn dismiss_clears_banner_without_refetch() {
        let (mut app, mut rx) = make_app(false);
        app.navigate(Route::Cinemas);
        drain(&mut rx);
        let epoch = app.state().cinema.epoch();
        app.on_settled(StoreIntent::Cinema(SliceIntent::Rejected {
            epoch,
            op: CrudOp::Fetch,
            message: "Failed to fetch cinemas".into(),
        }));
        assert_eq!(app.banner_errors(), vec![("cinemas", "Failed to fetch cinemas")]);

        app.dismiss_errors();
        assert!(app.banner_errors().is_empty());
        assert!(drain(&mut rx).is_empty());
    }

    #[test]
    fn logout_returns_to_login() {
        let (mut app, mut rx) = make_app(true);
        app.on_settled(StoreIntent::Auth(AuthIntent::LoginSucceeded {
            session: Session {
                display_name: "Ada".into(),
                token: SecureString::new("t".into()),
            },
        }));
        drain(&mut rx);

        app.logout();
        assert_eq!(app.route(), Route::Login);
        assert!(app.is_gated());
        assert_eq!(drain(&mut rx), vec!["auth:logout"]);
    }

    #[test]
    fn logout_is_ignored_while_login_is_pending() {
        let (mut app, mut rx) = make_app(true);
        for ch in "a@b.c".chars() {
            app.login_intent(LoginIntent::Input(ch));
        }
        app.login_intent(LoginIntent::SwitchField);
        app.login_intent(LoginIntent::Input('p'));
        app.submit_login();
        drain(&mut rx);

        app.logout();
        assert!(drain(&mut rx).is_empty());
        assert!(app.state().auth.is_loading());
    }

    #[test]
    fn failed_reload_keeps_config_and_reports_it() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(&path, "[auth]\nrequired = false\n").unwrap();
        let store = ConfigStore::load(path.clone(), Overrides::default()).unwrap();
        let (tx, _rx) = mpsc::channel(64);
        let mut app = App::new(store, tx);
        app.start(Route::Dashboard);

        std::fs::write(&path, "[ui]\ntick_ms = 0\n").unwrap();
        app.reload_config();
        assert_eq!(app.route(), Route::Dashboard);
        assert!(!app.is_gated());
        let errors = app.banner_errors();
        assert_eq!(errors.len(), 1);
        assert_eq!(errors[0].0, "config");

        app.dismiss_errors();
        assert!(app.banner_errors().is_empty());
    }
}
