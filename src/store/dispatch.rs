//! The UI-side store: owns [`AppState`], applies intents through the root
//! reducer and queues commands for the API worker.

use tokio::sync::mpsc::error::TrySendError;
use tokio::sync::mpsc::Sender;

use crate::api::{Cinema, LoginRequest, Room, Seat, Showtime};
use crate::dispatch_mvi;
use crate::store::auth::AuthIntent;
use crate::store::command::{Command, CrudRequest};
use crate::store::root::{AppState, RootReducer, StoreIntent, StoreSlice};
use crate::store::slice::SliceIntent;

pub struct Store {
    state: AppState,
    commands: Sender<Command>,
}

impl Store {
    pub fn new(commands: Sender<Command>) -> Self {
        Self {
            state: AppState::default(),
            commands,
        }
    }

    pub fn state(&self) -> &AppState {
        &self.state
    }

    pub fn apply(&mut self, intent: StoreIntent) {
        dispatch_mvi!(self.state, RootReducer, intent);
    }

    /// Mark the slice pending and queue the request, tagged with the slice's
    /// current epoch. If the queue refuses it, the slice is rejected at once
    /// and the message is returned.
    pub fn request<R: StoreSlice>(&mut self, request: CrudRequest<R>) -> Result<(), String> {
        let op = request.op();
        self.apply(R::intent(SliceIntent::Pending { op }));
        let epoch = R::slice(&self.state).epoch();

        if let Err(message) = self.send(R::command(epoch, request)) {
            self.apply(R::intent(SliceIntent::Rejected {
                epoch,
                op,
                message: message.clone(),
            }));
            return Err(message);
        }
        Ok(())
    }

    pub fn login(&mut self, request: LoginRequest) {
        self.apply(StoreIntent::Auth(AuthIntent::LoginPending));
        if let Err(message) = self.send(Command::Login { request }) {
            self.apply(StoreIntent::Auth(AuthIntent::LoginRejected { message }));
        }
    }

    /// Drop the session and detach every slice from requests still in flight.
    pub fn logout(&mut self) {
        self.apply(StoreIntent::Auth(AuthIntent::Logout));
        if let Err(message) = self.send(Command::Logout) {
            tracing::warn!(%message, "Could not queue logout");
        }
        self.invalidate::<Cinema>();
        self.invalidate::<Room>();
        self.invalidate::<Seat>();
        self.invalidate::<Showtime>();
    }

    pub fn invalidate<R: StoreSlice>(&mut self) {
        self.apply(R::intent(SliceIntent::Invalidate));
    }

    pub fn clear_error<R: StoreSlice>(&mut self) {
        if R::slice(&self.state).error().is_some() {
            self.apply(R::intent(SliceIntent::ClearError));
        }
    }

    /// True when a settlement was issued before its slice was invalidated.
    pub fn is_stale(&self, intent: &StoreIntent) -> bool {
        match intent {
            StoreIntent::Auth(_) => false,
            StoreIntent::Cinema(intent) => stale(&self.state, intent),
            StoreIntent::Room(intent) => stale(&self.state, intent),
            StoreIntent::Seat(intent) => stale(&self.state, intent),
            StoreIntent::Showtime(intent) => stale(&self.state, intent),
        }
    }

    fn send(&self, command: Command) -> Result<(), String> {
        let label = command.label();
        self.commands.try_send(command).map_err(|err| {
            let message = match err {
                TrySendError::Full(_) => "Too many requests in flight",
                TrySendError::Closed(_) => "API worker is not running",
            };
            tracing::warn!(command = %label, "{}", message);
            message.to_string()
        })
    }
}

fn stale<R: StoreSlice>(state: &AppState, intent: &SliceIntent<R>) -> bool {
    intent
        .settlement_epoch()
        .is_some_and(|epoch| epoch != R::slice(state).epoch())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::SecureString;
    use crate::store::slice::CrudOp;
    use tokio::sync::mpsc;

    #[test]
    fn request_marks_pending_and_queues_with_epoch() {
        let (tx, mut rx) = mpsc::channel(4);
        let mut store = Store::new(tx);
        store.invalidate::<Room>();

        store
            .request::<Room>(CrudRequest::FetchAll { query: () })
            .unwrap();
        assert!(store.state().room.is_loading());

        match rx.try_recv().unwrap() {
            Command::Room { epoch, request } => {
                assert_eq!(epoch, 1);
                assert_eq!(request.op(), CrudOp::Fetch);
            }
            other => panic!("unexpected command {:?}", other.label()),
        }
    }

    #[test]
    fn closed_queue_rejects_immediately() {
        let (tx, rx) = mpsc::channel(1);
        drop(rx);
        let mut store = Store::new(tx);

        let result = store.request::<Cinema>(CrudRequest::FetchAll { query: () });
        assert!(result.is_err());
        assert!(!store.state().cinema.is_loading());
        assert_eq!(store.state().cinema.error(), Some("API worker is not running"));

        store.login(LoginRequest {
            email: "a@b".into(),
            password: SecureString::new("pw".into()),
        });
        assert!(!store.state().auth.is_loading());
        assert!(store.state().auth.error().is_some());
    }

    #[test]
    fn settlements_from_before_invalidate_are_stale() {
        let (tx, _rx) = mpsc::channel(4);
        let mut store = Store::new(tx);
        let old = StoreIntent::Seat(SliceIntent::Deleted {
            epoch: 0,
            id: "s5".into(),
        });
        assert!(!store.is_stale(&old));
        store.invalidate::<Seat>();
        assert!(store.is_stale(&old));
        assert!(!store.is_stale(&StoreIntent::Seat(SliceIntent::ClearError)));
    }

    #[test]
    fn logout_invalidates_every_slice() {
        let (tx, mut rx) = mpsc::channel(4);
        let mut store = Store::new(tx);
        store.logout();
        assert_eq!(store.state().cinema.epoch(), 1);
        assert_eq!(store.state().showtime.epoch(), 1);
        assert!(matches!(rx.try_recv(), Ok(Command::Logout)));
    }
}
