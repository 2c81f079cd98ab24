//! Root state container: the five slices as one addressable tree.

use crate::api::{Cinema, Resource, Room, Seat, Showtime};
use crate::dispatch_mvi;
use crate::store::auth::{AuthIntent, AuthReducer, AuthState};
use crate::store::command::{Command, CrudRequest};
use crate::store::slice::{Epoch, ResourceState, SliceIntent, SliceReducer};
use crate::ui::mvi::{Intent, Reducer, UiState};

/// Whole application state. Owned by the UI loop and passed by reference;
/// there is no global instance.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct AppState {
    pub auth: AuthState,
    pub cinema: ResourceState<Cinema>,
    pub room: ResourceState<Room>,
    pub seat: ResourceState<Seat>,
    pub showtime: ResourceState<Showtime>,
}

impl UiState for AppState {}

/// An intent addressed to exactly one slice.
#[derive(Debug, Clone, PartialEq)]
pub enum StoreIntent {
    Auth(AuthIntent),
    Cinema(SliceIntent<Cinema>),
    Room(SliceIntent<Room>),
    Seat(SliceIntent<Seat>),
    Showtime(SliceIntent<Showtime>),
}

impl Intent for StoreIntent {}

impl StoreIntent {
    /// Slice name, used in logs.
    pub fn slice(&self) -> &'static str {
        match self {
            StoreIntent::Auth(_) => "auth",
            StoreIntent::Cinema(_) => "cinema",
            StoreIntent::Room(_) => "room",
            StoreIntent::Seat(_) => "seat",
            StoreIntent::Showtime(_) => "showtime",
        }
    }
}

/// Where a resource lives in [`AppState`] and how its intents and commands
/// are addressed.
pub trait StoreSlice: Resource {
    fn slice(state: &AppState) -> &ResourceState<Self>;
    fn intent(intent: SliceIntent<Self>) -> StoreIntent;
    fn command(epoch: Epoch, request: CrudRequest<Self>) -> Command;
}

macro_rules! store_slice {
    ($entity:ident, $field:ident) => {
        impl StoreSlice for $entity {
            fn slice(state: &AppState) -> &ResourceState<Self> {
                &state.$field
            }

            fn intent(intent: SliceIntent<Self>) -> StoreIntent {
                StoreIntent::$entity(intent)
            }

            fn command(epoch: Epoch, request: CrudRequest<Self>) -> Command {
                Command::$entity { epoch, request }
            }
        }
    };
}

store_slice!(Cinema, cinema);
store_slice!(Room, room);
store_slice!(Seat, seat);
store_slice!(Showtime, showtime);

/// Routes each intent to its slice reducer. No slice sees another's intents.
pub struct RootReducer;

impl Reducer for RootReducer {
    type State = AppState;
    type Intent = StoreIntent;

    fn reduce(mut state: Self::State, intent: Self::Intent) -> Self::State {
        match intent {
            StoreIntent::Auth(intent) => {
                dispatch_mvi!(state.auth, AuthReducer, intent);
            }
            StoreIntent::Cinema(intent) => {
                dispatch_mvi!(state.cinema, SliceReducer<Cinema>, intent);
            }
            StoreIntent::Room(intent) => {
                dispatch_mvi!(state.room, SliceReducer<Room>, intent);
            }
            StoreIntent::Seat(intent) => {
                dispatch_mvi!(state.seat, SliceReducer<Seat>, intent);
            }
            StoreIntent::Showtime(intent) => {
                dispatch_mvi!(state.showtime, SliceReducer<Showtime>, intent);
            }
        }
        state
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::slice::CrudOp;

    #[test]
    fn intents_only_touch_their_slice() {
        let state = RootReducer::reduce(
            AppState::default(),
            StoreIntent::Room(SliceIntent::Pending { op: CrudOp::Fetch }),
        );
        assert!(state.room.is_loading());
        assert!(!state.cinema.is_loading());
        assert!(!state.seat.is_loading());
        assert!(!state.showtime.is_loading());
        assert!(!state.auth.is_loading());
    }

    #[test]
    fn slices_are_addressed_by_type() {
        let state = RootReducer::reduce(
            AppState::default(),
            Seat::intent(SliceIntent::Pending { op: CrudOp::Delete }),
        );
        assert!(Seat::slice(&state).is_loading());
        assert!(!Room::slice(&state).is_loading());

        let command = Showtime::command(
            3,
            CrudRequest::Delete { id: "st1".into() },
        );
        assert_eq!(command.label(), "showtime:delete");
    }
}
