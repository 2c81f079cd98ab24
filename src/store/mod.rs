//! Client-side state: one slice per resource plus the session, composed
//! into [`AppState`], and the commands that feed them.

mod auth;
mod command;
mod dispatch;
mod root;
mod slice;

pub use auth::{AuthIntent, AuthReducer, AuthState};
pub use command::{execute, Command, CrudRequest, LOGIN_FALLBACK};
pub use dispatch::Store;
pub use root::{AppState, RootReducer, StoreIntent, StoreSlice};
pub use slice::{rejection_message, CrudOp, Epoch, ResourceState, SliceIntent, SliceReducer};
