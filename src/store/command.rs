//! Side effects: commands the UI queues for the API worker, and how each one
//! turns into the settlement intent fed back to the reducers.

use crate::api::{ApiClient, Cinema, LoginRequest, Resource, Room, Seat, Showtime};
use crate::store::auth::AuthIntent;
use crate::store::root::StoreIntent;
use crate::store::slice::{rejection_message, CrudOp, Epoch, SliceIntent};

/// Fallback shown when a login attempt fails without a server message.
pub const LOGIN_FALLBACK: &str = "Login failed";

/// One network round trip against a resource collection.
#[derive(Debug, Clone)]
pub enum CrudRequest<R: Resource> {
    FetchAll { query: R::Query },
    Create { draft: R::Draft },
    Update { id: String, draft: R::Draft },
    Delete { id: String },
}

impl<R: Resource> CrudRequest<R> {
    pub fn op(&self) -> CrudOp {
        match self {
            CrudRequest::FetchAll { .. } => CrudOp::Fetch,
            CrudRequest::Create { .. } => CrudOp::Create,
            CrudRequest::Update { .. } => CrudOp::Update,
            CrudRequest::Delete { .. } => CrudOp::Delete,
        }
    }
}

/// Work queued for the API worker. CRUD commands carry the epoch of their
/// slice at dispatch time.
#[derive(Debug, Clone)]
pub enum Command {
    Cinema { epoch: Epoch, request: CrudRequest<Cinema> },
    Room { epoch: Epoch, request: CrudRequest<Room> },
    Seat { epoch: Epoch, request: CrudRequest<Seat> },
    Showtime { epoch: Epoch, request: CrudRequest<Showtime> },
    Login { request: LoginRequest },
    Logout,
}

impl Command {
    /// Short label for logs, e.g. `room:update`.
    pub fn label(&self) -> String {
        match self {
            Command::Cinema { request, .. } => format!("cinema:{}", request.op().verb()),
            Command::Room { request, .. } => format!("room:{}", request.op().verb()),
            Command::Seat { request, .. } => format!("seat:{}", request.op().verb()),
            Command::Showtime { request, .. } => format!("showtime:{}", request.op().verb()),
            Command::Login { .. } => "auth:login".to_string(),
            Command::Logout => "auth:logout".to_string(),
        }
    }
}

/// Run one command to completion.
///
/// Returns the settlement to feed back into the store, or `None` for
/// commands that have nothing to report.
pub async fn execute(client: &ApiClient, command: Command) -> Option<StoreIntent> {
    match command {
        Command::Cinema { epoch, request } => {
            Some(StoreIntent::Cinema(run_crud(client, epoch, request).await))
        }
        Command::Room { epoch, request } => {
            Some(StoreIntent::Room(run_crud(client, epoch, request).await))
        }
        Command::Seat { epoch, request } => {
            Some(StoreIntent::Seat(run_crud(client, epoch, request).await))
        }
        Command::Showtime { epoch, request } => {
            Some(StoreIntent::Showtime(run_crud(client, epoch, request).await))
        }
        Command::Login { request } => {
            let intent = match client.login(&request).await {
                Ok(session) => {
                    client.set_token(Some(session.token.clone()));
                    tracing::info!(user = %session.display_name, "Logged in");
                    AuthIntent::LoginSucceeded { session }
                }
                Err(err) => AuthIntent::LoginRejected {
                    message: err
                        .server_message()
                        .unwrap_or(LOGIN_FALLBACK)
                        .to_string(),
                },
            };
            Some(StoreIntent::Auth(intent))
        }
        Command::Logout => {
            client.set_token(None);
            tracing::info!("Logged out");
            None
        }
    }
}

async fn run_crud<R: Resource>(
    client: &ApiClient,
    epoch: Epoch,
    request: CrudRequest<R>,
) -> SliceIntent<R> {
    let op = request.op();
    let result = match request {
        CrudRequest::FetchAll { query } => client
            .list::<R>(&query)
            .await
            .map(|items| SliceIntent::Fetched { epoch, items }),
        CrudRequest::Create { draft } => client
            .create::<R>(&draft)
            .await
            .map(|items| SliceIntent::Created { epoch, items }),
        CrudRequest::Update { id, draft } => client
            .update::<R>(&id, &draft)
            .await
            .map(|item| SliceIntent::Updated { epoch, item }),
        CrudRequest::Delete { id } => {
            let outcome = client.delete::<R>(&id).await;
            outcome.map(|()| SliceIntent::Deleted { epoch, id })
        }
    };

    result.unwrap_or_else(|err| SliceIntent::Rejected {
        epoch,
        op,
        message: rejection_message::<R>(op, &err),
    })
}
