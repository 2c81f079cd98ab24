//! API worker: runs queued commands on the tokio runtime and hands every
//! settlement back to the UI loop.

use std::sync::Arc;

use tokio::runtime::Handle;
use tokio::sync::mpsc;

use crate::api::ApiClient;
use crate::shutdown::ShutdownHandle;
use crate::store::{execute, Command, StoreIntent};

/// Bound on commands waiting for the worker.
pub const COMMAND_QUEUE_CAPACITY: usize = 64;

pub type CommandSender = mpsc::Sender<Command>;

/// Where settlements go; the runtime forwards them into the UI event queue.
pub type SettlementSink = Arc<dyn Fn(StoreIntent) + Send + Sync>;

/// Spawn the worker loop on `runtime` and return the queue feeding it.
///
/// Commands run concurrently, one task each, with no de-duplication. The loop
/// stops when the shutdown handle fires or every sender is dropped; requests
/// already in flight finish on their own and their settlements are still
/// delivered to the sink.
pub fn spawn_worker(
    runtime: &Handle,
    client: ApiClient,
    sink: SettlementSink,
    shutdown: ShutdownHandle,
) -> CommandSender {
    let (tx, mut rx) = mpsc::channel::<Command>(COMMAND_QUEUE_CAPACITY);
    let spawner = runtime.clone();

    runtime.spawn(async move {
        tracing::debug!(base_url = %client.base_url(), "API worker started");
        loop {
            tokio::select! {
                _ = shutdown.wait() => break,
                command = rx.recv() => {
                    let Some(command) = command else {
                        break;
                    };
                    let client = client.clone();
                    let sink = Arc::clone(&sink);
                    spawner.spawn(async move {
                        let label = command.label();
                        tracing::debug!(command = %label, "Running command");
                        if let Some(intent) = execute(&client, command).await {
                            sink(intent);
                        }
                    });
                }
            }
        }
        tracing::debug!("API worker stopped");
    });

    tx
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::ApiConfig;
    use crate::shutdown::ShutdownCoordinator;
    use std::time::Duration;

    #[tokio::test]
    async fn logout_clears_token_without_settlement() {
        let client = ApiClient::new(&ApiConfig::default()).unwrap();
        client.set_token(Some(crate::config::SecureString::new("t".into())));

        let (settled_tx, mut settled_rx) = mpsc::unbounded_channel();
        let sink: SettlementSink = Arc::new(move |intent| {
            let _ = settled_tx.send(intent);
        });
        let shutdown = ShutdownCoordinator::new();
        let commands = spawn_worker(&Handle::current(), client.clone(), sink, shutdown.handle());

        commands.send(Command::Logout).await.unwrap();
        tokio::time::sleep(Duration::from_millis(50)).await;

        assert!(!client.has_token());
        assert!(settled_rx.try_recv().is_err());
        shutdown.signal();
    }

    #[tokio::test]
    async fn worker_stops_on_shutdown() {
        let client = ApiClient::new(&ApiConfig::default()).unwrap();
        let sink: SettlementSink = Arc::new(|_| {});
        let shutdown = ShutdownCoordinator::new();
        let commands = spawn_worker(&Handle::current(), client, sink, shutdown.handle());

        shutdown.signal();
        tokio::time::timeout(Duration::from_secs(1), commands.closed())
            .await
            .expect("receiver dropped after shutdown");
    }
}
