use crate::api::ApiClient;
use crate::config::ConfigStore;
use crate::shutdown::{wait_for_os_signal, ShutdownCoordinator, ShutdownPhase};
use crate::ui::app::App;
use crate::ui::events::{AppEvent, EventHandler};
use crate::ui::input::handle_key;
use crate::ui::pages::Route;
use crate::ui::render::draw;
use crate::ui::terminal_guard::setup_terminal;
use crate::worker::{spawn_worker, SettlementSink};
use std::io;
use std::sync::mpsc::RecvTimeoutError;
use std::sync::Arc;
use tokio::runtime::Handle;

/// Run the terminal UI until the user quits or a signal arrives.
///
/// The UI loop runs on the calling thread; HTTP work runs on `runtime`.
pub fn run(
    config: &ConfigStore,
    client: ApiClient,
    runtime: &Handle,
    start: Route,
) -> io::Result<()> {
    let current = config.get();
    let coordinator = ShutdownCoordinator::new();
    let tick_rate = current.ui.tick_rate();
    let events = EventHandler::new();

    let settled_tx = events.sender();
    let sink: SettlementSink = Arc::new(move |intent| {
        let _ = settled_tx.send(AppEvent::Settled(intent));
    });
    let commands = spawn_worker(runtime, client, sink, coordinator.handle());

    let signal_tx = events.sender();
    let signal_handle = coordinator.handle();
    runtime.spawn(async move {
        tokio::select! {
            _ = wait_for_os_signal() => {
                signal_handle.signal();
                let _ = signal_tx.send(AppEvent::Shutdown);
            }
            _ = signal_handle.wait() => {}
        }
    });

    let (mut terminal, guard) = setup_terminal()?;
    events.spawn_input(tick_rate, coordinator.handle());

    let mut app = App::new(config.clone(), commands);
    app.start(start);

    let result = event_loop(&mut terminal, &mut app, &events, tick_rate);

    coordinator.signal();
    coordinator.advance(ShutdownPhase::StoppingInput);
    coordinator.advance(ShutdownPhase::StoppingWorker);
    drop(app);
    coordinator.advance(ShutdownPhase::RestoringTerminal);
    guard.restore();
    coordinator.advance(ShutdownPhase::Complete);
    tracing::info!("UI stopped");
    result
}

fn event_loop(
    terminal: &mut ratatui::Terminal<ratatui::backend::CrosstermBackend<io::Stdout>>,
    app: &mut App,
    events: &EventHandler,
    tick_rate: std::time::Duration,
) -> io::Result<()> {
    loop {
        terminal.draw(|frame| draw(frame, app))?;
        if app.should_quit() {
            return Ok(());
        }

        match events.next(tick_rate) {
            Ok(AppEvent::Key(key)) => handle_key(app, key),
            Ok(AppEvent::Tick) => app.on_tick(),
            // The next draw picks up the new size.
            Ok(AppEvent::Resize(cols, rows)) => tracing::debug!(cols, rows, "Resize"),
            Ok(AppEvent::Settled(intent)) => app.on_settled(intent),
            Ok(AppEvent::Shutdown) => return Ok(()),
            Err(RecvTimeoutError::Timeout) => {}
            Err(RecvTimeoutError::Disconnected) => return Ok(()),
        }
    }
}
