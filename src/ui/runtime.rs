use crate::config::Config;
use crate::session::{PhaseTimings, SessionController, TokioTicker};
use crate::ui::app::App;
use crate::ui::events::{AppEvent, EventHandler};
use crate::ui::input::handle_key;
use crate::ui::render::draw;
use crate::ui::terminal_guard::setup_terminal;
use std::io;
use std::time::Duration;
use tokio::sync::mpsc;

const FRAME_RATE: Duration = Duration::from_millis(50);

/// Run the interactive session until the user quits.
pub async fn run(config: &Config) -> io::Result<()> {
    let (mut terminal, guard) = setup_terminal()?;
    let (tick_tx, mut tick_rx) = mpsc::unbounded_channel();
    let controller = SessionController::new(
        config.session.default_cycles,
        config.session.allowed_cycles.clone(),
        PhaseTimings::from(&config.timing),
        TokioTicker::new(tick_tx),
    );
    let mut app = App::new(controller);
    let mut events = EventHandler::new(FRAME_RATE);
    if let Ok((cols, rows)) = crossterm::terminal::size() {
        app.on_resize(cols, rows);
    }
    tracing::info!("Interactive session opened");

    loop {
        terminal.draw(|frame| draw(frame, &app))?;
        if app.should_quit() {
            break;
        }

        tokio::select! {
            Some(token) = tick_rx.recv() => {
                app.on_clock(token);
            }
            event = events.next() => match event {
                Some(AppEvent::Key(key)) => handle_key(&mut app, key),
                Some(AppEvent::Frame) => app.on_frame(),
                Some(AppEvent::Resize(cols, rows)) => app.on_resize(cols, rows),
                None => break,
            },
            _ = tokio::signal::ctrl_c() => {
                tracing::info!("Interrupted");
                break;
            }
        }
    }

    // Cancels the clock before the terminal is restored
    drop(app);
    drop(events);
    drop(guard);
    tracing::info!("Interactive session closed");
    Ok(())
}
