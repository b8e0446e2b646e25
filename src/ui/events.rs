use crossterm::event::{self, Event, KeyEvent, KeyEventKind};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::thread;
use std::time::{Duration, Instant};
use tokio::sync::mpsc::{self, UnboundedReceiver, UnboundedSender};

pub enum AppEvent {
    Key(KeyEvent),
    Resize(u16, u16),
    /// Redraw cadence for animations. Unrelated to the session clock.
    Frame,
}

/// Reads terminal input on a dedicated thread and forwards it to the event loop.
pub struct EventHandler {
    rx: UnboundedReceiver<AppEvent>,
    stop: Arc<AtomicBool>,
}

impl EventHandler {
    pub fn new(frame_rate: Duration) -> Self {
        let (tx, rx) = mpsc::unbounded_channel();
        let stop = Arc::new(AtomicBool::new(false));
        let thread_stop = Arc::clone(&stop);

        thread::spawn(move || input_loop(tx, frame_rate, thread_stop));

        Self { rx, stop }
    }

    /// `None` once the input thread has exited.
    pub async fn next(&mut self) -> Option<AppEvent> {
        self.rx.recv().await
    }
}

impl Drop for EventHandler {
    fn drop(&mut self) {
        self.stop.store(true, Ordering::Relaxed);
    }
}

fn input_loop(tx: UnboundedSender<AppEvent>, frame_rate: Duration, stop: Arc<AtomicBool>) {
    let mut last_frame = Instant::now();
    while !stop.load(Ordering::Relaxed) {
        // Short poll so the stop flag is seen promptly
        let timeout = frame_rate
            .saturating_sub(last_frame.elapsed())
            .min(Duration::from_millis(50));

        match event::poll(timeout) {
            Ok(true) => {
                let forwarded = match event::read() {
                    Ok(Event::Key(key)) if key.kind == KeyEventKind::Press => {
                        tx.send(AppEvent::Key(key))
                    }
                    Ok(Event::Resize(cols, rows)) => tx.send(AppEvent::Resize(cols, rows)),
                    Ok(_) => Ok(()),
                    Err(err) => {
                        tracing::error!(error = %err, "Terminal read failed");
                        break;
                    }
                };
                if forwarded.is_err() {
                    break;
                }
            }
            Ok(false) => {}
            Err(err) => {
                tracing::error!(error = %err, "Terminal poll failed");
                break;
            }
        }

        if last_frame.elapsed() >= frame_rate {
            if tx.send(AppEvent::Frame).is_err() {
                break;
            }
            last_frame = Instant::now();
        }
    }
}
