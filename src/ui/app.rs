use crate::session::{
    ClockSignal, ClockToken, Phase, PhaseEntered, SessionController, SessionError,
    TickScheduler,
};
use crate::ui::celebration::{Confetti, ViewportSize};
use crate::ui::display::DisplayParams;

/// Frames the phase title stays highlighted after a phase is entered.
const ENTRY_HIGHLIGHT_FRAMES: u8 = 6;

/// Front-end state around the session controller.
///
/// The controller owns the session; `App` owns what only the view cares
/// about (viewport, confetti, entry highlight) and reacts to
/// [`PhaseEntered`] events rather than diffing snapshots.
pub struct App<S: TickScheduler> {
    should_quit: bool,
    controller: SessionController<S>,
    size: Option<(u16, u16)>,
    confetti: Option<Confetti>,
    entry_highlight: u8,
    last_entry: Option<PhaseEntered>,
    launches: u64,
}

impl<S: TickScheduler> App<S> {
    pub fn new(controller: SessionController<S>) -> Self {
        Self {
            should_quit: false,
            controller,
            size: None,
            confetti: None,
            entry_highlight: 0,
            last_entry: None,
            launches: 0,
        }
    }

    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    pub fn request_quit(&mut self) {
        self.should_quit = true;
    }

    pub fn session(&self) -> &SessionController<S> {
        &self.controller
    }

    pub fn display(&self) -> DisplayParams {
        DisplayParams::from_snapshot(self.controller.snapshot(), &self.controller.config())
    }

    pub fn confetti(&self) -> Option<&Confetti> {
        self.confetti.as_ref()
    }

    pub fn entry_highlighted(&self) -> bool {
        self.entry_highlight > 0
    }

    pub fn last_entry(&self) -> Option<PhaseEntered> {
        self.last_entry
    }

    pub fn start(&mut self) {
        let result = self.controller.start();
        self.settle(result, "start");
    }

    pub fn stop(&mut self) {
        let result = self.controller.stop();
        self.settle(result, "stop");
    }

    pub fn reset(&mut self) {
        self.controller.reset();
        self.sync_events();
    }

    pub fn step_cycle_selection(&mut self, direction: i32) {
        let result = self.controller.cycle_selection(direction);
        self.settle(result, "select cycles");
    }

    /// Select by 1-based position in the allowed list.
    pub fn select_cycle_slot(&mut self, slot: usize) {
        let Some(count) = slot
            .checked_sub(1)
            .and_then(|idx| self.controller.allowed_cycle_counts().get(idx))
            .copied()
        else {
            return;
        };
        let result = self.controller.configure(count.get());
        self.settle(result, "select cycles");
    }

    pub fn on_clock(&mut self, token: ClockToken) -> ClockSignal {
        let signal = self.controller.on_clock(token);
        self.sync_events();
        signal
    }

    pub fn on_frame(&mut self) {
        self.entry_highlight = self.entry_highlight.saturating_sub(1);
        if let Some(confetti) = &mut self.confetti {
            confetti.advance();
        }
    }

    pub fn on_resize(&mut self, cols: u16, rows: u16) {
        self.size = Some((cols, rows));
        if let Some(confetti) = &mut self.confetti {
            confetti.resize(cols, rows);
        }
    }

    fn settle(&mut self, result: Result<(), SessionError>, action: &str) {
        if let Err(err) = result {
            tracing::debug!(action, error = %err, "Ignored session action");
        }
        self.sync_events();
    }

    fn sync_events(&mut self) {
        for entry in self.controller.take_events() {
            self.on_phase_entered(entry);
        }
    }

    fn on_phase_entered(&mut self, entry: PhaseEntered) {
        self.entry_highlight = ENTRY_HIGHLIGHT_FRAMES;
        self.last_entry = Some(entry);
        match entry.phase {
            Phase::Completed => {
                self.launches += 1;
                self.confetti =
                    Confetti::launch(&*self, Confetti::DEFAULT_DENSITY, self.launches);
            }
            Phase::Ready => self.confetti = None,
            _ => {}
        }
    }
}

impl<S: TickScheduler> ViewportSize for App<S> {
    fn viewport_size(&self) -> Option<(u16, u16)> {
        self.size
    }
}
