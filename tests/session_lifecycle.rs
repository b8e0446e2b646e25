mod common;

use common::ManualTicker;
use innerflame::session::{
    ClockSignal, CycleCount, Phase, PhaseEntered, PhaseTimings, SequencerState,
    SessionController, SessionError,
};

fn controller(cycles: CycleCount) -> SessionController<ManualTicker> {
    SessionController::new(
        cycles,
        vec![
            CycleCount::BEGINNER,
            CycleCount::INTERMEDIATE,
            CycleCount::ADVANCED,
        ],
        PhaseTimings::default(),
        ManualTicker::new(),
    )
}

/// Tick until the current phase expires. Returns the ticks it took.
fn expire_phase(ctl: &mut SessionController<ManualTicker>) -> usize {
    let token = ctl.scheduler().active().expect("clock armed");
    let mut ticks = 0;
    loop {
        ticks += 1;
        match ctl.on_clock(token) {
            ClockSignal::Tick { .. } => {}
            ClockSignal::Expired => return ticks,
            ClockSignal::Stale => panic!("live token reported stale"),
        }
    }
}

fn assert_ready(state: &SequencerState) {
    assert_eq!(state.phase, Phase::Ready);
    assert_eq!(state.cycle_index, 0);
    assert_eq!(state.remaining_ms, 0);
    assert!(!state.is_running);
}

#[test]
fn five_cycle_scenario() {
    let mut ctl = controller(CycleCount::BEGINNER);
    ctl.start().expect("start");
    while ctl.snapshot().is_running {
        expire_phase(&mut ctl);
    }

    let entries: Vec<(Phase, u32, u64)> = ctl
        .take_events()
        .into_iter()
        .map(|PhaseEntered { phase, cycle_index, duration_ms }| (phase, cycle_index, duration_ms))
        .collect();

    let mut expected = Vec::new();
    for cycle in 1..=5 {
        expected.push((Phase::Inhale, cycle, 2000));
        expected.push((Phase::Exhale, cycle, 2000));
    }
    expected.extend([
        (Phase::HoldOut, 5, 5000),
        (Phase::TransitionalInhale, 5, 3000),
        (Phase::HoldIn, 5, 5000),
        (Phase::FinalExhale, 5, 3000),
        (Phase::Completed, 5, 0),
    ]);
    assert_eq!(entries, expected);

    let done = ctl.snapshot();
    assert!(!done.is_running);
    assert_eq!(done.notification, "Practice complete");
    assert!(ctl.scheduler().active().is_none());
}

#[test]
fn tick_counts_match_durations() {
    let mut ctl = controller(CycleCount::ADVANCED);
    ctl.start().expect("start");
    let mut per_phase = Vec::new();
    while ctl.snapshot().is_running {
        let phase = ctl.snapshot().phase;
        per_phase.push((phase, expire_phase(&mut ctl)));
    }
    for (phase, ticks) in per_phase {
        let expected = match phase {
            Phase::Inhale | Phase::Exhale => 20,
            Phase::HoldOut | Phase::HoldIn => 150,
            Phase::TransitionalInhale | Phase::FinalExhale => 30,
            other => panic!("unexpected running phase {other}"),
        };
        assert_eq!(ticks, expected, "{phase}");
    }
}

#[test]
fn completed_ignores_further_ticks_and_start() {
    let mut ctl = controller(CycleCount::BEGINNER);
    ctl.start().expect("start");
    let mut last_token = None;
    while ctl.snapshot().is_running {
        last_token = ctl.scheduler().active();
        expire_phase(&mut ctl);
    }
    let done = ctl.snapshot().clone();
    assert_eq!(
        ctl.on_clock(last_token.expect("at least one phase")),
        ClockSignal::Stale
    );
    assert_eq!(
        ctl.start(),
        Err(SessionError::NotReady {
            phase: Phase::Completed
        })
    );
    assert_eq!(ctl.snapshot(), &done);
}

#[test]
fn reset_from_every_phase() {
    let mut ctl = controller(CycleCount::BEGINNER);
    ctl.start().expect("start");
    let mut seen = Vec::new();
    loop {
        let phase = ctl.snapshot().phase;
        if !seen.contains(&phase) {
            seen.push(phase);
            let mut fresh = controller(CycleCount::BEGINNER);
            fresh.start().expect("start");
            while fresh.snapshot().phase != phase {
                expire_phase(&mut fresh);
            }
            // Part way into the phase as well
            if let Some(token) = fresh.scheduler().active() {
                fresh.on_clock(token);
            }
            fresh.reset();
            assert_ready(fresh.snapshot());
            assert!(fresh.scheduler().active().is_none());
            assert!(fresh.snapshot().notification.is_empty());
        }
        if !ctl.snapshot().is_running {
            break;
        }
        expire_phase(&mut ctl);
    }
    assert_eq!(seen.len(), 7);

    ctl.reset();
    assert_ready(ctl.snapshot());
    ctl.reset();
    assert_ready(ctl.snapshot());
}

#[test]
fn stop_then_restart_ignores_old_ticks() {
    let mut ctl = controller(CycleCount::BEGINNER);
    ctl.start().expect("start");
    let old = ctl.scheduler().active().expect("armed");
    ctl.on_clock(old);
    ctl.stop().expect("stop");
    ctl.start().expect("restart");
    let new = ctl.scheduler().active().expect("armed");
    assert_ne!(old, new);

    assert_eq!(ctl.on_clock(old), ClockSignal::Stale);
    assert_eq!(ctl.snapshot().remaining_ms, 2000);
    assert_eq!(
        ctl.on_clock(new),
        ClockSignal::Tick { remaining_ms: 1900 }
    );
}

#[test]
fn configure_frozen_while_running() {
    let mut ctl = controller(CycleCount::BEGINNER);
    ctl.start().expect("start");
    assert!(ctl.configure(10).is_err());
    assert_eq!(ctl.config().cycle_count, CycleCount::BEGINNER);
    ctl.reset();
    ctl.configure(10).expect("ready again");
    assert_eq!(ctl.config().cycle_count, CycleCount::INTERMEDIATE);
}

#[test]
fn hold_durations_scale_with_cycles() {
    for cycles in [CycleCount::BEGINNER, CycleCount::INTERMEDIATE, CycleCount::ADVANCED] {
        let mut ctl = controller(cycles);
        ctl.start().expect("start");
        while ctl.snapshot().is_running {
            expire_phase(&mut ctl);
        }
        let holds: Vec<u64> = ctl
            .take_events()
            .into_iter()
            .filter(|entry| entry.phase.is_hold())
            .map(|entry| entry.duration_ms)
            .collect();
        let expected = u64::from(cycles.get()) * 1000;
        assert_eq!(holds, vec![expected, expected]);
    }
}

#[test]
fn oversize_hold_saturates_instead_of_panicking() {
    let timings = PhaseTimings {
        hold_ms_per_cycle: u64::MAX / 2,
        ..PhaseTimings::default()
    };
    let mut ctl = SessionController::new(
        CycleCount::BEGINNER,
        vec![CycleCount::BEGINNER],
        timings,
        ManualTicker::new(),
    );
    ctl.start().expect("start");
    while ctl.snapshot().phase != Phase::HoldOut {
        expire_phase(&mut ctl);
    }
    assert_eq!(ctl.snapshot().remaining_ms, u64::MAX);
    assert!(ctl.snapshot().is_running);
}
