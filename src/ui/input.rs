use crate::session::TickScheduler;
use crate::ui::app::App;
use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

pub fn handle_key<S: TickScheduler>(app: &mut App<S>, key: KeyEvent) {
    if key.kind != KeyEventKind::Press {
        return;
    }

    if is_ctrl_char(key, 'c') {
        app.request_quit();
        return;
    }

    match key.code {
        KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Esc => app.request_quit(),
        KeyCode::Char(' ') | KeyCode::Enter => app.start(),
        KeyCode::Char('s') | KeyCode::Char('S') => app.stop(),
        KeyCode::Char('r') | KeyCode::Char('R') => app.reset(),
        KeyCode::Left => app.step_cycle_selection(-1),
        KeyCode::Right => app.step_cycle_selection(1),
        KeyCode::Char(ch) if ch.is_ascii_digit() => {
            let slot = ch.to_digit(10).unwrap_or(0) as usize;
            app.select_cycle_slot(slot);
        }
        _ => {}
    }
}

fn is_ctrl_char(key: KeyEvent, target: char) -> bool {
    matches!(key.code, KeyCode::Char(ch) if ch.eq_ignore_ascii_case(&target))
        && key.modifiers.contains(KeyModifiers::CONTROL)
}
