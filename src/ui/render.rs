use crate::session::TickScheduler;
use crate::ui::app::App;
use crate::ui::circle::BreathingCircle;
use crate::ui::footer::Footer;
use crate::ui::header::Header;
use crate::ui::layout::{body_regions, layout_regions};
use crate::ui::theme::{FLAME_GOLD, FLAME_ORANGE, GLOBAL_BORDER, HEADER_TEXT, MUTED_TEXT};
use ratatui::layout::Alignment;
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Clear, Gauge, Paragraph, Wrap};
use ratatui::Frame;

pub fn draw<S: TickScheduler>(frame: &mut Frame<'_>, app: &App<S>) {
    let area = frame.area();
    let (header, body, footer) = layout_regions(area);
    let session = app.session();
    let snapshot = session.snapshot();
    let params = app.display();

    let header_widget = Header::new(
        session.config().cycle_count,
        session.allowed_cycle_counts(),
        !snapshot.is_ready(),
    );
    frame.render_widget(header_widget.widget(), header);
    frame.render_widget(Clear, body);

    let [instructions, circle, label, progress] = body_regions(body);

    let mut lines = vec![Line::from(Span::styled(
        params.description.clone(),
        Style::default().fg(MUTED_TEXT),
    ))];
    if let Some(notification) = &params.notification {
        lines.push(Line::from(Span::styled(
            notification.clone(),
            Style::default().fg(FLAME_ORANGE).add_modifier(Modifier::BOLD),
        )));
    }
    if let Some(countdown) = &params.countdown {
        lines.push(Line::from(Span::styled(
            countdown.clone(),
            Style::default().fg(FLAME_GOLD).add_modifier(Modifier::BOLD),
        )));
    }
    frame.render_widget(
        Paragraph::new(lines)
            .alignment(Alignment::Center)
            .wrap(Wrap { trim: true }),
        instructions,
    );

    frame.render_widget(BreathingCircle::new(params.scale, params.gradient), circle);

    let mut title_style = Style::default().fg(HEADER_TEXT).add_modifier(Modifier::BOLD);
    if app.entry_highlighted() {
        title_style = title_style.fg(FLAME_GOLD);
    }
    let mut label_lines = vec![Line::from(Span::styled(params.title, title_style))];
    if let Some(cycle_label) = &params.cycle_label {
        label_lines.push(Line::from(Span::styled(
            cycle_label.clone(),
            Style::default().fg(MUTED_TEXT),
        )));
    }
    frame.render_widget(
        Paragraph::new(label_lines).alignment(Alignment::Center),
        label,
    );

    if let Some(ratio) = params.progress_ratio {
        let gauge = Gauge::default()
            .ratio(ratio)
            .gauge_style(Style::default().fg(FLAME_ORANGE).bg(GLOBAL_BORDER))
            .label("");
        frame.render_widget(gauge, progress);
    }

    frame.render_widget(Footer::new(snapshot.phase).widget(footer), footer);

    if params.show_completion_effect {
        if let Some(confetti) = app.confetti() {
            frame.render_widget(confetti, area);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::session::{CycleCount, ManualTicker, PhaseTimings, SessionController};
    use ratatui::backend::TestBackend;
    use ratatui::Terminal;

    fn make_app() -> App<ManualTicker> {
        App::new(SessionController::new(
            CycleCount::BEGINNER,
            vec![
                CycleCount::BEGINNER,
                CycleCount::INTERMEDIATE,
                CycleCount::ADVANCED,
            ],
            PhaseTimings::default(),
            ManualTicker::new(),
        ))
    }

    fn screen_text(terminal: &Terminal<TestBackend>) -> String {
        terminal
            .backend()
            .buffer()
            .content()
            .iter()
            .map(|cell| cell.symbol())
            .collect()
    }

    #[test]
    fn ready_screen_shows_prompt() {
        let mut terminal = Terminal::new(TestBackend::new(100, 30)).expect("test backend");
        let app = make_app();
        terminal.draw(|frame| draw(frame, &app)).expect("draw");
        let text = screen_text(&terminal);
        assert!(text.contains("Inner Flame"));
        assert!(text.contains("Prepare"));
        assert!(text.contains("Space: Begin"));
    }

    #[test]
    fn running_screen_shows_cycle() {
        let mut terminal = Terminal::new(TestBackend::new(100, 30)).expect("test backend");
        let mut app = make_app();
        app.start();
        terminal.draw(|frame| draw(frame, &app)).expect("draw");
        let text = screen_text(&terminal);
        assert!(text.contains("Breathe In"));
        assert!(text.contains("Cycle 1 of 5"));
        assert!(text.contains("Begin practice"));
    }

    #[test]
    fn completed_screen_hides_begin_hint() {
        let mut terminal = Terminal::new(TestBackend::new(100, 30)).expect("test backend");
        let mut app = make_app();
        app.start();
        while let Some(token) = app.session().scheduler().active() {
            app.on_clock(token);
        }
        terminal.draw(|frame| draw(frame, &app)).expect("draw");
        let text = screen_text(&terminal);
        assert!(text.contains("Complete"));
        assert!(text.contains("R: Reset"));
        assert!(!text.contains("Space: Begin"));
    }

    #[test]
    fn tiny_terminal_does_not_panic() {
        let mut terminal = Terminal::new(TestBackend::new(4, 2)).expect("test backend");
        let mut app = make_app();
        app.start();
        terminal.draw(|frame| draw(frame, &app)).expect("draw");
    }
}
