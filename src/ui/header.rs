use crate::session::CycleCount;
use crate::ui::theme::{FLAME_ORANGE, GLOBAL_BORDER, HEADER_SEPARATOR, HEADER_TEXT, MUTED_TEXT};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};

pub struct Header<'a> {
    selected: CycleCount,
    allowed: &'a [CycleCount],
    locked: bool,
}

impl<'a> Header<'a> {
    /// `locked` once a session has left `Ready` and the selection is frozen.
    pub fn new(selected: CycleCount, allowed: &'a [CycleCount], locked: bool) -> Self {
        Self {
            selected,
            allowed,
            locked,
        }
    }

    pub fn widget(&self) -> Paragraph<'static> {
        let text_style = Style::default().fg(HEADER_TEXT);
        let separator_style = Style::default().fg(HEADER_SEPARATOR);
        let title_style = Style::default().fg(FLAME_ORANGE).add_modifier(Modifier::BOLD);

        let mut spans = vec![
            Span::styled("  ", text_style),
            Span::styled("Inner Flame", title_style),
            Span::styled("  │  ", separator_style),
            Span::styled("Tummo Breathing Meditation", text_style),
            Span::styled("  │  ", separator_style),
            Span::styled("Cycles: ", text_style),
        ];
        for (idx, count) in self.allowed.iter().enumerate() {
            if idx > 0 {
                spans.push(Span::styled(" ", text_style));
            }
            let style = if *count == self.selected {
                Style::default().fg(FLAME_ORANGE).add_modifier(Modifier::REVERSED)
            } else if self.locked {
                Style::default().fg(MUTED_TEXT).add_modifier(Modifier::DIM)
            } else {
                text_style
            };
            spans.push(Span::styled(format!(" {} ", count), style));
        }

        Paragraph::new(Line::from(spans)).block(
            Block::default()
                .borders(Borders::TOP | Borders::BOTTOM)
                .border_style(Style::default().fg(GLOBAL_BORDER)),
        )
    }
}
