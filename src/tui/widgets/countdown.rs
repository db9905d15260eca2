use ratatui::buffer::Buffer;
use ratatui::layout::{Alignment, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Paragraph, Widget};

use crate::timer::phase::PhaseKind;

/// `MM:SS` readout with the phase name and a play/pause glyph underneath.
///
/// Drawn in the phase color, centered, with no border so it can sit
/// inside the ring.
pub struct CountdownWidget<'a> {
    text: &'a str,
    phase: PhaseKind,
    running: bool,
    color: Color,
}

impl<'a> CountdownWidget<'a> {
    pub fn new(text: &'a str, phase: PhaseKind, color: Color) -> Self {
        Self {
            text,
            phase,
            running: false,
            color,
        }
    }

    pub fn running(mut self, running: bool) -> Self {
        self.running = running;
        self
    }
}

/// The control the play button would show: pause while running.
pub fn control_glyph(running: bool) -> &'static str {
    if running {
        "⏸"
    } else {
        "▶"
    }
}

impl Widget for CountdownWidget<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let style = Style::default().fg(self.color);

        let lines = vec![
            Line::from(Span::styled(
                self.text,
                style.add_modifier(Modifier::BOLD),
            )),
            Line::from(Span::styled(self.phase.label(), style)),
            Line::from(Span::styled(control_glyph(self.running), style)),
        ];

        Paragraph::new(lines)
            .alignment(Alignment::Center)
            .render(area, buf);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn row(buf: &Buffer, y: u16) -> String {
        (0..buf.area.width)
            .map(|x| buf[(x, y)].symbol())
            .collect::<String>()
            .trim()
            .to_string()
    }

    #[test]
    fn glyph_reflects_running() {
        assert_eq!(control_glyph(true), "⏸");
        assert_eq!(control_glyph(false), "▶");
    }

    #[test]
    fn renders_text_phase_and_glyph() {
        let area = Rect::new(0, 0, 12, 3);
        let mut buf = Buffer::empty(area);
        CountdownWidget::new("00:05", PhaseKind::Break, Color::Green)
            .running(true)
            .render(area, &mut buf);

        assert_eq!(row(&buf, 0), "00:05");
        assert_eq!(row(&buf, 1), "Break");
        assert_eq!(row(&buf, 2), "⏸");
        assert_eq!(buf[(4, 0)].fg, Color::Green);
    }
}
