use ratatui::buffer::Buffer;
use ratatui::layout::{Alignment, Constraint, Flex, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Clear, Paragraph, Widget, Wrap};

pub const INFO_TITLE: &str = "Pomodoro Technique";
pub const INFO_MESSAGE: &str = "The Pomodoro Technique is a time management method. \
Work for 25 minutes, then take a 5-minute break.";

/// Modal explanation of the technique. Static text only.
pub struct InfoDialog;

/// A `width` × `height` rectangle centered in `area`, shrunk to fit.
pub fn centered_rect(area: Rect, width: u16, height: u16) -> Rect {
    let [row] = Layout::vertical([Constraint::Length(height.min(area.height))])
        .flex(Flex::Center)
        .areas(area);
    let [cell] = Layout::horizontal([Constraint::Length(width.min(area.width))])
        .flex(Flex::Center)
        .areas(row);
    cell
}

impl Widget for InfoDialog {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let popup = centered_rect(area, 44, 8);
        Clear.render(popup, buf);

        let lines = vec![
            Line::from(INFO_MESSAGE),
            Line::default(),
            Line::from(vec![
                Span::styled(
                    "[Enter]",
                    Style::default()
                        .fg(Color::Green)
                        .add_modifier(Modifier::BOLD),
                ),
                Span::raw(" OK"),
            ])
            .alignment(Alignment::Center),
        ];

        Paragraph::new(lines)
            .wrap(Wrap { trim: true })
            .block(
                Block::default()
                    .title(format!(" {INFO_TITLE} "))
                    .title_alignment(Alignment::Center)
                    .borders(Borders::ALL),
            )
            .render(popup, buf);
    }
}
