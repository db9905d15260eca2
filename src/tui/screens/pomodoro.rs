use std::time::{Duration, Instant};

use ratatui::crossterm::event::{KeyCode, KeyEventKind};
use ratatui::layout::{Alignment, Constraint, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};
use tracing::debug;

use crate::config::Settings;
use crate::progress::RingSurface;
use crate::timer::{CycleStats, PhaseTimer};
use crate::tui::event::{AppEvent, EventHandler};
use crate::tui::widgets::countdown::CountdownWidget;
use crate::tui::widgets::info::InfoDialog;
use crate::tui::widgets::ring::RingWidget;
use crate::tui::Tui;

/// Redraw interval; fast enough for a smooth one-second ring animation.
const FRAME_RATE: Duration = Duration::from_millis(33);

/// What a key press asks the screen to do.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Action {
    Toggle,
    Reset,
    ShowInfo,
    CloseInfo,
    Quit,
    Ignore,
}

/// The info dialog is modal: while it is open only the dismiss keys work.
fn action_for(code: KeyCode, info_open: bool) -> Action {
    if info_open {
        return match code {
            KeyCode::Enter | KeyCode::Esc | KeyCode::Char('i') | KeyCode::Char('q') => {
                Action::CloseInfo
            }
            _ => Action::Ignore,
        };
    }

    match code {
        KeyCode::Char(' ') | KeyCode::Enter | KeyCode::Char('p') => Action::Toggle,
        KeyCode::Char('r') => Action::Reset,
        KeyCode::Char('i') => Action::ShowInfo,
        KeyCode::Char('q') | KeyCode::Esc => Action::Quit,
        _ => Action::Ignore,
    }
}

/// Outcome of the timer screen.
pub struct PomodoroOutcome {
    pub stats: CycleStats,
}

/// Run the timer screen until the user quits.
///
/// Timer ticks are pulled from the timer's own tick source once per loop,
/// before drawing, so the countdown never depends on input arriving.
pub fn run(terminal: &mut Tui, settings: &Settings) -> anyhow::Result<PomodoroOutcome> {
    let events = EventHandler::new(FRAME_RATE);
    let surface = RingSurface::new(settings.ring, settings.palette.work);
    let mut timer = PhaseTimer::new(settings.durations, settings.palette, surface);
    let mut info_open = false;

    loop {
        let now = Instant::now();
        timer.poll(now);

        terminal.draw(|frame| {
            let area = frame.area();
            render_pomodoro(frame, area, &timer, info_open, now);
        })?;

        match events.next()? {
            AppEvent::Key(key) if key.kind == KeyEventKind::Press => {
                let action = action_for(key.code, info_open);
                if action != Action::Ignore {
                    debug!(?action, "key");
                }
                match action {
                    Action::Toggle => timer.toggle_running(Instant::now()),
                    Action::Reset => timer.reset(),
                    Action::ShowInfo => info_open = true,
                    Action::CloseInfo => info_open = false,
                    Action::Quit => break,
                    Action::Ignore => {}
                }
            }
            AppEvent::Key(_) | AppEvent::Frame | AppEvent::Resize(_, _) => {}
        }
    }

    Ok(PomodoroOutcome {
        stats: timer.stats(),
    })
}

/// One `[key] label` entry per control. The toggle label is padded to the
/// width of "pause" so the entries after it stay put when it changes.
fn key_hints(running: bool, accent: Color) -> Line<'static> {
    let bold = Style::default().add_modifier(Modifier::BOLD);
    let toggle = if running { "pause" } else { "play" };
    let entries = [
        ("[Space]", bold.fg(accent), format!("{toggle:<5}")),
        ("[r]", bold, "reset".to_string()),
        ("[i]", bold, "info".to_string()),
        ("[q]", Style::default().fg(Color::Red), "quit".to_string()),
    ];

    let mut spans = vec![Span::raw("  ")];
    for (i, (key, style, label)) in entries.into_iter().enumerate() {
        if i > 0 {
            spans.push(Span::raw("  "));
        }
        spans.push(Span::styled(key, style));
        spans.push(Span::raw(format!(" {label}")));
    }
    Line::from(spans)
}

fn render_pomodoro(
    frame: &mut ratatui::Frame,
    area: Rect,
    timer: &PhaseTimer<RingSurface>,
    info_open: bool,
    now: Instant,
) {
    let outer = Block::default().borders(Borders::ALL);
    let inner = outer.inner(area);
    frame.render_widget(outer, area);

    let rows = Layout::vertical([
        Constraint::Length(2), // heading
        Constraint::Min(7),    // ring
        Constraint::Length(1), // key hint
    ])
    .split(inner);

    let heading = Paragraph::new(Line::from(Span::styled(
        "Pomodoro",
        Style::default().add_modifier(Modifier::BOLD),
    )))
    .alignment(Alignment::Center);
    frame.render_widget(heading, rows[0]);

    // Ring with the countdown centered inside it
    let surface = timer.surface();
    let ring = surface.ring();
    let fill: Color = ring.fill_color().into();
    frame.render_widget(
        RingWidget::new(ring.fraction_at(now), fill, ring.track_color().into()),
        rows[1],
    );

    let middle = Layout::vertical([
        Constraint::Fill(1),
        Constraint::Length(3),
        Constraint::Fill(1),
    ])
    .split(rows[1]);
    let state = timer.state();
    frame.render_widget(
        CountdownWidget::new(surface.countdown(), state.phase, fill).running(state.is_running),
        middle[1],
    );

    frame.render_widget(
        Paragraph::new(key_hints(state.is_running, fill)),
        rows[2],
    );

    if info_open {
        frame.render_widget(InfoDialog, area);
    }
}
