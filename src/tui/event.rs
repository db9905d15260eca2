use std::sync::mpsc;
use std::time::Duration;

use ratatui::crossterm::event::{self, Event, KeyEvent};

/// Events consumed by the TUI main loop.
pub enum AppEvent {
    Key(KeyEvent),
    #[allow(dead_code)]
    Resize(u16, u16),
    /// No input arrived within the frame interval; redraw.
    Frame,
}

/// Background input poller.
///
/// The thread only reads terminal input and forwards it; all timer state
/// stays with the receiver on the main thread. When no input arrives within
/// `frame_rate` a [`AppEvent::Frame`] is sent so the ring keeps animating.
pub struct EventHandler {
    rx: mpsc::Receiver<AppEvent>,
    _handle: std::thread::JoinHandle<()>,
}

impl EventHandler {
    pub fn new(frame_rate: Duration) -> Self {
        let (tx, rx) = mpsc::channel();

        let handle = std::thread::spawn(move || loop {
            let next = if event::poll(frame_rate).unwrap_or(false) {
                match event::read() {
                    Ok(Event::Key(key)) => Some(AppEvent::Key(key)),
                    Ok(Event::Resize(w, h)) => Some(AppEvent::Resize(w, h)),
                    _ => None,
                }
            } else {
                Some(AppEvent::Frame)
            };

            // Receiver gone means the screen has exited.
            if let Some(ev) = next {
                if tx.send(ev).is_err() {
                    return;
                }
            }
        });

        Self {
            rx,
            _handle: handle,
        }
    }

    /// Block until the next event.
    pub fn next(&self) -> Result<AppEvent, mpsc::RecvError> {
        self.rx.recv()
    }
}
