//! Blocking input source decoding terminal events.
//!
//! The editor loop consumes one [`InputEvent`] per call through
//! [`InputSource`]; the call blocks until something decodable arrives. Key
//! releases and keys outside quill's fixed set are swallowed here so the
//! translator only ever sees events it has a row for.

use anyhow::Result;
use core_events::{InputEvent, KeyCode, KeyEvent, KeyModifiers};
use crossterm::event::{
    Event as CtEvent, KeyCode as CtKeyCode, KeyEvent as CtKeyEvent, KeyEventKind,
    KeyModifiers as CtMods,
};
use tracing::trace;

/// Produces one decoded editing event per call, blocking until available.
pub trait InputSource {
    fn next_event(&mut self) -> Result<InputEvent>;
}

/// [`InputSource`] backed by `crossterm::event::read`.
#[derive(Debug, Default)]
pub struct CrosstermInput;

impl CrosstermInput {
    pub fn new() -> Self {
        Self
    }
}

impl InputSource for CrosstermInput {
    fn next_event(&mut self) -> Result<InputEvent> {
        loop {
            match crossterm::event::read()? {
                CtEvent::Key(key) if key.kind != KeyEventKind::Release => {
                    if let Some(mapped) = map_key(&key) {
                        return Ok(InputEvent::Key(mapped));
                    }
                    trace!(target: "input", code = ?key.code, "unmapped_key_dropped");
                }
                CtEvent::Resize(w, h) => return Ok(InputEvent::Resize(w, h)),
                _ => {}
            }
        }
    }
}

fn map_key(key: &CtKeyEvent) -> Option<KeyEvent> {
    let code = match key.code {
        CtKeyCode::Char(c) => KeyCode::Char(c),
        CtKeyCode::Enter => KeyCode::Enter,
        CtKeyCode::Backspace => KeyCode::Backspace,
        CtKeyCode::Tab => KeyCode::Tab,
        CtKeyCode::Esc => KeyCode::Esc,
        CtKeyCode::Up => KeyCode::Up,
        CtKeyCode::Down => KeyCode::Down,
        CtKeyCode::Left => KeyCode::Left,
        CtKeyCode::Right => KeyCode::Right,
        _ => return None,
    };
    Some(KeyEvent::new(code, map_mods(key.modifiers)))
}

fn map_mods(m: CtMods) -> KeyModifiers {
    let mut out = KeyModifiers::empty();
    if m.contains(CtMods::CONTROL) {
        out |= KeyModifiers::CTRL;
    }
    if m.contains(CtMods::ALT) {
        out |= KeyModifiers::ALT;
    }
    if m.contains(CtMods::SHIFT) {
        out |= KeyModifiers::SHIFT;
    }
    out
}
