//! Fixed key → action translation.
//!
//! Bindings are not configurable. Arrows move the cursor, with Emacs-style
//! control chords as aliases (`C-p`/`C-n`/`C-b`/`C-z` for up/down/left/right);
//! `C-q` quits, `C-u` undoes. Any unbound key translates to `None` and the
//! caller treats it as a no-op.

use crate::{Action, EditKind, MotionKind};
use core_events::{KeyCode, KeyEvent, KeyModifiers};

pub fn translate_key(key: &KeyEvent) -> Option<Action> {
    if key.mods.contains(KeyModifiers::CTRL) {
        return match key.code {
            KeyCode::Char('q') => Some(Action::Quit),
            KeyCode::Char('u') => Some(Action::Undo),
            KeyCode::Char('p') => Some(Action::Motion(MotionKind::Up)),
            KeyCode::Char('n') => Some(Action::Motion(MotionKind::Down)),
            KeyCode::Char('b') => Some(Action::Motion(MotionKind::Left)),
            KeyCode::Char('z') => Some(Action::Motion(MotionKind::Right)),
            _ => None,
        };
    }

    match key.code {
        KeyCode::Up => Some(Action::Motion(MotionKind::Up)),
        KeyCode::Down => Some(Action::Motion(MotionKind::Down)),
        KeyCode::Left => Some(Action::Motion(MotionKind::Left)),
        KeyCode::Right => Some(Action::Motion(MotionKind::Right)),
        KeyCode::Enter => Some(Action::Edit(EditKind::SplitLine)),
        KeyCode::Tab => Some(Action::Edit(EditKind::InsertTab)),
        KeyCode::Backspace => Some(Action::Edit(EditKind::Backspace)),
        KeyCode::Char(c) if !c.is_control() => Some(Action::Edit(EditKind::InsertChar(c))),
        KeyCode::Char(_) | KeyCode::Esc => None,
    }
}
