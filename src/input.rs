use crate::event::{Input, Msg};
use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use std::time::Duration;
use tokio::sync::mpsc;

const POLL: Duration = Duration::from_millis(50);

/// Maps a key press to an input, given whether the name editor is open.
pub fn map_key(key: &KeyEvent, renaming: bool) -> Option<Input> {
    if key.kind == KeyEventKind::Release {
        return None;
    }
    if matches!(key.code, KeyCode::Char('c') | KeyCode::Char('C'))
        && key.modifiers.contains(KeyModifiers::CONTROL)
    {
        return Some(Input::Quit);
    }

    if renaming {
        return match key.code {
            KeyCode::Enter => Some(Input::Confirm),
            KeyCode::Esc => Some(Input::Cancel),
            KeyCode::Backspace => Some(Input::Backspace),
            KeyCode::Char(ch) if !ch.is_control() => Some(Input::Char(ch)),
            _ => None,
        };
    }

    match key.code {
        KeyCode::Char('q') | KeyCode::Char('Q') => Some(Input::Quit),
        KeyCode::Up | KeyCode::Char('k') => Some(Input::Up),
        KeyCode::Down | KeyCode::Char('j') => Some(Input::Down),
        KeyCode::Enter | KeyCode::Char(' ') => Some(Input::Confirm),
        KeyCode::Char('?') | KeyCode::Char('h') => Some(Input::ToggleHelp),
        KeyCode::Char('t') | KeyCode::Char('T') => Some(Input::ToggleTheme),
        KeyCode::Char('s') | KeyCode::Char('S') => Some(Input::CycleSpecies),
        KeyCode::Char('r') | KeyCode::Char('R') => Some(Input::Rename),
        KeyCode::Backspace => Some(Input::Backspace),
        KeyCode::Esc => Some(Input::Cancel),
        _ => None,
    }
}

fn translate(ev: Event) -> Option<Msg> {
    match ev {
        Event::Key(k) if k.kind != KeyEventKind::Release => Some(Msg::Key(k)),
        Event::Resize(w, h) => Some(Msg::Resize(w, h)),
        _ => None,
    }
}

/// Reads the terminal on a plain thread and forwards events into the loop.
/// The thread exits once the receiving side is gone.
pub fn spawn_reader(tx: mpsc::Sender<Msg>) {
    std::thread::spawn(move || {
        while !tx.is_closed() {
            match event::poll(POLL) {
                Ok(true) => {}
                Ok(false) => continue,
                Err(e) => {
                    tracing::warn!(error = %e, "terminal poll failed, input reader stopping");
                    break;
                }
            }
            let ev = match event::read() {
                Ok(ev) => ev,
                Err(e) => {
                    tracing::warn!(error = %e, "terminal read failed, input reader stopping");
                    break;
                }
            };
            if let Some(msg) = translate(ev) {
                if tx.blocking_send(msg).is_err() {
                    break;
                }
            }
        }
    });
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    #[test]
    fn q_quits_outside_rename_but_types_inside() {
        assert_eq!(map_key(&key(KeyCode::Char('q')), false), Some(Input::Quit));
        assert_eq!(
            map_key(&key(KeyCode::Char('q')), true),
            Some(Input::Char('q'))
        );
    }

    #[test]
    fn ctrl_c_quits_everywhere() {
        let k = KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL);
        assert_eq!(map_key(&k, false), Some(Input::Quit));
        assert_eq!(map_key(&k, true), Some(Input::Quit));
    }

    #[test]
    fn navigation_keys() {
        assert_eq!(map_key(&key(KeyCode::Up), false), Some(Input::Up));
        assert_eq!(map_key(&key(KeyCode::Char('j')), false), Some(Input::Down));
        assert_eq!(map_key(&key(KeyCode::Enter), false), Some(Input::Confirm));
        assert_eq!(map_key(&key(KeyCode::Char(' ')), true), Some(Input::Char(' ')));
        assert_eq!(map_key(&key(KeyCode::Up), true), None);
    }

    #[test]
    fn releases_and_unknown_keys_are_dropped() {
        let mut k = key(KeyCode::Enter);
        k.kind = KeyEventKind::Release;
        assert_eq!(map_key(&k, false), None);
        assert_eq!(map_key(&key(KeyCode::F(5)), false), None);
        assert_eq!(map_key(&key(KeyCode::Char('x')), false), None);
    }

    #[test]
    fn resize_events_become_messages() {
        assert_eq!(translate(Event::Resize(80, 24)), Some(Msg::Resize(80, 24)));
        assert_eq!(translate(Event::FocusGained), None);
    }
}
