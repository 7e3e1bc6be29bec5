//! Key and mouse mapping from terminal events to game commands.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers, MouseButton, MouseEvent, MouseEventKind};

use crate::swipe::SwipeTracker;
use crate::types::{Digit, Direction, TileCommand};

/// Keys understood by the Mastermind guess entry
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EntryKey {
    Digit(Digit),
    Erase,
    Submit,
    Restart,
}

/// Map keyboard input to 2048 commands.
pub fn map_tile_key(key: KeyEvent) -> Option<TileCommand> {
    match key.code {
        // Movement
        KeyCode::Up | KeyCode::Char('w') | KeyCode::Char('W') => {
            Some(TileCommand::Move(Direction::Up))
        }
        KeyCode::Down | KeyCode::Char('s') | KeyCode::Char('S') => {
            Some(TileCommand::Move(Direction::Down))
        }
        KeyCode::Left | KeyCode::Char('a') | KeyCode::Char('A') => {
            Some(TileCommand::Move(Direction::Left))
        }
        KeyCode::Right | KeyCode::Char('d') | KeyCode::Char('D') => {
            Some(TileCommand::Move(Direction::Right))
        }

        KeyCode::Char(' ') | KeyCode::Char('p') | KeyCode::Char('P') => Some(TileCommand::Pause),
        KeyCode::Char('r') | KeyCode::Char('R') => Some(TileCommand::Restart),

        _ => None,
    }
}

/// Map keyboard input to Mastermind entry keys.
pub fn map_code_key(key: KeyEvent) -> Option<EntryKey> {
    match key.code {
        KeyCode::Char(c) if c.is_ascii_digit() => c.to_digit(10).map(|d| EntryKey::Digit(d as Digit)),
        KeyCode::Backspace | KeyCode::Delete => Some(EntryKey::Erase),
        KeyCode::Enter => Some(EntryKey::Submit),
        KeyCode::Char('r') | KeyCode::Char('R') => Some(EntryKey::Restart),
        _ => None,
    }
}

/// Feed a mouse event into `tracker`; a left-button drag resolves to a move.
///
/// A drag seen without its press starts the gesture where the drag was first
/// reported. Pressing another button abandons the gesture.
pub fn map_mouse_event(tracker: &mut SwipeTracker, event: MouseEvent) -> Option<TileCommand> {
    match event.kind {
        MouseEventKind::Down(MouseButton::Left) => {
            tracker.begin(event.column as f32, event.row as f32);
            None
        }
        MouseEventKind::Drag(MouseButton::Left) if !tracker.in_progress() => {
            tracker.begin(event.column as f32, event.row as f32);
            None
        }
        MouseEventKind::Down(_) => {
            tracker.cancel();
            None
        }
        MouseEventKind::Up(MouseButton::Left) => tracker
            .finish(event.column as f32, event.row as f32)
            .map(TileCommand::Move),
        _ => None,
    }
}

/// Check if key should quit the shell.
pub fn should_quit(key: KeyEvent) -> bool {
    matches!(key.code, KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Esc)
        || (key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::swipe::MIN_TERMINAL_SWIPE;
    use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

    fn mouse(kind: MouseEventKind, column: u16, row: u16) -> MouseEvent {
        MouseEvent {
            kind,
            column,
            row,
            modifiers: KeyModifiers::NONE,
        }
    }

    #[test]
    fn test_arrow_and_wasd_keys() {
        let cases = [
            (KeyCode::Up, Direction::Up),
            (KeyCode::Down, Direction::Down),
            (KeyCode::Left, Direction::Left),
            (KeyCode::Right, Direction::Right),
            (KeyCode::Char('w'), Direction::Up),
            (KeyCode::Char('s'), Direction::Down),
            (KeyCode::Char('a'), Direction::Left),
            (KeyCode::Char('D'), Direction::Right),
        ];
        for (code, dir) in cases {
            assert_eq!(
                map_tile_key(KeyEvent::from(code)),
                Some(TileCommand::Move(dir)),
                "{:?}",
                code
            );
        }
    }

    #[test]
    fn test_pause_and_restart_keys() {
        assert_eq!(
            map_tile_key(KeyEvent::from(KeyCode::Char(' '))),
            Some(TileCommand::Pause)
        );
        assert_eq!(
            map_tile_key(KeyEvent::from(KeyCode::Char('r'))),
            Some(TileCommand::Restart)
        );
        assert_eq!(map_tile_key(KeyEvent::from(KeyCode::Char('x'))), None);
    }

    #[test]
    fn test_code_keys() {
        assert_eq!(
            map_code_key(KeyEvent::from(KeyCode::Char('7'))),
            Some(EntryKey::Digit(7))
        );
        assert_eq!(
            map_code_key(KeyEvent::from(KeyCode::Backspace)),
            Some(EntryKey::Erase)
        );
        assert_eq!(
            map_code_key(KeyEvent::from(KeyCode::Enter)),
            Some(EntryKey::Submit)
        );
        assert_eq!(
            map_code_key(KeyEvent::from(KeyCode::Char('R'))),
            Some(EntryKey::Restart)
        );
        assert_eq!(map_code_key(KeyEvent::from(KeyCode::Char('x'))), None);
    }

    #[test]
    fn test_mouse_drag_becomes_move() {
        let mut tracker = SwipeTracker::new(MIN_TERMINAL_SWIPE);
        assert_eq!(
            map_mouse_event(&mut tracker, mouse(MouseEventKind::Down(MouseButton::Left), 20, 10)),
            None
        );
        assert_eq!(
            map_mouse_event(&mut tracker, mouse(MouseEventKind::Up(MouseButton::Left), 20, 2)),
            Some(TileCommand::Move(Direction::Up))
        );
    }

    #[test]
    fn test_mouse_click_is_not_a_move() {
        let mut tracker = SwipeTracker::new(MIN_TERMINAL_SWIPE);
        map_mouse_event(&mut tracker, mouse(MouseEventKind::Down(MouseButton::Left), 5, 5));
        assert_eq!(
            map_mouse_event(&mut tracker, mouse(MouseEventKind::Up(MouseButton::Left), 6, 5)),
            None
        );
    }

    #[test]
    fn test_drag_without_press_starts_gesture() {
        let mut tracker = SwipeTracker::new(MIN_TERMINAL_SWIPE);
        map_mouse_event(&mut tracker, mouse(MouseEventKind::Drag(MouseButton::Left), 30, 5));
        assert!(tracker.in_progress());
        // Later drag events do not move the start point
        map_mouse_event(&mut tracker, mouse(MouseEventKind::Drag(MouseButton::Left), 25, 5));
        assert_eq!(
            map_mouse_event(&mut tracker, mouse(MouseEventKind::Up(MouseButton::Left), 20, 5)),
            Some(TileCommand::Move(Direction::Left))
        );
    }

    #[test]
    fn test_other_button_cancels_gesture() {
        let mut tracker = SwipeTracker::new(MIN_TERMINAL_SWIPE);
        map_mouse_event(&mut tracker, mouse(MouseEventKind::Down(MouseButton::Left), 20, 10));
        map_mouse_event(&mut tracker, mouse(MouseEventKind::Down(MouseButton::Right), 20, 10));
        assert!(!tracker.in_progress());
        assert_eq!(
            map_mouse_event(&mut tracker, mouse(MouseEventKind::Up(MouseButton::Left), 20, 2)),
            None
        );
    }

    #[test]
    fn test_quit_keys() {
        assert!(should_quit(KeyEvent::from(KeyCode::Char('q'))));
        assert!(should_quit(KeyEvent::from(KeyCode::Esc)));
        assert!(should_quit(KeyEvent::new(
            KeyCode::Char('c'),
            KeyModifiers::CONTROL
        )));
        assert!(!should_quit(KeyEvent::from(KeyCode::Char('x'))));
    }
}
