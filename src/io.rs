use crossterm::event::Event as CrossTermEvent;
use crossterm::event::KeyCode;
use crossterm::event::KeyEvent;
use crossterm::event::KeyModifiers;
use crossterm::event::MouseButton;
use crossterm::event::MouseEvent;
use crossterm::event::MouseEventKind;

use crate::events::AppEvent;
use crate::events::CameraEvent;
use crate::events::EngineEvent;
use crate::events::Event;

/// How far a single pan keypress moves the camera, in cells.
const PAN_STEP: i32 = 4;

/// Converts a crossterm event into an agelife event
pub fn convert_event(event: CrossTermEvent) -> Option<Event> {
    match event {
        CrossTermEvent::Key(key_event) => convert_key(key_event),
        CrossTermEvent::Mouse(MouseEvent {
            kind: MouseEventKind::Down(MouseButton::Left),
            column,
            row,
            ..
        }) => Some(Event::AppEvent(AppEvent::ToggleCell { col: column, row })),
        _ => None,
    }
}

fn convert_key(key_event: KeyEvent) -> Option<Event> {
    let pan = |dx, dy| {
        Some(Event::AppEvent(AppEvent::CameraEvent(CameraEvent::Move {
            dx,
            dy,
        })))
    };

    match key_event {
        KeyEvent {
            code: KeyCode::Char('q'),
            ..
        }
        | KeyEvent {
            code: KeyCode::Char('c'),
            modifiers: KeyModifiers::CONTROL,
            ..
        } => Some(Event::AppEvent(AppEvent::Exit)),

        KeyEvent {
            code: KeyCode::Char(' '),
            ..
        } => Some(Event::EngineEvent(EngineEvent::TogglePause)),

        KeyEvent {
            code: KeyCode::Char('v'),
            ..
        } => Some(Event::EngineEvent(EngineEvent::ToggleAging)),

        KeyEvent {
            code: KeyCode::Char('r'),
            ..
        } => Some(Event::EngineEvent(EngineEvent::Reseed)),

        KeyEvent {
            code: KeyCode::Char('s'),
            ..
        } => Some(Event::EngineEvent(EngineEvent::Advance(1))),

        KeyEvent {
            code: KeyCode::Char('+') | KeyCode::Char('='),
            ..
        } => Some(Event::AppEvent(AppEvent::Faster)),

        KeyEvent {
            code: KeyCode::Char('-'),
            ..
        } => Some(Event::AppEvent(AppEvent::Slower)),

        // movements
        KeyEvent {
            code: KeyCode::Char('h') | KeyCode::Left,
            ..
        } => pan(-PAN_STEP, 0),
        KeyEvent {
            code: KeyCode::Char('j') | KeyCode::Down,
            ..
        } => pan(0, PAN_STEP),
        KeyEvent {
            code: KeyCode::Char('k') | KeyCode::Up,
            ..
        } => pan(0, -PAN_STEP),
        KeyEvent {
            code: KeyCode::Char('l') | KeyCode::Right,
            ..
        } => pan(PAN_STEP, 0),

        _ => None,
    }
}
