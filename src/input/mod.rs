use macroquad::prelude::*;

use crate::application::{Command, Simulation};
use crate::ui::Button;

/// Keys polled every frame
const BOUND_KEYS: [KeyCode; 10] = [
    KeyCode::Space,
    KeyCode::Enter,
    KeyCode::Backspace,
    KeyCode::N,
    KeyCode::R,
    KeyCode::C,
    KeyCode::G,
    KeyCode::P,
    KeyCode::Up,
    KeyCode::Down,
];

/// Map a key press to a command. Pattern keys need a cell under the cursor.
pub fn command_for_key(key: KeyCode, cursor_cell: Option<(usize, usize)>) -> Option<Command> {
    let place = |name: &str| {
        cursor_cell.map(|(row, col)| Command::PlacePattern {
            name: name.to_owned(),
            row: row as isize,
            col: col as isize,
        })
    };
    match key {
        KeyCode::Space => Some(Command::ToggleRunning),
        KeyCode::Enter => Some(Command::Start),
        KeyCode::Backspace => Some(Command::Stop),
        KeyCode::N => Some(Command::Step),
        KeyCode::R => Some(Command::Randomize),
        KeyCode::C => Some(Command::Reset),
        KeyCode::G => place("glider"),
        KeyCode::P => place("pulsar"),
        KeyCode::Up => Some(Command::AdjustRate { delta: 1.0 }),
        KeyCode::Down => Some(Command::AdjustRate { delta: -1.0 }),
        _ => None,
    }
}

/// Tracks a drag gesture between frames.
#[derive(Debug, Default)]
pub struct DragState {
    last: Option<(f32, f32)>,
}

impl DragState {
    /// Feed the current button state and pointer position. While held,
    /// returns a pan that moves the view against the pointer motion.
    pub fn update(&mut self, held: bool, pos: (f32, f32)) -> Option<Command> {
        if !held {
            self.last = None;
            return None;
        }
        let pan = self.last.and_then(|(x, y)| {
            let (dx, dy) = (pos.0 - x, pos.1 - y);
            (dx != 0.0 || dy != 0.0).then_some(Command::Pan { dx: -dx, dy: -dy })
        });
        self.last = Some(pos);
        pan
    }
}

/// Position of the first touch still on the screen
pub fn active_touch(touches: &[Touch]) -> Option<(f32, f32)> {
    touches
        .iter()
        .find(|touch| !matches!(touch.phase, TouchPhase::Ended | TouchPhase::Cancelled))
        .map(|touch| (touch.position.x, touch.position.y))
}

/// Cell under a window position, if the position is on the canvas
pub fn cursor_cell(sim: &Simulation, mouse_pos: (f32, f32)) -> Option<(usize, usize)> {
    let (width, height) = sim.viewport().canvas_size();
    if mouse_pos.0 < 0.0 || mouse_pos.1 < 0.0 || mouse_pos.0 >= width || mouse_pos.1 >= height {
        return None;
    }
    sim.viewport().cell_at(mouse_pos.0, mouse_pos.1)
}

/// Collect this frame's commands from buttons, mouse and keyboard
pub fn poll(sim: &Simulation, drag: &mut DragState, buttons: &[Button], mouse_pos: (f32, f32)) -> Vec<Command> {
    let mut commands = Vec::new();
    let cell = cursor_cell(sim, mouse_pos);

    if is_mouse_button_pressed(MouseButton::Left) {
        if let Some(command) = buttons.iter().find_map(|btn| btn.command_for_click(mouse_pos)) {
            commands.push(command);
        } else if let Some((row, col)) = cell {
            commands.push(Command::Toggle { row, col });
        }
    }

    // A finger on the screen pans like a right-button drag.
    let (dragging, drag_pos) = match active_touch(&touches()) {
        Some(pos) => (true, pos),
        None => (
            is_mouse_button_down(MouseButton::Right) || is_mouse_button_down(MouseButton::Middle),
            mouse_pos,
        ),
    };
    commands.extend(drag.update(dragging, drag_pos));

    commands.extend(
        BOUND_KEYS
            .iter()
            .filter(|&&key| is_key_pressed(key))
            .filter_map(|&key| command_for_key(key, cell)),
    );
    commands
}
