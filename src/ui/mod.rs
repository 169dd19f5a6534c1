mod button;

pub use button::Button;

use macroquad::prelude::{screen_height, screen_width};

use crate::application::Command;

pub const PANEL_WIDTH: f32 = 180.0;
pub const BUTTON_HEIGHT: f32 = 40.0;

/// Get the X position where the panel starts (right side)
pub fn panel_x() -> f32 {
    screen_width() - PANEL_WIDTH
}

/// Get the width of the grid area
pub fn grid_area_width() -> f32 {
    screen_width() - PANEL_WIDTH
}

/// Get the height of the grid area
pub fn grid_area_height() -> f32 {
    screen_height()
}

/// Start / Stop / Random / Reset stacked at the top of the panel
pub fn create_buttons() -> Vec<Button> {
    let px = panel_x();
    [
        ("Start", Command::Start),
        ("Stop", Command::Stop),
        ("Random", Command::Randomize),
        ("Reset", Command::Reset),
    ]
    .into_iter()
    .enumerate()
    .map(|(i, (label, command))| {
        Button::new(px, 20.0 + i as f32 * 50.0, PANEL_WIDTH, BUTTON_HEIGHT, label, command)
    })
    .collect()
}
