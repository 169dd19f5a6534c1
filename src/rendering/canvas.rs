use macroquad::prelude::*;

use super::{Renderer, visible_marks};
use crate::application::{Simulation, Viewport};
use crate::domain::Grid;
use crate::ui::{Button, PANEL_WIDTH, panel_x};

/// Format large numbers with K/M suffixes
fn format_number(n: usize) -> String {
    if n >= 1_000_000 {
        format!("{:.1}M", n as f64 / 1_000_000.0)
    } else if n >= 1_000 {
        format!("{:.1}K", n as f64 / 1_000.0)
    } else {
        format!("{}", n)
    }
}

/// Draws live cells as filled squares on the macroquad window.
pub struct CanvasRenderer {
    pub alive_color: Color,
    pub background: Color,
}

impl Default for CanvasRenderer {
    fn default() -> Self {
        Self {
            alive_color: Color::from_rgba(95, 158, 160, 255), // Cadet blue
            background: Color::from_rgba(15, 15, 15, 255),
        }
    }
}

impl Renderer for CanvasRenderer {
    fn render(&mut self, grid: &Grid, viewport: &Viewport) {
        let (width, height) = viewport.canvas_size();
        draw_rectangle(0.0, 0.0, width, height, self.background);
        for mark in visible_marks(grid, viewport) {
            draw_rectangle(mark.x, mark.y, mark.size, mark.size, self.alive_color);
        }
    }
}

/// Draw the control panel with buttons and simulation info
pub fn draw_controls(sim: &Simulation, buttons: &[Button], mouse_pos: (f32, f32)) {
    let px = panel_x();
    draw_rectangle(px, 0.0, PANEL_WIDTH, screen_height(), Color::from_rgba(30, 30, 30, 255));

    buttons.iter().for_each(|btn| btn.draw(mouse_pos));

    let controls = [
        "Controls:",
        "LMB: Toggle cell",
        "RMB/Mid-drag: Pan",
        "Space: Start/Stop",
        "N: Step  R: Random",
        "C: Reset",
        "G/P: Glider/Pulsar",
        "Up/Down: Speed",
    ];
    for (i, text) in controls.iter().enumerate() {
        let (size, color) = if i == 0 { (14.0, WHITE) } else { (12.0, GRAY) };
        draw_text(text, px + 8.0, 240.0 + i as f32 * 14.0, size, color);
    }

    let (rows, cols) = sim.grid().dimensions();
    let (offset_x, offset_y) = sim.viewport().offset();
    let labels = [
        (format!("Grid: {}x{}", rows, cols), GRAY),
        (format!("Edges: {}", sim.engine().topology().name()), GRAY),
        (format!("Rule: {}", sim.engine().rule()), GRAY),
        (format!("Alive: {}", format_number(sim.grid().population())), GRAY),
        (format!("Speed: {:.1} gen/s", sim.ticks_per_second()), WHITE),
        (format!("Generation: {}", sim.generation()), Color::from_rgba(95, 158, 160, 255)),
        (format!("View: {:.0}, {:.0}", offset_x, offset_y), GRAY),
        (
            if sim.is_running() { "Running".to_owned() } else { "Paused".to_owned() },
            if sim.is_running() { GREEN } else { ORANGE },
        ),
    ];
    for (i, (text, color)) in labels.iter().enumerate() {
        draw_text(text, px + 8.0, 380.0 + i as f32 * 20.0, 16.0, *color);
    }
}
