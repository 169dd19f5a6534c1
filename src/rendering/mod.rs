//! Presentation targets for a grid seen through a viewport.
//!
//! The engine knows nothing about drawing. Each target implements
//! [`Renderer`]; both built-in targets share [`visible_marks`] so they agree
//! on what is on screen.

mod canvas;
mod text;

pub use canvas::{CanvasRenderer, draw_controls};
pub use text::TextRenderer;

use crate::application::Viewport;
use crate::domain::Grid;

/// Something that can present a grid.
pub trait Renderer {
    fn render(&mut self, grid: &Grid, viewport: &Viewport);
}

/// Filled square for one live cell, in canvas pixels.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct CellMark {
    pub row: usize,
    pub col: usize,
    pub x: f32,
    pub y: f32,
    /// One pixel short of the cell size, leaving a gridline gap. Never
    /// below one pixel, so 1px cells still draw.
    pub size: f32,
}

/// Marks for every live cell inside the visible range, row-major
pub fn visible_marks<'a>(grid: &'a Grid, viewport: &'a Viewport) -> impl Iterator<Item = CellMark> + 'a {
    let size = (viewport.cell_size() - 1.0).max(1.0);
    viewport
        .visible_cells()
        .into_iter()
        .flat_map(move |visible| {
            visible.rows.flat_map(move |row| {
                let cols = visible.cols.clone();
                grid.row(row)
                    .into_iter()
                    .flat_map(move |cells| {
                        cols.clone()
                            .filter(move |&col| cells.get(col).is_some_and(|cell| cell.is_alive()))
                    })
                    .map(move |col| {
                        let (x, y) = viewport.cell_origin(row, col);
                        CellMark { row, col, x, y, size }
                    })
            })
        })
}
