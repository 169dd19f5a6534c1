use super::{Renderer, visible_marks};
use crate::application::Viewport;
use crate::domain::Grid;

/// Renders the visible window as lines of `#` (alive) and `.` (dead).
#[derive(Default)]
pub struct TextRenderer {
    frame: String,
}

impl TextRenderer {
    pub fn new() -> Self {
        Self::default()
    }

    /// The most recently rendered frame
    pub fn frame(&self) -> &str {
        &self.frame
    }
}

impl Renderer for TextRenderer {
    fn render(&mut self, grid: &Grid, viewport: &Viewport) {
        self.frame.clear();
        let Some(visible) = viewport.visible_cells() else {
            return;
        };
        let (first_row, first_col) = (*visible.rows.start(), *visible.cols.start());
        let mut lines = vec![vec!['.'; visible.width()]; visible.height()];
        for mark in visible_marks(grid, viewport) {
            lines[mark.row - first_row][mark.col - first_col] = '#';
        }
        for line in lines {
            self.frame.extend(line);
            self.frame.push('\n');
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_full_grid_frame() {
        let grid = Grid::from_ascii(&[".#.", "..#", "###"]).unwrap();
        let viewport = Viewport::new(3, 3, 1.0, 3.0, 3.0);
        let mut renderer = TextRenderer::new();
        renderer.render(&grid, &viewport);
        assert_eq!(renderer.frame(), ".#.\n..#\n###\n");
    }

    #[test]
    fn test_frame_is_cropped_to_viewport() {
        let grid = Grid::from_ascii(&["#...", ".#..", "..#.", "...#"]).unwrap();
        let mut viewport = Viewport::new(4, 4, 1.0, 2.0, 2.0);
        viewport.pan(2.0, 1.0);
        let mut renderer = TextRenderer::new();
        renderer.render(&grid, &viewport);
        assert_eq!(renderer.frame(), "..\n#.\n");
    }

    #[test]
    fn test_render_replaces_previous_frame() {
        let viewport = Viewport::new(2, 2, 1.0, 2.0, 2.0);
        let mut renderer = TextRenderer::new();
        renderer.render(&Grid::from_ascii(&["##", "##"]).unwrap(), &viewport);
        renderer.render(&Grid::from_ascii(&["#.", ".."]).unwrap(), &viewport);
        assert_eq!(renderer.frame(), "#.\n..\n");
    }
}
