use std::ops::RangeInclusive;

/// Scrollable window onto a logical grid that may be larger than the canvas.
///
/// The offset is in pixels and is clamped on every change so the window
/// never extends past the logical grid.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Viewport {
    offset_x: f32,
    offset_y: f32,
    canvas_width: f32,
    canvas_height: f32,
    cell_size: f32,
    rows: usize,
    cols: usize,
}

/// Inclusive row/column ranges of cells intersecting the canvas.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct VisibleCells {
    pub rows: RangeInclusive<usize>,
    pub cols: RangeInclusive<usize>,
}

impl VisibleCells {
    pub fn contains(&self, row: usize, col: usize) -> bool {
        self.rows.contains(&row) && self.cols.contains(&col)
    }

    pub fn height(&self) -> usize {
        self.rows.end() + 1 - self.rows.start()
    }

    pub fn width(&self) -> usize {
        self.cols.end() + 1 - self.cols.start()
    }
}

impl Viewport {
    /// Viewport at offset (0, 0) over a `rows x cols` grid
    pub fn new(rows: usize, cols: usize, cell_size: f32, canvas_width: f32, canvas_height: f32) -> Self {
        Self {
            offset_x: 0.0,
            offset_y: 0.0,
            canvas_width: canvas_width.max(0.0),
            canvas_height: canvas_height.max(0.0),
            cell_size: cell_size.max(1.0),
            rows,
            cols,
        }
    }

    /// Viewport with the canvas centered on the logical grid
    pub fn centered(rows: usize, cols: usize, cell_size: f32, canvas_width: f32, canvas_height: f32) -> Self {
        let mut viewport = Self::new(rows, cols, cell_size, canvas_width, canvas_height);
        let (width, height) = viewport.logical_size();
        viewport.set_offset(
            (width - viewport.canvas_width) / 2.0,
            (height - viewport.canvas_height) / 2.0,
        );
        viewport
    }

    pub const fn offset(&self) -> (f32, f32) {
        (self.offset_x, self.offset_y)
    }

    pub const fn cell_size(&self) -> f32 {
        self.cell_size
    }

    pub const fn canvas_size(&self) -> (f32, f32) {
        (self.canvas_width, self.canvas_height)
    }

    /// Size of the whole grid in pixels
    pub fn logical_size(&self) -> (f32, f32) {
        (
            self.cols as f32 * self.cell_size,
            self.rows as f32 * self.cell_size,
        )
    }

    /// Largest offset that still keeps the canvas inside the grid.
    /// Zero on an axis where the canvas is larger than the grid.
    pub fn max_offset(&self) -> (f32, f32) {
        let (width, height) = self.logical_size();
        (
            (width - self.canvas_width).max(0.0),
            (height - self.canvas_height).max(0.0),
        )
    }

    /// Move to an absolute offset, clamped
    pub fn set_offset(&mut self, x: f32, y: f32) {
        let (max_x, max_y) = self.max_offset();
        self.offset_x = clamp_axis(x, max_x);
        self.offset_y = clamp_axis(y, max_y);
    }

    /// Shift the offset by `(dx, dy)` pixels, then clamp
    pub fn pan(&mut self, dx: f32, dy: f32) {
        self.set_offset(self.offset_x + dx, self.offset_y + dy);
    }

    /// Change the canvas size keeping the same logical point at its center
    pub fn resize(&mut self, canvas_width: f32, canvas_height: f32) {
        let center_x = self.offset_x + self.canvas_width / 2.0;
        let center_y = self.offset_y + self.canvas_height / 2.0;
        self.canvas_width = canvas_width.max(0.0);
        self.canvas_height = canvas_height.max(0.0);
        self.set_offset(
            center_x - self.canvas_width / 2.0,
            center_y - self.canvas_height / 2.0,
        );
    }

    /// Cells intersecting the canvas, `None` for an empty canvas
    pub fn visible_cells(&self) -> Option<VisibleCells> {
        let rows = visible_axis(self.offset_y, self.canvas_height, self.cell_size, self.rows)?;
        let cols = visible_axis(self.offset_x, self.canvas_width, self.cell_size, self.cols)?;
        Some(VisibleCells { rows, cols })
    }

    /// Cell under a canvas-relative pixel, `None` off the grid
    pub fn cell_at(&self, x: f32, y: f32) -> Option<(usize, usize)> {
        let col = ((x + self.offset_x) / self.cell_size).floor();
        let row = ((y + self.offset_y) / self.cell_size).floor();
        if !(col >= 0.0 && row >= 0.0) {
            return None;
        }
        let (row, col) = (row as usize, col as usize);
        (row < self.rows && col < self.cols).then_some((row, col))
    }

    /// Canvas-relative top-left pixel of a cell
    pub fn cell_origin(&self, row: usize, col: usize) -> (f32, f32) {
        (
            col as f32 * self.cell_size - self.offset_x,
            row as f32 * self.cell_size - self.offset_y,
        )
    }
}

fn clamp_axis(value: f32, max: f32) -> f32 {
    if value.is_nan() {
        return 0.0;
    }
    value.min(max).max(0.0)
}

fn visible_axis(offset: f32, extent: f32, cell_size: f32, len: usize) -> Option<RangeInclusive<usize>> {
    if len == 0 || extent <= 0.0 {
        return None;
    }
    let first = (offset / cell_size).floor() as usize;
    let end = ((offset + extent) / cell_size).ceil() as usize;
    let last = end.saturating_sub(1).min(len - 1);
    (first <= last).then(|| first..=last)
}
