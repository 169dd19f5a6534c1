/// A pattern that can be stamped onto the grid.
///
/// Offsets are signed `(row, col)` pairs relative to the placement origin,
/// so a pattern may extend above or to the left of where it is placed.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Pattern {
    pub name: &'static str,
    pub description: &'static str,
    pub offsets: Vec<(isize, isize)>,
}

impl Pattern {
    pub fn new(
        name: &'static str,
        description: &'static str,
        offsets: Vec<(isize, isize)>,
    ) -> Self {
        Self {
            name,
            description,
            offsets,
        }
    }

    /// Build from a quadrant and mirror it about both axes through the
    /// origin, dropping duplicates on the axes.
    fn mirrored(name: &'static str, description: &'static str, quadrant: &[(isize, isize)]) -> Self {
        let mut offsets = Vec::with_capacity(quadrant.len() * 4);
        for &(dr, dc) in quadrant {
            for (sr, sc) in [(1, 1), (1, -1), (-1, 1), (-1, -1)] {
                let offset = (dr * sr, dc * sc);
                if !offsets.contains(&offset) {
                    offsets.push(offset);
                }
            }
        }
        Self::new(name, description, offsets)
    }

    /// Inclusive `(min_row, min_col, max_row, max_col)` of the offsets
    pub fn bounds(&self) -> (isize, isize, isize, isize) {
        self.offsets.iter().fold(
            (isize::MAX, isize::MAX, isize::MIN, isize::MIN),
            |(r0, c0, r1, c1), &(r, c)| (r0.min(r), c0.min(c), r1.max(r), c1.max(c)),
        )
    }

    pub fn len(&self) -> usize {
        self.offsets.len()
    }

    pub fn is_empty(&self) -> bool {
        self.offsets.is_empty()
    }
}

/// Classic Game of Life patterns library
pub mod presets {
    use super::*;

    /// Glider - simplest spaceship, moves one cell down-right every 4 generations
    pub fn glider() -> Pattern {
        Pattern::new(
            "Glider",
            "Moves diagonally (period 4)",
            vec![(0, 0), (1, 1), (1, 2), (0, 2), (-1, 2)],
        )
    }

    pub fn blinker() -> Pattern {
        Pattern::new("Blinker", "Oscillator (period 2)", vec![(0, -1), (0, 0), (0, 1)])
    }

    pub fn toad() -> Pattern {
        Pattern::new(
            "Toad",
            "Oscillator (period 2)",
            vec![(0, 1), (0, 2), (0, 3), (1, 0), (1, 1), (1, 2)],
        )
    }

    pub fn beacon() -> Pattern {
        Pattern::new(
            "Beacon",
            "Oscillator (period 2)",
            vec![(0, 0), (0, 1), (1, 0), (2, 3), (3, 2), (3, 3)],
        )
    }

    /// Pulsar - period 3 oscillator, origin at its center
    pub fn pulsar() -> Pattern {
        Pattern::mirrored(
            "Pulsar",
            "Oscillator (period 3)",
            &[
                // Bars parallel to the columns
                (1, 2), (1, 3), (1, 4),
                (6, 2), (6, 3), (6, 4),
                // Bars parallel to the rows
                (2, 1), (3, 1), (4, 1),
                (2, 6), (3, 6), (4, 6),
            ],
        )
    }

    /// Lightweight Spaceship (LWSS)
    pub fn lwss() -> Pattern {
        Pattern::new(
            "LWSS",
            "Lightweight Spaceship (period 4)",
            vec![
                (0, 1), (0, 4),
                (1, 0),
                (2, 0), (2, 4),
                (3, 0), (3, 1), (3, 2), (3, 3),
            ],
        )
    }

    /// Gosper Glider Gun - produces gliders indefinitely
    pub fn glider_gun() -> Pattern {
        Pattern::new(
            "Gosper Glider Gun",
            "Produces gliders (period 30)",
            vec![
                // Left square
                (4, 0), (5, 0), (4, 1), (5, 1),
                // Left circle
                (4, 10), (5, 10), (6, 10),
                (3, 11), (7, 11),
                (2, 12), (8, 12),
                (2, 13), (8, 13),
                (5, 14),
                (3, 15), (7, 15),
                (4, 16), (5, 16), (6, 16),
                (5, 17),
                // Middle pieces
                (2, 20), (3, 20), (4, 20),
                (2, 21), (3, 21), (4, 21),
                (1, 22), (5, 22),
                (0, 24), (1, 24), (5, 24), (6, 24),
                // Right square
                (2, 34), (3, 34), (2, 35), (3, 35),
            ],
        )
    }

    /// R-pentomino - classic methuselah (stabilizes after 1103 generations)
    pub fn r_pentomino() -> Pattern {
        Pattern::new(
            "R-pentomino",
            "Methuselah - stabilizes at gen 1103",
            vec![(0, 1), (0, 2), (1, 0), (1, 1), (2, 1)],
        )
    }

    /// Acorn - small methuselah that stabilizes after 5206 generations
    pub fn acorn() -> Pattern {
        Pattern::new(
            "Acorn",
            "Methuselah - stabilizes at gen 5206",
            vec![(0, 1), (1, 3), (2, 0), (2, 1), (2, 4), (2, 5), (2, 6)],
        )
    }

    /// Block - simple still life
    pub fn block() -> Pattern {
        Pattern::new("Block", "Still life", vec![(0, 0), (0, 1), (1, 0), (1, 1)])
    }

    /// Get all available patterns
    pub fn all_patterns() -> Vec<Pattern> {
        vec![
            glider(),
            blinker(),
            toad(),
            beacon(),
            pulsar(),
            lwss(),
            glider_gun(),
            r_pentomino(),
            acorn(),
            block(),
        ]
    }

    /// Look a pattern up by name, ignoring case
    pub fn by_name(name: &str) -> Option<Pattern> {
        all_patterns()
            .into_iter()
            .find(|pattern| pattern.name.eq_ignore_ascii_case(name))
    }
}
