use serde::{Deserialize, Serialize};

/// How the grid edges behave when looking past them.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Topology {
    /// Cells past the edge are treated as dead
    #[default]
    Bounded,
    /// Edges connect to the opposite side (torus)
    Toroidal,
}

impl Topology {
    /// Resolve `index + delta` on an axis of length `len`.
    ///
    /// Returns `None` when the position falls off a bounded edge.
    #[inline]
    pub fn resolve(self, index: usize, delta: isize, len: usize) -> Option<usize> {
        if len == 0 {
            return None;
        }
        match self {
            Topology::Bounded => index
                .checked_add_signed(delta)
                .filter(|&resolved| resolved < len),
            Topology::Toroidal => {
                let len = len as isize;
                Some((index as isize + delta).rem_euclid(len) as usize)
            }
        }
    }

    pub const fn name(self) -> &'static str {
        match self {
            Topology::Bounded => "bounded",
            Topology::Toroidal => "toroidal",
        }
    }
}
