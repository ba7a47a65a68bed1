//! Fixed note color palette

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// A palette entry
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Color {
    /// Human readable name, used for swatch titles
    pub name: &'static str,
    /// CSS hex value
    pub hex: &'static str,
}

/// The four note colors, indexed by [`ColorId`]
pub const PALETTE: [Color; 4] = [
    Color {
        name: "Yellow",
        hex: "#fcfaaa",
    },
    Color {
        name: "Green",
        hex: "#caf9c5",
    },
    Color {
        name: "Blue",
        hex: "#bedff5",
    },
    Color {
        name: "Pink",
        hex: "#ecb4ec",
    },
];

/// Index into [`PALETTE`]. Always in range.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize,
)]
#[serde(try_from = "usize", into = "usize")]
pub struct ColorId(u8);

impl ColorId {
    /// Checked constructor
    pub fn new(index: usize) -> Result<Self> {
        match u8::try_from(index) {
            Ok(raw) if index < PALETTE.len() => Ok(Self(raw)),
            _ => Err(Error::InvalidColor(index)),
        }
    }

    /// Every palette color in order
    pub fn all() -> impl Iterator<Item = Self> {
        (0..PALETTE.len()).filter_map(|index| Self::new(index).ok())
    }

    #[must_use]
    pub const fn index(self) -> usize {
        self.0 as usize
    }

    #[must_use]
    pub const fn color(self) -> Color {
        PALETTE[self.0 as usize]
    }
}

impl TryFrom<usize> for ColorId {
    type Error = Error;

    fn try_from(index: usize) -> Result<Self> {
        Self::new(index)
    }
}

impl From<ColorId> for usize {
    fn from(id: ColorId) -> Self {
        id.index()
    }
}

impl fmt::Display for ColorId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.color().name)
    }
}
