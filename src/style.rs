//! Fill-glyph tables for the graphical part of a frame.
//!
//! Every style is a table of [`STEPS`] precomputed bars, one per 2% bucket
//! (0%, 2%, ..., 100%). A bar is `[`, [`BAR_WIDTH`] cells, then `]`. The
//! tables are built by a `const fn`, so painting a frame is a lookup plus a
//! copy and never computes the bar itself.

use std::{fmt, str::FromStr};

use crate::error::ParseStyleError;

/// Number of cells between the brackets.
pub const BAR_WIDTH: usize = 50;

/// Number of rows in each table (0% through 100% in steps of 2).
pub const STEPS: usize = BAR_WIDTH + 1;

/// Byte length of one bar, brackets included.
pub const BAR_LEN: usize = BAR_WIDTH + 2;

type Table = [[u8; BAR_LEN]; STEPS];

const fn build_table(fill: u8) -> Table {
    let mut table = [[b' '; BAR_LEN]; STEPS];
    let mut step = 0;
    while step < STEPS {
        table[step][0] = b'[';
        table[step][BAR_LEN - 1] = b']';
        let mut cell = 0;
        while cell < step {
            table[step][cell + 1] = fill;
            cell += 1;
        }
        step += 1;
    }
    table
}

static EQUALS: Table = build_table(b'=');
static HASH: Table = build_table(b'#');

/// The fill character used by the bar.
#[repr(u8)]
#[derive(Clone, Copy, Debug, Default, Eq, Hash, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum BarStyle {
    /// `[=====     ]`
    #[default]
    Equals = 0,
    /// `[#####     ]`
    Hash = 1,
}

impl BarStyle {
    /// All styles, in index order.
    pub const ALL: [Self; 2] = [Self::Equals, Self::Hash];

    /// Number of available styles.
    pub const COUNT: usize = Self::ALL.len();

    /// Selects a style by index, clamping out-of-range values into
    /// `0..COUNT`.
    #[must_use]
    pub const fn from_index(index: i64) -> Self {
        if index <= 0 {
            Self::Equals
        } else {
            Self::Hash
        }
    }

    /// The position of this style in [`BarStyle::ALL`].
    #[must_use]
    pub const fn index(self) -> usize {
        self as usize
    }

    /// The glyph used for filled cells.
    #[must_use]
    pub const fn fill(self) -> char {
        match self {
            Self::Equals => '=',
            Self::Hash => '#',
        }
    }

    /// Returns the precomputed bar for `percent`, clamped to 100.
    #[must_use]
    pub fn bar(self, percent: u8) -> &'static [u8; BAR_LEN] {
        let table = match self {
            Self::Equals => &EQUALS,
            Self::Hash => &HASH,
        };
        &table[usize::from(percent.min(100)) / 2]
    }

    pub(crate) const fn from_repr(repr: u8) -> Self {
        Self::from_index(repr as i64)
    }
}

impl fmt::Display for BarStyle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Equals => f.write_str("equals"),
            Self::Hash => f.write_str("hash"),
        }
    }
}

impl FromStr for BarStyle {
    type Err = ParseStyleError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        match s.to_ascii_lowercase().as_str() {
            "equals" | "=" => Ok(Self::Equals),
            "hash" | "#" => Ok(Self::Hash),
            other => other
                .parse::<i64>()
                .map(Self::from_index)
                .map_err(|_| ParseStyleError::Unknown(s.to_owned())),
        }
    }
}
