//! Bead-board geometry and the value ↔ bead-key codec.
//!
//! Bead keys are the wire format between this engine and the rendering
//! layer: `"{column}-{upper|lower}-{row}"`, column 0 leftmost (most
//! significant), upper beads worth 5× their column's place value, lower
//! beads 1×. The format is stable; both tests and the UI parse it.

use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

use crate::learning_engine::error::{Error, Result};

/// Board geometry. Column count and beads per column are parameters so
/// non-standard boards (or a future decimal-point variant) reuse the codec
/// unchanged.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct BoardLayout {
    pub columns: u32,
    pub upper_beads_per_column: u32,
    pub lower_beads_per_column: u32,
}

impl Default for BoardLayout {
    /// The standard teaching board: 9 columns, 1 upper and 4 lower beads.
    fn default() -> Self {
        Self {
            columns: 9,
            upper_beads_per_column: 1,
            lower_beads_per_column: 4,
        }
    }
}

enum BeadSection {
    Upper,
    Lower,
}

impl BoardLayout {
    /// The all-beads-active maximum value for this geometry.
    pub fn max_value(&self) -> i64 {
        let per_digit =
            5 * i64::from(self.upper_beads_per_column) + i64::from(self.lower_beads_per_column);
        let mut place = 1i64;
        let mut total = 0i64;
        for _ in 0..self.columns {
            total += per_digit * place;
            place *= 10;
        }
        total
    }

    /// Whether the board can physically show `value`. Negative values are
    /// never representable.
    pub fn can_represent_value(&self, value: i64) -> bool {
        (0..=self.max_value()).contains(&value)
    }

    /// The minimal set of active bead positions showing `value`.
    ///
    /// Columns are processed left to right, most significant digit first.
    /// Per column digit `d`: `min(d / 5, upper)` upper beads from row 0
    /// down, and `d mod 5` lower beads on the rows adjacent to the
    /// crossbar (the highest-numbered rows). Zero maps to the empty set.
    ///
    /// # Errors
    ///
    /// Returns [`Error::NegativeValue`] for negative input; a negative
    /// value is a caller bug, not a board state.
    pub fn value_to_bead_keys(&self, value: i64) -> Result<BTreeSet<String>> {
        if value < 0 {
            return Err(Error::NegativeValue(value));
        }

        let mut keys = BTreeSet::new();
        let mut remaining = value;
        for column in 0..self.columns {
            let place = 10i64.pow(self.columns - 1 - column);
            let digit = remaining / place;

            if digit >= 5 {
                let upper_active = (digit / 5).min(i64::from(self.upper_beads_per_column));
                for row in 0..upper_active {
                    keys.insert(format!("{column}-upper-{row}"));
                }
            }

            let lower_active = digit % 5;
            let lower_total = i64::from(self.lower_beads_per_column);
            for row in (lower_total - lower_active)..lower_total {
                keys.insert(format!("{column}-lower-{row}"));
            }

            remaining -= digit * place;
        }
        Ok(keys)
    }

    /// Sum a set of bead keys back into the value they display. Exact
    /// inverse of [`Self::value_to_bead_keys`] over the representable
    /// range.
    ///
    /// # Errors
    ///
    /// Returns [`Error::MalformedBeadKey`] for keys that do not parse or
    /// name a column outside this board.
    pub fn bead_keys_to_value<I>(&self, keys: I) -> Result<i64>
    where
        I: IntoIterator,
        I::Item: AsRef<str>,
    {
        let mut value = 0i64;
        for key in keys {
            let key = key.as_ref();
            let (column, section) = parse_bead_key(key)?;
            if column >= self.columns {
                return Err(Error::MalformedBeadKey(key.to_string()));
            }
            let place = 10i64.pow(self.columns - 1 - column);
            value += match section {
                BeadSection::Upper => 5 * place,
                BeadSection::Lower => place,
            };
        }
        Ok(value)
    }
}

fn parse_bead_key(key: &str) -> Result<(u32, BeadSection)> {
    let malformed = || Error::MalformedBeadKey(key.to_string());

    let mut parts = key.split('-');
    let (Some(column), Some(section), Some(row), None) =
        (parts.next(), parts.next(), parts.next(), parts.next())
    else {
        return Err(malformed());
    };

    let column: u32 = column.parse().map_err(|_| malformed())?;
    let _row: u32 = row.parse().map_err(|_| malformed())?;
    let section = match section {
        "upper" => BeadSection::Upper,
        "lower" => BeadSection::Lower,
        _ => return Err(malformed()),
    };
    Ok((column, section))
}
