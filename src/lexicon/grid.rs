// File: src/lexicon/grid.rs
//! Inflection grids and the packed string format they are stored in.
//!
//! A packed string lists the cells of a grid row by row: cells are separated
//! by `;` and alternative forms within a cell by `,`.

use std::fmt;
use std::marker::PhantomData;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::core::types::{Purusha, Vachana, Vibhakti};

/// Columns of every grid (singular, dual, plural).
pub const NUMBERS: usize = 3;

pub const GROUP_SEPARATOR: char = ';';
pub const FORM_SEPARATOR: char = ',';

/// Row and column of the `pos`-th cell of a packed string. The only place
/// where packed positions and grid coordinates are related.
pub fn locate(pos: usize) -> (usize, usize) {
    (pos / NUMBERS, pos % NUMBERS)
}

/// A grid with header row and column, as nested lists of forms.
pub type Table = Vec<Vec<Vec<String>>>;

/// The row axis of a grid.
pub trait GridAxis: Copy + fmt::Debug + 'static {
    const ALL: &'static [Self];
    /// Row of this value; `ALL[a.index()] == a`.
    fn index(self) -> usize;
    fn name(self) -> &'static str;
    fn short(self) -> &'static str;
}

impl GridAxis for Purusha {
    const ALL: &'static [Self] = &Purusha::ALL;

    fn index(self) -> usize {
        self as usize
    }

    fn name(self) -> &'static str {
        Purusha::name(self)
    }

    fn short(self) -> &'static str {
        Purusha::short(self)
    }
}

impl GridAxis for Vibhakti {
    const ALL: &'static [Self] = &Vibhakti::ALL;

    fn index(self) -> usize {
        self as usize
    }

    fn name(self) -> &'static str {
        Vibhakti::name(self)
    }

    fn short(self) -> &'static str {
        Vibhakti::short(self)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("expected {expected} `;`-separated cells, found {found}")]
pub struct PackedError {
    pub expected: usize,
    pub found: usize,
}

/// A fixed-shape table of forms: one row per `R`, one column per number.
/// A grid is either empty (nothing attested) or fully shaped.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(bound = "")]
pub struct Grid<R> {
    rows: Vec<[Vec<String>; NUMBERS]>,
    #[serde(skip)]
    axis: PhantomData<R>,
}

impl<R: GridAxis> Grid<R> {
    pub fn empty() -> Self {
        Self { rows: Vec::new(), axis: PhantomData }
    }

    /// Number of cells a non-empty packed string must contain.
    pub fn cell_count() -> usize {
        R::ALL.len() * NUMBERS
    }

    /// Decodes a packed string. A blank string is an empty grid; otherwise
    /// the cell count must match the grid shape exactly (one trailing `;` is
    /// tolerated).
    pub fn decode(packed: &str) -> Result<Self, PackedError> {
        if packed.trim().is_empty() {
            return Ok(Self::empty());
        }
        let mut groups: Vec<&str> = packed.split(GROUP_SEPARATOR).collect();
        let expected = Self::cell_count();
        if groups.len() == expected + 1 && groups.last().is_some_and(|g| g.trim().is_empty()) {
            groups.pop();
        }
        if groups.len() != expected {
            return Err(PackedError { expected, found: groups.len() });
        }

        let mut rows = vec![<[Vec<String>; NUMBERS]>::default(); R::ALL.len()];
        for (pos, group) in groups.into_iter().enumerate() {
            let (row, col) = locate(pos);
            rows[row][col] = group
                .split(FORM_SEPARATOR)
                .map(str::trim)
                .filter(|form| !form.is_empty())
                .map(String::from)
                .collect();
        }
        Ok(Self { rows, axis: PhantomData })
    }

    /// The packed string for this grid; `decode(encode(g)) == g`.
    pub fn encode(&self) -> String {
        (0..self.rows.len() * NUMBERS)
            .map(|pos| {
                let (row, col) = locate(pos);
                self.rows[row][col].join(&FORM_SEPARATOR.to_string())
            })
            .collect::<Vec<_>>()
            .join(&GROUP_SEPARATOR.to_string())
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn forms(&self, row: R, vachana: Vachana) -> &[String] {
        self.rows
            .get(row.index())
            .map(|cells| cells[vachana as usize].as_slice())
            .unwrap_or(&[])
    }

    /// Every cell holding `form`, in packed order.
    pub fn find(&self, form: &str) -> Vec<(R, Vachana)> {
        (0..self.rows.len() * NUMBERS)
            .map(locate)
            .filter(|&(row, col)| self.rows[row][col].iter().any(|f| f == form))
            .map(|(row, col)| (R::ALL[row], Vachana::ALL[col]))
            .collect()
    }

    /// The grid as a table; with `headers`, a header row of numbers and a
    /// header column of row names are added. An empty grid gives an empty
    /// table.
    pub fn table(&self, headers: bool) -> Table {
        if self.is_empty() {
            return Table::new();
        }
        let mut table = Table::with_capacity(self.rows.len() + 1);
        if headers {
            let mut header = vec![vec![String::new()]];
            header.extend(Vachana::ALL.iter().map(|v| vec![v.short().to_string()]));
            table.push(header);
        }
        for (axis, cells) in R::ALL.iter().zip(&self.rows) {
            let mut line = Vec::with_capacity(NUMBERS + 1);
            if headers {
                line.push(vec![axis.short().to_string()]);
            }
            line.extend(cells.iter().cloned());
            table.push(line);
        }
        table
    }
}
