//! The 3×3 sliding-tile board value type.
//!
//! A [`Board`] is an immutable arrangement of the values `0..=8` (0 is the
//! blank). Every transformation returns a fresh board; nothing mutates in
//! place. The permutation invariant is checked only at the entry points
//! ([`Board::from_values`], [`FromStr`]); internal code assumes it.

use std::fmt;
use std::str::FromStr;

use rand::Rng;

pub const SIDE: usize = 3;
pub const CELLS: usize = SIDE * SIDE;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
/// Direction the blank moves in a slide (the tile moves the opposite way).
pub enum Move {
    Up,
    Down,
    Left,
    Right,
}

impl Move {
    /// Fixed expansion order. Successor generation iterates this so that
    /// neighbor order is deterministic and tests are reproducible.
    pub const ALL: [Move; 4] = [Move::Up, Move::Down, Move::Left, Move::Right];

    /// (row, col) delta applied to the blank.
    #[inline]
    pub fn delta(self) -> (isize, isize) {
        match self {
            Move::Up => (-1, 0),
            Move::Down => (1, 0),
            Move::Left => (0, -1),
            Move::Right => (0, 1),
        }
    }

    #[inline]
    pub fn opposite(self) -> Move {
        match self {
            Move::Up => Move::Down,
            Move::Down => Move::Up,
            Move::Left => Move::Right,
            Move::Right => Move::Left,
        }
    }
}

impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Move::Up => "up",
            Move::Down => "down",
            Move::Left => "left",
            Move::Right => "right",
        };
        write!(f, "{s}")
    }
}

#[derive(Debug)]
/// Rejections raised by the validating board constructors.
pub enum InvalidBoard {
    /// A cell value outside `0..=8`.
    ValueOutOfRange { value: u8 },
    /// A value appeared more than once (so another is missing).
    DuplicateValue { value: u8 },
    /// Input did not contain exactly nine cells.
    WrongCount { found: usize },
    /// A token could not be parsed as a cell value.
    BadToken { token: String },
}

impl fmt::Display for InvalidBoard {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            InvalidBoard::ValueOutOfRange { value } => {
                write!(f, "cell value {value} is outside 0..=8")
            }
            InvalidBoard::DuplicateValue { value } => {
                write!(f, "cell value {value} appears more than once")
            }
            InvalidBoard::WrongCount { found } => {
                write!(f, "expected 9 cells, found {found}")
            }
            InvalidBoard::BadToken { token } => {
                write!(f, "cannot parse {token:?} as a cell value")
            }
        }
    }
}

impl std::error::Error for InvalidBoard {}

/// One board configuration, row-major, 0 = blank.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Board {
    cells: [u8; CELLS],
}

#[inline]
fn rc_of(idx: usize) -> (usize, usize) {
    (idx / SIDE, idx % SIDE)
}

#[inline]
fn idx_of(r: usize, c: usize) -> usize {
    r * SIDE + c
}

impl Board {
    /// The canonical goal: `1..8` with the blank in the last cell.
    pub const SOLVED: Board = Board {
        cells: [1, 2, 3, 4, 5, 6, 7, 8, 0],
    };

    /// Validating constructor: `values` must be a permutation of `0..=8`.
    pub fn from_values(values: [u8; CELLS]) -> Result<Board, InvalidBoard> {
        let mut seen = [false; CELLS];
        for &v in &values {
            if v as usize >= CELLS {
                return Err(InvalidBoard::ValueOutOfRange { value: v });
            }
            if seen[v as usize] {
                return Err(InvalidBoard::DuplicateValue { value: v });
            }
            seen[v as usize] = true;
        }
        Ok(Board { cells: values })
    }

    #[inline]
    pub fn cells(&self) -> &[u8; CELLS] {
        &self.cells
    }

    /// Position of the blank. The permutation invariant guarantees exactly
    /// one zero cell.
    #[inline]
    pub fn blank_index(&self) -> usize {
        self.cells.iter().position(|&v| v == 0).unwrap_or(0)
    }

    /// Slide a tile into the blank by moving the blank in `mv`'s direction.
    /// Returns `None` when the blank is on the corresponding edge.
    pub fn slide_blank(&self, mv: Move) -> Option<Board> {
        let z = self.blank_index();
        let (r, c) = rc_of(z);
        let (dr, dc) = mv.delta();
        let nr = r as isize + dr;
        let nc = c as isize + dc;
        if nr < 0 || nr >= SIDE as isize || nc < 0 || nc >= SIDE as isize {
            return None;
        }
        let src = idx_of(nr as usize, nc as usize);
        let mut cells = self.cells;
        cells.swap(z, src);
        Some(Board { cells })
    }

    /// Slide the tile carrying `tile` into the blank, if it is orthogonally
    /// adjacent to it.
    pub fn slide_tile(&self, tile: u8) -> Option<Board> {
        let src = self.cells.iter().position(|&v| v == tile)?;
        let z = self.blank_index();
        let (zr, zc) = rc_of(z);
        let (sr, sc) = rc_of(src);
        if zr.abs_diff(sr) + zc.abs_diff(sc) != 1 {
            return None;
        }
        let mut cells = self.cells;
        cells.swap(z, src);
        Some(Board { cells })
    }

    /// All boards one legal slide away, in the fixed [`Move::ALL`] order
    /// (up to 4; fewer at edges and corners).
    pub fn neighbors(&self) -> Vec<Board> {
        let mut out = Vec::with_capacity(4);
        for mv in Move::ALL {
            if let Some(b) = self.slide_blank(mv) {
                out.push(b);
            }
        }
        out
    }

    /// Number of inversions among the 8 tiles (blank excluded).
    pub fn inversions(&self) -> u32 {
        let mut inv = 0;
        for i in 0..CELLS {
            if self.cells[i] == 0 {
                continue;
            }
            for j in i + 1..CELLS {
                if self.cells[j] != 0 && self.cells[j] < self.cells[i] {
                    inv += 1;
                }
            }
        }
        inv
    }

    /// Permutation parity class of the tile arrangement.
    ///
    /// On an odd-width board, two configurations are mutually reachable by
    /// legal slides iff their parities match, regardless of where the blank
    /// sits. This does *not* hold for even widths, where the blank's row
    /// enters the condition.
    #[inline]
    pub fn parity(&self) -> u32 {
        self.inversions() % 2
    }

    /// Whether the canonical goal [`Board::SOLVED`] is reachable from here.
    /// Arbitrary goals must compare parities instead (see the solver's
    /// pre-check).
    #[inline]
    pub fn is_solvable(&self) -> bool {
        self.parity() == 0
    }

    /// Random walk of `steps` legal slides from `self`.
    ///
    /// Walking the move graph keeps the result in the same parity class, so
    /// scrambling a solvable board always yields a solvable board without
    /// a rejection loop.
    pub fn scrambled<R: Rng>(&self, rng: &mut R, steps: usize) -> Board {
        let mut cur = *self;
        let mut last: Option<Move> = None;
        for _ in 0..steps {
            let mut options = Vec::with_capacity(4);
            for mv in Move::ALL {
                // Skip the immediate undo so short walks still wander.
                if last.map(Move::opposite) == Some(mv) {
                    continue;
                }
                if cur.slide_blank(mv).is_some() {
                    options.push(mv);
                }
            }
            let mv = options[rng.gen_range(0..options.len())];
            cur = cur.slide_blank(mv).unwrap_or(cur);
            last = Some(mv);
        }
        cur
    }
}

impl FromStr for Board {
    type Err = InvalidBoard;

    /// Parses nine whitespace-separated integers, e.g. `"1 2 3 4 5 6 7 8 0"`.
    fn from_str(s: &str) -> Result<Board, InvalidBoard> {
        let mut values = [0u8; CELLS];
        let mut count = 0;
        for tok in s.split_whitespace() {
            let v: u8 = tok.parse().map_err(|_| InvalidBoard::BadToken {
                token: tok.to_string(),
            })?;
            if count >= CELLS {
                return Err(InvalidBoard::WrongCount { found: count + 1 });
            }
            values[count] = v;
            count += 1;
        }
        if count != CELLS {
            return Err(InvalidBoard::WrongCount { found: count });
        }
        Board::from_values(values)
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "-------------")?;
        for r in 0..SIDE {
            write!(f, "| ")?;
            for c in 0..SIDE {
                let v = self.cells[idx_of(r, c)];
                if v == 0 {
                    write!(f, "_ | ")?;
                } else {
                    write!(f, "{v} | ")?;
                }
            }
            writeln!(f)?;
            writeln!(f, "-------------")?;
        }
        Ok(())
    }
}
