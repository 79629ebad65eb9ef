use crate::grid::{Digit, Pos, SIZE};

// bits 1..=9 set
pub const ALL_DIGITS: u16 = 0b11_1111_1110;

/// Tracks which digits remain unplaced in each row and each column.
/// Subgrid occupancy is not tracked here; the search scans the 3x3 block
/// directly before committing a digit.
#[derive(Clone, Debug)]
pub struct Tracker {
    row_free: [u16; SIZE],
    col_free: [u16; SIZE],
}

impl Tracker {
    pub fn new() -> Self {
        Self { row_free: [ALL_DIGITS; SIZE], col_free: [ALL_DIGITS; SIZE] }
    }

    /// Digits legal at `p` by row and column constraints alone, as a bitmask.
    pub fn available(&self, p: Pos) -> u16 { self.row_free[p.r] & self.col_free[p.c] }

    /// Expands `available` into an ascending digit list; callers shuffle.
    pub fn candidates(&self, p: Pos) -> Vec<Digit> {
        let mask = self.available(p);
        (1..=9u8).filter(|&d| mask & (1u16 << d) != 0).collect()
    }

    /// Marks `d` used in `p`'s row and column. `d` must currently be free in both.
    pub fn place(&mut self, p: Pos, d: Digit) {
        debug_assert!(self.row_free[p.r] & (1u16 << d) != 0, "digit {d} already used in row {}", p.r);
        debug_assert!(self.col_free[p.c] & (1u16 << d) != 0, "digit {d} already used in col {}", p.c);
        self.row_free[p.r] &= !(1u16 << d);
        self.col_free[p.c] &= !(1u16 << d);
    }

    /// Undoes a `place` on backtrack.
    pub fn unplace(&mut self, p: Pos, d: Digit) {
        debug_assert_eq!(self.row_free[p.r] & (1u16 << d), 0, "digit {d} was not placed in row {}", p.r);
        debug_assert_eq!(self.col_free[p.c] & (1u16 << d), 0, "digit {d} was not placed in col {}", p.c);
        self.row_free[p.r] |= 1u16 << d;
        self.col_free[p.c] |= 1u16 << d;
    }
}

impl Default for Tracker {
    fn default() -> Self { Self::new() }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fresh_tracker_offers_all_digits_everywhere() {
        let t = Tracker::new();
        for p in crate::grid::Grid::iterate_cells() {
            assert_eq!(t.candidates(p), (1..=9).collect::<Vec<_>>());
        }
    }

    #[test]
    fn place_narrows_row_and_column_only() {
        let mut t = Tracker::new();
        t.place(Pos { r: 0, c: 0 }, 5);
        assert!(!t.candidates(Pos { r: 0, c: 8 }).contains(&5));
        assert!(!t.candidates(Pos { r: 8, c: 0 }).contains(&5));
        assert!(t.candidates(Pos { r: 1, c: 1 }).contains(&5));
    }

    #[test]
    fn unplace_restores_availability() {
        let mut t = Tracker::new();
        let p = Pos { r: 3, c: 7 };
        t.place(p, 2);
        t.unplace(p, 2);
        assert_eq!(t.available(p), ALL_DIGITS);
    }

    #[test]
    fn available_intersects_row_and_column() {
        let mut t = Tracker::new();
        t.place(Pos { r: 2, c: 0 }, 4);
        t.place(Pos { r: 0, c: 6 }, 9);
        let cands = t.candidates(Pos { r: 2, c: 6 });
        assert!(!cands.contains(&4));
        assert!(!cands.contains(&9));
        assert_eq!(cands.len(), 7);
    }
}
