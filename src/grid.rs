use itertools::Itertools;

pub type Digit = u8; // 0 = empty; 1..=9 digits

pub const SIZE: usize = 9;
pub const SUBGRID: usize = 3;
pub const CELLS: usize = SIZE * SIZE;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Pos { pub r: usize, pub c: usize }

impl Pos { pub fn idx(self) -> usize { self.r * SIZE + self.c } }

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Grid {
    cells: [Digit; CELLS],
}

impl Grid {
    pub fn empty() -> Self { Self { cells: [0; CELLS] } }

    pub fn get(&self, p: Pos) -> Digit { self.cells[p.idx()] }
    pub fn set(&mut self, p: Pos, d: Digit) { self.cells[p.idx()] = d; }
    pub fn clear(&mut self, p: Pos) { self.cells[p.idx()] = 0; }

    pub fn is_filled(&self) -> bool { self.cells.iter().all(|&d| d != 0) }
    pub fn empty_count(&self) -> usize { self.cells.iter().filter(|&&d| d == 0).count() }

    /// Scans the 3x3 block containing `p` for an existing occurrence of `d`.
    pub fn block_contains(&self, p: Pos, d: Digit) -> bool {
        let br = (p.r / SUBGRID) * SUBGRID;
        let bc = (p.c / SUBGRID) * SUBGRID;
        for r in br..br + SUBGRID {
            for c in bc..bc + SUBGRID {
                if self.cells[r * SIZE + c] == d { return true; }
            }
        }
        false
    }

    pub fn row(&self, r: usize) -> [Digit; SIZE] { let mut a = [0; SIZE]; for c in 0..SIZE { a[c] = self.cells[r * SIZE + c]; } a }
    pub fn col(&self, c: usize) -> [Digit; SIZE] { let mut a = [0; SIZE]; for r in 0..SIZE { a[r] = self.cells[r * SIZE + c]; } a }
    pub fn block(&self, br: usize, bc: usize) -> [Digit; SIZE] {
        let mut a = [0; SIZE];
        let mut i = 0;
        for r in br * SUBGRID..(br + 1) * SUBGRID {
            for c in bc * SUBGRID..(bc + 1) * SUBGRID { a[i] = self.cells[r * SIZE + c]; i += 1; }
        }
        a
    }

    /// True when every row, column, and 3x3 block holds each digit exactly once.
    pub fn is_solved(&self) -> bool {
        (0..SIZE).all(|r| is_complete_unit(self.row(r)))
            && (0..SIZE).all(|c| is_complete_unit(self.col(c)))
            && (0..SUBGRID).all(|br| (0..SUBGRID).all(|bc| is_complete_unit(self.block(br, bc))))
    }

    pub fn to_pretty_string(&self) -> String {
        let mut s = String::new();
        for r in 0..SIZE {
            if r % SUBGRID == 0 { s.push_str("+-------+-------+-------+\n"); }
            for c in 0..SIZE {
                if c % SUBGRID == 0 { s.push('|'); s.push(' '); }
                let d = self.get(Pos { r, c });
                s.push(if d == 0 { '·' } else { (b'0' + d) as char });
                s.push(' ');
            }
            s.push('|'); s.push('\n');
        }
        s.push_str("+-------+-------+-------+\n");
        s
    }

    pub fn iterate_cells() -> impl Iterator<Item = Pos> { (0..CELLS).map(|i| Pos { r: i / SIZE, c: i % SIZE }) }
}

pub fn is_complete_unit(vals: [Digit; SIZE]) -> bool {
    vals.into_iter().sorted().eq(1..=9)
}
