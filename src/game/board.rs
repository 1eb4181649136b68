use crate::constants::{BOARD_WIDTH, BOARD_HEIGHT};
use crate::game::piece::{Piece, PieceKind};

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum Cell {
    Empty,
    Filled(PieceKind),
}

/// Fixed 10x20 grid of locked cells. Dimensions never change.
#[derive(Clone, Debug)]
pub struct Board {
    pub cells: [[Cell; BOARD_WIDTH]; BOARD_HEIGHT],
}

impl Board {
    pub fn new() -> Self {
        Self {
            cells: [[Cell::Empty; BOARD_WIDTH]; BOARD_HEIGHT],
        }
    }

    /// Whether (x, y) blocks a piece cell. Out of bounds horizontally or
    /// below the bottom counts as occupied; above the top (y < 0) does NOT,
    /// since pieces spawn and rotate partially above row 0.
    pub fn is_occupied(&self, x: i32, y: i32) -> bool {
        if x < 0 || x >= BOARD_WIDTH as i32 || y >= BOARD_HEIGHT as i32 {
            return true;
        }
        if y < 0 {
            return false;
        }
        self.cells[y as usize][x as usize] != Cell::Empty
    }

    /// Merge the piece's filled cells into the grid at its current offset.
    /// The caller guarantees the position passed `collides` immediately
    /// prior, so no bounds check here.
    pub fn lock(&mut self, piece: &Piece) {
        for (row, shape_row) in piece.cells.iter().enumerate() {
            for (col, &filled) in shape_row.iter().enumerate() {
                if filled {
                    let x = (piece.x + col as i32) as usize;
                    let y = (piece.y + row as i32) as usize;
                    self.cells[y][x] = Cell::Filled(piece.kind);
                }
            }
        }
    }

    /// Remove every fully occupied row, inserting a fresh empty row at the
    /// top for each so rows above shift down by one. Scans top to bottom;
    /// a clear leaves already-scanned rows' indices untouched, so multiple
    /// rows (adjacent or not) all clear in one pass. Returns the count.
    pub fn clear_completed_rows(&mut self) -> u32 {
        let mut cleared = 0;
        for y in 0..BOARD_HEIGHT {
            if self.cells[y].iter().all(|&cell| cell != Cell::Empty) {
                for row in (1..=y).rev() {
                    self.cells[row] = self.cells[row - 1];
                }
                self.cells[0] = [Cell::Empty; BOARD_WIDTH];
                cleared += 1;
            }
        }
        cleared
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}
