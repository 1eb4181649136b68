use rand::Rng;
use ratatui::style::Color;

use crate::constants::BOARD_WIDTH;
use crate::game::board::Board;

/// The seven shape types. Each carries a fixed canonical matrix and a
/// distinct color; the color is always derived from the kind, never from
/// matrix identity.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum PieceKind {
    T,
    S,
    Z,
    J,
    L,
    O,
    I,
}

const ALL_KINDS: [PieceKind; 7] = [
    PieceKind::T,
    PieceKind::S,
    PieceKind::Z,
    PieceKind::J,
    PieceKind::L,
    PieceKind::O,
    PieceKind::I,
];

impl PieceKind {
    /// Uniform random choice. This is the only source of randomness in the
    /// game.
    pub fn random() -> Self {
        let mut rng = rand::thread_rng();
        ALL_KINDS[rng.gen_range(0..ALL_KINDS.len())]
    }

    /// Canonical (unrotated) shape matrix. Matrices are rectangular, not
    /// necessarily square.
    pub fn cells(self) -> Vec<Vec<bool>> {
        match self {
            PieceKind::T => vec![
                vec![true, true, true],
                vec![false, true, false],
            ],
            PieceKind::S => vec![
                vec![false, true, true],
                vec![true, true, false],
            ],
            PieceKind::Z => vec![
                vec![true, true, false],
                vec![false, true, true],
            ],
            PieceKind::J => vec![
                vec![true, false, false],
                vec![true, true, true],
            ],
            PieceKind::L => vec![
                vec![false, false, true],
                vec![true, true, true],
            ],
            PieceKind::O => vec![
                vec![true, true],
                vec![true, true],
            ],
            PieceKind::I => vec![
                vec![true, true, true, true],
            ],
        }
    }

    pub fn color(self) -> Color {
        match self {
            PieceKind::T => Color::Rgb(255, 165, 0),
            PieceKind::S => Color::Rgb(65, 105, 225),
            PieceKind::Z => Color::Rgb(0, 255, 0),
            PieceKind::J => Color::Rgb(255, 0, 0),
            PieceKind::L => Color::Rgb(128, 0, 128),
            PieceKind::O => Color::Rgb(0, 255, 255),
            PieceKind::I => Color::Rgb(255, 255, 0),
        }
    }
}

/// The currently falling piece: its kind, current (possibly rotated)
/// matrix, and the offset of the matrix's top-left cell in board space.
#[derive(Clone, Debug)]
pub struct Piece {
    pub kind: PieceKind,
    pub cells: Vec<Vec<bool>>,
    pub x: i32,
    pub y: i32,
}

impl Piece {
    /// Build a piece at the spawn position: horizontally centered, y = 0.
    pub fn new(kind: PieceKind) -> Self {
        let cells = kind.cells();
        let width = cells[0].len();
        Self {
            kind,
            cells,
            x: BOARD_WIDTH as i32 / 2 - width as i32 / 2,
            y: 0,
        }
    }

    pub fn color(&self) -> Color {
        self.kind.color()
    }
}

/// 90-degree clockwise rotation. An RxC input yields a CxR output with
/// `out[x][R-1-y] = in[y][x]`; the input is never mutated. Four
/// applications restore the original matrix.
pub fn rotate(cells: &[Vec<bool>]) -> Vec<Vec<bool>> {
    let rows = cells.len();
    let cols = cells[0].len();
    let mut rotated = vec![vec![false; rows]; cols];
    for (y, row) in cells.iter().enumerate() {
        for (x, &filled) in row.iter().enumerate() {
            rotated[x][rows - 1 - y] = filled;
        }
    }
    rotated
}

/// Whether any filled cell of `cells`, offset by (x, y), lands on an
/// occupied board position. The single legality check for horizontal
/// moves, soft drop, rotation, and spawn validity.
pub fn collides(board: &Board, cells: &[Vec<bool>], x: i32, y: i32) -> bool {
    for (row, shape_row) in cells.iter().enumerate() {
        for (col, &filled) in shape_row.iter().enumerate() {
            if filled && board.is_occupied(x + col as i32, y + row as i32) {
                return true;
            }
        }
    }
    false
}
