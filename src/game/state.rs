use std::time::Duration;

use crate::constants::{DROP_INTERVAL, SCORE_PER_LINE};
use crate::game::board::Board;
use crate::game::piece::{collides, rotate, Piece, PieceKind};
use crate::input::Command;

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum Phase {
    Falling,
    GameOver,
}

/// The whole game state: board, active piece, score, and gravity timing.
/// Everything is mutated on the single control thread; the renderer only
/// reads a snapshot after a frame's mutation is done.
pub struct Game {
    pub board: Board,
    pub piece: Piece,
    pub score: u32,
    pub lines: u32,
    pub phase: Phase,
    pub drop_accumulator: Duration,
}

impl Game {
    pub fn new() -> Self {
        let mut game = Self {
            board: Board::new(),
            piece: Piece::new(PieceKind::random()),
            score: 0,
            lines: 0,
            phase: Phase::Falling,
            drop_accumulator: Duration::ZERO,
        };
        // A spawn onto an empty board never collides, but keep the check in
        // one place.
        if collides(&game.board, &game.piece.cells, game.piece.x, game.piece.y) {
            game.phase = Phase::GameOver;
        }
        game
    }

    pub fn reset(&mut self) {
        *self = Game::new();
    }

    /// Apply one player command. Illegal moves and rotations are silently
    /// rejected; the piece stays where it was. Ignored entirely once the
    /// game is over.
    pub fn handle_command(&mut self, command: Command) {
        if self.phase != Phase::Falling {
            return;
        }
        match command {
            Command::MoveLeft => {
                self.try_move(-1, 0);
            }
            Command::MoveRight => {
                self.try_move(1, 0);
            }
            // Soft drop never locks; only the gravity tick does.
            Command::SoftDrop => {
                self.try_move(0, 1);
            }
            Command::Rotate => {
                self.try_rotate();
            }
            // Quit is handled by the run loop before commands reach here.
            Command::Quit => {}
        }
    }

    /// Tentatively offset the piece; commit only if collision-free.
    pub fn try_move(&mut self, dx: i32, dy: i32) -> bool {
        let x = self.piece.x + dx;
        let y = self.piece.y + dy;
        if collides(&self.board, &self.piece.cells, x, y) {
            return false;
        }
        self.piece.x = x;
        self.piece.y = y;
        true
    }

    /// Replace the piece's matrix with its clockwise rotation if the
    /// rotated matrix fits at the unchanged position. No wall kicks:
    /// rotation simply fails near walls or stacked cells.
    pub fn try_rotate(&mut self) -> bool {
        let rotated = rotate(&self.piece.cells);
        if collides(&self.board, &rotated, self.piece.x, self.piece.y) {
            return false;
        }
        self.piece.cells = rotated;
        true
    }

    /// Feed elapsed frame time into the gravity accumulator; once it
    /// exceeds the drop interval, fire one tick and reset to zero (excess
    /// time is discarded, not carried over).
    pub fn advance(&mut self, dt: Duration) {
        if self.phase != Phase::Falling {
            return;
        }
        self.drop_accumulator += dt;
        if self.drop_accumulator > DROP_INTERVAL {
            self.drop_accumulator = Duration::ZERO;
            self.tick();
        }
    }

    /// One gravity step: move down if possible, otherwise lock the piece,
    /// clear completed rows, score them, and spawn the next piece.
    pub fn tick(&mut self) {
        if self.try_move(0, 1) {
            return;
        }
        self.board.lock(&self.piece);
        let cleared = self.board.clear_completed_rows();
        self.score += SCORE_PER_LINE * cleared;
        self.lines += cleared;
        self.spawn_piece();
    }

    /// Spawn a fresh random piece, centered at the top. If it already
    /// collides, the stack has reached the spawn area and the game is over.
    pub fn spawn_piece(&mut self) {
        self.piece = Piece::new(PieceKind::random());
        if collides(&self.board, &self.piece.cells, self.piece.x, self.piece.y) {
            self.phase = Phase::GameOver;
        }
    }
}

impl Default for Game {
    fn default() -> Self {
        Self::new()
    }
}
