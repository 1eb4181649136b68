use gridfall::game::piece::{collides, rotate};
use gridfall::game::{Board, Cell, Piece, PieceKind};

#[test]
fn rotate_follows_clockwise_mapping() {
    // T matrix: bar on top, stem pointing down
    let t = PieceKind::T.cells();
    let rotated = rotate(&t);

    // 2x3 in, 3x2 out, stem now pointing left
    assert_eq!(
        rotated,
        vec![
            vec![false, true],
            vec![true, true],
            vec![false, true],
        ]
    );
}

#[test]
fn rotate_bar_between_horizontal_and_vertical() {
    let horizontal = PieceKind::I.cells();
    assert_eq!(horizontal, vec![vec![true, true, true, true]]);

    let vertical = rotate(&horizontal);
    assert_eq!(
        vertical,
        vec![vec![true], vec![true], vec![true], vec![true]]
    );

    assert_eq!(rotate(&vertical), horizontal);
}

#[test]
fn four_rotations_are_identity() {
    for kind in [
        PieceKind::T,
        PieceKind::S,
        PieceKind::Z,
        PieceKind::J,
        PieceKind::L,
        PieceKind::O,
        PieceKind::I,
    ] {
        let original = kind.cells();
        let mut cells = original.clone();
        for _ in 0..4 {
            cells = rotate(&cells);
        }
        assert_eq!(cells, original, "{:?} should return to canonical", kind);
    }
}

#[test]
fn rotate_does_not_mutate_input() {
    let original = PieceKind::J.cells();
    let copy = original.clone();
    let _ = rotate(&original);
    assert_eq!(original, copy);
}

#[test]
fn square_is_symmetric_under_rotation() {
    let o = PieceKind::O.cells();
    assert_eq!(rotate(&o), o);
}

#[test]
fn collides_at_walls_and_floor() {
    let board = Board::new();
    let dot = vec![vec![true]];

    assert!(collides(&board, &dot, -1, 5));
    assert!(collides(&board, &dot, 10, 5));
    assert!(collides(&board, &dot, 5, 20));

    // Above the top over empty space is legal
    assert!(!collides(&board, &dot, 5, -1));
    assert!(!collides(&board, &dot, 5, 5));
}

#[test]
fn collides_with_locked_cells() {
    let mut board = Board::new();
    board.cells[10][5] = Cell::Filled(PieceKind::Z);
    let dot = vec![vec![true]];

    assert!(collides(&board, &dot, 5, 10));
    assert!(!collides(&board, &dot, 5, 9));
}

#[test]
fn empty_shape_cells_never_collide() {
    let mut board = Board::new();
    // T's bottom row is [0,1,0]; a locked cell under an empty corner is fine
    board.cells[1][0] = Cell::Filled(PieceKind::J);
    let t = PieceKind::T.cells();
    assert!(!collides(&board, &t, 0, 0));

    // Width-3 shape fits flush against the right wall but not past it
    assert!(!collides(&board, &t, 7, 5));
    assert!(collides(&board, &t, 8, 5));
}

#[test]
fn bar_spawns_centered_without_collision() {
    let board = Board::new();
    let piece = Piece::new(PieceKind::I);

    assert_eq!(piece.x, 3);
    assert_eq!(piece.y, 0);
    assert!(!collides(&board, &piece.cells, piece.x, piece.y));
}

#[test]
fn spawn_positions_are_centered_per_width() {
    // x = width/2 - shape_width/2 with integer division
    assert_eq!(Piece::new(PieceKind::O).x, 4); // width 2
    assert_eq!(Piece::new(PieceKind::T).x, 4); // width 3
    assert_eq!(Piece::new(PieceKind::I).x, 3); // width 4
}

#[test]
fn color_is_derived_from_kind() {
    let mut piece = Piece::new(PieceKind::S);
    let before = piece.color();
    piece.cells = rotate(&piece.cells);
    assert_eq!(piece.color(), before);
}
