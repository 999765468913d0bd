//! Per-kind destination generation.
//!
//! Generators take the piece record and its position and read the board for
//! blockers. Order is deterministic: the direction/offset tables below are
//! walked front to back.

use smallvec::SmallVec;

use crate::board::{Board, ChessPiece, PieceKind};
use crate::core::{Position, Side};

/// Destination list for one piece. Most pieces have at most eight.
pub type Destinations = SmallVec<[Position; 8]>;

pub const ROOK_DIRS: [(i32, i32); 4] = [(0, 1), (0, -1), (1, 0), (-1, 0)];

pub const BISHOP_DIRS: [(i32, i32); 4] = [(1, 1), (1, -1), (-1, 1), (-1, -1)];

pub const QUEEN_DIRS: [(i32, i32); 8] = [
    (0, 1),
    (0, -1),
    (1, 0),
    (-1, 0),
    (1, 1),
    (1, -1),
    (-1, 1),
    (-1, -1),
];

pub const KNIGHT_OFFSETS: [(i32, i32); 8] = [
    (-2, -1),
    (-2, 1),
    (-1, -2),
    (-1, 2),
    (1, -2),
    (1, 2),
    (2, -1),
    (2, 1),
];

pub const KING_STEPS: [(i32, i32); 8] = [
    (-1, -1),
    (-1, 0),
    (-1, 1),
    (0, -1),
    (0, 1),
    (1, -1),
    (1, 0),
    (1, 1),
];

/// Row delta of one forward step for `side`.
#[must_use]
pub const fn forward(side: Side) -> i32 {
    match side {
        Side::White => -1,
        Side::Black => 1,
    }
}

/// Row on which `side`'s pawns start.
#[must_use]
pub fn pawn_start_row(board: &Board, side: Side) -> i32 {
    match side {
        Side::White => board.rows() as i32 - 2,
        Side::Black => 1,
    }
}

/// Every legal destination for `piece` standing on `pos`.
#[must_use]
pub fn destinations(board: &Board, pos: Position, piece: &ChessPiece) -> Destinations {
    match piece.kind {
        PieceKind::Pawn => pawn(board, pos, piece),
        PieceKind::Rook => slide(board, pos, piece.side, &ROOK_DIRS),
        PieceKind::Bishop => slide(board, pos, piece.side, &BISHOP_DIRS),
        PieceKind::Queen => slide(board, pos, piece.side, &QUEEN_DIRS),
        PieceKind::Knight => step(board, pos, piece.side, &KNIGHT_OFFSETS),
        PieceKind::King => step(board, pos, piece.side, &KING_STEPS),
    }
}

fn is_empty(board: &Board, pos: Position) -> bool {
    board.in_bounds(pos) && board.get_occupant(pos).is_none()
}

fn is_hostile(board: &Board, pos: Position, side: Side) -> bool {
    board.get_occupant(pos).is_some_and(|o| o.side() != side)
}

fn pawn(board: &Board, pos: Position, piece: &ChessPiece) -> Destinations {
    let mut out = Destinations::new();
    let dir = forward(piece.side);

    let one = pos.offset(dir, 0);
    if is_empty(board, one) {
        out.push(one);

        let two = pos.offset(dir * 2, 0);
        let unmoved = !piece.has_moved && pos.row == pawn_start_row(board, piece.side);
        if unmoved && is_empty(board, two) {
            out.push(two);
        }
    }

    for dc in [-1, 1] {
        let diagonal = pos.offset(dir, dc);
        if is_hostile(board, diagonal, piece.side) {
            out.push(diagonal);
        }
    }

    out
}

fn slide(board: &Board, pos: Position, side: Side, dirs: &[(i32, i32)]) -> Destinations {
    let mut out = Destinations::new();
    for &(dr, dc) in dirs {
        let mut cur = pos.offset(dr, dc);
        while board.in_bounds(cur) {
            match board.get_occupant(cur) {
                None => out.push(cur),
                Some(occupant) => {
                    if occupant.side() != side {
                        out.push(cur);
                    }
                    break;
                }
            }
            cur = cur.offset(dr, dc);
        }
    }
    out
}

fn step(board: &Board, pos: Position, side: Side, offsets: &[(i32, i32)]) -> Destinations {
    offsets
        .iter()
        .map(|&(dr, dc)| pos.offset(dr, dc))
        .filter(|&to| board.in_bounds(to))
        .filter(|&to| board.get_occupant(to).map_or(true, |o| o.side() != side))
        .collect()
}
