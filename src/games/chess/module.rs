//! The chess rule module.

use tracing::{debug, warn};

use crate::board::{Board, ChessPiece, Occupant, PieceKind};
use crate::core::{Move, Position, Side, SideMap};
use crate::events::GameEvent;
use crate::rules::RuleModule;

use super::movegen;

/// Places the standard 32-piece array and governs every chess piece on the
/// board.
///
/// Piece ids are `chess_0`, `chess_1`, ... in placement order. The counter
/// restarts on every registration, so two games built the same way carry the
/// same ids.
///
/// The full array needs a board at least 8 columns wide and 4 rows tall, which
/// [`ChessGameBuilder`](super::ChessGameBuilder) enforces. Registered on a
/// smaller board, pieces whose squares fall off the edge are skipped and a
/// warning is logged.
#[derive(Clone, Debug, Default)]
pub struct ChessModule {
    next_id: u32,
}

impl ChessModule {
    pub const ID: &'static str = "chess";

    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// The chess piece at `pos`, if any.
    #[must_use]
    pub fn piece_at(board: &Board, pos: Position) -> Option<&ChessPiece> {
        board.get_occupant(pos).and_then(Occupant::as_chess)
    }

    fn allocate_id(&mut self) -> String {
        let id = format!("chess_{}", self.next_id);
        self.next_id += 1;
        id
    }

    fn place(&mut self, board: &mut Board, row: i32, col: i32, kind: PieceKind, side: Side) -> bool {
        let pos = Position::new(row, col);
        if !board.in_bounds(pos) {
            return false;
        }
        let piece = ChessPiece::new(self.allocate_id(), kind, side);
        board.set_occupant(pos, piece.into())
    }

    /// Black on rows 0 and 1, White on the last two rows. Files 0 to 7.
    /// Returns how many pieces did not fit on the board.
    fn place_initial_pieces(&mut self, board: &mut Board) -> usize {
        let last = board.rows() as i32 - 1;
        let mut skipped = 0;

        for (col, &kind) in PieceKind::BACK_RANK.iter().enumerate() {
            let col = col as i32;
            skipped += usize::from(!self.place(board, 0, col, kind, Side::Black));
            skipped += usize::from(!self.place(board, 1, col, PieceKind::Pawn, Side::Black));
        }
        for (col, &kind) in PieceKind::BACK_RANK.iter().enumerate() {
            let col = col as i32;
            skipped += usize::from(!self.place(board, last, col, kind, Side::White));
            skipped += usize::from(!self.place(board, last - 1, col, PieceKind::Pawn, Side::White));
        }
        skipped
    }
}

impl RuleModule for ChessModule {
    fn id(&self) -> &str {
        Self::ID
    }

    fn on_register(&mut self, board: &mut Board) {
        self.next_id = 0;
        let skipped = self.place_initial_pieces(board);
        if skipped > 0 {
            warn!(
                skipped,
                rows = board.rows(),
                cols = board.cols(),
                "board too small for the full chess array"
            );
        }
        debug!(pieces = self.next_id, "placed chess array");
    }

    fn get_valid_moves(&self, board: &Board, pos: Position) -> Vec<Position> {
        match Self::piece_at(board, pos) {
            Some(piece) => movegen::destinations(board, pos, piece).into_vec(),
            None => Vec::new(),
        }
    }

    fn on_move(&mut self, board: &mut Board, mv: Move) -> Vec<GameEvent> {
        let legal = match Self::piece_at(board, mv.from) {
            Some(piece) => movegen::destinations(board, mv.from, piece).contains(&mv.to),
            None => return Vec::new(),
        };
        if !legal {
            debug!(%mv, "ignoring illegal chess move");
            return Vec::new();
        }

        let captured = board.move_occupant(mv.from, mv.to);
        let Some(mover) = board.occupant_mut(mv.to) else {
            return Vec::new();
        };
        if let Some(piece) = mover.as_chess_mut() {
            piece.has_moved = true;
        }
        let mover = mover.clone();

        let mut events = Vec::with_capacity(2);
        if let Some(captured) = captured {
            debug!(captured = %captured.id(), by = %mover.id(), at = %mv.to, "capture");
            events.push(GameEvent::captured(captured, mover.clone(), mv.to));
        }
        events.push(GameEvent::moved(mover, mv.from, mv.to));
        events
    }

    /// A side loses when it has no king left. White is checked first.
    fn check_win_condition(&self, board: &Board) -> Option<Side> {
        let mut kings = SideMap::with_value(0usize);
        for (king, _) in board.find_occupants(|o, _| {
            o.as_chess().is_some_and(|p| p.kind == PieceKind::King)
        }) {
            kings[king.side()] += 1;
        }

        if kings[Side::White] == 0 {
            Some(Side::Black)
        } else if kings[Side::Black] == 0 {
            Some(Side::White)
        } else {
            None
        }
    }

    fn get_all_moves_for_side(&self, board: &Board, side: Side) -> Vec<Move> {
        board
            .find_occupants(|o, _| o.as_chess().is_some_and(|p| p.side == side))
            .into_iter()
            .filter_map(|(o, from)| o.as_chess().map(|p| (p, from)))
            .flat_map(|(piece, from)| {
                movegen::destinations(board, from, piece)
                    .into_iter()
                    .map(move |to| Move::new(from, to))
            })
            .collect()
    }
}
