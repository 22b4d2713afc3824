//! What a move does on a given board: the moved piece, what it captures,
//! whether it promotes and where the moving piece actually lands.

use cozy_chess::{Board, Color, File, Move, Piece, Square};

/// Facts about a move, read off the board it is played on.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct MoveFacts {
    pub mv: Move,
    pub piece: Piece,
    pub color: Color,
    /// Captured piece, including the pawn taken en passant
    pub captured: Option<Piece>,
    pub promotion: Option<Piece>,
    /// Square the moving piece ends on. Differs from `mv.to` only for
    /// castling, which the board encodes as the king taking its own rook.
    pub landing: Square,
    pub is_castle: bool,
}

impl MoveFacts {
    /// Returns None when the start square is empty.
    pub fn of(board: &Board, mv: Move) -> Option<Self> {
        let piece = board.piece_on(mv.from)?;
        let color = board.color_on(mv.from)?;
        let target_color = board.color_on(mv.to);

        let is_castle = piece == Piece::King && target_color == Some(color);
        let captured = if target_color == Some(!color) {
            board.piece_on(mv.to)
        } else if piece == Piece::Pawn && mv.from.file() != mv.to.file() {
            // Diagonal pawn move onto an empty square
            Some(Piece::Pawn)
        } else {
            None
        };

        let landing = if is_castle {
            let file = if (mv.to.file() as u8) > (mv.from.file() as u8) {
                File::G
            } else {
                File::C
            };
            Square::new(file, mv.from.rank())
        } else {
            mv.to
        };

        Some(Self {
            mv,
            piece,
            color,
            captured,
            promotion: mv.promotion,
            landing,
            is_castle,
        })
    }
}
