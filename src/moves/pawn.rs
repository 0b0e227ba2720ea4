// Ficheiro: src/moves/pawn.rs
// Descrição: Lógica para gerar os lances dos peões.

use crate::core::*;

const RANK_3: Bitboard = 0x0000000000FF0000;
const RANK_6: Bitboard = 0x0000FF0000000000;

/// Acrescenta o lance, expandido nas quatro promoções se chegar à última fileira.
#[inline]
fn push_pawn_move(moves: &mut Vec<Move>, from: Square, to: Square) {
    let rank = rank_of(to);
    if rank == 7 || rank == 0 {
        for piece in PROMOTION_KINDS {
            moves.push(Move::with_promotion(from, to, piece));
        }
    } else {
        moves.push(Move::new(from, to));
    }
}

/// Gera todos os lances pseudo-legais para os peões do jogador atual.
pub fn generate_pawn_moves(board: &Board) -> Vec<Move> {
    let mut moves = Vec::with_capacity(16);
    let empty = !board.occupied();

    if board.to_move == Color::White {
        let our_pawns = board.pawns & board.white_pieces;

        // Avanço simples
        let single_push = (our_pawns << 8) & empty;
        for to_sq in iter_squares(single_push) {
            push_pawn_move(&mut moves, to_sq - 8, to_sq);
        }

        // Avanço duplo (só a partir da fileira inicial, com as duas casas vazias)
        let double_push = ((single_push & RANK_3) << 8) & empty;
        for to_sq in iter_squares(double_push) {
            moves.push(Move::new(to_sq - 16, to_sq));
        }
    } else { // Lances das Pretas
        let our_pawns = board.pawns & board.black_pieces;

        let single_push = (our_pawns >> 8) & empty;
        for to_sq in iter_squares(single_push) {
            push_pawn_move(&mut moves, to_sq + 8, to_sq);
        }

        let double_push = ((single_push & RANK_6) >> 8) & empty;
        for to_sq in iter_squares(double_push) {
            moves.push(Move::new(to_sq + 16, to_sq));
        }
    }

    // Adiciona as capturas
    moves.extend(generate_pawn_captures(board));
    moves
}

/// Gera apenas os lances de captura pseudo-legais para os peões, incluindo en passant.
pub fn generate_pawn_captures(board: &Board) -> Vec<Move> {
    let mut moves = Vec::with_capacity(8);

    if board.to_move == Color::White {
        let our_pawns = board.pawns & board.white_pieces;

        // Capturas para a direita
        let captures_right = ((our_pawns & NOT_H_FILE) << 9) & board.black_pieces;
        for to_sq in iter_squares(captures_right) {
            push_pawn_move(&mut moves, to_sq - 9, to_sq);
        }

        // Capturas para a esquerda
        let captures_left = ((our_pawns & NOT_A_FILE) << 7) & board.black_pieces;
        for to_sq in iter_squares(captures_left) {
            push_pawn_move(&mut moves, to_sq - 7, to_sq);
        }

        // En passant para brancas
        if let Some(ep_target) = board.en_passant_target {
            if rank_of(ep_target) == 5 {
                if file_of(ep_target) > 0 && (our_pawns & (1u64 << (ep_target - 9))) != 0 {
                    moves.push(Move::en_passant(ep_target - 9, ep_target));
                }
                if file_of(ep_target) < 7 && (our_pawns & (1u64 << (ep_target - 7))) != 0 {
                    moves.push(Move::en_passant(ep_target - 7, ep_target));
                }
            }
        }
    } else { // Lances das Pretas
        let our_pawns = board.pawns & board.black_pieces;

        // Capturas para a direita
        let captures_right = ((our_pawns & NOT_H_FILE) >> 7) & board.white_pieces;
        for to_sq in iter_squares(captures_right) {
            push_pawn_move(&mut moves, to_sq + 7, to_sq);
        }

        // Capturas para a esquerda
        let captures_left = ((our_pawns & NOT_A_FILE) >> 9) & board.white_pieces;
        for to_sq in iter_squares(captures_left) {
            push_pawn_move(&mut moves, to_sq + 9, to_sq);
        }

        // En passant para pretas
        if let Some(ep_target) = board.en_passant_target {
            if rank_of(ep_target) == 2 {
                if file_of(ep_target) > 0 && (our_pawns & (1u64 << (ep_target + 7))) != 0 {
                    moves.push(Move::en_passant(ep_target + 7, ep_target));
                }
                if file_of(ep_target) < 7 && (our_pawns & (1u64 << (ep_target + 9))) != 0 {
                    moves.push(Move::en_passant(ep_target + 9, ep_target));
                }
            }
        }
    }
    moves
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pawn_pushes_from_start() {
        let board = Board::new();
        assert_eq!(generate_pawn_moves(&board).len(), 16);
    }

    #[test]
    fn test_blocked_pawn_has_no_push() {
        // Peão em e2 bloqueado por cavalo em e3; o duplo também fica bloqueado
        let board = Board::from_fen("4k3/8/8/8/8/4n3/4P3/4K3 w - - 0 1").unwrap();
        assert!(generate_pawn_moves(&board).is_empty());

        // Bloqueio só na casa de destino do avanço duplo
        let board = Board::from_fen("4k3/8/8/8/4n3/8/4P3/4K3 w - - 0 1").unwrap();
        assert_eq!(generate_pawn_moves(&board), vec![Move::new(12, 20)]);
    }

    #[test]
    fn test_no_double_push_off_start_rank() {
        let board = Board::from_fen("4k3/8/8/8/8/4P3/8/4K3 w - - 0 1").unwrap();
        assert_eq!(generate_pawn_moves(&board), vec![Move::new(20, 28)]);
    }

    #[test]
    fn test_captures_do_not_wrap_files() {
        // Peão em h4 não captura a6 nem a5
        let board = Board::from_fen("4k3/8/8/p7/7P/8/8/4K3 w - - 0 1").unwrap();
        assert!(generate_pawn_captures(&board).is_empty());
    }

    #[test]
    fn test_black_capture_promotion() {
        let board = Board::from_fen("4k3/8/8/8/8/8/1p6/R3K3 b - - 0 1").unwrap();
        let captures = generate_pawn_captures(&board);
        assert_eq!(captures.len(), 4);
        assert!(captures.iter().all(|m| m.from == 9 && m.to == 0 && m.promotion.is_some()));
    }

    #[test]
    fn test_black_en_passant() {
        let board = Board::from_fen("4k3/8/8/8/3pP3/8/8/4K3 b - e3 0 1").unwrap();
        let captures = generate_pawn_captures(&board);
        assert_eq!(captures.len(), 1);
        assert!(captures[0].is_en_passant);
        assert_eq!((captures[0].from, captures[0].to), (27, 20));
    }
}
