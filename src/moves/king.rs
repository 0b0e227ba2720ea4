// Ficheiro: src/moves/king.rs
// Descrição: Lógica para gerar os lances do Rei, incluindo o roque.

use crate::core::*;
use super::push_targets;

/// Gera a tabela de ataques de rei para todas as 64 casas.
const fn generate_king_attacks_table() -> [Bitboard; 64] {
    let mut attacks = [0u64; 64];
    let mut square = 0;

    while square < 64 {
        let king_pos = 1u64 << square;
        let mut attack_bb = 0u64;
        let s = square as i8;

        // Movimentos de um passo em todas as 8 direções.
        if s % 8 > 0 { attack_bb |= king_pos >> 1; } // Esquerda
        if s % 8 < 7 { attack_bb |= king_pos << 1; } // Direita
        if s / 8 > 0 { attack_bb |= king_pos >> 8; } // Baixo
        if s / 8 < 7 { attack_bb |= king_pos << 8; } // Cima
        if s % 8 > 0 && s / 8 > 0 { attack_bb |= king_pos >> 9; } // Baixo-Esquerda
        if s % 8 < 7 && s / 8 > 0 { attack_bb |= king_pos >> 7; } // Baixo-Direita
        if s % 8 > 0 && s / 8 < 7 { attack_bb |= king_pos << 7; } // Cima-Esquerda
        if s % 8 < 7 && s / 8 < 7 { attack_bb |= king_pos << 9; } // Cima-Direita

        attacks[square] = attack_bb;
        square += 1;
    }

    attacks
}

/// Tabela pré-calculada de ataques de rei para cada casa do tabuleiro.
static KING_ATTACKS: [Bitboard; 64] = generate_king_attacks_table();

/// Obtém o bitboard de ataque para um rei numa dada casa usando lookup table.
#[inline]
pub fn get_king_attacks_lookup(square: u8) -> Bitboard {
    KING_ATTACKS[square as usize]
}

/// Um lado do roque: direito necessário, coluna da torre, casas que têm de
/// estar vazias e casas por onde o rei passa (incluindo o destino).
struct CastleSide {
    right: u8,
    rook_file: u8,
    king_to_file: u8,
    empty_files: &'static [u8],
    transit_files: &'static [u8],
}

const KINGSIDE: CastleSide = CastleSide {
    right: CASTLE_WHITE_KINGSIDE,
    rook_file: 7,
    king_to_file: 6,
    empty_files: &[5, 6],
    transit_files: &[5, 6],
};

const QUEENSIDE: CastleSide = CastleSide {
    right: CASTLE_WHITE_QUEENSIDE,
    rook_file: 0,
    king_to_file: 2,
    empty_files: &[1, 2, 3],
    transit_files: &[3, 2],
};

/// Gera todos os lances pseudo-legais para o rei do jogador atual.
pub fn generate_king_moves(board: &Board) -> Vec<Move> {
    let mut moves = Vec::with_capacity(10);
    let color = board.to_move;
    let our_pieces = board.color_bb(color);

    let from_sq = match board.king_square(color) {
        Some(sq) => sq,
        None => return moves, // Não há rei no tabuleiro (impossível em jogo normal)
    };

    push_targets(&mut moves, from_sq, get_king_attacks_lookup(from_sq) & !our_pieces);

    // Lógica de roque: o rei não pode estar em xeque
    if !board.is_king_in_check(color) {
        for side in [&KINGSIDE, &QUEENSIDE] {
            if let Some(mv) = castling_move(board, color, from_sq, side) {
                moves.push(mv);
            }
        }
    }

    moves
}

fn castling_move(board: &Board, color: Color, king_sq: Square, side: &CastleSide) -> Option<Move> {
    // Os bits das pretas estão dois acima dos das brancas
    let right = match color {
        Color::White => side.right,
        Color::Black => side.right << 2,
    };
    if (board.castling_rights & right) == 0 {
        return None;
    }

    let base = color.back_rank() * 8;
    if king_sq != base + 4 {
        return None;
    }

    let rook = Piece::new(PieceKind::Rook, color);
    if board.piece_at(base + side.rook_file) != Some(rook) {
        return None;
    }

    let all_pieces = board.occupied();
    if side.empty_files.iter().any(|&file| (all_pieces & (1u64 << (base + file))) != 0) {
        return None;
    }

    if side.transit_files.iter().any(|&file| board.is_square_attacked_by(base + file, !color)) {
        return None;
    }

    Some(Move::castling(king_sq, base + side.king_to_file))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_king_attacks_corner_and_center() {
        assert_eq!(get_king_attacks_lookup(0).count_ones(), 3);
        assert_eq!(get_king_attacks_lookup(63).count_ones(), 3);
        assert_eq!(get_king_attacks_lookup(27).count_ones(), 8);
    }

    #[test]
    fn test_both_castles_offered_independently() {
        let board = Board::from_fen("r3k2r/8/8/8/8/8/8/R3K2R b KQkq - 0 1").unwrap();
        let castles: Vec<Move> = generate_king_moves(&board).into_iter().filter(|m| m.is_castling).collect();
        assert_eq!(castles.len(), 2);
        assert!(castles.contains(&Move::new(60, 62)));
        assert!(castles.contains(&Move::new(60, 58)));
    }

    #[test]
    fn test_no_castle_without_right_or_rook() {
        let board = Board::from_fen("4k3/8/8/8/8/8/8/R3K2R w - - 0 1").unwrap();
        assert!(generate_king_moves(&board).iter().all(|m| !m.is_castling));

        // Direito presente mas sem torre em h1
        let board = Board::from_fen("4k3/8/8/8/8/8/8/R3K3 w KQ - 0 1").unwrap();
        let castles: Vec<Move> = generate_king_moves(&board).into_iter().filter(|m| m.is_castling).collect();
        assert_eq!(castles, vec![Move::new(4, 2)]);
    }

    #[test]
    fn test_queenside_b_file_may_be_attacked() {
        // Torre preta em b8 ataca b1, que o rei não atravessa
        let board = Board::from_fen("1r2k3/8/8/8/8/8/8/R3K3 w Q - 0 1").unwrap();
        assert!(generate_king_moves(&board).iter().any(|m| m.is_castling));
    }
}
