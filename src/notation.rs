// Ficheiro: src/notation.rs
// Descrição: Texto de entrada e saída: lances em notação de coordenadas,
// listas de lances, histórico, estado da partida e desenho do tabuleiro.

use std::fmt;

use crate::core::*;
use crate::error::NotationError;

/// Interpreta "e2e4" ou "e7e8q" (promoção q, r, b ou n). Ignora espaços e maiúsculas.
pub fn parse_move_text(text: &str) -> Result<(Square, Square, Option<PieceKind>), NotationError> {
    let text = text.trim().to_ascii_lowercase();
    if !text.is_ascii() || text.len() < 4 || text.len() > 5 {
        return Err(NotationError::WrongLength(text));
    }

    let from = parse_square(&text[0..2]).ok_or_else(|| NotationError::InvalidSquare(text[0..2].to_string()))?;
    let to = parse_square(&text[2..4]).ok_or_else(|| NotationError::InvalidSquare(text[2..4].to_string()))?;

    let promotion = match text[4..].chars().next() {
        None => None,
        Some(ch) => match PieceKind::from_char(ch) {
            Some(kind) if PROMOTION_KINDS.contains(&kind) => Some(kind),
            _ => return Err(NotationError::InvalidPromotion(ch)),
        },
    };

    Ok((from, to, promotion))
}

/// Procura entre os lances legais o que corresponde ao texto.
pub fn find_legal_move(board: &Board, text: &str) -> Result<Move, NotationError> {
    let (from, to, promotion) = parse_move_text(text)?;
    let wanted = Move { promotion, ..Move::new(from, to) };
    board
        .generate_legal_moves()
        .into_iter()
        .find(|mv| *mv == wanted)
        .ok_or_else(|| NotationError::NoLegalMove(text.trim().to_string()))
}

/// "Available moves: e2e4, d2d4 ... and 18 more"
pub fn format_move_list(moves: &[Move], max_moves: usize) -> String {
    if moves.is_empty() {
        return "No legal moves available".to_string();
    }
    let shown: Vec<String> = moves.iter().take(max_moves).map(|mv| mv.to_string()).collect();
    let mut result = format!("Available moves: {}", shown.join(", "));
    if moves.len() > max_moves {
        result.push_str(&format!(" ... and {} more", moves.len() - max_moves));
    }
    result
}

/// Últimos `last_n` lances numerados, assumindo que a partida começou com as brancas.
pub fn format_history(history: &[Move], last_n: usize) -> String {
    if history.is_empty() {
        return "No moves played yet".to_string();
    }

    let start = history.len().saturating_sub(last_n);
    let mut entries: Vec<String> = Vec::new();
    for (offset, mv) in history[start..].iter().enumerate() {
        let ply = start + offset; // 0 = primeiro lance das brancas
        let number = ply / 2 + 1;
        if ply % 2 == 0 {
            entries.push(format!("{}. {}", number, mv));
        } else {
            match entries.last_mut() {
                Some(last) => {
                    last.push(' ');
                    last.push_str(&mv.to_string());
                }
                None => entries.push(format!("{}... {}", number, mv)),
            }
        }
    }
    format!("Recent moves: {}", entries.join(" "))
}

/// Resumo do estado: resultado, ou quem joga, xeque e número de lances legais.
pub fn status_line(board: &Board) -> String {
    if let Some(outcome) = board.outcome() {
        return outcome.to_string();
    }
    let mut status = format!("{} to move", board.to_move);
    if board.is_king_in_check(board.to_move) {
        status.push_str(" (in check)");
    }
    status.push_str(&format!(" - {} legal moves", board.generate_legal_moves().len()));
    status
}

/// Desenha o tabuleiro em ASCII. Com `flip`, do ponto de vista das pretas.
pub fn render_board(board: &Board, flip: bool) -> String {
    let files = if flip { "    h  g  f  e  d  c  b  a" } else { "    a  b  c  d  e  f  g  h" };
    let mut out = String::new();
    out.push_str(files);
    out.push('\n');
    out.push_str("  ");
    out.push_str(&"+".repeat(25));
    out.push('\n');

    let ranks: Vec<i8> = if flip { (0..8).collect() } else { (0..8).rev().collect() };
    let file_order: Vec<i8> = if flip { (0..8).rev().collect() } else { (0..8).collect() };

    for &rank in &ranks {
        out.push_str(&format!("{} |", rank + 1));
        for &file in &file_order {
            match board.piece_at_coords(file, rank) {
                Some(piece) => out.push_str(&format!(" {} ", piece.to_char())),
                // Casas claras com ponto
                None if (file + rank) % 2 == 1 => out.push_str(" . "),
                None => out.push_str("   "),
            }
        }
        out.push_str(&format!("| {}\n", rank + 1));
    }

    out.push_str("  ");
    out.push_str(&"+".repeat(25));
    out.push('\n');
    out.push_str(files);
    out.push('\n');
    out
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&render_board(self, false))
    }
}
