/*
 * 文本棋盘
 *
 * - 10 行 9 列，每格一个全角字符，空格子画成 ＋
 * - 行号在左，列号在上
 * - 上一步的起点画成 〇，另起一行写出上一步
 * - 最后一行是状态：轮到谁走，或者谁赢了
 */

use std::fmt::Write;

use engine::{EndReason, Game, Position, Status};

const EMPTY_CELL: char = '＋';
const VACATED_CELL: char = '〇';
const COLUMN_DIGITS: [char; 9] = ['０', '１', '２', '３', '４', '５', '６', '７', '８'];

pub fn render(game: &Game) -> String {
    let mut out = String::new();
    let vacated = game.last_move().map(|mv| mv.from);

    out.push_str("   ");
    out.extend(COLUMN_DIGITS.iter());
    out.push('\n');

    for (row, line) in game.board().rows().enumerate() {
        let _ = write!(out, "{row:>2} ");
        for (col, cell) in line.iter().enumerate() {
            let pos = Position::new(row as i32, col as i32);
            let glyph = match cell {
                Some(piece) => piece.glyph(),
                None if vacated == Some(pos) => VACATED_CELL,
                None => EMPTY_CELL,
            };
            out.push(glyph);
        }
        out.push('\n');
        // 楚河汉界
        if row == 4 {
            out.push_str("   ～～楚河　汉界～～\n");
        }
    }

    if let Some(mv) = game.last_move() {
        let _ = writeln!(out, "last move: {mv}");
    }
    out.push_str(&status_line(game));
    out.push('\n');
    out
}

pub fn status_line(game: &Game) -> String {
    match game.status() {
        Status::InProgress => format!("{} to move", game.turn()),
        Status::Ended(outcome) => {
            let reason = match outcome.reason {
                EndReason::GeneralCaptured => "general captured",
                EndReason::NoLegalMoves => "no legal moves",
            };
            format!("{} wins ({reason})", outcome.winner)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use engine::{Board, Move, Piece, PieceType, Side};

    #[test]
    fn test_render_initial() {
        let text = render(&Game::new());
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines.len(), 13);
        assert_eq!(lines[0], "   ０１２３４５６７８");
        assert_eq!(lines[1], " 0 車馬象士將士象馬車");
        assert_eq!(lines[3], " 2 ＋砲＋＋＋＋＋砲＋");
        assert_eq!(lines[11], " 9 俥傌相仕帥仕相傌俥");
        assert_eq!(lines[12], "Red to move");
        assert!(!text.contains("last move"));
    }

    #[test]
    fn test_render_marks_last_move() {
        let mut game = Game::new();
        assert!(game.apply_move(Move::new(9, 0, 7, 0)));
        let text = render(&game);
        assert!(text.contains(" 9 〇傌相仕帥仕相傌俥"));
        assert!(text.contains(" 7 俥炮＋＋＋＋＋炮＋"));
        assert!(text.contains("last move: 9 0 7 0"));
        assert!(text.ends_with("Black to move\n"));
    }

    #[test]
    fn test_status_line_after_capture() {
        let mut board = Board::empty();
        board.set_piece(Position::new(0, 3), Some(Piece::Black(PieceType::General)));
        board.set_piece(Position::new(9, 5), Some(Piece::Red(PieceType::General)));
        board.set_piece(Position::new(5, 3), Some(Piece::Red(PieceType::Rook)));
        let mut game = Game::from_board(board, Side::Red);
        assert!(game.apply_move(Move::new(5, 3, 0, 3)));
        assert_eq!(status_line(&game), "Red wins (general captured)");
    }
}
