use crate::board::{Piece, PieceType, Side};
use std::{collections::HashMap, sync::LazyLock};

pub const BOARD_WIDTH: i32 = 9;
pub const BOARD_HEIGHT: i32 = 10;

// 空格在棋盘字符串中的写法
pub const EMPTY_GLYPH: char = '.';

// 开局局面：黑方在上（第 0 行），红方在下（第 9 行）
pub const INITIAL_LAYOUT: [&str; BOARD_HEIGHT as usize] = [
    "車馬象士將士象馬車",
    ".........",
    ".砲.....砲.",
    "卒.卒.卒.卒.卒",
    ".........",
    ".........",
    "兵.兵.兵.兵.兵",
    ".炮.....炮.",
    ".........",
    "俥傌相仕帥仕相傌俥",
];

// 贪心 AI 给每个候选走法加的随机扰动上限（不含）
// 必须不大于两个不同子力价值之间的最小差值（马 45 / 炮 50）
pub const TIE_BREAK_NOISE: f64 = 5.0;

pub static GLYPH_MAP: LazyLock<HashMap<char, Piece>> = LazyLock::new(|| {
    HashMap::from([
        ('帥', Piece::new(Side::Red, PieceType::General)),
        ('仕', Piece::new(Side::Red, PieceType::Advisor)),
        ('相', Piece::new(Side::Red, PieceType::Elephant)),
        ('傌', Piece::new(Side::Red, PieceType::Horse)),
        ('俥', Piece::new(Side::Red, PieceType::Rook)),
        ('炮', Piece::new(Side::Red, PieceType::Cannon)),
        ('兵', Piece::new(Side::Red, PieceType::Soldier)),
        ('將', Piece::new(Side::Black, PieceType::General)),
        ('士', Piece::new(Side::Black, PieceType::Advisor)),
        ('象', Piece::new(Side::Black, PieceType::Elephant)),
        ('馬', Piece::new(Side::Black, PieceType::Horse)),
        ('車', Piece::new(Side::Black, PieceType::Rook)),
        ('砲', Piece::new(Side::Black, PieceType::Cannon)),
        ('卒', Piece::new(Side::Black, PieceType::Soldier)),
    ])
});
