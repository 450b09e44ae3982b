/*
 * 象棋棋盘模块（Board 与棋子表示）
 *
 * 设计要点
 * - 棋盘尺寸为 9 列 x 10 行，黑方在上（第 0 行），红方在下（第 9 行）
 * - 棋子用 Piece 枚举表示：Red/Black 携带具体棋种 PieceType，格子为空时用 None
 * - 棋子字形（俥/車 等）只在构造时经 GLYPH_MAP 解析一次，之后只比较枚举
 * - Position 为行列坐标，行列从 0 开始，可以越界（越界的格子视为空）
 * - Move 只记录起点和终点
 */

use std::fmt;

use crate::constant::{BOARD_HEIGHT, BOARD_WIDTH, EMPTY_GLYPH, GLYPH_MAP, INITIAL_LAYOUT};
use crate::error::EngineError;

#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
pub enum Side {
    Red,
    Black,
}

impl Side {
    pub fn next(&self) -> Side {
        match self {
            Side::Red => Side::Black,
            Side::Black => Side::Red,
        }
    }

    // 兵/卒前进的行方向
    pub fn forward(&self) -> i32 {
        match self {
            Side::Red => -1,
            Side::Black => 1,
        }
    }

    pub fn from_glyph(glyph: char) -> Option<Side> {
        Piece::from_glyph(glyph).map(|piece| piece.side())
    }

    pub fn name(&self) -> &'static str {
        match self {
            Side::Red => "Red",
            Side::Black => "Black",
        }
    }
}

impl fmt::Display for Side {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
pub enum PieceType {
    General,  // 帥/將
    Advisor,  // 仕/士
    Elephant, // 相/象
    Horse,    // 傌/馬
    Rook,     // 俥/車
    Cannon,   // 炮/砲
    Soldier,  // 兵/卒
}

impl PieceType {
    pub const ALL: [PieceType; 7] = [
        PieceType::General,
        PieceType::Advisor,
        PieceType::Elephant,
        PieceType::Horse,
        PieceType::Rook,
        PieceType::Cannon,
        PieceType::Soldier,
    ];

    // 吃掉该棋子的得分，贪心 AI 用
    pub fn material_value(&self) -> i32 {
        match self {
            PieceType::General => 10000,
            PieceType::Advisor => 20,
            PieceType::Elephant => 20,
            PieceType::Horse => 45,
            PieceType::Rook => 100,
            PieceType::Cannon => 50,
            PieceType::Soldier => 10,
        }
    }

    pub fn from_glyph(glyph: char) -> Option<PieceType> {
        Piece::from_glyph(glyph).map(|piece| piece.piece_type())
    }
}

#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
pub enum Piece {
    Red(PieceType),
    Black(PieceType),
}

impl Piece {
    pub fn new(side: Side, piece_type: PieceType) -> Self {
        match side {
            Side::Red => Piece::Red(piece_type),
            Side::Black => Piece::Black(piece_type),
        }
    }

    pub fn from_glyph(glyph: char) -> Option<Piece> {
        GLYPH_MAP.get(&glyph).copied()
    }

    pub fn side(&self) -> Side {
        match self {
            Piece::Red(_) => Side::Red,
            Piece::Black(_) => Side::Black,
        }
    }

    pub fn piece_type(&self) -> PieceType {
        match self {
            Piece::Red(pt) | Piece::Black(pt) => *pt,
        }
    }

    pub fn belong_to(&self, side: Side) -> bool {
        self.side() == side
    }

    pub fn is_general(&self) -> bool {
        self.piece_type() == PieceType::General
    }

    pub fn material_value(&self) -> i32 {
        self.piece_type().material_value()
    }

    pub fn glyph(&self) -> char {
        match self {
            Piece::Red(pt) => match pt {
                PieceType::General => '帥',
                PieceType::Advisor => '仕',
                PieceType::Elephant => '相',
                PieceType::Horse => '傌',
                PieceType::Rook => '俥',
                PieceType::Cannon => '炮',
                PieceType::Soldier => '兵',
            },
            Piece::Black(pt) => match pt {
                PieceType::General => '將',
                PieceType::Advisor => '士',
                PieceType::Elephant => '象',
                PieceType::Horse => '馬',
                PieceType::Rook => '車',
                PieceType::Cannon => '砲',
                PieceType::Soldier => '卒',
            },
        }
    }
}

#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
pub struct Position {
    pub row: i32,
    pub col: i32,
}

impl Position {
    pub fn new(row: i32, col: i32) -> Self {
        Position { row, col }
    }

    pub fn offset(&self, d_row: i32, d_col: i32) -> Self {
        Position::new(self.row + d_row, self.col + d_col)
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({},{})", self.row, self.col)
    }
}

#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
pub struct Move {
    pub from: Position, // 起手位置
    pub to: Position,   // 落子位置
}

impl Move {
    pub fn new(from_row: i32, from_col: i32, to_row: i32, to_col: i32) -> Self {
        Move {
            from: Position::new(from_row, from_col),
            to: Position::new(to_row, to_col),
        }
    }

    pub fn d_row(&self) -> i32 {
        self.to.row - self.from.row
    }

    pub fn d_col(&self) -> i32 {
        self.to.col - self.from.col
    }
}

impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {} {} {}", self.from.row, self.from.col, self.to.row, self.to.col)
    }
}

// 棋子是否在棋盘内
pub fn in_board(pos: Position) -> bool {
    pos.row >= 0 && pos.row < BOARD_HEIGHT && pos.col >= 0 && pos.col < BOARD_WIDTH
}

// 该行是否在己方的楚河汉界以内（红方 5..=9，黑方 0..=4）
pub fn in_country(row: i32, side: Side) -> bool {
    let base_row = if side == Side::Red { BOARD_HEIGHT - 1 } else { 0 };
    (row - base_row).abs() < BOARD_HEIGHT / 2
}

// 棋子是否在己方九宫格内
pub fn in_palace(pos: Position, side: Side) -> bool {
    let rows = if side == Side::Black { 0..=2 } else { 7..=9 };
    rows.contains(&pos.row) && (3..=5).contains(&pos.col)
}

type Cells = [[Option<Piece>; BOARD_WIDTH as usize]; BOARD_HEIGHT as usize];

#[derive(Clone, PartialEq, Eq)]
pub struct Board {
    cells: Cells,
}

impl Default for Board {
    fn default() -> Self {
        Board::init()
    }
}

impl Board {
    // 标准开局局面
    pub fn init() -> Self {
        let mut board = Board::empty();
        board.reset();
        board
    }

    pub fn empty() -> Self {
        Board {
            cells: [[None; BOARD_WIDTH as usize]; BOARD_HEIGHT as usize],
        }
    }

    // 用开局字形表覆盖全部 90 个格子
    pub fn reset(&mut self) {
        for (row, line) in INITIAL_LAYOUT.iter().enumerate() {
            let glyphs = line.chars().chain(std::iter::repeat(EMPTY_GLYPH));
            for (col, glyph) in glyphs.take(BOARD_WIDTH as usize).enumerate() {
                self.cells[row][col] = Piece::from_glyph(glyph);
            }
        }
    }

    // 从 10 行、每行 9 个字形的字符串构造棋盘，`.` 表示空格
    pub fn from_glyph_rows(rows: &[&str]) -> Result<Self, EngineError> {
        if rows.len() != BOARD_HEIGHT as usize {
            return Err(EngineError::RowCount(rows.len()));
        }
        let mut board = Board::empty();
        for (row, line) in rows.iter().enumerate() {
            let width = line.chars().count();
            if width != BOARD_WIDTH as usize {
                return Err(EngineError::RowWidth { row, width });
            }
            for (col, glyph) in line.chars().enumerate() {
                if glyph == EMPTY_GLYPH {
                    continue;
                }
                let piece = Piece::from_glyph(glyph).ok_or(EngineError::UnknownGlyph { row, col, glyph })?;
                board.cells[row][col] = Some(piece);
            }
        }
        Ok(board)
    }

    pub fn piece_at(&self, pos: Position) -> Option<Piece> {
        if in_board(pos) {
            self.cells[pos.row as usize][pos.col as usize]
        } else {
            None
        }
    }

    pub fn is_empty_at(&self, pos: Position) -> bool {
        self.piece_at(pos).is_none()
    }

    // 越界写入直接忽略
    pub fn set_piece(&mut self, pos: Position, piece: Option<Piece>) {
        if in_board(pos) {
            self.cells[pos.row as usize][pos.col as usize] = piece;
        }
    }

    // 把起点的棋子搬到终点，返回被吃掉的棋子
    pub fn relocate(&mut self, from: Position, to: Position) -> Option<Piece> {
        let piece = self.piece_at(from);
        let captured = self.piece_at(to);
        self.set_piece(from, None);
        self.set_piece(to, piece);
        captured
    }

    // 按行优先遍历所有有子的格子
    pub fn pieces(&self) -> impl Iterator<Item = (Position, Piece)> + '_ {
        self.cells.iter().enumerate().flat_map(|(row, line)| {
            line.iter()
                .enumerate()
                .filter_map(move |(col, cell)| cell.map(|piece| (Position::new(row as i32, col as i32), piece)))
        })
    }

    pub fn rows(&self) -> impl Iterator<Item = &[Option<Piece>; BOARD_WIDTH as usize]> {
        self.cells.iter()
    }

    // 同行或同列两个格子之间（不含两端）的棋子数
    // 既不同行也不同列的两个格子之间视为没有棋子
    pub fn count_between(&self, a: Position, b: Position) -> usize {
        if a.row == b.row {
            (a.col.min(b.col) + 1..a.col.max(b.col))
                .filter(|&col| !self.is_empty_at(Position::new(a.row, col)))
                .count()
        } else if a.col == b.col {
            (a.row.min(b.row) + 1..a.row.max(b.row))
                .filter(|&row| !self.is_empty_at(Position::new(row, a.col)))
                .count()
        } else {
            0
        }
    }

    pub fn general_position(&self, side: Side) -> Option<Position> {
        self.pieces()
            .find(|(_, piece)| piece.is_general() && piece.belong_to(side))
            .map(|(pos, _)| pos)
    }

    // 将帅照面：同一列且中间无子。任何一方的将帅不在棋盘上时不算照面
    pub fn generals_facing(&self) -> bool {
        let (Some(red), Some(black)) = (self.general_position(Side::Red), self.general_position(Side::Black)) else {
            return false;
        };
        red.col == black.col && self.count_between(red, black) == 0
    }
}

impl fmt::Debug for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for line in self.cells.iter() {
            let text: String = line
                .iter()
                .map(|cell| cell.map_or(EMPTY_GLYPH, |piece| piece.glyph()))
                .collect();
            writeln!(f, "{text}")?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_init_layout() {
        let board = Board::init();
        assert_eq!(board.piece_at(Position::new(0, 0)), Some(Piece::Black(PieceType::Rook)));
        assert_eq!(board.piece_at(Position::new(9, 8)), Some(Piece::Red(PieceType::Rook)));
        assert_eq!(board.piece_at(Position::new(0, 4)), Some(Piece::Black(PieceType::General)));
        assert_eq!(board.piece_at(Position::new(9, 4)), Some(Piece::Red(PieceType::General)));
        assert_eq!(board.piece_at(Position::new(2, 1)), Some(Piece::Black(PieceType::Cannon)));
        assert_eq!(board.piece_at(Position::new(7, 7)), Some(Piece::Red(PieceType::Cannon)));
        assert_eq!(board.piece_at(Position::new(4, 4)), None);

        for side in [Side::Red, Side::Black] {
            let count = |pt: PieceType| {
                board
                    .pieces()
                    .filter(|(_, piece)| *piece == Piece::new(side, pt))
                    .count()
            };
            assert_eq!(count(PieceType::General), 1);
            assert_eq!(count(PieceType::Advisor), 2);
            assert_eq!(count(PieceType::Elephant), 2);
            assert_eq!(count(PieceType::Horse), 2);
            assert_eq!(count(PieceType::Rook), 2);
            assert_eq!(count(PieceType::Cannon), 2);
            assert_eq!(count(PieceType::Soldier), 5);
        }
        assert_eq!(board.pieces().count(), 32);
    }

    #[test]
    fn test_reset_overwrites_everything() {
        let mut board = Board::empty();
        board.set_piece(Position::new(4, 4), Some(Piece::Red(PieceType::Rook)));
        board.reset();
        assert_eq!(board, Board::init());
    }

    #[test]
    fn test_classify_glyphs() {
        assert_eq!(PieceType::from_glyph('俥'), Some(PieceType::Rook));
        assert_eq!(PieceType::from_glyph('車'), Some(PieceType::Rook));
        assert_eq!(PieceType::from_glyph('傌'), Some(PieceType::Horse));
        assert_eq!(PieceType::from_glyph('帥'), Some(PieceType::General));
        assert_eq!(PieceType::from_glyph('卒'), Some(PieceType::Soldier));
        assert_eq!(Side::from_glyph('炮'), Some(Side::Red));
        assert_eq!(Side::from_glyph('砲'), Some(Side::Black));
        assert_eq!(Piece::from_glyph('x'), None);

        for side in [Side::Red, Side::Black] {
            for pt in PieceType::ALL {
                let piece = Piece::new(side, pt);
                assert_eq!(Piece::from_glyph(piece.glyph()), Some(piece));
            }
        }
    }

    #[test]
    fn test_in_country_and_palace() {
        assert!(in_country(5, Side::Red));
        assert!(!in_country(4, Side::Red));
        assert!(in_country(4, Side::Black));
        assert!(!in_country(5, Side::Black));
        assert!(in_palace(Position::new(7, 3), Side::Red));
        assert!(!in_palace(Position::new(2, 3), Side::Red));
        assert!(in_palace(Position::new(2, 5), Side::Black));
        assert!(!in_palace(Position::new(1, 6), Side::Black));
    }

    #[test]
    fn test_count_between() {
        let board = Board::init();
        // 黑车到红车之间：卒、兵
        assert_eq!(board.count_between(Position::new(0, 0), Position::new(9, 0)), 2);
        assert_eq!(board.count_between(Position::new(9, 0), Position::new(0, 0)), 2);
        assert_eq!(board.count_between(Position::new(0, 0), Position::new(0, 8)), 7);
        assert_eq!(board.count_between(Position::new(0, 0), Position::new(0, 1)), 0);
        assert_eq!(board.count_between(Position::new(4, 0), Position::new(4, 8)), 0);
    }

    #[test]
    fn test_generals_facing() {
        let board = Board::init();
        assert!(!board.generals_facing());

        let mut board = Board::empty();
        board.set_piece(Position::new(0, 4), Some(Piece::Black(PieceType::General)));
        board.set_piece(Position::new(9, 4), Some(Piece::Red(PieceType::General)));
        assert!(board.generals_facing());
        board.set_piece(Position::new(5, 4), Some(Piece::Red(PieceType::Horse)));
        assert!(!board.generals_facing());

        board.set_piece(Position::new(0, 4), None);
        assert!(!board.generals_facing());
    }

    #[test]
    fn test_from_glyph_rows() {
        let board = Board::from_glyph_rows(&INITIAL_LAYOUT).unwrap();
        assert_eq!(board, Board::init());

        assert!(matches!(Board::from_glyph_rows(&INITIAL_LAYOUT[..9]), Err(EngineError::RowCount(9))));

        let mut rows = INITIAL_LAYOUT;
        rows[4] = "........";
        assert!(matches!(
            Board::from_glyph_rows(&rows),
            Err(EngineError::RowWidth { row: 4, width: 8 })
        ));

        rows[4] = "....K....";
        assert!(matches!(
            Board::from_glyph_rows(&rows),
            Err(EngineError::UnknownGlyph { row: 4, col: 4, glyph: 'K' })
        ));
    }

    #[test]
    fn test_relocate_and_out_of_board() {
        let mut board = Board::init();
        let captured = board.relocate(Position::new(0, 0), Position::new(9, 0));
        assert_eq!(captured, Some(Piece::Red(PieceType::Rook)));
        assert_eq!(board.piece_at(Position::new(9, 0)), Some(Piece::Black(PieceType::Rook)));
        assert_eq!(board.piece_at(Position::new(0, 0)), None);

        assert_eq!(board.piece_at(Position::new(-1, 0)), None);
        assert_eq!(board.piece_at(Position::new(0, 9)), None);
        board.set_piece(Position::new(10, 0), Some(Piece::Red(PieceType::Rook)));
        assert_eq!(board.pieces().count(), 31);
    }
}
