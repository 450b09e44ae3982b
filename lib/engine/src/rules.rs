/*
 * 走法规则：判断一步棋是否合法
 *
 * 判定顺序
 * 1. 起点、终点都在棋盘内，起点不等于终点
 * 2. 起点有子，终点不是己方棋子
 * 3. 按棋种检查走法几何形状和阻挡（别马腿、塞象眼、炮架等）
 * 4. 在临时棋盘上模拟这一步，检查走后将帅是否照面
 *
 * 不检查走后己方是否被将军：被将军时照样可以走其它棋
 */

use tracing::trace;

use crate::board::{in_board, in_country, in_palace, Board, Move, Piece, PieceType, Position, Side};
use crate::constant::{BOARD_HEIGHT, BOARD_WIDTH};

impl Board {
    // 检查走子是否合法（棋种规则 + 将帅照面）
    pub fn is_valid_move(&self, mv: Move) -> bool {
        let Move { from, to } = mv;
        if !in_board(from) || !in_board(to) || from == to {
            return false;
        }

        let Some(piece) = self.piece_at(from) else {
            return false;
        };

        // 目标格子若有同色棋子则不可走
        if self.piece_at(to).is_some_and(|target| target.belong_to(piece.side())) {
            return false;
        }

        self.is_move_valid_for_piece(piece, mv) && !self.generals_facing_after(mv)
    }

    fn is_move_valid_for_piece(&self, piece: Piece, mv: Move) -> bool {
        let Move { from, to } = mv;
        let side = piece.side();
        let (d_row, d_col) = (mv.d_row(), mv.d_col());
        let (abs_row, abs_col) = (d_row.abs(), d_col.abs());

        match piece.piece_type() {
            PieceType::General => abs_row + abs_col == 1 && in_palace(to, side),
            PieceType::Advisor => abs_row == 1 && abs_col == 1 && in_palace(to, side),
            PieceType::Elephant => {
                // 象不能过河，象眼不能有子
                abs_row == 2
                    && abs_col == 2
                    && in_country(to.row, side)
                    && self.is_empty_at(from.offset(d_row / 2, d_col / 2))
            }
            PieceType::Horse => {
                // 别马脚：沿走两格的方向紧挨起点的格子
                let leg = match (abs_row, abs_col) {
                    (2, 1) => from.offset(d_row / 2, 0),
                    (1, 2) => from.offset(0, d_col / 2),
                    _ => return false,
                };
                self.is_empty_at(leg)
            }
            PieceType::Rook => (d_row == 0 || d_col == 0) && self.count_between(from, to) == 0,
            PieceType::Cannon => {
                if d_row != 0 && d_col != 0 {
                    return false;
                }
                let screens = self.count_between(from, to);
                if self.is_empty_at(to) {
                    screens == 0
                } else {
                    screens == 1
                }
            }
            PieceType::Soldier => {
                // 没过河只能前进，过了河可以左右，永远不能后退
                let forward = d_row == side.forward() && d_col == 0;
                let crossed = !in_country(from.row, side);
                forward || (crossed && d_row == 0 && abs_col == 1)
            }
        }
    }

    // 在临时棋盘上走这一步，看将帅是否照面；真实棋盘不受影响
    fn generals_facing_after(&self, mv: Move) -> bool {
        let mut scratch = self.clone();
        scratch.relocate(mv.from, mv.to);
        scratch.generals_facing()
    }

    // 枚举某一方的全部合法走子：每个己方棋子对 90 个目标格逐一调用 is_valid_move
    // 顺序为起点行、列，再目标行、列
    pub fn legal_moves(&self, side: Side) -> Vec<Move> {
        let targets: Vec<Position> = (0..BOARD_HEIGHT)
            .flat_map(|row| (0..BOARD_WIDTH).map(move |col| Position::new(row, col)))
            .collect();

        let moves: Vec<Move> = self
            .pieces()
            .filter(|(_, piece)| piece.belong_to(side))
            .flat_map(|(from, _)| targets.iter().map(move |&to| Move { from, to }))
            .filter(|&mv| self.is_valid_move(mv))
            .collect();
        trace!(side = %side, count = moves.len(), "enumerated legal moves");
        moves
    }
}
