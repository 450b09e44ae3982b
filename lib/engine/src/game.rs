/*
 * 对局状态：棋盘 + 走棋方 + 胜负 + 上一步
 *
 * 状态机
 * - InProgress --(任意一步合法走子)--> InProgress，走棋方轮换
 * - InProgress --(吃掉对方将帅)--> Ended(GeneralCaptured)
 * - InProgress --(轮到的一方没有合法走法)--> Ended(NoLegalMoves)，无子可走判负
 * - Ended 只能通过 reset() 离开
 */

use tracing::{debug, info};

use crate::board::{Board, Move, Side};
use crate::search::Greedy;

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum EndReason {
    GeneralCaptured,
    NoLegalMoves,
}

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub struct Outcome {
    pub winner: Side,
    pub reason: EndReason,
}

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum Status {
    InProgress,
    Ended(Outcome),
}

// AI 替当前走棋方走一步的结果
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum AiTurn {
    Played(Move),
    // 无子可走，判负
    NoLegalMove,
    // 对局已经结束，什么都没做
    Finished,
}

#[derive(Clone, Debug)]
pub struct Game {
    board: Board,
    turn: Side,
    status: Status,
    last_move: Option<Move>,
}

impl Default for Game {
    fn default() -> Self {
        Game::new()
    }
}

impl Game {
    pub fn new() -> Self {
        Game::from_board(Board::init(), Side::Red)
    }

    pub fn from_board(board: Board, turn: Side) -> Self {
        Game {
            board,
            turn,
            status: Status::InProgress,
            last_move: None,
        }
    }

    // 重新开局：棋盘复位，红方先走
    pub fn reset(&mut self) {
        self.board.reset();
        self.turn = Side::Red;
        self.status = Status::InProgress;
        self.last_move = None;
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn turn(&self) -> Side {
        self.turn
    }

    pub fn status(&self) -> Status {
        self.status
    }

    pub fn is_ended(&self) -> bool {
        matches!(self.status, Status::Ended(_))
    }

    pub fn last_move(&self) -> Option<Move> {
        self.last_move
    }

    // 对局结束后任何走子都不合法
    pub fn is_valid_move(&self, mv: Move) -> bool {
        !self.is_ended() && self.board.is_valid_move(mv)
    }

    // 合法则走子并返回 true，否则什么都不改返回 false
    // 不检查是否轮到该方走，由前端决定玩家能走哪一方
    // 走完后轮到的一方若无子可走，对局随即结束
    pub fn apply_move(&mut self, mv: Move) -> bool {
        if !self.is_valid_move(mv) {
            debug!(%mv, "rejected move");
            return false;
        }
        let Some(mover) = self.board.piece_at(mv.from).map(|piece| piece.side()) else {
            return false;
        };

        if let Some(captured) = self.board.relocate(mv.from, mv.to) {
            if captured.is_general() {
                self.finish(Outcome {
                    winner: mover,
                    reason: EndReason::GeneralCaptured,
                });
            }
        }
        self.turn = self.turn.next();
        self.last_move = Some(mv);

        if !self.is_ended() && self.board.legal_moves(self.turn).is_empty() {
            self.finish(Outcome {
                winner: mover,
                reason: EndReason::NoLegalMoves,
            });
        }
        true
    }

    // 让 AI 替当前走棋方走一步；无子可走则判负
    pub fn play_ai_turn(&mut self, ai: &mut Greedy) -> AiTurn {
        if self.is_ended() {
            return AiTurn::Finished;
        }
        let side = self.turn;
        let Some(mv) = ai.choose_move(&self.board, side) else {
            self.finish(Outcome {
                winner: side.next(),
                reason: EndReason::NoLegalMoves,
            });
            return AiTurn::NoLegalMove;
        };
        // 候选走法都经过 is_valid_move 筛选
        let accepted = self.apply_move(mv);
        debug_assert!(accepted);
        AiTurn::Played(mv)
    }

    fn finish(&mut self, outcome: Outcome) {
        info!(winner = %outcome.winner, reason = ?outcome.reason, "game over");
        self.status = Status::Ended(outcome);
    }
}
