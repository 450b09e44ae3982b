/*
 * 象棋规则引擎
 *
 * 说明
 * - board：棋子、坐标、走法与 10x9 棋盘
 * - constant：棋盘尺寸、开局字形表、子力扰动上限
 * - error：构造棋盘、初始化随机数时的错误
 * - rules：走法合法性判定与合法走法枚举
 * - game：对局状态机（走棋方、胜负、上一步）
 * - search：只看一步的贪心 AI
 */
pub mod board;
pub mod constant;
pub mod error;
pub mod game;
mod rules;
pub mod search;

pub use board::{Board, Move, Piece, PieceType, Position, Side};
pub use error::EngineError;
pub use game::{AiTurn, EndReason, Game, Outcome, Status};
pub use search::{Greedy, GreedyConfig, TieBreak};
