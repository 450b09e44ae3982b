/*
 * 贪心 AI：只看一步
 *
 * - 枚举一方全部合法走法（Board::legal_moves）
 * - 每个走法的得分 = 被吃棋子的子力价值（不吃子为 0）+ 随机扰动
 * - 取得分最高者；没有合法走法时返回 None，由调用方判负
 *
 * 随机扰动上限小于任意两个不同子力价值之差，只会打乱同价值走法的先后
 */

use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};
use tracing::{debug, trace};

use crate::board::{Board, Move, Side};
use crate::constant::TIE_BREAK_NOISE;
use crate::error::EngineError;

// 同分走法的先后怎么定
#[derive(Clone, Copy, PartialEq, Debug, Default)]
pub enum TieBreak {
    // 系统熵做种子，不可复现
    #[default]
    Random,
    // 固定种子
    Seeded(u64),
    // 不加扰动，取扫描顺序中第一个最高分
    Deterministic,
}

#[derive(Clone, Copy, PartialEq, Debug)]
pub struct GreedyConfig {
    pub tie_break: TieBreak,
    // 扰动上限（不含），限制在 [0, 5]
    pub noise: f64,
}

impl Default for GreedyConfig {
    fn default() -> Self {
        GreedyConfig {
            tie_break: TieBreak::Random,
            noise: TIE_BREAK_NOISE,
        }
    }
}

impl GreedyConfig {
    pub fn deterministic() -> Self {
        GreedyConfig {
            tie_break: TieBreak::Deterministic,
            ..Default::default()
        }
    }

    pub fn seeded(seed: u64) -> Self {
        GreedyConfig {
            tie_break: TieBreak::Seeded(seed),
            ..Default::default()
        }
    }
}

// 候选走法及其得分
#[derive(Clone, Copy, Debug)]
struct Candidate {
    mv: Move,
    score: f64,
}

pub struct Greedy {
    rng: Option<SmallRng>,
    noise: f64,
}

impl Greedy {
    pub fn new(config: GreedyConfig) -> Result<Self, EngineError> {
        let rng = match config.tie_break {
            TieBreak::Random => {
                let mut seed = [0u8; 8];
                getrandom::getrandom(&mut seed)?;
                Some(SmallRng::seed_from_u64(u64::from_le_bytes(seed)))
            }
            TieBreak::Seeded(seed) => Some(SmallRng::seed_from_u64(seed)),
            TieBreak::Deterministic => None,
        };
        Ok(Greedy {
            rng,
            noise: config.noise.clamp(0.0, TIE_BREAK_NOISE),
        })
    }

    pub fn deterministic() -> Self {
        Greedy { rng: None, noise: 0.0 }
    }

    pub fn seeded(seed: u64) -> Self {
        Greedy {
            rng: Some(SmallRng::seed_from_u64(seed)),
            noise: TIE_BREAK_NOISE,
        }
    }

    // 吃子得分：被吃棋子的子力价值，不吃子为 0
    pub fn capture_score(board: &Board, mv: Move) -> i32 {
        board.piece_at(mv.to).map_or(0, |piece| piece.material_value())
    }

    fn jitter(&mut self) -> f64 {
        match self.rng.as_mut() {
            Some(rng) if self.noise > 0.0 => rng.gen_range(0.0..self.noise),
            _ => 0.0,
        }
    }

    pub fn choose_move(&mut self, board: &Board, side: Side) -> Option<Move> {
        let moves = board.legal_moves(side);
        trace!(side = %side, candidates = moves.len(), "scoring candidates");

        let mut best: Option<Candidate> = None;
        for mv in moves {
            let score = Greedy::capture_score(board, mv) as f64 + self.jitter();
            // 严格大于：同分时保留扫描顺序中靠前的走法
            if best.map_or(true, |b| score > b.score) {
                best = Some(Candidate { mv, score });
            }
        }

        match best {
            Some(Candidate { mv, score }) => {
                debug!(side = %side, %mv, score, "greedy choice");
                Some(mv)
            }
            None => {
                debug!(side = %side, "no legal move");
                None
            }
        }
    }
}
