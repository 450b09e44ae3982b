// 引擎的错误只出现在构造阶段：读入棋盘字形、用系统熵初始化随机数
// 走子不合法只返回 false，无子可走返回 None，都不算错误
#[derive(Debug, thiserror::Error)]
pub enum EngineError {
    #[error("expected 10 board rows, got {0}")]
    RowCount(usize),

    #[error("row {row} has {width} cells, expected 9")]
    RowWidth { row: usize, width: usize },

    #[error("unknown piece glyph '{glyph}' at ({row},{col})")]
    UnknownGlyph { row: usize, col: usize, glyph: char },

    #[error("failed to seed the move chooser from system entropy")]
    Entropy(#[from] getrandom::Error),
}
