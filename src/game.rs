/*
 * 控制台对局：解析玩家输入，驱动 engine::Game
 *
 * - 玩家执红，每走一步合法棋，AI 立即替黑方应一步
 * - 命令：`fr fc tr tc`（空格或逗号分隔）、moves、new、help、quit
 * - 非法输入、非法走子都只提示，不改变局面
 */

use std::sync::LazyLock;

use engine::{AiTurn, Game, Greedy, Move, Side};
use regex::Regex;
use tracing::debug;

use crate::ui;

static MOVE_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\s*(?P<fr>\d+)[\s,]+(?P<fc>\d+)[\s,]+(?P<tr>\d+)[\s,]+(?P<tc>\d+)\s*$").unwrap());
static WORD_PATTERN: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^\s*([a-zA-Z]+)\s*$").unwrap());

pub const HELP: &str = "\
commands:
  fr fc tr tc   move the red piece at (fr,fc) to (tr,tc), e.g. `9 1 7 2` or `9,1,7,2`
  moves         list red's legal moves
  new           start a new game
  help          show this message
  quit          leave";

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum Command {
    Move(Move),
    Moves,
    New,
    Help,
    Quit,
}

impl Command {
    pub fn parse(line: &str) -> Option<Command> {
        if let Some(caps) = MOVE_PATTERN.captures(line) {
            // 数字太大解析失败时当作无法识别
            let coord = |name: &str| caps[name].parse::<i32>().ok();
            let mv = Move::new(coord("fr")?, coord("fc")?, coord("tr")?, coord("tc")?);
            return Some(Command::Move(mv));
        }
        let caps = WORD_PATTERN.captures(line)?;
        match caps[1].to_ascii_lowercase().as_str() {
            "moves" => Some(Command::Moves),
            "new" => Some(Command::New),
            "help" => Some(Command::Help),
            "quit" | "exit" => Some(Command::Quit),
            _ => None,
        }
    }
}

// 处理完一条命令后主循环是否继续
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum Flow {
    Continue,
    Quit,
}

pub struct Session {
    game: Game,
    ai: Greedy,
}

impl Session {
    pub fn new(ai: Greedy) -> Self {
        Session::with_game(Game::new(), ai)
    }

    pub fn with_game(game: Game, ai: Greedy) -> Self {
        Session { game, ai }
    }

    pub fn game(&self) -> &Game {
        &self.game
    }

    // 处理一行输入，要显示给玩家的内容都写进 out
    pub fn handle_line(&mut self, line: &str, out: &mut Vec<String>) -> Flow {
        if line.trim().is_empty() {
            return Flow::Continue;
        }
        let Some(command) = Command::parse(line) else {
            out.push(format!("unrecognised input: {}  (type `help`)", line.trim()));
            return Flow::Continue;
        };
        debug!(?command, "command");

        match command {
            Command::Move(mv) => self.human_move(mv, out),
            Command::Moves => {
                let moves: Vec<String> = self
                    .game
                    .board()
                    .legal_moves(Side::Red)
                    .iter()
                    .map(|mv| mv.to_string())
                    .collect();
                out.push(format!("{} legal moves: {}", moves.len(), moves.join(" | ")));
            }
            Command::New => {
                self.game.reset();
                out.push(ui::render(&self.game));
            }
            Command::Help => out.push(HELP.to_string()),
            Command::Quit => return Flow::Quit,
        }
        Flow::Continue
    }

    fn human_move(&mut self, mv: Move, out: &mut Vec<String>) {
        if self.game.is_ended() {
            out.push(format!("{}; type `new` to play again", ui::status_line(&self.game)));
            return;
        }
        if self.game.turn() != Side::Red {
            out.push("not your turn".to_string());
            return;
        }
        // 只能走红子
        if !self.game.board().piece_at(mv.from).is_some_and(|piece| piece.belong_to(Side::Red)) {
            out.push(format!("no red piece at {}", mv.from));
            return;
        }
        if !self.game.apply_move(mv) {
            out.push(format!("illegal move: {mv}"));
            return;
        }

        if let AiTurn::Played(reply) = self.game.play_ai_turn(&mut self.ai) {
            out.push(format!("black plays {reply}"));
        }
        out.push(ui::render(&self.game));
    }

    // 让 AI 替当前走棋方走一步，自对弈用
    pub fn step(&mut self) -> AiTurn {
        self.game.play_ai_turn(&mut self.ai)
    }
}
