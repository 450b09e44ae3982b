use std::io::{self, BufRead, Write};

use anyhow::Context;
use clap::Parser;
use engine::{AiTurn, Greedy, GreedyConfig, TieBreak};
use tracing::info;
use tracing_subscriber::EnvFilter;

use crate::game::{Flow, Session};

mod game;
mod ui;

#[derive(Parser, Debug)]
#[command(about = "象棋：玩家执红，贪心 AI 执黑")]
struct Arguments {
    /// Seed for the AI's tie-break noise; games with the same seed replay identically.
    #[arg(long)]
    seed: Option<u64>,
    /// No tie-break noise: the AI always takes the first best move.
    #[arg(long, conflicts_with = "seed")]
    deterministic: bool,
    /// Let the AI play Red as well and watch the game.
    #[arg(long)]
    ai_red: bool,
    /// Self-play stops after this many plies.
    #[arg(long, default_value_t = 300)]
    max_plies: u32,
}

impl Arguments {
    fn greedy_config(&self) -> GreedyConfig {
        let tie_break = match (self.deterministic, self.seed) {
            (true, _) => TieBreak::Deterministic,
            (false, Some(seed)) => TieBreak::Seeded(seed),
            (false, None) => TieBreak::Random,
        };
        GreedyConfig {
            tie_break,
            ..Default::default()
        }
    }
}

fn main() -> anyhow::Result<()> {
    let arguments = Arguments::parse();

    // 日志写到 stderr，stdout 只留给棋盘
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .with_writer(io::stderr)
        .init();

    let config = arguments.greedy_config();
    info!(?config, "starting");
    let ai = Greedy::new(config).context("failed to seed the AI")?;
    let mut session = Session::new(ai);

    if arguments.ai_red {
        self_play(&mut session, arguments.max_plies)
    } else {
        play(&mut session)
    }
}

fn play(session: &mut Session) -> anyhow::Result<()> {
    let stdin = io::stdin();
    let mut stdout = io::stdout().lock();
    writeln!(stdout, "{}", ui::render(session.game()))?;
    writeln!(stdout, "{}", game::HELP)?;

    let mut out = Vec::new();
    for line in stdin.lock().lines() {
        let line = line.context("failed to read stdin")?;
        out.clear();
        let flow = session.handle_line(&line, &mut out);
        for message in &out {
            writeln!(stdout, "{message}")?;
        }
        if flow == Flow::Quit {
            break;
        }
        stdout.flush()?;
    }
    Ok(())
}

fn self_play(session: &mut Session, max_plies: u32) -> anyhow::Result<()> {
    let mut stdout = io::stdout().lock();
    writeln!(stdout, "{}", ui::render(session.game()))?;
    for ply in 1..=max_plies {
        let AiTurn::Played(mv) = session.step() else {
            break;
        };
        writeln!(stdout, "#{ply}: {mv}")?;
        writeln!(stdout, "{}", ui::render(session.game()))?;
    }
    writeln!(stdout, "{}", ui::status_line(session.game()))?;
    Ok(())
}
