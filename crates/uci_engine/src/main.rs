use chess_core::{
    move_to_uci, parse_go, parse_setoption, set_position_from_uci, Board, Engine,
};
use heuristic_engine::{HeuristicConfig, HeuristicEngine};
use std::io::{self, BufRead, Write};
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

/// Optional first argument: a TOML file with heuristic settings.
fn load_config() -> HeuristicConfig {
    let Some(path) = std::env::args().nth(1) else {
        return HeuristicConfig::default();
    };
    match HeuristicConfig::load(&path) {
        Ok(config) => {
            info!(%path, "loaded heuristic config");
            config
        }
        Err(err) => {
            warn!(%path, %err, "falling back to default heuristic config");
            HeuristicConfig::default()
        }
    }
}

fn main() {
    // stdout belongs to the UCI protocol, logs go to stderr.
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(io::stderr)
        .init();

    let stdin = io::stdin();
    let mut stdout = io::stdout();

    let mut engine = HeuristicEngine::with_config(load_config());
    let mut board = Board::default();

    for line in stdin.lock().lines() {
        let line = match line {
            Ok(l) => l,
            Err(_) => break,
        };
        let parts: Vec<&str> = line.split_whitespace().collect();
        if parts.is_empty() {
            continue;
        }

        match parts[0] {
            "uci" => {
                writeln!(stdout, "id name {}", engine.name()).ok();
                writeln!(stdout, "id author {}", engine.author()).ok();
                for option in engine.options() {
                    writeln!(stdout, "{option}").ok();
                }
                writeln!(stdout, "uciok").ok();
                stdout.flush().ok();
            }
            "isready" => {
                writeln!(stdout, "readyok").ok();
                stdout.flush().ok();
            }
            "setoption" => match parse_setoption(&parts[1..]) {
                Some((name, value)) => {
                    engine.set_option(&name, &value);
                }
                None => warn!(%line, "malformed setoption"),
            },
            "ucinewgame" => {
                board = Board::default();
                engine.new_game();
            }
            "position" => {
                if let Err(err) = set_position_from_uci(&mut board, &parts[1..]) {
                    warn!(%err, "keeping previous position");
                }
            }
            "go" => {
                let limits = parse_go(&parts[1..], board.side_to_move());
                let result = engine.search(&board, limits);
                match result.best_move {
                    Some(mv) => {
                        writeln!(
                            stdout,
                            "info depth {} score cp {} nodes {}",
                            result.depth, result.score, result.nodes
                        )
                        .ok();
                        writeln!(stdout, "bestmove {}", move_to_uci(&board, mv)).ok();
                    }
                    None => {
                        writeln!(stdout, "bestmove 0000").ok(); // no moves
                    }
                }
                stdout.flush().ok();
            }
            "quit" => break,
            _ => {
                // ignore unknown commands
            }
        }
    }
}
