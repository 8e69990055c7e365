use std::env;
use std::process;

use othello_engine::board::{SearchEngine, Side};
use othello_engine::engine::{EngineController, TimeConfig};
use othello_engine::game::{EnginePlayer, FixedDepthPlayer, Game, Player, RandomPlayer};

const USAGE: &str = "usage: othello [--time SECS] [--depth N] [--white engine|depth|random] \
[--seed N] [--quiet]";

struct Options {
    time: f64,
    depth: u32,
    white: String,
    seed: u64,
    quiet: bool,
}

impl Default for Options {
    fn default() -> Self {
        Options {
            time: 1.0,
            depth: 4,
            white: "random".to_string(),
            seed: 0,
            quiet: false,
        }
    }
}

fn parse_args(args: &[String]) -> Result<Options, String> {
    let mut options = Options::default();
    let mut iter = args.iter();
    while let Some(arg) = iter.next() {
        let mut value = |name: &str| {
            iter.next()
                .cloned()
                .ok_or_else(|| format!("missing value for {name}"))
        };
        match arg.as_str() {
            "--time" => {
                options.time = value("--time")?
                    .parse()
                    .map_err(|e| format!("invalid --time: {e}"))?;
            }
            "--depth" => {
                options.depth = value("--depth")?
                    .parse()
                    .map_err(|e| format!("invalid --depth: {e}"))?;
            }
            "--white" => options.white = value("--white")?,
            "--seed" => {
                options.seed = value("--seed")?
                    .parse()
                    .map_err(|e| format!("invalid --seed: {e}"))?;
            }
            "--quiet" => options.quiet = true,
            "-h" | "--help" => return Err(USAGE.to_string()),
            other => return Err(format!("unknown argument: {other}\n{USAGE}")),
        }
    }
    Ok(options)
}

fn make_player(kind: &str, options: &Options) -> Result<Box<dyn Player>, String> {
    match kind {
        "engine" => Ok(Box::new(EnginePlayer::new(EngineController::new(
            SearchEngine::default(),
            TimeConfig::from_secs(options.time),
        )))),
        "depth" => Ok(Box::new(FixedDepthPlayer::new(
            SearchEngine::default(),
            options.depth,
        ))),
        "random" => Ok(Box::new(RandomPlayer::new(options.seed))),
        other => Err(format!("unknown player kind: {other}\n{USAGE}")),
    }
}

fn main() {
    let args: Vec<String> = env::args().skip(1).collect();
    let options = match parse_args(&args) {
        Ok(options) => options,
        Err(msg) => {
            eprintln!("{msg}");
            process::exit(2);
        }
    };

    let players = make_player("engine", &options).and_then(|black| {
        make_player(&options.white, &options).map(|white| (black, white))
    });
    let (mut black, mut white) = match players {
        Ok(players) => players,
        Err(msg) => {
            eprintln!("{msg}");
            process::exit(2);
        }
    };

    let mut game = Game::new();
    if !options.quiet {
        println!("{}\n", game.board());
    }

    while let Some(side) = game.to_move() {
        let player = match side {
            Side::Black => black.as_mut(),
            Side::White => white.as_mut(),
        };
        match game.play_turn(player) {
            Ok(Some(played)) => {
                if !options.quiet {
                    println!("{} chooses {}", played.side, played.square);
                    println!("{}\n", game.board());
                }
            }
            Ok(None) => break,
            Err(err) => {
                eprintln!("game aborted: {err}");
                process::exit(1);
            }
        }
    }

    let summary = game.summary();
    println!("Final score {}. {}", summary.score, summary.outcome);
}
