//! Terminal front end: play the mill game against the computer.
//!
//! Cells are entered as `row col` (0-6). During placement a cell places a
//! piece; afterwards the first cell picks a piece up and the second puts it
//! down. After forming a mill, enter the opponent piece to remove.

use std::io::{self, BufRead, Write};
use std::path::PathBuf;
use std::thread;

use anyhow::Context;
use clap::Parser;
use tracing_subscriber::EnvFilter;

use rust_mill::core::{Cell, GameConfig, MoveError, Player};
use rust_mill::events::GameEvent;
use rust_mill::rules::Phase;
use rust_mill::turn::{TurnController, TurnState};

#[derive(Debug, Parser)]
#[command(name = "mill", about = "Play the mill game against the computer")]
struct Args {
    /// RNG seed for the computer's random choices
    #[arg(long)]
    seed: Option<u64>,

    /// Pause before each computer move, in milliseconds
    #[arg(long)]
    delay_ms: Option<u64>,

    /// JSON file with game settings; flags override it
    #[arg(long)]
    config: Option<PathBuf>,

    /// Play black; the computer opens as white
    #[arg(long)]
    black: bool,

    /// Log engine decisions to stderr
    #[arg(short, long)]
    verbose: bool,
}

enum Command {
    Cell(Cell),
    Restart,
    Snapshot,
    Help,
    Quit,
}

fn parse_command(line: &str) -> Option<Command> {
    let line = line.trim();
    match line {
        "q" | "quit" | "exit" => return Some(Command::Quit),
        "restart" => return Some(Command::Restart),
        "snapshot" => return Some(Command::Snapshot),
        "h" | "help" | "?" => return Some(Command::Help),
        _ => {}
    }
    let mut parts = line.split(|c: char| c == ',' || c.is_whitespace()).filter(|p| !p.is_empty());
    let row = parts.next()?.parse().ok()?;
    let col = parts.next()?.parse().ok()?;
    parts.next().is_none().then(|| Command::Cell(Cell::new(row, col)))
}

fn load_config(args: &Args) -> anyhow::Result<GameConfig> {
    let mut config = match &args.config {
        Some(path) => {
            let json = std::fs::read_to_string(path)
                .with_context(|| format!("reading {}", path.display()))?;
            GameConfig::from_json(&json)?
        }
        None => GameConfig::default(),
    };
    if let Some(seed) = args.seed {
        config = config.with_seed(seed);
    }
    if let Some(delay) = args.delay_ms {
        config = config.with_ai_delay_ms(delay);
    }
    if args.black {
        config = config.with_human(Player::Black);
    }
    config.validate()?;
    Ok(config)
}

fn init_logging(verbose: bool) {
    let default = if verbose { "debug" } else { "warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();
}

fn print_events(game: &mut TurnController) {
    for event in game.sink_mut().drain() {
        match event {
            GameEvent::BoardChanged(_) | GameEvent::PlyApplied { .. } => {}
            other => println!("  {other}"),
        }
    }
}

fn prompt(game: &TurnController) -> String {
    let human = game.human();
    match game.turn() {
        TurnState::AwaitingCaptureSelection { remaining, .. } => {
            format!("remove {remaining} {} piece(s)", human.opponent().name())
        }
        TurnState::HumanMoveInFlight { origin } => format!("move {origin} to"),
        _ if game.phase(human) == Phase::Placement => {
            let reserve = game.state().reserve(human, game.config());
            format!("place ({reserve} left)")
        }
        _ => "pick up".to_string(),
    }
}

/// Route a cell to the entry point the current state expects.
fn submit(game: &mut TurnController, cell: Cell) -> Result<TurnState, MoveError> {
    let human = game.human();
    match game.turn() {
        TurnState::AwaitingCaptureSelection { .. } => game.confirm_capture_selection(cell),
        TurnState::HumanMoveInFlight { .. }
            if game.board().try_get(cell).is_some_and(|s| s.is_owned_by(human)) =>
        {
            game.try_select_origin(cell)
        }
        TurnState::AwaitingHumanAction if game.phase(human) != Phase::Placement => {
            game.try_select_origin(cell)
        }
        _ => game.try_move_to(cell),
    }
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();
    init_logging(args.verbose);

    let config = load_config(&args)?;
    let mut game = TurnController::new(config)?;
    let stdin = io::stdin();
    let mut lines = stdin.lock().lines();

    println!("You play {}. Enter cells as 'row col', 'help' for commands.", game.human());
    loop {
        print_events(&mut game);

        match game.turn() {
            TurnState::GameOver(_) => {
                println!("{}", game.board());
                break;
            }
            TurnState::AiDeliberating => {
                thread::sleep(game.ai_delay());
                game.run_ai_turn()?;
                continue;
            }
            _ => {}
        }

        println!("{}", game.board());
        print!("{} > ", prompt(&game));
        io::stdout().flush()?;

        let Some(line) = lines.next() else { break };
        match parse_command(&line?) {
            Some(Command::Cell(cell)) => match submit(&mut game, cell) {
                Ok(_) | Err(MoveError::InvalidTarget { .. }) => {}
                Err(err) => println!("  {err}"),
            },
            Some(Command::Restart) => game.restart(),
            Some(Command::Snapshot) => println!("{}", game.snapshot().to_json()?),
            Some(Command::Help) => {
                println!("  row col    place, pick up, put down or remove at a cell");
                println!("  restart    start a new game");
                println!("  snapshot   print the game as JSON");
                println!("  quit       leave");
            }
            Some(Command::Quit) => break,
            None => println!("  expected 'row col', e.g. '3 0'"),
        }
    }

    println!("White {} - Black {}", game.score(Player::White), game.score(Player::Black));
    Ok(())
}
