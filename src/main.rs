// Ficheiro: src/main.rs
// Descrição: Interface de terminal: humano contra o motor, motor contra motor
// ou dois humanos no mesmo terminal.

use std::io::{self, BufRead, Write};
use std::process::ExitCode;

use clap::{Parser, ValueEnum};
use log::{error, info};
use torre::notation::{self, format_history, format_move_list, render_board, status_line};
use torre::search::{Difficulty, Engine, SearchConfig};
use torre::*;

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum Mode {
    /// Play White against the engine
    White,
    /// Play Black against the engine
    Black,
    /// Engine against engine
    Engines,
    /// Two humans at the same terminal
    Humans,
}

#[derive(Debug, Parser)]
#[command(name = "torre", version, about = "Terminal chess against an alpha-beta engine")]
struct Args {
    /// Game mode; without it an interactive menu is shown
    #[arg(long, value_enum)]
    mode: Option<Mode>,

    /// Engine difficulty from 1 (random) to 6
    #[arg(long, default_value_t = 3)]
    difficulty: u8,

    /// Difficulty of the black engine in engines mode
    #[arg(long)]
    black_difficulty: Option<u8>,

    /// Seed for the random difficulty level
    #[arg(long)]
    seed: Option<u64>,

    /// Start from a FEN position instead of the initial one
    #[arg(long)]
    fen: Option<String>,

    /// Show the board from Black's side
    #[arg(long)]
    flip: bool,

    /// Do not wait for Enter between moves in engines mode
    #[arg(long)]
    no_pause: bool,
}

/// Quem decide os lances de cada cor.
enum Player {
    Human,
    Computer(Engine),
}

enum Command {
    Move(Move),
    Quit,
}

/// Opções de apresentação de uma partida.
#[derive(Debug, Clone, Copy)]
struct ViewOptions {
    flip: bool,
    pause: bool,
}

const RULES: &str = "\
Chess rules summary:
  - Each side moves one piece per turn; White moves first.
  - Pawns move forward one square, or two from their starting rank,
    and capture diagonally. En passant is available right after a
    double push. A pawn reaching the last rank must promote.
  - Castling moves the king two squares toward an unmoved rook. The king
    may not be in check, pass through an attacked square or land on one.
  - A move may never leave your own king in check.
  - Checkmate wins. Stalemate and the fifty-move rule are draws.";

const HELP: &str = "\
Enter moves in coordinate notation: e2e4, g1f3, e7e8q (promote to q, r, b or n).
Castle by moving the king two squares: e1g1, e1c1.
Commands: help, history, status, flip, quit";

fn main() -> ExitCode {
    env_logger::init();
    let args = Args::parse();

    match run(args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            error!("{}", err);
            eprintln!("Error: {}", err);
            ExitCode::FAILURE
        }
    }
}

fn run(args: Args) -> Result<(), Box<dyn std::error::Error>> {
    let start = match &args.fen {
        Some(fen) => Board::from_fen(fen)?,
        None => Board::new(),
    };

    let stdin = io::stdin();
    let mut input = stdin.lock();

    if let Some(mode) = args.mode {
        let black_level = args.black_difficulty.unwrap_or(args.difficulty);
        return start_game(&args, mode, (args.difficulty, black_level), start, &mut input);
    }

    // Depois de cada partida volta ao menu
    loop {
        let Some(mode) = menu(&mut input)? else {
            println!("Goodbye!");
            return Ok(());
        };
        let Some(levels) = choose_levels(mode, &mut input)? else {
            return Ok(());
        };
        start_game(&args, mode, levels, start, &mut input)?;
    }
}

fn start_game(
    args: &Args,
    mode: Mode,
    (white_level, black_level): (u8, u8),
    start: Board,
    input: &mut impl BufRead,
) -> Result<(), Box<dyn std::error::Error>> {
    let white_config = SearchConfig { difficulty: Difficulty::new(white_level), seed: args.seed };
    let black_config = SearchConfig {
        difficulty: Difficulty::new(black_level),
        seed: args.seed.map(|seed| seed.wrapping_add(1)),
    };

    let (white, black) = match mode {
        Mode::White => (Player::Human, Player::Computer(Engine::new(black_config))),
        Mode::Black => (Player::Computer(Engine::new(white_config)), Player::Human),
        Mode::Engines => (
            Player::Computer(Engine::new(white_config)),
            Player::Computer(Engine::new(black_config)),
        ),
        Mode::Humans => (Player::Human, Player::Human),
    };

    let display = ViewOptions {
        flip: args.flip || mode == Mode::Black,
        pause: mode == Mode::Engines && !args.no_pause,
    };
    info!("starting game in {:?} mode", mode);
    play_game(Game::from_board(start), white, black, display, input)
}

fn menu(input: &mut impl BufRead) -> io::Result<Option<Mode>> {
    loop {
        println!("\n=== Torre ===");
        println!("1. Play as White");
        println!("2. Play as Black");
        println!("3. Watch engine vs engine");
        println!("4. Human vs human");
        println!("5. Show rules");
        println!("6. Quit");

        let Some(choice) = prompt(input, "Choose an option: ")? else {
            return Ok(None);
        };
        match choice.as_str() {
            "1" => return Ok(Some(Mode::White)),
            "2" => return Ok(Some(Mode::Black)),
            "3" => return Ok(Some(Mode::Engines)),
            "4" => return Ok(Some(Mode::Humans)),
            "5" => println!("\n{}\n", RULES),
            "6" | "q" | "quit" => return Ok(None),
            _ => println!("Invalid option."),
        }
    }
}

/// Níveis das brancas e das pretas; no modo contra o motor só há um motor,
/// e o mesmo nível serve para as duas cores.
fn choose_levels(mode: Mode, input: &mut impl BufRead) -> io::Result<Option<(u8, u8)>> {
    match mode {
        Mode::Humans => Ok(Some((Difficulty::default().level(), Difficulty::default().level()))),
        Mode::White | Mode::Black => {
            Ok(read_difficulty(input, "Engine difficulty (1-6): ")?.map(|level| (level, level)))
        }
        Mode::Engines => {
            let Some(white) = read_difficulty(input, "White engine difficulty (1-6): ")? else {
                return Ok(None);
            };
            Ok(read_difficulty(input, "Black engine difficulty (1-6): ")?.map(|black| (white, black)))
        }
    }
}

/// Pede um nível até receber um número entre 1 e 6.
fn read_difficulty(input: &mut impl BufRead, label: &str) -> io::Result<Option<u8>> {
    for level in 1..=6 {
        println!("{}. {}", level, Difficulty::new(level).label());
    }
    loop {
        let Some(line) = prompt(input, label)? else {
            return Ok(None);
        };
        match line.parse::<u8>() {
            Ok(level) if (Difficulty::MIN..=Difficulty::MAX).contains(&level) => return Ok(Some(level)),
            _ => println!("Please enter a number between 1 and 6."),
        }
    }
}

fn play_game(
    mut game: Game,
    mut white: Player,
    mut black: Player,
    display: ViewOptions,
    input: &mut impl BufRead,
) -> Result<(), Box<dyn std::error::Error>> {
    let mut flip = display.flip;
    for (color, player) in [(Color::White, &white), (Color::Black, &black)] {
        if let Player::Computer(engine) = player {
            println!("{} engine: {}", color, engine.config().difficulty.label());
        }
    }

    loop {
        println!("\n{}", render_board(game.board(), flip));
        println!("{}", status_line(game.board()));

        if let Some(outcome) = game.outcome() {
            println!("\nGame over: {}", outcome);
            println!("{}", format_history(game.history(), game.history().len()));
            return Ok(());
        }

        let player = match game.board().to_move {
            Color::White => &mut white,
            Color::Black => &mut black,
        };

        let mv = match player {
            Player::Computer(engine) => {
                let result = engine.best_move(game.board());
                let Some(mv) = result.best_move else {
                    return Ok(());
                };
                println!(
                    "{} plays {} (score {}, {} nodes, {}ms)",
                    game.board().to_move,
                    mv,
                    result.score,
                    result.nodes_searched,
                    result.time_elapsed.as_millis()
                );
                if display.pause && !wait_for_enter(input)? {
                    println!("Goodbye!");
                    return Ok(());
                }
                mv
            }
            Player::Human => match read_human_move(&game, &mut flip, input)? {
                Command::Move(mv) => mv,
                Command::Quit => {
                    println!("Goodbye!");
                    return Ok(());
                }
            },
        };

        game.play(mv)?;
    }
}

/// Lê comandos até obter um lance legal ou um pedido para sair.
fn read_human_move(game: &Game, flip: &mut bool, input: &mut impl BufRead) -> io::Result<Command> {
    let label = format!("{} to move (e.g. e2e4, or 'help'): ", game.board().to_move);
    loop {
        let Some(line) = prompt(input, &label)? else {
            return Ok(Command::Quit);
        };

        match line.to_ascii_lowercase().as_str() {
            "" => continue,
            "help" => {
                println!("{}", HELP);
                println!("{}", format_move_list(&game.legal_moves(), 20));
            }
            "history" => println!("{}", format_history(game.history(), 10)),
            "status" => println!("{}", status_line(game.board())),
            "rules" => println!("{}", RULES),
            "flip" => {
                *flip = !*flip;
                println!("\n{}", render_board(game.board(), *flip));
            }
            "quit" | "exit" => return Ok(Command::Quit),
            text => match notation::find_legal_move(game.board(), text) {
                Ok(mv) => return Ok(Command::Move(mv)),
                Err(err) => println!("{}. Type 'help' for the list of legal moves.", err),
            },
        }
    }
}

/// Pausa entre lances do modo motor contra motor. `false` pede para sair.
fn wait_for_enter(input: &mut impl BufRead) -> io::Result<bool> {
    match prompt(input, "Press Enter to continue (or 'quit')... ")? {
        Some(line) => Ok(!matches!(line.to_ascii_lowercase().as_str(), "quit" | "exit")),
        None => Ok(false),
    }
}

/// `None` no fim da entrada.
fn prompt(input: &mut impl BufRead, label: &str) -> io::Result<Option<String>> {
    print!("{}", label);
    io::stdout().flush()?;
    let mut line = String::new();
    if input.read_line(&mut line)? == 0 {
        return Ok(None);
    }
    Ok(Some(line.trim().to_string()))
}
