use std::{
    fmt,
    io::{self, BufRead, Write},
};

use clap::{App, Arg};
use once_cell::sync::Lazy;
use rand::Rng;
use regex::Regex;

use seabattle::board::{Board, CellState, Coordinate, ShotOutcome};
use seabattle::fleet::random_board;
use seabattle::game::{Game, Player, RandomShooter, Shooter};

mod logging;

fn main() -> io::Result<()> {
    logging::init();

    let matches = App::new("Sea Battle")
        .version("1.0")
        .about("Console sea battle against a random-firing computer opponent.")
        .arg(
            Arg::with_name("size")
                .short("s")
                .long("size")
                .value_name("SIZE")
                .help("board size, between 6 and 12 (default 6)")
                .takes_value(true),
        )
        .get_matches();

    let size = match matches.value_of("size").unwrap_or("6").parse::<usize>() {
        Ok(size) if (6..=12).contains(&size) => size,
        _ => {
            eprintln!("size must be a number between 6 and 12");
            std::process::exit(1);
        }
    };

    let stdin = io::stdin();
    let mut input = InputReader::new(stdin.lock());
    let mut rng = rand::thread_rng();

    let player_board = random_board(&mut rng, size);
    let mut bot_board = random_board(&mut rng, size);
    bot_board.conceal();

    let mut game = Game::new(player_board, bot_board);
    let mut bot = RandomShooter::new(rand::thread_rng());

    println!("Your fleet has been deployed. Fire at will!");
    while game.winner().is_none() {
        println!();
        println!("Your board:");
        show_board(game.board(Player::P1));
        println!("Computer's board:");
        show_board(game.board(Player::P2));
        println!();

        match game.current() {
            Player::P1 => player_turn(&mut game, &mut input)?,
            Player::P2 => bot_turn(&mut game, &mut bot),
        }
    }

    println!();
    println!("Your board:");
    show_board(game.board(Player::P1));
    println!("Computer's board:");
    show_board(game.board(Player::P2));
    println!();
    match game.winner() {
        Some(Player::P1) => println!("You win! The enemy fleet is destroyed."),
        Some(Player::P2) => println!("You lose! Your fleet is destroyed."),
        None => unreachable!(),
    }
    Ok(())
}

/// Ask the player for targets until a shot resolves, reporting rule errors
/// without consuming the turn.
fn player_turn(game: &mut Game, input: &mut InputReader<impl BufRead>) -> io::Result<()> {
    loop {
        let size = game.board(Player::P2).size();
        let target = read_target(input, size)?;
        match game.fire(target) {
            Ok(outcome) => {
                report(outcome, "You");
                return Ok(());
            }
            Err(err) => println!("{}", err),
        }
    }
}

/// Let the computer pick random targets until a shot resolves.
fn bot_turn(game: &mut Game, bot: &mut RandomShooter<impl Rng>) {
    loop {
        let target = bot.next_target(game.board(Player::P1));
        match game.fire(target) {
            Ok(outcome) => {
                println!("Computer fires at {} {}.", target.x + 1, target.y + 1);
                report(outcome, "Computer");
                return;
            }
            // The random pick was illegal; try another one.
            Err(_) => {}
        }
    }
}

fn report(outcome: ShotOutcome, who: &str) {
    match outcome {
        ShotOutcome::Miss => println!("{} missed.", who),
        ShotOutcome::Hit => println!("{} hit a ship!", who),
        ShotOutcome::Sunk => println!("{} sank a ship!", who),
    }
}

/// Read a pair of 1-based coordinates from the player.
fn read_target(input: &mut InputReader<impl BufRead>, size: usize) -> io::Result<Coordinate> {
    /// Matcher for a coordinate pair such as "3 5" or "3,5".
    static TARGET: Lazy<Regex> =
        Lazy::new(|| Regex::new(r"^(?P<x>[0-9]+)(?:\s*,\s*|\s+)(?P<y>[0-9]+)$").unwrap());

    input.read_input("Your shot (x y):", |line| {
        let captures = match TARGET.captures(line) {
            Some(captures) => captures,
            None => {
                println!("Enter two coordinates, e.g. \"2 4\".");
                return None;
            }
        };
        let x: usize = match captures.name("x").unwrap().as_str().parse() {
            Ok(x) => x,
            Err(_) => {
                println!("Invalid x coordinate.");
                return None;
            }
        };
        let y: usize = match captures.name("y").unwrap().as_str().parse() {
            Ok(y) => y,
            Err(_) => {
                println!("Invalid y coordinate.");
                return None;
            }
        };
        if x == 0 || y == 0 {
            println!("Coordinates start at 1, up to {}.", size);
            return None;
        }
        Some(Coordinate::new(x - 1, y - 1))
    })
}

/// Print the visible grid for the given board. A concealed board shows only
/// hit and miss marks.
fn show_board(board: &Board) {
    struct Cell(CellState);
    impl fmt::Display for Cell {
        fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
            f.pad(match self.0 {
                CellState::Empty => "~",
                CellState::Ship => "#",
                CellState::Hit => "X",
                CellState::Miss => "o",
            })
        }
    }

    print!("   ");
    for x in 0..board.size() {
        print!("{:^3}", x + 1);
    }
    println!();
    for (y, row) in board.rows().enumerate() {
        print!("{:>2} ", y + 1);
        for cell in row {
            print!("{:^3}", Cell(cell));
        }
        println!();
    }
}

/// Helper to read input from the player.
struct InputReader<B> {
    read: B,
    buf: String,
}

impl<B> InputReader<B> {
    fn new(read: B) -> Self {
        Self {
            read,
            buf: String::new(),
        }
    }
}

impl<B: BufRead> InputReader<B> {
    /// Repeatedly tries to read input until the input checker returns `Some`.
    fn read_input<F, T>(&mut self, prompt: &str, mut checker: F) -> io::Result<T>
    where
        F: FnMut(&str) -> Option<T>,
    {
        loop {
            self.read_input_inner(prompt)?;
            if let Some(val) = checker(self.buf.trim()) {
                return Ok(val);
            }
        }
    }

    /// Helper to print the prompt, clear the string buffer and read a line.
    fn read_input_inner(&mut self, prompt: &str) -> io::Result<()> {
        print!("{} ", prompt);
        io::stdout().flush()?;
        self.buf.clear();
        if self.read.read_line(&mut self.buf)? == 0 {
            println!();
            std::process::exit(0);
        }
        Ok(())
    }
}
