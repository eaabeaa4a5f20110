//! Two players sharing one terminal.
//!
//! `checkers [config.json]` skips the setup questions when a configuration
//! file is given. Logging goes to stderr, the level comes from `CHECKERS_LOG`
//! (`trace`, `debug`, `info`, `warn` or `error`, `warn` when unset).
use std::env;
use std::error::Error;
use std::io::{self, BufRead, Write};

use extended_checkers::config::GameConfig;
use extended_checkers::dimensions::BoardDimension;
use extended_checkers::error::SessionError;
use extended_checkers::representation::Representation;
use extended_checkers::session::GameSession;
use extended_checkers::types::{Direction, Players, Position, Token};
use tracing::{warn, Level};

const FORMAT_HINT: &str =
    "Improper input format. It should be a row value followed by a space followed by a column value. E.x.: '4 5'";

fn main() -> Result<(), Box<dyn Error>> {
    let level = env::var("CHECKERS_LOG")
        .ok()
        .and_then(|level| level.parse::<Level>().ok())
        .unwrap_or(Level::WARN);
    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_writer(io::stderr)
        .init();

    let preset = env::args().nth(1).map(GameConfig::load).transpose()?;

    let stdin = io::stdin();
    let stdout = io::stdout();
    let mut console = Console::new(stdin.lock(), stdout.lock());
    console.run(preset)?;
    Ok(())
}

/// The prompts of a game, over any line based input and output
struct Console<R, W> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> Console<R, W> {
    fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    /// Plays games until the players decline a rematch or the input runs out
    fn run(&mut self, preset: Option<GameConfig>) -> io::Result<()> {
        writeln!(self.output, "Welcome to Checkers!")?;
        loop {
            let config = match preset {
                Some(config) => config,
                None => match self.setup()? {
                    Some(config) => config,
                    None => return Ok(()),
                },
            };
            let mut session = match GameSession::new(&config) {
                Ok(session) => session,
                Err(e) => {
                    warn!(error = %e, "unplayable configuration");
                    writeln!(self.output, "{}", e)?;
                    return Ok(());
                }
            };

            let winner = match self.play(&mut session)? {
                Some(winner) => winner,
                None => return Ok(()),
            };
            writeln!(self.output, "{}", session.board())?;
            writeln!(self.output, "Player {} has won!", winner)?;

            let again = self.ask("Would you like to play again? Enter 'Y' or 'N'")?;
            if !matches!(again.as_deref().map(str::trim), Some("y" | "Y")) {
                return Ok(());
            }
        }
    }

    /// one line without its line ending, `None` once the input is exhausted
    fn ask(&mut self, prompt: &str) -> io::Result<Option<String>> {
        writeln!(self.output, "{}", prompt)?;
        self.output.flush()?;
        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Ok(None);
        }
        Ok(Some(line.trim_end_matches(['\r', '\n']).to_string()))
    }

    /// Asks until `parse` accepts an answer, printing `retry` after each refusal
    fn ask_until<T>(
        &mut self,
        prompt: &str,
        retry: &str,
        mut parse: impl FnMut(&str) -> Option<T>,
    ) -> io::Result<Option<T>> {
        let mut answer = self.ask(prompt)?;
        loop {
            match answer {
                None => return Ok(None),
                Some(line) => match parse(&line) {
                    Some(value) => return Ok(Some(value)),
                    None => answer = self.ask(retry)?,
                },
            }
        }
    }

    fn setup(&mut self) -> io::Result<Option<GameConfig>> {
        const RETRY_PIECE: &str = "Invalid character. Choose a different character:";
        let first_char = |line: &str| line.trim().chars().next();

        let one = match self.ask_until("Player 1, enter your piece:", RETRY_PIECE, |line| {
            first_char(line).filter(|c| c.is_ascii_alphabetic())
        })? {
            Some(one) => one,
            None => return Ok(None),
        };
        let two = match self.ask_until("Player 2, enter your piece:", RETRY_PIECE, |line| {
            first_char(line).filter(|&c| Players::new(one, c).is_ok())
        })? {
            Some(two) => two,
            None => return Ok(None),
        };
        let representation = match self.ask_until(
            "Do you want a fast game (F/f) or a memory efficient game (M/m)?",
            "Invalid choice. Enter 'F/f' for fast game or 'M/m' for memory efficient game:",
            |line| line.parse::<Representation>().ok(),
        )? {
            Some(representation) => representation,
            None => return Ok(None),
        };
        let dimension = match self.ask_dimension()? {
            Some(dimension) => dimension,
            None => return Ok(None),
        };

        Ok(Some(GameConfig {
            player_one: one,
            player_two: two,
            representation,
            dimension: dimension.as_i32(),
        }))
    }

    fn ask_dimension(&mut self) -> io::Result<Option<BoardDimension>> {
        loop {
            let line = match self.ask(
                "How big should the board be? It can be 8x8, 10x10, 12x12, 14x14, or 16x16. Enter one number:",
            )? {
                Some(line) => line,
                None => return Ok(None),
            };
            match line.trim().parse::<i32>() {
                Ok(size) => match BoardDimension::new(size) {
                    Ok(dimension) => return Ok(Some(dimension)),
                    Err(_) => writeln!(
                        self.output,
                        "{}x{} is not available, the closest size is {}x{}.",
                        size,
                        size,
                        BoardDimension::clamped(size),
                        BoardDimension::clamped(size)
                    )?,
                },
                Err(_) => writeln!(self.output, "Enter a single number.")?,
            }
        }
    }

    /// Runs turns until somebody wins, returning the winner
    fn play(&mut self, session: &mut GameSession) -> io::Result<Option<Token>> {
        while !session.is_over() {
            writeln!(self.output, "{}", session.board())?;
            let (pos, options) = match self.choose_piece(session)? {
                Some(choice) => choice,
                None => return Ok(None),
            };
            let dir = match self.choose_direction(&options)? {
                Some(dir) => dir,
                None => return Ok(None),
            };

            match session.take_turn(pos, dir) {
                Ok(outcome) if outcome.crowned => {
                    writeln!(self.output, "The piece at {} is now a king!", outcome.landed)?
                }
                Ok(_) => {}
                Err(e) => writeln!(self.output, "{}", e)?,
            }
        }
        Ok(session.winner())
    }

    /// a piece of the current player together with where it can go
    fn choose_piece(
        &mut self,
        session: &GameSession,
    ) -> io::Result<Option<(Position, Vec<Direction>)>> {
        let player = session.current_player();
        let prompt = format!(
            "player {}, which piece do you wish to move? Enter the row followed by a space followed by the column.",
            player
        );
        loop {
            let line = match self.ask(&prompt)? {
                Some(line) => line,
                None => return Ok(None),
            };
            let pos = match parse_position(&line) {
                Some(pos) => pos,
                None => {
                    writeln!(self.output, "{}", FORMAT_HINT)?;
                    continue;
                }
            };
            match session.movement_options(pos) {
                Ok(options) if options.is_empty() => writeln!(
                    self.output,
                    "Player {}, that piece cannot move. Pick another one.",
                    player
                )?,
                Ok(options) => return Ok(Some((pos, options))),
                Err(SessionError::NotYourPiece { .. }) => writeln!(
                    self.output,
                    "Player {}, that isn't your piece. Pick one of your pieces.",
                    player
                )?,
                Err(e) => writeln!(self.output, "{}", e)?,
            }
        }
    }

    fn choose_direction(&mut self, options: &[Direction]) -> io::Result<Option<Direction>> {
        let listed: Vec<String> = options.iter().map(Direction::to_string).collect();
        let prompt = format!(
            "In which direction do you wish to move the piece? Enter one of these options:\n{}",
            listed.join("\n")
        );
        self.ask_until(
            &prompt,
            &format!("invalid direction choose one from the list\n{}", listed.join("\n")),
            |line| {
                line.trim()
                    .parse::<Direction>()
                    .ok()
                    .filter(|dir| options.contains(dir))
            },
        )
    }
}

/// `"row column"` separated by whitespace
fn parse_position(line: &str) -> Option<Position> {
    let mut parts = line.split_whitespace();
    let row = parts.next()?.parse().ok()?;
    let column = parts.next()?.parse().ok()?;
    if parts.next().is_some() {
        return None;
    }
    Some(Position::new(row, column))
}
