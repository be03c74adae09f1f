//! The interactive loop: read a command, drive the engine, print the result.

use crate::command::{Command, HELP};
use crate::render::Renderer;
use log::debug;
use reversi_rules::Game;
use std::io::{self, BufRead, Write};

/// Whether the loop should keep reading input.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Flow {
    Continue,
    Quit,
}

/// A two-player game played over a line-based reader and writer.
pub struct Session<R, W> {
    game: Game,
    renderer: Renderer,
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> Session<R, W> {
    pub fn new(renderer: Renderer, input: R, output: W) -> Self {
        Self {
            game: Game::new(),
            renderer,
            input,
            output,
        }
    }

    pub fn game(&self) -> &Game {
        &self.game
    }

    /// Play until the input ends or a player quits.
    pub fn run(&mut self) -> io::Result<()> {
        self.show()?;

        let mut line = String::new();
        loop {
            self.prompt()?;
            line.clear();
            if self.input.read_line(&mut line)? == 0 {
                debug!("input closed");
                return Ok(());
            }

            if self.handle(&line)? == Flow::Quit {
                return Ok(());
            }
        }
    }

    /// Act on one line of input.
    pub fn handle(&mut self, line: &str) -> io::Result<Flow> {
        let command = match line.parse::<Command>() {
            Ok(command) => command,
            Err(err) => {
                writeln!(self.output, "Cannot parse input ({}). Type 'help' for commands.", err)?;
                return Ok(Flow::Continue);
            }
        };

        match command {
            Command::Quit => return Ok(Flow::Quit),
            Command::Help => writeln!(self.output, "{}", HELP)?,
            Command::Moves => writeln!(self.output, "{}", self.renderer.moves(&self.game))?,
            Command::New => {
                self.game.reset();
                self.show()?;
            }
            Command::Place(loc) => {
                let player = match self.game.active_player() {
                    Some(player) => player,
                    None => {
                        writeln!(self.output, "The game is over. Type 'new' to play again.")?;
                        return Ok(Flow::Continue);
                    }
                };

                match self.game.attempt_move(loc, player) {
                    Ok(report) => {
                        for message in self.renderer.report(&report) {
                            writeln!(self.output, "{}", message)?;
                        }
                        self.show()?;
                        if self.game.is_finished() {
                            writeln!(self.output, "Type 'new' to play again or 'quit' to leave.")?;
                        }
                    }
                    Err(err) => writeln!(self.output, "{}", self.renderer.rejection(&err))?,
                }
            }
        }

        Ok(Flow::Continue)
    }

    fn show(&mut self) -> io::Result<()> {
        writeln!(self.output)?;
        write!(self.output, "{}", self.renderer.board(&self.game))?;
        writeln!(self.output, "{}", self.renderer.status(&self.game))
    }

    fn prompt(&mut self) -> io::Result<()> {
        write!(self.output, "> ")?;
        self.output.flush()
    }
}
