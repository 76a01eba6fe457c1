//! Interactive strategy.
//!
//! Input is injected through [`MoveSource`], so the rules never touch stdin
//! and tests can script the answers.

use std::io::{self, BufRead, Write};

use log::trace;

use super::Strategy;
use crate::core::{GameError, Move, Result};
use crate::rules::Game;

/// Prompt shown when asking for a move.
pub const MOVE_PROMPT: &str = "Enter a move: ";

/// Supplier of raw move text.
pub trait MoveSource {
    /// Return the next raw move string, shown `prompt` first.
    fn request_move(&mut self, prompt: &str) -> Result<String>;
}

/// Scripted sources: each call pops the next answer.
impl MoveSource for std::collections::VecDeque<String> {
    fn request_move(&mut self, _prompt: &str) -> Result<String> {
        self.pop_front().ok_or_else(|| {
            GameError::Input(io::Error::new(
                io::ErrorKind::UnexpectedEof,
                "no scripted moves left",
            ))
        })
    }
}

/// Line-based source: writes the prompt, reads one line.
#[derive(Debug)]
pub struct LineSource<R, W> {
    reader: R,
    writer: W,
}

impl<R: BufRead, W: Write> LineSource<R, W> {
    /// Create a source over any reader and writer.
    pub fn new(reader: R, writer: W) -> Self {
        Self { reader, writer }
    }
}

impl LineSource<io::StdinLock<'static>, io::Stdout> {
    /// Source reading from the terminal.
    pub fn stdio() -> Self {
        Self::new(io::stdin().lock(), io::stdout())
    }
}

impl<R: BufRead, W: Write> MoveSource for LineSource<R, W> {
    fn request_move(&mut self, prompt: &str) -> Result<String> {
        self.writer.write_all(prompt.as_bytes())?;
        self.writer.flush()?;

        let mut line = String::new();
        if self.reader.read_line(&mut line)? == 0 {
            return Err(GameError::Input(io::Error::new(
                io::ErrorKind::UnexpectedEof,
                "input closed while waiting for a move",
            )));
        }
        Ok(line.trim_end_matches(&['\r', '\n'][..]).to_string())
    }
}

/// Ask `source` for a move and parse it for `game`.
///
/// No legality check happens here.
///
/// # Errors
/// Propagates input failures and `Game::str_to_move` parse errors.
pub fn interactive_strategy<S>(game: &Game, source: &mut S) -> Result<Move>
where
    S: MoveSource + ?Sized,
{
    let raw = source.request_move(MOVE_PROMPT)?;
    trace!("read {raw:?} for {}", game.kind());
    game.str_to_move(&raw)
}

/// [`Strategy`] adapter around a [`MoveSource`].
#[derive(Debug)]
pub struct Interactive<S> {
    source: S,
}

impl<S: MoveSource> Interactive<S> {
    /// Wrap `source` as a strategy.
    pub fn new(source: S) -> Self {
        Self { source }
    }
}

impl<S: MoveSource> Strategy for Interactive<S> {
    fn choose_move(&mut self, game: &Game) -> Result<Move> {
        interactive_strategy(game, &mut self.source)
    }
}
