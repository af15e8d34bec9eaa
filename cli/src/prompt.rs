use std::fmt::Display;
use std::io::{self, BufRead, Write};
use std::num::{IntErrorKind, ParseIntError};

use minegen_core::{CellCount, Coord, FieldConfig, mult};
use thiserror::Error;

pub const WIDTH_PROMPT: &str = "Enter a width: ";
pub const HEIGHT_PROMPT: &str = "Enter a height: ";
pub const MINES_PROMPT: &str = "Enter the number of mines: ";
pub const CAPACITY_MESSAGE: &str = "Number of mines must not exceed the dimensions of the field.";

/// Rejected value, the message is shown to the user before asking again.
#[derive(Error, Debug, Copy, Clone, PartialEq, Eq)]
pub enum InputError {
    #[error("Invalid argument: Value must be an integer.")]
    InvalidFormat,
    #[error("Argument out of range: {}", lower_bound_hint(.0))]
    TooSmall(i128),
    #[error("Argument out of range: Value must not exceed {0}.")]
    TooLarge(i128),
}

fn lower_bound_hint(min: &i128) -> String {
    match *min {
        0 => "Value must not be negative.".to_owned(),
        min => format!("Value must be greater than {}.", min - 1),
    }
}

#[derive(Error, Debug)]
pub enum PromptError {
    #[error("Input ended before a valid value was entered")]
    Closed,
    #[error(transparent)]
    Io(#[from] io::Error),
}

/// Integer types that can be asked for, checked against `MAX` of the type.
pub trait Bounded: Copy + Display + Into<i128> + TryFrom<i128> {
    const MAX: Self;
}

impl Bounded for u16 {
    const MAX: Self = u16::MAX;
}

impl Bounded for u64 {
    const MAX: Self = u64::MAX;
}

/// Parses a whole line as an integer in `min..=T::MAX`, surrounding whitespace is ignored.
pub fn parse_value<T: Bounded>(text: &str, min: T) -> Result<T, InputError> {
    let min: i128 = min.into();
    let max: i128 = T::MAX.into();

    let value: i128 = text
        .trim()
        .parse()
        .map_err(|err: ParseIntError| match err.kind() {
            IntErrorKind::PosOverflow => InputError::TooLarge(max),
            IntErrorKind::NegOverflow => InputError::TooSmall(min),
            _ => InputError::InvalidFormat,
        })?;

    if value < min {
        return Err(InputError::TooSmall(min));
    }
    T::try_from(value).map_err(|_| InputError::TooLarge(max))
}

/// Parses a mine count. There is no upper bound here, values past `u64` saturate and are left for
/// the capacity check to turn down.
pub fn parse_mine_count(text: &str) -> Result<u64, InputError> {
    match parse_value::<u64>(text, 0) {
        Err(InputError::TooLarge(_)) => Ok(u64::MAX),
        parsed => parsed,
    }
}

/// Line oriented question and answer session over any reader/writer pair.
pub struct Prompter<R, W> {
    input: R,
    output: W,
    line: String,
}

impl<R: BufRead, W: Write> Prompter<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self {
            input,
            output,
            line: String::new(),
        }
    }

    pub fn into_inner(self) -> (R, W) {
        (self.input, self.output)
    }

    /// Keeps asking with `prompt` until a line parses as a value of at least `min`.
    pub fn read_value<T: Bounded>(&mut self, prompt: &str, min: T) -> Result<T, PromptError> {
        self.ask(prompt, |text| parse_value(text, min))
    }

    fn ask<T>(
        &mut self,
        prompt: &str,
        parse: impl Fn(&str) -> Result<T, InputError>,
    ) -> Result<T, PromptError> {
        loop {
            write!(self.output, "{prompt}")?;
            self.output.flush()?;

            self.line.clear();
            if self.input.read_line(&mut self.line)? == 0 {
                return Err(PromptError::Closed);
            }

            match parse(&self.line) {
                Ok(value) => return Ok(value),
                Err(err) => {
                    log::debug!("Rejected input {:?}: {:?}", self.line.trim(), err);
                    writeln!(self.output, "{err}")?;
                }
            }
        }
    }

    /// Asks for width, height and mine count, starting over while the mines do not fit.
    pub fn read_config(&mut self) -> Result<FieldConfig, PromptError> {
        loop {
            let width: Coord = self.read_value(WIDTH_PROMPT, 1)?;
            let height: Coord = self.read_value(HEIGHT_PROMPT, 1)?;
            let mines = self.ask(MINES_PROMPT, parse_mine_count)?;

            let config = CellCount::try_from(mines)
                .ok()
                .and_then(|mines| FieldConfig::new((width, height), mines).ok());
            match config {
                Some(config) => return Ok(config),
                None => {
                    log::debug!(
                        "Requested {} mines but a {}x{} field only fits {}",
                        mines,
                        width,
                        height,
                        mult(width, height)
                    );
                    writeln!(self.output, "{CAPACITY_MESSAGE}")?;
                }
            }
        }
    }
}
