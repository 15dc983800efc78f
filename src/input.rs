use std::io::{self, BufRead, Write};

use tracing::debug;

pub const PROMPT: &str = "Enter number of generations: ";
pub const INVALID: &str = "Invalid input. Please enter a positive integer.";

/// Asks for a positive generation count until one is given.
///
/// Only the first word of a line is read. Non-integers and values below 1
/// are reported on `err` and asked again.
/// Running out of input is an [`io::ErrorKind::UnexpectedEof`] error.
pub fn prompt_generations<R, O, E>(mut input: R, mut out: O, mut err: E) -> io::Result<u64>
where
    R: BufRead,
    O: Write,
    E: Write,
{
    let mut line = String::new();
    loop {
        write!(out, "{PROMPT}")?;
        out.flush()?;

        line.clear();
        if input.read_line(&mut line)? == 0 {
            return Err(io::Error::new(
                io::ErrorKind::UnexpectedEof,
                "no generation count given",
            ));
        }

        match line.split_whitespace().next().map(str::parse::<i64>) {
            Some(Ok(n)) if n > 0 => return Ok(n as u64),
            _ => {
                debug!(input = line.trim(), "rejected generation count");
                writeln!(err, "{INVALID}")?;
            }
        }
    }
}
