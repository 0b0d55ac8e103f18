//! Interactive fallback used unless exactly two positional arguments are given.
//!
//! The count prompt repeats until a positive count arrives. Entering `0`
//! or closing the input ends the session without generating anything.

use log::debug;
use std::io::{self, BufRead, Write};

pub const COUNT_PROMPT: &str = "Enter how many pseudo random numbers you need:";
pub const SEED_PROMPT: &str = "Enter a seed:";

/// Value that ends the session at the count prompt.
pub const QUIT_SENTINEL: i64 = 0;

/// Read one line, or `None` at end of input.
fn read_line<R: BufRead>(input: &mut R) -> io::Result<Option<String>> {
    let mut line = String::new();
    if input.read_line(&mut line)? == 0 {
        return Ok(None);
    }
    Ok(Some(line.trim().to_string()))
}

/// Prompt for a sequence length until a positive one is entered.
///
/// Returns `None` when the sentinel is entered or input runs out.
pub fn read_count<R: BufRead, W: Write>(input: &mut R, out: &mut W) -> io::Result<Option<i64>> {
    loop {
        writeln!(out, "{}", COUNT_PROMPT)?;
        out.flush()?;

        let Some(line) = read_line(input)? else {
            debug!("End of input at count prompt");
            return Ok(None);
        };

        match line.parse::<i64>() {
            Ok(QUIT_SENTINEL) => return Ok(None),
            Ok(n) if n > 0 => return Ok(Some(n)),
            Ok(n) => writeln!(out, "Count must be positive, got {}", n)?,
            Err(_) => writeln!(out, "Not a number: {:?}", line)?,
        }
    }
}

/// Prompt for a 32-bit seed until a valid one is entered.
pub fn read_seed<R: BufRead, W: Write>(input: &mut R, out: &mut W) -> io::Result<Option<i32>> {
    loop {
        writeln!(out, "{}", SEED_PROMPT)?;
        out.flush()?;

        let Some(line) = read_line(input)? else {
            debug!("End of input at seed prompt");
            return Ok(None);
        };

        match line.parse::<i32>() {
            Ok(seed) => return Ok(Some(seed)),
            Err(e) => writeln!(out, "Invalid seed {:?}: {}", line, e)?,
        }
    }
}

/// Run both prompts. `None` means the session ended before a full request was entered.
pub fn read_request<R: BufRead, W: Write>(
    input: &mut R,
    out: &mut W,
) -> io::Result<Option<(i64, i32)>> {
    let Some(n) = read_count(input, out)? else {
        return Ok(None);
    };
    Ok(read_seed(input, out)?.map(|seed| (n, seed)))
}
