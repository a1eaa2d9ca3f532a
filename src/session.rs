use crate::evaluating::Calculator;

use std::io::{self, BufRead, Write};

use tracing::info;

const END_OF_TRANSMISSION: char = '\u{4}';

/// True for a line that ends the session: exactly `q`, or anything starting
/// with an end-of-transmission character.
pub fn is_quit(line: &str) -> bool {
    line == "q" || line.starts_with(END_OF_TRANSMISSION)
}

fn strip_newline(line: &mut String) {
    if line.ends_with('\n') {
        line.pop();
        if line.ends_with('\r') {
            line.pop();
        }
    }
}

/// Reads lines from `input` until a quit line or end of input, printing one
/// display per evaluated line. Returns the number of lines evaluated.
pub fn run<R: BufRead, W: Write>(
    calculator: &mut Calculator,
    mut input: R,
    mut output: W,
    prompt: Option<&str>,
) -> io::Result<usize> {
    info!("session started");
    let mut evaluated = 0;
    let mut line = String::new();

    loop {
        if let Some(prompt) = prompt {
            write!(output, "{}", prompt)?;
            output.flush()?;
        }

        line.clear();
        if input.read_line(&mut line)? == 0 {
            break;
        }
        strip_newline(&mut line);

        if is_quit(&line) {
            break;
        }

        writeln!(output, "{}", calculator.evaluate(&line))?;
        evaluated += 1;
    }

    info!(evaluated, "session ended");
    Ok(evaluated)
}

/// Evaluates each line in order, stopping early at a quit line.
pub fn run_lines<W: Write>(
    calculator: &mut Calculator,
    lines: &[String],
    mut output: W,
) -> io::Result<usize> {
    let mut evaluated = 0;
    for line in lines.iter().take_while(|line| !is_quit(line)) {
        writeln!(output, "{}", calculator.evaluate(line))?;
        evaluated += 1;
    }
    Ok(evaluated)
}
