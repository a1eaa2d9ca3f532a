use clap::Parser;

pub const DEFAULT_PROMPT: &str = "input expression (q to quit) > ";

/// Accumulating calculator: enter operands and `+ - * /` one token at a time.
#[derive(Parser, Debug, Clone)]
#[command(version, about)]
pub struct Config {
    /// Lines to evaluate in order instead of reading standard input
    pub lines: Vec<String>,

    /// Prompt printed before each line is read
    #[arg(long, default_value = DEFAULT_PROMPT)]
    pub prompt: String,

    /// Do not print a prompt
    #[arg(long)]
    pub no_prompt: bool,

    /// Log filter used when RUST_LOG is not set
    #[arg(long, default_value = "warn")]
    pub log_level: String,
}

impl Config {
    pub fn prompt(&self) -> Option<&str> {
        if self.no_prompt {
            None
        } else {
            Some(&self.prompt)
        }
    }
}
