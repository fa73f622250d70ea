//! Command parsing for the interactive terminal host

/// A command accepted by the timer host.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    /// Toggle between running and paused.
    TogglePlay,
    /// Restore the timer to its defaults.
    Reset,
    /// Raise the limit by one minute.
    IncrementLimit,
    /// Lower the limit by one minute.
    DecrementLimit,
    /// Print the current snapshot and host info.
    Status,
    /// Leave the interactive loop.
    Quit,
}

impl Command {
    /// Parse one line of input. Matching is case-insensitive and ignores
    /// surrounding whitespace; unknown or empty input yields `None`.
    pub fn parse(input: &str) -> Option<Self> {
        match input.trim().to_lowercase().as_str() {
            "p" | "start" | "pause" | "toggle" => Some(Self::TogglePlay),
            "r" | "reset" => Some(Self::Reset),
            "+" | "inc" => Some(Self::IncrementLimit),
            "-" | "dec" => Some(Self::DecrementLimit),
            "s" | "status" => Some(Self::Status),
            "q" | "quit" | "exit" => Some(Self::Quit),
            _ => None,
        }
    }
}
