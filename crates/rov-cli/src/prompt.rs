//! Interactive project name prompt.

use std::io::{self, BufRead, Write};

use rov_core::{
    application::{ApplicationError, ports::NamePrompt},
    error::RovResult,
};

use crate::error::{CliError, IntoCli};

/// Asks on the terminal.  With the `interactive` feature and a TTY this is
/// a `dialoguer` input; otherwise one line is read from stdin.
///
/// An aborted prompt (Ctrl-C, end of input) yields an empty answer, which
/// the core reports as a missing name.
#[derive(Debug, Default)]
pub struct TerminalPrompt;

impl TerminalPrompt {
    pub fn new() -> Self {
        Self
    }
}

impl NamePrompt for TerminalPrompt {
    fn ask(&self, question: &str, default: &str) -> RovResult<String> {
        if let Some(answer) = ask_dialoguer(question, default) {
            return answer;
        }

        let stdin = io::stdin();
        ask_line(question, default, &mut stdin.lock(), &mut io::stdout())
            .map_err(|e| prompt_failed(e.to_string()))
    }
}

/// `None` when no terminal is attached.
#[cfg(feature = "interactive")]
fn ask_dialoguer(question: &str, default: &str) -> Option<RovResult<String>> {
    use dialoguer::{Input, theme::ColorfulTheme};

    if !console::user_attended() {
        return None;
    }

    let answer = match Input::<String>::with_theme(&ColorfulTheme::default())
        .with_prompt(question)
        .default(default.to_owned())
        .interact_text()
    {
        Ok(answer) => Ok(answer),
        Err(dialoguer::Error::IO(e)) if is_abort(&e) => Ok(String::new()),
        Err(e) => Err(prompt_failed(e.to_string())),
    };
    Some(answer)
}

#[cfg(not(feature = "interactive"))]
fn ask_dialoguer(_question: &str, _default: &str) -> Option<RovResult<String>> {
    None
}

/// Line-based fallback used when no terminal is attached.
fn ask_line(
    question: &str,
    default: &str,
    input: &mut impl BufRead,
    output: &mut impl Write,
) -> Result<String, CliError> {
    write!(output, "? {question} ({default}) ").with_cli_context(|| "failed to write prompt")?;
    output.flush().with_cli_context(|| "failed to flush stdout")?;

    let mut line = String::new();
    let read = input
        .read_line(&mut line)
        .with_cli_context(|| "failed to read project name")?;
    if read == 0 {
        return Ok(String::new());
    }

    let answer = line.trim();
    if answer.is_empty() {
        Ok(default.to_owned())
    } else {
        Ok(answer.to_owned())
    }
}

#[cfg(feature = "interactive")]
fn is_abort(e: &io::Error) -> bool {
    matches!(
        e.kind(),
        io::ErrorKind::Interrupted | io::ErrorKind::UnexpectedEof
    )
}

fn prompt_failed(reason: String) -> rov_core::error::RovError {
    ApplicationError::PromptFailed { reason }.into()
}
