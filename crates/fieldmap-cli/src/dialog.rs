//! Terminal implementation of the file dialog.
//!
//! Paths given on the command line are used as-is. Anything missing is
//! prompted for on the terminal; end of input counts as cancel.

use std::io::{self, BufRead, Stderr, StdinLock, Write};
use std::path::PathBuf;

use tracing::{debug, warn};

use fieldmap_core::{DialogOutcome, FileDialog};

pub struct TerminalDialog<R, W> {
    source: Option<PathBuf>,
    output: Option<PathBuf>,
    input: R,
    prompt: W,
}

impl TerminalDialog<StdinLock<'static>, Stderr> {
    /// Prompt on stderr and read answers from stdin.
    pub fn stdio(source: Option<PathBuf>, output: Option<PathBuf>) -> Self {
        Self::new(source, output, io::stdin().lock(), io::stderr())
    }
}

impl<R: BufRead, W: Write> TerminalDialog<R, W> {
    pub fn new(source: Option<PathBuf>, output: Option<PathBuf>, input: R, prompt: W) -> Self {
        Self {
            source,
            output,
            input,
            prompt,
        }
    }

    /// Show `question` and read one trimmed line. `None` on end of input.
    fn ask(&mut self, question: &str) -> Option<String> {
        if let Err(error) = write!(self.prompt, "{question}").and_then(|()| self.prompt.flush()) {
            warn!(%error, "failed to write prompt");
        }
        let mut line = String::new();
        match self.input.read_line(&mut line) {
            Ok(0) => None,
            Ok(_) => Some(line.trim().to_string()),
            Err(error) => {
                warn!(%error, "failed to read answer");
                None
            }
        }
    }
}

impl<R: BufRead, W: Write> FileDialog for TerminalDialog<R, W> {
    fn pick_source(&mut self, extensions: &[&str]) -> DialogOutcome {
        if let Some(path) = self.source.take() {
            return DialogOutcome::Selected(path);
        }
        let question = format!("Source file ({}): ", extensions.join(", "));
        let outcome = match self.ask(&question) {
            Some(answer) if !answer.is_empty() => DialogOutcome::Selected(PathBuf::from(answer)),
            _ => DialogOutcome::Cancelled,
        };
        debug!(?outcome, "source prompt answered");
        outcome
    }

    fn pick_save_path(&mut self, default_name: &str) -> DialogOutcome {
        if let Some(path) = self.output.take() {
            return DialogOutcome::Selected(path);
        }
        let question = format!("Save as [{default_name}]: ");
        let outcome = match self.ask(&question) {
            None => DialogOutcome::Cancelled,
            Some(answer) if answer.is_empty() => DialogOutcome::Selected(PathBuf::from(default_name)),
            Some(answer) => DialogOutcome::Selected(PathBuf::from(answer)),
        };
        debug!(?outcome, "save prompt answered");
        outcome
    }
}
