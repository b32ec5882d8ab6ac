//! Choice input.
//!
//! The engine never reads input itself. A session driver asks an
//! `InputProvider` to pick one entry from a list of options and turns the
//! answer into a `Decision`.

use std::collections::VecDeque;
use std::io::{BufRead, Write};

/// Source of player choices.
pub trait InputProvider {
    /// Pick one of `options` and return its index.
    ///
    /// Implementations keep asking until they have a valid index. `None`
    /// means the input is closed; drivers treat it as quitting.
    fn request_choice(&mut self, prompt: &str, options: &[&str]) -> Option<usize>;
}

/// Replays a fixed list of answers, matched against option labels
/// case-insensitively.
///
/// An answer that matches no option is discarded and the next one is tried,
/// the way a human would be asked again.
#[derive(Clone, Debug, Default)]
pub struct ScriptedInput {
    answers: VecDeque<String>,
    prompts: Vec<String>,
}

impl ScriptedInput {
    /// Create from answers in the order they will be given.
    pub fn new<S: Into<String>>(answers: impl IntoIterator<Item = S>) -> Self {
        Self {
            answers: answers.into_iter().map(Into::into).collect(),
            prompts: Vec::new(),
        }
    }

    /// Answers not yet consumed.
    #[must_use]
    pub fn remaining(&self) -> usize {
        self.answers.len()
    }

    /// Every prompt asked so far.
    #[must_use]
    pub fn prompts(&self) -> &[String] {
        &self.prompts
    }
}

impl InputProvider for ScriptedInput {
    fn request_choice(&mut self, prompt: &str, options: &[&str]) -> Option<usize> {
        self.prompts.push(prompt.to_string());
        while let Some(answer) = self.answers.pop_front() {
            if let Some(index) = options.iter().position(|o| o.eq_ignore_ascii_case(&answer)) {
                return Some(index);
            }
            log::warn!("scripted answer {answer:?} is not one of {options:?}");
        }
        None
    }
}

/// Line-oriented input, e.g. a terminal.
///
/// Shows the options numbered from 1 and accepts either the number or the
/// label.
pub struct LineInput<R, W> {
    reader: R,
    writer: W,
}

impl<R: BufRead, W: Write> LineInput<R, W> {
    /// Read answers from `reader`, write prompts to `writer`.
    pub fn new(reader: R, writer: W) -> Self {
        Self { reader, writer }
    }

    fn ask(&mut self, prompt: &str, options: &[&str]) -> std::io::Result<Option<usize>> {
        loop {
            writeln!(self.writer, "{prompt}")?;
            for (i, option) in options.iter().enumerate() {
                writeln!(self.writer, "  {}. {option}", i + 1)?;
            }
            write!(self.writer, "> ")?;
            self.writer.flush()?;

            let mut line = String::new();
            if self.reader.read_line(&mut line)? == 0 {
                return Ok(None);
            }
            let answer = line.trim();

            let by_number = answer
                .parse::<usize>()
                .ok()
                .filter(|n| (1..=options.len()).contains(n))
                .map(|n| n - 1);
            let by_label = || options.iter().position(|o| o.eq_ignore_ascii_case(answer));
            if let Some(index) = by_number.or_else(by_label) {
                return Ok(Some(index));
            }
            writeln!(self.writer, "Invalid choice: {answer}")?;
        }
    }
}

impl<R: BufRead, W: Write> InputProvider for LineInput<R, W> {
    fn request_choice(&mut self, prompt: &str, options: &[&str]) -> Option<usize> {
        match self.ask(prompt, options) {
            Ok(choice) => choice,
            Err(err) => {
                log::warn!("input failed: {err}");
                None
            }
        }
    }
}
