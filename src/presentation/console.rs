//! Console I/O
//!
//! Commands talk to the user through [`Console`]. On a terminal that is
//! [`DialoguerConsole`]; piped input and tests use [`LineConsole`].

use std::io::{BufRead, Write};

use anyhow::{bail, Result};
use dialoguer::{Input, Select};

/// Line-oriented user interaction.
pub trait Console {
    fn print_line(&mut self, line: &str) -> Result<()>;

    /// Show `prompt` and read one line of free text. Empty input is allowed.
    fn read_line(&mut self, prompt: &str) -> Result<String>;

    /// Let the user pick one of `items`. `None` means the answer matched none.
    fn select(&mut self, prompt: &str, items: &[String]) -> Result<Option<usize>>;

    fn blank_line(&mut self) -> Result<()> {
        self.print_line("")
    }
}

/// Plain reader/writer console.
///
/// Prompts are printed on their own line and answers read line by line.
/// `select` prints the items and matches the answer against each item's
/// leading number (`"3. Edit ..."` is chosen by typing `3`).
pub struct LineConsole<R, W> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> LineConsole<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    pub fn into_output(self) -> W {
        self.output
    }

    fn next_line(&mut self) -> Result<String> {
        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            bail!("input ended while waiting for an answer");
        }
        Ok(line.trim_end_matches(['\r', '\n']).to_string())
    }
}

impl<R: BufRead, W: Write> Console for LineConsole<R, W> {
    fn print_line(&mut self, line: &str) -> Result<()> {
        writeln!(self.output, "{}", line)?;
        Ok(())
    }

    fn read_line(&mut self, prompt: &str) -> Result<String> {
        writeln!(self.output, "{}", prompt)?;
        self.output.flush()?;
        self.next_line()
    }

    fn select(&mut self, prompt: &str, items: &[String]) -> Result<Option<usize>> {
        for item in items {
            writeln!(self.output, "{}", item)?;
        }
        let answer = self.read_line(prompt)?;
        Ok(match_numbered(items, &answer))
    }
}

/// Index of the item whose leading number equals `answer`.
fn match_numbered(items: &[String], answer: &str) -> Option<usize> {
    let answer = answer.trim();
    if answer.is_empty() {
        return None;
    }
    items
        .iter()
        .position(|item| item.split('.').next().map(str::trim) == Some(answer))
}

/// Terminal console backed by `dialoguer` prompts.
#[derive(Debug, Default)]
pub struct DialoguerConsole;

impl Console for DialoguerConsole {
    fn print_line(&mut self, line: &str) -> Result<()> {
        println!("{}", line);
        Ok(())
    }

    fn read_line(&mut self, prompt: &str) -> Result<String> {
        let answer = Input::<String>::new()
            .with_prompt(prompt)
            .allow_empty(true)
            .interact_text()?;
        Ok(answer)
    }

    fn select(&mut self, prompt: &str, items: &[String]) -> Result<Option<usize>> {
        let choice = Select::new()
            .with_prompt(prompt)
            .items(items)
            .default(0)
            .interact_opt()?;
        Ok(choice)
    }
}
