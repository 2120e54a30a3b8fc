//! Standard stream collaborators for the turn engine.

use std::io::{self, BufRead, Write};

use crossterm::style::{Color, Stylize};
use fountain_core::Category;
use fountain_system_turn::{Input, Output};

/// Reads command lines from any buffered reader, usually locked stdin.
#[derive(Debug)]
pub(crate) struct LineInput<R> {
    reader: R,
    buffer: String,
}

impl<R: BufRead> LineInput<R> {
    pub(crate) fn new(reader: R) -> Self {
        Self {
            reader,
            buffer: String::new(),
        }
    }
}

impl<R: BufRead> Input for LineInput<R> {
    fn read_line(&mut self) -> Option<String> {
        self.buffer.clear();
        match self.reader.read_line(&mut self.buffer) {
            Ok(0) => None,
            Ok(_) => Some(self.buffer.trim_end_matches(['\r', '\n']).to_owned()),
            Err(error) => {
                tracing::warn!(%error, "failed to read input");
                None
            }
        }
    }
}

/// Writes classified messages to stdout, colored by category.
#[derive(Debug)]
pub(crate) struct Terminal<W> {
    writer: W,
    colored: bool,
}

impl<W: Write> Terminal<W> {
    pub(crate) fn new(writer: W, colored: bool) -> Self {
        Self { writer, colored }
    }

    fn write(&mut self, text: &str, category: Category) -> io::Result<()> {
        let styled = if self.colored {
            text.with(color_for(category)).to_string()
        } else {
            text.to_owned()
        };

        // Prompts keep the cursor on the same line as the player's answer.
        if category == Category::Prompt {
            write!(self.writer, "{styled}")?;
        } else {
            writeln!(self.writer, "{styled}")?;
        }
        self.writer.flush()
    }
}

impl<W: Write> Output for Terminal<W> {
    fn emit(&mut self, text: &str, category: Category) {
        if let Err(error) = self.write(text, category) {
            tracing::warn!(%error, "failed to write output");
        }
    }
}

fn color_for(category: Category) -> Color {
    match category {
        Category::Status => Color::White,
        Category::Prompt => Color::Cyan,
        Category::Warning => Color::Yellow,
        Category::Danger => Color::Red,
        Category::Success => Color::Green,
        Category::Info => Color::Magenta,
    }
}
