//! Column-stack writer used to rebuild reflowed spans line by line.

use crate::text::Eol;

/// Spaces per indentation level.
pub const INDENT_WIDTH: usize = 4;

/// Line-oriented writer that pads each emitted line to the column on top
/// of an indentation stack.
///
/// The stack starts with a base frame at column 0 which can never be
/// popped, so an unbalanced caller degrades to unindented output instead
/// of panicking. `write_line_at` and `write_at` are one-shot overrides
/// that leave the stack untouched.
#[derive(Debug)]
pub struct BlockWriter {
    out: String,
    columns: Vec<usize>,
    eol: Eol,
}

impl BlockWriter {
    #[must_use]
    pub fn new(eol: Eol) -> Self {
        Self {
            out: String::new(),
            columns: vec![0],
            eol,
        }
    }

    /// Pushes an indentation frame expressed in levels.
    pub fn push_level(&mut self, level: usize) {
        self.columns.push(level * INDENT_WIDTH);
    }

    /// Pushes an indentation frame at an exact column.
    pub fn push_column(&mut self, column: usize) {
        self.columns.push(column);
    }

    /// Pops the current frame. The base frame stays.
    pub fn pop(&mut self) {
        if self.columns.len() > 1 {
            self.columns.pop();
        }
    }

    /// Column of the current frame.
    #[must_use]
    pub fn column(&self) -> usize {
        self.columns.last().copied().unwrap_or(0)
    }

    /// Number of frames on the stack, base frame included.
    #[must_use]
    pub fn depth(&self) -> usize {
        self.columns.len()
    }

    /// Appends raw text with no padding and no line break.
    pub fn write(&mut self, text: &str) {
        self.out.push_str(text);
    }

    /// Appends a line break.
    pub fn newline(&mut self) {
        self.out.push_str(self.eol.as_str());
    }

    /// Writes one padded line at the current frame's column.
    pub fn write_line(&mut self, text: &str) {
        let column = self.column();
        self.write_line_at(column, text);
    }

    /// Writes one padded line at an explicit column, ignoring the stack.
    pub fn write_line_at(&mut self, column: usize, text: &str) {
        self.write_at(column, text);
        self.newline();
    }

    /// Pads to `column` and writes `text` without a line break.
    ///
    /// Empty text produces no padding, so blank lines never carry
    /// trailing whitespace.
    pub fn write_at(&mut self, column: usize, text: &str) {
        if !text.is_empty() {
            self.out.push_str(&" ".repeat(column));
            self.out.push_str(text);
        }
    }

    #[must_use]
    pub fn finish(self) -> String {
        self.out
    }
}

/// Renders `text` as a hanging block: every line padded to `column`,
/// the last line left without a trailing break so callers can append
/// a separator or closer directly after it.
///
/// With `skip_first` the first line is written unpadded, continuing
/// whatever the caller already put on the current output line.
#[must_use]
pub fn hanging_block(text: &str, column: usize, skip_first: bool, eol: Eol) -> String {
    let lines: Vec<&str> = text.split(eol.as_str()).collect();
    let last = lines.len() - 1;
    let mut writer = BlockWriter::new(eol);
    writer.push_column(column);

    for (index, line) in lines.iter().enumerate() {
        if index == last {
            if skip_first && index == 0 {
                writer.write(line);
            } else {
                writer.write_at(column, line);
            }
        } else if skip_first && index == 0 {
            writer.write_line_at(0, line);
        } else {
            writer.write_line(line);
        }
    }

    writer.finish()
}
