use crate::artifacts::options::choice::{Indenting, LineEnding};

/// Line-oriented builder for brace-delimited source text
///
/// Every line is prefixed with `indent_size` copies of the indenting unit per
/// open block and terminated with the configured line ending.
#[derive(Debug)]
pub struct SourceBuilder {
    buffer: String,
    depth: usize,
    unit: char,
    indent_size: usize,
    terminator: &'static str,
}

impl SourceBuilder {
    pub fn new(indenting: Indenting, indent_size: u32, line_ending: LineEnding) -> Self {
        SourceBuilder {
            buffer: String::new(),
            depth: 0,
            unit: indenting.unit(),
            indent_size: indent_size as usize,
            terminator: line_ending.terminator(),
        }
    }

    pub fn line(&mut self, text: &str) -> &mut Self {
        let width = self.indent_size * self.depth;
        self.buffer.extend(std::iter::repeat_n(self.unit, width));
        self.buffer.push_str(text);
        self.buffer.push_str(self.terminator);
        self
    }

    pub fn lines(&mut self, lines: &[&str]) -> &mut Self {
        for line in lines {
            self.line(line);
        }
        self
    }

    /// Empty line, never indented
    pub fn blank(&mut self) -> &mut Self {
        self.buffer.push_str(self.terminator);
        self
    }

    pub fn open_block(&mut self, header: &str) -> &mut Self {
        self.line(header);
        self.line("{");
        self.depth += 1;
        self
    }

    pub fn close_block(&mut self) -> anyhow::Result<&mut Self> {
        self.depth = self
            .depth
            .checked_sub(1)
            .ok_or_else(|| anyhow::anyhow!("cannot close a block: no block is open"))?;
        self.line("}");
        Ok(self)
    }

    pub fn finish(self) -> anyhow::Result<String> {
        if self.depth != 0 {
            anyhow::bail!("{} block(s) left open", self.depth);
        }
        Ok(self.buffer)
    }
}
