use std::io::{self, BufRead};

/// The full text of a file split into lines, addressed by zero-based index.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LineBuffer {
    lines: Vec<String>,
}

impl LineBuffer {
    /// Reads every line of `reader`. Line terminators (`\n` or `\r\n`) are stripped.
    pub fn read_from(reader: &mut impl BufRead) -> io::Result<Self> {
        let lines = reader.lines().collect::<io::Result<Vec<_>>>()?;
        Ok(Self { lines })
    }

    pub fn from_text(text: &str) -> Self {
        Self {
            lines: text.lines().map(str::to_owned).collect(),
        }
    }

    pub fn len(&self) -> usize {
        self.lines.len()
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&str> {
        self.lines.get(index).map(String::as_str)
    }

    /// Whitespace-separated tokens of a line; empty past the end of the buffer.
    pub fn tokens(&self, index: usize) -> impl Iterator<Item = &str> {
        self.get(index).unwrap_or("").split_whitespace()
    }

    /// The last token of a line, if the line exists and is not blank.
    pub fn last_token(&self, index: usize) -> Option<&str> {
        self.tokens(index).last()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    #[test]
    fn read_from_strips_line_terminators() {
        let mut reader = Cursor::new("title\r\nSP RHF x STO-3G\nlast");
        let lines = LineBuffer::read_from(&mut reader).unwrap();
        assert_eq!(lines.len(), 3);
        assert_eq!(lines.get(0), Some("title"));
        assert_eq!(lines.get(2), Some("last"));
        assert_eq!(lines.get(3), None);
    }

    #[test]
    fn tokens_split_on_any_whitespace() {
        let lines = LineBuffer::from_text("Number of atoms    I\t  3\n");
        let tokens: Vec<_> = lines.tokens(0).collect();
        assert_eq!(tokens, vec!["Number", "of", "atoms", "I", "3"]);
        assert_eq!(lines.last_token(0), Some("3"));
    }

    #[test]
    fn tokens_past_the_end_are_empty() {
        let lines = LineBuffer::from_text("only line");
        assert_eq!(lines.tokens(5).count(), 0);
        assert_eq!(lines.last_token(5), None);
    }

    #[test]
    fn empty_text_gives_empty_buffer() {
        let lines = LineBuffer::from_text("");
        assert!(lines.is_empty());
    }
}
