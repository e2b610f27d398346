use core::fmt;

/// Parser error
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub struct ParserError {
    pub line   : usize,
    pub column : usize,
    pub msg    : &'static str,
}

impl fmt::Display for ParserError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}: {}", self.line + 1, self.column + 1, self.msg)
    }
}

/// Parser that walks over a `&str`, keeping track of the current line and column
pub struct StrParser<'a> {
    pub line   : usize,
    pub column : usize,
    pub string : &'a str
}

impl<'a> StrParser<'a> {
    /// Create a new parser
    pub fn new(string: &'a str) -> Self {
        Self { line: 0, column: 0, string }
    }

    /// Try to consume a given character
    pub fn consume_char(&mut self, ch: char) -> bool {
        if self.string.starts_with(ch) {
            self.consume_count(ch.len_utf8());
            true
        } else {
            false
        }
    }

    /// Try to consume a given string
    pub fn consume_str(&mut self, s: &str) -> bool {
        if self.string.starts_with(s) {
            self.consume_count(s.len());
            true
        } else {
            false
        }
    }

    /// Consume `count` bytes, `count` has to be on a char boundary
    pub fn consume_count(&mut self, count: usize) {
        let count = count.min(self.string.len());
        let (consumed, rest) = self.string.split_at(count);
        match consumed.rfind('\n') {
            Some(idx) => {
                self.line += consumed.matches('\n').count();
                self.column = consumed[idx + 1..].chars().count();
            },
            None => self.column += consumed.chars().count(),
        }
        self.string = rest;
    }

    /// Skip past the next end-of-line
    pub fn consume_to_eol(&mut self) {
        let idx = self.string.find('\n').map_or(self.string.len(), |idx| idx + 1);
        self.consume_count(idx);
    }

    /// Consume whitespace, newlines are only consumed when `include_newline` is set
    pub fn consume_whitespace(&mut self, include_newline: bool) {
        let idx = self.string
            .find(|ch: char| !ch.is_whitespace() || (!include_newline && ch == '\n'))
            .unwrap_or(self.string.len());
        self.consume_count(idx);
    }

    /// Move the parser to the end (finish parsing)
    pub fn end(&mut self) {
        self.consume_count(self.string.len());
    }

    /// Check if there is still data to parse
    pub fn can_parse(&self) -> bool {
        !self.string.is_empty()
    }

    /// Create an error at the current line and column
    pub fn error(&self, msg: &'static str) -> ParserError {
        ParserError { line: self.line, column: self.column, msg }
    }

    /// Find the first occurance of a non-escaped delimiter
    ///
    /// The result contains a tuple, with the index of the match, and the index after the end of the match
    pub fn find_non_escaped_delimiter(string: &str, delimiter: &str) -> Option<(usize, usize)> {
        string.match_indices(delimiter)
            .find(|(idx, _)| *idx == 0 || string.as_bytes()[*idx - 1] != b'\\')
            .map(|(idx, matched)| (idx, idx + matched.len()))
    }

    /// Extract a substring which is between a starting and ending delimiter, and may optionally span multiple lines
    pub fn extract_string(&mut self, start_delimiter: &str, end_delimiter: &str, multi_line: bool) -> Option<&'a str> {
        let start = StrParser::find_non_escaped_delimiter(self.string, start_delimiter)?;
        let end = StrParser::find_non_escaped_delimiter(&self.string[start.1..], end_delimiter)
            .map(|(begin, end)| (begin + start.1, end + start.1))?;

        let crosses_line = self.string.find('\n').map_or(false, |eol| end.0 > eol);
        if !multi_line && crosses_line {
            return None;
        }

        let string = self.string;
        let res = &string[start.1..end.0];
        self.consume_count(end.1);
        Some(res)
    }

    /// Extract until a certain predicate matches
    pub fn extract_until<F: FnMut(char) -> bool>(&mut self, pred: F) -> &'a str {
        let string = self.string;
        let idx = string.find(pred).unwrap_or(string.len());
        self.consume_count(idx);
        &string[..idx]
    }
}
