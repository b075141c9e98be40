use crate::ShellError;
use log::trace;

pub const TOKEN_DELIMITERS: &[char] = &[' ', '\t', '\n', '\r', '\x07'];
pub const INITIAL_TOKEN_CAPACITY: usize = 64;

/// Yields the whitespace-delimited words of a line as slices of that line.
pub struct Lexer<'a> {
    input: &'a str,
    position: usize,
}

impl<'a> Lexer<'a> {
    pub fn new(input: &'a str) -> Self {
        Self { input, position: 0 }
    }

    fn skip_delimiters(&mut self) {
        let rest = &self.input[self.position..];
        let trimmed = rest.trim_start_matches(TOKEN_DELIMITERS);
        self.position += rest.len() - trimmed.len();
    }

    fn is_eof(&self) -> bool {
        self.position >= self.input.len()
    }
}

impl<'a> Iterator for Lexer<'a> {
    type Item = &'a str;

    fn next(&mut self) -> Option<Self::Item> {
        self.skip_delimiters();
        if self.is_eof() {
            return None;
        }

        let rest = &self.input[self.position..];
        let end = rest.find(TOKEN_DELIMITERS).unwrap_or(rest.len());
        self.position += end;

        Some(&rest[..end])
    }
}

pub fn split_line(line: &str) -> Result<Vec<&str>, ShellError> {
    let mut tokens = Vec::new();
    tokens.try_reserve_exact(INITIAL_TOKEN_CAPACITY)?;

    for token in Lexer::new(line) {
        if tokens.len() == tokens.capacity() {
            tokens.try_reserve_exact(tokens.capacity())?;
            trace!("token buffer grown to {} entries", tokens.capacity());
        }
        tokens.push(token);
    }

    Ok(tokens)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    #[rstest]
    #[case("ls", vec!["ls"])]
    #[case("hello    world", vec!["hello", "world"])]
    #[case("  leading and trailing  ", vec!["leading", "and", "trailing"])]
    #[case("tab\tseparated\targs", vec!["tab", "separated", "args"])]
    #[case("cr\r\nlf", vec!["cr", "lf"])]
    #[case("bell\x07rings", vec!["bell", "rings"])]
    #[case("'quoted words'", vec!["'quoted", "words'"])]
    #[case("a|b >out", vec!["a|b", ">out"])]
    #[case("", vec![])]
    #[case(" \t\r\n\x07 ", vec![])]
    fn split(#[case] input: &str, #[case] expected: Vec<&str>) {
        assert_eq!(split_line(input).unwrap(), expected);
    }

    #[test]
    fn joined_tokens_split_back() {
        let tokens = ["cmd", "a", "b"];
        let line = tokens.join(" ");
        assert_eq!(split_line(&line).unwrap(), tokens);
    }

    #[test]
    fn tokens_borrow_the_line() {
        let line = String::from("echo hi");
        let tokens = split_line(&line).unwrap();
        let range = line.as_bytes().as_ptr_range();
        assert!(tokens.iter().all(|t| range.contains(&t.as_ptr())));
    }

    #[test]
    fn many_tokens() {
        let line = vec!["x"; INITIAL_TOKEN_CAPACITY * 2 + 1].join(" ");
        let tokens = split_line(&line).unwrap();
        assert_eq!(tokens.len(), INITIAL_TOKEN_CAPACITY * 2 + 1);
    }

    #[test]
    fn unicode_whitespace_is_not_a_delimiter() {
        assert_eq!(split_line("a\u{a0}b").unwrap(), vec!["a\u{a0}b"]);
    }
}
