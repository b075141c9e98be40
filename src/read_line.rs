use crate::ShellError;
use log::trace;
use std::io::{self, BufRead};

pub const INITIAL_CAPACITY: usize = 1024;

pub struct LineReader<R> {
    input: R,
}

impl<R: BufRead> LineReader<R> {
    pub fn new(input: R) -> Self {
        Self { input }
    }

    /// `None` once the stream is exhausted.
    pub fn read_line(&mut self) -> Result<Option<String>, ShellError> {
        let mut buffer: Vec<u8> = Vec::new();
        buffer.try_reserve_exact(INITIAL_CAPACITY)?;
        let mut seen_any = false;

        loop {
            let Some(byte) = self.next_byte()? else {
                if !seen_any {
                    return Ok(None);
                }
                break;
            };
            seen_any = true;

            if byte == b'\n' {
                break;
            }

            if buffer.len() == buffer.capacity() {
                let additional = buffer.capacity().max(INITIAL_CAPACITY);
                buffer.try_reserve_exact(additional)?;
                trace!("line buffer grown to {} bytes", buffer.capacity());
            }
            buffer.push(byte);
        }

        Ok(Some(decode(buffer)))
    }

    fn next_byte(&mut self) -> Result<Option<u8>, ShellError> {
        loop {
            match self.input.fill_buf() {
                Ok([]) => return Ok(None),
                Ok(available) => {
                    let byte = available[0];
                    self.input.consume(1);
                    return Ok(Some(byte));
                }
                Err(err) if err.kind() == io::ErrorKind::Interrupted => continue,
                Err(err) => return Err(ShellError::Read(err)),
            }
        }
    }
}

fn decode(buffer: Vec<u8>) -> String {
    match String::from_utf8(buffer) {
        Ok(line) => line,
        Err(err) => String::from_utf8_lossy(err.as_bytes()).into_owned(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use rstest::rstest;
    use std::io::Cursor;

    fn read_all(input: &[u8]) -> Vec<String> {
        let mut reader = LineReader::new(Cursor::new(input.to_vec()));
        let mut lines = Vec::new();
        while let Some(line) = reader.read_line().unwrap() {
            lines.push(line);
        }
        lines
    }

    #[rstest]
    #[case(b"ls -l\n", vec!["ls -l"])]
    #[case(b"help\nexit\n", vec!["help", "exit"])]
    #[case(b"no newline", vec!["no newline"])]
    #[case(b"\n\n", vec!["", ""])]
    #[case(b"cd /tmp\r\n", vec!["cd /tmp\r"])]
    #[case(b"", vec![])]
    fn splits_on_newline(#[case] input: &[u8], #[case] expected: Vec<&str>) {
        assert_eq!(read_all(input), expected);
    }

    #[test]
    fn end_of_stream_repeats() {
        let mut reader = LineReader::new(Cursor::new(b"exit".to_vec()));
        assert_eq!(reader.read_line().unwrap(), Some(String::from("exit")));
        assert_eq!(reader.read_line().unwrap(), None);
        assert_eq!(reader.read_line().unwrap(), None);
    }

    #[test]
    fn grows_past_initial_capacity() {
        let long = "x".repeat(INITIAL_CAPACITY * 3 + 7);
        let input = format!("{long}\nnext\n");
        assert_eq!(read_all(input.as_bytes()), vec![long, String::from("next")]);
    }

    #[test]
    fn invalid_utf8_is_replaced() {
        assert_eq!(read_all(b"echo \xff\n"), vec!["echo \u{fffd}"]);
    }

    struct Failing;

    impl io::Read for Failing {
        fn read(&mut self, _buf: &mut [u8]) -> io::Result<usize> {
            Err(io::Error::other("boom"))
        }
    }

    #[test]
    fn read_error_is_fatal() {
        let mut reader = LineReader::new(io::BufReader::new(Failing));
        let err = reader.read_line().unwrap_err();
        assert!(matches!(err, ShellError::Read(_)));
        assert!(err.is_fatal());
    }
}
