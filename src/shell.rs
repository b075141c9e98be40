use crate::builtin::Builtins;
use crate::config::Config;
use crate::launch::launch;
use crate::lexer::split_line;
use crate::read_line::LineReader;
use crate::{ShellError, Status};
use anyhow::Context;
use log::debug;
use std::io::{self, BufRead, Write};

pub struct Shell<'a, R, W, E> {
    config: &'a Config,
    builtins: &'a Builtins,
    input: LineReader<R>,
    output: W,
    errors: E,
}

impl<'a, R: BufRead, W: Write, E: Write> Shell<'a, R, W, E> {
    pub fn new(
        config: &'a Config,
        builtins: &'a Builtins,
        input: R,
        output: W,
        errors: E,
    ) -> Self {
        Self {
            config,
            builtins,
            input: LineReader::new(input),
            output,
            errors,
        }
    }

    pub fn repl(&mut self) -> anyhow::Result<()> {
        loop {
            self.print().context("write prompt")?;

            let Some(line) = self.read().context("read command line")? else {
                debug!("end of input");
                return Ok(());
            };

            let tokens = split_line(&line).context("split command line")?;
            if self.execute(&tokens) == Status::Stop {
                debug!("stopped by {:?}", tokens.first());
                return Ok(());
            }
        }
    }

    pub fn execute(&mut self, tokens: &[&str]) -> Status {
        match self.eval(tokens) {
            Ok(status) => status,
            Err(err) => {
                self.report(&err);
                Status::Continue
            }
        }
    }

    fn eval(&mut self, tokens: &[&str]) -> Result<Status, ShellError> {
        let Some(&command) = tokens.first() else {
            return Ok(Status::Continue);
        };

        if let Some(builtin) = self.builtins.lookup(command) {
            debug!("builtin {command}");
            return (builtin.handler)(tokens, self.builtins, &mut self.output);
        }

        self.output.flush()?;
        io::stdout().flush()?;
        launch(tokens, &self.config.name)
    }

    fn read(&mut self) -> Result<Option<String>, ShellError> {
        self.input.read_line()
    }

    fn print(&mut self) -> io::Result<()> {
        self.output.write_all(self.config.prompt.as_bytes())?;
        self.output.flush()
    }

    fn report(&mut self, err: &ShellError) {
        let _ = writeln!(self.errors, "{}: {err}", self.config.name);
    }
}
