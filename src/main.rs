use shh::{Builtins, Config, Shell};
use std::io;
use std::process::ExitCode;

fn main() -> ExitCode {
    env_logger::init();

    let config = Config::from_env();
    let builtins = Builtins::standard();
    let mut shell = Shell::new(
        &config,
        &builtins,
        io::stdin().lock(),
        io::stdout(),
        io::stderr(),
    );

    match shell.repl() {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("{}: {err:#}", config.name);
            ExitCode::FAILURE
        }
    }
}
