use crate::{ShellError, Status, print_to};
use std::env;
use std::io::Write;

/// Signature shared by every builtin. Receives the whole token sequence, command name included.
pub type Handler = fn(&[&str], &Builtins, &mut dyn Write) -> Result<Status, ShellError>;

pub struct Builtin {
    pub name: &'static str,
    pub handler: Handler,
}

pub struct Builtins {
    table: Vec<Builtin>,
}

impl Builtins {
    pub fn standard() -> Self {
        Self {
            table: vec![
                Builtin {
                    name: "cd",
                    handler: cd_builtin,
                },
                Builtin {
                    name: "help",
                    handler: help_builtin,
                },
                Builtin {
                    name: "exit",
                    handler: exit_builtin,
                },
            ],
        }
    }

    pub fn lookup(&self, name: &str) -> Option<&Builtin> {
        self.table.iter().find(|builtin| builtin.name == name)
    }

    pub fn names(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.table.iter().map(|builtin| builtin.name)
    }
}

fn cd_builtin(args: &[&str], _: &Builtins, _: &mut dyn Write) -> Result<Status, ShellError> {
    let Some(&path) = args.get(1) else {
        return Err(ShellError::MissingArgument);
    };

    env::set_current_dir(path).map_err(|source| ShellError::DirectoryChange {
        path: path.to_string(),
        source,
    })?;

    Ok(Status::Continue)
}

fn help_builtin(
    _: &[&str],
    builtins: &Builtins,
    out: &mut dyn Write,
) -> Result<Status, ShellError> {
    print_to!(out, "SHH\n");
    print_to!(out, "Type program names and arguments, and hit enter.\n");
    print_to!(out, "The following are built in:\n");
    for name in builtins.names() {
        print_to!(out, "    {name}\n");
    }
    print_to!(out, "Use the man command for information on other programs.\n");

    Ok(Status::Continue)
}

fn exit_builtin(_: &[&str], _: &Builtins, _: &mut dyn Write) -> Result<Status, ShellError> {
    Ok(Status::Stop)
}
