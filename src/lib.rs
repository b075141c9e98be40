pub mod builtin;
pub mod config;
pub mod launch;
pub mod lexer;
pub mod macros;
pub mod read_line;
pub mod shell;

use nix::errno::Errno;
use std::collections::TryReserveError;
use std::io;

pub use builtin::Builtins;
pub use config::Config;
pub use shell::Shell;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Status {
    Continue,
    Stop,
}

#[derive(thiserror::Error, Debug)]
pub enum ShellError {
    #[error("expected argument to \"cd\"")]
    MissingArgument,
    #[error("cd: {path}: {source}")]
    DirectoryChange {
        path: String,
        #[source]
        source: io::Error,
    },
    #[error("{0}: argument contains a nul byte")]
    InvalidArgument(String),
    #[error("fork: {}", .0.desc())]
    Spawn(Errno),
    #[error("wait: {}", .0.desc())]
    Wait(Errno),
    #[error("allocation error")]
    Allocation(#[from] TryReserveError),
    #[error("write: {0}")]
    Write(#[from] io::Error),
    #[error("read: {0}")]
    Read(#[source] io::Error),
}

impl ShellError {
    /// Fatal errors end the interpreter; everything else is reported and the loop goes on.
    pub fn is_fatal(&self) -> bool {
        matches!(self, ShellError::Allocation(_) | ShellError::Read(_))
    }
}
