use crate::{ShellError, Status};
use log::{debug, trace};
use nix::errno::Errno;
use nix::sys::wait::{WaitPidFlag, WaitStatus, waitpid};
use nix::unistd::{ForkResult, Pid, fork, write};
use std::ffi::{CString, c_char};
use std::io;
use std::ptr;

/// Forks and execs `args[0]`, then waits for it.
/// `Err` means fork or wait failed; the caller reports it.
pub fn launch(args: &[&str], name: &str) -> Result<Status, ShellError> {
    let argv = to_argv(args)?;
    if argv.is_empty() {
        return Ok(Status::Continue);
    }
    // Everything the child touches is allocated here, before forking.
    let argv_ptrs: Vec<*const c_char> = argv
        .iter()
        .map(|arg| arg.as_ptr())
        .chain([ptr::null()])
        .collect();
    let prefix = format!("{name}: {}: ", args[0]);

    // SAFETY: the child only calls execvp, write and _exit before it is replaced or gone.
    match unsafe { fork() }.map_err(ShellError::Spawn)? {
        ForkResult::Child => exec_child(&argv_ptrs, &prefix),
        ForkResult::Parent { child } => {
            debug!("started {} as pid {child}", args[0]);
            wait_for(child)?;
            Ok(Status::Continue)
        }
    }
}

fn to_argv(args: &[&str]) -> Result<Vec<CString>, ShellError> {
    args.iter()
        .map(|arg| CString::new(*arg).map_err(|_| ShellError::InvalidArgument(arg.to_string())))
        .collect()
}

fn exec_child(argv: &[*const c_char], prefix: &str) -> ! {
    // SAFETY: every pointer comes from a CString that outlives this call.
    unsafe { libc::execvp(argv[0], argv.as_ptr()) };
    let errno = Errno::last();

    let stderr = io::stderr();
    let _ = write(&stderr, prefix.as_bytes());
    let _ = write(&stderr, errno.desc().as_bytes());
    let _ = write(&stderr, b"\n");

    // SAFETY: _exit never returns and runs no atexit handlers or buffer flushes.
    unsafe { libc::_exit(libc::EXIT_FAILURE) }
}

// A stopped child is still running.
fn wait_for(child: Pid) -> Result<(), ShellError> {
    loop {
        match waitpid(child, Some(WaitPidFlag::WUNTRACED)) {
            Ok(WaitStatus::Exited(pid, code)) => {
                debug!("pid {pid} exited with status {code}");
                return Ok(());
            }
            Ok(WaitStatus::Signaled(pid, signal, _)) => {
                debug!("pid {pid} killed by {signal:?}");
                return Ok(());
            }
            Ok(status) => trace!("pid {child} still alive: {status:?}"),
            Err(Errno::EINTR) => continue,
            Err(errno) => return Err(ShellError::Wait(errno)),
        }
    }
}
