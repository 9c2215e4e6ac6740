//! The input harness: open, bounded read, diagnostic dump, parse invocation,
//! close. One linear pass per process invocation; the exit status reflects
//! the I/O steps only, never the target's parse outcome.

use std::fs::File;
use std::io::{self, Read, Write};
use std::path::Path;

use thiserror::Error;

use crate::dump;
use crate::target;

/// Upper bound on bytes read from an input file per invocation. Larger files
/// are fed truncated — the bound is compile-time, so hostile input sizes can
/// never grow the buffer.
pub const INPUT_BUFFER_SIZE: usize = 4096;

/// An I/O step failure. The Display output is the diagnostic line verbatim.
#[derive(Debug, Error)]
pub enum HarnessError {
    #[error("error (open): {0}")]
    Open(io::Error),
    #[error("error (read): {0}")]
    Read(io::Error),
    #[error("error (close): {0}")]
    Close(io::Error),
}

/// Run the harness once over `path`, writing diagnostics to `out`.
///
/// An open failure aborts before any read. A read failure still closes the
/// file. A close failure fails the run even when everything else succeeded.
/// Short reads, including zero bytes at EOF, are ordinary inputs. The
/// parse-result handle is released before returning; a target that crashes
/// instead takes the process down abnormally, which is exactly the signal a
/// fuzzer watches for.
pub fn run(path: &Path, out: &mut impl Write) -> Result<(), HarnessError> {
    let mut file = File::open(path).map_err(HarnessError::Open)?;

    // One payload-sized read plus a reserved terminator byte: the buffer is
    // zeroed up front, so `buf[..=n]` is a null-terminated view even when
    // the read fills the whole payload region.
    let mut buf = [0u8; INPUT_BUFFER_SIZE + 1];
    let read = match file.read(&mut buf[..INPUT_BUFFER_SIZE]) {
        Ok(n) => {
            dump::write_dump(out, &buf[..n]).ok();
            let _doc = target::parse(&buf, n);
            Ok(())
        }
        Err(e) => Err(e),
    };

    let closed = close(file);

    match (read, closed) {
        (Ok(()), Ok(())) => Ok(()),
        (Ok(()), Err(e)) => Err(HarnessError::Close(e)),
        (Err(e), Ok(())) => Err(HarnessError::Read(e)),
        (Err(read_err), Err(close_err)) => {
            // Both steps failed. The close failure still reaches the
            // diagnostic stream; the read failure is the primary error.
            writeln!(out, "{}", HarnessError::Close(close_err)).ok();
            Err(HarnessError::Read(read_err))
        }
    }
}

/// Close the file, observing the result — `File`'s drop would swallow it.
#[cfg(unix)]
fn close(file: File) -> io::Result<()> {
    use std::os::unix::io::IntoRawFd;

    let fd = file.into_raw_fd();
    // Safety: the fd was just detached from `file`, so it is closed exactly
    // once, here.
    if unsafe { libc::close(fd) } == -1 {
        Err(io::Error::last_os_error())
    } else {
        Ok(())
    }
}

#[cfg(not(unix))]
fn close(file: File) -> io::Result<()> {
    drop(file);
    Ok(())
}
