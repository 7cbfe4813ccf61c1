//! Terminal queries via libc.
//!
//! # Safety
//! The queries are thin FFI calls. `isatty` accepts any descriptor and
//! `ioctl(TIOCGWINSZ)` only writes into the `winsize` we pass it.

#![allow(unsafe_code)]

use std::io;
use std::os::unix::io::AsRawFd;

/// Check if the given file descriptor is a TTY.
#[must_use]
pub fn is_tty<F: AsRawFd>(fd: &F) -> bool {
    // SAFETY: isatty is safe to call with any fd
    unsafe { libc::isatty(fd.as_raw_fd()) == 1 }
}

/// Columns and rows of the terminal attached to stdout.
///
/// Zero dimensions are reported as an error rather than a size nothing
/// could be drawn into.
pub fn terminal_size() -> io::Result<(u16, u16)> {
    // SAFETY: winsize is plain old data; all-zero is a valid value
    let mut size: libc::winsize = unsafe { std::mem::zeroed() };

    // SAFETY: TIOCGWINSZ writes a winsize into the pointer we provide
    let result = unsafe { libc::ioctl(libc::STDOUT_FILENO, libc::TIOCGWINSZ, &mut size) };

    if result == -1 {
        Err(io::Error::last_os_error())
    } else if size.ws_col == 0 || size.ws_row == 0 {
        Err(io::Error::new(
            io::ErrorKind::InvalidData,
            "terminal reported zero dimensions",
        ))
    } else {
        Ok((size.ws_col, size.ws_row))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_terminal_size_is_nonzero_when_available() {
        // Under CI stdout is usually not a terminal; only check the contract.
        if let Ok((cols, rows)) = terminal_size() {
            assert!(cols > 0 && rows > 0);
        }
    }

    #[test]
    fn test_is_tty_false_for_dev_null() {
        let file = std::fs::File::open("/dev/null").unwrap();
        assert!(!is_tty(&file));
    }
}
