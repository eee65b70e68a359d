//! Process exit codes, following the BSD `sysexits.h` conventions.

pub type ExitCode = i32;

/// Successful exit
pub const OK: ExitCode = 0;

/// The command was used incorrectly, e.g., with the wrong number of
/// arguments or a missing credential ID.
pub const USAGE: ExitCode = 64;

/// The input data was incorrect in some way.
pub const DATAERR: ExitCode = 65;

/// The requested certificate does not exist.
pub const NOINPUT: ExitCode = 66;

/// The certificate API could not be reached or returned an unusable answer.
pub const UNAVAILABLE: ExitCode = 69;

/// An internal software error has been detected.
pub const SOFTWARE: ExitCode = 70;

/// An error occurred while doing I/O on some file or stream.
pub const IOERR: ExitCode = 74;

/// Something was found in an unconfigured or misconfigured state.
pub const CONFIG: ExitCode = 78;
