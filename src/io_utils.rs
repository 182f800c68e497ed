use std::io;
use std::path::Path;

/// Format an I/O error with the failing operation, the path and a short
/// remedy hint.
pub fn format_io_error(operation: &str, path: &Path, err: &io::Error) -> String {
    use io::ErrorKind::*;
    let suggestion = match err.kind() {
        NotFound => "Check that the file exists and the path is correct.",
        PermissionDenied => "Check permissions or run as a different user.",
        WriteZero => "Disk may be full. Free up space and try again.",
        Other if err.raw_os_error() == Some(28) => "Disk may be full. Free up space and try again.",
        _ => "Check permissions or free up disk space.",
    };
    format!(
        "Error {} '{}': {}. {}",
        operation,
        path.display(),
        err,
        suggestion
    )
}

/// Attach operation and path context to an I/O error.
pub fn io_error(operation: &str, path: &Path, err: io::Error) -> io::Error {
    io::Error::new(err.kind(), format_io_error(operation, path, &err))
}
