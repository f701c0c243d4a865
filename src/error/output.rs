//! Output directory and output file errors

use super::impl_error_constructors;

impl_error_constructors! {
    dir_failed => OutputDirFailed { path, reason },
    write_failed => FileWriteFailed { path, reason },
}
