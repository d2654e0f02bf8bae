//! Child-copy options and top-level error types.

use std::fmt;
use std::path::PathBuf;

////////////////////////////////////////////////////////////////////////////////
// #region OptionsInit

/// Input options for `copy_all_children`. Both flags default to off,
/// matching the operation's historical default arguments.
#[derive(Debug, Clone, Copy, Default)]
pub struct SpecCopyChildrenOptions {
    /// Remove the whole origin directory tree after every child is copied.
    pub if_delete_origin_when_done: bool,
    /// Exclude dot-prefixed entries from enumeration entirely (they count
    /// neither toward emptiness nor toward copying).
    pub if_ignore_hidden_files: bool,
}

// #endregion
////////////////////////////////////////////////////////////////////////////////
// #region Errors

/// Terminal outcome of one failed `copy_all_children` call.
///
/// Every kind aborts the whole call; children copied before the failure stay
/// in the target and no kind is retried internally.
#[derive(Debug)]
pub enum CopyChildrenError {
    /// Nothing exists at the origin path.
    OriginDoesNotExist(PathBuf),
    /// Origin exists but is not a directory.
    OriginIsNotADirectory(PathBuf),
    /// Origin has zero eligible children, or its listing could not be read.
    /// A listing failure (e.g. permissions) reports this same kind.
    OriginIsEmpty(PathBuf),
    /// Origin and target are the same path. Literal comparison of the paths
    /// as given; two spellings of one location are not detected.
    OriginAndTargetAreTheSame(PathBuf),
    /// Target exists but is not a directory.
    TargetExistsButIsNotADirectory(PathBuf),
    /// Target directory creation failed.
    CouldNotCreateDirectoryForTarget {
        /// Target path whose creation failed.
        path: PathBuf,
        /// Underlying IO error text.
        message: String,
    },
    /// Overwrite-delete of a same-named existing target entry failed.
    FailedToDeleteExistingTargetItem {
        /// Target entry that could not be removed.
        path: PathBuf,
        /// Underlying IO error text.
        message: String,
    },
    /// Copy of one origin child into the target failed.
    FailedToCopyItem {
        /// Origin child that could not be copied.
        path: PathBuf,
        /// Underlying IO error text.
        message: String,
    },
    /// Post-copy removal of the origin directory failed. Copies already in
    /// the target remain valid.
    FailedToDeleteOrigin {
        /// Origin path that could not be removed.
        path: PathBuf,
        /// Underlying IO error text.
        message: String,
    },
}

impl fmt::Display for CopyChildrenError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::OriginDoesNotExist(path) => {
                write!(f, "Origin does not exist: {}", path.display())
            }
            Self::OriginIsNotADirectory(path) => {
                write!(f, "Origin is not a directory: {}", path.display())
            }
            Self::OriginIsEmpty(path) => {
                write!(
                    f,
                    "Origin has no eligible children or could not be listed: {}",
                    path.display()
                )
            }
            Self::OriginAndTargetAreTheSame(path) => {
                write!(f, "Origin and target are the same path: {}", path.display())
            }
            Self::TargetExistsButIsNotADirectory(path) => {
                write!(
                    f,
                    "Target exists but is not a directory: {}",
                    path.display()
                )
            }
            Self::CouldNotCreateDirectoryForTarget { path, message } => {
                write!(
                    f,
                    "Failed to create target directory {}: {message}",
                    path.display()
                )
            }
            Self::FailedToDeleteExistingTargetItem { path, message } => {
                write!(
                    f,
                    "Failed to delete existing target item {}: {message}",
                    path.display()
                )
            }
            Self::FailedToCopyItem { path, message } => {
                write!(f, "Failed to copy item {}: {message}", path.display())
            }
            Self::FailedToDeleteOrigin { path, message } => {
                write!(f, "Failed to delete origin {}: {message}", path.display())
            }
        }
    }
}

impl std::error::Error for CopyChildrenError {}

// #endregion
////////////////////////////////////////////////////////////////////////////////

#[cfg(test)]
mod tests {
    use std::path::PathBuf;

    use super::{CopyChildrenError, SpecCopyChildrenOptions};

    #[test]
    fn options_default_is_all_off() {
        let spec_cp_options = SpecCopyChildrenOptions::default();
        assert!(!spec_cp_options.if_delete_origin_when_done);
        assert!(!spec_cp_options.if_ignore_hidden_files);
    }

    #[test]
    fn error_display_names_path_and_cause() {
        let path = PathBuf::from("/data/origin");

        let txt = CopyChildrenError::OriginDoesNotExist(path.clone()).to_string();
        assert_eq!(txt, "Origin does not exist: /data/origin");

        let txt = CopyChildrenError::OriginIsEmpty(path.clone()).to_string();
        assert_eq!(
            txt,
            "Origin has no eligible children or could not be listed: /data/origin"
        );

        let txt = CopyChildrenError::FailedToCopyItem {
            path: path.join("a.txt"),
            message: "permission denied".to_string(),
        }
        .to_string();
        assert_eq!(txt, "Failed to copy item /data/origin/a.txt: permission denied");
    }
}
