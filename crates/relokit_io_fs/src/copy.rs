//! Origin validation and child-copy orchestration.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use crate::spec::{CopyChildrenError, SpecCopyChildrenOptions};
use crate::util::{copy_item, is_hidden_name, remove_item};

#[derive(Debug, Clone)]
struct SpecChildEntry {
    path_item_src: PathBuf,
    name_item: String,
}

/// Copy every direct child of `dir_origin` into `dir_target`.
///
/// Behavior is controlled by [`SpecCopyChildrenOptions`]:
/// - `if_ignore_hidden_files` excludes dot-prefixed entries from the listing,
/// - `if_delete_origin_when_done` removes the origin tree after the copy.
///
/// The call validates in order: origin exists and is a directory, origin has
/// at least one eligible child, origin and target are different paths, target
/// is (or becomes) a directory. Each child is then copied wholesale into
/// `dir_target/<name>`, replacing any same-named existing entry. The first
/// failure aborts the whole call; children copied before it stay in the
/// target, there is no rollback.
///
/// Returns `()` on success. Returns [`CopyChildrenError`] naming the single
/// violated precondition or failed step otherwise.
pub fn copy_all_children<P, Q>(
    dir_origin: P,
    dir_target: Q,
    spec_cp_options: SpecCopyChildrenOptions,
) -> Result<(), CopyChildrenError>
where
    P: AsRef<Path>,
    Q: AsRef<Path>,
{
    let path_dir_origin = dir_origin.as_ref().to_path_buf();
    let path_dir_target = dir_target.as_ref().to_path_buf();

    let meta_dir_origin = match fs::metadata(&path_dir_origin) {
        Ok(v) => v,
        Err(_) => return Err(CopyChildrenError::OriginDoesNotExist(path_dir_origin)),
    };
    if !meta_dir_origin.is_dir() {
        return Err(CopyChildrenError::OriginIsNotADirectory(path_dir_origin));
    }

    // A listing failure reports the same kind as a legitimately empty origin.
    let l_children =
        match list_child_entries(&path_dir_origin, spec_cp_options.if_ignore_hidden_files) {
            Ok(v) => v,
            Err(_) => return Err(CopyChildrenError::OriginIsEmpty(path_dir_origin)),
        };
    if l_children.is_empty() {
        return Err(CopyChildrenError::OriginIsEmpty(path_dir_origin));
    }

    // Literal comparison of the paths as given; aliases are not resolved.
    if path_dir_origin == path_dir_target {
        return Err(CopyChildrenError::OriginAndTargetAreTheSame(
            path_dir_origin,
        ));
    }

    match fs::metadata(&path_dir_target) {
        Ok(meta_dir_target) => {
            if !meta_dir_target.is_dir() {
                return Err(CopyChildrenError::TargetExistsButIsNotADirectory(
                    path_dir_target,
                ));
            }
        }
        Err(_) => {
            fs::create_dir_all(&path_dir_target).map_err(|e| {
                CopyChildrenError::CouldNotCreateDirectoryForTarget {
                    path: path_dir_target.clone(),
                    message: e.to_string(),
                }
            })?;
        }
    }

    for spec_child_entry in &l_children {
        let path_item_dst = path_dir_target.join(&spec_child_entry.name_item);

        // Same-named target entries are replaced wholesale, never merged.
        if fs::symlink_metadata(&path_item_dst).is_ok() {
            remove_item(&path_item_dst).map_err(|e| {
                CopyChildrenError::FailedToDeleteExistingTargetItem {
                    path: path_item_dst.clone(),
                    message: e.to_string(),
                }
            })?;
        }

        copy_item(&spec_child_entry.path_item_src, &path_item_dst).map_err(|e| {
            CopyChildrenError::FailedToCopyItem {
                path: spec_child_entry.path_item_src.clone(),
                message: e.to_string(),
            }
        })?;
    }

    if spec_cp_options.if_delete_origin_when_done {
        remove_item(&path_dir_origin).map_err(|e| CopyChildrenError::FailedToDeleteOrigin {
            path: path_dir_origin.clone(),
            message: e.to_string(),
        })?;
    }

    Ok(())
}

fn list_child_entries(
    path_dir_origin: &Path,
    if_ignore_hidden: bool,
) -> io::Result<Vec<SpecChildEntry>> {
    let mut l_children: Vec<SpecChildEntry> = Vec::new();

    for _entry_res in fs::read_dir(path_dir_origin)? {
        let entry = _entry_res?;
        let name_item = entry.file_name().to_string_lossy().to_string();
        if if_ignore_hidden && is_hidden_name(&name_item) {
            continue;
        }
        l_children.push(SpecChildEntry {
            path_item_src: entry.path(),
            name_item,
        });
    }

    l_children.sort_by(|a, b| a.name_item.cmp(&b.name_item));
    Ok(l_children)
}
