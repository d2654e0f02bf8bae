use std::fs;
use std::io;
use std::path::Path;

////////////////////////////////////////////////////////////////////////////////
// #region NameClassification

/// Hidden convention: the entry name starts with a dot.
pub(crate) fn is_hidden_name(name_item: &str) -> bool {
    name_item.starts_with('.')
}

// #endregion
////////////////////////////////////////////////////////////////////////////////
// #region ItemPrimitives

/// Remove one filesystem item: a directory tree wholesale, a file or symlink
/// as a single entry. The stat does not follow links, so a link to a
/// directory removes the link itself.
pub(crate) fn remove_item(path_item: &Path) -> io::Result<()> {
    let meta_item = fs::symlink_metadata(path_item)?;
    if meta_item.file_type().is_dir() {
        fs::remove_dir_all(path_item)
    } else {
        fs::remove_file(path_item)
    }
}

/// Copy one filesystem item into `path_item_dst`: a regular file with its
/// metadata, a directory tree wholesale, a symlink re-created as a link.
pub(crate) fn copy_item(path_item_src: &Path, path_item_dst: &Path) -> io::Result<()> {
    let meta_item_src = fs::symlink_metadata(path_item_src)?;
    let cfg_file_type = meta_item_src.file_type();

    if cfg_file_type.is_symlink() {
        return copy_symbolic_link(path_item_src, path_item_dst);
    }
    if cfg_file_type.is_dir() {
        return copy_directory_tree(path_item_src, path_item_dst);
    }
    copy_file_with_metadata(path_item_src, path_item_dst)
}

fn copy_directory_tree(path_dir_src: &Path, path_dir_dst: &Path) -> io::Result<()> {
    fs::create_dir_all(path_dir_dst)?;

    for _entry_res in fs::read_dir(path_dir_src)? {
        let entry = _entry_res?;
        copy_item(&entry.path(), &path_dir_dst.join(entry.file_name()))?;
    }

    // Directory metadata last, after child writes stop touching mtime.
    #[cfg(target_os = "linux")]
    {
        apply_metadata_linux(path_dir_src, path_dir_dst)?;
    }
    Ok(())
}

fn copy_symbolic_link(path_item_src: &Path, path_item_dst: &Path) -> io::Result<()> {
    let path_link_target = fs::read_link(path_item_src)?;

    #[cfg(unix)]
    {
        std::os::unix::fs::symlink(&path_link_target, path_item_dst)
    }
    #[cfg(windows)]
    {
        use std::os::windows::fs::{symlink_dir, symlink_file};
        if path_item_src.is_dir() {
            symlink_dir(&path_link_target, path_item_dst)
        } else {
            symlink_file(&path_link_target, path_item_dst)
        }
    }
    #[cfg(not(any(unix, windows)))]
    {
        let _ = path_link_target;
        Err(io::Error::new(
            io::ErrorKind::Unsupported,
            "Symbolic links are unsupported on this platform",
        ))
    }
}

pub(crate) fn copy_file_with_metadata(
    path_file_src: &Path,
    path_file_dst: &Path,
) -> io::Result<()> {
    fs::copy(path_file_src, path_file_dst)?;
    #[cfg(target_os = "linux")]
    {
        apply_metadata_linux(path_file_src, path_file_dst)?;
    }
    Ok(())
}

#[cfg(target_os = "linux")]
fn apply_metadata_linux(path_item_src: &Path, path_item_dst: &Path) -> io::Result<()> {
    use filetime::{FileTime, set_file_times};

    let stat_src = fs::metadata(path_item_src)?;
    fs::set_permissions(path_item_dst, stat_src.permissions())?;

    let file_time_access = FileTime::from_last_access_time(&stat_src);
    let file_time_modify = FileTime::from_last_modification_time(&stat_src);
    set_file_times(path_item_dst, file_time_access, file_time_modify)?;

    copy_xattrs_linux(path_item_src, path_item_dst);
    Ok(())
}

#[cfg(target_os = "linux")]
fn copy_xattrs_linux(path_item_src: &Path, path_item_dst: &Path) {
    let iter_xattr_names = match xattr::list(path_item_src) {
        Ok(v) => v,
        Err(_) => return,
    };

    for name in iter_xattr_names {
        let Some(raw_value) = xattr::get(path_item_src, &name).ok().flatten() else {
            continue;
        };
        let _ = xattr::set(path_item_dst, &name, &raw_value);
    }
}

// #endregion
////////////////////////////////////////////////////////////////////////////////
