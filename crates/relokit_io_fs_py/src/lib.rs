use relokit_io_fs::{CopyChildrenError, SpecCopyChildrenOptions, copy_all_children};

use pyo3::exceptions::{PyFileNotFoundError, PyNotADirectoryError, PyOSError, PyValueError};
use pyo3::prelude::*;

const N_BRIDGE_ABI_VERSION: u64 = 1;
const C_BRIDGE_CONTRACT_VERSION: &str = "relokit.fs.copy_all_children.v1";
const C_BRIDGE_TRANSPORT: &str = "rust_native";

fn map_copy_children_error(exception: CopyChildrenError) -> PyErr {
    match exception {
        CopyChildrenError::OriginDoesNotExist(path_dir_origin) => PyFileNotFoundError::new_err(
            format!("Origin does not exist: {}", path_dir_origin.display()),
        ),
        CopyChildrenError::OriginIsNotADirectory(path_dir_origin) => {
            PyNotADirectoryError::new_err(format!(
                "Origin is not a directory: {}",
                path_dir_origin.display()
            ))
        }
        CopyChildrenError::TargetExistsButIsNotADirectory(path_dir_target) => {
            PyNotADirectoryError::new_err(format!(
                "Target exists but is not a directory: {}",
                path_dir_target.display()
            ))
        }
        CopyChildrenError::OriginAndTargetAreTheSame(path_dir_origin) => PyValueError::new_err(
            format!(
                "Origin and target are the same path: {}",
                path_dir_origin.display()
            ),
        ),
        CopyChildrenError::OriginIsEmpty(path_dir_origin) => PyOSError::new_err(format!(
            "Origin has no eligible children or could not be listed: {}",
            path_dir_origin.display()
        )),
        CopyChildrenError::CouldNotCreateDirectoryForTarget { path, message } => {
            PyOSError::new_err(format!(
                "Failed to create target directory {}: {message}",
                path.display()
            ))
        }
        CopyChildrenError::FailedToDeleteExistingTargetItem { path, message } => {
            PyOSError::new_err(format!(
                "Failed to delete existing target item {}: {message}",
                path.display()
            ))
        }
        CopyChildrenError::FailedToCopyItem { path, message } => PyOSError::new_err(format!(
            "Failed to copy item {}: {message}",
            path.display()
        )),
        CopyChildrenError::FailedToDeleteOrigin { path, message } => PyOSError::new_err(format!(
            "Failed to delete origin {}: {message}",
            path.display()
        )),
    }
}

#[pyfunction(name = "copy_all_children")]
#[pyo3(signature = (
    dir_origin,
    dir_target,
    delete_origin_when_done = false,
    ignore_hidden_files = false
))]
fn copy_all_children_py(
    py: Python<'_>,
    dir_origin: String,
    dir_target: String,
    delete_origin_when_done: bool,
    ignore_hidden_files: bool,
) -> PyResult<()> {
    let spec_cp_options = SpecCopyChildrenOptions {
        if_delete_origin_when_done: delete_origin_when_done,
        if_ignore_hidden_files: ignore_hidden_files,
    };

    let res_copy = py.allow_threads(|| copy_all_children(dir_origin, dir_target, spec_cp_options));
    res_copy.map_err(map_copy_children_error)
}

#[pymodule]
fn _relokit_io_fs_rs(module: &Bound<'_, PyModule>) -> PyResult<()> {
    module.add_function(wrap_pyfunction!(copy_all_children_py, module)?)?;
    module.add("__bridge_abi__", N_BRIDGE_ABI_VERSION)?;
    module.add("__bridge_contract__", C_BRIDGE_CONTRACT_VERSION)?;
    module.add("__bridge_transport__", C_BRIDGE_TRANSPORT)?;
    Ok(())
}
