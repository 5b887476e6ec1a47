pub mod fs;

use std::{env, path::PathBuf};

/// Installation root of the running program: the directory above the one
/// holding the executable (`<root>/bin/scaffold` -> `<root>`).
pub fn install_dir() -> Option<PathBuf> {
    let exe = env::current_exe().ok()?;
    let bin_dir = exe.parent()?;
    Some(bin_dir.parent().unwrap_or(bin_dir).to_path_buf())
}
