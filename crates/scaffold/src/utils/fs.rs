use log::debug;
use std::path::Path;
use tokio::{fs, io};

/// Recursively copies every entry of `src` into `dst`, creating `dst` and any
/// missing parents first.
///
/// Entries are classified by the kind reported in the directory listing, so
/// symbolic links are never descended; a link is copied through `fs::copy`,
/// which reads the file it points at. The first error aborts the copy and
/// whatever was written before it stays in place.
pub async fn copy_dir_all(src: impl AsRef<Path>, dst: impl AsRef<Path>) -> io::Result<()> {
    let (src, dst) = (src.as_ref(), dst.as_ref());
    fs::create_dir_all(dst).await?;
    debug!("ensured directory {}", dst.display());

    let mut entries = fs::read_dir(src).await?;
    while let Some(entry) = entries.next_entry().await? {
        let entry_path = entry.path();
        let target_path = dst.join(entry.file_name());
        if entry.file_type().await?.is_dir() {
            Box::pin(copy_dir_all(entry_path, target_path)).await?;
        } else {
            fs::copy(&entry_path, &target_path).await?;
            debug!(
                "copied {} -> {}",
                entry_path.display(),
                target_path.display()
            );
        }
    }
    Ok(())
}

/// Returns `true` when `dir` exists and holds at least one entry.
///
/// A missing directory counts as empty. Every other listing error is returned
/// as is.
pub async fn is_non_empty_dir(dir: impl AsRef<Path>) -> io::Result<bool> {
    match fs::read_dir(dir).await {
        Ok(mut entries) => Ok(entries.next_entry().await?.is_some()),
        // Absent and empty are the same answer for this check only.
        Err(err) if err.kind() == io::ErrorKind::NotFound => Ok(false),
        Err(err) => Err(err),
    }
}
