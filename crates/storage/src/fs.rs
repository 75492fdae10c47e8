//! Small file helpers shared by the JSON-backed stores.

use std::io;
use std::path::Path;

/// Read a file, `None` if it does not exist.
pub async fn read_optional(path: &Path) -> io::Result<Option<String>> {
    match tokio::fs::read_to_string(path).await {
        Ok(contents) => Ok(Some(contents)),
        Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(None),
        Err(e) => Err(e),
    }
}

/// Write through a sibling temp file and rename over `path`.
///
/// Parent directories are created as needed.
pub async fn write_replace(path: &Path, contents: &[u8]) -> io::Result<()> {
    if let Some(parent) = path.parent() {
        tokio::fs::create_dir_all(parent).await?;
    }

    let mut tmp = path.as_os_str().to_owned();
    tmp.push(".tmp");
    let tmp = Path::new(&tmp);

    tokio::fs::write(tmp, contents).await?;
    tokio::fs::rename(tmp, path).await
}
