use std::fs::OpenOptions;
use std::io;
use std::path::Path;

/// Creates the file behind a `sqlite://` url so the driver can open it.
/// Other urls are left alone.
pub fn create_dev_db(db_url: &str) -> io::Result<()> {
    let Some(path) = db_url.strip_prefix("sqlite://") else {
        return Ok(());
    };
    let path = path.split('?').next().unwrap_or(path);
    if path.is_empty() || path == ":memory:" {
        return Ok(());
    }

    let path = Path::new(path);
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent)?;
    }
    OpenOptions::new().create(true).append(true).open(path)?;
    Ok(())
}
