use crate::constants::export::BACKUP_EXT;
use crate::error::*;
use std::path::{Path, PathBuf};

/// Formats bytes into a human-readable string (KB, MB, etc.)
///
/// # Arguments
///
/// * `bytes` - The number of bytes to format
///
/// # Returns
///
/// A string representing the number of bytes in a human-readable format
///
/// # Examples
///
/// ```
/// use santext::utils::format_bytes;
///
/// assert_eq!(format_bytes(12), "12 B");
/// assert_eq!(format_bytes(1024), "1.0 KB");
/// assert_eq!(format_bytes(1024 * 1024), "1.0 MB");
/// assert_eq!(format_bytes(1024 * 1024 * 1024), "1.0 GB");
/// ```
pub fn format_bytes(bytes: u64) -> String {
    const KB: u64 = 1024;
    const MB: u64 = KB * 1024;
    const GB: u64 = MB * 1024;

    if bytes >= GB {
        format!("{:.1} GB", bytes as f64 / GB as f64)
    } else if bytes >= MB {
        format!("{:.1} MB", bytes as f64 / MB as f64)
    } else if bytes >= KB {
        format!("{:.1} KB", bytes as f64 / KB as f64)
    } else {
        format!("{} B", bytes)
    }
}

/// Path of the backup kept while a file is being replaced (`name.ext.bak`)
pub fn backup_path(path: &Path) -> PathBuf {
    if let Some(ext) = path.extension().and_then(|ext| ext.to_str()) {
        path.with_extension(format!("{}.{}", ext, BACKUP_EXT))
    } else {
        path.with_extension(BACKUP_EXT)
    }
}

/// Moves an existing file aside before it gets overwritten.
///
/// # Arguments
/// * `path` - The path of the file to backup.
///
/// # Returns
/// Returns a Result indicating success or failure.
pub fn create_backup(path: &Path) -> Result<()> {
    std::fs::rename(path, backup_path(path))?;
    Ok(())
}

/// Restores a backup file by renaming it back to its original name.
///
/// # Arguments
/// * `path` - The path of the file to restore from backup.
///
/// # Returns
/// Returns a Result indicating success or failure.
pub fn restore_backup(path: &Path) -> Result<()> {
    let backup = backup_path(path);
    if backup.exists() {
        std::fs::rename(&backup, path)?;
    }
    Ok(())
}

/// Removes a backup file if present.
///
/// # Arguments
/// * `path` - The path of the file whose backup is removed.
///
/// # Returns
/// Returns a Result indicating success or failure.
pub fn remove_backup(path: &Path) -> Result<()> {
    let backup = backup_path(path);
    if backup.exists() {
        std::fs::remove_file(&backup)?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use std::io::Write;
    use tempfile::NamedTempFile;

    use super::*;

    #[test]
    fn test_format_bytes() {
        assert_eq!(format_bytes(0), "0 B");
        assert_eq!(format_bytes(1023), "1023 B");
        assert_eq!(format_bytes(1536), "1.5 KB");
        assert_eq!(format_bytes(1024 * 1024 * 1024 * 1024 * 16), "16384.0 GB");
    }

    #[test]
    fn test_backup_path() {
        assert_eq!(
            backup_path(Path::new("/tmp/out.json")),
            PathBuf::from("/tmp/out.json.bak")
        );
        assert_eq!(backup_path(Path::new("/tmp/out")), PathBuf::from("/tmp/out.bak"));
    }

    #[test]
    fn test_backup_operations() -> Result<()> {
        let mut temp_file = NamedTempFile::new()?;
        let original_path = temp_file.path().to_path_buf();
        writeln!(temp_file, "Original content")?;
        temp_file.flush()?;

        let new_path = original_path.with_extension("txt");
        std::fs::rename(&original_path, &new_path)?;

        create_backup(&new_path)?;
        let backup = new_path.with_extension("txt.bak");
        assert!(backup.exists(), "Backup file should exist after create_backup");
        assert!(
            !new_path.exists(),
            "Original file should not exist after create_backup"
        );

        restore_backup(&new_path)?;
        assert!(new_path.exists(), "Original file should exist after restore_backup");
        assert!(
            !backup.exists(),
            "Backup file should not exist after restore_backup"
        );
        assert_eq!(std::fs::read_to_string(&new_path)?, "Original content\n");

        create_backup(&new_path)?;
        remove_backup(&new_path)?;
        assert!(!backup.exists(), "Backup file should not exist after remove_backup");

        Ok(())
    }
}
