use std::fs::create_dir_all;
use std::path::{Path, PathBuf};

use nu_ansi_term::Color::Yellow;

use crate::debug;
use crate::error::*;
use crate::format::FormatHint;
use crate::log;
use crate::utils::{create_backup, remove_backup, restore_backup};

/// Saves text content as a file.
pub trait FileExport {
    /// Saves the content under the given file name.
    ///
    /// # Arguments
    /// * `content` - The text to save
    /// * `file_name` - Name of the file to create or replace
    /// * `mime_type` - Declared media type of the content
    ///
    /// # Returns
    /// The path of the saved file
    fn save(&self, content: &str, file_name: &str, mime_type: &str) -> Result<PathBuf>;
}

/// Builds the name of an exported file from a base name and the active hint.
///
/// # Examples
/// ```
/// use santext::export::export_file_name;
/// use santext::format::FormatHint;
///
/// assert_eq!(export_file_name("santext-export", FormatHint::Json), "santext-export.json");
/// assert_eq!(export_file_name("santext-export", FormatHint::PlainText), "santext-export.txt");
/// ```
pub fn export_file_name(base: &str, hint: FormatHint) -> String {
    format!("{}.{}", base, hint.extension())
}

/// Writes exported files into a directory on disk.
///
/// An existing file is moved to a `.bak` backup first; the backup is restored
/// when the write fails, so a failed save leaves the previous file in place.
pub struct DiskExport {
    output_dir: PathBuf,
}

impl DiskExport {
    pub fn new<P: AsRef<Path>>(output_dir: P) -> Self {
        Self {
            output_dir: output_dir.as_ref().to_path_buf(),
        }
    }

    fn export_error(path: &Path, cause: impl ToString) -> Error {
        Error::ExportError {
            file: path.to_string_lossy().to_string(),
            cause: log::debug_message(
                cause.to_string(),
                Yellow
                    .paint(format!("\n[Output path] {}", path.to_string_lossy()))
                    .to_string(),
            ),
        }
    }
}

impl FileExport for DiskExport {
    fn save(&self, content: &str, file_name: &str, mime_type: &str) -> Result<PathBuf> {
        let path = self.output_dir.join(file_name);
        if !self.output_dir.as_os_str().is_empty() {
            create_dir_all(&self.output_dir).map_err(|e| Self::export_error(&path, e))?;
        }

        let replacing = path.exists();
        if replacing {
            create_backup(&path).map_err(|e| Self::export_error(&path, e))?;
        }

        match std::fs::write(&path, content) {
            Ok(_) => {
                if replacing {
                    remove_backup(&path).map_err(|e| Self::export_error(&path, e))?;
                }
                debug!(
                    "Saved {} bytes ({}) to {}",
                    content.len(),
                    mime_type,
                    path.to_string_lossy()
                );
                Ok(path)
            }
            Err(e) => {
                if replacing {
                    if let Err(restore) = restore_backup(&path) {
                        return Err(Self::export_error(
                            &path,
                            format!("{} (backup not restored: {})", e, restore),
                        ));
                    }
                }
                Err(Self::export_error(&path, e))
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::constants::export::MIME_TYPE;

    #[test]
    fn test_save_creates_directories() -> Result<()> {
        let temp_dir = tempfile::tempdir()?;
        let exporter = DiskExport::new(temp_dir.path().join("nested").join("out"));

        let path = exporter.save("{\"a\":1}", "santext-export.json", MIME_TYPE)?;
        assert_eq!(path, temp_dir.path().join("nested/out/santext-export.json"));
        assert_eq!(std::fs::read_to_string(&path)?, "{\"a\":1}");
        Ok(())
    }

    #[test]
    fn test_save_replaces_without_leftover_backup() -> Result<()> {
        let temp_dir = tempfile::tempdir()?;
        let exporter = DiskExport::new(temp_dir.path());

        exporter.save("first", "result.txt", MIME_TYPE)?;
        let path = exporter.save("second", "result.txt", MIME_TYPE)?;

        assert_eq!(std::fs::read_to_string(&path)?, "second");
        assert!(!temp_dir.path().join("result.txt.bak").exists());
        Ok(())
    }

    #[test]
    fn test_backup_failure_reports_export_error() -> Result<()> {
        let temp_dir = tempfile::tempdir()?;
        let exporter = DiskExport::new(temp_dir.path());
        std::fs::write(temp_dir.path().join("result.txt"), "previous")?;
        // A directory in the way of the backup makes the rename fail
        std::fs::create_dir(temp_dir.path().join("result.txt.bak"))?;
        std::fs::write(temp_dir.path().join("result.txt.bak").join("keep"), "x")?;

        let result = exporter.save("next", "result.txt", MIME_TYPE);

        assert!(matches!(result, Err(Error::ExportError { .. })));
        assert_eq!(
            std::fs::read_to_string(temp_dir.path().join("result.txt"))?,
            "previous"
        );
        Ok(())
    }

    #[test]
    fn test_failed_save_reports_export_error() -> Result<()> {
        let temp_dir = tempfile::tempdir()?;
        let exporter = DiskExport::new(temp_dir.path());

        let result = exporter.save("content", "missing/child.txt", MIME_TYPE);

        assert!(matches!(result, Err(Error::ExportError { .. })));
        assert!(!temp_dir.path().join("missing").exists());
        Ok(())
    }
}
