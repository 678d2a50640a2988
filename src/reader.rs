use crate::{debug, error::*, format::FormatHint, log};

use nu_ansi_term::Color::Yellow;

use std::io::Read;
use std::path::{Path, PathBuf};

/// Where the text to transform comes from
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InputSource {
    File(PathBuf),
    Inline(String),
    Stdin,
}

/// Text read from a source, along with the format hinted by its file name
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Input {
    pub text: String,
    pub hint: Option<FormatHint>,
}

pub struct InputReader {}

impl InputReader {
    /// Reads the full contents of the given source as UTF-8 text.
    ///
    /// Files also yield a format hint inferred from their extension, `None`
    /// when the extension is not recognized.
    ///
    /// # Examples
    /// ```
    /// use santext::format::FormatHint;
    /// use santext::reader::{InputReader, InputSource};
    ///
    /// let temp_dir = tempfile::tempdir().unwrap();
    /// let file = temp_dir.path().join("data.json");
    /// std::fs::write(&file, "{\"a\": 1}").unwrap();
    ///
    /// let input = InputReader::read(&InputSource::File(file)).unwrap();
    /// assert_eq!(input.text, "{\"a\": 1}");
    /// assert_eq!(input.hint, Some(FormatHint::Json));
    /// ```
    pub fn read(source: &InputSource) -> Result<Input> {
        let input = match source {
            InputSource::File(path) => Input {
                text: InputReader::read_file(path)?,
                hint: InputReader::hint_for(path),
            },
            InputSource::Inline(text) => Input {
                text: text.clone(),
                hint: None,
            },
            InputSource::Stdin => Input {
                text: InputReader::read_from(std::io::stdin().lock(), "<stdin>")?,
                hint: None,
            },
        };
        debug!(
            "Read {} bytes from {:?} (format hint: {:?})",
            input.text.len(),
            source,
            input.hint
        );
        Ok(input)
    }

    /// Reads everything from a reader as UTF-8 text.
    ///
    /// # Arguments
    /// * `reader` - The reader to drain
    /// * `name` - Name of the input used in error messages
    pub fn read_from<R: Read>(mut reader: R, name: &str) -> Result<String> {
        let mut bytes = Vec::new();
        reader
            .read_to_end(&mut bytes)
            .map_err(|e| Error::InputReadError {
                file: name.to_string(),
                cause: e.to_string(),
            })?;
        InputReader::decode(bytes, name)
    }

    fn read_file(path: &Path) -> Result<String> {
        let name = path.to_string_lossy().to_string();
        match std::fs::read(path) {
            Ok(bytes) => InputReader::decode(bytes, &name),
            Err(e) if e.kind() == ::std::io::ErrorKind::NotFound => Err(Error::InputNotFound {
                file: name,
                cause: log::debug_message(
                    e.to_string(),
                    Yellow
                        .paint(format!(
                            "\n[Working dir] {}",
                            std::env::current_dir()
                                .map(|d| d.to_string_lossy().to_string())
                                .unwrap_or_default()
                        ))
                        .to_string(),
                ),
            }),
            Err(e) => Err(Error::InputReadError {
                file: name,
                cause: e.to_string(),
            }),
        }
    }

    fn decode(bytes: Vec<u8>, name: &str) -> Result<String> {
        String::from_utf8(bytes).map_err(|e| Error::InputReadError {
            file: name.to_string(),
            cause: format!("input is not valid UTF-8 text ({})", e),
        })
    }

    fn hint_for(path: &Path) -> Option<FormatHint> {
        path.extension()
            .and_then(|ext| ext.to_str())
            .and_then(FormatHint::from_extension)
    }
}
