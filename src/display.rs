use std::fmt::Write;
use std::str::FromStr;

use nu_ansi_term::Color::{Cyan, Green};
use serde::{Deserialize, Serialize};
use serde_json::json;
use strum_macros::Display;

use crate::error::*;
use crate::format::FormatHint;
use crate::operation::TransformOperation;
use crate::stats::TextStats;
use crate::utils::format_bytes;

/// How stats are rendered
#[derive(Debug, Display, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[strum(serialize_all = "lowercase")]
#[serde(rename_all = "lowercase")]
pub enum StatsStyle {
    #[default]
    Human,
    Json,
}

impl FromStr for StatsStyle {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_lowercase().as_str() {
            "human" | "table" => Ok(StatsStyle::Human),
            "json" => Ok(StatsStyle::Json),
            _ => Err(Error::ArgsProcessingError(format!(
                "Invalid stats style \"{}\" (expected human or json)",
                s
            ))),
        }
    }
}

/// Renders the stats of the input and, when present, of the output.
///
/// # Arguments
/// * `input` - Stats of the input text
/// * `output` - Stats of the transformed text
/// * `style` - Human readable table or JSON document
/// * `colored` - Whether to paint the human table headers
///
/// # Examples
/// ```
/// use santext::display::{render_stats, StatsStyle};
/// use santext::stats::TextStats;
///
/// let input = TextStats::compute("hello world");
/// let rendered = render_stats(&input, None, StatsStyle::Json, false).unwrap();
/// assert!(rendered.contains("\"word_count\": 2"));
/// ```
pub fn render_stats(
    input: &TextStats,
    output: Option<&TextStats>,
    style: StatsStyle,
    colored: bool,
) -> Result<String> {
    match style {
        StatsStyle::Json => {
            let document = match output {
                Some(output) => json!({ "input": input, "output": output }),
                None => json!({ "input": input }),
            };
            let mut rendered =
                serde_json::to_string_pretty(&document).map_err(|e| Error::Msg(e.to_string()))?;
            rendered.push('\n');
            Ok(rendered)
        }
        StatsStyle::Human => {
            let mut table = String::new();
            let header = format!(
                "{:<8}{:>10}{:>10}{:>10}{:>12}",
                "", "chars", "words", "lines", "size"
            );
            if colored {
                writeln!(table, "{}", Cyan.bold().paint(header))?;
            } else {
                writeln!(table, "{}", header)?;
            }
            write_row(&mut table, "input", input)?;
            if let Some(output) = output {
                write_row(&mut table, "output", output)?;
            }
            Ok(table)
        }
    }
}

fn write_row(table: &mut String, label: &str, stats: &TextStats) -> Result<()> {
    writeln!(
        table,
        "{:<8}{:>10}{:>10}{:>10}{:>12}",
        label,
        stats.character_count,
        stats.word_count,
        stats.line_count,
        format_bytes(stats.byte_size as u64)
    )?;
    Ok(())
}

/// Renders the list of supported operations and formats.
pub fn render_catalog(colored: bool) -> Result<String> {
    let paint = |text: &str| {
        if colored {
            Green.paint(text).to_string()
        } else {
            text.to_string()
        }
    };

    let mut catalog = String::new();
    writeln!(catalog, "Operations:")?;
    for op in TransformOperation::ALL {
        let name = format!("{:<22}", op.to_string());
        writeln!(catalog, "  {}{}", paint(&name), op.description())?;
    }
    writeln!(catalog)?;
    writeln!(catalog, "Formats:")?;
    let formats = FormatHint::ALL
        .iter()
        .map(|hint| hint.to_string())
        .collect::<Vec<String>>()
        .join(", ");
    writeln!(catalog, "  {}", paint(&formats))?;
    Ok(catalog)
}
