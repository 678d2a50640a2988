use std::io::{IsTerminal, Write};
use std::path::{Path, PathBuf};

use crate::{bootstrap::BootStrap, clap_app};
use clap::ArgMatches;
use nu_ansi_term::Color::Green;
use santext::{
    config::MainConfig,
    constants::export::MIME_TYPE,
    debug,
    display::{render_catalog, render_stats, StatsStyle},
    engine::TransformEngine,
    error::*,
    export::{export_file_name, DiskExport, FileExport},
    format::FormatHint,
    operation::TransformOperation,
    reader::{Input, InputReader, InputSource},
    stats::TextStats,
};

pub struct App {
    pub matches: ArgMatches,
    interactive_output: bool,
}

impl App {
    pub fn new() -> Result<Self> {
        #[cfg(windows)]
        let _ = nu_ansi_term::enable_ansi_support();

        let interactive_output = std::io::stdout().is_terminal();

        Ok(App {
            matches: Self::matches(interactive_output)?,
            interactive_output,
        })
    }

    pub fn matches(interactive_output: bool) -> Result<ArgMatches> {
        Ok(clap_app::build_app(interactive_output).get_matches())
    }

    /// Start the application, bootstraps the configuration and runs the selected subcommand.
    ///
    /// # Returns
    /// A `Result` telling whether the subcommand completed successfully.
    pub fn start(&self) -> Result<bool> {
        let bootstrap = BootStrap::new()?;
        let config = bootstrap.get_config();

        match self.matches.subcommand() {
            Some(("apply", args)) => self.run_apply(args, config),
            Some(("stats", args)) => self.run_stats(args, config),
            Some(("list", _)) => {
                print!("{}", render_catalog(self.interactive_output)?);
                Ok(true)
            }
            Some((name, _)) => Err(Error::ArgsProcessingError(format!(
                "Unknown subcommand \"{}\"",
                name
            ))),
            None => Err(Error::ArgsProcessingError("missing subcommand".to_string())),
        }
    }

    /// Runs the operation over the input and delivers the result to stdout, a
    /// file or the export directory. A failed operation prints its reason and
    /// writes nothing.
    fn run_apply(&self, args: &ArgMatches, config: &MainConfig) -> Result<bool> {
        let operation = *args
            .get_one::<TransformOperation>("operation")
            .ok_or_else(|| Error::ArgsProcessingError("missing operation".to_string()))?;
        let input = self.read_input(args)?;
        let hint = Self::resolve_hint(args, &input, config);
        if args.contains_id("format") && !operation.is_format_sensitive() {
            debug!("Format \"{}\" has no effect on {}", hint, operation);
        }

        let result = TransformEngine::new().apply(&input.text, operation, hint);
        if let Some(style) = Self::stats_style(args, config) {
            let input_stats = TextStats::compute(&input.text);
            let output_stats = TextStats::compute(result.content());
            eprint!(
                "{}",
                render_stats(
                    &input_stats,
                    Some(&output_stats),
                    style,
                    self.interactive_output
                )?
            );
        }

        let content = match result.into_result() {
            Ok(content) => content,
            Err(error) => {
                default_error_handler(&error, &mut std::io::stderr().lock());
                return Ok(false);
            }
        };

        if let Some(output) = args.get_one::<PathBuf>("output") {
            let file_name = output
                .file_name()
                .map(|name| name.to_string_lossy().to_string())
                .ok_or_else(|| {
                    Error::ArgsProcessingError(format!(
                        "Invalid output file \"{}\"",
                        output.to_string_lossy()
                    ))
                })?;
            let parent = output.parent().unwrap_or_else(|| Path::new(""));
            let path = Self::save(&DiskExport::new(parent), &content, &file_name)?;
            self.status(&format!("File saved to {}", path.to_string_lossy()));
        } else if args.get_flag("save") {
            let file_name = export_file_name(&config.defaults.export_name, hint);
            let path = Self::save(&DiskExport::new(config.output_dir()?), &content, &file_name)?;
            self.status(&format!("File saved to {}", path.to_string_lossy()));
        } else {
            let mut stdout = std::io::stdout().lock();
            write!(stdout, "{}", content)?;
            if !args.get_flag("no-newline") {
                writeln!(stdout)?;
            }
            stdout.flush()?;
        }
        Ok(true)
    }

    fn run_stats(&self, args: &ArgMatches, config: &MainConfig) -> Result<bool> {
        let input = self.read_input(args)?;
        let style = args
            .get_one::<StatsStyle>("style")
            .copied()
            .unwrap_or(config.defaults.stats_style);
        print!(
            "{}",
            render_stats(
                &TextStats::compute(&input.text),
                None,
                style,
                self.interactive_output
            )?
        );
        Ok(true)
    }

    /// Reads the whole input, rejecting an empty text before anything runs.
    fn read_input(&self, args: &ArgMatches) -> Result<Input> {
        let source = if let Some(file) = args.get_one::<PathBuf>("input") {
            InputSource::File(file.clone())
        } else if let Some(text) = args.get_one::<String>("text") {
            InputSource::Inline(text.clone())
        } else if std::io::stdin().is_terminal() {
            return Err(Error::EmptyInput);
        } else {
            InputSource::Stdin
        };

        let input = InputReader::read(&source)?;
        if input.text.is_empty() {
            return Err(Error::EmptyInput);
        }
        Ok(input)
    }

    /// The explicit `--format` wins over the hint of the input file, which
    /// wins over the configured default.
    fn resolve_hint(args: &ArgMatches, input: &Input, config: &MainConfig) -> FormatHint {
        let hint = args
            .get_one::<FormatHint>("format")
            .copied()
            .or(input.hint)
            .unwrap_or(config.defaults.format);
        debug!("Using format hint \"{}\"", hint);
        hint
    }

    fn stats_style(args: &ArgMatches, config: &MainConfig) -> Option<StatsStyle> {
        match args.get_one::<StatsStyle>("stats") {
            Some(style) => Some(*style),
            None if config.defaults.show_stats => Some(config.defaults.stats_style),
            None => None,
        }
    }

    fn save(exporter: &dyn FileExport, content: &str, file_name: &str) -> Result<PathBuf> {
        if content.is_empty() {
            return Err(Error::Msg("nothing to save (empty result)".to_string()));
        }
        exporter.save(content, file_name, MIME_TYPE)
    }

    fn status(&self, message: &str) {
        if self.interactive_output {
            eprintln!("{}", Green.paint(message));
        } else {
            eprintln!("{}", message);
        }
    }
}
