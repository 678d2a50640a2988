use std::path::PathBuf;
use std::str::FromStr;

use clap::{
    arg,
    builder::{styling::AnsiColor, Styles},
    crate_description, crate_name, crate_version, value_parser, Arg, ArgAction, ColorChoice,
    Command,
};
use santext::{display::StatsStyle, format::FormatHint, operation::TransformOperation};

fn env_no_color() -> bool {
    std::env::var_os("NO_COLOR").is_some_and(|x| !x.is_empty())
}

// Builds the application command line interface defining the commands, subcommands
// and arguments
pub fn build_app(interactive_output: bool) -> Command {
    let color_when = if interactive_output && !env_no_color() {
        ColorChoice::Auto
    } else {
        ColorChoice::Never
    };

    let styles = Styles::styled()
        .header(AnsiColor::Yellow.on_default())
        .usage(AnsiColor::Green.on_default())
        .literal(AnsiColor::Green.on_default())
        .placeholder(AnsiColor::Green.on_default());

    Command::new(crate_name!())
        .styles(styles)
        .version(crate_version!())
        .about(crate_description!())
        .color(color_when)
        .subcommand_required(true)
        .arg_required_else_help(true)
        .subcommand(build_apply_command())
        .subcommand(
            Command::new("stats")
                .about("Prints the stats of the input text.")
                .long_about(
                    "Computes the number of characters, words, lines and the size \
                        of the input text without transforming it.",
                )
                .args(input_args())
                .arg(
                    arg!(--style <STYLE> "Sets the stats rendering style (human, json)")
                        .value_parser(StatsStyle::from_str),
                ),
        )
        .subcommand(
            Command::new("list")
                .alias("ls")
                .about("Lists the supported operations and formats."),
        )
}

/// Builds the apply command
///
/// # Returns
/// A `Command` object representing the apply command.
fn build_apply_command() -> Command {
    Command::new("apply")
        .about("Applies a transformation to the input text.")
        .long_about(
            "Applies the given operation to the input text (a file, an inline text \
                or the standard input) and prints the result. When the operation fails \
                the reason is printed and nothing is written.",
        )
        .arg(
            Arg::new("operation")
                .value_name("OPERATION")
                .required(true)
                .index(1)
                .value_parser(TransformOperation::from_str)
                .help("The operation to apply (see the list subcommand)"),
        )
        .args(input_args())
        .arg(
            arg!(-f --format <FORMAT> "Sets the format of the input")
                .long_help(
                    "Explicitly sets the format of the input text (json, html, xml, txt, ...). \
                        If not specified, the format is inferred from the input file extension, \
                        falling back to the configured default format.",
                )
                .value_parser(FormatHint::from_str),
        )
        .arg(
            arg!(-o --output <FILE> "Writes the result to the given file")
                .value_parser(value_parser!(PathBuf))
                .conflicts_with("save"),
        )
        .arg(
            arg!(-s --save "Saves the result in the configured output directory")
                .long_help(
                    "Saves the result as <export_name>.<ext> in the output directory \
                        set in the configuration, the extension being taken from the format.",
                ),
        )
        .arg(
            Arg::new("stats")
                .long("stats")
                .value_name("STYLE")
                .num_args(0..=1)
                .default_missing_value("human")
                .value_parser(StatsStyle::from_str)
                .help("Prints the input and output stats to stderr (human, json)"),
        )
        .arg(
            arg!(-n --"no-newline" "Supress new line after the result.")
                .long_help("Prevents writing a trailing new line after printing the result."),
        )
}

/// Arguments selecting where the input text is read from
fn input_args() -> [Arg; 2] {
    [
        arg!(-i --input <FILE> "Reads the input text from the given file")
            .value_parser(value_parser!(PathBuf))
            .conflicts_with("text"),
        Arg::new("text")
            .short('t')
            .long("text")
            .value_name("TEXT")
            .action(ArgAction::Set)
            .allow_hyphen_values(true)
            .help("Uses the given text as input"),
    ]
}
