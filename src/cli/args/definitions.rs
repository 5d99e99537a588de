use std::path::PathBuf;

use clap::{ArgAction, ColorChoice, Parser};
use log::LevelFilter;

use super::styles::{cli_styles, long_version, parse_theme_name};

/// Command-line arguments accepted by the `folder-tree` binary.
#[derive(Parser, Debug)]
#[command(
    name = "folder-tree",
    version,
    long_version = long_version(),
    about = "Render a YAML folder layout as a text tree and a PNG image",
    color = ColorChoice::Auto,
    styles = cli_styles()
)]
pub(crate) struct CliArgs {
    #[arg(
        short,
        long = "config",
        value_name = "FILE",
        env = "FOLDER_TREE_CONFIG",
        action = ArgAction::Append,
        help = "Additional configuration file to merge (default: none)"
    )]
    pub(crate) config: Vec<PathBuf>,
    #[arg(
        short = 'n',
        long = "no-config",
        help = "Skip loading default configuration files (default: disabled)"
    )]
    pub(crate) no_config: bool,
    #[arg(
        short = 'i',
        long,
        value_name = "FILE",
        help = "YAML document describing the folder layout (default: structure.yaml)"
    )]
    pub(crate) input: Option<PathBuf>,
    #[arg(
        short = 'o',
        long = "output-dir",
        value_name = "DIR",
        help = "Directory receiving the text and image files (default: output)"
    )]
    pub(crate) output_dir: Option<PathBuf>,
    #[arg(
        short = 't',
        long,
        value_name = "THEME",
        value_parser = parse_theme_name,
        help = "Color theme: dark, light or dracula (default: dark)"
    )]
    pub(crate) theme: Option<String>,
    #[arg(
        short = 's',
        long,
        value_name = "N",
        value_parser = clap::value_parser!(u32).range(1..=16),
        help = "Integer glyph scale for the image (default: 1)"
    )]
    pub(crate) scale: Option<u32>,
    #[arg(
        long = "stdout",
        help = "Also print the text tree to stdout (default: disabled)"
    )]
    pub(crate) stdout: bool,
    #[arg(
        short = 'p',
        long = "print-config",
        help = "Print the resolved configuration before running (default: disabled)"
    )]
    pub(crate) print_config: bool,
    #[arg(
        short = 'l',
        long = "list-themes",
        help = "List supported themes and exit (default: disabled)"
    )]
    pub(crate) list_themes: bool,
    #[arg(
        short = 'v',
        long,
        action = ArgAction::Count,
        help = "Increase log verbosity; repeat for more detail (default: warnings only)"
    )]
    pub(crate) verbose: u8,
    #[arg(
        short = 'q',
        long,
        conflicts_with = "verbose",
        help = "Silence all log output (default: disabled)"
    )]
    pub(crate) quiet: bool,
}

impl CliArgs {
    /// Log level requested through `-v`/`-q`.
    pub(crate) fn log_level(&self) -> LevelFilter {
        folder_tree::logging::level_for(self.verbose, self.quiet)
    }
}
