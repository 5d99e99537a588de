use std::path::PathBuf;

use folder_tree::theme::hex;
use folder_tree::{OutputPaths, Theme};

/// Application-ready configuration derived from user input, config files and
/// defaults.
#[derive(Debug, Clone)]
pub struct ResolvedConfig {
    pub input: PathBuf,
    pub outputs: OutputPaths,
    pub theme_name: String,
    pub theme: Theme,
    pub scale: u32,
    pub print_stdout: bool,
}

impl ResolvedConfig {
    /// Print a human readable summary of the effective configuration.
    pub fn print_summary(&self) {
        println!("Effective configuration:");
        println!("  Input: {}", self.input.display());
        println!("  Output directory: {}", self.outputs.dir.display());
        println!("  Text file: {}", self.outputs.text.display());
        println!("  Image file: {}", self.outputs.image.display());
        println!(
            "  Theme: {} (background {}, foreground {})",
            self.theme_name,
            hex(self.theme.background),
            hex(self.theme.foreground)
        );
        println!("  Scale: {}", self.scale);
        println!("  Print to stdout: {}", bool_to_word(self.print_stdout));
    }
}

fn bool_to_word(value: bool) -> &'static str {
    if value { "yes" } else { "no" }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bool_to_word_matches_expectations() {
        assert_eq!(bool_to_word(true), "yes");
        assert_eq!(bool_to_word(false), "no");
    }

    #[test]
    fn colors_print_as_hex() {
        assert_eq!(hex(folder_tree::theme::DRACULA.background), "#282a36");
    }
}
