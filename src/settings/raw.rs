use std::path::PathBuf;

use anyhow::{Context, Result, ensure};
use serde::Deserialize;

use folder_tree::output::{DEFAULT_IMAGE_FILE, DEFAULT_OUTPUT_DIR, DEFAULT_TEXT_FILE};
use folder_tree::{OutputPaths, theme};

use crate::cli::CliArgs;

use super::resolved::ResolvedConfig;

pub(super) const DEFAULT_INPUT: &str = "structure.yaml";
const MAX_SCALE: u32 = 16;

/// Mirror of the configuration file representation before CLI overrides and
/// validation are applied.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub(super) struct RawConfig {
    input: InputSection,
    output: OutputSection,
    render: RenderSection,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default, deny_unknown_fields)]
struct InputSection {
    path: Option<PathBuf>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default, deny_unknown_fields)]
struct OutputSection {
    dir: Option<PathBuf>,
    text_file: Option<PathBuf>,
    image_file: Option<PathBuf>,
    stdout: Option<bool>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default, deny_unknown_fields)]
struct RenderSection {
    theme: Option<String>,
    scale: Option<u32>,
}

impl RawConfig {
    /// Apply CLI overrides on top of the raw configuration values.
    pub(super) fn apply_cli_overrides(&mut self, cli: &CliArgs) {
        if let Some(path) = cli.input.clone() {
            self.input.path = Some(path);
        }
        if let Some(dir) = cli.output_dir.clone() {
            self.output.dir = Some(dir);
        }
        if cli.stdout {
            self.output.stdout = Some(true);
        }
        if let Some(theme) = cli.theme.clone() {
            self.render.theme = Some(theme);
        }
        if let Some(scale) = cli.scale {
            self.render.scale = Some(scale);
        }
    }

    /// Convert the raw configuration into a [`ResolvedConfig`], validating and
    /// filling defaults where required.
    pub(super) fn resolve(self) -> Result<ResolvedConfig> {
        let theme_name = self
            .render
            .theme
            .map(|name| name.trim().to_ascii_lowercase())
            .filter(|name| !name.is_empty())
            .unwrap_or_else(|| theme::DEFAULT_THEME_NAME.to_string());
        let theme = theme::resolve(&theme_name).context("invalid render.theme")?;

        let scale = self.render.scale.unwrap_or(1);
        ensure!(
            (1..=MAX_SCALE).contains(&scale),
            "render.scale must be between 1 and {MAX_SCALE}, got {scale}"
        );

        let input = self
            .input
            .path
            .unwrap_or_else(|| PathBuf::from(DEFAULT_INPUT));

        let outputs = OutputPaths::with_file_names(
            self.output
                .dir
                .unwrap_or_else(|| PathBuf::from(DEFAULT_OUTPUT_DIR)),
            self.output
                .text_file
                .unwrap_or_else(|| PathBuf::from(DEFAULT_TEXT_FILE)),
            self.output
                .image_file
                .unwrap_or_else(|| PathBuf::from(DEFAULT_IMAGE_FILE)),
        );
        ensure!(
            outputs.text != outputs.image,
            "text and image outputs must be different files"
        );

        Ok(ResolvedConfig {
            input,
            outputs,
            theme_name,
            theme,
            scale,
            print_stdout: self.output.stdout.unwrap_or(false),
        })
    }
}
