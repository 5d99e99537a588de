use std::path::PathBuf;

use anyhow::{Context, Result};
use folder_tree::{BitmapFace, document, render, tree};
use log::info;

use crate::settings::ResolvedConfig;

/// Summary of a completed run.
#[derive(Debug)]
pub(crate) struct WorkflowReport {
    pub(crate) lines: Vec<String>,
    pub(crate) output_dir: PathBuf,
}

/// Coordinates decoding, flattening and writing both renderings.
pub(crate) struct TreeWorkflow {
    config: ResolvedConfig,
}

impl TreeWorkflow {
    pub(crate) fn from_config(config: ResolvedConfig) -> Self {
        Self { config }
    }

    /// Run the pipeline. The text file is written before the image, so an
    /// image failure can leave the text output behind.
    pub(crate) fn run(self) -> Result<WorkflowReport> {
        let ResolvedConfig {
            input,
            outputs,
            theme_name,
            theme,
            scale,
            print_stdout,
        } = self.config;

        let document = document::load(&input)
            .with_context(|| format!("cannot build a tree from {}", input.display()))?;
        let lines = tree::render_lines(&document);
        drop(document);
        info!("flattened {} into {} lines", input.display(), lines.len());

        if print_stdout {
            println!("{}", render::join_lines(&lines));
        }

        outputs.prepare()?;
        render::write_text(&lines, &outputs.text)?;

        let face = BitmapFace::new(scale);
        render::render_png(&lines, &outputs.image, &theme, &face)
            .with_context(|| format!("failed to render the {theme_name} image"))?;

        Ok(WorkflowReport {
            lines,
            output_dir: outputs.dir,
        })
    }
}
