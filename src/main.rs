mod cli;
mod settings;
mod workflow;

use anyhow::Result;
use cli::parse_cli;
use folder_tree::{logging, theme};
use workflow::TreeWorkflow;

fn main() -> Result<()> {
    let cli = parse_cli();
    logging::initialize(cli.log_level());

    if cli.list_themes {
        for descriptor in theme::descriptors() {
            println!("{descriptor}");
        }
        return Ok(());
    }

    let resolved = settings::load(&cli)?;

    if cli.print_config {
        resolved.print_summary();
    }

    let report = TreeWorkflow::from_config(resolved).run()?;
    println!(
        "Generated {} lines in {}",
        report.lines.len(),
        report.output_dir.display()
    );

    Ok(())
}
