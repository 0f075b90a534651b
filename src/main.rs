use std::path::PathBuf;

use clap::Parser;
use prefab::GenerateOptions;

#[derive(Parser)]
#[command(name = "prefab")]
#[command(version)]
#[command(
    about = "Materialize module boilerplate from per-project template sets",
    long_about = None
)]
struct Cli {
    /// Template set to render, located under the templates root
    template_set: String,
    /// Dotted module path, e.g. cmd.myservice.worker
    module_path: String,
    /// Directory holding the template sets
    #[arg(long, default_value = prefab::DEFAULT_TEMPLATES_DIR)]
    templates: PathBuf,
    /// Directory rendered files are written into
    #[arg(long, default_value = ".")]
    out: PathBuf,
    /// Overwrite existing files instead of skipping them
    #[arg(long)]
    force: bool,
}

fn main() {
    let cli = Cli::parse();

    let options = GenerateOptions {
        templates_root: cli.templates,
        output_root: cli.out,
        force: cli.force,
    };

    match prefab::generate(&cli.template_set, &cli.module_path, options) {
        Ok(summary) => {
            println!(
                "✅ Rendered '{}' for {}: {} written, {} skipped",
                cli.template_set,
                cli.module_path,
                summary.written.len(),
                summary.skipped.len()
            );
        }
        Err(e) => {
            eprintln!("Error: {}", e);
            std::process::exit(1);
        }
    }
}
