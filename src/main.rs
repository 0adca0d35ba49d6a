//! ef1p diagrams CLI
//!
//! Usage:
//!   ef1p-diagrams [OPTIONS] [NAMES]...
//!
//! Options:
//!   -o, --out-dir <DIR>      Directory the SVG files are written to
//!   -s, --stylesheet <FILE>  Stylesheet file for color palette (TOML format)
//!   -l, --list               List the available diagrams
//!       --stdout             Print the diagrams instead of writing files
//!       --no-style           Leave out the embedded style block
//!   -v, --verbose            Log debug output
//!   -h, --help               Print help

use std::fs;
use std::path::PathBuf;

use clap::Parser;

use ef1p_diagrams::diagrams::{self, Diagram};
use ef1p_diagrams::{SceneError, Stylesheet, SvgConfig};

#[derive(Parser)]
#[command(name = "ef1p-diagrams")]
#[command(about = "Generate the SVG diagrams of the articles")]
struct Cli {
    /// Diagrams to generate (all of them if none are given)
    names: Vec<String>,

    /// Directory the SVG files are written to
    #[arg(short, long, default_value = "graphics")]
    out_dir: PathBuf,

    /// Stylesheet file for color palette (TOML format)
    #[arg(short, long)]
    stylesheet: Option<PathBuf>,

    /// List the available diagrams
    #[arg(short, long)]
    list: bool,

    /// Print the diagrams to stdout instead of writing files
    #[arg(long)]
    stdout: bool,

    /// Leave out the embedded style block
    #[arg(long)]
    no_style: bool,

    /// Log debug output
    #[arg(short, long)]
    verbose: bool,
}

fn main() {
    let cli = Cli::parse();

    let default_level = if cli.verbose { "debug" } else { "info" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_level))
        .init();

    if cli.list {
        for diagram in diagrams::all() {
            println!("{:<36} {}", diagram.name, diagram.description);
        }
        return;
    }

    // Resolve names first so a typo fails before anything is written
    let selected: Vec<&Diagram> = if cli.names.is_empty() {
        diagrams::all().iter().collect()
    } else {
        let mut selected = Vec::with_capacity(cli.names.len());
        for name in &cli.names {
            match diagrams::find(name) {
                Some(diagram) => selected.push(diagram),
                None => {
                    eprintln!("Error: unknown diagram '{}' (see --list)", name);
                    std::process::exit(1);
                }
            }
        }
        selected
    };

    // Load stylesheet
    let stylesheet = match &cli.stylesheet {
        Some(path) => match Stylesheet::from_file(path) {
            Ok(s) => s,
            Err(e) => {
                eprintln!("Error loading stylesheet '{}': {}", path.display(), e);
                std::process::exit(1);
            }
        },
        None => Stylesheet::default(),
    };

    let config = SvgConfig::new().with_embedded_style(!cli.no_style);

    if !cli.stdout {
        if let Err(e) = fs::create_dir_all(&cli.out_dir) {
            eprintln!(
                "Error creating directory '{}': {}",
                cli.out_dir.display(),
                e
            );
            std::process::exit(1);
        }
    }

    for diagram in selected {
        if let Err(e) = generate(diagram, &cli, &config, &stylesheet) {
            eprintln!("Error in diagram '{}': {}", diagram.name, e);
            std::process::exit(1);
        }
    }
}

fn generate(
    diagram: &Diagram,
    cli: &Cli,
    config: &SvgConfig,
    stylesheet: &Stylesheet,
) -> Result<(), SceneError> {
    log::debug!("building {}", diagram.name);
    let document = diagram.document()?;
    if cli.stdout {
        print!("{}", document.render(config, stylesheet));
        Ok(())
    } else {
        document.write_to(&cli.out_dir.join(diagram.file_name()), config, stylesheet)
    }
}
