use clap::{Parser, Subcommand};
use sprite_manifest::{config, output, scan, write};
use std::path::PathBuf;

fn version_string() -> &'static str {
    let on_tag = env!("ON_RELEASE_TAG");
    if on_tag == "true" {
        env!("CARGO_PKG_VERSION")
    } else {
        let hash = env!("GIT_HASH");
        if hash.is_empty() {
            "dev@unknown"
        } else {
            // Leaked once at startup — trivial, called exactly once
            Box::leak(format!("dev@{hash}").into_boxed_str())
        }
    }
}

#[derive(Parser)]
#[command(name = "sprite-manifest")]
#[command(about = "Asset manifest generator for layered character sprites")]
#[command(long_about = "\
Asset manifest generator for layered character sprites

Your filesystem is the data source. Top-level directories are characters,
their subdirectories are layer categories, and the images inside become a
single JSON index consumers fetch instead of listing the filesystem.

Assets structure:

  assets/
  ├── female/                      # Character
  │   ├── base/                    # Category
  │   │   ├── base_01.png
  │   │   └── base_02.png
  │   ├── eyes/
  │   │   └── eyes_blue.webp
  │   └── readme.txt               # Stray files are ignored
  └── male-mature/
      └── hair_front/
          ├── hair_a.jpg
          └── hair_b.jpg

Output (assets_manifest.json, category file lists sorted):

  { \"female\": { \"base\": [\"base_01.png\", \"base_02.png\"], ... }, ... }

Running with no arguments scans ./assets and writes ./assets_manifest.json.
Run 'sprite-manifest gen-config' to generate a documented manifest.toml.")]
#[command(version = version_string())]
struct Cli {
    /// Assets root directory (overrides manifest.toml)
    #[arg(long, global = true)]
    assets: Option<PathBuf>,

    /// Output manifest path (overrides manifest.toml)
    #[arg(long, global = true)]
    output: Option<PathBuf>,

    /// Config file location
    #[arg(long, default_value = "manifest.toml", global = true)]
    config: PathBuf,

    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand)]
enum Command {
    /// Scan the assets tree and write the manifest (the default)
    Build,
    /// Scan and print the inventory without writing anything
    Check,
    /// Print a stock manifest.toml with all options documented
    GenConfig,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    let config = config::load_config(&cli.config)?;
    let assets_dir = cli.assets.unwrap_or(config.assets_dir);
    let output_path = cli.output.unwrap_or(config.output);

    match cli.command.unwrap_or(Command::Build) {
        Command::Build => {
            println!("==> Scanning {}", assets_dir.display());
            let manifest = scan::scan(&assets_dir, &config.extensions)?;
            output::print_inventory(&manifest);
            write::write_manifest(&manifest, &output_path)?;
            println!("{}", output::format_written_line(&output_path));
        }
        Command::Check => {
            println!("==> Checking {}", assets_dir.display());
            let manifest = scan::scan(&assets_dir, &config.extensions)?;
            output::print_inventory(&manifest);
            println!("==> Assets tree is valid");
        }
        Command::GenConfig => {
            print!("{}", config::stock_config_toml());
        }
    }

    Ok(())
}
