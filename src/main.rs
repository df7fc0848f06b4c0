use clap::{Parser, Subcommand};
use gallery_manifest::gallery::Filter;
use gallery_manifest::load::{FileSource, LoadState};
use gallery_manifest::{config, logging, output, render, rename, scan};
use std::path::{Path, PathBuf};

#[derive(Parser)]
#[command(name = "gallery-manifest")]
#[command(about = "Gallery manifest generator for the website")]
#[command(long_about = "\
Gallery manifest generator for the website

Scans one folder per configured category and writes manifest.json, the
single source of truth for the gallery pages.

Content structure:

  images/gallery/
  ├── wedding/                 # folder name = category key
  │   ├── gown-01.jpg          # → id wedding-1, title \"Wedding Gown 01\"
  │   └── gown-02.jpg          # → id wedding-2, title \"Wedding Gown 02\"
  ├── lehenga/
  └── new-arrivals/

Only jpg, jpeg, png, gif and webp files are included (any case). A
configured category without a folder is reported and skipped.

Run with no command to generate the manifest.
Run 'gallery-manifest gen-config' to print a documented gallery.toml.")]
#[command(version)]
struct Cli {
    /// Config file (stock defaults are used if it does not exist)
    #[arg(long, default_value = "gallery.toml", global = true)]
    config: PathBuf,

    /// Category folders root (overrides `source_dir` in the config)
    #[arg(long, global = true)]
    source: Option<PathBuf>,

    /// Manifest path (overrides `output` in the config)
    #[arg(long, global = true)]
    output: Option<PathBuf>,

    /// Show debug diagnostics on stderr
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand)]
enum Command {
    /// Scan category folders and write the manifest (default)
    Generate,
    /// Load and validate an existing manifest
    Check {
        /// Manifest to check (defaults to the configured output)
        manifest: Option<PathBuf>,
    },
    /// Render the admin preview page for a manifest
    Preview {
        /// Manifest to load (defaults to the configured output)
        #[arg(long)]
        manifest: Option<PathBuf>,
        /// Category key to show, or "all"
        #[arg(long, default_value = "all")]
        filter: String,
        /// Where to write the HTML page
        #[arg(long, default_value = "admin-preview.html")]
        out: PathBuf,
    },
    /// Rename every file in a folder to <prefix>-NN<ext>
    Rename {
        /// Name prefix, e.g. "new" for new-01.jpg, new-02.jpg, ...
        #[arg(long)]
        prefix: String,
        /// Show the plan without touching any file
        #[arg(long)]
        dry_run: bool,
        /// Folder to rename in
        dir: PathBuf,
    },
    /// Print a stock gallery.toml with all options documented
    GenConfig,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();
    logging::init_logging(cli.verbose);

    match cli.command.unwrap_or(Command::Generate) {
        Command::Generate => {
            let config = config::load_config(&cli.config)?;
            let source = cli
                .source
                .unwrap_or_else(|| PathBuf::from(&config.source_dir));
            let output_path = cli.output.unwrap_or_else(|| PathBuf::from(&config.output));

            let report = scan::scan(&source, &config)?;
            scan::write_manifest(&output_path, &report.manifest)?;
            output::print_scan_output(&report, &output_path);
        }
        Command::Check { manifest } => {
            let path = manifest_path(manifest, cli.output, &cli.config)?;
            let loaded = gallery_manifest::load::load_manifest(&FileSource::new(&path))?;
            output::print_check_output(&loaded, &path);
        }
        Command::Preview {
            manifest,
            filter,
            out,
        } => {
            let config = config::load_config(&cli.config)?;
            let path = manifest_path(manifest, cli.output, &cli.config)?;
            let state = match LoadState::from_source(&FileSource::new(&path)) {
                LoadState::Loaded(gallery) => {
                    let mut gallery = gallery.with_path_prefix(config.path_prefix);
                    gallery.set_filter(Filter::parse(&filter));
                    LoadState::Loaded(gallery)
                }
                failed => failed,
            };
            std::fs::write(&out, render::render_admin_page(&state).into_string())?;
            match &state {
                LoadState::Loaded(gallery) => println!(
                    "==> Preview of {} images written to {}",
                    gallery.visible().len(),
                    out.display()
                ),
                LoadState::Failed(err) => {
                    println!("==> Error page written to {} ({err})", out.display())
                }
            }
        }
        Command::Rename {
            prefix,
            dry_run,
            dir,
        } => {
            let plan = rename::plan_renames(&dir, &prefix)?;
            if !dry_run {
                rename::apply_renames(&dir, &plan)?;
            }
            output::print_rename_output(&plan, dry_run);
        }
        Command::GenConfig => {
            print!("{}", config::stock_config_toml());
        }
    }

    Ok(())
}

/// Resolve the manifest to read: explicit argument, then `--output`, then config.
fn manifest_path(
    explicit: Option<PathBuf>,
    output_flag: Option<PathBuf>,
    config_path: &Path,
) -> Result<PathBuf, config::ConfigError> {
    if let Some(path) = explicit.or(output_flag) {
        return Ok(path);
    }
    Ok(PathBuf::from(config::load_config(config_path)?.output))
}
