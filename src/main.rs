use clap::{Parser, Subcommand};
use docnav::config::{self, NavConfig};
use docnav::{emit, output, render, scan, types};
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "docnav")]
#[command(about = "Navigation index generator for markdown documentation sites")]
#[command(long_about = "\
Navigation index generator for markdown documentation sites

Your docs directory is the data source. First-level directories become
categories, second-level directories become subcategories, and every
markdown document gets a resolved title.

Content structure:

  docs/
  ├── intro.md                     # Root document (title map only)
  ├── tutorial-basics/             # Category
  │   ├── _category_.json          # { \"label\": \"Tutorial - Basics\", \"position\": 2 }
  │   ├── tutorial-basics.md       # Landing document (not listed as a page)
  │   ├── create-a-page.md         # Page (sidebar_position orders it)
  │   ├── img/                     # Reserved, never scanned
  │   └── advanced/                # Subcategory
  │       ├── index.md             # Landing document → subcategory link
  │       └── deploy.md
  └── tutorial-extras/

Title resolution (first available wins):
  category-nav:  frontmatter title → first heading → filename
  doc-titles:    frontmatter title → sidebar_label → first heading → filename

Run 'docnav gen-config' to generate a documented docnav.toml.")]
#[command(version)]
struct Cli {
    /// Project root; config, docs and data paths resolve against it
    #[arg(long, default_value = ".", global = true)]
    root: PathBuf,

    /// Config file (default: <root>/docnav.toml)
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Content root, overriding `docs_dir`
    #[arg(long, global = true)]
    docs: Option<PathBuf>,

    /// Output directory, overriding `data_dir`
    #[arg(long, global = true)]
    data_dir: Option<PathBuf>,

    /// Log progress at info level
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Write the hierarchical category navigation index
    CategoryNav,
    /// Write the flat document title map
    DocTitles,
    /// Write both outputs from a single scan
    Build,
    /// Scan and print the navigation tree without writing anything
    Check,
    /// Print the navigation HTML fragment for one category
    Render {
        /// Category key (first-level directory name)
        category: String,
        /// Link prefix, overriding `render.base_url`
        #[arg(long)]
        base_url: Option<String>,
    },
    /// Print a stock docnav.toml with all options documented
    GenConfig,
}

fn main() {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    if let Err(err) = run(cli) {
        eprintln!("Error: {err}");
        std::process::exit(1);
    }
}

fn init_tracing(verbose: bool) {
    let filter = if verbose {
        EnvFilter::new("info")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"))
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn run(cli: Cli) -> Result<(), Box<dyn std::error::Error>> {
    if let Command::GenConfig = cli.command {
        print!("{}", config::stock_config_toml());
        return Ok(());
    }

    let config = resolve_config(&cli)?;
    let root = cli.root.as_path();
    let docs = config.docs_path(root);

    match cli.command {
        Command::CategoryNav => {
            let nav = scan::scan_nav(&docs, &config)?;
            let path = config.category_nav_path(root);
            emit::write_json(&path, &nav)?;
            output::print_nav_written(&path, &nav);
        }
        Command::DocTitles => {
            let titles = scan::scan_titles(&docs, &config)?;
            let path = config.doc_titles_path(root);
            emit::write_json(&path, &titles)?;
            output::print_titles_written(&path, &titles);
        }
        Command::Build => {
            let both = scan::scan(&docs, &config)?;
            let nav_path = config.category_nav_path(root);
            let titles_path = config.doc_titles_path(root);
            // Serialize both before writing either so a failure leaves no partial output.
            let nav_json = emit::to_json(&both.nav)?;
            let titles_json = emit::to_json(&both.titles)?;
            emit::write_text(&nav_path, &nav_json)?;
            emit::write_text(&titles_path, &titles_json)?;
            output::print_nav_written(&nav_path, &both.nav);
            output::print_titles_written(&titles_path, &both.titles);
        }
        Command::Check => {
            println!("==> Checking {}", docs.display());
            let both = scan::scan(&docs, &config)?;
            output::print_check_output(&both);
            println!("==> Content is valid");
        }
        Command::Render { category, base_url } => {
            let path = config.category_nav_path(root);
            let content = std::fs::read_to_string(&path)
                .map_err(|e| format!("Failed to read {}: {e}", path.display()))?;
            let nav: types::NavData = serde_json::from_str(&content)?;
            let base_url = base_url.unwrap_or_else(|| config.render.base_url.clone());
            println!(
                "{}",
                render::render_category_nav(&nav, &category, &base_url).into_string()
            );
        }
        // Printed before config loading.
        Command::GenConfig => {}
    }

    Ok(())
}

/// Load the config file and apply command-line overrides.
fn resolve_config(cli: &Cli) -> Result<NavConfig, config::ConfigError> {
    let path = cli
        .config
        .clone()
        .unwrap_or_else(|| cli.root.join(config::CONFIG_FILE));
    let mut config = config::load_config_file(&path)?;
    if let Some(docs) = &cli.docs {
        config.docs_dir = docs.clone();
    }
    if let Some(data_dir) = &cli.data_dir {
        config.data_dir = data_dir.clone();
    }
    config.validate()?;
    Ok(config)
}
