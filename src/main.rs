//! Page Layout Resolver CLI
//!
//! Usage:
//!   page-layout-resolver --pages <FILE> [OPTIONS] <COMMAND>
//!
//! Commands:
//!   template <UID>   Print the resolved controller action pair as TOML
//!   flexform <UID>   Print the inherited flex form source
//!
//! Options:
//!   -p, --pages <FILE>   Page tree file (TOML, `[[pages]]` array)
//!   -c, --config <FILE>  Resolver configuration file (TOML)
//!   -v, --verbose        Log resolver decisions to stderr

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use page_layout_resolver::{MemoryRepository, PageId, PageService, ResolverConfig};

#[derive(Parser)]
#[command(name = "page-layout-resolver")]
#[command(about = "Resolve inherited page template configuration")]
struct Cli {
    /// Page tree file (TOML format)
    #[arg(short, long)]
    pages: PathBuf,

    /// Resolver configuration file (TOML format)
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Log resolver decisions to stderr
    #[arg(short, long)]
    verbose: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Resolve the controller action pair for a page
    Template { uid: u32 },
    /// Resolve the inherited flex form source for a page
    Flexform { uid: u32 },
}

fn main() {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let config = match &cli.config {
        Some(path) => match ResolverConfig::from_file(path) {
            Ok(c) => c,
            Err(e) => {
                eprintln!("Error loading config '{}': {}", path.display(), e);
                std::process::exit(1);
            }
        },
        None => ResolverConfig::default(),
    };

    let repository = match MemoryRepository::from_file(&cli.pages) {
        Ok(r) => r,
        Err(e) => {
            eprintln!("Error loading pages '{}': {}", cli.pages.display(), e);
            std::process::exit(1);
        }
    };

    let service = PageService::with_config(repository, config);
    match cli.command {
        Command::Template { uid } => match service.page_template_configuration(PageId(uid)) {
            Some(resolved) => match toml::to_string(&resolved) {
                Ok(out) => print!("{}", out),
                Err(e) => {
                    eprintln!("Error: {}", e);
                    std::process::exit(1);
                }
            },
            None => eprintln!("no template configuration applies to page {}", uid),
        },
        Command::Flexform { uid } => match service.page_flex_form_source(PageId(uid)) {
            Some(source) => println!("{}", source),
            None => eprintln!("no flex form source for page {}", uid),
        },
    }
}

fn init_logging(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .compact()
        .init();
}
