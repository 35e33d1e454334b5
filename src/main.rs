use clap::Parser;
use gitsi::commands::execute_browse;
use gitsi::core::{
    config::Settings,
    error::{GitsiError, Result},
    print_error, print_info,
};
use std::env;
use std::fs::{self, OpenOptions};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "gitsi")]
#[command(about = "Interactive browser for the git status of a working tree")]
#[command(version)]
struct Cli {
    /// Directory inside the repository to browse
    path: Option<PathBuf>,

    /// Start with the list filtered by this term
    #[arg(short, long)]
    search: Option<String>,

    /// Enable debug logging
    #[arg(long)]
    debug: bool,

    /// Write the log here instead of the cache directory
    #[arg(long, value_name = "FILE")]
    log_file: Option<PathBuf>,
}

impl Cli {
    fn into_settings(self) -> Settings {
        let defaults = Settings::default();
        Settings {
            repo_dir: self.path.unwrap_or(defaults.repo_dir),
            debug: self.debug,
            log_file: self.log_file,
            initial_search: self.search.filter(|term| !term.is_empty()),
            ..defaults
        }
        .with_env()
    }
}

/// The screen belongs to the UI, so the log goes to a file. Nothing is set up
/// unless `--debug` or `RUST_LOG` asks for it.
fn init_logging(settings: &Settings) -> Result<()> {
    if !settings.debug && env::var_os("RUST_LOG").is_none() {
        return Ok(());
    }

    let path = settings.log_path();
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    let file = OpenOptions::new().create(true).append(true).open(&path)?;

    let mut builder = env_logger::Builder::from_default_env();
    if settings.debug {
        builder.filter_level(log::LevelFilter::Debug);
    }
    builder.target(env_logger::Target::Pipe(Box::new(file)));
    builder.init();
    Ok(())
}

fn run(settings: &Settings) -> Result<()> {
    init_logging(settings)?;
    log::debug!("Settings: {:?}", settings);
    execute_browse(settings)
}

fn main() {
    let settings = Cli::parse().into_settings();

    if let Err(e) = run(&settings) {
        if e.is_clean_exit() {
            print_info(&e.to_string());
            return;
        }
        if let GitsiError::NotInGitRepo = e {
            print_error("Not in a git repository");
        } else {
            print_error(&e.to_string());
        }
        std::process::exit(1);
    }
}
