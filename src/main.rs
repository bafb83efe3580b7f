//! Command line front-end for inspecting and changing the stored theme.

use std::path::PathBuf;
use std::process::ExitCode;
use std::thread;
use std::time::Duration;

use clap::{Parser, Subcommand};
use console::style;
use darkmode::{
    AmbientWatcher, ColorMode, Document, EventLoop, FileStore, OsAmbient, PreferenceStore,
    ThemeConfig, ThemeError, ThemeEvent, ThemePreference, ThemeResolver, ToggleControl,
};
use tracing_subscriber::EnvFilter;

#[derive(Debug, Parser)]
#[command(name = "darkmode", version, about = "Resolve and persist the dark/light theme")]
struct Cli {
    /// Preference file (defaults to <config dir>/darkmode/preferences.json)
    #[arg(long, global = true, value_name = "PATH")]
    store: Option<PathBuf>,

    /// YAML file overriding the store key, attribute names and labels
    #[arg(long, global = true, value_name = "PATH")]
    config: Option<PathBuf>,

    /// Increase log verbosity (-v debug, -vv trace)
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    verbose: u8,

    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Show the applied theme and where it came from
    Status,
    /// Flip the theme and persist the choice
    Toggle,
    /// Forget the stored choice so the OS setting governs again
    Reset,
    /// Follow OS color-scheme changes until interrupted
    Watch {
        /// Polling interval in milliseconds
        #[arg(long, default_value_t = 1000)]
        interval_ms: u64,
    },
}

type CliResolver = ThemeResolver<FileStore, OsAmbient, Document>;

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("{} {err}", style("error:").red().bold());
            ExitCode::FAILURE
        }
    }
}

fn init_tracing(verbose: u8) {
    let default = match verbose {
        0 => "warn",
        1 => "darkmode=debug",
        _ => "darkmode=trace",
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn run(cli: Cli) -> Result<(), ThemeError> {
    let config = match &cli.config {
        Some(path) => ThemeConfig::load(path)?,
        None => ThemeConfig::default(),
    };
    let store = FileStore::new(cli.store.unwrap_or_else(default_store_path));
    let mut resolver = ThemeResolver::new(
        config,
        store,
        OsAmbient,
        Document::with_toggle(ToggleControl::new()),
    );

    match cli.command {
        Command::Status => {
            resolver.initialize()?;
            print_status(&resolver)
        }
        Command::Toggle => {
            resolver.initialize()?;
            resolver.toggle()?;
            print_status(&resolver)
        }
        Command::Reset => {
            let key = resolver.config().storage_key.clone();
            match resolver.store_mut().remove(&key)? {
                Some(previous) => println!("cleared stored preference ({previous})"),
                None => println!("no stored preference"),
            }
            Ok(())
        }
        Command::Watch { interval_ms } => watch(resolver, Duration::from_millis(interval_ms)),
    }
}

fn watch(resolver: CliResolver, interval: Duration) -> Result<(), ThemeError> {
    let mut watcher = AmbientWatcher::new(OsAmbient);
    let mut events = EventLoop::new(resolver);
    events.push(ThemeEvent::Initialize);
    events.run()?;
    print_status(events.resolver())?;

    loop {
        thread::sleep(interval);
        if let Some(scheme) = watcher.poll() {
            events.push(ThemeEvent::AmbientChanged(scheme));
        }
        for handled in events.run()? {
            match handled.applied {
                Some(mode) => println!("os scheme changed, now {}", styled(mode)),
                None => println!("os scheme changed, stored preference kept"),
            }
        }
    }
}

fn print_status(resolver: &CliResolver) -> Result<(), ThemeError> {
    let Some(mode) = resolver.applied() else {
        return Ok(());
    };
    let source = match resolver.stored_preference()? {
        ThemePreference::Unset => "os setting",
        _ => "stored preference",
    };
    println!("{} ({})", styled(mode), style(source).dim());
    if let Some(raw) = resolver.store().get(&resolver.config().storage_key)? {
        println!("{} {} = {raw:?}", style("store:").dim(), resolver.store().path().display());
    }
    Ok(())
}

fn styled(mode: ColorMode) -> console::StyledObject<&'static str> {
    match mode {
        ColorMode::Dark => style(mode.as_str()).magenta().bold(),
        ColorMode::Light => style(mode.as_str()).yellow().bold(),
    }
}

fn default_store_path() -> PathBuf {
    dirs::config_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("darkmode")
        .join("preferences.json")
}
