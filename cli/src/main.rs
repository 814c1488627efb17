//! tmx — start a tmux session laid out as a grid of panes.

use std::process;

use clap::Parser;
use tracing::debug;

use tmxgrid_core::types::config::DEFAULT_EXECUTABLE;
use tmxgrid_core::{ConfigSource, LaunchSettings, Launcher, Result, Session};


#[derive(Debug, Parser)]
#[command(
    name = "tmx",
    about = "Start a tmux session with panes laid out on a grid",
    version
)]
struct Cli {
    /// Layout file (JSON, or YAML by extension), inline JSON layout, or a single command
    config: String,

    /// Multiplexer executable
    #[arg(long = "tmux", env = "TMX_TMUX", default_value = DEFAULT_EXECUTABLE)]
    tmux: String,

    /// Print the tmux command line instead of running it
    #[arg(long, conflicts_with = "json")]
    dry_run: bool,

    /// Print the directive list as JSON instead of running it
    #[arg(long)]
    json: bool,
}


fn main() {
    init_logging();
    let cli = Cli::parse();

    if let Err(e) = run(cli) {
        eprintln!("tmx: {}", e);
        process::exit(1);
    }
}


fn run(cli: Cli) -> Result<()> {
    let session = ConfigSource::from_arg(&cli.config).load_session()?;
    debug!(panes = session.panes.len(), rows = ?session.rows, cols = ?session.cols, "loaded session");

    let launcher = Launcher::new(LaunchSettings::with_executable(cli.tmux.clone()));
    debug!(executable = %launcher.settings().executable, cwd = %launcher.settings().cwd, "launch settings");
    if let Some(output) = render(&cli, &launcher, &session)? {
        println!("{}", output);
        return Ok(());
    }

    match launcher.launch(&session)? {}
}


/// Text to print for `--dry-run` / `--json`, or `None` to launch.
fn render(cli: &Cli, launcher: &Launcher, session: &Session) -> Result<Option<String>> {
    if cli.json {
        return Ok(Some(serde_json::to_string_pretty(&launcher.plan(session))?));
    }
    if cli.dry_run {
        return Ok(Some(shell_words::join(launcher.argv(session))));
    }
    Ok(None)
}


fn init_logging() {
    use tracing_subscriber::{fmt, prelude::*, EnvFilter};

    let default_filter = if std::env::var("TMX_DEBUG").is_ok() {
        "tmxgrid_core=debug,tmx=debug,warn"
    } else {
        "warn"
    };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter));

    let _ = tracing_subscriber::registry()
        .with(fmt::layer().with_writer(std::io::stderr).with_target(true))
        .with(filter)
        .try_init();
}
