use clap::{Parser, Subcommand};
use marquee::app::App;
use marquee::config;
use marquee::sys::runtime;
use marquee::sys::server::{self, Command};
use std::io::Write;
use std::os::unix::net::UnixStream;
use std::path::{Path, PathBuf};

#[derive(Parser, Debug)]
#[command(name = "marquee", version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Control socket path
    #[arg(short, long, default_value = server::DEFAULT_SOCKET_PATH)]
    socket: PathBuf,

    /// Override the auto-advance interval in milliseconds
    #[arg(short, long)]
    interval: Option<u64>,
}

#[derive(Subcommand, Debug, Clone, Copy)]
enum Commands {
    /// Advance to the next slide
    Next,
    /// Go back to the previous slide
    Prev,
    /// Start auto-advance (a no-op under reduced motion)
    Start,
    /// Stop auto-advance
    Stop,
    /// Shut a running daemon down
    Quit,
}

impl From<Commands> for Command {
    fn from(command: Commands) -> Self {
        match command {
            Commands::Next => Command::Next,
            Commands::Prev => Command::Prev,
            Commands::Start => Command::Start,
            Commands::Stop => Command::Stop,
            Commands::Quit => Command::Quit,
        }
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    env_logger::init();
    let cli = Cli::parse();

    match cli.command {
        Some(command) => send_command(&cli.socket, command.into()),
        None => run_daemon(cli).await,
    }
}

fn send_command(socket_path: &Path, command: Command) -> anyhow::Result<()> {
    let mut stream = UnixStream::connect(socket_path).map_err(|e| {
        anyhow::anyhow!(
            "Failed to connect to marquee daemon at {}: {}. Is marquee running?",
            socket_path.display(),
            e
        )
    })?;

    writeln!(stream, "{}", command)?;
    Ok(())
}

async fn run_daemon(cli: Cli) -> anyhow::Result<()> {
    let mut config = config::load_or_setup();
    if let Some(interval_ms) = cli.interval {
        config.auto_advance.interval_ms = interval_ms;
    }

    let (tx, rx) = async_channel::bounded(32);

    let mut app = App::new(&config, tx.clone())?;

    runtime::start_background_services(cli.socket.clone(), tx.clone());

    while let Ok(event) = rx.recv().await {
        if !app.update(event) {
            break;
        }
    }

    let _ = std::fs::remove_file(&cli.socket);
    Ok(())
}
