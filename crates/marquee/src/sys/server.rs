use crate::events::AppEvent;
use async_channel::Sender;
use std::path::PathBuf;
use std::str::FromStr;
use strum::{Display as StrumDisplay, EnumString};
use tokio::io::{AsyncBufReadExt, BufReader};
use tokio::net::UnixListener;

pub const DEFAULT_SOCKET_PATH: &str = "/tmp/marquee.sock";

/// Line commands accepted on the control socket.
#[derive(Debug, Clone, Copy, PartialEq, Eq, EnumString, StrumDisplay)]
#[strum(ascii_case_insensitive)]
pub enum Command {
    Next,
    Prev,
    Start,
    Stop,
    Quit,
}

impl From<Command> for AppEvent {
    fn from(command: Command) -> Self {
        match command {
            Command::Next => AppEvent::Advance,
            Command::Prev => AppEvent::Retreat,
            Command::Start => AppEvent::StartAuto,
            Command::Stop => AppEvent::StopAuto,
            Command::Quit => AppEvent::Shutdown,
        }
    }
}

pub async fn run_server(socket_path: PathBuf, tx: Sender<AppEvent>) {
    // Cleanup old socket if it exists
    if std::fs::metadata(&socket_path).is_ok() {
        let _ = std::fs::remove_file(&socket_path);
    }

    let listener = match UnixListener::bind(&socket_path) {
        Ok(l) => l,
        Err(e) => {
            log::error!("Failed to bind unix socket {}: {}", socket_path.display(), e);
            return;
        }
    };
    log::info!("Control socket listening on {}", socket_path.display());

    loop {
        match listener.accept().await {
            Ok((mut stream, _)) => {
                let tx = tx.clone();
                tokio::spawn(async move {
                    let reader = BufReader::new(&mut stream);
                    let mut lines = reader.lines();

                    while let Ok(Some(line)) = lines.next_line().await {
                        match Command::from_str(line.trim()) {
                            Ok(command) => {
                                if tx.send(AppEvent::from(command)).await.is_err() {
                                    return;
                                }
                            }
                            Err(_) => {
                                if !line.trim().is_empty() {
                                    log::warn!("Ignoring unknown command {:?}", line.trim());
                                }
                            }
                        }
                    }
                });
            }
            Err(e) => {
                log::error!("Failed to accept connection: {}", e);
            }
        }
    }
}
