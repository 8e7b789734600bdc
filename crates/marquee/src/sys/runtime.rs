use crate::config;
use crate::events::AppEvent;
use crate::sys::server;
use async_channel::Sender;
use std::path::PathBuf;

/// Spawn the background services onto the ambient tokio runtime: the control
/// socket, the config watcher, and a ctrl-c handler. Each one only feeds
/// events into the channel; the event loop stays the single mutator.
pub fn start_background_services(socket_path: PathBuf, tx: Sender<AppEvent>) {
    {
        let tx = tx.clone();
        tokio::spawn(async move {
            server::run_server(socket_path, tx).await;
        });
    }

    {
        let tx = tx.clone();
        tokio::spawn(async move {
            config::run_async_watcher(tx).await;
        });
    }

    tokio::spawn(async move {
        if tokio::signal::ctrl_c().await.is_ok() {
            let _ = tx.send(AppEvent::Shutdown).await;
        }
    });
}
