//! Game Collection entry point
//!
//! Runs the blocking menu loop off the async runtime while the main task
//! listens for Ctrl+C, then maps the outcome to an exit status.

use std::any::Any;
use std::process::ExitCode;

use anyhow::Context;
use game_collection::{App, Settings, StdConsole, Statistics};

#[tokio::main]
async fn main() -> ExitCode {
    env_logger::init();
    log::info!("Game Collection starting...");

    let session = tokio::task::spawn_blocking(play);

    tokio::select! {
        Ok(()) = tokio::signal::ctrl_c() => {
            println!("\n\n👋 Game interrupted. Thanks for playing!");
            log::warn!("interrupt received, exiting");
            // The menu thread is parked on a stdin read; don't wait for it
            std::process::exit(0);
        }
        joined = session => match joined {
            Ok(Ok(stats)) => {
                log::info!("exiting after {} games", stats.games_played);
                ExitCode::SUCCESS
            }
            Ok(Err(e)) => fault(&format!("{e:#}")),
            Err(e) if e.is_panic() => fault(&panic_message(e.into_panic())),
            Err(e) => fault(&e.to_string()),
        },
    }
}

fn play() -> anyhow::Result<Statistics> {
    let mut app = App::new(StdConsole::stdio(), &Settings::default());
    app.run().context("menu loop failed")
}

fn fault(message: &str) -> ExitCode {
    log::error!("{message}");
    println!("\n❌ An unexpected error occurred: {message}");
    println!("Please restart the program.");
    ExitCode::FAILURE
}

fn panic_message(payload: Box<dyn Any + Send>) -> String {
    if let Some(s) = payload.downcast_ref::<&str>() {
        s.to_string()
    } else if let Some(s) = payload.downcast_ref::<String>() {
        s.clone()
    } else {
        "panic with non-string payload".to_string()
    }
}
