use std::path::PathBuf;

use color_eyre::Result;
use tokio::io::AsyncWriteExt;
use tracing_subscriber::prelude::*;

use crate::{
    cmd::{dispatch_line, Flow},
    config::Config,
    input::LineSource,
    state::Session,
};

#[macro_use]
extern crate tracing;

pub mod builtins;
pub mod cmd;
pub mod config;
pub mod error;
pub mod input;
pub mod parse;
pub mod prelude;
pub mod process;
pub mod state;

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    let config = Config::load()?;

    let (writer, _guard) = tracing_appender::non_blocking(tracing_appender::rolling::never(
        &config.log_dir,
        &config.log_file,
    ));

    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer().with_writer(writer))
        .with(tracing_subscriber::EnvFilter::from_default_env())
        .with(tracing_error::ErrorLayer::default())
        .init();

    color_eyre::install()?;

    let script = std::env::args_os().nth(1).map(PathBuf::from);
    let mut source = LineSource::open(script.as_deref()).await;

    let mut session = Session::from_process()?;
    let mut console = tokio::io::stdout();

    trace!(?config, interactive = source.is_interactive(), "starting");

    if source.is_interactive() && !config.greeting.is_empty() {
        console
            .write_all(format!("{}\n", config.greeting).as_bytes())
            .await?;
        console.flush().await?;
    }

    while let Some(line) = source.next_line(session.prompt()).await? {
        if dispatch_line(&line, &mut session, &mut console).await? == Flow::Quit {
            trace!("quit");
            break;
        }
    }

    Ok(())
}
