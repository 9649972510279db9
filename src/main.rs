use anyhow::Context;
use log::*;
use tokio::io::{AsyncBufReadExt, AsyncWriteExt, BufReader};

use wordle_session::{
    config::{Args, Config, DEFAULT_LOG_FILTER},
    handlers::{self, Action},
    provider::{RemoteWordProvider, WordProvider},
    session::Session,
    store::{FileStore, MemoryStore, Store},
};

/// `run` drives one session from stdin until the player quits or input ends.
async fn run<P: WordProvider, S: Store>(
    config: &Config,
    provider: P,
    store: S,
) -> anyhow::Result<()> {
    let session = Session::start(config, provider, store).await;
    let mut stdout = tokio::io::stdout();

    let welcome = format!(
        "Hi {}, Welcome to Wordle!\n\n{}\n\n{}",
        session.player().await,
        handlers::help_text(),
        handlers::render(&session).await
    );
    stdout
        .write_all(welcome.as_bytes())
        .await
        .context("Error writing to stdout")?;
    stdout.flush().await.context("Error flushing stdout")?;

    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    while let Some(line) = lines.next_line().await.context("Error reading stdin")? {
        match handlers::handle_line(&session, &line).await {
            Action::Reply(reply) => {
                stdout
                    .write_all(format!("{}\n", reply).as_bytes())
                    .await
                    .context("Error writing to stdout")?;
                stdout.flush().await.context("Error flushing stdout")?;
            }
            Action::Quit => break,
        }
    }

    session.close().await;
    Ok(())
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(DEFAULT_LOG_FILTER))
        .init();
    let args: Args = argh::from_env();
    let config = Config::from_args(args);

    let provider = RemoteWordProvider::new(&config)?;
    info!("Starting game for {}...", config.player);

    match config.save_dir.clone() {
        Some(save_dir) => run(&config, provider, FileStore::new(save_dir)).await,
        None => run(&config, provider, MemoryStore::new()).await,
    }
}
