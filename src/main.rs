use std::path::PathBuf;

use tokio::io::{AsyncBufReadExt, AsyncWriteExt, BufReader};

use polykit::{
    default_config_path, init_logging, AlgorithmRunner, Config, Reply, RunnerOutcome, Session,
    BUILD_DATE, VERSION,
};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    init_logging()?;
    tracing::info!("PolyKit {} (built {})", VERSION, BUILD_DATE);

    let config_path = match std::env::args_os().nth(1) {
        Some(path) => PathBuf::from(path),
        None => default_config_path()?,
    };
    let config = Config::load_or_default(&config_path)?;

    let runner = AlgorithmRunner::new(&config.runner);
    let mut session = Session::new(&config);

    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    let mut stdout = tokio::io::stdout();

    while let Some(line) = lines.next_line().await? {
        let text = match session.handle_line(&line) {
            Ok(Reply::Output(text)) => text,
            Ok(Reply::Silent) => continue,
            Ok(Reply::Job(job)) => match job.run(&runner).await {
                RunnerOutcome::Completed(text) => text,
                RunnerOutcome::Failed(message) => format!("error: {}", message),
            },
            Ok(Reply::Quit) => break,
            Err(e) => {
                tracing::warn!("Rejected command {:?}: {:#}", line, e);
                format!("error: {:#}", e)
            }
        };
        stdout.write_all(text.as_bytes()).await?;
        stdout.write_all(b"\n").await?;
        stdout.flush().await?;
    }

    tracing::info!("Session ended");
    Ok(())
}
