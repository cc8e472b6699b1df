//! urlqr entrypoint

use clap::Parser;
use std::io;
use std::process::ExitCode;
use tracing::debug;
use urlqr::input::{self, Prompted, Request};
use urlqr::{Error, GeneratorConfig, LoggingOptions, QrGenerator, Result, logging, output, url};

#[derive(Parser, Debug)]
#[command(
    name = "urlqr",
    version,
    about = "Encode a URL as a QR code PNG next to this executable"
)]
struct Cli {
    /// URL to encode; prompts interactively when omitted
    url: Option<String>,

    /// Output filename; `.png` is appended when missing
    filename: Option<String>,
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    if let Err(err) = logging::init(&LoggingOptions::default()) {
        eprintln!("{err}");
    }

    let runtime = match tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()
    {
        Ok(runtime) => runtime,
        Err(err) => {
            eprintln!("{}", output::render_failure(&Error::Io(err)));
            return ExitCode::FAILURE;
        }
    };

    let code = runtime.block_on(run(cli));
    // An interrupted prompt leaves a blocking stdin read behind.
    runtime.shutdown_background();
    code
}

async fn run(cli: Cli) -> ExitCode {
    println!("{}", output::BANNER);
    println!("{}", "=".repeat(40));

    match execute(cli).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(Error::Interrupted) => {
            println!("\n\n{}", output::FAREWELL);
            ExitCode::SUCCESS
        }
        Err(err) => {
            debug!(kind = ?err.kind(), "Generation failed");
            eprintln!("\n{}", output::render_failure(&err));
            ExitCode::FAILURE
        }
    }
}

async fn execute(cli: Cli) -> Result<()> {
    let request = match cli.url {
        Some(target) => Request::from_args(target, cli.filename),
        None => match prompt_interactively().await? {
            Prompted::Request(request) => request,
            Prompted::Empty => {
                println!("{}", output::EMPTY_INPUT);
                return Ok(());
            }
        },
    };

    let url = url::normalize(&request.target)?;
    println!("\n{}", output::generating(&url));

    let config = GeneratorConfig::for_current_exe()?;
    let generated = QrGenerator::new(&config).generate(&url, request.filename.as_deref())?;

    for line in output::render_success(&generated) {
        println!("{line}");
    }
    Ok(())
}

/// Run the blocking prompts while listening for Ctrl-C.
///
/// The listener is polled first so it is installed before any prompt is shown.
async fn prompt_interactively() -> Result<Prompted> {
    let interrupt = tokio::signal::ctrl_c();
    tokio::pin!(interrupt);
    let prompts = async {
        tokio::task::spawn_blocking(|| input::prompt(io::stdin().lock(), io::stdout())).await
    };

    tokio::select! {
        biased;
        signal = &mut interrupt => {
            signal?;
            Err(Error::Interrupted)
        }
        joined = prompts => joined.map_err(io::Error::other)?,
    }
}
