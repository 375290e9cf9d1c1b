use std::process::ExitCode;

use clap::Parser;
use opencenter::adapter::inbound::cli::{self, command::Cli, output};

#[tokio::main]
async fn main() -> ExitCode {
    let _ = dotenvy::dotenv();

    match cli::run(Cli::parse()).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            output::error(&e.to_string());
            ExitCode::FAILURE
        }
    }
}
