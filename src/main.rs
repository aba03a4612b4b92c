use std::process::ExitCode;

use clap::Parser;

use perp::cli::Cli;
use perp::config;
use perp::consts;
use perp::errors::PerpError;
use perp::llm_client::LLMClient;
use perp::llm_request::{build_request_payload, validate_query};
use perp::service::ChatService;

async fn run(cli: Cli) -> Result<(), PerpError> {
    validate_query(&cli.query)?;
    let config = config::load_config(&cli.overrides())?;
    log::debug!(
        "model={} api_url={} sampling={:?}",
        config.model,
        config.api_url,
        config.sampling
    );

    let payload = build_request_payload(&config.model, &cli.query, &config.sampling);
    let service = ChatService::new(LLMClient::from_config(&config)?);

    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    service.run(&payload, &mut out, config.show_citations).await
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> ExitCode {
    dotenv::dotenv().ok();
    env_logger::init_from_env(env_logger::Env::new().default_filter_or(consts::DEFAULT_LOG_FILTER));

    let cli = Cli::parse();

    match run(cli).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            log::debug!("fatal: {e:?}");
            eprintln!("{e}");
            ExitCode::FAILURE
        }
    }
}
