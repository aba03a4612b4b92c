use clap::Parser;

use crate::config::Overrides;

#[derive(Debug, Parser)]
#[command(
    name = "perp",
    version,
    about = "Ask a question and stream the answer from a chat-completion API"
)]
pub struct Cli {
    /// Question to send
    pub query: String,

    /// Model name (defaults to sonar)
    #[arg(short, long)]
    pub model: Option<String>,

    /// Upper bound on generated tokens
    #[arg(long)]
    pub max_tokens: Option<u32>,

    /// Sampling temperature in [0, 2]
    #[arg(long)]
    pub temperature: Option<f64>,

    /// Nucleus sampling threshold in (0, 1]
    #[arg(long)]
    pub top_p: Option<f64>,

    /// Do not print the citations block
    #[arg(long)]
    pub no_citations: bool,
}

impl Cli {
    pub fn overrides(&self) -> Overrides {
        Overrides {
            model: self.model.clone(),
            max_tokens: self.max_tokens,
            temperature: self.temperature,
            top_p: self.top_p,
            no_citations: self.no_citations,
        }
    }
}
