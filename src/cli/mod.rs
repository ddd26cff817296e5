//! Command-line interface.

pub mod add;
pub mod check;
pub mod output;
pub mod run;

use std::path::PathBuf;

use clap::Parser;
use tracing::debug;

use crate::core::client::OpenAi;
use crate::core::config::{Layer, Settings};
use crate::core::store::{Filesystem, Store};
use crate::error::Result;

/// Keyrelay - send a prompt through a rotating list of API keys.
#[derive(Parser, Debug)]
#[command(
    name = "keyrelay",
    about = "Send a prompt to the OpenAI API, rotating through your saved API keys",
    version,
    after_help = "Keys are read from api_keys.json in the current directory. Add some with -i."
)]
pub struct Cli {
    /// The prompt to send to the API
    pub prompt: Option<String>,

    /// Check every saved API key for validity
    #[arg(short = 'C', long)]
    pub check: bool,

    /// Interactively add API keys before anything else
    #[arg(short, long)]
    pub interactive: bool,

    /// Enable debug logging
    #[arg(short, long)]
    pub verbose: bool,

    /// Key file location [default: api_keys.json]
    #[arg(long, env = "KEYRELAY_KEYS_FILE", value_name = "PATH")]
    pub keys_file: Option<PathBuf>,

    /// Model to request [default: gpt-4o-mini]
    #[arg(long, env = "KEYRELAY_MODEL")]
    pub model: Option<String>,

    /// API base URL [default: https://api.openai.com/v1]
    #[arg(long, env = "KEYRELAY_ENDPOINT", value_name = "URL")]
    pub endpoint: Option<String>,

    /// Request timeout in seconds
    #[arg(long, env = "KEYRELAY_TIMEOUT", value_name = "SECS")]
    pub timeout: Option<u64>,
}

impl Cli {
    /// Settings overrides carried by flags and their env vars.
    fn layer(&self) -> Layer {
        Layer {
            model: self.model.clone(),
            endpoint: self.endpoint.clone(),
            keys_file: self.keys_file.clone(),
            timeout_secs: self.timeout,
        }
    }
}

/// Execute the mode selected by `cli`.
pub fn execute(cli: Cli) -> Result<()> {
    let settings = Settings::load(cli.layer())?;
    let store = Filesystem::new(&settings.keys_file);

    let keys = if cli.interactive {
        add::execute(&store)?
    } else {
        store.load()?
    };
    debug!(count = keys.len(), "keys available");

    if keys.is_empty() {
        output::error("no API keys found");
        output::hint(&format!("add your API keys with {}", output::cmd("keyrelay -i")));
        return Ok(());
    }

    if cli.check {
        let client = OpenAi::from_settings(&settings)?;
        check::execute(&client, &keys)
    } else if let Some(prompt) = cli.prompt.filter(|p| !p.is_empty()) {
        let client = OpenAi::from_settings(&settings)?;
        run::execute(&client, &prompt, &keys)
    } else {
        if !cli.interactive {
            output::hint(&format!(
                "pass a prompt to send it, or {} to test your keys",
                output::cmd("--check")
            ));
        }
        Ok(())
    }
}
