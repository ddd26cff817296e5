//! Keyrelay - send a prompt to a hosted chat-completion API, rotating
//! through a local list of API keys until one answers.
//!
//! # Architecture
//!
//! ```text
//! src/
//! ├── cli/              # Command-line interface
//! │   ├── add           # Interactive key entry (-i)
//! │   ├── check         # Key validity report (-C)
//! │   ├── run           # Prompt execution
//! │   └── output        # Colored terminal output
//! └── core/             # Core library components
//!     ├── config        # Layered settings (.keyrelay.toml, env, flags)
//!     ├── constants     # File names and defaults
//!     ├── domain/       # ApiKey and Ordinal
//!     ├── store/        # Credential storage
//!     │   ├── mod       # Store trait, interactive append
//!     │   └── fs        # JSON file implementation
//!     ├── client/       # Chat completion client
//!     │   ├── mod       # ChatClient trait, Outcome
//!     │   └── openai    # Blocking HTTP implementation
//!     └── rotation      # Fallback loop and validity check
//! ```

pub mod cli;
pub mod core;
pub mod error;

pub use crate::core::client::{ChatClient, OpenAi, Outcome};
pub use crate::core::domain::{ApiKey, Ordinal};
pub use crate::core::rotation::{check_all, run_with_fallback, Answer, KeyStatus};
pub use crate::core::store::{append_interactive, Filesystem, KeyPrompt, Store};
