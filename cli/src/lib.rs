pub mod cli;
pub mod commands;
pub mod config;
pub mod error;
pub mod flags;
pub mod http;
pub mod model;
pub mod service;
pub mod utils;

pub use cli::{Cli, Commands};
pub use commands::Command;
pub use config::{Config, ServerDetails};
pub use error::{AppTrustError, Result};
pub use http::{ApptrustHttpClient, HttpResponse, JfrogHttpClient};
