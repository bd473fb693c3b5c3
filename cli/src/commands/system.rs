use super::{Command, PING};
use crate::cli::ServerArgs;
use crate::config::{Config, ServerDetails};
use crate::error::Result;
use crate::http::ApptrustHttpClient;
use crate::service;

pub struct PingCommand {
    server_details: ServerDetails,
}

impl PingCommand {
    pub fn prepare(server: &ServerArgs, config: &Config) -> Result<Self> {
        Ok(Self {
            server_details: config.server_details(server)?,
        })
    }
}

impl Command for PingCommand {
    fn command_name(&self) -> &'static str {
        PING
    }

    fn server_details(&self) -> &ServerDetails {
        &self.server_details
    }

    async fn run<C: ApptrustHttpClient>(&self, client: &C) -> Result<()> {
        service::ping(client).await
    }
}
