use anyhow::Context;
use bigapp::kernel::config::load_settings;
use bigapp::logger::Logger;
use bigapp_server::{Server, Settings};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let settings: Settings = load_settings(Some("server")).context("Critical: Configuration is malformed")?;

    let _log = Logger::from_settings(&settings.logging)?;

    Server::builder().settings(settings).build()?.run().await
}
