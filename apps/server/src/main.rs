use anyhow::Context;
use netkit::domain::config::AppConfig;
use netkit::kernel::config::load_config;
use netkit_logger::Logger;
use netkit_server::Server;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cfg: AppConfig = load_config(std::env::args_os().nth(1))
        .context("Critical: Configuration is malformed")?;

    let _log = Logger::builder().name(env!("CARGO_PKG_NAME")).config(&cfg.logging)?.init()?;

    Server::builder().config(cfg).build()?.run().await
}
