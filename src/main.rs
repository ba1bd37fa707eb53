#![allow(dead_code, clippy::similar_names)]
#![warn(clippy::shadow_reuse, clippy::shadow_same, clippy::builtin_type_shadow)]
mod config;
mod control;
mod harness;
mod host;
mod http_handler;
mod logger;
mod mission;

use crate::config::HarnessConfig;
use crate::harness::StressRunner;
use crate::host::HttpAgentHost;

#[tokio::main(flavor = "current_thread")]
async fn main() {
    let config = HarnessConfig::from_env().unwrap_or_else(|e| fatal!("Invalid configuration: {e:?}"));
    let host = HttpAgentHost::new(&config.host_url)
        .unwrap_or_else(|e| fatal!("Could not set up the host bridge client: {e}"));

    let iterations = config.iterations();
    info!(
        "Running missions {}..{} via {}, recording to {}",
        iterations.start,
        iterations.end,
        host.url(),
        config.recordings_dir.display()
    );

    let runner = StressRunner::new(host, config);
    match runner.run().await {
        Ok(summary) => info!("Stress run finished: {summary}"),
        Err(err) => fatal!("Stress run aborted: {err:?}"),
    }
}
