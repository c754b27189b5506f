use djombi_waitlist::configuration::get_configuration;
use djombi_waitlist::startup::Application;
use djombi_waitlist::telemetry::get_subscriber;
use djombi_waitlist::telemetry::init_subscriber;

/// Initialise telemetry, load config, and start the server
#[tokio::main]
async fn main() -> Result<(), anyhow::Error> {
    // only logs at the specified level and higher are emitted; `RUST_LOG`
    // overrides "info"
    let subscriber = get_subscriber("djombi-waitlist", "info", std::io::stdout);
    init_subscriber(subscriber)?;

    let cfg = get_configuration()?;
    tracing::info!(
        host = %cfg.application.host,
        port = cfg.application.port,
        waitlist_api = %cfg.waitlist_api.base_url,
        "starting server"
    );

    let app = Application::build(cfg).await?;
    match app.run_until_stopped().await {
        Ok(()) => tracing::info!("server exited gracefully"),
        Err(e) => {
            tracing::error!(
                error.cause_chain = ?e,
                error.message = %e,
                "server failed"
            );
            return Err(e.into());
        }
    }

    Ok(())
}
