use tracing::subscriber::set_global_default;
use tracing::Subscriber;
use tracing_bunyan_formatter::BunyanFormattingLayer;
use tracing_bunyan_formatter::JsonStorageLayer;
use tracing_log::LogTracer;
use tracing_subscriber::fmt::MakeWriter;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::EnvFilter;
use tracing_subscriber::Registry;

/// Build a bunyan-formatted (JSON lines) tracing subscriber. `RUST_LOG`, if
/// set, overrides `default_level`.
///
/// `sink` must be a closure/fn (e.g. `std::io::stdout`), not a writer, so that
/// tests can swap in `std::io::sink`.
pub fn get_subscriber<Sink>(
    name: &str,
    default_level: &str,
    sink: Sink,
) -> impl Subscriber + Send + Sync
where
    // `sink` must implement `MakeWriter` for every lifetime `'a`
    Sink: for<'a> MakeWriter<'a> + Send + Sync + 'static,
{
    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    Registry::default()
        .with(env_filter)
        .with(JsonStorageLayer)
        .with(BunyanFormattingLayer::new(name.to_owned(), sink))
}

/// Install `subscriber` globally. Must be called once, before the server (or
/// any modal) starts; `log` records (e.g. from `actix_web`) are redirected to
/// it too.
pub fn init_subscriber(subscriber: impl Subscriber + Send + Sync) -> Result<(), anyhow::Error> {
    LogTracer::init()?;
    set_global_default(subscriber)?;
    Ok(())
}
