use std::net::TcpListener;

use actix_web::dev::Server;
use actix_web::web;
use actix_web::App;
use actix_web::HttpServer;
use tracing_actix_web::TracingLogger;

use crate::configuration::ModalSettings;
use crate::configuration::Settings;
use crate::routes::health_check;
use crate::routes::home;
use crate::routes::join_waitlist;
use crate::routes::waitlist_form;
use crate::waitlist_client::WaitlistClient;

/// Wrapper for actix's `Server` with access to the bound port. Not to be
/// confused with actix's `App`!
pub struct Application {
    /// Left private; use `get_port` to access
    port: u16,
    server: Server,
}

impl Application {
    /// Bind the listener (port 0 picks a random one), build the waitlist API
    /// client, and assemble the `Server`. Nothing runs until
    /// `run_until_stopped`.
    pub async fn build(cfg: Settings) -> Result<Self, anyhow::Error> {
        let addr = format!("{}:{}", cfg.application.host, cfg.application.port);
        let listener = TcpListener::bind(addr)?;
        // the port actually assigned by the OS
        let port = listener.local_addr()?.port();

        let client = cfg.waitlist_api.client()?;
        let server = run(listener, client, cfg.modal)?;

        Ok(Self { port, server })
    }

    pub fn get_port(&self) -> u16 { self.port }

    /// Because this consumes `self`, this should be the final function call (or
    /// passed to `tokio::spawn`)
    pub async fn run_until_stopped(self) -> Result<(), std::io::Error> { self.server.await }
}

/// The server is not responsible for binding to an address, it only listens to
/// an already bound address.
///
/// Declares all endpoints.
pub fn run(
    listener: TcpListener,
    client: WaitlistClient,
    modal: ModalSettings,
) -> Result<Server, anyhow::Error> {
    // `Data` is an `Arc` on the outside; every worker gets a clone of the same
    // client (and thus the same connection pool)
    let client = web::Data::new(client);
    let modal = web::Data::new(modal);

    let server = HttpServer::new(move || {
        App::new()
            .wrap(TracingLogger::default())
            .route("/", web::get().to(home))
            .route("/health_check", web::get().to(health_check))
            .route("/waitlist", web::get().to(waitlist_form))
            .route("/waitlist", web::post().to(join_waitlist))
            .app_data(client.clone())
            .app_data(modal.clone())
    })
    .listen(listener)?
    .run();

    Ok(server)
}
