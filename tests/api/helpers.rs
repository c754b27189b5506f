use djombi_waitlist::configuration::get_configuration;
use djombi_waitlist::startup::Application;
use djombi_waitlist::telemetry::get_subscriber;
use djombi_waitlist::telemetry::init_subscriber;
use once_cell::sync::Lazy;
use wiremock::MockServer;

/// Init the tracing subscriber once only, no matter how many tests call
/// `spawn_app`.
///
/// To opt in to verbose logging, use the env var `TEST_LOG`:
///
/// ```sh
///      TEST_LOG=true cargo test [test_name] | bunyan
/// ```
static TRACING: Lazy<()> = Lazy::new(|| {
    // `stdout` and `sink` are different fn types, hence the two arms
    match std::env::var("TEST_LOG") {
        Ok(_) => init_subscriber(get_subscriber("test", "debug", std::io::stdout)),
        Err(_) => init_subscriber(get_subscriber("test", "debug", std::io::sink)),
    }
    .expect("install tracing subscriber");
});

pub struct TestApp {
    pub addr: String,
    /// Stands in for the external waitlist API
    pub waitlist_server: MockServer,
    /// Plays the browser
    pub api_client: reqwest::Client,
}

impl TestApp {
    /// Submit the waitlist modal, like the browser would
    pub async fn post_waitlist(
        &self,
        body: &serde_json::Value,
    ) -> reqwest::Response {
        self.api_client
            .post(format!("{}/waitlist", self.addr))
            .form(body)
            .send()
            .await
            .expect("execute request")
    }

    pub async fn get_waitlist(
        &self,
        query: &str,
    ) -> reqwest::Response {
        self.api_client
            .get(format!("{}/waitlist?{query}", self.addr))
            .send()
            .await
            .expect("execute request")
    }

    pub async fn get_home(&self) -> reqwest::Response {
        self.api_client
            .get(format!("{}/", self.addr))
            .send()
            .await
            .expect("execute request")
    }
}

/// Spawn the app on a random port, talking to a fresh mock waitlist API.
///
/// Returns the address to which the server was bound, in the form
/// `http://localhost:{port}`; the `http://` prefix is what clients need.
pub async fn spawn_app() -> TestApp {
    Lazy::force(&TRACING);

    let waitlist_server = MockServer::start().await;

    let cfg = {
        let mut cfg = get_configuration().expect("read configuration");
        // port 0: the OS picks a free one, which we then read back from the app
        cfg.application.port = 0;
        cfg.waitlist_api.base_url = waitlist_server.uri();
        cfg
    };

    let app = Application::build(cfg).await.expect("build application");
    let port = app.get_port();
    tokio::spawn(app.run_until_stopped());

    TestApp {
        addr: format!("http://localhost:{port}"),
        waitlist_server,
        api_client: reqwest::Client::builder()
            .redirect(reqwest::redirect::Policy::none())
            .build()
            .expect("build client"),
    }
}
