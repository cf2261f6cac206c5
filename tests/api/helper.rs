use codive::{app::App, config::get_configuration, telemetry::get_subscriber};
use once_cell::sync::Lazy;
use reqwest_middleware::{ClientBuilder, ClientWithMiddleware};
use reqwest_retry::{policies::ExponentialBackoff, RetryTransientMiddleware};
use reqwest_tracing::TracingMiddleware;
use tracing_subscriber::util::SubscriberInitExt;
use wiremock::{
    matchers::{method, path},
    Mock, MockServer, ResponseTemplate,
};

static TRACING: Lazy<()> = Lazy::new(|| {
    let env_filter = "codive=trace,tower_http=trace,axum::rejection=trace";

    if std::env::var("TEST_LOG").is_ok() {
        get_subscriber(env_filter, std::io::stdout).init();
    } else {
        get_subscriber(env_filter, std::io::sink).init();
    };
});

pub struct TestApp {
    pub addr: String,
    pub email_server: MockServer,
}

impl TestApp {
    pub async fn post_contact(&self, body: &str) -> reqwest::Response {
        reqwest::Client::new()
            .post(format!("{}/api/contact", &self.addr))
            .header("Content-Type", "application/json")
            .body(body.to_owned())
            .send()
            .await
            .expect("The request should succeed.")
    }

    pub async fn get(&self, route: &str) -> reqwest::Response {
        get_client()
            .get(format!("{}{}", &self.addr, route))
            .send()
            .await
            .expect("The request should succeed.")
    }

    /// Makes the fake provider accept `times` emails, answering with `delivery_id`.
    pub async fn provider_accepts(&self, delivery_id: &str, times: u64) {
        Mock::given(path("/emails"))
            .and(method("POST"))
            .respond_with(
                ResponseTemplate::new(200).set_body_json(serde_json::json!({ "id": delivery_id })),
            )
            .expect(times)
            .mount(&self.email_server)
            .await;
    }

    /// The JSON bodies the fake provider received, in order.
    pub async fn sent_emails(&self) -> Vec<serde_json::Value> {
        self.email_server
            .received_requests()
            .await
            .expect("Request recording should be enabled.")
            .iter()
            .map(|r| serde_json::from_slice(&r.body).expect("The email body should be JSON."))
            .collect()
    }
}

pub async fn spawn_app() -> TestApp {
    Lazy::force(&TRACING);

    let email_server = MockServer::start().await;
    let mut config = get_configuration().expect("Failed to read configuration.");
    config.application.host = "127.0.0.1".into();
    config.application.port = 0;
    config.email_client.base_url = email_server.uri();

    let app = App::with(&config)
        .await
        .expect("The app should be built from the test configuration.");

    let test_app = TestApp {
        addr: format!("http://127.0.0.1:{}", app.port()),
        email_server,
    };

    let _ = tokio::spawn(async move { app.serve().await.expect("The server should be running") });

    test_app
}

pub fn get_client() -> ClientWithMiddleware {
    let retry_policy = ExponentialBackoff::builder().build_with_max_retries(3);

    ClientBuilder::new(reqwest::Client::new())
        .with(TracingMiddleware::default())
        .with(RetryTransientMiddleware::new_with_policy(retry_policy))
        .build()
}
