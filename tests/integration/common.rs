use async_trait::async_trait;
use std::sync::Mutex;
use std::time::Duration;
use traffic_gauge::config::{parse_config, Config};
use traffic_gauge::pipeline::Pacer;
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

/// Builds a configuration with short timeouts and no jitter
pub fn test_config(domains_path: &str, lookup_endpoint: Option<&str>) -> Config {
    let lookup = match lookup_endpoint {
        Some(endpoint) => format!(
            "[lookup]\nenabled = true\napi-key = \"test-key\"\nendpoint = \"{}\"\ntimeout-secs = 2\n",
            endpoint
        ),
        None => String::new(),
    };

    let content = format!(
        r#"
[input]
domains-path = "{}"

[http]
probe-timeout-secs = 2
fetch-timeout-secs = 2

[estimation]
jitter-low = 1.0
jitter-high = 1.0

[politeness]
delay-min-ms = 5
delay-max-ms = 10

{}
"#,
        domains_path, lookup
    );

    parse_config(&content).expect("test config should be valid")
}

/// The `host:port` of a mock server, used as the domain under test
pub fn mock_domain(server: &MockServer) -> String {
    server.address().to_string()
}

/// A domain on a local port nothing listens on
pub fn closed_domain() -> String {
    let listener = std::net::TcpListener::bind("127.0.0.1:0").expect("bind ephemeral port");
    let address = listener.local_addr().expect("local address");
    drop(listener);
    address.to_string()
}

/// Serves `html` as a live homepage on the mock server
pub async fn mount_homepage(server: &MockServer, html: &str) {
    Mock::given(method("HEAD"))
        .and(path("/"))
        .respond_with(ResponseTemplate::new(200))
        .mount(server)
        .await;

    Mock::given(method("GET"))
        .and(path("/"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_string(html.to_string())
                .insert_header("content-type", "text/html"),
        )
        .mount(server)
        .await;
}

/// Pacer that records requested delays instead of sleeping
#[derive(Default)]
pub struct RecordingPacer {
    pub delays: Mutex<Vec<Duration>>,
}

#[async_trait]
impl Pacer for RecordingPacer {
    async fn pause(&self, delay: Duration) {
        self.delays.lock().unwrap().push(delay);
    }
}
