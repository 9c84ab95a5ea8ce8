#![allow(dead_code)]

use contact_form_server::AppBuilder;
use contact_form_server::config::{Config, LogFormat, ServerConfig, StorageConfig, TelemetryConfig};
use serde_json::{Value, json};
use std::path::PathBuf;
use std::sync::Once;
use tempfile::TempDir;

static INIT: Once = Once::new();

pub fn setup_tracing() {
    INIT.call_once(|| {
        let filter = tracing_subscriber::EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| "warn".into())
            .add_directive("contact_form_server=debug".parse().unwrap())
            .add_directive("tower=warn".parse().unwrap())
            .add_directive("hyper=warn".parse().unwrap())
            .add_directive("reqwest=warn".parse().unwrap());

        tracing_subscriber::fmt().with_env_filter(filter).with_test_writer().init();
    });
}

pub fn get_test_config(data_file: PathBuf) -> Config {
    Config {
        server: ServerConfig {
            host: "127.0.0.1".to_string(),
            port: 0, // 0 means let OS choose
            mgmt_port: 0,
            shutdown_timeout_secs: 1,
        },
        storage: StorageConfig { data_file },
        telemetry: TelemetryConfig { log_format: LogFormat::Text, otlp_endpoint: None },
    }
}

pub struct TestApp {
    pub server_url: String,
    pub mgmt_url: String,
    pub client: reqwest::Client,
    pub data_file: PathBuf,
    _data_dir: TempDir,
}

impl TestApp {
    pub async fn spawn() -> Self {
        let data_dir = TempDir::new().expect("Failed to create temp dir");
        let data_file = data_dir.path().join("contact_forms.json");
        Self::spawn_with_data_file(data_dir, data_file).await
    }

    /// Spawns against a data file path the caller controls, e.g. one pre-seeded with content.
    pub async fn spawn_with_data_file(data_dir: TempDir, data_file: PathBuf) -> Self {
        setup_tracing();

        let config = get_test_config(data_file.clone());
        let app = AppBuilder::new(config.clone()).build();

        let api_listener = tokio::net::TcpListener::bind(format!("{}:{}", config.server.host, config.server.port))
            .await
            .unwrap();
        let mgmt_listener =
            tokio::net::TcpListener::bind(format!("{}:{}", config.server.host, config.server.mgmt_port))
                .await
                .unwrap();
        let server_url = format!("http://{}", api_listener.local_addr().unwrap());
        let mgmt_url = format!("http://{}", mgmt_listener.local_addr().unwrap());

        let app_router = contact_form_server::api::app_router(app.app_state);
        let mgmt_router = contact_form_server::api::mgmt_router(app.mgmt_state);

        tokio::spawn(async move {
            axum::serve(api_listener, app_router).await.unwrap();
        });
        tokio::spawn(async move {
            axum::serve(mgmt_listener, mgmt_router).await.unwrap();
        });

        Self { server_url, mgmt_url, client: reqwest::Client::new(), data_file, _data_dir: data_dir }
    }

    pub async fn post_contact(&self, body: &Value) -> reqwest::Response {
        self.client.post(format!("{}/contact", self.server_url)).json(body).send().await.unwrap()
    }

    pub async fn post_contact_raw(&self, body: impl Into<reqwest::Body>) -> reqwest::Response {
        self.client
            .post(format!("{}/contact-raw", self.server_url))
            .header("Content-Type", "application/json")
            .body(body)
            .send()
            .await
            .unwrap()
    }

    pub async fn list_contacts(&self) -> reqwest::Response {
        self.client.get(format!("{}/contacts", self.server_url)).send().await.unwrap()
    }
}

pub fn valid_contact(name: &str) -> Value {
    json!({
        "name": name,
        "email": "test@example.com",
        "message": "This is a test message from the integration suite!"
    })
}
