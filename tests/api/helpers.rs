use olist_dashboard::{configuration::Settings, startup::Application, telemetry::{get_subscriber, init_subscriber}};
use once_cell::sync::Lazy;
use reqwest::redirect::Policy;
use wiremock::MockServer;

static LOGGER_INSTANCE: Lazy<()> = Lazy::new(|| {
    let log_level = "info".to_string();
    let name = "olist-dashboard-test".to_string();

    if std::env::var("TEST_LOG").is_ok() {
        let subscriber = get_subscriber(name, log_level, std::io::stdout);
        init_subscriber(subscriber);
    } else {
        let subscriber = get_subscriber(name, log_level, std::io::sink);
        init_subscriber(subscriber);
    }
});

pub struct TestApp{
    pub host: String,
    pub port: u16,
    pub backend: MockServer,
    pub api_client: reqwest::Client
}

impl TestApp {
    pub fn get_app_url(&self) -> String{
        format!("http://{}:{}", self.host, self.port)
    }

    pub async fn spawn_app() -> TestApp{
        let backend = MockServer::start().await;
        let base_url = backend.uri();
        TestApp::spawn_with_backend(backend, base_url).await
    }

    // Points the dashboard at a port nothing listens on.
    pub async fn spawn_without_backend() -> TestApp{
        let backend = MockServer::start().await;
        TestApp::spawn_with_backend(backend, "http://127.0.0.1:9".to_string()).await
    }

    async fn spawn_with_backend(backend: MockServer, base_url: String) -> TestApp{
        Lazy::force(&LOGGER_INSTANCE);

        let mut settings = Settings::get().expect("Failed to read configuration");
        settings.application.port = 0;
        settings.backend.base_url = base_url;
        settings.backend.timeout_milliseconds = Some(2000);

        let application = Application::new(settings)
                            .await
                            .expect("Failed to build application");

        let host = application.host.clone();
        let port = application.port;
        tokio::task::spawn(application.server);

        let api_client = reqwest::Client::builder()
                            .redirect(Policy::none())
                            .cookie_store(true)
                            .build()
                            .unwrap();

        TestApp{
            host,
            port,
            backend,
            api_client
        }
    }

    pub async fn get(&self, path: &str) -> reqwest::Response{
        self.api_client.get(format!("{}{}", self.get_app_url(), path))
            .send()
            .await
            .expect("Failed to execute request")
    }

    pub async fn get_html(&self, path: &str) -> String{
        self.get(path).await.text().await.unwrap()
    }

    pub async fn post_form<Body: serde::Serialize>(&self, path: &str, body: &Body) -> reqwest::Response{
        self.api_client.post(format!("{}{}", self.get_app_url(), path))
            .form(body)
            .send()
            .await
            .expect("Failed to execute request")
    }
}

pub fn assert_is_redirect_to(response: &reqwest::Response, location: &str){
    assert_eq!(response.status().as_u16(), 303);
    assert_eq!(response.headers().get("Location").unwrap(), location);
}
