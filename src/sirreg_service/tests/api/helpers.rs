use std::{
    io,
    net::SocketAddr,
    sync::{Arc, Mutex},
};

use fake::{Fake, faker::internet::en::SafeEmail};
use reqwest::{Client, Response, redirect::Policy};
use secrecy::Secret;
use sirreg_adapters::{
    authentication::SessionConfig,
    config::constants::test,
    persistence::HashMapUserStore,
};
use sirreg_core::UserStore;
use sirreg_service::SirRegService;
use tracing::subscriber::DefaultGuard;
use tracing_subscriber::fmt::MakeWriter;

pub const PASSWORD: &str = "password123";

pub struct TestApp {
    pub address: String,
    pub http_client: Client,
    pub cookie_name: String,
}

impl TestApp {
    pub async fn new() -> Self {
        Self::with_store(HashMapUserStore::new()).await
    }

    pub async fn with_store<U>(user_store: U) -> Self
    where
        U: UserStore + Clone + 'static,
    {
        let mut session = SessionConfig::new(Secret::new(test::JWT_SECRET.to_string()));
        session.secure_cookie = false;
        let cookie_name = session.cookie_name.clone();

        let assets_dir = concat!(env!("CARGO_MANIFEST_DIR"), "/../../assets").to_string();
        let service = SirRegService::new(user_store, session, assets_dir);

        let listener = tokio::net::TcpListener::bind(test::APP_ADDRESS)
            .await
            .expect("Failed to bind test listener");
        let address = format!("http://{}", listener.local_addr().unwrap());

        tokio::spawn(service.run_standalone(listener));

        let http_client = Client::builder()
            .cookie_store(true)
            .redirect(Policy::none())
            .build()
            .unwrap();

        Self {
            address,
            http_client,
            cookie_name,
        }
    }

    pub async fn get_login(&self, query: &str) -> Response {
        self.http_client
            .get(format!("{}/login{}", &self.address, query))
            .send()
            .await
            .expect("Failed to execute request.")
    }

    pub async fn post_login(&self, username: &str, password: &str) -> Response {
        self.http_client
            .post(format!("{}/login", &self.address))
            .form(&[("username", username), ("password", password)])
            .send()
            .await
            .expect("Failed to execute request.")
    }

    pub async fn get_register(&self) -> Response {
        self.http_client
            .get(format!("{}/register", &self.address))
            .send()
            .await
            .expect("Failed to execute request.")
    }

    pub async fn post_register(&self, form: &[(&str, String)]) -> Response {
        self.http_client
            .post(format!("{}/register", &self.address))
            .form(form)
            .send()
            .await
            .expect("Failed to execute request.")
    }

    pub async fn get_login_success(&self, forwarded_for: Option<&str>) -> Response {
        let mut request = self
            .http_client
            .get(format!("{}/login-success", &self.address));
        if let Some(value) = forwarded_for {
            request = request.header("X-Forwarded-For", value);
        }
        request.send().await.expect("Failed to execute request.")
    }

    pub async fn get_home(&self) -> Response {
        self.http_client
            .get(format!("{}/home", &self.address))
            .send()
            .await
            .expect("Failed to execute request.")
    }

    pub async fn post_logout(&self) -> Response {
        self.http_client
            .post(format!("{}/logout", &self.address))
            .send()
            .await
            .expect("Failed to execute request.")
    }

    pub async fn get_asset(&self, path: &str) -> Response {
        self.http_client
            .get(format!("{}/assets/{}", &self.address, path))
            .send()
            .await
            .expect("Failed to execute request.")
    }

    /// Register `username` with a valid form, then log in as them.
    pub async fn register_and_login(&self, username: &str, phone: &str) {
        let response = self.post_register(&registration(username, phone)).await;
        assert_eq!(response.status(), reqwest::StatusCode::SEE_OTHER);

        let response = self.post_login(username, PASSWORD).await;
        assert_eq!(location(&response), "/login-success");
    }
}

/// A valid registration form with a random email.
pub fn registration(username: &str, phone: &str) -> Vec<(&'static str, String)> {
    vec![
        ("username", username.to_string()),
        ("email", SafeEmail().fake()),
        ("password", PASSWORD.to_string()),
        ("dob", "1992-06-15".to_string()),
        ("phone", phone.to_string()),
        ("gender", "Female".to_string()),
    ]
}

pub fn with_field(
    mut form: Vec<(&'static str, String)>,
    field: &str,
    value: &str,
) -> Vec<(&'static str, String)> {
    for (name, current) in form.iter_mut() {
        if *name == field {
            *current = value.to_string();
        }
    }
    form
}

pub fn location(response: &Response) -> String {
    response
        .headers()
        .get(reqwest::header::LOCATION)
        .expect("response has no Location header")
        .to_str()
        .unwrap()
        .to_string()
}

pub fn peer_address(app: &TestApp) -> SocketAddr {
    app.address
        .trim_start_matches("http://")
        .parse()
        .unwrap()
}

/// Captures formatted log output for assertions.
///
/// `#[tokio::test]` runs the spawned server on the test thread, so a thread
/// local subscriber sees the handlers' events.
#[derive(Clone, Default)]
pub struct LogBuffer(Arc<Mutex<Vec<u8>>>);

impl LogBuffer {
    pub fn capture() -> (Self, DefaultGuard) {
        let buffer = Self::default();
        let subscriber = tracing_subscriber::fmt()
            .with_writer(buffer.clone())
            .with_ansi(false)
            .with_max_level(tracing::Level::INFO)
            .finish();
        let guard = tracing::subscriber::set_default(subscriber);
        (buffer, guard)
    }

    pub fn contents(&self) -> String {
        let bytes = self.0.lock().unwrap();
        String::from_utf8_lossy(&bytes).into_owned()
    }
}

impl io::Write for LogBuffer {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.0.lock().unwrap().extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

impl<'a> MakeWriter<'a> for LogBuffer {
    type Writer = LogBuffer;

    fn make_writer(&'a self) -> Self::Writer {
        self.clone()
    }
}
