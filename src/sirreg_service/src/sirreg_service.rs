use std::net::SocketAddr;

use axum::{
    Router,
    routing::{get, post},
};
use sirreg_adapters::{
    authentication::SessionConfig,
    http::routes::{home, login, login_page, login_success, logout, register, register_page},
};
use sirreg_core::UserStore;
use tokio::net::TcpListener;
use tower_http::{services::ServeDir, trace::TraceLayer};

use crate::tracing::{make_span_with_request_id, on_request, on_response};

/// The registration and login web application
pub struct SirRegService {
    router: Router,
}

impl SirRegService {
    /// Create a new SirRegService
    ///
    /// # Arguments
    /// * `user_store` - Store for user records (must be Clone)
    /// * `session` - Session cookie settings
    /// * `assets_dir` - Directory served under `/assets`
    ///
    /// Each route is given only the state it needs.
    pub fn new<U>(user_store: U, session: SessionConfig, assets_dir: String) -> Self
    where
        U: UserStore + Clone + 'static,
    {
        let router = Router::new()
            // Form login needs the user store and the session settings
            .route("/login", get(login_page).post(login::<U>))
            .with_state((user_store.clone(), session.clone()))
            // Registration only needs the user store
            .route("/register", get(register_page).post(register::<U>))
            .with_state(user_store)
            // Everything else only reads the session cookie
            .route("/login-success", get(login_success))
            .route("/home", get(home))
            .route("/logout", post(logout))
            .with_state(session)
            .nest_service("/assets", ServeDir::new(assets_dir));

        Self { router }
    }

    fn with_trace_layer(mut self) -> Self {
        self.router = self.router.layer(
            TraceLayer::new_for_http()
                .make_span_with(make_span_with_request_id)
                .on_request(on_request)
                .on_response(on_response),
        );
        self
    }

    /// Convert the service into a router that can be mounted on another router
    pub fn as_router(self) -> Router {
        self.with_trace_layer().router
    }

    /// Run the service as a standalone server
    ///
    /// The peer address of every connection is made available to handlers
    /// through `ConnectInfo<SocketAddr>`.
    pub async fn run_standalone(self, listener: TcpListener) -> Result<(), std::io::Error> {
        let router = self.as_router();

        tracing::info!("SirReg listening on {}", listener.local_addr()?);

        axum::serve(
            listener,
            router.into_make_service_with_connect_info::<SocketAddr>(),
        )
        .await
    }
}
