mod config;
mod routes;

#[tokio::main]
async fn main() {
    let _ = dotenvy::dotenv();
    tracing_subscriber::fmt::init();

    let config = config::ServerConfig::from_env().expect("invalid server configuration");
    tracing::info!(
        static_dir = %config.static_dir.display(),
        script = %config.page.script_src,
        "serving chat page"
    );

    let app = routes::app(&config);
    let addr = config.bind_addr();
    let listener = tokio::net::TcpListener::bind(&addr).await.expect("failed to bind");

    tracing::info!(%addr, "chatroom listening");
    axum::serve(listener, app).await.expect("server failed");
}
