#[tokio::main]
async fn main() -> anyhow::Result<()> {
    prodreg_observability::init();

    let addr = std::env::var("PRODREG_ADDR").unwrap_or_else(|_| {
        tracing::warn!("PRODREG_ADDR not set; defaulting to 0.0.0.0:8080");
        "0.0.0.0:8080".to_string()
    });

    let app = prodreg_api::app::build_app();

    let listener = tokio::net::TcpListener::bind(&addr).await?;
    tracing::info!("listening on {}", listener.local_addr()?);

    axum::serve(listener, app).await?;
    Ok(())
}
