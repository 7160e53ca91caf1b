mod settings;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
    let settings = settings::Settings::new()?;

    tracing_subscriber::fmt()
        .with_env_filter(format!(
            "expensa={level},server={level}",
            level = settings.app.level
        ))
        .init();

    let mut store = server::Store::new();
    for user in &settings.users {
        let id = store.add_user(&user.username, &user.password);
        tracing::debug!("seeded user {} ({id})", user.username);
    }
    tracing::info!("Seeded {} users", settings.users.len());

    let bind = settings
        .server
        .bind
        .unwrap_or_else(|| "127.0.0.1".to_string());
    let addr = format!("{}:{}", bind, settings.server.port);
    let listener = tokio::net::TcpListener::bind(addr).await?;
    server::run_with_listener(server::ServerState::new(store), listener).await?;

    Ok(())
}
