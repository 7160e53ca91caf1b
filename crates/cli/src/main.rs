use chrono::Utc;
use expensa_cli::{
    App,
    client::ApiClient,
    commands::Command,
    config::{self, AppConfig, NotifierKind},
    local_state::FileStore,
    notify::{LogNotifier, Notifier, TerminalNotifier},
};

#[tokio::main]
async fn main() {
    if let Err(err) = run().await {
        eprintln!("error: {err}");
        std::process::exit(1);
    }
}

async fn run() -> expensa_cli::Result<()> {
    let (settings, command) = config::load()?;

    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(format!(
            "expensa_cli={level},engine={level}",
            level = settings.log_level
        ))
        .init();

    match settings.notifier {
        NotifierKind::Terminal => {
            let notifier = TerminalNotifier::new(settings.notifications);
            execute(&settings, notifier, command).await
        }
        NotifierKind::Log => execute(&settings, LogNotifier, command).await,
    }
}

async fn execute<N: Notifier>(
    settings: &AppConfig,
    notifier: N,
    command: Command,
) -> expensa_cli::Result<()> {
    let api = ApiClient::new(&settings.base_url)?;
    let kv = FileStore::open(&settings.state_path).await?;

    App::new(api, kv, notifier, settings.tz()?)
        .with_default_username(settings.username.clone())
        .run(command, Utc::now(), &mut std::io::stdout())
        .await
}
