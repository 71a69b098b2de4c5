use std::path::PathBuf;
use std::sync::Arc;

use tracing::{info, Level};

use pill_pal::domain::ProfileService;
use pill_pal::notify::{AlertPermission, AlertPresenter, TerminalPresenter};
use pill_pal::scheduler::ReminderScheduler;
use pill_pal::storage::yaml::{NotificationLogRepository, YamlConnection};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize logging
    tracing_subscriber::fmt()
        .with_max_level(Level::INFO)
        .init();

    info!("Starting pill-pal reminder daemon");

    // Data directory: explicit override first, per-user default otherwise.
    let data_dir = match std::env::var("PILL_PAL_DATA_DIR") {
        Ok(dir) => PathBuf::from(dir),
        Err(_) => YamlConnection::default_data_dir()?,
    };
    info!("Using data directory: {}", data_dir.display());

    let connection = Arc::new(YamlConnection::new(&data_dir)?);
    let profile_service = ProfileService::new(connection.clone());
    let notification_log = Arc::new(NotificationLogRepository::new(connection));

    let presenter: Arc<dyn AlertPresenter> = Arc::new(TerminalPresenter::new());
    if presenter.current_permission() != AlertPermission::Granted {
        let granted = presenter.request_permission()?;
        if granted != AlertPermission::Granted {
            info!("Alert permission not granted; reminders will not be shown until it is");
        }
    }

    let profiles = profile_service.load_or_default();
    info!(
        "Watching {} profile(s), {} reminder(s)",
        profiles.len(),
        profiles.iter().map(|p| p.reminders.len()).sum::<usize>()
    );

    let mut scheduler = ReminderScheduler::new(profile_service, presenter, notification_log);
    scheduler.run().await
}
