use clap::Args;
use innkeeper::config::AppConfig;
use innkeeper::error::AppError;
use innkeeper::rooms::seed_rooms;
use innkeeper::storage::{self, SqliteRoomStore};

#[derive(Args, Debug, Default)]
pub(crate) struct SeedArgs {
    /// Override the configured database URL
    #[arg(long)]
    pub(crate) database_url: Option<String>,
}

/// Bootstrap the schema and insert the built-in room catalog. Rooms whose
/// slug already exists are left untouched, so rerunning is harmless.
pub(crate) async fn run(mut args: SeedArgs) -> Result<(), AppError> {
    let mut config = AppConfig::load()?;
    if let Some(url) = args.database_url.take() {
        config.database.url = url;
    }

    let pool = storage::connect(&config.database.url).await?;
    storage::ensure_schema(&pool).await?;

    let store = SqliteRoomStore::new(pool);
    let outcome = seed_rooms(&store).await?;

    println!("Room catalog seeded ({})", config.database.url);
    println!("- inserted: {}", outcome.inserted);
    println!("- skipped (already present): {}", outcome.skipped);

    Ok(())
}
