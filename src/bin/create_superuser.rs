use clap::Parser;
use org_auth::config::EnvConfig;
use org_auth::db::database_service::DatabaseService;
use org_auth::services::account::{create_account, Privileges};
use org_auth::types::user::RegisterRequest;
use serde_json::json;
use tracing::info;

/// Creates a staff + superuser account (with its personal organisation).
#[derive(Parser, Debug)]
#[command(name = "create-superuser", version)]
struct Args {
    #[arg(long)]
    email: String,
    #[arg(long)]
    first_name: String,
    #[arg(long)]
    last_name: String,
    /// Falls back to SUPERUSER_PASSWORD so it stays out of shell history.
    #[arg(long, env = "SUPERUSER_PASSWORD", hide_env_values = true)]
    password: String,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    org_auth::init_tracing();
    let args = Args::parse();
    let config = EnvConfig::from_env()?;

    let payload = json!({
        "firstName": args.first_name,
        "lastName": args.last_name,
        "email": args.email,
        "password": args.password,
    });
    let registration = RegisterRequest::validate_payload(&payload).map_err(|errors| {
        let (field, message) = errors.reported().unwrap_or_default();
        format!("{field}: {message}")
    })?;

    let db = DatabaseService::new(&config.db_url, 1).await?;
    let (user, org) = create_account(&db, registration, Privileges::superuser()).await?;

    info!(user_id = %user.user_id, org_id = %org.org_id, "superuser {} created", user.email);
    Ok(())
}
