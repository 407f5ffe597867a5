use rxdesk::config::Config;
use rxdesk::domain::ports::IdentityRoleService;
use rxdesk::infrastructure::providers::HttpIdentityRoleService;
use rxdesk::services::RoleLoader;
use std::sync::Arc;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

fn yes_no(value: bool) -> &'static str {
    if value {
        "yes"
    } else {
        "no"
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "rxdesk=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    // Load configuration
    let config = Config::from_env()?;
    tracing::info!("Configuration loaded, backend at {}", config.service_url);

    let service = Arc::new(HttpIdentityRoleService::new(&config));

    // Show who the backend thinks is signed in
    match service.current_user().await {
        Ok(Some(identity)) => match &identity.email {
            Some(email) => println!("Signed in as {} ({})", email, identity.id),
            None => println!("Signed in as {}", identity.id),
        },
        Ok(None) => println!("No user signed in"),
        Err(e) => tracing::warn!("Identity check failed: {}", e),
    }

    // Resolve roles the way an embedding workstation would
    let loader = RoleLoader::spawn(service.clone());
    loader.settled().await;

    let roles = loader.roles();
    if roles.is_empty() {
        println!("Roles: none resolved");
    } else {
        let names: Vec<&str> = roles.iter().map(|role| role.as_str()).collect();
        println!("Roles: {}", names.join(", "));
    }

    println!("  admin:             {}", yes_no(loader.is_admin()));
    println!("  pharmacist:        {}", yes_no(loader.is_pharmacist()));
    println!("  cashier:           {}", yes_no(loader.is_cashier()));
    println!("  inventory manager: {}", yes_no(loader.is_inventory_manager()));

    Ok(())
}
