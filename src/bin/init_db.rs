use dotenvy::dotenv;
use tracing_subscriber::EnvFilter;

use activities_portal::config::AppConfig;
use activities_portal::database::{self, activities_repo, schema};
use activities_portal::models::ActivitiesRow;

#[tokio::main]
async fn main() {
    dotenv().ok();
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .init();

    let config = match AppConfig::from_env() {
        Ok(c) => c,
        Err(e) => {
            eprintln!("init_db: {}", e);
            std::process::exit(1);
        }
    };

    let pool = match database::connect(&config).await {
        Ok(p) => p,
        Err(e) => {
            eprintln!("init_db: cannot open {}: {}", config.database_url, e);
            std::process::exit(1);
        }
    };

    match schema::init_db(&pool).await {
        Ok(report) => {
            println!(
                "init_db: seeded={}, existing={}",
                report.seeded, report.existing
            );
        }
        Err(e) => {
            eprintln!("init_db failed: {}", e);
            std::process::exit(1);
        }
    }

    match activities_repo::list_all(&pool).await {
        Ok(rows) => {
            for row in rows {
                match occupancy_line(&row) {
                    Ok(line) => println!("{}", line),
                    Err(e) => eprintln!("init_db: {} has an unreadable roster: {}", row.name, e),
                }
            }
        }
        Err(e) => {
            eprintln!("init_db: listing failed: {}", e);
            std::process::exit(1);
        }
    }
}

fn occupancy_line(row: &ActivitiesRow) -> serde_json::Result<String> {
    let enrolled = row.participants()?.len();
    Ok(format!(
        "{:<20} {:>3}/{}",
        row.name, enrolled, row.max_participants
    ))
}
