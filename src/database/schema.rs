use sqlx::{SqliteConnection, SqlitePool};
use tracing::info;

use crate::database::activities_repo::{self, NewActivity};
use crate::database::seed::DEFAULT_ACTIVITIES;
use crate::error::RosterError;
use crate::models::activities::encode_participants;

const SQL_CREATE_ACTIVITIES: &str = r#"
CREATE TABLE IF NOT EXISTS activities (
  id INTEGER PRIMARY KEY AUTOINCREMENT,
  name TEXT NOT NULL UNIQUE,
  description TEXT NOT NULL,
  schedule TEXT NOT NULL,
  max_participants INTEGER NOT NULL CHECK (max_participants > 0),
  participants_json TEXT NOT NULL DEFAULT '[]'
)
"#;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct InitReport {
    pub seeded: usize,
    pub existing: i64,
}

/// Creates the schema and seeds the default catalog when the table is empty.
/// Safe to call on every startup, including from several processes at once.
pub async fn init_db(pool: &SqlitePool) -> Result<InitReport, RosterError> {
    let mut conn = pool.acquire().await?;

    // IMMEDIATE takes the write lock before the emptiness check, so racing
    // starters wait on busy_timeout instead of failing a lock upgrade.
    sqlx::query("BEGIN IMMEDIATE").execute(&mut *conn).await?;
    let outcome = create_and_seed(&mut *conn).await;
    let end = if outcome.is_ok() { "COMMIT" } else { "ROLLBACK" };
    sqlx::query(end).execute(&mut *conn).await?;

    let report = outcome?;
    if report.seeded > 0 {
        info!("seeded {} default activities", report.seeded);
    } else {
        info!(
            "activities table holds {} records, skipping seed",
            report.existing
        );
    }
    Ok(report)
}

async fn create_and_seed(conn: &mut SqliteConnection) -> Result<InitReport, RosterError> {
    sqlx::query(SQL_CREATE_ACTIVITIES).execute(&mut *conn).await?;

    let existing = activities_repo::count(&mut *conn).await?;
    if existing > 0 {
        return Ok(InitReport {
            seeded: 0,
            existing,
        });
    }

    for activity in DEFAULT_ACTIVITIES {
        let participants: Vec<String> =
            activity.participants.iter().map(|p| p.to_string()).collect();
        let participants_json = encode_participants(&participants)?;
        activities_repo::insert_activity(
            &mut *conn,
            NewActivity {
                name: activity.name,
                description: activity.description,
                schedule: activity.schedule,
                max_participants: activity.max_participants,
                participants_json: &participants_json,
            },
        )
        .await?;
    }

    Ok(InitReport {
        seeded: DEFAULT_ACTIVITIES.len(),
        existing: 0,
    })
}
