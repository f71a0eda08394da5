use serde::ser::{Serialize, SerializeMap, Serializer};
use sqlx::{Sqlite, SqlitePool, Transaction};
use tracing::debug;

use crate::database::activities_repo;
use crate::error::RosterError;
use crate::models::activities::encode_participants;
use crate::models::{ActivityView, Roster};

/// Every activity keyed by name, in catalog order. Serializes as a JSON object.
#[derive(Debug, Clone, Default)]
pub struct ActivityCatalog(pub Vec<(String, ActivityView)>);

impl ActivityCatalog {
    pub fn get(&self, name: &str) -> Option<&ActivityView> {
        self.0.iter().find(|(n, _)| n == name).map(|(_, v)| v)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl Serialize for ActivityCatalog {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.0.len()))?;
        for (name, view) in &self.0 {
            map.serialize_entry(name, view)?;
        }
        map.end()
    }
}

pub async fn list_activities(pool: &SqlitePool) -> Result<ActivityCatalog, RosterError> {
    let rows = activities_repo::list_all(pool).await?;
    let mut entries = Vec::with_capacity(rows.len());
    for row in rows {
        let view = row.to_view()?;
        entries.push((row.name, view));
    }
    Ok(ActivityCatalog(entries))
}

pub async fn enroll(
    pool: &SqlitePool,
    activity_name: &str,
    student: &str,
) -> Result<(), RosterError> {
    let (mut tx, mut roster) = open_roster(pool, activity_name).await?;
    roster.enroll(student)?;
    save_roster(&mut tx, activity_name, &roster).await?;
    tx.commit().await?;

    debug!(
        "enrolled {} in {} ({} participants)",
        student,
        activity_name,
        roster.participants().len()
    );
    Ok(())
}

pub async fn withdraw(
    pool: &SqlitePool,
    activity_name: &str,
    student: &str,
) -> Result<(), RosterError> {
    let (mut tx, mut roster) = open_roster(pool, activity_name).await?;
    roster.withdraw(student)?;
    save_roster(&mut tx, activity_name, &roster).await?;
    tx.commit().await?;

    debug!(
        "withdrew {} from {} ({} participants)",
        student,
        activity_name,
        roster.participants().len()
    );
    Ok(())
}

// Starts a transaction holding the write lock and loads the roster under it.
// Dropping the returned transaction without commit rolls back.
async fn open_roster(
    pool: &SqlitePool,
    activity_name: &str,
) -> Result<(Transaction<'static, Sqlite>, Roster), RosterError> {
    let mut tx = pool.begin().await?;

    if activities_repo::lock_activity(&mut *tx, activity_name).await? == 0 {
        return Err(RosterError::ActivityNotFound(activity_name.to_string()));
    }
    let Some(row) = activities_repo::find_by_name(&mut *tx, activity_name).await? else {
        return Err(RosterError::ActivityNotFound(activity_name.to_string()));
    };

    let roster = Roster::new(row.participants()?, row.max_participants);
    Ok((tx, roster))
}

async fn save_roster(
    tx: &mut Transaction<'static, Sqlite>,
    activity_name: &str,
    roster: &Roster,
) -> Result<(), RosterError> {
    let participants_json = encode_participants(roster.participants())?;
    activities_repo::save_participants(&mut **tx, activity_name, &participants_json).await?;
    Ok(())
}
