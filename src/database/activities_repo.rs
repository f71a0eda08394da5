use sqlx::SqliteExecutor;

use crate::models::ActivitiesRow;

const SQL_LIST_ALL: &str = r#"
SELECT
  id,
  name,
  description,
  schedule,
  max_participants,
  participants_json
FROM activities
ORDER BY id ASC
"#;

pub async fn list_all<'e>(
    executor: impl SqliteExecutor<'e>,
) -> sqlx::Result<Vec<ActivitiesRow>> {
    sqlx::query_as::<_, ActivitiesRow>(SQL_LIST_ALL)
        .fetch_all(executor)
        .await
}

const SQL_FIND_BY_NAME: &str = r#"
SELECT
  id,
  name,
  description,
  schedule,
  max_participants,
  participants_json
FROM activities
WHERE name = ?
"#;

pub async fn find_by_name<'e>(
    executor: impl SqliteExecutor<'e>,
    name: &str,
) -> sqlx::Result<Option<ActivitiesRow>> {
    sqlx::query_as::<_, ActivitiesRow>(SQL_FIND_BY_NAME)
        .bind(name)
        .fetch_optional(executor)
        .await
}

// No-op write on the row. Run first inside a transaction, it takes the
// database write lock before the roster is read, so concurrent
// read-modify-write cycles on the same activity serialize.
const SQL_LOCK_ACTIVITY: &str = r#"
UPDATE activities
SET participants_json = participants_json
WHERE name = ?
"#;

/// Returns the number of rows locked: 0 when no activity has this name.
pub async fn lock_activity<'e>(
    executor: impl SqliteExecutor<'e>,
    name: &str,
) -> sqlx::Result<u64> {
    let res = sqlx::query(SQL_LOCK_ACTIVITY)
        .bind(name)
        .execute(executor)
        .await?;
    Ok(res.rows_affected())
}

const SQL_SAVE_PARTICIPANTS: &str = r#"
UPDATE activities
SET participants_json = ?
WHERE name = ?
"#;

pub async fn save_participants<'e>(
    executor: impl SqliteExecutor<'e>,
    name: &str,
    participants_json: &str,
) -> sqlx::Result<u64> {
    let res = sqlx::query(SQL_SAVE_PARTICIPANTS)
        .bind(participants_json)
        .bind(name)
        .execute(executor)
        .await?;
    Ok(res.rows_affected())
}

const SQL_COUNT: &str = "SELECT COUNT(*) FROM activities";

pub async fn count<'e>(executor: impl SqliteExecutor<'e>) -> sqlx::Result<i64> {
    sqlx::query_scalar::<_, i64>(SQL_COUNT)
        .fetch_one(executor)
        .await
}

const SQL_INSERT_ACTIVITY: &str = r#"
INSERT INTO activities (
  name,
  description,
  schedule,
  max_participants,
  participants_json
) VALUES (?, ?, ?, ?, ?)
"#;

pub struct NewActivity<'a> {
    pub name: &'a str,
    pub description: &'a str,
    pub schedule: &'a str,
    pub max_participants: i64,
    pub participants_json: &'a str,
}

pub async fn insert_activity<'e>(
    executor: impl SqliteExecutor<'e>,
    activity: NewActivity<'_>,
) -> sqlx::Result<u64> {
    let res = sqlx::query(SQL_INSERT_ACTIVITY)
        .bind(activity.name)
        .bind(activity.description)
        .bind(activity.schedule)
        .bind(activity.max_participants)
        .bind(activity.participants_json)
        .execute(executor)
        .await?;
    Ok(res.rows_affected())
}
