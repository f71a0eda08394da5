use serde::Serialize;

// One row per activity; the roster is kept as a JSON array in `participants_json`.
#[derive(Debug, Clone, sqlx::FromRow)]
pub struct ActivitiesRow {
    pub id: i64,
    pub name: String,
    pub description: String,
    pub schedule: String,
    pub max_participants: i64,
    pub participants_json: String,
}

impl ActivitiesRow {
    /// Decodes the stored roster in signup order.
    pub fn participants(&self) -> serde_json::Result<Vec<String>> {
        decode_participants(&self.participants_json)
    }

    pub fn to_view(&self) -> serde_json::Result<ActivityView> {
        Ok(ActivityView {
            description: self.description.clone(),
            schedule: self.schedule.clone(),
            max_participants: self.max_participants,
            participants: self.participants()?,
        })
    }
}

pub fn decode_participants(raw: &str) -> serde_json::Result<Vec<String>> {
    serde_json::from_str(raw)
}

pub fn encode_participants(participants: &[String]) -> serde_json::Result<String> {
    serde_json::to_string(participants)
}

/// Public shape of an activity as returned by the listing endpoint.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ActivityView {
    pub description: String,
    pub schedule: String,
    pub max_participants: i64,
    pub participants: Vec<String>,
}
