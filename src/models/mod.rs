pub mod activities;
pub mod roster;

pub use activities::{ActivitiesRow, ActivityView};
pub use roster::Roster;
