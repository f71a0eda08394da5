use crate::error::RosterError;

/// An activity's participant list together with its capacity.
///
/// All precondition checks for enrolling and withdrawing live here so they can
/// be exercised without a database. Order of `participants` is signup order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Roster {
    participants: Vec<String>,
    max_participants: usize,
}

impl Roster {
    pub fn new(participants: Vec<String>, max_participants: i64) -> Self {
        Self {
            participants,
            max_participants: usize::try_from(max_participants).unwrap_or(0),
        }
    }

    pub fn participants(&self) -> &[String] {
        &self.participants
    }

    pub fn into_participants(self) -> Vec<String> {
        self.participants
    }

    pub fn contains(&self, student: &str) -> bool {
        self.participants.iter().any(|p| p == student)
    }

    pub fn is_full(&self) -> bool {
        self.participants.len() >= self.max_participants
    }

    /// Appends `student`. A student already on the roster is reported as a
    /// duplicate even when the activity is also full.
    pub fn enroll(&mut self, student: &str) -> Result<(), RosterError> {
        if self.contains(student) {
            return Err(RosterError::AlreadySignedUp);
        }
        if self.is_full() {
            return Err(RosterError::AtCapacity);
        }
        self.participants.push(student.to_string());
        Ok(())
    }

    pub fn withdraw(&mut self, student: &str) -> Result<(), RosterError> {
        let Some(pos) = self.participants.iter().position(|p| p == student) else {
            return Err(RosterError::NotSignedUp);
        };
        self.participants.remove(pos);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorKind;

    fn roster(names: &[&str], max: i64) -> Roster {
        Roster::new(names.iter().map(|s| s.to_string()).collect(), max)
    }

    #[test]
    fn enroll_appends_at_end() {
        let mut r = roster(&["a", "b"], 5);
        r.enroll("c").unwrap();
        assert_eq!(r.participants(), ["a", "b", "c"]);
    }

    #[test]
    fn duplicate_enroll_is_conflict_and_leaves_roster() {
        let mut r = roster(&["a"], 5);
        let err = r.enroll("a").unwrap_err();
        assert!(matches!(err, RosterError::AlreadySignedUp));
        assert_eq!(err.kind(), ErrorKind::Conflict);
        assert_eq!(r.participants(), ["a"]);
    }

    #[test]
    fn full_roster_rejects_newcomer() {
        let mut r = roster(&["a", "b"], 2);
        let err = r.enroll("c").unwrap_err();
        assert_eq!(err.kind(), ErrorKind::CapacityExceeded);
        assert_eq!(r.participants(), ["a", "b"]);
    }

    #[test]
    fn duplicate_is_reported_before_capacity() {
        let mut r = roster(&["a", "b"], 2);
        assert!(matches!(r.enroll("a"), Err(RosterError::AlreadySignedUp)));
    }

    #[test]
    fn capacity_of_one_accepts_exactly_one() {
        let mut r = roster(&[], 1);
        r.enroll("a").unwrap();
        assert!(matches!(r.enroll("b"), Err(RosterError::AtCapacity)));
        assert_eq!(r.participants(), ["a"]);
    }

    #[test]
    fn withdraw_preserves_relative_order() {
        let mut r = roster(&["a", "b", "c", "d"], 5);
        r.withdraw("b").unwrap();
        assert_eq!(r.participants(), ["a", "c", "d"]);
    }

    #[test]
    fn withdraw_of_non_member_is_conflict() {
        let mut r = roster(&["a"], 5);
        r.withdraw("a").unwrap();
        let err = r.withdraw("a").unwrap_err();
        assert!(matches!(err, RosterError::NotSignedUp));
        assert!(r.participants().is_empty());
    }

    #[test]
    fn withdraw_frees_a_slot() {
        let mut r = roster(&["a", "b"], 2);
        assert!(r.is_full());
        r.withdraw("a").unwrap();
        r.enroll("c").unwrap();
        assert_eq!(r.into_participants(), vec!["b", "c"]);
    }
}
