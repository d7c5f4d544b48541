//! Vote ledger decision logic.
//!
//! At most one vote row exists per (post, user); the store enforces this with
//! a unique constraint, and `value` is always -1 or +1. A retracted vote is
//! the absence of the row, never a stored zero.

/// What to do with the vote row for a (post, user) pair
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VoteAction {
    /// No existing row: insert one with the requested value
    Insert,
    /// Existing row with the same value: the user is retracting (toggle-off)
    Retract,
    /// Existing row with the opposite value: switch direction in place
    Switch,
}

impl VoteAction {
    /// Decide the action from the current row state and the requested value
    pub fn decide(existing: Option<i16>, requested: i16) -> VoteAction {
        match existing {
            None => VoteAction::Insert,
            Some(v) if v == requested => VoteAction::Retract,
            Some(_) => VoteAction::Switch,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_first_vote_inserts() {
        assert_eq!(VoteAction::decide(None, 1), VoteAction::Insert);
        assert_eq!(VoteAction::decide(None, -1), VoteAction::Insert);
    }

    #[test]
    fn test_same_value_toggles_off() {
        assert_eq!(VoteAction::decide(Some(1), 1), VoteAction::Retract);
        assert_eq!(VoteAction::decide(Some(-1), -1), VoteAction::Retract);
    }

    #[test]
    fn test_opposite_value_switches() {
        assert_eq!(VoteAction::decide(Some(1), -1), VoteAction::Switch);
        assert_eq!(VoteAction::decide(Some(-1), 1), VoteAction::Switch);
    }
}
