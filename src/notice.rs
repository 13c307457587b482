//! Notices
//!
//! One-line feedback after a roster mutation.

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notice {
    /// Sequence number, lets a timer dismiss only the notice it was started for
    pub seq: u32,
    pub message: &'static str,
}

/// Completed roster mutation
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    Added(u32),
    Updated(u32),
    Deleted(u32),
}

impl Outcome {
    /// Success message. Deletion is reported as a success like the others.
    pub fn message(self) -> &'static str {
        match self {
            Outcome::Added(_) => "User added successfully!",
            Outcome::Updated(_) => "User updated successfully!",
            Outcome::Deleted(_) => "User deleted successfully!",
        }
    }

    pub fn user_id(self) -> u32 {
        match self {
            Outcome::Added(id) | Outcome::Updated(id) | Outcome::Deleted(id) => id,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_outcome_messages() {
        assert_eq!(Outcome::Added(1).message(), "User added successfully!");
        assert_eq!(Outcome::Updated(1).message(), "User updated successfully!");
        assert_eq!(Outcome::Deleted(3).message(), "User deleted successfully!");
        assert_eq!(Outcome::Deleted(3).user_id(), 3);
    }
}
