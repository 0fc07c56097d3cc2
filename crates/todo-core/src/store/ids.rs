//! Local id generation: millisecond timestamps, bumped to stay monotonic.

use chrono::Utc;

use crate::domain::TodoId;

#[derive(Debug, Clone, Default)]
pub struct IdGenerator {
    last: u64,
}

impl IdGenerator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Every issued id is greater than `last`
    pub fn starting_after(last: u64) -> Self {
        Self { last }
    }

    pub fn next(&mut self) -> TodoId {
        let now = Utc::now().timestamp_millis().max(0) as u64;
        self.next_at(now)
    }

    pub fn next_at(&mut self, now_millis: u64) -> TodoId {
        let id = now_millis.max(self.last + 1);
        self.last = id;
        TodoId::Local(id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_same_millisecond_still_unique() {
        let mut ids = IdGenerator::new();
        assert_eq!(ids.next_at(1_000), TodoId::Local(1_000));
        assert_eq!(ids.next_at(1_000), TodoId::Local(1_001));
        assert_eq!(ids.next_at(999), TodoId::Local(1_002));
        assert_eq!(ids.next_at(5_000), TodoId::Local(5_000));
    }

    #[test]
    fn test_starting_after() {
        let mut ids = IdGenerator::starting_after(3);
        assert_eq!(ids.next_at(0), TodoId::Local(4));
    }
}
