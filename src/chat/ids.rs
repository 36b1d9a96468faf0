use chrono::Utc;

use crate::common::MessageId;

/// Hands out message ids derived from the wall clock in milliseconds.
/// Ids are strictly increasing even when the clock stalls or steps back.
#[derive(Debug, Clone)]
pub struct IdSource {
    last: u64,
}

impl IdSource {
    /// Start issuing ids above `last`, usually the highest fixture id.
    pub fn after(last: Option<MessageId>) -> Self {
        Self {
            last: last.map_or(0, |MessageId(id)| id),
        }
    }

    pub fn next_id(&mut self) -> MessageId {
        let now = u64::try_from(Utc::now().timestamp_millis()).unwrap_or_default();
        self.last = now.max(self.last + 1);
        MessageId(self.last)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ids_are_strictly_increasing() {
        let mut ids = IdSource::after(Some(MessageId(3)));
        let mut previous = MessageId(3);
        for _ in 0..1000 {
            let id = ids.next_id();
            assert!(id > previous, "{id:?} should follow {previous:?}");
            previous = id;
        }
    }

    #[test]
    fn ids_stay_above_a_future_seed() {
        let far = MessageId(u64::MAX / 2);
        let mut ids = IdSource::after(Some(far));
        assert_eq!(ids.next_id(), MessageId(far.0 + 1));
    }
}
