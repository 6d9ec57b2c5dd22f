//! TimerQueue - deferred events for a single-threaded frame loop
//!
//! Owners schedule an event `delay_ms` after "now" and later drain whatever
//! has come due. Events with equal due time fire in scheduling order.
//! There is no cancellation: once scheduled, an event will fire.

struct Entry<E> {
    due_ms: f64,
    seq: u64,
    event: E,
}

pub struct TimerQueue<E> {
    entries: Vec<Entry<E>>,
    next_seq: u64,
}

impl<E> TimerQueue<E> {
    pub fn new() -> Self {
        Self {
            entries: Vec::new(),
            next_seq: 0,
        }
    }

    pub fn schedule(&mut self, now_ms: f64, delay_ms: f64, event: E) {
        let seq = self.next_seq;
        self.next_seq += 1;
        self.entries.push(Entry {
            due_ms: now_ms + delay_ms.max(0.0),
            seq,
            event,
        });
    }

    /// Remove and return the earliest event due at or before `now_ms`.
    pub fn pop_due(&mut self, now_ms: f64) -> Option<E> {
        let idx = self
            .entries
            .iter()
            .enumerate()
            .filter(|(_, e)| e.due_ms <= now_ms)
            .min_by(|(_, a), (_, b)| {
                a.due_ms
                    .total_cmp(&b.due_ms)
                    .then(a.seq.cmp(&b.seq))
            })
            .map(|(i, _)| i)?;
        Some(self.entries.remove(idx).event)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Due time of the next pending event, if any.
    pub fn next_due(&self) -> Option<f64> {
        self.entries
            .iter()
            .map(|e| e.due_ms)
            .min_by(|a, b| a.total_cmp(b))
    }
}

impl<E> Default for TimerQueue<E> {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn events_wait_until_due() {
        let mut q = TimerQueue::new();
        q.schedule(0.0, 1000.0, "burst");
        assert_eq!(q.pop_due(999.0), None);
        assert_eq!(q.pop_due(1000.0), Some("burst"));
        assert!(q.is_empty());
    }

    #[test]
    fn ties_fire_in_scheduling_order() {
        let mut q = TimerQueue::new();
        q.schedule(0.0, 50.0, 1);
        q.schedule(10.0, 40.0, 2);
        q.schedule(0.0, 20.0, 0);
        assert_eq!(q.next_due(), Some(20.0));
        assert_eq!(q.pop_due(100.0), Some(0));
        assert_eq!(q.pop_due(100.0), Some(1));
        assert_eq!(q.pop_due(100.0), Some(2));
        assert_eq!(q.pop_due(100.0), None);
    }
}
