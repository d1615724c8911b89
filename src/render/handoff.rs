use crate::render::backend::TargetId;
use std::sync::{Mutex, MutexGuard};

/// Batch moved through the slot: `(render target, payload)` pairs in
/// viewport order.
pub type Batch<T> = Vec<(TargetId, T)>;

/// Single-capacity, overwrite-on-publish mailbox carrying one frame's
/// batch across the logic/render thread boundary.
///
/// The slot holds zero or one pending batch. [`publish`](Self::publish)
/// swaps the new batch in and drops whatever was there: latest frame
/// wins, with no queueing and no backpressure signal beyond discarding
/// stale data. [`take`](Self::take) swaps the slot to empty and hands
/// full ownership of the previous batch to the caller.
///
/// The critical section covers only the pointer swap; payloads are
/// dropped after the guard is released.
#[derive(Debug, Default)]
pub struct HandoffSlot<T> {
    pending: Mutex<Option<Batch<T>>>,
}

impl<T> HandoffSlot<T> {
    pub fn new() -> Self {
        Self {
            pending: Mutex::new(None),
        }
    }

    /// Publishes `batch`, displacing (and dropping) any unconsumed batch.
    pub fn publish(&self, batch: Batch<T>) {
        let displaced = self.lock().replace(batch);
        drop(displaced);
    }

    /// Takes the pending batch; empty when nothing was published since the
    /// last take. Never blocks beyond the swap, never errors.
    pub fn take(&self) -> Batch<T> {
        self.lock().take().unwrap_or_default()
    }

    /// True when a batch is waiting to be taken.
    pub fn has_pending(&self) -> bool {
        self.lock().is_some()
    }

    fn lock(&self) -> MutexGuard<'_, Option<Batch<T>>> {
        // slot state is a plain Option swap, safe to keep using after a
        // panicked holder
        match self.pending.lock() {
            Ok(guard) => guard,
            Err(poisoned) => poisoned.into_inner(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Arc;

    /// Payload that records how many times it has been dropped.
    struct Counted(Arc<AtomicUsize>);

    impl Drop for Counted {
        fn drop(&mut self) {
            self.0.fetch_add(1, Ordering::SeqCst);
        }
    }

    fn target(raw: u64) -> TargetId {
        TargetId::from_raw(raw)
    }

    #[test]
    fn take_on_empty_slot_is_empty_and_does_not_block() {
        let slot: HandoffSlot<u32> = HandoffSlot::new();
        assert!(slot.take().is_empty());
        assert!(!slot.has_pending());
    }

    #[test]
    fn only_latest_publish_is_delivered() {
        let slot = HandoffSlot::new();
        slot.publish(vec![(target(1), 'a')]);
        slot.publish(vec![(target(2), 'b')]);
        slot.publish(vec![(target(3), 'c')]);

        let batch = slot.take();
        assert_eq!(batch.len(), 1);
        assert_eq!(batch[0].0, target(3));
        assert_eq!(batch[0].1, 'c');

        // consumed: a second take before any publish yields nothing
        assert!(slot.take().is_empty());
    }

    #[test]
    fn overwritten_batches_are_dropped_exactly_once() {
        let drops = Arc::new(AtomicUsize::new(0));
        let slot = HandoffSlot::new();

        for i in 0..4 {
            slot.publish(vec![(target(i), Counted(drops.clone()))]);
        }
        // three displaced batches, one payload each
        assert_eq!(drops.load(Ordering::SeqCst), 3);

        let batch = slot.take();
        assert_eq!(batch.len(), 1);
        drop(batch);
        assert_eq!(drops.load(Ordering::SeqCst), 4);
    }

    #[test]
    fn ownership_transfers_across_threads() {
        let slot = Arc::new(HandoffSlot::new());
        slot.publish(vec![(target(9), String::from("frame"))]);

        let consumer = {
            let slot = slot.clone();
            std::thread::spawn(move || slot.take())
        };
        let batch = consumer.join().expect("thread joined");
        assert_eq!(batch.len(), 1);
        assert_eq!(batch[0].1, "frame");
        assert!(!slot.has_pending());
    }
}
