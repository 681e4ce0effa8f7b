use std::panic::{self, AssertUnwindSafe};

/// A tick callback
pub type Subscriber = Box<dyn FnMut() + Send + 'static>;

/// Ordered, append-only list of tick callbacks
#[derive(Default)]
pub struct SubscriberList {
    callbacks: Vec<Subscriber>,
}

impl SubscriberList {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, callback: Subscriber) {
        self.callbacks.push(callback);
    }

    pub fn len(&self) -> usize {
        self.callbacks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.callbacks.is_empty()
    }

    /// Invoke every callback in registration order.
    ///
    /// A panicking callback ends the pass: later callbacks do not run for this
    /// tick. Returns the index of the callback that panicked.
    pub fn publish(&mut self) -> Result<(), usize> {
        for (index, callback) in self.callbacks.iter_mut().enumerate() {
            if panic::catch_unwind(AssertUnwindSafe(|| callback())).is_err() {
                return Err(index);
            }
        }
        Ok(())
    }
}

impl std::fmt::Debug for SubscriberList {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SubscriberList")
            .field("len", &self.callbacks.len())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::{Arc, Mutex};

    fn recorder(log: &Arc<Mutex<Vec<u32>>>, id: u32) -> Subscriber {
        let log = Arc::clone(log);
        Box::new(move || log.lock().unwrap().push(id))
    }

    #[test]
    fn test_publish_in_registration_order() {
        let log = Arc::new(Mutex::new(Vec::new()));
        let mut list = SubscriberList::new();
        list.push(recorder(&log, 1));
        list.push(recorder(&log, 2));
        list.push(recorder(&log, 3));

        assert!(list.publish().is_ok());
        assert!(list.publish().is_ok());
        assert_eq!(*log.lock().unwrap(), vec![1, 2, 3, 1, 2, 3]);
    }

    #[test]
    fn test_panic_stops_remaining_callbacks() {
        let log = Arc::new(Mutex::new(Vec::new()));
        let mut list = SubscriberList::new();
        list.push(recorder(&log, 1));
        list.push(Box::new(|| panic!("subscriber failure")));
        list.push(recorder(&log, 3));

        assert_eq!(list.publish(), Err(1));
        assert_eq!(*log.lock().unwrap(), vec![1]);
    }

    #[test]
    fn test_empty_list() {
        let mut list = SubscriberList::new();
        assert!(list.is_empty());
        assert!(list.publish().is_ok());
    }
}
