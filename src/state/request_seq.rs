use std::cell::Cell;
use std::rc::Rc;

/// Monotonic generation counter shared by all in-flight route requests.
///
/// Every request takes the next generation before it starts; a result may
/// only be applied while its generation is still the newest one, so a slow
/// early response can never overwrite a later one. Clones share the
/// counter.
#[derive(Clone, Default)]
pub struct RequestSeq {
    current: Rc<Cell<u64>>,
}

impl RequestSeq {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers a new request and returns its generation.
    pub fn begin(&self) -> u64 {
        let next = self.current.get() + 1;
        self.current.set(next);
        next
    }

    /// True while `generation` belongs to the newest request started.
    pub fn is_current(&self, generation: u64) -> bool {
        self.current.get() == generation
    }
}
