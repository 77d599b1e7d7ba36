pub mod request_seq;
pub mod selection;

pub use request_seq::RequestSeq;
pub use selection::{MarkerSlot, SelectionState};
