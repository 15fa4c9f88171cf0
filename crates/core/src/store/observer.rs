//! Save notifications.
//!
//! The surrounding UI pushes live updates by registering a [`SaveObserver`].
//! Observers are called synchronously, right after the document has been
//! written, with the state that was just persisted. They cannot fail the
//! save and cannot reach back into the registry while it is borrowed.

use pr_protocol::RegistryState;
use std::sync::mpsc::Sender;

/// Receives the full registry state after every successful save.
pub trait SaveObserver {
    fn on_save(&mut self, state: &RegistryState);
}

impl<F> SaveObserver for F
where
    F: FnMut(&RegistryState),
{
    fn on_save(&mut self, state: &RegistryState) {
        self(state)
    }
}

/// Forwards a snapshot to a channel. A dropped receiver is ignored.
impl SaveObserver for Sender<RegistryState> {
    fn on_save(&mut self, state: &RegistryState) {
        let _ = self.send(state.clone());
    }
}
