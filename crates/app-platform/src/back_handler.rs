//! Hardware back-navigation handling
//!
//! Screens register listeners while mounted. When the platform back signal
//! arrives, listeners are asked newest-first; the first one that returns
//! `true` consumes the signal. If nobody consumes it, the default handler
//! runs (typically popping the navigator or leaving the app).
//!
//! A [`BackSubscription`] deregisters its listener when removed or dropped,
//! so a screen that forgets to clean up cannot leak a handler past its own
//! lifetime.

use parking_lot::Mutex;
use std::fmt;
use std::sync::{Arc, Weak};

type Listener = Box<dyn FnMut() -> bool + Send>;

#[derive(Default)]
struct Registry {
    next_id: u64,
    listeners: Vec<(u64, Listener)>,
    default_invocations: u64,
}

/// Registry of back-navigation listeners
///
/// Cloning shares the same registry.
///
/// Listeners run while the registry is locked and must not call back into
/// it; post work to the owning context instead.
#[derive(Clone, Default)]
pub struct BackHandlerRegistry {
    inner: Arc<Mutex<Registry>>,
}

impl fmt::Debug for BackHandlerRegistry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("BackHandlerRegistry")
            .field("listeners", &self.listener_count())
            .finish()
    }
}

impl BackHandlerRegistry {
    /// Create an empty registry
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a listener; it stays active until the subscription goes away
    pub fn add_listener<F>(&self, listener: F) -> BackSubscription
    where
        F: FnMut() -> bool + Send + 'static,
    {
        let mut registry = self.inner.lock();
        registry.next_id += 1;
        let id = registry.next_id;
        registry.listeners.push((id, Box::new(listener)));
        tracing::debug!(id, "Back listener registered");

        BackSubscription {
            id,
            registry: Arc::downgrade(&self.inner),
        }
    }

    /// Deliver the back signal; returns whether a listener consumed it
    pub fn dispatch(&self) -> bool {
        let mut registry = self.inner.lock();
        for (id, listener) in registry.listeners.iter_mut().rev() {
            if listener() {
                tracing::debug!(id = *id, "Back signal consumed");
                return true;
            }
        }
        registry.default_invocations += 1;
        tracing::debug!("Back signal fell through to default handler");
        false
    }

    /// Number of registered listeners
    pub fn listener_count(&self) -> usize {
        self.inner.lock().listeners.len()
    }

    /// How many signals reached the default handler
    pub fn default_invocations(&self) -> u64 {
        self.inner.lock().default_invocations
    }
}

/// Handle to a registered listener
#[must_use = "dropping the subscription removes the listener"]
pub struct BackSubscription {
    id: u64,
    registry: Weak<Mutex<Registry>>,
}

impl fmt::Debug for BackSubscription {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("BackSubscription")
            .field("id", &self.id)
            .finish()
    }
}

impl BackSubscription {
    /// Remove the listener now
    pub fn remove(self) {
        drop(self);
    }
}

impl Drop for BackSubscription {
    fn drop(&mut self) {
        if let Some(registry) = self.registry.upgrade() {
            registry
                .lock()
                .listeners
                .retain(|(id, _)| *id != self.id);
            tracing::debug!(id = self.id, "Back listener removed");
        }
    }
}
