//! Dispatcher that routes payloads to the first matching handler.

use super::core::HandlerRegistry;
use super::handler::PayloadHandler;
use crate::error::{DispatchError, Result};

/// Dispatcher performing first-match routing over a [`HandlerRegistry`].
///
/// Registration takes `&mut self` and dispatch takes `&self`, so once a
/// dispatcher is shared for processing its registry can no longer change.
pub struct Dispatcher {
    registry: HandlerRegistry,
}

impl Dispatcher {
    /// Create a dispatcher with no handlers.
    #[must_use]
    pub fn new() -> Self {
        Self::with_registry(HandlerRegistry::new())
    }

    /// Create a dispatcher around an already populated registry.
    #[must_use]
    pub fn with_registry(registry: HandlerRegistry) -> Self {
        Self { registry }
    }

    /// Append a handler; it has lower priority than every handler
    /// registered before it.
    pub fn register_handler(&mut self, handler: impl PayloadHandler + 'static) {
        self.registry.register(handler);
    }

    /// Route a payload to the first handler that recognizes it.
    ///
    /// The matched handler's result is returned unchanged. A failing
    /// handler is not followed by another attempt with a later handler.
    ///
    /// # Errors
    /// Returns `NoHandler` if no registered handler recognizes the payload,
    /// or whatever error the matched handler returns.
    pub fn process(&self, payload: &[u8]) -> Result<()> {
        match self.registry.find_handler(payload) {
            Some((index, handler)) => {
                tracing::debug!(index, "Handler matched payload");
                handler.handle(payload)
            }
            None => {
                tracing::debug!(
                    handlers = self.registry.len(),
                    "No handler matched payload"
                );
                Err(DispatchError::NoHandler)
            }
        }
    }
}

impl Default for Dispatcher {
    fn default() -> Self {
        Self::new()
    }
}
