//! Ordered registry of payload handlers.

use super::handler::PayloadHandler;

/// Registry holding handlers in registration order.
///
/// Registration order is match priority: the earliest registered handler
/// that recognizes a payload wins. Entries are never reordered, removed or
/// deduplicated.
pub struct HandlerRegistry {
    handlers: Vec<Box<dyn PayloadHandler>>,
}

impl HandlerRegistry {
    /// Create a new empty registry.
    #[must_use]
    pub fn new() -> Self {
        Self {
            handlers: Vec::new(),
        }
    }

    /// Append a handler to the end of the registry.
    pub fn register(&mut self, handler: impl PayloadHandler + 'static) {
        self.handlers.push(Box::new(handler));
    }

    /// Find the first handler that recognizes the payload.
    ///
    /// Returns the handler together with its registration index. Handlers
    /// after the first match are not consulted.
    pub fn find_handler(&self, payload: &[u8]) -> Option<(usize, &dyn PayloadHandler)> {
        self.handlers
            .iter()
            .enumerate()
            .find(|(_, handler)| handler.can_handle(payload))
            .map(|(index, handler)| (index, handler.as_ref()))
    }

    pub(crate) fn len(&self) -> usize {
        self.handlers.len()
    }
}

impl Default for HandlerRegistry {
    fn default() -> Self {
        Self::new()
    }
}
