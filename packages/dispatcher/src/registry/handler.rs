//! Payload handler trait definition.

use crate::error::Result;

/// Trait for payload handlers.
///
/// A handler recognizes one payload shape and processes it. Recognition and
/// processing are separate so the dispatcher can probe handlers one after
/// another without side effects, and only commit to the first match.
pub trait PayloadHandler: Send + Sync {
    /// Check if this handler recognizes the payload.
    ///
    /// Must not have side effects. Malformed input is a non-match: this
    /// method never fails.
    fn can_handle(&self, payload: &[u8]) -> bool;

    /// Decode the payload and perform the handler's action.
    ///
    /// # Errors
    /// Returns the underlying decode error when the payload cannot be
    /// decoded into the handler's record.
    fn handle(&self, payload: &[u8]) -> Result<()>;
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::DispatchError;

    struct PrefixHandler;

    impl PayloadHandler for PrefixHandler {
        fn can_handle(&self, payload: &[u8]) -> bool {
            payload.starts_with(b"<test")
        }

        fn handle(&self, payload: &[u8]) -> Result<()> {
            std::str::from_utf8(payload)?;
            Ok(())
        }
    }

    #[test]
    fn test_handler_trait_object() {
        let handler: Box<dyn PayloadHandler> = Box::new(PrefixHandler);

        assert!(handler.can_handle(b"<test/>"));
        assert!(!handler.can_handle(b"<other/>"));
        assert!(handler.handle(b"<test/>").is_ok());
    }

    #[test]
    fn test_handler_error_propagates() {
        let handler = PrefixHandler;
        let payload: Vec<u8> = vec![b'<', 0xff];

        let err = handler.handle(&payload).unwrap_err();
        assert!(matches!(err, DispatchError::InvalidEncoding(_)));
    }
}
