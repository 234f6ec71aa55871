mod chain;
mod error;

pub use chain::*;
pub use error::*;

use crate::ctx::{RequestCtx, ResponseCtx};
use async_trait::async_trait;

/// A request handler: the thing the access logger wraps.
///
/// Handlers write their reply into `res`. Returning an error leaves the
/// reply to whoever observes it first (see [`HandlerError::write_to`]).
#[async_trait]
pub trait Handler: Send + Sync {
    async fn handle(&self, req: &RequestCtx, res: &mut ResponseCtx) -> Result<(), HandlerError>;
}
