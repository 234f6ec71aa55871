use super::Handler;
use std::sync::Arc;

/// Turns one handler into another, usually by running code around `next`.
pub trait Middleware: Send + Sync {
    fn wrap(&self, next: Arc<dyn Handler>) -> Arc<dyn Handler>;
}

/// An ordered stack of middleware applied to a base handler.
///
/// The first middleware added is the outermost: it sees the request first
/// and the completed response last.
#[derive(Default)]
pub struct HandlerChain {
    middleware: Vec<Arc<dyn Middleware>>,
}

impl HandlerChain {
    pub fn new() -> Self {
        Self {
            middleware: Vec::new(),
        }
    }

    pub fn with(mut self, middleware: impl Middleware + 'static) -> Self {
        self.middleware.push(Arc::new(middleware));
        self
    }

    pub fn with_arc(mut self, middleware: Arc<dyn Middleware>) -> Self {
        self.middleware.push(middleware);
        self
    }

    pub fn len(&self) -> usize {
        self.middleware.len()
    }

    pub fn is_empty(&self) -> bool {
        self.middleware.is_empty()
    }

    pub fn build(&self, base: Arc<dyn Handler>) -> Arc<dyn Handler> {
        self.middleware
            .iter()
            .rev()
            .fold(base, |next, mw| mw.wrap(next))
    }
}
