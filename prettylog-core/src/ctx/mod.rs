mod request_ctx;
mod response_ctx;
#[cfg(test)]
mod tests;

pub use request_ctx::*;
pub use response_ctx::*;
