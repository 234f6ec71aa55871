pub mod app;
pub mod tracing;

pub use app::{TestApp, fixed_clock, fixture_path};
pub use tracing::{CapturedEvent, init_test_tracing};
