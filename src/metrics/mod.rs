pub mod session;

pub use session::GameMetrics;
