//! Cross-cutting helpers shared by the server runtime

pub mod shutdown;

pub use shutdown::{listen_for_shutdown_signals, ShutdownSignal};
