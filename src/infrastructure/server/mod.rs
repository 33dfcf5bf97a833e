//! Process lifecycle support

mod shutdown;

pub use shutdown::{ShutdownCoordinator, ShutdownSignal};
