// Core monitoring logic, independent of the terminal

pub mod config;
pub mod monitor;
pub mod probe;
pub mod resize;
pub mod resolver;
pub mod state;

pub use config::MonitorConfig;
pub use monitor::{Flow, Monitor, RedrawMode, Screen, WaitEvent, Waiter};
pub use probe::{PingProbe, Probe, ProbeOutcome};
pub use resize::ResizeSignal;
pub use resolver::{resolve_target, AddressFamily, Target};
pub use state::{LinkStatus, MonitorState};
