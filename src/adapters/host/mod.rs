//! Host console adapter

pub mod connection;
pub mod console;

pub use connection::{HostConnection, Toast, ToastVariant};
pub use console::ConsoleHost;
