/// Inbound ports (Driving ports) - Application interfaces
///
/// These ports define what presentation code (the list controller, the CLI)
/// may ask of the application core.
pub mod dependency_store_port;

pub use dependency_store_port::{DependencyStorePort, UpdateOutcome};
