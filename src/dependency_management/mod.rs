/// Dependency management core - domain model and pure services
///
/// Nothing in this module talks to the outside world; the channels are
/// reached through the ports in [`crate::ports`].
pub mod domain;
pub mod services;
