/// Ports module defining interfaces for hexagonal architecture
///
/// Inbound ports are what presentation code drives; outbound ports are the
/// channels and host capabilities the dependency store is wired to.
pub mod inbound;
pub mod outbound;
