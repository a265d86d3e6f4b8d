/// Adapters layer - Infrastructure implementations
///
/// This layer contains concrete implementations of the ports: the npm
/// channel, the terminal-facing console adapters and output formatting.
pub mod outbound;
