/// Crate-wide result type. Domain failures are carried as
/// [`DependencyError`](crate::shared::error::DependencyError) inside the `anyhow::Error`.
pub type Result<T> = std::result::Result<T, anyhow::Error>;
