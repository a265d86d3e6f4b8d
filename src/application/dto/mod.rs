/// Data Transfer Objects for application layer
///
/// DTOs carry configuration from adapters into the application layer,
/// keeping the domain layer isolated.
mod store_settings;

pub use store_settings::StoreSettings;
