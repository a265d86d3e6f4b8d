/// Application layer - dependency store, list controller and DTOs
///
/// This layer orchestrates the domain services and reaches infrastructure
/// only through ports.
pub mod controllers;
pub mod dto;
pub mod use_cases;
