pub mod error;
pub mod transparency_service;
