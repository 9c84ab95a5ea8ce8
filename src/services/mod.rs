pub mod contact_service;
pub mod health_service;
