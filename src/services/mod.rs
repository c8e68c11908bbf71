pub mod context;
pub mod description_service;

pub use context::ServiceContext;
