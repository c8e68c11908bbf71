pub mod description;
mod router;

pub use router::router;
