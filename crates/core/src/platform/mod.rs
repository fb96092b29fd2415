pub mod traits;

// Default implementations backed by the host system
pub mod system;
