pub mod config;
pub mod feedback;
pub mod layout;
pub mod scheduler;
pub mod session;
pub mod video;
