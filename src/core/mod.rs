pub mod backup;
pub mod clock;
pub mod duration;
pub mod export;
pub mod log;
pub mod notify;
pub mod render;
pub mod tracker;
