pub mod kv;
pub mod log;
pub mod maintenance;
pub mod migrate;
pub mod pool;
pub mod stats;
