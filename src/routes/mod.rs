pub mod bank;
pub mod nav;
pub mod pool;
