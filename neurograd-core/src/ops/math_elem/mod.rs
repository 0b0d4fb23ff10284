pub mod log;

pub use log::log_op;
