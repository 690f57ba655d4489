mod request_logger;
mod validate_id;

pub use request_logger::*;
pub use validate_id::*;
