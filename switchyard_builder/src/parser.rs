mod handler;
mod interface;
mod printer;

pub use handler::ArgumentsHandler;
pub use interface::*;
