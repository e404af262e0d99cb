mod block;
mod utils;

pub use self::block::*;
pub use self::utils::{read_input, write_output, IoError};
