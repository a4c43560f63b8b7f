#![forbid(unsafe_code)]

mod codec;

pub use codec::{init_tracing, read_grid, write_grid};
