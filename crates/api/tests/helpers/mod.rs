pub mod mock_reader;

#[allow(unused_imports)]
pub use mock_reader::*;
