pub mod mock_upstream;

#[allow(unused_imports)]
pub use mock_upstream::*;
