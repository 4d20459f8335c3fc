pub mod hello;
pub mod resolve;
pub mod stream;
pub mod tree;
