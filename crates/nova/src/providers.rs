pub mod base;
pub mod bedrock;
pub mod configs;
pub mod utils;

#[cfg(test)]
pub mod mock;
