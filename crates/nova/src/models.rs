//! These models represent the objects passed between a caller and the Nova provider
//!
//! Two formats are involved:
//! - anthropic messages/tools, which callers build and receive back
//! - nova messages/tools, sent to and received from Bedrock `InvokeModel`
//!
//! The structs here follow the anthropic JSON shape so callers can serialize them directly.
//! Conversion to and from the nova shape lives in `providers::utils`.
pub mod content;
pub mod message;
pub mod role;
pub mod tool;
