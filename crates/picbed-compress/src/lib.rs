//! Picbed Compression Library
//!
//! Wraps the tinify (TinyPNG) remote compression API behind the
//! [`Compressor`] trait. The client is stateless: the API key is a call
//! parameter, so concurrent pipeline invocations with different keys never
//! race on shared client state.

pub mod tinify;

pub use tinify::{CompressionError, Compressor, TinifyClient};
