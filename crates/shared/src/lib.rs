//! Folgen Shared - Query protocol types
//!
//! This crate contains the wire types exchanged over the query endpoint:
//! - `QueryRequest` / `QueryBatch` - what a client asks for
//! - `QueryResponse` / `ResponseResult` - what the engine answers
//! - `QueryDescriptor` - the introspectable list of named queries
//!
//! # Design Principles
//!
//! 1. **Minimal dependencies** - Only serde, serde_json and the domain crate
//! 2. **No business logic** - Pure data types and serialization

pub mod requests;
pub mod responses;
pub mod schema;

pub use requests::{GlossaryFilter, QueryBatch, QueryRequest};
pub use responses::{BatchResponse, ErrorCode, QueryResponse, ResponseResult};
pub use schema::{ArgumentDescriptor, QueryDescriptor};
