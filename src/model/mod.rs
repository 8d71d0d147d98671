//! Core data model types: part headers, the resource map, and the pipeline state.

pub mod conversion;
pub mod part;
pub mod resource;
