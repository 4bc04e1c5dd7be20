//! Core data models for the inventory service.
//!
//! These entities represent inventory records and downloadable files.
//! `Item` maps to a DynamoDB attribute map and serializes naturally as
//! JSON via `serde`; `FileObject` carries blob bytes plus metadata.

pub mod file;
pub mod item;
