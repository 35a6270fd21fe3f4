//! Core domain types and storage contracts for the shelf service.
//!
//! This crate is deliberately free of any AWS dependency: the object codec
//! and repository operate on a neutral attribute-map representation, so the
//! binary crate can plug in either the DynamoDB store or an in-memory fake.

pub mod clock;
pub mod object;
pub mod storage;
