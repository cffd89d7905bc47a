//! Xplainer Core
//!
//! Core types and abstractions for the Xplainer repository Q&A client.
//!
//! This crate contains:
//! - Domain types: Core business entities (Repository, SearchResult)
//! - DTOs: Request bodies sent to the backend
//! - Validation: Input checks performed before any request leaves the client

pub mod domain;
pub mod dto;
pub mod validation;
