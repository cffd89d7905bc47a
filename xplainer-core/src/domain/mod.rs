//! Core domain types
//!
//! This module contains the domain structures shared by the HTTP client and
//! the CLI. They mirror what the backend returns and carry no I/O of their own.

pub mod repository;
pub mod search;
