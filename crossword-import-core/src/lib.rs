#![doc = "crossword-import-core: core logic library for crossword-import."]

//! This crate contains the data models and pipeline for importing a daily
//! crossword: fetching the puzzle definition, converting it to ipuz,
//! persisting it locally and uploading it to a hosting service.
//!
//! # Usage
//! The CLI crate wires [`fetch::NytClient`] and [`upload::SquaresClient`] into
//! [`import::import_puzzle`]. Tests substitute the mocks generated for the
//! traits in [`contract`].

pub mod config;
pub mod contract;
pub mod date;
pub mod error;
pub mod fetch;
pub mod import;
pub mod ipuz;
pub mod persist;
pub mod source;
pub mod transform;
pub mod upload;

pub use config::ImportConfig;
pub use date::PuzzleDate;
pub use error::ImportError;
