//! Core types shared by the scrub crates
//!
//! This crate contains:
//! - The error taxonomy (decode / encode / unsupported modality)
//! - Modality (which kind of payload a provider can scrub)

pub mod error;
pub mod modality;

pub use error::{Error, Result};
pub use modality::Modality;
