//#![warn(missing_docs)]
#![forbid(unsafe_code)]
#![warn(clippy::perf)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![doc = include_str!("../README.md")]
#![cfg_attr(docs_rs, feature(doc_cfg))]

mod attributes;
mod status;
mod unwrap;

pub use attributes::{extract_attributes_from_object, AttributeSource};
#[cfg(feature = "http")]
#[cfg_attr(docs_rs, doc(cfg(feature = "http")))]
pub use status::http_status_code_to_status;
pub use status::http_status_to_status;
pub use unwrap::{unwrap, CallableSlot, PatchTarget};

/// tracing's target used by this library when it emits events
pub const TRACING_TARGET: &str = "otel::instrumentation";
