//! RFC 6350 (vCard 4.0) wire serialization.
//!
//! The engine turns typed property values and their parameters into
//! folded, escaped content lines. See [`rfc::vcard`] for the entry points.

pub mod error;
pub mod rfc;
