//! # ssync-scan
//!
//! Reduces a directory tree to a [`Manifest`](ssync_core::Manifest).
//!
//! Call [`build_manifest`] with an optional [`ChecksumProvider`]; use
//! [`Md5Sum`] for manifests compatible with `md5sum` output or [`Sha256`] to
//! hash in-process.

pub mod builder;
pub mod checksum;
pub mod error;
pub mod walk;

pub use builder::{build_manifest, BuildResult};
pub use checksum::{provider_for, ChecksumProvider, Md5Sum, Sha256};
pub use error::ScanError;
