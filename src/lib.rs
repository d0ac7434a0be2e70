//! # Slosilo (Credential Administration)
//!
//! `slosilo` is a small administrative façade in front of an external
//! identity authority. It exposes two callable operations: updating a user's
//! password and generating a password-reset link for manual delivery. Durable
//! state (user records, credentials) lives exclusively at the authority; this
//! service holds nothing between requests.
//!
//! ## Caller identity
//!
//! The service runs behind an authenticating front proxy. The proxy verifies
//! the caller and forwards the verified identity as `x-auth-request-*`
//! headers; requests without a verified subject are rejected before any
//! validation or authority call happens.
//!
//! ## Authorization
//!
//! By default any authenticated caller may use the credential endpoints.
//! Operators can require a scope with `--admin-scope`; callers then need that
//! scope in `x-auth-request-groups`. There is no further role model.
//!
//! ## Error taxonomy
//!
//! `unauthenticated`, `invalid-argument`, `permission-denied` (only when a
//! scope is configured), and `internal`. Internal errors carry the identity
//! authority's message verbatim, which keeps failures debuggable but leaks
//! authority-internal text to callers.

pub mod api;
pub mod authority;
pub mod cli;

#[allow(clippy::doc_markdown, clippy::needless_raw_string_hashes)]
pub mod built_info {
    include!(concat!(env!("OUT_DIR"), "/built.rs"));
}

pub const GIT_COMMIT_HASH: &str = match built_info::GIT_COMMIT_HASH {
    Some(hash) => hash,
    None => "unknown",
};

pub const APP_USER_AGENT: &str = concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION"),);
