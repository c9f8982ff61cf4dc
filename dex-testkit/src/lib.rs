//! Test utilities for `dex-query`: a [`MockTransport`](crate::transport::MockTransport)
//! that serves scripted responses and records every call it receives, and
//! `dummy_*` fixtures for the entities it serves.

#![forbid(unsafe_code)]
#![cfg_attr(not(test), deny(clippy::unwrap_used))]
#![deny(
    trivial_casts,
    trivial_numeric_casts,
    unused_import_braces,
    rust_2018_idioms
)]

pub mod fixtures;
pub mod transport;
