//! Parity checking for WMO Core Metadata Profile 2 (WCMP2) records across
//! Global Discovery Catalogues.
//!
//! The working directory is expected to hold one or more directories named
//! `<centre>-global-discovery-catalogue`. The catalogue whose name starts with
//! the caller-supplied centre id is the implementation under test; every other
//! catalogue is a peer. Each record of the implementation under test is
//! normalized, run through the WCMP2 conformance suite, and structurally
//! diffed against the peer record sharing the same `id`.

pub mod catalogue;
pub mod cli;
pub mod config;
pub mod diff;
pub mod ets;
pub mod parity;
pub mod record;
