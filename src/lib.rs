//! Speech Comparator - statistical interpretation of speech-recognition scores
//!
//! This library decides whether two word-recognition scores differ by more
//! than chance (Thornton & Raffin binomial model) and whether a PB-max score
//! falls below the normative limit for a listener's pure-tone average
//! (Dubno et al. model). Every computation is a pure function of its inputs.

pub mod analysis;
pub mod cli;
pub mod config;
pub mod dubno;
pub mod json_output;
pub mod report;
pub mod score;
pub mod thornton;
