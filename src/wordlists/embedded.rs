//! Embedded dictionary
//!
//! Generated at build time from `data/dictionary.txt`.

include!(concat!(env!("OUT_DIR"), "/dictionary.rs"));
