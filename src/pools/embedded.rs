//! Embedded secret and guess pools
//!
//! Pools compiled into the binary at build time.

// Include generated pools from build script
include!(concat!(env!("OUT_DIR"), "/answers.rs"));
include!(concat!(env!("OUT_DIR"), "/allowed.rs"));
include!(concat!(env!("OUT_DIR"), "/primes.rs"));
