//! Domains module containing business logic organized by bounded contexts.
//!
//! The only domain here is `tools`: the capabilities a server exposes and
//! the machinery that registers and invokes them.

pub mod tools;
