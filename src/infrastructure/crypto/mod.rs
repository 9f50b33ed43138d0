//! Cryptography utilities

pub mod jwt;
pub mod password;
