//! Concrete rule modules.

pub mod chess;
