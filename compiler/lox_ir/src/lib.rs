//! Lox IR - the token model shared by the scanner and later stages.
//!
//! This crate contains:
//! - Spans for source locations
//! - `TokenKind`, `Literal`, `Token` and `TokenList` for lexer output
//! - The reserved-word table consulted by the scanner
//!
//! Every type here is a plain value: tokens own their lexeme and literal,
//! so a `TokenList` can outlive the source text it was scanned from.

/// Compile-time assertion that a type has a specific size.
///
/// Used to prevent accidental size regressions in frequently-allocated types.
#[macro_export]
macro_rules! static_assert_size {
    ($ty:ty, $size:expr) => {
        const _: [(); $size] = [(); ::std::mem::size_of::<$ty>()];
    };
}

pub mod keywords;
mod span;
mod token;

pub use span::Span;
pub use token::{Literal, Token, TokenKind, TokenList};
