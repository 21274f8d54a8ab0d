//! # safeint
//!
//! Safe Rust implementations of the JavaScript safe-integer primitives.
//!
//! A *safe integer* is an integer exactly representable in an IEEE-754
//! double: magnitude at most `2^53 - 1`. This crate provides the refined
//! [`SafeInteger`] type together with the four conversion operations of the
//! source semantics, quirks preserved rather than redesigned:
//!
//! - [`is_safe_integer`] — predicate over a dynamically-typed [`Value`],
//!   no conversion (`Number.isSafeInteger`).
//! - [`as_safe_integer`] — the same check, returning the validated integer.
//! - [`parse_safe_integer`] — longest-valid-prefix string parsing with
//!   optional radix (`Number.parseInt`, including `0x` detection and the
//!   trailing-garbage tolerance).
//! - [`to_safe_integer`] — best-effort coercion across value categories:
//!   rounding for finite numbers, parsing for strings, the `valueOf`
//!   protocol for objects.
//!
//! Every failure resolves to `None`; no operation panics, except that a
//! panic raised by a caller-supplied `valueOf` callable propagates.

#![deny(unsafe_code)]

pub mod convert;
pub mod integer;
pub mod parse;
pub mod value;

pub use convert::{as_safe_integer, is_safe_integer, round_half_up, to_safe_integer};
pub use integer::{SafeInteger, SafeIntegerError};
pub use parse::parse_safe_integer;
pub use value::{NativeFn, Object, Value};
