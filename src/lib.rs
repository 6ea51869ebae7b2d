/*!
This crate defines fixed-capacity string buffers: value types that hold text
inside an inline array of compile-time size, never allocate, and keep the
stored text zero-terminated at all times so it interoperates with
null-terminated string conventions.

For more details, see the [additional documentation](doc/index.html).

# Quick Reference

| Need | Rust Type |
| ---: | --- |
| UTF-8 text in at most `N - 1` bytes, plus terminator | `Utf8String<N>` |
| Fixed-width wide text in at most `N - 1` characters, plus terminator | `WideString<N>` |
| The generic form, parameterised by encoding | `FixedString<E, N>` |
| Raw inline unit storage with no invariants | `buffer::Buffer<E, N>` |

Every mutating operation re-establishes the terminator before returning.
Input that does not fit is silently discarded, never split mid-character;
operations that can fail for other reasons say so through their return
value.  Nothing here allocates, blocks, or panics on data; the only panics
are debug-build checks on caller contract violations.
*/
extern crate libc;

pub mod buffer;
#[doc(hidden)]
pub mod doc;
pub mod encoding;
pub mod string;

mod format;
mod util;

use encoding as e;

pub use encoding::{Encoding, Unit, Utf8, Wide};
pub use string::{CapacityError, FixedString};

/**
A fixed-capacity string of UTF-8 bytes: up to `N - 1` content bytes plus the
zero terminator.
*/
pub type Utf8String<const N: usize> = FixedString<e::Utf8, N>;

/**
A fixed-capacity string of whole characters: up to `N - 1` characters plus
the zero terminator.  Truncation can never split a character.
*/
pub type WideString<const N: usize> = FixedString<e::Wide, N>;
