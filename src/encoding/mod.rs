/*!
Encoding types and traits.

An encoding decides what a single stored unit is, and how Rust string slices
are lowered into units.  Encodings are marker types: they are never
instantiated, and only exist as type parameters.
*/
use std::fmt;
use std::ptr;
use std::str;

use libc::c_char;

/**
A single storage unit of some encoding.

The zero value of a unit is reserved as the terminator; it never appears
inside the logical content of a string.
*/
pub trait Unit: Copy + Ord + ::std::hash::Hash + UnitDebug {
    /**
    Returns the terminator value for this unit type.
    */
    fn zero() -> Self;

    /**
    Returns `true` if this unit is the terminator value.
    */
    fn is_zero(&self) -> bool;

    /**
    Returns `true` if this unit lies in the 7-bit ASCII range.
    */
    fn is_ascii(&self) -> bool;

    /**
    Converts an ASCII byte into a unit.  The byte must be below `0x80`.
    */
    fn from_ascii(byte: u8) -> Self;
}

/**
Debug formatting for individual units.

Used by the `Debug` implementations of the string types, which print units
one at a time between the encoding's debug prefix and a closing quote.
*/
pub trait UnitDebug {
    fn fmt(&self, fmt: &mut fmt::Formatter) -> fmt::Result;
}

/**
This trait is used to abstract over the width and layout of stored text.

An encoding supplies the unit type, the matching foreign pointer unit, and
the handful of operations whose behaviour depends on unit width: lowering a
`&str` into units with a capacity bound, and repairing a truncation point so
that it does not fall inside a multi-unit character.

In practice, this is implemented by a marker type which is never actually
instantiated anywhere.
*/
pub trait Encoding {
    /**
    The unit type stored in buffers of this encoding.
    */
    type Unit: Unit;

    /**
    The unit type exposed through raw pointers.

    This type should match the most common FFI representation for text of
    this encoding.  It must be binary-compatible with `Unit`.
    */
    type FfiUnit;

    /**
    Iterator over the units of a `&str` lowered into this encoding.
    */
    type StrUnits<'a>: Iterator<Item = Self::Unit>;

    /**
    Returns a string which can be used to uniquely identify this encoding in
    debug output.
    */
    fn debug_prefix() -> &'static str;

    /**
    Returns the units of `s` in this encoding, in order, without copying.
    */
    fn str_units<'a>(s: &'a str) -> Self::StrUnits<'a>;

    /**
    Copies as much of `s` into `dest` as fits, never splitting a character
    across the capacity bound.

    Returns the number of units written, and whether all of `s` was copied.
    */
    fn copy_str(dest: &mut [Self::Unit], s: &str) -> (usize, bool);

    /**
    Copies all of `s` to `dest` without any capacity check, and returns the
    number of units written.

    # Safety

    `dest` must point to enough writable units to hold all of `s`.
    */
    unsafe fn copy_str_unchecked(dest: *mut Self::Unit, s: &str) -> usize;

    /**
    Returns the length of the longest prefix of `units` that does not end in
    a partial multi-unit character.

    This repairs the damage done by a raw, unit-level truncation.  It does
    not validate `units` as a whole.
    */
    fn crop_incomplete(units: &[Self::Unit]) -> usize;
}

/**
Byte-oriented UTF-8 text.  One character occupies one to four units, so
unit-level truncation can split a character; `crop_incomplete` undoes this.
*/
pub enum Utf8 {}

impl Encoding for Utf8 {
    type Unit = u8;
    type FfiUnit = c_char;
    type StrUnits<'a> = str::Bytes<'a>;

    fn debug_prefix() -> &'static str {
        "Utf8"
    }

    fn str_units<'a>(s: &'a str) -> str::Bytes<'a> {
        s.bytes()
    }

    fn copy_str(dest: &mut [u8], s: &str) -> (usize, bool) {
        let bytes = s.as_bytes();
        if bytes.len() <= dest.len() {
            dest[..bytes.len()].copy_from_slice(bytes);
            return (bytes.len(), true);
        }

        let mut n = dest.len();
        while n > 0 && !s.is_char_boundary(n) {
            n -= 1;
        }
        dest[..n].copy_from_slice(&bytes[..n]);
        (n, false)
    }

    unsafe fn copy_str_unchecked(dest: *mut u8, s: &str) -> usize {
        ptr::copy_nonoverlapping(s.as_ptr(), dest, s.len());
        s.len()
    }

    fn crop_incomplete(units: &[u8]) -> usize {
        let len = units.len();
        let mut i = len;

        // A sequence is at most four bytes; look back no further than that.
        while i > 0 && len - i < 4 {
            i -= 1;
            let lead = units[i];
            if lead & 0xc0 == 0x80 {
                // continuation byte
                continue;
            }

            let need = if lead < 0x80 {
                1
            } else if lead & 0xe0 == 0xc0 {
                2
            } else if lead & 0xf0 == 0xe0 {
                3
            } else if lead & 0xf8 == 0xf0 {
                4
            } else {
                // invalid lead byte; not something truncation produced
                1
            };

            return if i + need > len { i } else { len };
        }

        len
    }
}

/**
Fixed-width wide text.  Every unit is one whole character, so unit-level
truncation can never split a character and `crop_incomplete` has nothing to
do.
*/
pub enum Wide {}

impl Encoding for Wide {
    type Unit = char;
    type FfiUnit = u32;
    type StrUnits<'a> = str::Chars<'a>;

    fn debug_prefix() -> &'static str {
        "W"
    }

    fn str_units<'a>(s: &'a str) -> str::Chars<'a> {
        s.chars()
    }

    fn copy_str(dest: &mut [char], s: &str) -> (usize, bool) {
        let mut n = 0;
        for ch in s.chars() {
            if n == dest.len() {
                return (n, false);
            }
            dest[n] = ch;
            n += 1;
        }
        (n, true)
    }

    unsafe fn copy_str_unchecked(dest: *mut char, s: &str) -> usize {
        let mut n = 0;
        for ch in s.chars() {
            *dest.add(n) = ch;
            n += 1;
        }
        n
    }

    fn crop_incomplete(units: &[char]) -> usize {
        units.len()
    }
}

impl Unit for u8 {
    #[inline]
    fn zero() -> Self {
        0
    }

    #[inline]
    fn is_zero(&self) -> bool {
        *self == 0
    }

    #[inline]
    fn is_ascii(&self) -> bool {
        *self < 0x80
    }

    #[inline]
    fn from_ascii(byte: u8) -> Self {
        byte
    }
}

impl Unit for char {
    #[inline]
    fn zero() -> Self {
        '\0'
    }

    #[inline]
    fn is_zero(&self) -> bool {
        *self == '\0'
    }

    #[inline]
    fn is_ascii(&self) -> bool {
        (*self as u32) < 0x80
    }

    #[inline]
    fn from_ascii(byte: u8) -> Self {
        byte as char
    }
}

impl UnitDebug for u8 {
    fn fmt(&self, fmt: &mut fmt::Formatter) -> fmt::Result {
        match *self {
            0x20..=0x7e => write!(fmt, "{}", *self as char),
            b => write!(fmt, "\\x{:02x}", b),
        }
    }
}

impl UnitDebug for char {
    fn fmt(&self, fmt: &mut fmt::Formatter) -> fmt::Result {
        write!(fmt, "{}", self.escape_debug())
    }
}
