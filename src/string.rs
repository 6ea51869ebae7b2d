/*!
Fixed-capacity, zero-terminated strings.
*/
use std::cmp::Ordering;
use std::fmt::{self, Debug, Write};
use std::hash::{Hash, Hasher};
use std::ops::Index;
use std::str;

use buffer::Buffer;
use encoding::{Encoding, Unit, UnitDebug, Utf8};
use format::{TruncatingWriter, UncheckedWriter};
use util;

/**
The error returned by `FixedString::try_from_str` when the source text does
not fit the buffer's capacity.
*/
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct CapacityError;

impl fmt::Display for CapacityError {
    fn fmt(&self, fmt: &mut fmt::Formatter) -> fmt::Result {
        write!(fmt, "string does not fit the fixed capacity")
    }
}

impl ::std::error::Error for CapacityError {}

/**
A string with a maximum size known at compile time.

The value owns an inline array of `N` units; one unit is reserved for the
zero terminator, so the longest text it can carry is `N - 1` units.  Nothing
is ever allocated, and no operation blocks, so values of this type are safe
to use where the heap is not.

Three properties hold before and after every public operation:

1. the logical length is at most `N - 1`;
2. the unit at the logical length is zero;
3. no unit before the logical length is zero.

For the byte-oriented `Utf8` encoding there is a fourth: no operation that
takes a `&str` leaves a partial character behind when it truncates.  Only
unit-level writes (`push`, the unchecked appenders, raw buffer access) can
introduce one, and `crop_incomplete` repairs it.

The logical length is always *derived* by scanning for the terminator.
There is no stored length that could disagree with the contents, at the cost
of `len` being *O*(`len`).

Mutating the string through any method invalidates previously obtained views
and pointers; the borrow checker enforces this for `as_units`, and `as_ptr`
callers must respect it themselves.

# Parameters

`E` defines the encoding of the string data.  *e.g.* `Utf8` for
byte-oriented UTF-8 text, and `Wide` for fixed-width wide text.

`N` is the total unit capacity, including the terminator slot.  It must be
at least 1.
*/
pub struct FixedString<E, const N: usize>
where
    E: Encoding,
{
    buf: Buffer<E, N>,
}

impl<E, const N: usize> FixedString<E, N>
where
    E: Encoding,
{
    /**
    Creates an empty string.
    */
    pub fn new() -> Self {
        FixedString { buf: Buffer::new() }
    }

    /**
    Creates a string holding as much of `value` as fits.  Excess input is
    silently discarded; see `assign`.
    */
    pub fn from_str_truncate(value: &str) -> Self {
        let mut s = Self::new();
        s.assign(value);
        s
    }

    /**
    Creates a string holding exactly `value`.

    # Failure

    Fails if `value` does not fit within `N - 1` units.  Use
    `from_str_truncate` when lossy behaviour is acceptable.
    */
    pub fn try_from_str(value: &str) -> Result<Self, CapacityError> {
        let mut s = Self::new();
        let (n, complete) = E::copy_str(&mut s.buf.units_mut()[..N - 1], value);
        if !complete {
            return Err(CapacityError);
        }
        s.buf.terminate_at(n);
        Ok(s)
    }

    /**
    Returns the total unit capacity, including the terminator slot.
    */
    pub fn capacity(&self) -> usize {
        N
    }

    /**
    Returns the logical length in units.

    # Efficiency

    This scans forward to the terminator; it is *O*(`len`).  Avoid calling
    it repeatedly when the result can be reused.
    */
    pub fn len(&self) -> usize {
        self.buf.len()
    }

    /**
    Returns `true` if the string holds no units.
    */
    pub fn is_empty(&self) -> bool {
        self.buf.is_empty()
    }

    /**
    Returns `true` if no further `push` can succeed.
    */
    pub fn is_full(&self) -> bool {
        self.len() >= N - 1
    }

    /**
    Replaces the contents with as much of `value` as fits.

    Excess input is silently discarded, and the cut is never placed inside a
    multi-unit character.
    */
    pub fn assign(&mut self, value: &str) {
        let (n, _) = E::copy_str(&mut self.buf.units_mut()[..N - 1], value);
        self.buf.terminate_at(n);
    }

    /**
    Appends as much of `value` as still fits.  Excess input is silently
    discarded, with the same character-boundary guarantee as `assign`.
    */
    pub fn append(&mut self, value: &str) {
        let len = self.len();
        let (n, _) = E::copy_str(&mut self.buf.units_mut()[len..N - 1], value);
        self.buf.terminate_at(len + n);
    }

    /**
    Appends a single unit.

    Returns `false`, leaving the string untouched, when the buffer is
    already full.
    */
    pub fn push(&mut self, unit: E::Unit) -> bool {
        let len = self.len();
        if len >= N - 1 {
            return false;
        }
        let units = self.buf.units_mut();
        units[len] = unit;
        units[len + 1] = E::Unit::zero();
        true
    }

    /**
    Truncates the string to `new_len` units.

    `new_len` must not exceed the current length.  Violating this is a
    caller bug, checked in debug builds; it is never silently clamped.
    */
    pub fn truncate(&mut self, new_len: usize) {
        debug_assert!(new_len <= self.len(), "truncate beyond current length");
        self.buf.terminate_at(new_len);
    }

    /**
    Truncates the string to zero units.
    */
    pub fn clear(&mut self) {
        self.buf.terminate_at(0);
    }

    /**
    Replaces the contents with the ASCII units of `src`, skipping any byte
    outside the ASCII range and stopping when the capacity is reached.

    The source is treated as a plain byte sequence; multi-byte characters
    are not interpreted, their bytes are simply dropped.
    */
    pub fn set_ascii(&mut self, src: &[u8]) {
        let n = util::copy_ascii(&mut self.buf.units_mut()[..N - 1], src);
        self.buf.terminate_at(n);
    }

    /**
    Removes every non-ASCII unit in place, compacting the remainder.

    Applying this twice is the same as applying it once.
    */
    pub fn clean_ascii(&mut self) {
        let len = self.len();
        let n = util::retain_ascii(&mut self.buf.units_mut()[..len]);
        self.buf.terminate_at(n);
    }

    /**
    Replaces the contents with the given UTF-8 encoded bytes, bounded to
    capacity with the usual silent truncation.

    # Failure

    Fails if `src` is not valid UTF-8.  In that case the previous contents
    are left untouched.
    */
    pub fn set_utf8(&mut self, src: &[u8]) -> Result<(), str::Utf8Error> {
        let s = str::from_utf8(src)?;
        self.assign(s);
        Ok(())
    }

    /**
    Removes a trailing partial multi-unit character, if present, so that the
    retained text ends on a character boundary.

    Useful after unit-level writes into a `Utf8` string.  For fixed-width
    encodings this does nothing.
    */
    pub fn crop_incomplete(&mut self) {
        let len = self.len();
        let n = E::crop_incomplete(&self.buf.units()[..len]);
        self.buf.terminate_at(n);
    }

    /**
    Replaces the contents with the formatted text, truncated to what fits.

    Returns a view of the stored result.  If one of the formatting trait
    implementations reports an error, an empty view is returned; whatever
    was produced before the error stays in the buffer, properly terminated.
    */
    pub fn format(&mut self, args: fmt::Arguments) -> &[E::Unit] {
        let mut w = TruncatingWriter::<E>::new(&mut self.buf.units_mut()[..N - 1]);
        let ok = w.write_fmt(args).is_ok();
        let len = w.written();
        self.buf.terminate_at(len);
        if ok {
            &self.buf.units()[..len]
        } else {
            &[]
        }
    }

    /**
    Appends the formatted text, truncated to what still fits.
    */
    pub fn append_format(&mut self, args: fmt::Arguments) {
        let start = self.len();
        let mut w = TruncatingWriter::<E>::new(&mut self.buf.units_mut()[start..N - 1]);
        let _ = w.write_fmt(args);
        let len = start + w.written();
        self.buf.terminate_at(len);
    }

    /**
    Replaces the contents with the formatted text, without any capacity
    check, and returns a view of the result.

    This exists for call sites that have already proven the output fits.

    # Safety

    The formatted output, plus one unit for the terminator, must fit within
    `N` units.  If it does not, the writes run off the end of the buffer.
    */
    pub unsafe fn format_unchecked(&mut self, args: fmt::Arguments) -> &[E::Unit] {
        let mut w = UncheckedWriter::<E>::new(self.buf.as_mut_ptr());
        let ok = w.write_fmt(args).is_ok();
        let len = w.written();
        *self.buf.as_mut_ptr().add(len) = E::Unit::zero();
        if ok {
            &self.buf.units()[..len]
        } else {
            &[]
        }
    }

    /**
    Appends the ASCII units of `src`, skipping non-ASCII bytes, without any
    capacity check.

    # Safety

    The appended units, plus one unit for the terminator, must fit within
    the remaining capacity.
    */
    pub unsafe fn append_ascii_unchecked(&mut self, src: &[u8]) {
        let len = self.len();
        let base = self.buf.as_mut_ptr().add(len);
        let mut n = 0;
        for &b in src {
            if b < 0x80 {
                *base.add(n) = E::Unit::from_ascii(b);
                n += 1;
            }
        }
        *base.add(n) = E::Unit::zero();
    }

    /**
    Returns `true` if the contents begin with the units of `prefix`.
    */
    pub fn starts_with(&self, prefix: &str) -> bool {
        util::starts_with::<E>(self.as_units(), prefix)
    }

    /**
    Returns `true` if the units of `needle` occur anywhere in the contents.
    */
    pub fn contains(&self, needle: &str) -> bool {
        util::find::<E>(self.as_units(), needle).is_some()
    }

    /**
    Returns the first unit, if any.
    */
    pub fn first(&self) -> Option<E::Unit> {
        self.as_units().first().map(|&u| u)
    }

    /**
    Returns the last unit, if any.
    */
    pub fn last(&self) -> Option<E::Unit> {
        self.as_units().last().map(|&u| u)
    }

    /**
    Returns the units comprising the contents, *not* including the
    terminator.
    */
    pub fn as_units(&self) -> &[E::Unit] {
        self.buf.contents()
    }

    /**
    Returns the units comprising the contents, *including* the terminator.
    */
    pub fn as_units_with_term(&self) -> &[E::Unit] {
        self.buf.contents_with_term()
    }

    /**
    Returns a raw pointer to the zero-terminated contents, for handing to
    pointer-based text interfaces.

    The pointer is valid until the string is mutated, moved, or dropped.
    */
    pub fn as_ptr(&self) -> *const E::FfiUnit {
        self.buf.as_ptr() as *const E::FfiUnit
    }

    /**
    Returns the whole underlying buffer for writing, terminator slot
    included.

    # Safety

    This method is not memory-unsafe; here, `unsafe` is used as a check
    against questionable behaviour.  Writing through the slice can remove
    the terminator or embed interior zeroes; the caller must re-establish a
    terminator before using any other operation.
    */
    pub unsafe fn as_units_mut_unsafe(&mut self) -> &mut [E::Unit] {
        self.buf.units_mut()
    }
}

impl<const N: usize> FixedString<Utf8, N> {
    /**
    Returns the contents as `&str`.

    # Failure

    Fails when unit-level writes have left content that is not valid UTF-8.
    Text stored through the `&str`-taking operations is always valid.
    */
    pub fn to_str(&self) -> Result<&str, str::Utf8Error> {
        str::from_utf8(self.as_units())
    }
}

impl<E, const N: usize> Clone for FixedString<E, N>
where
    E: Encoding,
{
    fn clone(&self) -> Self {
        *self
    }
}

impl<E, const N: usize> Copy for FixedString<E, N> where E: Encoding {}

impl<E, const N: usize> Debug for FixedString<E, N>
where
    E: Encoding,
{
    fn fmt(&self, fmt: &mut fmt::Formatter) -> fmt::Result {
        write!(fmt, "F{}\"", E::debug_prefix())?;
        for unit in self.as_units() {
            UnitDebug::fmt(unit, fmt)?;
        }
        write!(fmt, "\"")
    }
}

impl<E, const N: usize> Default for FixedString<E, N>
where
    E: Encoding,
{
    fn default() -> Self {
        FixedString::new()
    }
}

impl<E, const N: usize> Eq for FixedString<E, N> where E: Encoding {}

impl<E, const N: usize> Hash for FixedString<E, N>
where
    E: Encoding,
{
    fn hash<H>(&self, state: &mut H)
    where
        H: Hasher,
    {
        Hash::hash_slice(self.as_units(), state)
    }
}

impl<E, const N: usize> Index<usize> for FixedString<E, N>
where
    E: Encoding,
{
    type Output = E::Unit;

    /**
    Returns one unit.  Indexing the logical length is permitted and yields
    the terminator; anything beyond that is a caller bug, checked in debug
    builds.
    */
    fn index(&self, i: usize) -> &E::Unit {
        debug_assert!(i <= self.len(), "index beyond the terminator");
        &self.buf.units()[i]
    }
}

impl<E, const N: usize> Ord for FixedString<E, N>
where
    E: Encoding,
{
    fn cmp(&self, other: &Self) -> Ordering {
        self.as_units().cmp(other.as_units())
    }
}

impl<E, const N: usize, const M: usize> PartialEq<FixedString<E, M>> for FixedString<E, N>
where
    E: Encoding,
{
    fn eq(&self, other: &FixedString<E, M>) -> bool {
        self.as_units() == other.as_units()
    }
}

impl<E, const N: usize, const M: usize> PartialOrd<FixedString<E, M>> for FixedString<E, N>
where
    E: Encoding,
{
    fn partial_cmp(&self, other: &FixedString<E, M>) -> Option<Ordering> {
        self.as_units().partial_cmp(other.as_units())
    }
}

impl<E, const N: usize> PartialEq<str> for FixedString<E, N>
where
    E: Encoding,
{
    fn eq(&self, other: &str) -> bool {
        self.as_units().iter().map(|&u| u).eq(E::str_units(other))
    }
}

impl<'a, E, const N: usize> PartialEq<&'a str> for FixedString<E, N>
where
    E: Encoding,
{
    fn eq(&self, other: &&'a str) -> bool {
        *self == **other
    }
}

/**
Appends with silent truncation, so `write!` into a full buffer reports
success and drops the excess.  Use `format`/`append_format` to observe the
written length.
*/
impl<E, const N: usize> fmt::Write for FixedString<E, N>
where
    E: Encoding,
{
    fn write_str(&mut self, s: &str) -> fmt::Result {
        self.append(s);
        Ok(())
    }
}
