/*!
Bounded formatted-write sinks.

Both sinks implement `std::fmt::Write` so they can be driven by
`format_args!`.  The truncating sink enforces the capacity bound and never
splits a character; the unchecked sink trusts the caller completely.
*/
use std::fmt;

use encoding::Encoding;

/**
A write sink that drops whatever does not fit into its destination.

Once a write has been cut short, all further writes are ignored, so a
formatted result is always a clean prefix of the requested output rather
than a patchwork with holes.
*/
pub struct TruncatingWriter<'a, E>
where
    E: Encoding,
{
    dest: &'a mut [E::Unit],
    len: usize,
    truncated: bool,
}

impl<'a, E> TruncatingWriter<'a, E>
where
    E: Encoding,
{
    pub fn new(dest: &'a mut [E::Unit]) -> Self {
        TruncatingWriter {
            dest: dest,
            len: 0,
            truncated: false,
        }
    }

    /**
    Returns the number of units written so far.
    */
    pub fn written(&self) -> usize {
        self.len
    }
}

impl<'a, E> fmt::Write for TruncatingWriter<'a, E>
where
    E: Encoding,
{
    fn write_str(&mut self, s: &str) -> fmt::Result {
        if self.truncated {
            return Ok(());
        }
        let (n, complete) = E::copy_str(&mut self.dest[self.len..], s);
        self.len += n;
        self.truncated = !complete;
        Ok(())
    }
}

/**
A write sink with no capacity check at all.

# Safety

Every write goes straight to memory behind the raw pointer.  Whoever
constructs one of these must have proven that the formatted output fits the
destination; otherwise the writes run off the end of the allocation.
*/
pub struct UncheckedWriter<E>
where
    E: Encoding,
{
    dest: *mut E::Unit,
    len: usize,
}

impl<E> UncheckedWriter<E>
where
    E: Encoding,
{
    pub unsafe fn new(dest: *mut E::Unit) -> Self {
        UncheckedWriter { dest: dest, len: 0 }
    }

    /**
    Returns the number of units written so far.
    */
    pub fn written(&self) -> usize {
        self.len
    }
}

impl<E> fmt::Write for UncheckedWriter<E>
where
    E: Encoding,
{
    fn write_str(&mut self, s: &str) -> fmt::Result {
        self.len += unsafe { E::copy_str_unchecked(self.dest.add(self.len), s) };
        Ok(())
    }
}
