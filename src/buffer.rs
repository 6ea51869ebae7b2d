/*!
Raw inline storage.

A `Buffer` is nothing more than `N` units living inside the value itself.
It carries no invariant of its own: the logical length is always *derived*
by scanning forward to the first zero unit, so there is no separate length
field that could fall out of sync with the contents.  Terminator discipline
is the business of the string types layered on top.
*/
use encoding::{Encoding, Unit};

/**
An inline array of `N` units of encoding `E`.

`N` is fixed at the type level and includes the slot reserved for the
terminator, so the longest text a buffer can carry is `N - 1` units.
*/
pub struct Buffer<E, const N: usize>
where
    E: Encoding,
{
    units: [E::Unit; N],
}

impl<E, const N: usize> Buffer<E, N>
where
    E: Encoding,
{
    /**
    Creates a zero-filled buffer.  The logical length is zero.
    */
    pub fn new() -> Self {
        assert!(N > 0, "a buffer needs room for the terminator");
        Buffer {
            units: [E::Unit::zero(); N],
        }
    }

    /**
    Returns the total number of units, including the terminator slot.
    */
    pub fn capacity(&self) -> usize {
        N
    }

    /**
    Returns the index of the first zero unit, or `N` when no zero unit is
    present.

    # Efficiency

    This scans the underlying memory; it is *O*(`len`).  Avoid calling it
    repeatedly in a tight loop.
    */
    pub fn len(&self) -> usize {
        self.units.iter().position(|u| u.is_zero()).unwrap_or(N)
    }

    /**
    Returns `true` if the first unit is the terminator.
    */
    pub fn is_empty(&self) -> bool {
        self.units[0].is_zero()
    }

    /**
    Returns all `N` units, regardless of content.
    */
    pub fn units(&self) -> &[E::Unit] {
        &self.units
    }

    /**
    Returns all `N` units for writing.

    Writing through this slice can move or remove the terminator; callers
    are expected to re-terminate afterwards.
    */
    pub fn units_mut(&mut self) -> &mut [E::Unit] {
        &mut self.units
    }

    /**
    Returns the units up to (not including) the first zero unit.
    */
    pub fn contents(&self) -> &[E::Unit] {
        &self.units[..self.len()]
    }

    /**
    Returns the units up to *and including* the first zero unit.

    If no zero unit is present, returns all `N` units.
    */
    pub fn contents_with_term(&self) -> &[E::Unit] {
        let len = self.len();
        let end = if len < N { len + 1 } else { N };
        &self.units[..end]
    }

    /**
    Returns a raw pointer to the first unit.
    */
    pub fn as_ptr(&self) -> *const E::Unit {
        self.units.as_ptr()
    }

    /**
    Returns a raw mutable pointer to the first unit.
    */
    pub fn as_mut_ptr(&mut self) -> *mut E::Unit {
        self.units.as_mut_ptr()
    }

    /**
    Writes the terminator at index `at`.  Panics if `at >= N`.
    */
    pub fn terminate_at(&mut self, at: usize) {
        self.units[at] = E::Unit::zero();
    }
}

impl<E, const N: usize> Clone for Buffer<E, N>
where
    E: Encoding,
{
    fn clone(&self) -> Self {
        *self
    }
}

impl<E, const N: usize> Copy for Buffer<E, N> where E: Encoding {}

impl<E, const N: usize> Default for Buffer<E, N>
where
    E: Encoding,
{
    fn default() -> Self {
        Buffer::new()
    }
}
