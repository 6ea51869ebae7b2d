use encoding::{Encoding, Unit};

/// Copies the ASCII units of `src` into `dest`, skipping anything outside
/// the ASCII range, and stopping when `dest` is full.  Returns the number of
/// units written.
pub fn copy_ascii<U>(dest: &mut [U], src: &[u8]) -> usize
where
    U: Unit,
{
    let mut n = 0;
    for &b in src {
        if n == dest.len() {
            break;
        }
        if b < 0x80 {
            dest[n] = U::from_ascii(b);
            n += 1;
        }
    }
    n
}

/// Compacts `units` in place, keeping only ASCII units.  Returns the number
/// of units retained.
pub fn retain_ascii<U>(units: &mut [U]) -> usize
where
    U: Unit,
{
    let mut n = 0;
    for i in 0..units.len() {
        let u = units[i];
        if u.is_ascii() {
            units[n] = u;
            n += 1;
        }
    }
    n
}

/// True when `haystack` begins with the units of `needle`.
pub fn starts_with<E>(haystack: &[E::Unit], needle: &str) -> bool
where
    E: Encoding,
{
    let mut i = 0;
    for u in E::str_units(needle) {
        if i >= haystack.len() || haystack[i] != u {
            return false;
        }
        i += 1;
    }
    true
}

/// Returns the position of the first occurrence of `needle` within
/// `haystack`, if any.  The needle is re-lowered for every candidate
/// position, trading time for the absence of any scratch allocation.
pub fn find<E>(haystack: &[E::Unit], needle: &str) -> Option<usize>
where
    E: Encoding,
{
    for start in 0..=haystack.len() {
        if starts_with::<E>(&haystack[start..], needle) {
            return Some(start);
        }
    }
    None
}
