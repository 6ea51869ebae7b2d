/*!
Additional documentation.

# Components

These tables summarise the provided components.  Prefixes are used in debug
output: a `Utf8String` holding `hi` debug-prints as `FUtf8"hi"`.

## Encodings

See the `encoding` module.

| Prefix | Name   | Encoding |
| ------ | ------ | -------- |
| `Utf8` | `Utf8` | Byte-oriented UTF-8.  One character is one to four units, so a unit-level cut can split a character; `crop_incomplete` repairs it. |
| `W`    | `Wide` | Fixed-width wide text, one whole character per unit.  A unit-level cut can never split a character. |

## Invariants

For any live string value:

1. the logical length is at most `capacity() - 1`;
2. the unit at the logical length is zero;
3. no earlier unit is zero;
4. units past the terminator are unspecified.

The length is always derived by scanning to the terminator.  There is no
cached length field to fall out of sync.

# Common Misconceptions and Mistakes

* *"Truncating a UTF-8 string at a byte count gives back valid UTF-8."*  It
  gives back valid UTF-8 only if the cut lands on a character boundary.  The
  `&str`-taking operations here guarantee that; raw unit writes do not.

* *"A full buffer is an error."*  Here it is not: `assign`, `append` and the
  formatted writes define truncation as the normal, lossy outcome, and only
  `push` reports fullness explicitly.

* *"The terminator counts towards the capacity that is usable for text."*
  The type parameter `N` counts *units of storage*.  One of them is always
  the terminator, so `Utf8String<4>` holds at most three bytes of text.

* *"`len()` is cheap."*  It walks the contents to find the terminator.
  Cache it across a sequence of reads.
*/
