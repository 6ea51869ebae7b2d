extern crate fixstr;

use std::ffi::CStr;
use std::fmt;
use std::fmt::Write;

use fixstr::Utf8String;

#[test]
fn starts_empty() {
    let s = Utf8String::<8>::new();
    assert_eq!(s.len(), 0);
    assert!(s.is_empty());
    assert!(!s.is_full());
    assert_eq!(s.as_units(), b"");
    assert_eq!(s.as_units_with_term(), &[0][..]);
}

#[test]
fn assign_roundtrip() {
    let mut s = Utf8String::<16>::new();
    s.assign("hello");
    assert_eq!(s.len(), 5);
    assert_eq!(s.to_str().unwrap(), "hello");
    assert_eq!(*s.as_units_with_term().last().unwrap(), 0);
}

#[test]
fn assign_truncates() {
    let s = Utf8String::<4>::from_str_truncate("abcdef");
    assert_eq!(s.as_units(), b"abc");
    assert!(s.is_full());
}

#[test]
fn assign_never_splits_a_character() {
    // three usable bytes; the second two-byte character must go entirely
    let s = Utf8String::<4>::from_str_truncate("éé");
    assert_eq!(s.to_str().unwrap(), "é");
    assert_eq!(s.len(), 2);
}

#[test]
fn append_truncates_at_boundary() {
    let mut s = Utf8String::<6>::from_str_truncate("ab");
    s.append("cdé");
    assert_eq!(s.to_str().unwrap(), "abcd");
}

#[test]
fn push_reports_fullness_without_mutation() {
    let mut s = Utf8String::<3>::new();
    assert!(s.push(b'a'));
    assert!(s.push(b'b'));
    assert!(s.is_full());

    let before = s;
    assert!(!s.push(b'c'));
    assert_eq!(s, before);
    assert_eq!(s.as_units(), b"ab");
}

#[test]
fn truncate_moves_the_terminator() {
    let mut s = Utf8String::<8>::from_str_truncate("hello");
    s.truncate(2);
    assert_eq!(s.as_units(), b"he");
    s.clear();
    assert!(s.is_empty());
}

#[test]
#[cfg(debug_assertions)]
#[should_panic(expected = "truncate beyond current length")]
fn truncate_past_length_is_a_caller_bug() {
    let mut s = Utf8String::<8>::from_str_truncate("hi");
    s.truncate(5);
}

#[test]
fn set_ascii_skips_non_ascii_and_bounds() {
    let mut s = Utf8String::<8>::new();
    s.set_ascii(b"a\xc3\xa9b");
    assert_eq!(s.as_units(), b"ab");

    let mut small = Utf8String::<3>::new();
    small.set_ascii(b"abcdef");
    assert_eq!(small.as_units(), b"ab");
}

#[test]
fn clean_ascii_is_idempotent() {
    let mut s = Utf8String::<8>::from_str_truncate("aéb");
    s.clean_ascii();
    assert_eq!(s.as_units(), b"ab");
    let once = s;
    s.clean_ascii();
    assert_eq!(s, once);
}

#[test]
fn set_utf8_accepts_valid_input() {
    let mut s = Utf8String::<16>::new();
    assert!(s.set_utf8("héllo".as_bytes()).is_ok());
    assert_eq!(s.to_str().unwrap(), "héllo");
}

#[test]
fn set_utf8_truncates_valid_input_to_capacity() {
    let mut s = Utf8String::<4>::new();
    assert!(s.set_utf8(b"abcdef").is_ok());
    assert_eq!(s.as_units(), b"abc");
}

#[test]
fn set_utf8_rejects_invalid_input_untouched() {
    let mut s = Utf8String::<16>::from_str_truncate("keep");
    assert!(s.set_utf8(b"\xff\xfe").is_err());
    assert_eq!(s, "keep");
    assert_eq!(*s.as_units_with_term().last().unwrap(), 0);
}

#[test]
fn crop_incomplete_drops_partial_sequence() {
    let mut s = Utf8String::<8>::from_str_truncate("a");
    // first two bytes of a three-byte character
    assert!(s.push(0xe2));
    assert!(s.push(0x82));
    assert_eq!(s.len(), 3);

    s.crop_incomplete();
    assert_eq!(s.as_units(), b"a");
    assert!(s.to_str().is_ok());
}

#[test]
fn crop_incomplete_keeps_complete_text() {
    let mut s = Utf8String::<8>::from_str_truncate("aé");
    s.crop_incomplete();
    assert_eq!(s.to_str().unwrap(), "aé");
}

#[test]
fn format_truncates_and_reports_the_stored_length() {
    let mut s = Utf8String::<4>::new();
    let view = s.format(format_args!("{}", 12345)).to_vec();
    assert_eq!(&view, b"123");
    assert_eq!(s.as_units(), b"123");
    assert_eq!(*s.as_units_with_term().last().unwrap(), 0);
}

struct PartialReporter;

impl fmt::Display for PartialReporter {
    fn fmt(&self, fmt: &mut fmt::Formatter) -> fmt::Result {
        fmt.write_str("par")?;
        Err(fmt::Error)
    }
}

#[test]
fn format_error_keeps_the_partial_text_but_returns_nothing() {
    let mut s = Utf8String::<16>::from_str_truncate("old");
    let view = s.format(format_args!("{}", PartialReporter)).to_vec();
    assert!(view.is_empty());
    assert_eq!(s.as_units(), b"par");
    assert_eq!(s.as_units_with_term(), b"par\0");
}

#[test]
fn append_format_starts_at_the_current_length() {
    let mut s = Utf8String::<8>::from_str_truncate("v=");
    s.append_format(format_args!("{}", 7));
    assert_eq!(s.as_units(), b"v=7");
}

#[test]
fn format_unchecked_with_proven_capacity() {
    let mut s = Utf8String::<16>::new();
    let view = unsafe { s.format_unchecked(format_args!("{}", 42)) }.to_vec();
    assert_eq!(&view, b"42");
    assert_eq!(s.as_units(), b"42");
}

#[test]
fn append_ascii_unchecked_filters_and_terminates() {
    let mut s = Utf8String::<16>::from_str_truncate("x");
    unsafe {
        s.append_ascii_unchecked(b"y\xc3z");
    }
    assert_eq!(s.as_units(), b"xyz");
}

#[test]
fn write_macro_appends_with_silent_truncation() {
    let mut s = Utf8String::<6>::new();
    write!(s, "n={}", 1234).unwrap();
    assert_eq!(s.as_units(), b"n=123");
}

#[test]
fn equality_is_content_based_across_capacities() {
    let a = Utf8String::<5>::from_str_truncate("abc");
    let b = Utf8String::<10>::from_str_truncate("abc");
    assert_eq!(a, b);
    assert_eq!(a, "abc");
    assert!(a != "abd");
}

#[test]
fn search_operations() {
    let s = Utf8String::<16>::from_str_truncate("hello world");
    assert!(s.starts_with("hel"));
    assert!(!s.starts_with("world"));
    assert!(s.contains("lo w"));
    assert!(s.contains(""));
    assert!(!s.contains("xyz"));
}

#[test]
fn indexing_reaches_the_terminator() {
    let s = Utf8String::<8>::from_str_truncate("hi");
    assert_eq!(s[0], b'h');
    assert_eq!(s[1], b'i');
    assert_eq!(s[s.len()], 0);
    assert_eq!(s.first(), Some(b'h'));
    assert_eq!(s.last(), Some(b'i'));
}

#[test]
fn pointer_interop_with_cstr() {
    let s = Utf8String::<8>::from_str_truncate("hello");
    let c = unsafe { CStr::from_ptr(s.as_ptr() as *const _) };
    assert_eq!(c.to_str().unwrap(), "hello");
}

#[test]
fn debug_output_carries_the_encoding_prefix() {
    let s = Utf8String::<8>::from_str_truncate("hi");
    assert_eq!(format!("{:?}", s), "FUtf8\"hi\"");
}

#[test]
fn try_from_str_refuses_oversized_input() {
    assert!(Utf8String::<4>::try_from_str("abc").is_ok());
    let err = Utf8String::<4>::try_from_str("abcd").unwrap_err();
    assert_eq!(format!("{}", err), "string does not fit the fixed capacity");
}
