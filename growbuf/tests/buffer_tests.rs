use std::cmp::Ordering;

use growbuf::Buffer;
use u8span::{Chain, Span};

#[test]
fn test_new_does_not_allocate() {
    let buffer = Buffer::new();
    assert_eq!(buffer.len(), 0);
    assert_eq!(buffer.capacity(), 0);
    assert!(buffer.is_empty());
}

#[test]
fn test_calculate_size() {
    // Smallest power of two >= max(n, 8)
    assert_eq!(Buffer::calculate_size(0), 8);
    assert_eq!(Buffer::calculate_size(1), 8);
    assert_eq!(Buffer::calculate_size(8), 8);
    assert_eq!(Buffer::calculate_size(9), 16);
    assert_eq!(Buffer::calculate_size(16), 16);
    assert_eq!(Buffer::calculate_size(17), 32);
    assert_eq!(Buffer::calculate_size(1000), 1024);
    assert_eq!(Buffer::calculate_size(1025), 2048);
}

#[test]
fn test_from_str_round_trip() {
    let buffer = Buffer::from_str("hello");
    assert_eq!(buffer.len(), 5);
    assert_eq!(buffer.as_bytes(), b"hello");
    assert_eq!(buffer.as_str_lossy(), "hello");
}

#[test]
fn test_from_bytes() {
    let buffer = Buffer::from_bytes(&[1, 2, 3, 4, 5, 6, 7]);
    assert_eq!(buffer.len(), 7);
    assert!(buffer.capacity() >= 7);

    let mut buffer = buffer;
    buffer.clear();
    assert_eq!(buffer.len(), 0);
    assert!(buffer.is_empty());
}

#[test]
fn test_grow_is_noop_when_capacity_suffices() {
    let mut buffer = Buffer::with_capacity(16);
    let before = buffer.capacity();
    buffer.grow(10);
    assert_eq!(buffer.capacity(), before);
    buffer.grow(before);
    assert_eq!(buffer.capacity(), before);
}

#[test]
fn test_grow_preserves_content() {
    let mut buffer = Buffer::from_str("abc");
    buffer.grow(4096);
    assert!(buffer.capacity() >= 4096);
    assert_eq!(buffer.as_bytes(), b"abc");
}

#[test]
fn test_append_operations() {
    let mut buffer = Buffer::new();
    buffer.push(b'a');
    buffer.push_str("bc");
    buffer.write_bytes(b"de");
    buffer.write_span(Span::from_str("f"));

    let other = Buffer::from_str("gh");
    buffer.concat(&other);

    assert_eq!(buffer.as_bytes(), b"abcdefgh");
    assert_eq!(buffer.len(), 8);
    assert!(buffer.capacity() >= buffer.len());
}

#[test]
fn test_put_decimal() {
    let mut buffer = Buffer::new();
    buffer.put_u32(0);
    buffer.push(b' ');
    buffer.put_u32(u32::MAX);
    buffer.push(b' ');
    buffer.put_u64(u64::MAX);
    assert_eq!(buffer.as_bytes(), b"0 4294967295 18446744073709551615");
}

#[test]
fn test_assign_replaces_content() {
    let mut buffer = Buffer::from_str("old content");
    buffer.assign(b"new");
    assert_eq!(buffer.as_bytes(), b"new");

    buffer.assign_span(Span::from_str("span"));
    assert_eq!(buffer.as_bytes(), b"span");

    buffer.assign_str("text");
    assert_eq!(buffer.as_bytes(), b"text");
}

#[test]
fn test_copy_from_copies_used_length_only() {
    let mut source = Buffer::with_capacity(1024);
    source.push_str("payload");

    let mut target = Buffer::from_str("something else");
    target.copy_from(&source);
    assert_eq!(target.as_bytes(), b"payload");
    assert_eq!(target.len(), source.len());
}

#[test]
fn test_clone_is_independent() {
    let source = Buffer::from_str("data");
    let mut copy = source.clone();
    copy.push(b'!');
    assert_eq!(source.as_bytes(), b"data");
    assert_eq!(copy.as_bytes(), b"data!");
}

#[test]
fn test_swap() {
    let mut left = Buffer::from_str("left");
    let mut right = Buffer::from_str("right");
    left.swap(&mut right);
    assert_eq!(left.as_bytes(), b"right");
    assert_eq!(right.as_bytes(), b"left");
}

#[test]
fn test_remove_at_middle() {
    let mut buffer = Buffer::from_str("abcdef");
    buffer.remove_at(2, 2);
    assert_eq!(buffer.as_bytes(), b"abef");
    // The write cursor follows the compaction
    assert_eq!(buffer.len(), 4);
}

#[test]
fn test_remove_at_clamps_count() {
    let mut buffer = Buffer::from_str("abcdef");
    buffer.remove_at(4, 100);
    assert_eq!(buffer.as_bytes(), b"abcd");

    buffer.remove_at(4, 1); // index == len is the empty tail
    assert_eq!(buffer.as_bytes(), b"abcd");
}

#[test]
#[should_panic]
fn test_remove_at_index_out_of_range() {
    let mut buffer = Buffer::from_str("ab");
    buffer.remove_at(3, 1);
}

#[test]
fn test_span_round_trip_with_embedded_zeros() {
    let original = Buffer::from_bytes(&[1, 0, 2, 0, 0, 3]);
    let copy = Buffer::from_span(original.as_span());
    assert_eq!(copy, original);
    assert_eq!(copy.as_bytes(), &[1, 0, 2, 0, 0, 3]);
}

#[test]
fn test_from_chain() {
    let mut chain = Chain::from_span(Span::from_str("foo"));
    chain.append(Span::from_str("bar"));
    let buffer = Buffer::from_chain(&chain);
    assert_eq!(buffer.as_bytes(), b"foobar");
    assert_eq!(buffer.len(), 6);
}

#[test]
fn test_compare() {
    let buffer = Buffer::from_str("abc");
    assert_eq!(buffer.compare_bytes(b"abc"), Ordering::Equal);
    assert_eq!(buffer.compare_bytes(b"abd"), Ordering::Less);
    // Shorter-is-less on prefix ties
    assert_eq!(buffer.compare_bytes(b"abcd"), Ordering::Less);
    assert_eq!(buffer.compare_bytes(b"ab"), Ordering::Greater);

    assert_eq!(buffer.compare(&Buffer::from_str("abc")), Ordering::Equal);
    assert_eq!(buffer.compare_ignore_case(b"ABC"), Ordering::Equal);
}

#[test]
fn test_as_mut_bytes() {
    let mut buffer = Buffer::from_str("abc");
    buffer.as_mut_bytes()[0] = b'x';
    assert_eq!(buffer.as_bytes(), b"xbc");
    assert_eq!(buffer.len(), 3);
}

#[test]
fn test_extend() {
    let mut buffer = Buffer::new();
    buffer.extend(b"xyz".iter().copied());
    assert_eq!(buffer.as_bytes(), b"xyz");
}
