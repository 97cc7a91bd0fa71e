// Copyright 2024 Cornell University
// released under BSD 3-Clause License
// author: Kevin Laeufer <laeufer@cornell.edu>
//
// Contains tests for bit vector operations that are easy to verify on the
// bit-level: is_negative, get_bit, concat, slice, shift (<<, >>), zext, sext
use fixedbw::{concat, mask, reduce_and, reduce_or, reduce_xor, BitVecValue, Error, WidthInt, Word};
use proptest::prelude::*;

fn from_bit_str(s: &str) -> BitVecValue {
    let value = Word::from_str_radix(s, 2).unwrap();
    BitVecValue::new(s.len() as WidthInt, value).unwrap()
}

fn to_bit_str(value: &BitVecValue) -> String {
    value.to_bin_str().strip_prefix("0b").unwrap().to_string()
}

fn do_test_is_negative(a: &str) {
    let expected = a.starts_with('1');
    let value = from_bit_str(a);
    assert_eq!(value.is_negative(), expected, "{a}")
}

fn do_test_get_bit(a: &str) {
    let value = from_bit_str(a);
    for (ii, c) in a.chars().rev().enumerate() {
        let bit = value.get_bit(ii as u32).unwrap();
        assert_eq!(bit.width(), 1);
        assert_eq!(bit.as_unsigned(), (c == '1') as Word, "{a}[{ii}]");
    }
    assert!(value.get_bit(a.len() as u32).is_err());
}

fn do_test_concat(a: &str, b: &str) {
    let a_value = from_bit_str(a);
    let b_value = from_bit_str(b);
    let c_value = a_value.concat(&b_value).unwrap();
    let expected = format!("{a}{b}");
    assert_eq!(to_bit_str(&c_value), expected);
}

fn do_test_slice(src: &str, start: WidthInt, stop: WidthInt) {
    let src_value = from_bit_str(src);
    assert!(start < stop);
    assert!(stop <= src_value.width());
    let res = src_value.slice(start..stop).unwrap();
    assert_eq!(res.width(), stop - start);
    let expected: String = src
        .chars()
        .skip((src_value.width() - stop) as usize)
        .take(res.width() as usize)
        .collect();
    assert_eq!(to_bit_str(&res), expected);
}

fn do_test_assign_slice(src: &str, start: WidthInt, stop: WidthInt, new: Word) {
    let original = from_bit_str(src);
    let mut value = original;
    value.assign_slice(start..stop, new).unwrap();
    assert_eq!(value.width(), original.width());
    assert_eq!(value.slice(start..stop).unwrap().as_unsigned(), new);
    let outside = !(mask(stop - start) << start) & mask(original.width());
    assert_eq!(
        value.as_unsigned() & outside,
        original.as_unsigned() & outside,
        "bits outside of [{start}, {stop}) changed"
    );
}

fn do_test_shift(src: &str, by: WidthInt, right: bool) {
    let a = from_bit_str(src);
    let res = if right {
        a.shift_right(by).unwrap()
    } else {
        a.shift_left(by).unwrap()
    };
    assert_eq!(res.width(), a.width());

    let padding_len = std::cmp::min(by, a.width()) as usize;
    let padding: String = "0".repeat(padding_len);
    let keep = src.len() - padding_len;
    let expected = if right {
        format!("{padding}{}", &src[..keep])
    } else {
        format!("{}{padding}", &src[padding_len..])
    };
    assert_eq!(to_bit_str(&res), expected);
}

fn do_test_shift_right(src: &str, by: WidthInt) {
    do_test_shift(src, by, true)
}

fn do_test_shift_left(src: &str, by: WidthInt) {
    do_test_shift(src, by, false)
}

fn do_test_zero_ext(src: &str, by: WidthInt) {
    let value = from_bit_str(src);
    let res = value.zero_extend(value.width() + by).unwrap();
    assert_eq!(res.width(), value.width() + by);
    let expected = format!("{}{src}", "0".repeat(by as usize));
    assert_eq!(to_bit_str(&res), expected);
}

fn do_test_sign_ext(src: &str, by: WidthInt) {
    let value = from_bit_str(src);
    let res = value.sign_extend(value.width() + by).unwrap();
    assert_eq!(res.width(), value.width() + by);
    let sign = &src[..1];
    let expected = format!("{}{src}", sign.repeat(by as usize));
    assert_eq!(to_bit_str(&res), expected);
    assert_eq!(res.as_signed(), value.as_signed());
}

//////////////////////////
// generators for proptest
//////////////////////////

fn bit_str_arg() -> impl Strategy<Value = String> {
    "[01]{1,128}"
}

fn short_bit_str_arg() -> impl Strategy<Value = String> {
    "[01]{1,64}"
}

fn slice_args() -> impl Strategy<Value = (String, WidthInt, WidthInt)> {
    bit_str_arg()
        .prop_flat_map(|bits: String| {
            let width = bits.len() as WidthInt;
            (Just(bits), 0..width)
        })
        .prop_flat_map(|(bits, start)| {
            let width = bits.len() as WidthInt;
            (Just(bits), Just(start), (start + 1)..=width)
        })
}

fn assign_slice_args() -> impl Strategy<Value = (String, WidthInt, WidthInt, Word)> {
    slice_args().prop_flat_map(|(bits, start, stop)| {
        let new = any::<Word>().prop_map(move |v| v & mask(stop - start));
        (Just(bits), Just(start), Just(stop), new)
    })
}

fn shift_args() -> impl Strategy<Value = (String, WidthInt)> {
    bit_str_arg().prop_flat_map(|bits: String| {
        let width = bits.len() as WidthInt;
        (Just(bits), 0..(width + 10))
    })
}

//////////////////////////
// Unit Tests
//////////////////////////

#[test]
fn do_test_is_negative_regressions() {
    do_test_is_negative("1");
    do_test_is_negative("0");
    do_test_is_negative(&format!("1{}", "0".repeat(127)));
}

#[test]
fn test_slice_regressions() {
    do_test_slice("101", 0, 3);
    do_test_slice("1100", 2, 4);
    do_test_slice(&"1".repeat(128), 127, 128);
}

#[test]
fn test_assign_slice_rejects_wide_values() {
    let mut value = from_bit_str("0000");
    assert!(matches!(
        value.assign_slice(1..3, 4),
        Err(Error::ValueTooWideForSlice { needed: 3, .. })
    ));
    assert_eq!(value.as_unsigned(), 0);
    assert!(matches!(
        value.assign_slice(3..3, 0),
        Err(Error::InvalidSlice { .. })
    ));
    assert!(matches!(
        value.assign_slice(2..5, 0),
        Err(Error::InvalidSlice { .. })
    ));
}

#[test]
fn test_shift_regressions() {
    do_test_shift_left("0110", 4);
    do_test_shift_right("0110", 5);
    do_test_shift_left("1", 0);
}

#[test]
fn test_sign_extend_regressions() {
    do_test_sign_ext("1", 1);
    do_test_sign_ext("0", 0);
    do_test_sign_ext("0111", 0);
    // -1 cannot be expressed by the range check of a 1-bit value
    let one = from_bit_str("1");
    assert!(matches!(
        one.sign_extend(1),
        Err(Error::OutOfRange { width: 1, needed: 2, .. })
    ));
}

#[test]
fn test_concat_three() {
    let parts = [from_bit_str("1"), from_bit_str("01"), from_bit_str("110")];
    let res = concat(&parts).unwrap();
    assert_eq!(res.width(), 6);
    assert_eq!(to_bit_str(&res), "101110");
}

#[test]
fn test_reductions() {
    assert_eq!(reduce_and(&from_bit_str("111")).as_unsigned(), 1);
    assert_eq!(reduce_and(&from_bit_str("101")).as_unsigned(), 0);
    assert_eq!(reduce_or(&from_bit_str("000")).as_unsigned(), 0);
    assert_eq!(reduce_or(&from_bit_str("010")).as_unsigned(), 1);
    assert_eq!(reduce_xor(&from_bit_str("011")).as_unsigned(), 0);
    assert_eq!(reduce_xor(&from_bit_str("111")).as_unsigned(), 1);
}

//////////////////////////
// Random Tests
//////////////////////////

proptest! {
    #![proptest_config(ProptestConfig::with_cases(5000))]

    #[test]
    fn test_is_negative(a in bit_str_arg()) {
        do_test_is_negative(&a);
    }

    #[test]
    fn test_get_bit(a in bit_str_arg()) {
        do_test_get_bit(&a);
    }

    #[test]
    fn test_concat(a in short_bit_str_arg(), b in short_bit_str_arg()) {
        do_test_concat(&a, &b);
    }

    #[test]
    fn test_slice((s, start, stop) in slice_args()) {
        do_test_slice(&s, start, stop);
    }

    #[test]
    fn test_assign_slice((s, start, stop, new) in assign_slice_args()) {
        do_test_assign_slice(&s, start, stop, new);
    }

    #[test]
    fn test_shift_right((s, by) in shift_args()) {
        do_test_shift_right(&s, by);
    }

    #[test]
    fn test_shift_left((s, by) in shift_args()) {
        do_test_shift_left(&s, by);
    }

    #[test]
    fn test_zero_extend(s in short_bit_str_arg(), by in 0..(64 as WidthInt)) {
        do_test_zero_ext(&s, by);
    }

    #[test]
    fn test_sign_extend(s in short_bit_str_arg(), by in 1..(64 as WidthInt)) {
        do_test_sign_ext(&s, by);
    }
}
