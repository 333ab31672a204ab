//! Natural ordering for file names.
//!
//! `img2.png` sorts before `img10.png`: embedded digit runs compare by
//! numeric magnitude, letters compare ASCII-case-insensitively, and a
//! digit always sorts before a letter at the same position.

use std::cmp::Ordering;

/// Compares two path strings in natural order.
///
/// The relation is a strict weak ordering, usable directly with
/// [`slice::sort_by`]:
/// - the empty string sorts before everything else,
/// - at each position, a digit sorts before a non-digit,
/// - non-digit positions compare ASCII-case-insensitively,
/// - digit runs are parsed as maximal decimal integers and compared by
///   magnitude; equal values (`007` vs `7`) are decided by whatever
///   follows the runs.
///
/// Digit runs accumulate into a `u64` with saturating arithmetic: runs
/// whose value exceeds `u64::MAX` all compare equal at the numeric step
/// and fall through to the remainder comparison. Inputs are scanned
/// iteratively, so arbitrarily long runs cannot exhaust the stack.
///
/// # Examples
///
/// ```
/// use std::cmp::Ordering;
/// use imgfs_engine::compare_natural;
///
/// assert_eq!(compare_natural("file2.png", "file10.png"), Ordering::Less);
/// assert_eq!(compare_natural("IMG_7.png", "img_7.PNG"), Ordering::Equal);
/// ```
pub fn compare_natural(a: &str, b: &str) -> Ordering {
    let mut a = a.as_bytes();
    let mut b = b.as_bytes();

    loop {
        let (ca, cb) = match (a.first(), b.first()) {
            (None, None) => return Ordering::Equal,
            (None, Some(_)) => return Ordering::Less,
            (Some(_), None) => return Ordering::Greater,
            (Some(&ca), Some(&cb)) => (ca, cb),
        };

        match (ca.is_ascii_digit(), cb.is_ascii_digit()) {
            // Numbers sort before letters at the same position
            (true, false) => return Ordering::Less,
            (false, true) => return Ordering::Greater,
            (false, false) => {
                let ua = ca.to_ascii_uppercase();
                let ub = cb.to_ascii_uppercase();
                if ua != ub {
                    return ua.cmp(&ub);
                }
                a = &a[1..];
                b = &b[1..];
            }
            (true, true) => {
                let (va, rest_a) = take_digit_run(a);
                let (vb, rest_b) = take_digit_run(b);
                if va != vb {
                    return va.cmp(&vb);
                }
                // Equal values: skip both runs entirely and continue with
                // whatever follows them.
                a = rest_a;
                b = rest_b;
            }
        }
    }
}

/// The strict "less than" relation of [`compare_natural`].
pub fn natural_less(a: &str, b: &str) -> bool {
    compare_natural(a, b) == Ordering::Less
}

/// Parses the maximal leading decimal run, saturating at `u64::MAX`.
fn take_digit_run(s: &[u8]) -> (u64, &[u8]) {
    let mut value: u64 = 0;
    let mut idx = 0;
    while idx < s.len() && s[idx].is_ascii_digit() {
        value = value
            .saturating_mul(10)
            .saturating_add(u64::from(s[idx] - b'0'));
        idx += 1;
    }
    (value, &s[idx..])
}
