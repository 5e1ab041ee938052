use num_rational::Ratio;

/// Reflects `position` about the center of a view holding `len` elements.
///
/// The center `(len - 1) / 2` is kept as an exact fraction, so for even
/// lengths it falls between two elements and both parities mirror the same
/// way. The two out-of-bounds positions swap: `len` becomes `-1` and `-1`
/// becomes `len`.
pub(crate) fn mirror(position: i128, len: usize) -> i128 {
    let middle = Ratio::new(len as i128 - 1, 2);
    let reflected = middle - (Ratio::from_integer(position) - middle);
    // 2 * middle is always the integer len - 1.
    debug_assert!(reflected.is_integer());
    reflected.to_integer()
}
