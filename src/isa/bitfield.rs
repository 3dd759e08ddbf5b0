//! Bitfield extraction over 32-bit instruction words.

/// Width of an instruction word in bits.
pub const WORD_BITS: u32 = 32;

/// Split `word` into consecutive fields, most significant field first.
///
/// Field 0 occupies the leftmost `widths[0]` bits, field 1 the next
/// `widths[1]` bits, and so on.
///
/// # Panics
///
/// Panics if any width is zero or the widths do not sum to 32. Layouts are
/// fixed per format, so either case is a defect in the caller's table.
#[must_use]
pub fn extract(word: u32, widths: &[u32]) -> Vec<u32> {
    assert!(
        is_valid_layout(widths),
        "field widths must be positive and sum to {WORD_BITS}: {widths:?}"
    );

    let mut remaining = WORD_BITS;
    widths
        .iter()
        .map(|&width| {
            remaining -= width;
            (word >> remaining) & mask(width)
        })
        .collect()
}

/// Concatenate `fields` back into a word, each field truncated to its width.
///
/// # Panics
///
/// Panics under the same conditions as [`extract`], or if the two slices
/// differ in length.
#[must_use]
pub fn compose(fields: &[u32], widths: &[u32]) -> u32 {
    assert!(
        is_valid_layout(widths),
        "field widths must be positive and sum to {WORD_BITS}: {widths:?}"
    );
    assert_eq!(fields.len(), widths.len(), "one value per field width");

    fields.iter().zip(widths).fold(0, |word, (&value, &width)| {
        // A 32-bit wide single field has nothing to its left to shift.
        let shifted = word.checked_shl(width).unwrap_or(0);
        shifted | (value & mask(width))
    })
}

/// Whether `widths` is a usable layout: all positive, summing to 32.
pub(crate) fn is_valid_layout(widths: &[u32]) -> bool {
    let total = widths.iter().try_fold(0u32, |acc, &w| acc.checked_add(w));
    widths.iter().all(|&w| w > 0) && total == Some(WORD_BITS)
}

/// Low-bit mask of `width` ones.
const fn mask(width: u32) -> u32 {
    if width >= WORD_BITS {
        u32::MAX
    } else {
        (1 << width) - 1
    }
}
