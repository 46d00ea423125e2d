//! Byte- and character-class helpers shared by the scanner and the
//! annotation merge pass.

use unicode_categories::UnicodeCategories;

macro_rules! character_set {
    () => {{
        [false; 256]
    }};

    ($value:literal $(,$rest:literal)*) => {{
        const A: &[u8] = $value;
        let mut a = character_set!($($rest),*);
        let mut i = 0;
        while i < A.len() {
            a[A[i] as usize] = true;
            i += 1;
        }
        a
    }}
}

static SPACE: [bool; 256] = character_set!(b" \t\n\x0b\x0c\r");
static RUN_PUNCT: [bool; 256] = character_set!(b".,;:");

/// ASCII whitespace, the separator class of the marker-run grammar.
pub fn is_space(ch: u8) -> bool {
    SPACE[ch as usize]
}

/// The punctuation allowed between adjacent linkage markers.
pub fn is_run_punct(ch: u8) -> bool {
    RUN_PUNCT[ch as usize]
}

/// Characters skipped when looking for the start of the word an annotation
/// span wraps. Unicode classes here: GBF content is not ASCII-only.
pub fn is_word_boundary(c: char) -> bool {
    c.is_whitespace() || c.is_punctuation()
}
