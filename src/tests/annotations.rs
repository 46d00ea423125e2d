use pretty_assertions::assert_eq;

use super::*;

#[test]
fn single_word_lemma_and_morph() {
    // One merged span per annotated word: lemma first, morph appended
    // after it, no marker text left over.
    assert_eq!(
        render_keyed(&KJV, "k", "word<WH1234><WT5678>"),
        "<span lemma=\"H1234\" morph=\"5678\">word</span>",
    );
}

#[test]
fn same_kind_values_accumulate_in_order() {
    assert_eq!(
        render_keyed(&KJV, "k", "word<WH1234><WH5678>"),
        "<span lemma=\"H1234|H5678\">word</span>",
    );
}

#[test]
fn encounter_order_decides_attribute_order() {
    assert_eq!(
        render_keyed(&KJV, "k", "word<WT5678><WH1234>"),
        "<span morph=\"5678\" lemma=\"H1234\">word</span>",
    );
}

#[test]
fn greek_and_hebrew_keep_their_kind_letter() {
    assert_eq!(
        render_keyed(&KJV, "k", "logos<WG3056>"),
        "<span lemma=\"G3056\">logos</span>",
    );
    assert_eq!(
        render_keyed(&KJV, "k", "word<WG3056><WH1234><WT5678>"),
        "<span lemma=\"G3056|H1234\" morph=\"5678\">word</span>",
    );
}

#[test]
fn span_covers_the_whole_phrase() {
    assert_eq!(
        render_keyed(&KJV, "Gen 1:1", "Am Anfang<WH07225> schuf<WH01254><WTH8804> Gott<WH0430>"),
        concat!(
            "<span lemma=\"H07225\">Am Anfang</span> ",
            "<span lemma=\"H01254\" morph=\"H8804\">schuf</span> ",
            "<span lemma=\"H0430\">Gott</span>",
        ),
    );
}

#[test]
fn orphan_marker_run_is_dropped() {
    // A run with no antecedent word gets no span and no guess.
    assert_eq!(
        render_keyed(&KJV, "k", "<WH1234> text"),
        "<WH1234> text",
    );
    assert_eq!(
        render_keyed(&KJV, "k", ", <WT5678>end"),
        ", <WT5678>end",
    );
}

#[test]
fn separator_inside_a_run_survives() {
    // " ," sits between the two markers; it stays behind the closing tag.
    assert_eq!(
        render_keyed(&KJV, "k", "word<WH1> ,<WT2>"),
        "<span lemma=\"H1\" morph=\"2\">word</span> ,",
    );
}

#[test]
fn punct_and_space_break_a_run_apart() {
    // ", <WT2>" is not adjacent to the first run, and on its own it has no
    // antecedent word, so the morph marker stays literal.
    assert_eq!(
        render_keyed(&KJV, "k", "word<WH1>, <WT2>"),
        "<span lemma=\"H1\">word</span>, <WT2>",
    );
}

#[test]
fn leading_punctuation_stays_inside_the_span() {
    assert_eq!(
        render_keyed(&KJV, "k", "earth.<WH0776>"),
        "<span lemma=\"H0776\">earth.</span>",
    );
}

#[test]
fn empty_morph_marker_stops_its_run() {
    // A bare <WT> means "no entry for this word".
    assert_eq!(
        render_keyed(&KJV, "k", "und<WT> Erde<WH0776>"),
        "und<WT> <span lemma=\"H0776\">Erde</span>",
    );
    // As a second marker it terminates merging after the first.
    assert_eq!(
        render_keyed(&KJV, "k", "word<WH1><WT>"),
        "<span lemma=\"H1\">word</span><WT>",
    );
}

#[test]
fn capability_gate_skips_modules_without_linkage() {
    // NOTES declares no lemma/morph/Strong's capability; the scanned
    // buffer comes back untouched even though it matches the pattern.
    assert_eq!(
        render_keyed(&NOTES, "k", "word<WH1234><WT5678>"),
        "word<WH1234><WT5678>",
    );
}

#[test]
fn missing_module_annotates_unconditionally() {
    assert_gbf("word<WH1234>", "<span lemma=\"H1234\">word</span>");
}

#[test]
fn annotate_off_skips_the_merge_pass() {
    let mut options = Options::default();
    options.annotate = false;
    assert_eq!(
        Renderer::new(&options).render_entry("word<WH1234>", Some(&KJV), None),
        "word<WH1234>",
    );
}

#[test]
fn markers_after_substituted_markup() {
    // By merge time the simple tokens are already substituted; the span
    // walk skips punctuation and whitespace but stops at markup.
    assert_eq!(
        render_keyed(&KJV, "k", "<FI>created<Fi><WH1254>"),
        "<span lemma=\"H1254\"><span class=\"italic\">created</span></span>",
    );
}
