//! The annotation merge pass: second pass over a scanned GBF buffer.
//!
//! The scan pass re-emits word-linkage markers (`<WH…>`, `<WG…>`, `<WT…>`)
//! literally; a run of one or more of them trails the word they annotate,
//! separated only by `.,;:` and whitespace:
//!
//! ```text
//! Am Anfang<WH07225> schuf<WH01254><WTH8804> Gott<WH0430>
//! ```
//!
//! This pass splits the buffer into segments, each ending at the end of a
//! maximal marker run, and merges every run onto the phrase before it as a
//! single `<span lemma="..." morph="...">` wrapper. Multiple same-kind
//! values join with `|` in encounter order. This is a best-effort pass over
//! irregular legacy content: a run with no word before it is left alone,
//! and an empty-valued marker stops merging for its run only. It never
//! fails.

use smallvec::SmallVec;

use crate::strings;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum LinkKind {
    Lemma,
    Morph,
}

impl LinkKind {
    fn attr(self) -> &'static str {
        match self {
            LinkKind::Lemma => "lemma",
            LinkKind::Morph => "morph",
        }
    }
}

#[derive(Debug)]
struct Marker {
    kind: LinkKind,
    /// Merged attribute value: Strong's payloads keep their kind letter
    /// (`<WH01254>` contributes `H01254`), morphology payloads are verbatim.
    value: String,
    /// Byte offset of the opening `<`.
    start: usize,
    /// Byte offset one past the closing `>`.
    end: usize,
}

type Run = SmallVec<[Marker; 3]>;

/// Merges all linkage-marker runs in `buf`. Returns `None` when the buffer
/// contains no marker at all, so the caller can keep the scanned buffer
/// without a copy.
pub(crate) fn merge_linkage(buf: &str) -> Option<String> {
    let first = find_marker(buf, 0)?;

    let mut out = String::with_capacity(buf.len() + 64);
    let mut segment_start = 0;
    let mut next = Some(first);

    while let Some(marker) = next {
        let (run, run_end) = parse_run(buf, marker);
        merge_segment(&buf[segment_start..run_end], segment_start, &run, &mut out);
        segment_start = run_end;
        next = find_marker(buf, run_end);
    }

    // Trailing text after the last run passes through unchanged.
    out.push_str(&buf[segment_start..]);
    Some(out)
}

/// The next linkage marker at or after `from`.
fn find_marker(buf: &str, from: usize) -> Option<Marker> {
    let bytes = buf.as_bytes();
    let matcher = jetscii::bytes!(b'<');

    let mut ix = from;
    while ix < bytes.len() {
        let start = ix + matcher.find(&bytes[ix..])?;
        if let Some(marker) = marker_at(buf, start) {
            return Some(marker);
        }
        ix = start + 1;
    }
    None
}

/// The linkage marker starting exactly at `start`, if any.
fn marker_at(buf: &str, start: usize) -> Option<Marker> {
    let bytes = buf.as_bytes();
    if start + 2 >= bytes.len()
        || bytes[start] != b'<'
        || bytes[start + 1] != b'W'
        || !matches!(bytes[start + 2], b'G' | b'H' | b'T')
    {
        return None;
    }

    let mut end = start + 3;
    while end < bytes.len() && bytes[end] != b'>' {
        end += 1;
    }
    if end == bytes.len() {
        return None;
    }

    let kind_byte = bytes[start + 2];
    let payload = &buf[start + 3..end];
    let (kind, value) = if kind_byte == b'T' {
        (LinkKind::Morph, payload.to_string())
    } else {
        let mut value = String::with_capacity(payload.len() + 1);
        value.push(kind_byte as char);
        value.push_str(payload);
        (LinkKind::Lemma, value)
    };

    Some(Marker {
        kind,
        value,
        start,
        end: end + 1,
    })
}

/// Extends `first` into a maximal run. Adjacent markers may be separated by
/// whitespace and at most one of `.,;:` directly before the next `<`;
/// anything else ends the run. Returns the run and its end offset, past the
/// trailing whitespace.
fn parse_run(buf: &str, first: Marker) -> (Run, usize) {
    let bytes = buf.as_bytes();
    let mut run = Run::new();
    let mut end = first.end;
    run.push(first);

    loop {
        let mut after_space = end;
        while after_space < bytes.len() && strings::is_space(bytes[after_space]) {
            after_space += 1;
        }
        end = after_space;

        let mut candidate = after_space;
        if candidate < bytes.len() && strings::is_run_punct(bytes[candidate]) {
            candidate += 1;
        }
        match marker_at(buf, candidate) {
            Some(marker) => {
                end = marker.end;
                run.push(marker);
            }
            None => break,
        }
    }

    (run, end)
}

/// True when the segment has no antecedent word: ignoring leading
/// whitespace and run punctuation, it starts with a marker.
fn is_orphan_run(segment: &str) -> bool {
    let bytes = segment.as_bytes();
    let mut ix = 0;
    while ix < bytes.len() && (strings::is_space(bytes[ix]) || strings::is_run_punct(bytes[ix])) {
        ix += 1;
    }
    bytes[ix..].starts_with(b"<W")
}

/// Merges one segment's trailing run onto its phrase and appends the result
/// to `out`. Marker offsets in `run` are absolute; `base` is the segment's
/// offset in the full buffer.
fn merge_segment(segment: &str, base: usize, run: &[Marker], out: &mut String) {
    // Linkage with no antecedent word is dropped rather than guessed at.
    if is_orphan_run(segment) {
        out.push_str(segment);
        return;
    }

    // Gather attributes in encounter order; an empty merged value (a bare
    // <WT>, meaning "no entry for this word") stops the merge for this run.
    let mut attrs: SmallVec<[(LinkKind, String); 2]> = SmallVec::new();
    let mut consumed = 0;
    for marker in run {
        if marker.value.is_empty() {
            break;
        }
        match attrs.iter_mut().find(|(kind, _)| *kind == marker.kind) {
            Some((_, values)) => {
                values.push('|');
                values.push_str(&marker.value);
            }
            None => attrs.push((marker.kind, marker.value.clone())),
        }
        consumed += 1;
    }
    if consumed == 0 {
        out.push_str(segment);
        return;
    }

    let first_start = run[0].start - base;

    // The span opens at the first character that can begin a word, so it
    // covers the whole phrase accumulated since the previous run.
    let mut word_start = first_start;
    for (ix, ch) in segment[..first_start].char_indices() {
        if !strings::is_word_boundary(ch) {
            word_start = ix;
            break;
        }
    }

    out.push_str(&segment[..word_start]);
    out.push_str("<span ");
    for (ix, (kind, values)) in attrs.iter().enumerate() {
        if ix > 0 {
            out.push(' ');
        }
        out.push_str(kind.attr());
        out.push_str("=\"");
        out.push_str(values);
        out.push('"');
    }
    out.push('>');
    out.push_str(&segment[word_start..first_start]);
    out.push_str("</span>");

    // Separator text between markers survives; consumed marker text does
    // not. Markers past an empty-valued one stay literal.
    let mut pos = run[0].end - base;
    for (ix, marker) in run.iter().enumerate().skip(1) {
        let (start, end) = (marker.start - base, marker.end - base);
        out.push_str(&segment[pos..start]);
        if ix >= consumed {
            out.push_str(&segment[start..end]);
        }
        pos = end;
    }
    out.push_str(&segment[pos..]);
}
