//! Period anchor detection.

use super::patterns::{ANCHOR_LABEL, ANCHOR_PATTERN, PERIOD_CONTINUATION};

/// A resolved period anchor.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Anchor {
    /// Period in `MM.YYYY` form.
    pub period: String,
    /// Line the window search starts from. For a split anchor this is the
    /// line carrying the period value, not the label.
    pub line: usize,
}

/// Check whether a period anchor starts at `index`.
///
/// The label and the period are usually on one line, but the text rendering
/// sometimes breaks between them; in that case the next line must start with
/// the period value.
pub fn find_anchor<S: AsRef<str>>(lines: &[S], index: usize) -> Option<Anchor> {
    let line = lines.get(index)?.as_ref();
    if !line.contains(ANCHOR_LABEL) {
        return None;
    }

    if let Some(caps) = ANCHOR_PATTERN.captures(line) {
        return Some(Anchor {
            period: format!("{}.{}", &caps[1], &caps[2]),
            line: index,
        });
    }

    let next = lines.get(index + 1)?.as_ref();
    PERIOD_CONTINUATION.captures(next).map(|caps| Anchor {
        period: format!("{}.{}", &caps[1], &caps[2]),
        line: index + 1,
    })
}
