/// Delimiter scheme for [`join_sequence`].
///
/// `repeated` follows every element except the last `closing.len()`, which
/// take the closing delimiters in order. There is always at least one
/// delimiter.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Delimiters<'a> {
    repeated: &'a str,
    closing: &'a [&'a str],
}

impl<'a> Delimiters<'a> {
    pub const fn new(repeated: &'a str, closing: &'a [&'a str]) -> Self {
        Self { repeated, closing }
    }

    /// Builds a scheme from a flat list such as `[", ", " and ", "."]`.
    pub fn from_slice(delimiters: &'a [&'a str]) -> Option<Self> {
        let (repeated, closing) = delimiters.split_first()?;
        Some(Self {
            repeated: *repeated,
            closing,
        })
    }

    fn for_position(&self, index: usize, len: usize) -> &'a str {
        let from_end = len - 1 - index;
        if from_end < self.closing.len() {
            self.closing[self.closing.len() - 1 - from_end]
        } else {
            self.repeated
        }
    }
}

/// Joins `elements` into prose, each element immediately followed by its
/// delimiter.
///
/// Closing delimiters are aligned with the end of the list, so the last
/// element always takes the last delimiter even when there are fewer
/// elements than closing delimiters.
pub fn join_sequence<S: AsRef<str>>(delimiters: &Delimiters<'_>, elements: &[S]) -> String {
    let len = elements.len();
    let mut joined = String::new();
    for (index, element) in elements.iter().enumerate() {
        joined.push_str(element.as_ref());
        joined.push_str(delimiters.for_position(index, len));
    }
    joined
}
