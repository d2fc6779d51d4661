/// Escapes characters with special meaning in LaTeX text mode.
pub fn escape(raw: &str) -> String {
    let mut escaped = String::with_capacity(raw.len());
    for ch in raw.chars() {
        match ch {
            '\\' => escaped.push_str(r"\textbackslash{}"),
            '~' => escaped.push_str(r"\textasciitilde{}"),
            '^' => escaped.push_str(r"\textasciicircum{}"),
            '&' | '%' | '$' | '#' | '_' | '{' | '}' => {
                escaped.push('\\');
                escaped.push(ch);
            }
            _ => escaped.push(ch),
        }
    }
    escaped
}

/// Escapes a URL for use as the first argument of `\href`.
pub fn escape_url(raw: &str) -> String {
    let mut escaped = String::with_capacity(raw.len());
    for ch in raw.chars() {
        if matches!(ch, '%' | '#' | '\\') {
            escaped.push('\\');
        }
        escaped.push(ch);
    }
    escaped
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn escapes_special_characters() {
        assert_eq!(escape("R&D 100% C# my_var"), r"R\&D 100\% C\# my\_var");
        assert_eq!(escape(r"a\b"), r"a\textbackslash{}b");
        assert_eq!(escape("~/{x}^2"), r"\textasciitilde{}/\{x\}\textasciicircum{}2");
    }

    #[test]
    fn plain_text_is_untouched() {
        assert_eq!(escape("Flask/Bottle, Pandas/Numpy"), "Flask/Bottle, Pandas/Numpy");
        assert_eq!(escape("Москва"), "Москва");
    }

    #[test]
    fn url_escaping_keeps_underscores() {
        assert_eq!(
            escape_url("https://example.dev/a_b#top"),
            r"https://example.dev/a_b\#top"
        );
    }
}
