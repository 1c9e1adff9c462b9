//! Placeholder expansion for launch-argument templates.
//!
//! Templates are plain strings containing `%`-prefixed single-character
//! placeholders (`%f`, `%l`, ...). Expansion is one left-to-right pass:
//! substituted values are appended to the output and never re-scanned, so a
//! value that happens to contain `%f` stays literal. Placeholders with no
//! binding are left verbatim, as is a trailing lone `%`.

/// Expand every bound placeholder in `template`.
///
/// `bindings` maps placeholder characters (the char after `%`) to their
/// replacement text. Earlier bindings win if a character is listed twice.
pub fn expand(template: &str, bindings: &[(char, &str)]) -> String {
    let mut out = String::with_capacity(template.len());
    let mut chars = template.chars().peekable();

    while let Some(ch) = chars.next() {
        if ch != '%' {
            out.push(ch);
            continue;
        }

        match chars.peek() {
            Some(&next) => {
                if let Some((_, value)) = bindings.iter().find(|(token, _)| *token == next) {
                    out.push_str(value);
                    chars.next();
                } else {
                    // Unrecognized placeholder: keep the '%' and let the
                    // next char be scanned on its own.
                    out.push('%');
                }
            }
            None => out.push('%'),
        }
    }

    out
}
