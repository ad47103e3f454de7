//! Terminal output sanitization
//!
//! Names, titles and links come from an externally produced dataset. Before they are printed
//! by the CLI or drawn by the browser, escape sequences and control characters are removed so
//! a record cannot move the cursor, recolor the terminal or set its title.

/// Remove ANSI escape sequences and control characters from `text`.
///
/// Handles CSI sequences (`ESC [ ... final`), OSC sequences (`ESC ] ... BEL` or `ESC ] ... ESC \`)
/// and two-character escapes. Tabs are kept; newlines and carriage returns become spaces
/// because every caller renders single-line cells.
///
/// ```
/// use alumni_explorer::utils::sanitize_for_terminal;
///
/// assert_eq!(sanitize_for_terminal("\x1b[31mAcme\x1b[0m Corp"), "Acme Corp");
/// ```
pub fn sanitize_for_terminal(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    let mut chars = text.chars().peekable();

    while let Some(ch) = chars.next() {
        match ch {
            '\x1b' => match chars.next() {
                Some('[') => {
                    // CSI: parameters and intermediates until a final byte in '@'..='~'
                    for next in chars.by_ref() {
                        if ('@'..='~').contains(&next) {
                            break;
                        }
                    }
                }
                Some(']') => {
                    // OSC: terminated by BEL or ST (ESC \)
                    while let Some(next) = chars.next() {
                        if next == '\x07' {
                            break;
                        }
                        if next == '\x1b' && chars.peek() == Some(&'\\') {
                            chars.next();
                            break;
                        }
                    }
                }
                // Two-character escape or a lone trailing ESC
                _ => {}
            },
            '\n' | '\r' => out.push(' '),
            '\t' => out.push(ch),
            c if c.is_control() => {}
            c => out.push(c),
        }
    }

    out
}
