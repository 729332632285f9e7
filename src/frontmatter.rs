//! YAML front-matter removal.
//!
//! Registry documentation files are markdown prefixed with a YAML metadata
//! block delimited by `---` lines. The block is stripped before rendering.

/// Remove a leading YAML front-matter block from `text`.
///
/// Leading blank lines are skipped; if the first non-empty line is a
/// standalone `---`, everything up to and including the next standalone
/// `---` line is removed. Without delimiters the input is returned trimmed,
/// otherwise unchanged.
pub fn strip_front_matter(text: &str) -> String {
    let mut lines = text.lines().enumerate();

    let opener = lines.find(|(_, line)| !line.trim().is_empty());
    match opener {
        Some((_, line)) if line.trim() == "---" => {
            if let Some((end, _)) = lines.find(|(_, line)| line.trim() == "---") {
                text.lines()
                    .skip(end + 1)
                    .collect::<Vec<_>>()
                    .join("\n")
                    .trim()
                    .to_string()
            } else {
                // Unterminated block: treat the opener as ordinary content.
                text.trim().to_string()
            }
        }
        _ => text.trim().to_string(),
    }
}
