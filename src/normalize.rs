// WHY: standalone text transforms applied to every displayed pronunciation
// Pure functions with no state so the composer can call them freely

/// Superscript forms of the digits 0-9, indexed by digit value
const SUPERSCRIPT_DIGITS: [char; 10] = ['⁰', '¹', '²', '³', '⁴', '⁵', '⁶', '⁷', '⁸', '⁹'];
const SUPERSCRIPT_MINUS: char = '⁻';

/// Characters whose Mandarin reading is written in sandhi form, with their citation readings
const SANDHI_CITATIONS: [(char, &str); 2] = [('不', "bù"), ('一', "yī")];

/// Map ASCII digits and `-` to superscript; tone numbers in Jyutping-style
/// romanizations become superscript tone marks
pub fn superscriptify(text: &str) -> String {
    text.chars()
        .map(|ch| match ch {
            '0'..='9' => SUPERSCRIPT_DIGITS[(ch as u32 - '0' as u32) as usize],
            '-' => SUPERSCRIPT_MINUS,
            _ => ch,
        })
        .collect()
}

/// Replace sandhi-affected characters with their citation-tone readings
pub fn remove_sandhi_markers(text: &str) -> String {
    let mut result = String::with_capacity(text.len());
    for ch in text.chars() {
        match SANDHI_CITATIONS.iter().find(|(sandhi, _)| *sandhi == ch) {
            Some((_, citation)) => result.push_str(citation),
            None => result.push(ch),
        }
    }
    result
}

/// Clean a raw comma-separated pronunciation list for display
///
/// Segments containing `=` are glosses rather than pronunciations and are
/// dropped. Remaining segments are superscripted, sandhi-normalized, and
/// joined with `", "`. Segments are not trimmed.
pub fn clean_pronunciation_list(raw: &str) -> String {
    let mut buffer = String::with_capacity(raw.len());
    clean_pronunciation_list_into(raw, &mut buffer);
    buffer
}

/// Clean a pronunciation list into supplied buffer to avoid allocation
/// WHY: the composer appends several lists into one record
pub fn clean_pronunciation_list_into(raw: &str, buffer: &mut String) {
    let mut first = true;
    for segment in raw.split(',').filter(|s| !s.contains('=')) {
        if !first {
            buffer.push_str(", ");
        }
        buffer.push_str(&remove_sandhi_markers(&superscriptify(segment)));
        first = false;
    }
}
