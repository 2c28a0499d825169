use super::SCAN_REGEXPS;

/// Lexical cleanup of a candidate substring: delete the known descriptive
/// noise tokens, drop every character that is not a digit, `+`, whitespace or
/// hyphen, then delete the remaining whitespace. Purely textual; no
/// validation happens here.
pub fn normalize_candidate(raw: &str) -> String {
    let regexps = &*SCAN_REGEXPS;
    let scrubbed = regexps.noise_words.replace_all(raw, "");
    let kept = regexps.non_number_chars.replace_all(scrubbed.trim(), "");
    regexps.whitespace.replace_all(&kept, "").into_owned()
}
