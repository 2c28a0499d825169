use regex::Regex;

/// Alternation of the supported calling codes, in classification priority
/// order (Czech first, Austria last).
const CALLING_CODES: &str = "420|49|48|31|353|972|43";

/// Descriptive tokens that show up around numbers in order notes (Czech and
/// German booking annotations, price markers, separators). Deleted wholesale
/// before lexical cleanup.
const NOISE_WORDS: &str = r"(?i)checkyeti|osoba|\bč\.p\.|privátní|výuka|děda|instruktorka|telefoní číslo|=|let|cena|\bhod\.|kč|zimmer nr|jezdí|během|zdarma|platí|rental|,";

/// All extraction and normalization regexes, compiled once. Held behind a
/// `LazyLock` in the parent module.
pub(crate) struct ScanRegexps {
    /// See [`NOISE_WORDS`].
    pub noise_words: Regex,

    /// Everything that is not a digit, `+`, whitespace or hyphen. Hyphens are
    /// kept at this stage; a hyphen-grouped domestic number that was not
    /// space-grouped keeps them and is surfaced as invalid for review rather
    /// than silently repaired.
    pub non_number_chars: Regex,

    /// Whitespace runs, deleted after the character filter.
    pub whitespace: Regex,

    /// Note entries are separated by comma, semicolon or newline.
    pub part_separator: Regex,

    pub has_digit: Regex,

    /// Domestic heuristic: a 9-digit run starting with 6 or 7, optionally
    /// grouped 3-3-3 by spaces or hyphens, delimited by non-digits or the
    /// part boundary. Group 1 is the number itself.
    pub domestic: Regex,

    /// International formats in priority order: `+`-prefixed, `00`-prefixed,
    /// bare calling-code prefix. Matches overlap with the domestic heuristic
    /// on purpose; duplicates are removed by exact string equality only.
    pub international: [Regex; 3],

    /// Redundant zeros between a calling code and the national number,
    /// with the replacement that consumes them.
    pub redundant_zeros: [(Regex, &'static str); 3],
}

impl ScanRegexps {
    pub fn new() -> Self {
        Self {
            noise_words: Regex::new(NOISE_WORDS).unwrap(),
            non_number_chars: Regex::new(r"[^\d+\s-]").unwrap(),
            whitespace: Regex::new(r"\s+").unwrap(),
            part_separator: Regex::new(r"[,;\n]").unwrap(),
            has_digit: Regex::new(r"\d").unwrap(),
            domestic: Regex::new(
                r"(?:^|[^\d])([67][0-9]{2}[\s-]?[0-9]{3}[\s-]?[0-9]{3})(?:$|[^\d])",
            )
            .unwrap(),
            international: [
                Regex::new(&format!(r"\+\s*(?:{CALLING_CODES})[0-9\s-]{{8,}}")).unwrap(),
                Regex::new(&format!(r"00\s*(?:{CALLING_CODES})[0-9\s-]{{8,}}")).unwrap(),
                Regex::new(&format!(
                    r"(?:^|[^\d])(?:{CALLING_CODES})[0-9\s-]{{8,}}(?:$|[^\d])"
                ))
                .unwrap(),
            ],
            redundant_zeros: [
                (Regex::new(r"^\+490+").unwrap(), "+49"),
                (Regex::new(r"^\+480+").unwrap(), "+48"),
                (Regex::new(r"^\+4200+").unwrap(), "+420"),
            ],
        }
    }
}
