//! Language identifier resolution.
//!
//! Tools disagree on how they tag languages: mkvmerge and ffprobe use ISO
//! 639-2 codes, mediainfo reports free-form tags (`en`, `en-US`, `English`),
//! and ffprobe/mkvmerge do not agree on whether Chinese is `chi` or `zho`.
//! [`LanguageResolver`] maps all of these onto one canonical 3-letter code.

use std::collections::HashMap;

use serde::Serialize;

use crate::iso639::LANGUAGES;

/// The "undetermined" language sentinel.
pub const UNDETERMINED: &str = "und";

/// One row of the ISO 639 reference table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Language {
    /// ISO 639-3 identifier.
    pub id: &'static str,
    /// ISO 639-2/B bibliographic alias.
    pub part2b: Option<&'static str>,
    /// ISO 639-2/T terminological alias.
    pub part2t: Option<&'static str>,
    /// ISO 639-1 two-letter alias.
    pub part1: Option<&'static str>,
    /// Reference name, alternatives separated by `;`.
    pub name: &'static str,
}

impl Language {
    /// The canonical 3-letter code.
    ///
    /// Matroska tooling writes bibliographic codes, so the bibliographic alias
    /// wins when one exists (`zho` and `chi` both become `chi`).
    pub fn code(&self) -> &'static str {
        self.part2b.unwrap_or(self.id)
    }

    /// The first reference name.
    pub fn display_name(&self) -> &'static str {
        self.names().next().unwrap_or(self.name)
    }

    /// All reference names.
    pub fn names(&self) -> impl Iterator<Item = &'static str> {
        self.name.split(';').map(str::trim).filter(|n| !n.is_empty())
    }
}

impl std::fmt::Display for Language {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} ({})", self.display_name(), self.code())
    }
}

/// Resolves arbitrary language identifiers against a reference table.
///
/// Build one per process and pass it by reference; it holds the lookup
/// indexes and is immutable after construction.
#[derive(Debug, Clone)]
pub struct LanguageResolver {
    table: &'static [Language],
    by_id: HashMap<&'static str, usize>,
    by_part2b: HashMap<&'static str, usize>,
    by_part2t: HashMap<&'static str, usize>,
    by_part1: HashMap<&'static str, usize>,
    by_name: HashMap<String, usize>,
}

impl Default for LanguageResolver {
    fn default() -> Self {
        Self::new()
    }
}

impl LanguageResolver {
    /// Create a resolver over the embedded ISO 639 table.
    pub fn new() -> Self {
        Self::from_table(LANGUAGES)
    }

    /// Create a resolver over a caller-supplied table.
    pub fn from_table(table: &'static [Language]) -> Self {
        let mut resolver = Self {
            table,
            by_id: HashMap::with_capacity(table.len()),
            by_part2b: HashMap::with_capacity(table.len()),
            by_part2t: HashMap::with_capacity(table.len()),
            by_part1: HashMap::with_capacity(table.len()),
            by_name: HashMap::with_capacity(table.len()),
        };

        for (index, language) in table.iter().enumerate() {
            resolver.by_id.entry(language.id).or_insert(index);
            if let Some(code) = language.part2b {
                resolver.by_part2b.entry(code).or_insert(index);
            }
            if let Some(code) = language.part2t {
                resolver.by_part2t.entry(code).or_insert(index);
            }
            if let Some(code) = language.part1 {
                resolver.by_part1.entry(code).or_insert(index);
            }
            for name in language.names() {
                resolver.by_name.entry(name.to_lowercase()).or_insert(index);
            }
        }

        resolver
    }

    /// Number of languages in the table.
    pub fn len(&self) -> usize {
        self.table.len()
    }

    /// Whether the table is empty.
    pub fn is_empty(&self) -> bool {
        self.table.is_empty()
    }

    /// Resolve a language identifier.
    ///
    /// Accepts 2-letter and 3-letter codes, reference names and culture tags
    /// (`en-US`). Returns `None` when nothing matches.
    pub fn resolve(&self, input: &str) -> Option<&Language> {
        let input = input.trim();
        let length = input.chars().count();
        let bytes = input.as_bytes();

        if length > 3 && matches!(bytes.get(2), Some(b'-') | Some(b'_')) {
            return self.resolve(&input[..2]);
        }

        let lower = input.to_lowercase();
        let index = match length {
            0 | 1 => None,
            2 => self.by_part1.get(lower.as_str()).copied(),
            3 => self
                .by_id
                .get(lower.as_str())
                .or_else(|| self.by_part2b.get(lower.as_str()))
                .or_else(|| self.by_part2t.get(lower.as_str()))
                .copied(),
            _ => self.by_name.get(&lower).copied(),
        };

        index.map(|i| &self.table[i])
    }

    /// Resolve to the canonical 3-letter code.
    pub fn resolve_code(&self, input: &str) -> Option<String> {
        self.resolve(input).map(|l| l.code().to_string())
    }

    /// Resolve to the canonical 3-letter code, falling back to `und`.
    pub fn resolve_or_und(&self, input: &str) -> String {
        self.resolve_code(input)
            .unwrap_or_else(|| UNDETERMINED.to_string())
    }
}

/// Check whether `tag` is `prefix` or a subtag of it.
///
/// `en` matches `en`, `en-US` and `en-GB`, but a prefix must end on a subtag
/// boundary: `zh` does not match `zha`. Comparison ignores case.
pub fn is_prefix_match(prefix: &str, tag: &str) -> bool {
    let prefix = prefix.to_lowercase();
    let tag = tag.to_lowercase();

    tag == prefix
        || tag
            .strip_prefix(prefix.as_str())
            .is_some_and(|rest| rest.starts_with('-'))
}

/// Check whether `tag` prefix-matches any of `prefixes`.
pub fn matches_any<I, S>(prefixes: I, tag: &str) -> bool
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    prefixes
        .into_iter()
        .any(|prefix| is_prefix_match(prefix.as_ref(), tag))
}

/// Whether a language value counts as undetermined (empty or `und`).
pub fn is_undetermined(language: &str) -> bool {
    language.is_empty() || language.eq_ignore_ascii_case(UNDETERMINED)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resolve_two_letter() {
        let resolver = LanguageResolver::new();
        assert_eq!(resolver.resolve_code("en").as_deref(), Some("eng"));
        assert_eq!(resolver.resolve_code("FR").as_deref(), Some("fre"));
        assert_eq!(resolver.resolve_code("de").as_deref(), Some("ger"));
        assert_eq!(resolver.resolve_code("xx"), None);
    }

    #[test]
    fn test_resolve_three_letter_aliases() {
        let resolver = LanguageResolver::new();
        assert_eq!(resolver.resolve_code("fra").as_deref(), Some("fre"));
        assert_eq!(resolver.resolve_code("fre").as_deref(), Some("fre"));
        assert_eq!(resolver.resolve_code("deu").as_deref(), Some("ger"));
        assert_eq!(resolver.resolve_code("ces").as_deref(), Some("cze"));
        assert_eq!(resolver.resolve_code("ENG").as_deref(), Some("eng"));
        assert_eq!(resolver.resolve_code("qqq"), None);
    }

    #[test]
    fn test_resolve_less_common_languages() {
        let resolver = LanguageResolver::new();
        assert_eq!(resolver.resolve_code("mi").as_deref(), Some("mao"));
        assert_eq!(resolver.resolve_code("mri").as_deref(), Some("mao"));
        assert_eq!(resolver.resolve_code("Maori").as_deref(), Some("mao"));
        assert_eq!(resolver.resolve_code("haw").as_deref(), Some("haw"));
        assert_eq!(resolver.resolve_code("yo").as_deref(), Some("yor"));
        assert_eq!(resolver.resolve_code("hat").as_deref(), Some("hat"));
        assert_eq!(resolver.resolve_code("xh").as_deref(), Some("xho"));
        assert_eq!(resolver.resolve_code("sme").as_deref(), Some("sme"));
        assert_eq!(resolver.resolve_code("Haitian Creole").as_deref(), Some("hat"));
        assert!(resolver.len() > 480);
    }

    #[test]
    fn test_chinese_aliases_share_code() {
        let resolver = LanguageResolver::new();
        assert_eq!(resolver.resolve_code("zho").as_deref(), Some("chi"));
        assert_eq!(resolver.resolve_code("chi").as_deref(), Some("chi"));
        assert_eq!(resolver.resolve_code("zh").as_deref(), Some("chi"));
        assert_eq!(resolver.resolve_code("zh-Hant").as_deref(), Some("chi"));
    }

    #[test]
    fn test_resolve_culture_tags() {
        let resolver = LanguageResolver::new();
        assert_eq!(resolver.resolve_code("en-US").as_deref(), Some("eng"));
        assert_eq!(resolver.resolve_code("pt_BR").as_deref(), Some("por"));
        assert_eq!(resolver.resolve_code("xx-YY"), None);
    }

    #[test]
    fn test_resolve_names() {
        let resolver = LanguageResolver::new();
        assert_eq!(resolver.resolve_code("English").as_deref(), Some("eng"));
        assert_eq!(resolver.resolve_code("spanish").as_deref(), Some("spa"));
        assert_eq!(resolver.resolve_code("Castilian").as_deref(), Some("spa"));
        assert_eq!(resolver.resolve_code("Klingon"), None);
    }

    #[test]
    fn test_resolve_is_idempotent_for_canonical_codes() {
        let resolver = LanguageResolver::new();
        for language in LANGUAGES {
            let code = language.code();
            assert_eq!(resolver.resolve_code(code).as_deref(), Some(code));
        }
    }

    #[test]
    fn test_resolve_or_und() {
        let resolver = LanguageResolver::new();
        assert_eq!(resolver.resolve_or_und(""), "und");
        assert_eq!(resolver.resolve_or_und("???"), "und");
        assert_eq!(resolver.resolve_or_und("und"), "und");
        assert_eq!(resolver.resolve_or_und("it"), "ita");
    }

    #[test]
    fn test_prefix_match() {
        assert!(is_prefix_match("en", "en-US"));
        assert!(is_prefix_match("en", "en-GB"));
        assert!(is_prefix_match("EN", "en"));
        assert!(!is_prefix_match("zh-Hant", "zh-Hans"));
        assert!(!is_prefix_match("zha", "zh-Hans"));
        assert!(!is_prefix_match("zh", "zha"));
        assert!(!is_prefix_match("en-US", "en"));
    }

    #[test]
    fn test_matches_any() {
        assert!(matches_any(["fr", "en"], "en-CA"));
        assert!(!matches_any(["fr", "de"], "en-CA"));
        assert!(!matches_any(Vec::<String>::new(), "en"));
    }

    #[test]
    fn test_is_undetermined() {
        assert!(is_undetermined(""));
        assert!(is_undetermined("UND"));
        assert!(!is_undetermined("eng"));
    }

    #[test]
    fn test_display() {
        let resolver = LanguageResolver::new();
        let german = resolver.resolve("ger").unwrap();
        assert_eq!(german.to_string(), "German (ger)");
        assert_eq!(german.id, "deu");
    }
}
