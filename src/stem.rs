//! Per-language token normalization via suffix stripping.
//!
//! Rules are table-driven: a language registers a list of trailing-pattern
//! regexes applied in order to the token base. Languages without an entry
//! get the identity function, and adding a language never touches the
//! scorer. Patterns are anchored at the end and only match fixed trailing
//! substrings, so a stem can never be eaten down to nothing by accident.

use once_cell::sync::Lazy;
use regex::Regex;
use std::collections::HashMap;

static SUFFIX_RULES: Lazy<HashMap<&'static str, Vec<Regex>>> = Lazy::new(|| {
    let mut rules = HashMap::new();
    rules.insert(
        "tr",
        vec![
            // past-tense / copula: kötüydü -> kötü, iyiydi -> iyi
            Regex::new(r"y[dt][iuü]$").expect("tr copula rule"),
            // simple plural: kullanıcılar -> kullanıcı
            Regex::new(r"(ler|lar)$").expect("tr plural rule"),
        ],
    );
    rules
});

/// Apply the language's suffix rules to a token base.
///
/// `lang` is expected in canonical (lowercased) form. For the base of a
/// negated token the caller passes the base alone, so the negation flag
/// survives stemming untouched.
pub fn normalize_base(base: &str, lang: &str) -> String {
    let Some(rules) = SUFFIX_RULES.get(lang) else {
        return base.to_string();
    };
    let mut stem = base.to_string();
    for re in rules {
        stem = re.replace(&stem, "").into_owned();
    }
    stem
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn identity_for_default_language() {
        assert_eq!(normalize_base("running", "en"), "running");
        assert_eq!(normalize_base("kötüydü", "en"), "kötüydü");
    }

    #[test]
    fn turkish_copula_suffix_stripped() {
        assert_eq!(normalize_base("kötüydü", "tr"), "kötü");
        assert_eq!(normalize_base("iyiydi", "tr"), "iyi");
    }

    #[test]
    fn turkish_plural_suffix_stripped() {
        assert_eq!(normalize_base("kullanıcılar", "tr"), "kullanıcı");
        assert_eq!(normalize_base("evler", "tr"), "ev");
    }

    #[test]
    fn non_matching_tokens_pass_through() {
        assert_eq!(normalize_base("harika", "tr"), "harika");
        assert_eq!(normalize_base("temiz", "tr"), "temiz");
    }

    #[test]
    fn unregistered_language_is_identity() {
        assert_eq!(normalize_base("palabras", "es"), "palabras");
    }
}
