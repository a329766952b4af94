/// Split free-form text into trimmed, non-empty lines.
pub fn split_non_empty_lines(text: &str) -> Vec<String> {
    text.lines()
        .map(str::trim)
        .filter(|l| !l.is_empty())
        .map(str::to_string)
        .collect()
}

/// Compose an agent's final rule list.
///
/// Order is fixed: `[language_rule, ...global lines, ...declared]`.
/// Repeated strings across sources are kept.
pub fn compose_rules(
    declared: &[String],
    language_rule: &str,
    global_rules: Option<&str>,
) -> Vec<String> {
    let global = global_rules.map(split_non_empty_lines).unwrap_or_default();
    let mut rules = Vec::with_capacity(1 + global.len() + declared.len());
    rules.push(language_rule.to_string());
    rules.extend(global);
    rules.extend(declared.iter().cloned());
    rules
}

/// Join several optional rule texts into one global rules text.
///
/// Returns `None` when every part is absent or blank.
pub fn join_global_rules<'a>(parts: impl IntoIterator<Item = &'a str>) -> Option<String> {
    let lines: Vec<String> = parts
        .into_iter()
        .flat_map(split_non_empty_lines)
        .collect();
    if lines.is_empty() {
        None
    } else {
        Some(lines.join("\n"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::locale::{language_rule, resolve_locale, Locale};

    fn strings(items: &[&str]) -> Vec<String> {
        items.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn minimal_agent_gets_only_language_rule() {
        let rules = compose_rules(&[], language_rule(Locale::En), None);
        assert_eq!(rules, strings(&["Always reply in English unless told otherwise."]));
    }

    #[test]
    fn global_then_declared_order() {
        let lang = language_rule(resolve_locale("pt_br"));
        let rules = compose_rules(
            &strings(&["Use tabs"]),
            lang,
            Some("Use semicolons\nNo console logs"),
        );
        assert_eq!(
            rules,
            strings(&[lang, "Use semicolons", "No console logs", "Use tabs"])
        );
    }

    #[test]
    fn blank_global_lines_are_dropped_and_trimmed() {
        let rules = compose_rules(&[], "lang", Some("\n  first  \n\n\t\nsecond\r\n"));
        assert_eq!(rules, strings(&["lang", "first", "second"]));
    }

    #[test]
    fn duplicates_across_sources_are_kept() {
        let rules = compose_rules(&strings(&["Use tabs"]), "lang", Some("Use tabs"));
        assert_eq!(rules, strings(&["lang", "Use tabs", "Use tabs"]));
    }

    #[test]
    fn language_rule_is_always_first() {
        for locale in Locale::all() {
            let lang = language_rule(*locale);
            let rules = compose_rules(&strings(&["x"]), lang, Some("y"));
            assert_eq!(rules[0], lang);
        }
    }

    #[test]
    fn join_global_rules_merges_parts() {
        assert_eq!(
            join_global_rules(["a\n\nb", "", "c"]),
            Some("a\nb\nc".to_string())
        );
        assert_eq!(join_global_rules(["  ", ""]), None);
    }
}
