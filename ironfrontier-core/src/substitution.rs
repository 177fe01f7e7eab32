//! `{{variable}}` placeholder substitution against a variable context.
//!
//! Substitution is non-recursive: replacement values are copied in as-is
//! and never rescanned for further placeholders. Unresolved placeholders
//! are left literal — that's what lets a quest's stage text carry an
//! unbound `{{target}}` through to the caller (§4.5 binding failures).

use std::collections::HashMap;

pub type Variables = HashMap<String, String>;

pub fn substitute(template: &str, vars: &Variables) -> String {
    let chars: Vec<char> = template.chars().collect();
    let mut out = String::with_capacity(template.len());
    let mut i = 0;
    while i < chars.len() {
        if chars[i] == '{' && chars.get(i + 1) == Some(&'{') {
            if let Some(end) = chars[i + 2..].windows(2).position(|w| w == ['}', '}']) {
                let name: String = chars[i + 2..i + 2 + end].iter().collect();
                match vars.get(&name) {
                    Some(value) => out.push_str(value),
                    None => {
                        out.push_str("{{");
                        out.push_str(&name);
                        out.push_str("}}");
                    }
                }
                i += 2 + end + 2;
                continue;
            }
        }
        out.push(chars[i]);
        i += 1;
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    fn vars(pairs: &[(&str, &str)]) -> Variables {
        pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect()
    }

    #[test]
    fn replaces_known_placeholders() {
        let out = substitute("Howdy, {{name}}.", &vars(&[("name", "Clem")]));
        assert_eq!(out, "Howdy, Clem.");
    }

    #[test]
    fn leaves_unresolved_placeholders_literal() {
        let out = substitute("Find {{target}} near {{location}}.", &vars(&[("location", "the gulch")]));
        assert_eq!(out, "Find {{target}} near the gulch.");
    }

    #[test]
    fn is_not_recursive() {
        let out = substitute("{{a}}", &vars(&[("a", "{{b}}"), ("b", "nope")]));
        assert_eq!(out, "{{b}}");
    }

    #[test]
    fn repeated_placeholder_resolves_every_occurrence() {
        let out = substitute("{{letter}}-{{letter}}", &vars(&[("letter", "Q")]));
        assert_eq!(out, "Q-Q");
    }

    #[test]
    fn leaves_multibyte_literal_text_intact() {
        let out = substitute("{{name}} rode past El Niño's cañon.", &vars(&[("name", "Clem")]));
        assert_eq!(out, "Clem rode past El Niño's cañon.");
    }
}
