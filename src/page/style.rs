/// Inline `style` attribute as an ordered list of declarations.
///
/// Setting a property replaces an existing declaration of the same name in
/// place and leaves every other declaration untouched.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StyleDeclaration {
    entries: Vec<(String, String)>,
}

impl StyleDeclaration {
    pub fn parse(style: &str) -> Self {
        let entries = split_declarations(style)
            .into_iter()
            .filter_map(|decl| {
                let (name, value) = decl.split_once(':')?;
                let name = name.trim();
                let value = value.trim();
                if name.is_empty() {
                    return None;
                }
                Some((name.to_string(), value.to_string()))
            })
            .collect();

        Self { entries }
    }

    pub fn get(&self, name: &str) -> Option<&str> {
        self.entries
            .iter()
            .find(|(n, _)| n == name)
            .map(|(_, v)| v.as_str())
    }

    /// Sets `name` to `value`. Returns `false` and leaves the declaration
    /// unchanged when the name is not a property name or the value would
    /// spill into neighbouring declarations.
    pub fn set(&mut self, name: &str, value: &str) -> bool {
        let value = value.trim();
        if !is_property_name(name) || !is_contained_value(value) {
            return false;
        }

        match self.entries.iter_mut().find(|(n, _)| n == name) {
            Some(entry) => entry.1 = value.to_string(),
            None => self.entries.push((name.to_string(), value.to_string())),
        }
        true
    }

    pub fn remove(&mut self, name: &str) -> Option<String> {
        let index = self.entries.iter().position(|(n, _)| n == name)?;
        Some(self.entries.remove(index).1)
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl std::fmt::Display for StyleDeclaration {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for (i, (name, value)) in self.entries.iter().enumerate() {
            if i > 0 {
                f.write_str(" ")?;
            }
            write!(f, "{}: {};", name, value)?;
        }
        Ok(())
    }
}

/// Splits on `;` outside of quotes and parentheses, so values such as
/// `url('data:image/png;base64,...')` survive intact.
fn split_declarations(style: &str) -> Vec<&str> {
    let mut parts = Vec::new();
    let mut depth = 0usize;
    let mut quote: Option<char> = None;
    let mut escaped = false;
    let mut start = 0;

    for (i, c) in style.char_indices() {
        if escaped {
            escaped = false;
            continue;
        }
        match (quote, c) {
            (_, '\\') => escaped = true,
            (Some(q), c) if c == q => quote = None,
            (Some(_), _) => {}
            (None, '\'' | '"') => quote = Some(c),
            (None, '(') => depth += 1,
            (None, ')') => depth = depth.saturating_sub(1),
            (None, ';') if depth == 0 => {
                parts.push(&style[start..i]);
                start = i + 1;
            }
            _ => {}
        }
    }
    parts.push(&style[start..]);

    parts.into_iter().filter(|p| !p.trim().is_empty()).collect()
}

/// A custom property (`--name`) or a plain CSS identifier.
fn is_property_name(name: &str) -> bool {
    let ident_char = |c: char| c.is_ascii_alphanumeric() || c == '-' || c == '_' || !c.is_ascii();

    if let Some(custom) = name.strip_prefix("--") {
        return !custom.is_empty() && custom.chars().all(ident_char);
    }

    let rest = name.strip_prefix('-').unwrap_or(name);
    match rest.chars().next() {
        Some(first) if first.is_ascii_alphabetic() || first == '_' || !first.is_ascii() => {
            rest.chars().all(ident_char)
        }
        _ => false,
    }
}

/// A value is contained when it has no `;` outside quotes and parentheses,
/// no braces outside quotes, and every quote and parenthesis it opens is
/// closed again.
fn is_contained_value(value: &str) -> bool {
    if value.is_empty() {
        return false;
    }

    let mut depth = 0usize;
    let mut quote: Option<char> = None;
    let mut escaped = false;

    for c in value.chars() {
        if escaped {
            escaped = false;
            continue;
        }
        match (quote, c) {
            (_, '\\') => escaped = true,
            (Some(q), c) if c == q => quote = None,
            (Some(_), _) => {}
            (None, '\'' | '"') => quote = Some(c),
            (None, '(') => depth += 1,
            (None, ')') => match depth.checked_sub(1) {
                Some(d) => depth = d,
                None => return false,
            },
            (None, '{' | '}') => return false,
            (None, ';') if depth == 0 => return false,
            _ => {}
        }
    }

    quote.is_none() && depth == 0 && !escaped
}

/// CSS `url('...')` value with quotes and backslashes escaped.
pub fn css_url(url: &str) -> String {
    let escaped = url
        .replace('\\', "\\\\")
        .replace('\'', "\\'")
        .replace('\n', "\\a ");
    format!("url('{}')", escaped)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_and_serialize() {
        let style = StyleDeclaration::parse("color: red;  --radius:4px ;");
        assert_eq!(style.get("color"), Some("red"));
        assert_eq!(style.get("--radius"), Some("4px"));
        assert_eq!(style.to_string(), "color: red; --radius: 4px;");
    }

    #[test]
    fn test_set_replaces_in_place() {
        let mut style = StyleDeclaration::parse("--color-primary: blue; --font-body: serif");
        style.set("--color-primary", "#ff0000");
        assert_eq!(
            style.to_string(),
            "--color-primary: #ff0000; --font-body: serif;"
        );
    }

    #[test]
    fn test_semicolons_inside_urls() {
        let style = StyleDeclaration::parse(
            "background-image: url('data:image/png;base64,AAAA'); display: block",
        );
        assert_eq!(
            style.get("background-image"),
            Some("url('data:image/png;base64,AAAA')")
        );
        assert_eq!(style.get("display"), Some("block"));
    }

    #[test]
    fn test_remove() {
        let mut style = StyleDeclaration::parse("display: none");
        assert_eq!(style.remove("display").as_deref(), Some("none"));
        assert!(style.is_empty());
        assert_eq!(style.remove("display"), None);
    }

    #[test]
    fn test_set_rejects_values_that_add_declarations() {
        let mut style = StyleDeclaration::parse("color: red");

        assert!(!style.set("--color-primary", "#f00; display: none"));
        assert!(!style.set("--color-primary", "red} body{color:blue"));
        assert!(!style.set("--font-body", "'Lato, sans-serif"));
        assert!(!style.set("--shadow", "rgba(0, 0, 0"));
        assert!(!style.set("--radius", "  "));

        assert_eq!(style.to_string(), "color: red;");
        assert_eq!(style.get("display"), None);
    }

    #[test]
    fn test_set_rejects_bad_property_names() {
        let mut style = StyleDeclaration::default();

        assert!(!style.set("--color-main color", "red"));
        assert!(!style.set("--", "red"));
        assert!(!style.set("color:red;display", "none"));
        assert!(!style.set("1color", "red"));
        assert!(style.is_empty());

        assert!(style.set("--color-accent_2", "gold"));
        assert!(style.set("background-image", "url('data:image/png;base64,AAAA')"));
        assert!(style.set("--font-heading", "'Playfair Display', serif"));
    }

    #[test]
    fn test_css_url_escapes_quotes() {
        assert_eq!(css_url("/img/chef's.jpg"), r"url('/img/chef\'s.jpg')");
    }
}
