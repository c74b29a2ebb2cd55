//! URL glob matching for include rules.
//!
//! Patterns support exactly two wildcards:
//! - `**` matches any run of characters, including `/`
//! - `*` matches any run of characters except `/`
//!
//! Every other character matches itself literally, and the whole URL must
//! match. Anything beyond these two forms (character classes, negation, `?`)
//! has no special meaning.

use crate::gitconfig::Rule;
use regex::Regex;

/// Translate a glob pattern into an anchored regular expression.
pub fn glob_to_regex(glob: &str) -> String {
    let mut out = String::with_capacity(glob.len() + 8);
    out.push('^');

    let mut chars = glob.chars().peekable();
    while let Some(c) = chars.next() {
        if c == '*' {
            if chars.peek() == Some(&'*') {
                chars.next();
                out.push_str(".*");
            } else {
                out.push_str("[^/]*");
            }
        } else {
            let mut buf = [0u8; 4];
            out.push_str(&regex::escape(c.encode_utf8(&mut buf)));
        }
    }

    out.push('$');
    out
}

/// Test whether `url` matches `glob`.
///
/// A pattern that fails to compile simply does not match.
pub fn matches(glob: &str, url: &str) -> bool {
    match Regex::new(&glob_to_regex(glob)) {
        Ok(re) => re.is_match(url),
        Err(e) => {
            tracing::debug!(glob, error = %e, "glob did not compile; treating as no match");
            false
        }
    }
}

/// The first rule, in on-disk order, whose pattern matches `url`.
pub fn first_match<'a>(rules: &'a [Rule], url: &str) -> Option<&'a Rule> {
    rules.iter().find(|rule| matches(&rule.url_pattern, url))
}

/// The first existing rule whose glob already matches `pattern` taken as a URL.
///
/// A new rule added after such a rule can never win for URLs shaped like its
/// own pattern.
pub fn shadowing_rule<'a>(rules: &'a [Rule], pattern: &str) -> Option<&'a Rule> {
    rules
        .iter()
        .find(|rule| rule.url_pattern != pattern && matches(&rule.url_pattern, pattern))
}
