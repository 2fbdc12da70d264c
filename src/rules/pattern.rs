use regex::Regex;
use std::fmt;

/// A seed filter compiled for whole-string matching
///
/// Operators write patterns such as `http://greglu.com/blog.*` and expect
/// them to describe the entire URI, so the source is wrapped as
/// `^(?:pattern)$` before compilation. A pattern that only matches part of a
/// URI does not accept it.
#[derive(Debug, Clone)]
pub struct SeedPattern {
    source: String,
    regex: Regex,
}

impl SeedPattern {
    /// Compiles a pattern for whole-string matching
    ///
    /// # Examples
    ///
    /// ```
    /// use seed_scope::rules::SeedPattern;
    ///
    /// let pattern = SeedPattern::compile("http://greglu.com/blog.*").unwrap();
    /// assert!(pattern.is_full_match("http://greglu.com/blog/post1"));
    /// assert!(!pattern.is_full_match("https://mirror.org/http://greglu.com/blog"));
    /// ```
    pub fn compile(source: &str) -> Result<Self, regex::Error> {
        let regex = Regex::new(&format!("^(?:{})$", source))?;
        Ok(Self {
            source: source.to_string(),
            regex,
        })
    }

    /// Returns true if the whole of `uri` matches the pattern
    pub fn is_full_match(&self, uri: &str) -> bool {
        self.regex.is_match(uri)
    }

    /// Returns the pattern as written by the operator
    pub fn as_str(&self) -> &str {
        &self.source
    }
}

impl fmt::Display for SeedPattern {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.source)
    }
}
