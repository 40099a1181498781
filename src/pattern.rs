use regex::{Regex, RegexBuilder};
use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum PatternError {
    #[error("empty pattern")]
    Empty,

    #[error("unsupported flag '{flag}' in pattern '{pattern}'")]
    UnknownFlag { pattern: String, flag: char },

    #[error("invalid regular expression '{pattern}': {reason}")]
    Invalid { pattern: String, reason: String },

    /// Valid for the engine but outside what `regex` can compile, such as
    /// look-around or backreferences.
    #[error("cannot check '{pattern}' locally: {reason}")]
    Unsupported { pattern: String, reason: String },
}

/// An entry of `ignoreRegExpList`, either `/body/flags` or a bare body.
#[derive(Debug, Clone)]
pub struct IgnorePattern {
    source: String,
    regex: Regex,
}

impl IgnorePattern {
    pub fn parse(source: &str) -> Result<Self, PatternError> {
        let (body, flags) = split_slashes(source);
        if body.is_empty() {
            return Err(PatternError::Empty);
        }

        let mut builder = RegexBuilder::new(body);
        for flag in flags.chars() {
            match flag {
                'i' => {
                    builder.case_insensitive(true);
                }
                'm' => {
                    builder.multi_line(true);
                }
                's' => {
                    builder.dot_matches_new_line(true);
                }
                // No effect on whether a span matches
                'd' | 'g' | 'u' | 'v' | 'y' => {}
                other => {
                    return Err(PatternError::UnknownFlag {
                        pattern: source.to_string(),
                        flag: other,
                    })
                }
            }
        }

        let regex = builder.build().map_err(|e| {
            let reason = e.to_string();
            if reason.contains("not supported") {
                PatternError::Unsupported {
                    pattern: source.to_string(),
                    reason,
                }
            } else {
                PatternError::Invalid {
                    pattern: source.to_string(),
                    reason,
                }
            }
        })?;

        Ok(Self {
            source: source.to_string(),
            regex,
        })
    }

    pub fn source(&self) -> &str {
        &self.source
    }

    pub fn is_match(&self, text: &str) -> bool {
        self.regex.is_match(text)
    }
}

/// Split `/body/flags` into its parts. Anything else is all body.
fn split_slashes(source: &str) -> (&str, &str) {
    if let Some(rest) = source.strip_prefix('/') {
        if let Some(end) = rest.rfind('/') {
            return (&rest[..end], &rest[end + 1..]);
        }
    }
    (source, "")
}
