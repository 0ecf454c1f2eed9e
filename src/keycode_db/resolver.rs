//! Keymap token grammar and display-label resolution.
//!
//! A raw keymap token is either a bare keycode identifier (`KC_A`) or a
//! single-level modifier-wrapped form (`MO(1)`, `LSFT(KC_TAB)`). Nested
//! wrapping is not supported. Malformed tokens are a detectable error
//! rather than undefined behavior.

use regex::Regex;

use super::KeycodeDb;
use crate::error::{Error, Result};

/// The "no key" sentinel; always renders as a blank key.
const NO_KEY: &str = "KC_NO";

/// A parsed keymap token.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum KeyToken {
    /// Bare keycode identifier (e.g., "`KC_A`").
    Plain(String),
    /// Modifier-wrapped form `PREFIX(INNER)` (e.g., "MO(1)", "LSFT(KC_TAB)").
    Wrapped {
        /// Text before the opening parenthesis.
        prefix: String,
        /// Text between the parentheses: a bare keycode identifier or a
        /// single-digit layer index.
        inner: String,
    },
}

impl KeyToken {
    /// Parses a raw keymap token against the token grammar.
    ///
    /// # Errors
    ///
    /// Returns [`Error::MalformedToken`] for empty tokens, unbalanced or
    /// nested parentheses, empty prefixes/inners, and identifiers outside
    /// `[A-Za-z0-9_]`.
    pub fn parse(raw: &str) -> Result<Self> {
        let ident = Regex::new(r"^[A-Za-z0-9_]+$").unwrap();
        let malformed = || Error::MalformedToken(raw.to_string());

        match raw.find('(') {
            None => {
                if ident.is_match(raw) {
                    Ok(Self::Plain(raw.to_string()))
                } else {
                    Err(malformed())
                }
            }
            Some(open) => {
                let prefix = &raw[..open];
                let inner = raw[open + 1..].strip_suffix(')').ok_or_else(malformed)?;
                if !ident.is_match(prefix) || !ident.is_match(inner) {
                    return Err(malformed());
                }
                Ok(Self::Wrapped {
                    prefix: prefix.to_string(),
                    inner: inner.to_string(),
                })
            }
        }
    }
}

impl KeycodeDb {
    /// Resolves a raw keymap token into its display label.
    ///
    /// - Bare tokens found in a dictionary resolve to their label.
    /// - Bare tokens absent from both dictionaries resolve to the raw token
    ///   itself, so data gaps stay visible instead of disappearing.
    /// - `KC_NO` resolves to an empty label regardless of dictionary
    ///   contents (rendered as a blank key).
    /// - Wrapped tokens render on two lines: the prefix, then the inner
    ///   label in parentheses. A single-digit inner `0`-`4` denotes a
    ///   layer-switch target and is shown literally, bypassing the
    ///   dictionaries. Any other inner resolves under the bare-token rules,
    ///   so an unknown inner shows its raw form and `KC_NO` leaves the
    ///   parenthetical empty.
    ///
    /// # Errors
    ///
    /// Returns [`Error::MalformedToken`] when the token does not parse.
    ///
    /// # Examples
    ///
    /// ```
    /// use layerlens::keycode_db::{KeycodeDb, KeycodeEntry};
    ///
    /// let db = KeycodeDb::from_entries(
    ///     vec![KeycodeEntry {
    ///         key: "KC_A".to_string(),
    ///         label: "A".to_string(),
    ///         aliases: vec![],
    ///     }],
    ///     vec![],
    /// );
    /// assert_eq!(db.resolve("KC_A").unwrap(), "A");
    /// assert_eq!(db.resolve("MO(1)").unwrap(), "MO\n(1)");
    /// assert_eq!(db.resolve("KC_NO").unwrap(), "");
    /// ```
    pub fn resolve(&self, token: &str) -> Result<String> {
        match KeyToken::parse(token)? {
            KeyToken::Plain(code) => Ok(self.resolve_bare(&code)),
            KeyToken::Wrapped { prefix, inner } => {
                let inner_label = if is_layer_digit(&inner) {
                    inner
                } else {
                    self.resolve_bare(&inner)
                };
                Ok(format!("{prefix}\n({inner_label})"))
            }
        }
    }

    /// Resolves a bare keycode: dictionary label, raw-token fallback, or
    /// blank for the `KC_NO` sentinel.
    fn resolve_bare(&self, code: &str) -> String {
        if code == NO_KEY {
            return String::new();
        }
        self.lookup(code)
            .map_or_else(|| code.to_string(), str::to_string)
    }
}

/// Single-digit layer indices shown literally on layer-switch keys.
fn is_layer_digit(inner: &str) -> bool {
    matches!(inner, "0" | "1" | "2" | "3" | "4")
}
