//! Structural Addresses
//!
//! An address is the chain of tag signatures from a context node down to a
//! target node, rendered as `DIV.post>H2>A`. The same value is both a display
//! label and a query: [`Address::resolve_first`] and [`Address::resolve_all`]
//! find nodes under any context of the same shape.
//!
//! Only this ancestor-chain grammar is supported. There are no combinators
//! other than direct child descent and no attribute or pseudo selectors.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::dom::{self, NodeRef};
use crate::patterns::{DIGIT_TOKEN, SIGNATURE_TOKEN};
use crate::{Error, Result};

const DESCENT: char = '>';
const CLASS_SEPARATOR: char = '.';

/// One level of an address: upper-case tag name plus optional class tokens.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Signature {
    tag: String,
    classes: Vec<String>,
}

impl Signature {
    /// Signature of an element; `None` for text and other non-element nodes.
    ///
    /// With `with_classes`, class tokens containing a digit are dropped and
    /// the rest kept in attribute order. Tokens holding `.` or `>` are dropped
    /// too: they cannot be rendered back into the same segment.
    #[must_use]
    pub fn of(node: &NodeRef, with_classes: bool) -> Option<Self> {
        let tag = dom::tag_name(node)?.to_ascii_uppercase();
        let classes = if with_classes {
            dom::class_tokens(node)
                .into_iter()
                .filter(|token| !DIGIT_TOKEN.is_match(token) && SIGNATURE_TOKEN.is_match(token))
                .collect()
        } else {
            Vec::new()
        };
        Some(Self { tag, classes })
    }

    #[must_use]
    pub fn tag(&self) -> &str {
        &self.tag
    }

    #[must_use]
    pub fn classes(&self) -> &[String] {
        &self.classes
    }

    /// Tag matches case-insensitively and every class token is present.
    #[must_use]
    pub fn matches(&self, node: &NodeRef) -> bool {
        let Some(tag) = dom::tag_name(node) else {
            return false;
        };
        tag.eq_ignore_ascii_case(&self.tag)
            && self.classes.iter().all(|class| dom::has_class(node, class))
    }
}

impl fmt::Display for Signature {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.tag)?;
        for class in &self.classes {
            write!(f, "{CLASS_SEPARATOR}{class}")?;
        }
        Ok(())
    }
}

impl FromStr for Signature {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        let mut tokens = s.split(CLASS_SEPARATOR);
        let tag = tokens.next().unwrap_or_default();
        if !SIGNATURE_TOKEN.is_match(tag) {
            return Err(Error::InvalidAddress(format!("bad tag in segment `{s}`")));
        }
        let classes = tokens
            .map(|token| {
                if SIGNATURE_TOKEN.is_match(token) {
                    Ok(token.to_string())
                } else {
                    Err(Error::InvalidAddress(format!("bad class in segment `{s}`")))
                }
            })
            .collect::<Result<Vec<_>>>()?;
        Ok(Self {
            tag: tag.to_ascii_uppercase(),
            classes,
        })
    }
}

/// Ancestor-to-descendant signature chain relative to some context node.
///
/// The empty address denotes the context itself.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Address {
    segments: Vec<Signature>,
}

impl Address {
    /// Address of `node` relative to `context`.
    ///
    /// Climbs from `node` until the parent is `context`, collecting element
    /// signatures; `context` itself is excluded. A text leaf contributes no
    /// signature, so its address ends at its nearest element ancestor.
    /// Returns `None` when `context` is not an ancestor of `node`.
    #[must_use]
    pub fn relative(node: &NodeRef, context: &NodeRef, with_classes: bool) -> Option<Self> {
        let mut segments = Vec::new();
        let mut current = *node;
        while !dom::is_same_node(&current, context) {
            if let Some(signature) = Signature::of(&current, with_classes) {
                segments.push(signature);
            }
            current = current.parent()?;
        }
        segments.reverse();
        Some(Self { segments })
    }

    #[must_use]
    pub fn segments(&self) -> &[Signature] {
        &self.segments
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.segments.is_empty()
    }

    /// String-prefix test on the rendered forms.
    ///
    /// `DIV>P` is a prefix of `DIV>P>B`, and also of `DIV>PRE`.
    #[must_use]
    pub fn is_prefix_of(&self, other: &Address) -> bool {
        other.to_string().starts_with(&self.to_string())
    }

    /// First node under `root` (document order) whose ancestor chain matches.
    ///
    /// The empty address resolves to `root` itself.
    #[must_use]
    pub fn resolve_first<'a>(&self, root: &NodeRef<'a>) -> Option<NodeRef<'a>> {
        if self.is_empty() {
            return Some(*root);
        }
        dom::descendants(root)
            .into_iter()
            .find(|node| self.matches_chain(node, root))
    }

    /// Every node under `root` whose ancestor chain matches, in document order.
    #[must_use]
    pub fn resolve_all<'a>(&self, root: &NodeRef<'a>) -> Vec<NodeRef<'a>> {
        if self.is_empty() {
            return vec![*root];
        }
        dom::descendants(root)
            .into_iter()
            .filter(|node| self.matches_chain(node, root))
            .collect()
    }

    /// Matches signatures bottom-up; the whole chain must lie strictly below `root`.
    fn matches_chain(&self, node: &NodeRef, root: &NodeRef) -> bool {
        let mut current = Some(*node);
        for signature in self.segments.iter().rev() {
            let Some(n) = current else {
                return false;
            };
            if dom::is_same_node(&n, root) || !signature.matches(&n) {
                return false;
            }
            current = n.parent();
        }
        true
    }
}

impl fmt::Display for Address {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, signature) in self.segments.iter().enumerate() {
            if i > 0 {
                write!(f, "{DESCENT}")?;
            }
            write!(f, "{signature}")?;
        }
        Ok(())
    }
}

impl FromStr for Address {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        let s = s.trim();
        if s.is_empty() {
            return Ok(Self::default());
        }
        let segments = s
            .split(DESCENT)
            .map(|segment| segment.trim().parse())
            .collect::<Result<Vec<Signature>>>()?;
        Ok(Self { segments })
    }
}

impl TryFrom<String> for Address {
    type Error = Error;

    fn try_from(value: String) -> Result<Self> {
        value.parse()
    }
}

impl From<Address> for String {
    fn from(address: Address) -> Self {
        address.to_string()
    }
}
