//! Configuration options for rule inference and application.
//!
//! The `Options` struct holds the thresholds that separate real article
//! repetition from navigation links, labels and punctuation noise.

/// Configuration options for rule inference and application.
///
/// All fields are public for easy configuration. Use `Default::default()`
/// for standard settings.
///
/// # Example
///
/// ```rust
/// use rs_feedrules::Options;
///
/// // Use defaults
/// let options = Options::default();
///
/// // Customize specific fields
/// let options = Options {
///     with_class_names: true,
///     min_cluster_size: 5,
///     ..Options::default()
/// };
/// ```
#[derive(Debug, Clone)]
pub struct Options {
    /// Anchors need strictly more words than this to be candidate article links.
    ///
    /// Filters navigation and utility links ("Home", "Read more").
    ///
    /// Default: `3`
    pub min_link_words: usize,

    /// Link clusters need strictly more members than this to count as repetition.
    ///
    /// Default: `3`
    pub min_cluster_size: usize,

    /// Title candidates need an average word count strictly above this.
    ///
    /// Labels, dates and bylines fall below it.
    ///
    /// Default: `3.0`
    pub min_title_words: f64,

    /// Description fragments need strictly more characters than this.
    ///
    /// Drops punctuation and separator leftovers such as `|` or `--`.
    ///
    /// Default: `2`
    pub min_description_len: usize,

    /// Decorate address signatures with class tokens.
    ///
    /// Tokens containing a digit are always left out, so `item-1` and
    /// `item-2` still share an address.
    ///
    /// Default: `false`
    pub with_class_names: bool,
}

impl Default for Options {
    fn default() -> Self {
        Self {
            min_link_words: 3,
            min_cluster_size: 3,
            min_title_words: 3.0,
            min_description_len: 2,
            with_class_names: false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_thresholds() {
        let opts = Options::default();

        assert_eq!(opts.min_link_words, 3);
        assert_eq!(opts.min_cluster_size, 3);
        assert!((opts.min_title_words - 3.0).abs() < f64::EPSILON);
        assert_eq!(opts.min_description_len, 2);
        assert!(!opts.with_class_names);
    }

    #[test]
    fn test_struct_update_keeps_other_defaults() {
        let opts = Options {
            with_class_names: true,
            min_cluster_size: 5,
            ..Options::default()
        };

        assert!(opts.with_class_names);
        assert_eq!(opts.min_cluster_size, 5);
        assert_eq!(opts.min_link_words, 3);
        assert_eq!(opts.min_description_len, 2);
    }
}
