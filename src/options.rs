//! Configuration options for topic list parsing.
//!
//! The `Options` struct carries the caller's session state and the site
//! base URL into the parser. Nothing in here is read from global state.

/// Default site the page catalogue and avatar resolution refer to.
pub const DEFAULT_BASE_URL: &str = "https://www.v2ex.com";

/// Configuration options for topic list parsing.
///
/// All fields are public for easy configuration. Use `Default::default()`
/// for an anonymous session against the public site.
///
/// # Example
///
/// ```rust
/// use v2ex_topics::Options;
///
/// let options = Options {
///     authenticated: true,
///     ..Options::default()
/// };
/// assert!(!options.absolute_avatar_urls);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Options {
    /// Whether the document was fetched by a logged-in user.
    ///
    /// Node pages only render the favorite toggle for logged-in users, so
    /// the favorite state and once-token are decoded only when this is set.
    ///
    /// Default: `false`
    pub authenticated: bool,

    /// Site root used to build page URLs and resolve relative avatar URLs.
    ///
    /// Default: `https://www.v2ex.com`
    pub base_url: String,

    /// Resolve avatar `src` values against `base_url`.
    ///
    /// Avatars are usually rendered protocol-relative (`//cdn.v2ex.com/...`).
    /// When false the attribute is kept exactly as written.
    ///
    /// Default: `false`
    pub absolute_avatar_urls: bool,
}

impl Default for Options {
    fn default() -> Self {
        Self {
            authenticated: false,
            base_url: DEFAULT_BASE_URL.to_string(),
            absolute_avatar_urls: false,
        }
    }
}
