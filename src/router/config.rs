//! Router configuration.

/// How trailing slashes are treated when matching routes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TrailingSlash {
    /// `/users/` and `/users` are the same path.
    #[default]
    Ignore,
    /// A trailing slash must appear in both the pattern and the path, or in neither.
    /// Patterns ending in a wildcard accept either form; the slash stays in the wildcard value.
    Strict,
}

/// Settings applied uniformly to every route and mount of one router.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RouterConfig {
    /// Trailing slash handling.
    pub trailing_slash: TrailingSlash,
}
