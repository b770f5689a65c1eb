//! Host boundary for reading and replacing the query string.
//!
//! The library never touches a browser location or process environment
//! directly. Everything it learns about the current query string, and every
//! update it commits, goes through the [`QuerySource`] trait. Hosts provide
//! an implementation backed by whatever owns the URI; [`MemoryQuerySource`]
//! is a self-contained implementation for tests and headless use.

use std::sync::{Arc, Mutex, MutexGuard};

use crate::error::{UriStateError, UriStateResult};

/// Access to the query string of the current location.
///
/// Implementations are responsible for the parts of the URI this library
/// does not manage: [`replace_query`] must leave the path and fragment
/// intact, and should replace the current history entry rather than push a
/// new one, so that synchronizing state does not pollute navigation
/// history.
///
/// [`replace_query`]: QuerySource::replace_query
pub trait QuerySource {
    /// Read the current query string.
    ///
    /// A leading `?` is accepted and ignored by the parser, so
    /// implementations may return the component either way. An absent query
    /// is the empty string.
    ///
    /// # Errors
    ///
    /// Returns [`UriStateError::Source`] when the underlying location is
    /// unavailable.
    fn query(&self) -> UriStateResult<String>;

    /// Replace the query string in place.
    ///
    /// The argument is the bare form-encoded component without a leading
    /// `?`; an empty string clears the query.
    ///
    /// # Errors
    ///
    /// Returns [`UriStateError::Source`] when the underlying location
    /// rejects the update.
    fn replace_query(&self, query: &str) -> UriStateResult<()>;
}

impl<S: QuerySource + ?Sized> QuerySource for &S {
    fn query(&self) -> UriStateResult<String> {
        (**self).query()
    }

    fn replace_query(&self, query: &str) -> UriStateResult<()> {
        (**self).replace_query(query)
    }
}

impl<S: QuerySource + ?Sized> QuerySource for Arc<S> {
    fn query(&self) -> UriStateResult<String> {
        (**self).query()
    }

    fn replace_query(&self, query: &str) -> UriStateResult<()> {
        (**self).replace_query(query)
    }
}

/// In-memory [`QuerySource`] holding the query string behind a mutex.
///
/// Clones share the same storage, so a test can keep one handle and hand
/// another to the code under test.
///
/// # Examples
///
/// ```
/// use uri_state::{MemoryQuerySource, QuerySource};
///
/// let source = MemoryQuerySource::with_query("a=1");
/// source.replace_query("a=2")?;
/// assert_eq!(source.query()?, "a=2");
/// # Ok::<(), uri_state::UriStateError>(())
/// ```
#[derive(Debug, Clone, Default)]
pub struct MemoryQuerySource {
    query: Arc<Mutex<String>>,
}

impl MemoryQuerySource {
    /// Create a source with an empty query string.
    #[inline]
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a source seeded with a query string.
    pub fn with_query(query: impl Into<String>) -> Self {
        Self {
            query: Arc::new(Mutex::new(query.into())),
        }
    }

    fn lock(&self) -> UriStateResult<MutexGuard<'_, String>> {
        self.query
            .lock()
            .map_err(|_| UriStateError::source("query mutex poisoned"))
    }
}

impl QuerySource for MemoryQuerySource {
    fn query(&self) -> UriStateResult<String> {
        Ok(self.lock()?.clone())
    }

    fn replace_query(&self, query: &str) -> UriStateResult<()> {
        *self.lock()? = query.to_owned();
        Ok(())
    }
}
