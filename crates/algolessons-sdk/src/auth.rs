//! Bearer credential acquisition.
//!
//! The SDK does not know where tokens come from. Anything that can hand one
//! out per call implements [`TokenProvider`].

use crate::error::Error;
use std::future::Future;

/// Source of the bearer token sent with authorized requests.
///
/// Called once per authorized request; the returned value is used as-is.
pub trait TokenProvider {
    fn token(&self) -> impl Future<Output = Result<String, Error>> + Send;
}

/// A fixed token.
#[derive(Clone)]
pub struct StaticToken(String);

impl StaticToken {
    pub fn new(token: impl Into<String>) -> Self {
        Self(token.into())
    }
}

impl std::fmt::Debug for StaticToken {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str("StaticToken(***)")
    }
}

impl TokenProvider for StaticToken {
    async fn token(&self) -> Result<String, Error> {
        if self.0.is_empty() {
            return Err(Error::Auth("no token configured".to_string()));
        }
        Ok(self.0.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn debug_hides_token() {
        let token = StaticToken::new("secret");
        assert_eq!(format!("{:?}", token), "StaticToken(***)");
    }
}
