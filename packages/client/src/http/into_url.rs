use url::Url;

/// A trait to try to convert some type into a `Url`.
///
/// This trait is "sealed", such that only types within apiclient can
/// implement it.
pub trait IntoUrl: sealed::IntoUrlSealed {}

impl IntoUrl for Url {}
impl IntoUrl for String {}
impl IntoUrl for &str {}
impl IntoUrl for &String {}

mod sealed {
    use url::Url;

    use crate::error::{self, url_bad_scheme};

    pub trait IntoUrlSealed {
        // Besides parsing as a valid `Url`, the `Url` must have a host so
        // that it makes sense to use in a network request.
        ///
        /// # Errors
        ///
        /// Returns a builder `Error` if:
        /// - URL string is malformed or contains invalid syntax
        /// - URL lacks a host
        fn into_url(self) -> error::Result<Url>;

        fn as_str(&self) -> &str;
    }

    impl IntoUrlSealed for Url {
        fn into_url(self) -> error::Result<Url> {
            if self.has_host() {
                Ok(self)
            } else {
                Err(url_bad_scheme(self))
            }
        }

        fn as_str(&self) -> &str {
            self.as_ref()
        }
    }

    impl IntoUrlSealed for &str {
        fn into_url(self) -> error::Result<Url> {
            Url::parse(self)
                .map_err(|e| error::builder(format!("invalid URL '{self}': {e}")))?
                .into_url()
        }

        fn as_str(&self) -> &str {
            self
        }
    }

    impl IntoUrlSealed for &String {
        fn into_url(self) -> error::Result<Url> {
            (&**self).into_url()
        }

        fn as_str(&self) -> &str {
            self.as_ref()
        }
    }

    impl IntoUrlSealed for String {
        fn into_url(self) -> error::Result<Url> {
            (&*self).into_url()
        }

        fn as_str(&self) -> &str {
            self.as_ref()
        }
    }
}
