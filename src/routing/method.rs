//! Supported HTTP methods.

use std::fmt;
use std::str::FromStr;

use axum::http;

use crate::routing::error::RouteError;

/// The fixed set of methods a route can be bound to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Method {
    Get,
    Post,
    Put,
    Patch,
    Delete,
    Head,
    Options,
}

impl Method {
    pub fn as_str(&self) -> &'static str {
        match self {
            Method::Get => "GET",
            Method::Post => "POST",
            Method::Put => "PUT",
            Method::Patch => "PATCH",
            Method::Delete => "DELETE",
            Method::Head => "HEAD",
            Method::Options => "OPTIONS",
        }
    }
}

impl fmt::Display for Method {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Method {
    type Err = RouteError;

    /// Method names are case-sensitive, as in HTTP.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "GET" => Ok(Method::Get),
            "POST" => Ok(Method::Post),
            "PUT" => Ok(Method::Put),
            "PATCH" => Ok(Method::Patch),
            "DELETE" => Ok(Method::Delete),
            "HEAD" => Ok(Method::Head),
            "OPTIONS" => Ok(Method::Options),
            other => Err(RouteError::UnsupportedMethod(other.to_string())),
        }
    }
}

impl TryFrom<&http::Method> for Method {
    type Error = RouteError;

    fn try_from(method: &http::Method) -> Result<Self, Self::Error> {
        method.as_str().parse()
    }
}

impl From<Method> for http::Method {
    fn from(method: Method) -> Self {
        match method {
            Method::Get => http::Method::GET,
            Method::Post => http::Method::POST,
            Method::Put => http::Method::PUT,
            Method::Patch => http::Method::PATCH,
            Method::Delete => http::Method::DELETE,
            Method::Head => http::Method::HEAD,
            Method::Options => http::Method::OPTIONS,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_supported_methods() {
        assert_eq!("GET".parse::<Method>(), Ok(Method::Get));
        assert_eq!("DELETE".parse::<Method>(), Ok(Method::Delete));
        assert_eq!(Method::Patch.to_string(), "PATCH");
    }

    #[test]
    fn test_parse_rejects_unknown_and_lowercase() {
        assert_eq!(
            "get".parse::<Method>(),
            Err(RouteError::UnsupportedMethod("get".into()))
        );
        assert!("TRACE".parse::<Method>().is_err());
    }

    #[test]
    fn test_http_method_conversion() {
        assert_eq!(Method::try_from(&http::Method::GET), Ok(Method::Get));
        assert!(Method::try_from(&http::Method::CONNECT).is_err());
        assert_eq!(http::Method::from(Method::Put), http::Method::PUT);
    }
}
