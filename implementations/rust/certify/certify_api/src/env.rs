//! Typed access to environment variables.

use std::env::{self, VarError};
use std::path::PathBuf;

use crate::{ApiError, Result};

/// Get environmental value [var_name]. If value is not found returns Ok(None)
pub fn get_env<T: FromString>(var_name: &str) -> Result<Option<T>> {
    get_env_impl::<Option<T>>(var_name, None)
}

/// Get environmental value [var_name]. If value is not found returns [default_value]
pub fn get_env_with_default<T: FromString>(var_name: &str, default_value: T) -> Result<T> {
    get_env_impl::<T>(var_name, default_value)
}

fn get_env_impl<T: FromString>(var_name: &str, default_value: T) -> Result<T> {
    match env::var(var_name) {
        Ok(val) => T::from_string(&val).map_err(|e| ApiError::Env {
            var: var_name.to_string(),
            source: Box::new(e),
        }),
        Err(VarError::NotPresent) => Ok(default_value),
        Err(VarError::NotUnicode(_)) => Err(ApiError::Env {
            var: var_name.to_string(),
            source: Box::new(ApiError::message("not unicode")),
        }),
    }
}

/// Types that can be parsed from the value of an environment variable
pub trait FromString: Sized {
    fn from_string(s: &str) -> Result<Self>;
}

impl<T: FromString> FromString for Option<T> {
    fn from_string(s: &str) -> Result<Self> {
        T::from_string(s).map(Some)
    }
}

impl FromString for bool {
    fn from_string(s: &str) -> Result<Self> {
        match s.to_lowercase().as_str() {
            "true" | "1" | "yes" => Ok(true),
            "false" | "0" | "no" => Ok(false),
            other => Err(ApiError::message(format!("bool parsing error: {other}"))),
        }
    }
}

impl FromString for String {
    fn from_string(s: &str) -> Result<Self> {
        Ok(s.to_owned())
    }
}

impl FromString for u64 {
    fn from_string(s: &str) -> Result<Self> {
        s.parse::<u64>()
            .map_err(|_| ApiError::message(format!("u64 parsing error: {s}")))
    }
}

impl FromString for PathBuf {
    fn from_string(s: &str) -> Result<Self> {
        Ok(PathBuf::from(s))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bool_ok() {
        for value in ["true", "TRUE", "tRuE", "1", "yes"] {
            assert!(bool::from_string(value).unwrap());
        }
        for value in ["false", "FALSE", "0", "no"] {
            assert!(!bool::from_string(value).unwrap());
        }
    }

    #[test]
    fn test_bool_err() {
        assert!(bool::from_string("something").is_err());
        assert!(bool::from_string("").is_err());
    }

    #[test]
    fn test_u64() {
        assert_eq!(u64::from_string("60").unwrap(), 60);
        assert!(u64::from_string("-1").is_err());
    }

    #[test]
    fn test_option_ok() {
        assert_eq!(Option::<u64>::from_string("1").unwrap(), Some(1));
        assert!(Option::<u64>::from_string("x").is_err());
    }

    #[test]
    fn test_missing_variable_uses_default() {
        let value =
            get_env_with_default::<u64>("CERTIFY_TEST_SURELY_UNSET_VARIABLE", 7).unwrap();
        assert_eq!(value, 7);
        let value = get_env::<String>("CERTIFY_TEST_SURELY_UNSET_VARIABLE").unwrap();
        assert_eq!(value, None);
    }
}
