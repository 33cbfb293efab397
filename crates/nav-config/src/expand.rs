//! Environment variable expansion for configuration strings.

use crate::ConfigError;

/// Expand `${VAR}` and `${VAR:-default}` references in `value`.
///
/// Only braced references are expanded. A bare `$` (as in "Donate $5" or
/// "$HOME") is kept literally, as is an unterminated `${`.
///
/// `field` names the config field for error reporting.
pub(crate) fn expand_env(value: &str, field: &str) -> Result<String, ConfigError> {
    let mut result = String::with_capacity(value.len());
    let mut rest = value;

    while let Some(start) = rest.find("${") {
        let Some(len) = rest[start..].find('}') else {
            break;
        };
        let end = start + len + 1;

        result.push_str(&rest[..start]);
        let expanded =
            shellexpand::env(&rest[start..end]).map_err(|e| ConfigError::EnvVar {
                field: field.to_owned(),
                message: format!("${{{}}} not set: {}", e.var_name, e.cause),
            })?;
        result.push_str(&expanded);
        rest = &rest[end..];
    }

    result.push_str(rest);
    Ok(result)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_literal_unchanged() {
        assert_eq!(expand_env("/team", "routes[0].href").unwrap(), "/team");
    }

    #[test]
    fn test_default_used_when_unset() {
        // SAFETY: test runs single-threaded per test function
        unsafe {
            std::env::remove_var("NAV_EXPAND_UNSET_TEST");
        }

        let value = expand_env("${NAV_EXPAND_UNSET_TEST:-/support}", "routes[0].href").unwrap();

        assert_eq!(value, "/support");
    }

    #[test]
    fn test_set_variable_expanded() {
        // SAFETY: test runs single-threaded per test function
        unsafe {
            std::env::set_var("NAV_EXPAND_SET_TEST", "Help");
        }

        let value = expand_env("${NAV_EXPAND_SET_TEST} Desk", "routes[0].title").unwrap();

        assert_eq!(value, "Help Desk");

        unsafe {
            std::env::remove_var("NAV_EXPAND_SET_TEST");
        }
    }

    #[test]
    fn test_bare_dollar_kept_literally() {
        assert_eq!(expand_env("Donate $5", "routes[0].title").unwrap(), "Donate $5");
        assert_eq!(expand_env("Costs $USD", "routes[0].title").unwrap(), "Costs $USD");
        assert_eq!(expand_env("$", "routes[0].title").unwrap(), "$");
    }

    #[test]
    fn test_bare_variable_name_not_expanded() {
        // SAFETY: test runs single-threaded per test function
        unsafe {
            std::env::set_var("NAV_EXPAND_BARE_TEST", "X");
        }

        let value = expand_env("Pay $NAV_EXPAND_BARE_TEST now", "routes[0].title").unwrap();

        assert_eq!(value, "Pay $NAV_EXPAND_BARE_TEST now");

        unsafe {
            std::env::remove_var("NAV_EXPAND_BARE_TEST");
        }
    }

    #[test]
    fn test_mixed_bare_and_braced_references() {
        // SAFETY: test runs single-threaded per test function
        unsafe {
            std::env::set_var("NAV_EXPAND_MIXED_TEST", "Gold");
        }

        let value = expand_env("${NAV_EXPAND_MIXED_TEST} plan: $5/month", "routes[0].title")
            .unwrap();

        assert_eq!(value, "Gold plan: $5/month");

        unsafe {
            std::env::remove_var("NAV_EXPAND_MIXED_TEST");
        }
    }

    #[test]
    fn test_unterminated_reference_kept_literally() {
        assert_eq!(expand_env("/pay${oops", "routes[0].href").unwrap(), "/pay${oops");
    }

    #[test]
    fn test_missing_variable_reports_field() {
        // SAFETY: test runs single-threaded per test function
        unsafe {
            std::env::remove_var("NAV_EXPAND_MISSING_TEST");
        }

        let err = expand_env("${NAV_EXPAND_MISSING_TEST}", "routes[1].href").unwrap_err();

        assert!(matches!(err, ConfigError::EnvVar { .. }));
        assert!(err.to_string().contains("NAV_EXPAND_MISSING_TEST"));
        assert!(err.to_string().contains("routes[1].href"));
    }
}
