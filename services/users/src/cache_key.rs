//! Cache key builder for lookup responses
//!
//! Keys are deterministic per method, path, and query: the readable part
//! keeps the lowercased method and the path with `/` folded to `:`, and a
//! short hash of the canonical request string keeps keys distinct when
//! query parameters differ.

use std::hash::{DefaultHasher, Hash, Hasher};

/// Build a cache key for a request
///
/// Query pairs are sorted before hashing so parameter order does not
/// change the key.
pub fn build_key(prefix: &str, method: &str, path: &str, query: &[(&str, &str)]) -> String {
    let method = method.to_ascii_lowercase();

    let mut canonical = format!("{}:{}", method, path);
    if !query.is_empty() {
        let mut pairs: Vec<String> = query.iter().map(|(k, v)| format!("{}={}", k, v)).collect();
        pairs.sort();
        canonical.push('?');
        canonical.push_str(&pairs.join("&"));
    }

    let mut hasher = DefaultHasher::new();
    canonical.hash(&mut hasher);
    let digest = format!("{:016x}", hasher.finish());

    let path_part = path.trim_start_matches('/').replace('/', ":");

    format!("{}:{}:{}:{}", prefix, method, path_part, &digest[..12])
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn key_is_deterministic() {
        let a = build_key("cache", "GET", "/users/42", &[]);
        let b = build_key("cache", "GET", "/users/42", &[]);
        assert_eq!(a, b);
    }

    #[test]
    fn key_folds_path_and_lowercases_method() {
        let key = build_key("cache", "GET", "/users/42", &[]);
        assert!(key.starts_with("cache:get:users:42:"));
    }

    #[test]
    fn different_paths_produce_different_keys() {
        let a = build_key("cache", "GET", "/users/1", &[]);
        let b = build_key("cache", "GET", "/users/2", &[]);
        assert_ne!(a, b);
    }

    #[test]
    fn query_order_does_not_change_the_key() {
        let a = build_key("cache", "GET", "/users", &[("page", "2"), ("size", "10")]);
        let b = build_key("cache", "GET", "/users", &[("size", "10"), ("page", "2")]);
        assert_eq!(a, b);
    }

    #[test]
    fn query_values_change_the_key() {
        let a = build_key("cache", "GET", "/users", &[("page", "1")]);
        let b = build_key("cache", "GET", "/users", &[("page", "2")]);
        assert_ne!(a, b);
    }
}
