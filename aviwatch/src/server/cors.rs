//! CORS layer built from `cors.allowed_origins`.
//!
//! Pattern forms:
//! - `"*"` allows every origin
//! - `"*.example.com"` matches by suffix
//! - `"https://dev-*"` matches by prefix
//! - `"/^https://(foo|bar)\.example\.com$/"` is a regular expression
//! - anything else must match exactly
//!
//! The browser needs `PUT` with a JSON body for selection updates, so those are allowed too.

use anyhow::{Context, Result};
use axum::http::{Method, header, header::HeaderValue, request::Parts};
use regex::Regex;
use std::time::Duration;
use tower_http::cors::{AllowOrigin, CorsLayer};

type OriginCheck = Box<dyn Fn(&str) -> bool + Send + Sync + 'static>;

fn origin_check(pattern: &str) -> Result<OriginCheck> {
	if pattern == "*" {
		return Ok(Box::new(|_: &str| true));
	}
	if let Some(suffix) = pattern.strip_prefix('*').filter(|s| !s.is_empty() && !s.contains('*')) {
		let suffix = suffix.to_string();
		return Ok(Box::new(move |origin: &str| origin.ends_with(&suffix)));
	}
	if let Some(prefix) = pattern.strip_suffix('*').filter(|s| !s.is_empty() && !s.contains('*')) {
		let prefix = prefix.to_string();
		return Ok(Box::new(move |origin: &str| origin.starts_with(&prefix)));
	}
	if pattern.len() > 2 && pattern.starts_with('/') && pattern.ends_with('/') {
		let re = Regex::new(&pattern[1..pattern.len() - 1]).with_context(|| format!("invalid origin regex {pattern}"))?;
		return Ok(Box::new(move |origin: &str| re.is_match(origin)));
	}
	let exact = pattern.to_string();
	Ok(Box::new(move |origin: &str| origin == exact))
}

/// Fails on the first pattern that cannot be compiled.
pub fn check_origin_patterns(allowed_origins: &[String]) -> Result<()> {
	for pattern in allowed_origins {
		origin_check(pattern)?;
	}
	Ok(())
}

pub fn build_cors_layer(allowed_origins: &[String], max_age_seconds: u64) -> Result<CorsLayer> {
	let checks = allowed_origins
		.iter()
		.map(|pattern| origin_check(pattern))
		.collect::<Result<Vec<_>>>()?;

	log::debug!("CORS allows {} origin pattern(s)", checks.len());

	Ok(CorsLayer::new()
		.allow_origin(AllowOrigin::predicate(move |origin: &HeaderValue, _req: &Parts| {
			let origin = origin.to_str().unwrap_or("");
			checks.iter().any(|check| check(origin))
		}))
		.allow_methods([Method::GET, Method::PUT])
		.allow_headers([header::CONTENT_TYPE])
		.max_age(Duration::from_secs(max_age_seconds)))
}

#[cfg(test)]
mod tests {
	use super::*;
	use axum::{
		Router,
		body::Body,
		http::{Request, header},
		routing::get,
	};
	use rstest::rstest;
	use tower::ServiceExt;

	async fn is_allowed(layer: &CorsLayer, origin: &str) -> bool {
		let app = Router::new().route("/", get(|| async { "ok" })).layer(layer.clone());
		let req = Request::builder()
			.uri("/")
			.header(header::ORIGIN, origin)
			.body(Body::empty())
			.unwrap();
		let resp = app.oneshot(req).await.unwrap();
		resp.headers().get(header::ACCESS_CONTROL_ALLOW_ORIGIN).is_some()
	}

	#[rstest]
	#[case("*", "http://anything.local", true)]
	#[case("https://maps.example.org", "https://maps.example.org", true)]
	#[case("https://maps.example.org", "https://maps.example.com", false)]
	#[case("*.example.com", "https://foo.example.com", true)]
	#[case("*.example.com", "https://example.org", false)]
	#[case("https://dev-*", "https://dev-01.example.com", true)]
	#[case("https://dev-*", "https://prod-01.example.com", false)]
	#[case("/^https://(foo|bar)\\.example\\.com$/", "https://bar.example.com", true)]
	#[case("/^https://(foo|bar)\\.example\\.com$/", "https://baz.example.com", false)]
	#[tokio::test]
	async fn origin_patterns(#[case] pattern: &str, #[case] origin: &str, #[case] allowed: bool) {
		let layer = build_cors_layer(&[pattern.to_string()], 3600).unwrap();
		assert_eq!(is_allowed(&layer, origin).await, allowed);
	}

	#[test]
	fn invalid_regex_is_an_error() {
		let err = build_cors_layer(&["/(unclosed/".to_string()], 60).unwrap_err();
		assert_eq!(err.to_string(), "invalid origin regex /(unclosed/");
	}

	#[rstest]
	#[case(&["*", "https://example.org", "*.example.net", "/^https://a\\.b$/"], true)]
	#[case(&["https://example.org", "/(unclosed/"], false)]
	fn checking_origin_patterns(#[case] patterns: &[&str], #[case] valid: bool) {
		let patterns: Vec<String> = patterns.iter().map(|p| p.to_string()).collect();
		assert_eq!(check_origin_patterns(&patterns).is_ok(), valid);
	}

	#[tokio::test]
	async fn preflight_allows_put() {
		let layer = build_cors_layer(&["*".into()], 7200).unwrap();
		let app = Router::new().route("/", get(|| async { "ok" })).layer(layer);
		let req = Request::builder()
			.method("OPTIONS")
			.uri("/")
			.header(header::ORIGIN, "https://example.test")
			.header(header::ACCESS_CONTROL_REQUEST_METHOD, "PUT")
			.body(Body::empty())
			.unwrap();
		let resp = app.oneshot(req).await.unwrap();
		let headers = resp.headers();
		assert_eq!(headers.get(header::ACCESS_CONTROL_MAX_AGE).unwrap(), "7200");
		let methods = headers.get(header::ACCESS_CONTROL_ALLOW_METHODS).unwrap().to_str().unwrap();
		assert!(methods.contains("PUT"), "{methods}");
	}
}
