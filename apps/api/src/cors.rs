//! CORS layer built from the configured origin list.
//!
//! Entries are either exact origins (`http://localhost:3000`) or a scheme
//! plus wildcard subdomain (`https://*.vercel.app`). Credentialed requests
//! are allowed, so methods and headers are mirrored from the preflight
//! instead of using `*`.

use axum::http::{request::Parts, HeaderValue};
use tower_http::cors::{AllowHeaders, AllowMethods, AllowOrigin, CorsLayer};

#[derive(Debug, Clone, PartialEq, Eq)]
enum OriginRule {
    Exact(String),
    Subdomain { scheme: String, suffix: String },
}

impl OriginRule {
    fn parse(raw: &str) -> Option<Self> {
        let origin = raw.trim().trim_end_matches('/').to_ascii_lowercase();
        if origin.is_empty() {
            return None;
        }
        match origin.split_once("://*.") {
            Some((scheme, domain)) if !domain.is_empty() => Some(OriginRule::Subdomain {
                scheme: format!("{scheme}://"),
                suffix: format!(".{domain}"),
            }),
            Some(_) => None,
            None => Some(OriginRule::Exact(origin)),
        }
    }

    fn matches(&self, origin: &str) -> bool {
        match self {
            OriginRule::Exact(expected) => origin.eq_ignore_ascii_case(expected),
            OriginRule::Subdomain { scheme, suffix } => {
                let origin = origin.to_ascii_lowercase();
                origin
                    .strip_prefix(scheme.as_str())
                    .and_then(|host| host.strip_suffix(suffix.as_str()))
                    .is_some_and(|sub| {
                        !sub.is_empty()
                            && sub
                                .chars()
                                .all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '.')
                    })
            }
        }
    }
}

pub fn build_cors_layer(allowed: &[String]) -> CorsLayer {
    let rules: Vec<OriginRule> = allowed
        .iter()
        .filter_map(|raw| {
            let rule = OriginRule::parse(raw);
            match &rule {
                Some(_) => tracing::info!("CORS: Allowing origin: {}", raw),
                None => tracing::warn!("CORS: Ignoring invalid origin '{}'", raw),
            }
            rule
        })
        .collect();

    CorsLayer::new()
        .allow_origin(AllowOrigin::predicate(
            move |origin: &HeaderValue, _parts: &Parts| {
                origin
                    .to_str()
                    .map(|o| rules.iter().any(|rule| rule.matches(o)))
                    .unwrap_or(false)
            },
        ))
        .allow_credentials(true)
        .allow_methods(AllowMethods::mirror_request())
        .allow_headers(AllowHeaders::mirror_request())
}
