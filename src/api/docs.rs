use axum::http::header;
use axum::response::IntoResponse;
use std::sync::LazyLock;

const OPENAPI_TEMPLATE: &str = include_str!("../../openapi.yaml");
const VERSION_PLACEHOLDER: &str = "version: 0.0.0";

/// The bundled document with `info.version` set to the running crate version.
static OPENAPI_DOCUMENT: LazyLock<String> = LazyLock::new(|| render_openapi(env!("CARGO_PKG_VERSION")));

fn render_openapi(version: &str) -> String {
    OPENAPI_TEMPLATE.replacen(VERSION_PLACEHOLDER, &format!("version: {version}"), 1)
}

/// Serves the contact API description as YAML.
pub async fn openapi_yaml() -> impl IntoResponse {
    ([(header::CONTENT_TYPE, "text/yaml")], OPENAPI_DOCUMENT.as_str())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_render_stamps_version_once() {
        let rendered = render_openapi("9.8.7");
        assert!(rendered.contains("  version: 9.8.7\n"));
        assert!(!rendered.contains(VERSION_PLACEHOLDER));
        assert!(rendered.contains("title: Contact Form API"));
    }

    #[test]
    fn test_document_lists_every_contact_route() {
        for route in ["/contact:", "/contact-raw:", "/contacts:", "/health:"] {
            assert!(OPENAPI_DOCUMENT.contains(route), "missing {route}");
        }
    }
}
