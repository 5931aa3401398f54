//! Deployment base path.
//!
//! A compile-time `PUBLIC_URL` (e.g. `/helpmap` when served from a
//! subdirectory) prefixes asset URLs and becomes the router basename.

const PUBLIC_URL: &str = match option_env!("PUBLIC_URL") {
    Some(url) => url,
    None => "",
};

/// URL of a static asset under the deployment base.
#[must_use]
pub fn asset_path(relative: &str) -> String {
    join(PUBLIC_URL, relative)
}

/// Router basename, or `None` when served from the site root.
#[must_use]
pub fn router_base() -> Option<String> {
    basename(PUBLIC_URL)
}

fn join(base: &str, relative: &str) -> String {
    format!(
        "{}/{}",
        base.trim().trim_end_matches('/'),
        relative.trim_start_matches('/')
    )
}

fn basename(base: &str) -> Option<String> {
    let base = base.trim().trim_end_matches('/');
    (!base.is_empty()).then(|| base.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn root_deployments_use_absolute_paths() {
        assert_eq!(join("", "img/logo.svg"), "/img/logo.svg");
        assert_eq!(join("", "/img/logo.svg"), "/img/logo.svg");
        assert_eq!(basename(""), None);
        assert_eq!(basename("/"), None);
    }

    #[test]
    fn subdirectory_deployments_prefix_paths() {
        assert_eq!(join("/helpmap/", "img/logo.svg"), "/helpmap/img/logo.svg");
        assert_eq!(basename("/helpmap/"), Some("/helpmap".to_string()));
    }
}
