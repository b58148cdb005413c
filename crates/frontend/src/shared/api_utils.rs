//! Where the reporting API lives.

/// `DASHBOARD_API_URL` set at build time wins; otherwise the page host on
/// port 3000. Empty when there is no window.
pub fn api_base() -> String {
    if let Some(configured) = option_env!("DASHBOARD_API_URL") {
        return normalize_base(configured);
    }
    let window = match web_sys::window() {
        Some(w) => w,
        None => return String::new(),
    };
    let location = window.location();
    let protocol = location.protocol().unwrap_or_else(|_| "http:".to_string());
    let hostname = location
        .hostname()
        .unwrap_or_else(|_| "127.0.0.1".to_string());
    format!("{}//{}:3000", protocol, hostname)
}

fn normalize_base(url: &str) -> String {
    url.trim().trim_end_matches('/').to_string()
}

/// `path` starts with `/api/`
pub fn api_url(path: &str) -> String {
    format!("{}{}", api_base(), path)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_base() {
        assert_eq!(normalize_base("https://api.example.com/"), "https://api.example.com");
        assert_eq!(normalize_base(" http://localhost:3000 "), "http://localhost:3000");
    }
}
