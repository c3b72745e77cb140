/// Fragment (and path segment) that opens the admin panel on entry.
pub const ADMIN_MARKER: &str = "admin";

/// Where a visitor landed: request path plus the optional `#fragment`.
///
/// Browsers never send the fragment, so server-side entries use the
/// `/admin` path instead; both spellings mean the same thing.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Location {
    pub path: String,
    pub fragment: Option<String>,
}

impl Location {
    pub fn new(path: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            fragment: None,
        }
    }

    /// Splits `"/#admin"` into path `/` and fragment `admin`.
    pub fn parse(raw: &str) -> Self {
        match raw.split_once('#') {
            Some((path, fragment)) => Self {
                path: path.to_string(),
                fragment: Some(fragment.to_string()).filter(|f| !f.is_empty()),
            },
            None => Self::new(raw),
        }
    }

    pub fn is_admin_entry(&self) -> bool {
        if self.fragment.as_deref() == Some(ADMIN_MARKER) {
            return true;
        }
        self.path.trim_end_matches('/') == format!("/{}", ADMIN_MARKER)
    }
}
