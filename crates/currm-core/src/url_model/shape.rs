//! Recognized GitHub URL shapes for revision substitution.

use url::Url;

const RAW_GITHUB_HOST: &str = "raw.githubusercontent.com";
const GITHUB_HOSTS: [&str; 2] = ["github.com", "www.github.com"];

/// Closed set of URL shapes. Each variant records the index of the path
/// segment that names the branch.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UrlShape {
    /// `raw.githubusercontent.com/<owner>/<repo>/<branch>/<path...>`
    RawGithub { branch_segment: usize },
    /// `github.com/<owner>/<repo>/blob/<branch>/<path...>`
    BlobGithub { branch_segment: usize },
    /// Anything else; never rewritten.
    Opaque,
}

impl UrlShape {
    pub fn classify(raw: &str) -> Self {
        let Ok(parsed) = Url::parse(raw) else {
            return UrlShape::Opaque;
        };
        let Some(host) = parsed.host_str() else {
            return UrlShape::Opaque;
        };
        let segments: Vec<&str> = match parsed.path_segments() {
            Some(s) => s.collect(),
            None => return UrlShape::Opaque,
        };

        if host.eq_ignore_ascii_case(RAW_GITHUB_HOST) {
            // owner, repo, branch
            if segments.len() >= 3 {
                return UrlShape::RawGithub { branch_segment: 2 };
            }
            return UrlShape::Opaque;
        }

        if GITHUB_HOSTS.iter().any(|h| host.eq_ignore_ascii_case(h)) {
            // owner, repo, "blob", branch
            if segments.len() >= 4 && segments[2] == "blob" {
                return UrlShape::BlobGithub { branch_segment: 3 };
            }
        }

        UrlShape::Opaque
    }

    /// Rewrite the branch segment of `raw` with `revision`. `Opaque` URLs, and
    /// URLs that no longer parse, are returned unchanged.
    pub fn substitute(self, raw: &str, revision: &str) -> String {
        let index = match self {
            UrlShape::RawGithub { branch_segment } | UrlShape::BlobGithub { branch_segment } => {
                branch_segment
            }
            UrlShape::Opaque => return raw.to_string(),
        };
        let Ok(mut parsed) = Url::parse(raw) else {
            return raw.to_string();
        };
        let mut segments: Vec<String> = match parsed.path_segments() {
            Some(s) => s.map(str::to_string).collect(),
            None => return raw.to_string(),
        };
        let Some(slot) = segments.get_mut(index) else {
            return raw.to_string();
        };
        *slot = revision.to_string();
        // Segments are already percent-encoded; set_path leaves existing escapes alone.
        parsed.set_path(&format!("/{}", segments.join("/")));
        parsed.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn classify_raw() {
        assert_eq!(
            UrlShape::classify("https://raw.githubusercontent.com/o/r/main/path/file.txt"),
            UrlShape::RawGithub { branch_segment: 2 }
        );
        assert_eq!(
            UrlShape::classify("https://raw.githubusercontent.com/o/r/main"),
            UrlShape::RawGithub { branch_segment: 2 }
        );
    }

    #[test]
    fn classify_blob() {
        assert_eq!(
            UrlShape::classify("https://github.com/o/r/blob/main/path/file.txt"),
            UrlShape::BlobGithub { branch_segment: 3 }
        );
    }

    #[test]
    fn classify_opaque() {
        for url in [
            "https://example.com/o/r/main/file.txt",
            "https://raw.githubusercontent.com/o/r",
            "https://github.com/o/r/tree/main/file.txt",
            "https://github.com/o/r",
            "https://gist.github.com/o/r/blob/main/x",
            "not a url",
            "raw.githubusercontent.com/o/r/main/file.txt",
        ] {
            assert_eq!(UrlShape::classify(url), UrlShape::Opaque, "{url}");
        }
    }

    #[test]
    fn substitute_keeps_query_and_escapes() {
        let url = "https://raw.githubusercontent.com/o/r/main/dir%20x/file.txt?token=1";
        let shape = UrlShape::classify(url);
        assert_eq!(
            shape.substitute(url, "abc123"),
            "https://raw.githubusercontent.com/o/r/abc123/dir%20x/file.txt?token=1"
        );
    }

    #[test]
    fn opaque_substitute_is_identity() {
        let url = "https://example.com/a/b/c/d";
        assert_eq!(UrlShape::Opaque.substitute(url, "abc"), url);
    }
}
