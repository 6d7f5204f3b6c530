use percent_encoding::{percent_decode_str, utf8_percent_encode, AsciiSet, NON_ALPHANUMERIC};
use rustc_hash::FxHashMap;
use std::path::{Path, PathBuf};
use url::Url;

pub const SCHEME: &str = "app";

const DATA_AUTHORITY: &str = "data";
const EDIT_AUTHORITY: &str = "edit";

/// Everything but RFC 3986 unreserved characters.
const PATH_SEGMENT: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'.')
    .remove(b'_')
    .remove(b'~');

/// A recognised `app://` address.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AppUri {
    /// `app://data/<relative-path>`
    Data(PathBuf),
    /// `app://edit/<absolute-path>`
    Page(PathBuf),
    /// `app://edit/<absolute-path>?api=<name>&...`
    Api {
        path: PathBuf,
        name: String,
        args: FxHashMap<String, String>,
    },
}

impl AppUri {
    /// Returns `None` for anything that is not a well-formed `app://` address
    /// this application serves.
    pub fn parse(uri: &str) -> Option<Self> {
        let url = Url::parse(uri).ok()?;
        if url.scheme() != SCHEME {
            return None;
        }
        let decoded = percent_decode_str(url.path()).decode_utf8().ok()?;

        match url.host_str()? {
            DATA_AUTHORITY => {
                if url.query().is_some_and(|q| !q.is_empty()) {
                    return None;
                }
                let relative = decoded.trim_start_matches('/');
                Some(Self::Data(PathBuf::from(relative)))
            }
            EDIT_AUTHORITY => {
                let path = edit_path(&decoded)?;
                match url.query() {
                    None | Some("") => Some(Self::Page(path)),
                    Some(_) => parse_api(&url, path),
                }
            }
            _ => None,
        }
    }
}

fn edit_path(decoded: &str) -> Option<PathBuf> {
    let stripped = decoded.strip_prefix('/').unwrap_or(decoded);
    if stripped.is_empty() {
        return None;
    }
    let candidate = Path::new(stripped);
    if candidate.is_absolute() {
        Some(candidate.to_path_buf())
    } else {
        Some(PathBuf::from(decoded))
    }
}

fn parse_api(url: &Url, path: PathBuf) -> Option<AppUri> {
    let mut names = Vec::new();
    let mut args = FxHashMap::default();
    for (key, value) in url.query_pairs() {
        if key == "api" {
            names.push(value.into_owned());
        } else {
            args.insert(key.into_owned(), value.into_owned());
        }
    }
    if names.len() != 1 {
        return None;
    }
    args.entry("path".to_string())
        .or_insert_with(|| path.to_string_lossy().into_owned());
    Some(AppUri::Api {
        path,
        name: names.swap_remove(0),
        args,
    })
}

/// Address of the editor page for `path`.
pub fn edit_uri(path: &Path) -> String {
    let raw = path.to_string_lossy();
    format!(
        "{SCHEME}://{EDIT_AUTHORITY}/{}",
        utf8_percent_encode(&raw, PATH_SEGMENT)
    )
}

#[cfg(test)]
#[path = "../../../tests/unit/kernel/router/uri.rs"]
mod tests;
