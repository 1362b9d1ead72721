use super::RouteTable;
use netkit_domain::route::{RouteKind, RouteRecord};
use netkit_domain::view::ViewRef;
use std::borrow::Cow;

/// Outcome of resolving a location against a [`RouteTable`].
///
/// Resolution is total: a path no declared route claims lands on the wildcard
/// record, so a miss is an ordinary result and never an error.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Resolution<'a> {
    path: String,
    parents: Vec<&'a RouteRecord>,
    leaf: &'a RouteRecord,
}

impl<'a> Resolution<'a> {
    /// The normalized path that was matched.
    #[must_use]
    pub fn path(&self) -> &str {
        &self.path
    }

    /// Innermost matched record.
    #[must_use]
    pub const fn leaf(&self) -> &'a RouteRecord {
        self.leaf
    }

    /// Matched records from the outermost layout down to the leaf.
    pub fn chain(&self) -> impl Iterator<Item = &'a RouteRecord> + '_ {
        self.parents.iter().copied().chain(std::iter::once(self.leaf))
    }

    #[must_use]
    pub fn name(&self) -> Option<&'a str> {
        self.leaf.name()
    }

    #[must_use]
    pub fn view(&self) -> &'a ViewRef {
        &self.leaf.view
    }

    /// `true` when nothing but the wildcard matched.
    #[must_use]
    pub fn is_fallback(&self) -> bool {
        self.leaf.kind == RouteKind::Fallback
    }
}

impl RouteTable {
    /// Resolves a location with first-match-wins semantics.
    ///
    /// Query string and fragment are ignored, percent-escapes are decoded, an empty
    /// location means `/`, one trailing slash is tolerated and comparison is ASCII
    /// case-insensitive.
    #[must_use]
    pub fn resolve(&self, location: &str) -> Resolution<'_> {
        let path = normalize(location);
        let key = path.to_ascii_lowercase();
        let mut parents = Vec::new();

        for record in self.records() {
            if let Some(leaf) = match_record(record, "", &key, &mut parents) {
                return Resolution { path, parents, leaf };
            }
        }

        // The wildcard matches everything, so this is only reached if the
        // table shape were ever broken.
        Resolution { path, parents: Vec::new(), leaf: self.fallback() }
    }
}

fn match_record<'a>(
    record: &'a RouteRecord,
    parent: &str,
    key: &str,
    parents: &mut Vec<&'a RouteRecord>,
) -> Option<&'a RouteRecord> {
    if record.kind == RouteKind::Fallback {
        return Some(record);
    }

    let full = join(parent, &record.path);

    if !record.children.is_empty() {
        parents.push(record);
        for child in &record.children {
            if let Some(leaf) = match_record(child, &full, key, parents) {
                return Some(leaf);
            }
        }
        parents.pop();
        return None;
    }

    (canonical_path(&full) == key).then_some(record)
}

/// The form under which two paths address the same location: percent-decoded,
/// one trailing slash trimmed, ASCII lowercase.
pub(crate) fn canonical_path(path: &str) -> String {
    trim_trailing_slash(&decode(path)).to_ascii_lowercase()
}

fn decode(path: &str) -> Cow<'_, str> {
    urlencoding::decode(path).unwrap_or(Cow::Borrowed(path))
}

/// Joins a child path onto its parent. Absolute children replace the parent,
/// an empty child inherits it.
fn join(parent: &str, child: &str) -> String {
    if child.starts_with('/') {
        child.to_owned()
    } else if child.is_empty() {
        if parent.is_empty() { "/".to_owned() } else { parent.to_owned() }
    } else {
        format!("{}/{child}", parent.trim_end_matches('/'))
    }
}

fn normalize(location: &str) -> String {
    let end = location.find(['?', '#']).unwrap_or(location.len());
    let path = decode(&location[..end]);

    let path = if path.starts_with('/') { path.into_owned() } else { format!("/{path}") };
    trim_trailing_slash(&path).to_owned()
}

fn trim_trailing_slash(path: &str) -> &str {
    match path.strip_suffix('/') {
        Some(rest) if !rest.is_empty() => rest,
        _ => path,
    }
}
