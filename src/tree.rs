/// URL tree construction: a flat list of archived URLs becomes a nested
/// hierarchy keyed by hostname and path segment.
use std::collections::HashMap;

use percent_encoding::percent_decode_str;
use url::Url;

/// Leaf key used when a URL has no path components beyond the hostname.
pub const INDEX_KEY: &str = "index";

/// The link pair held by a terminal node.
#[derive(Debug, Clone, PartialEq)]
pub struct LeafLinks {
    pub live_url: String,
    pub archive_url: String,
}

/// A node in the URL tree: either an interior branch or a terminal link pair.
#[derive(Debug, Clone, PartialEq)]
pub enum UrlNode {
    Branch(Branch),
    Leaf(LeafLinks),
}

/// Insertion-ordered map from path segment to child node.
///
/// Entries live in a vector so iteration follows first-occurrence order of
/// each segment and overwriting a key keeps its original position; a hash
/// index beside the vector keeps key lookups constant-time, so building a
/// tree stays linear in the total segment count even for very wide branches.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Branch {
    entries: Vec<(String, UrlNode)>,
    index: HashMap<String, usize>,
}

impl Branch {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn get(&self, key: &str) -> Option<&UrlNode> {
        self.index.get(key).map(|&idx| &self.entries[idx].1)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &UrlNode)> {
        self.entries.iter().map(|(k, node)| (k.as_str(), node))
    }

    /// Overwrite the node at `key`, or append a new entry if the key is new.
    fn set(&mut self, key: &str, node: UrlNode) {
        match self.index.get(key) {
            Some(&idx) => self.entries[idx].1 = node,
            None => {
                self.index.insert(key.to_string(), self.entries.len());
                self.entries.push((key.to_string(), node));
            }
        }
    }

    /// Walk into the branch at `key`, creating it if absent. A leaf already
    /// sitting at `key` is replaced: the later write wins.
    fn walk_branch(&mut self, key: &str) -> &mut Branch {
        let idx = match self.index.get(key) {
            Some(&idx) => {
                if !matches!(self.entries[idx].1, UrlNode::Branch(_)) {
                    self.entries[idx].1 = UrlNode::Branch(Branch::new());
                }
                idx
            }
            None => {
                let idx = self.entries.len();
                self.index.insert(key.to_string(), idx);
                self.entries
                    .push((key.to_string(), UrlNode::Branch(Branch::new())));
                idx
            }
        };
        match &mut self.entries[idx].1 {
            UrlNode::Branch(branch) => branch,
            UrlNode::Leaf(_) => unreachable!("entry was just made a branch"),
        }
    }
}

/// Build the URL tree from raw CDX rows.
///
/// Malformed URLs are logged and skipped; the build itself never fails.
/// Given the same input order the result is identical on every run.
pub fn build<I, S>(urls: I) -> Branch
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut root = Branch::new();
    for raw in urls {
        let raw = raw.as_ref();
        if let Err(err) = insert_url(&mut root, raw) {
            log::warn!("skipping bad URL {:?}: {}", raw, err);
        }
    }
    root
}

/// Archived-snapshot reference for a recorded URL. The snapshot itself is
/// never validated.
pub fn archive_url(raw: &str) -> String {
    format!("https://web.archive.org/web/*/{}", raw)
}

fn insert_url(root: &mut Branch, raw: &str) -> Result<(), url::ParseError> {
    let parsed = Url::parse(raw)?;
    let host = parsed.host_str().ok_or(url::ParseError::EmptyHost)?;

    let mut segments = vec![host.to_string()];
    segments.extend(
        parsed
            .path()
            .split('/')
            .filter(|s| !s.is_empty())
            .map(|s| percent_decode_str(s).decode_utf8_lossy().into_owned()),
    );
    if segments.len() == 1 {
        segments.push(INDEX_KEY.to_string());
    }

    let mut node = root;
    for segment in &segments[..segments.len() - 1] {
        node = node.walk_branch(segment);
    }
    let leaf = segments.last().map(String::as_str).unwrap_or(INDEX_KEY);
    node.set(
        leaf,
        UrlNode::Leaf(LeafLinks {
            live_url: raw.to_string(),
            archive_url: archive_url(raw),
        }),
    );
    Ok(())
}
