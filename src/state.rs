/// Application state for the Wayfinder page: current lookup form values,
/// the URL tree, per-node disclosure flags, and the fetch generation used to
/// discard stale responses.
use std::collections::HashMap;
use std::rc::Rc;

use yew::Reducible;

use crate::config::{AppConfig, DEFAULT_LIMIT, HistoryEntry, snap_limit};
use crate::tree::Branch;

// Joins path segments into a stable node key. Decoded segments can contain
// '/', so use a control character that cannot appear in them.
const PATH_SEPARATOR: &str = "\u{1f}";

/// Per-node expand/collapse flags keyed by the node's path-segment chain.
/// Entries are created lazily on first toggle; every node starts collapsed.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct DisclosureState {
    open: HashMap<String, bool>,
}

impl DisclosureState {
    pub fn new() -> Self {
        Self::default()
    }

    fn key(path: &[String]) -> String {
        path.join(PATH_SEPARATOR)
    }

    pub fn is_open(&self, path: &[String]) -> bool {
        self.open.get(&Self::key(path)).copied().unwrap_or(false)
    }

    /// Flip one node's state. No other node is affected.
    pub fn toggle(&mut self, path: &[String]) {
        let expanded = self.open.entry(Self::key(path)).or_insert(false);
        *expanded = !*expanded;
    }
}

/// State transitions. Dispatched by the UI, applied by [`AppState::reduce`].
pub enum AppAction {
    ConfigLoaded(AppConfig),
    SetDomain(String),
    SetLimit(u32),
    /// A fetch was issued under the given generation number.
    FetchIssued(u64),
    /// A fetch finished; the tree is installed only if it is the newest.
    TreeReady { generation: u64, tree: Branch },
    Toggle(Vec<String>),
}

/// Single owner of all page state, updated through explicit actions.
#[derive(Debug, Clone, PartialEq)]
pub struct AppState {
    pub domain: String,
    pub limit: u32,
    pub blocklist: Vec<String>,
    pub history: Vec<HistoryEntry>,
    pub tree: Option<Branch>,
    pub disclosure: DisclosureState,
    latest_request: u64,
}

impl AppState {
    pub fn new() -> Self {
        AppState {
            domain: String::new(),
            limit: DEFAULT_LIMIT,
            blocklist: Vec::new(),
            history: Vec::new(),
            tree: None,
            disclosure: DisclosureState::new(),
            latest_request: 0,
        }
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}

impl Reducible for AppState {
    type Action = AppAction;

    fn reduce(self: Rc<Self>, action: AppAction) -> Rc<Self> {
        let mut next = (*self).clone();
        match action {
            AppAction::ConfigLoaded(config) => {
                next.domain = config.default_domain;
                // An off-list configured limit would leave the selector
                // showing a different value than the queries use.
                next.limit = snap_limit(config.default_limit);
                next.blocklist = config.blocklist;
                next.history = config.history;
            }
            AppAction::SetDomain(domain) => next.domain = domain,
            AppAction::SetLimit(limit) => next.limit = limit,
            AppAction::FetchIssued(generation) => next.latest_request = generation,
            AppAction::TreeReady { generation, tree } => {
                // Only the response matching the latest issued request wins;
                // anything older is discarded wholesale.
                if generation == next.latest_request {
                    next.tree = Some(tree);
                }
            }
            AppAction::Toggle(path) => next.disclosure.toggle(&path),
        }
        next.into()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tree::build;

    fn path(segments: &[&str]) -> Vec<String> {
        segments.iter().map(|s| s.to_string()).collect()
    }

    fn reduce(state: AppState, action: AppAction) -> AppState {
        (*Rc::new(state).reduce(action)).clone()
    }

    #[test]
    fn test_nodes_start_collapsed() {
        let disclosure = DisclosureState::new();
        assert!(!disclosure.is_open(&path(&["a.com", "x"])));
        assert!(!disclosure.is_open(&[]));
    }

    #[test]
    fn test_toggle_flips_one_node_only() {
        let mut disclosure = DisclosureState::new();
        disclosure.toggle(&path(&["a.com", "x"]));

        assert!(disclosure.is_open(&path(&["a.com", "x"])));
        // Ancestor, sibling, and child are untouched.
        assert!(!disclosure.is_open(&path(&["a.com"])));
        assert!(!disclosure.is_open(&path(&["a.com", "y"])));
        assert!(!disclosure.is_open(&path(&["a.com", "x", "z"])));
    }

    #[test]
    fn test_toggle_twice_collapses_again() {
        let mut disclosure = DisclosureState::new();
        let p = path(&["a.com"]);

        disclosure.toggle(&p);
        disclosure.toggle(&p);

        assert!(!disclosure.is_open(&p));
    }

    #[test]
    fn test_sibling_branches_can_be_open_together() {
        let mut disclosure = DisclosureState::new();
        disclosure.toggle(&path(&["a.com", "x"]));
        disclosure.toggle(&path(&["a.com", "y"]));

        assert!(disclosure.is_open(&path(&["a.com", "x"])));
        assert!(disclosure.is_open(&path(&["a.com", "y"])));
    }

    #[test]
    fn test_path_keys_do_not_collide_on_slash_segments() {
        let mut disclosure = DisclosureState::new();
        disclosure.toggle(&path(&["a.com", "x/y"]));

        assert!(!disclosure.is_open(&path(&["a.com", "x", "y"])));
    }

    #[test]
    fn test_config_loaded_populates_form_and_history() {
        let config = AppConfig {
            default_domain: "example.com".to_string(),
            default_limit: 500,
            blocklist: vec!["evil.com".to_string()],
            history: vec![HistoryEntry {
                domain: "example.com".to_string(),
                timestamp: "2024-01-01T00:00:00Z".to_string(),
            }],
        };

        let state = reduce(AppState::new(), AppAction::ConfigLoaded(config));

        assert_eq!(state.domain, "example.com");
        assert_eq!(state.limit, 500);
        assert_eq!(state.blocklist, vec!["evil.com".to_string()]);
        assert_eq!(state.history.len(), 1);
    }

    #[test]
    fn test_off_list_config_limit_snaps_to_an_option() {
        let config = AppConfig {
            default_limit: 200,
            ..Default::default()
        };

        let state = reduce(AppState::new(), AppAction::ConfigLoaded(config));

        assert_eq!(state.limit, 100);
    }

    #[test]
    fn test_latest_tree_is_installed() {
        let state = reduce(AppState::new(), AppAction::FetchIssued(1));
        let state = reduce(
            state,
            AppAction::TreeReady {
                generation: 1,
                tree: build(["https://a.com/x"]),
            },
        );

        assert!(state.tree.is_some());
    }

    #[test]
    fn test_stale_tree_is_discarded() {
        let state = reduce(AppState::new(), AppAction::FetchIssued(1));
        let state = reduce(state, AppAction::FetchIssued(2));
        let state = reduce(
            state,
            AppAction::TreeReady {
                generation: 1,
                tree: build(["https://stale.com/x"]),
            },
        );

        assert!(state.tree.is_none());

        let state = reduce(
            state,
            AppAction::TreeReady {
                generation: 2,
                tree: build(["https://fresh.com/x"]),
            },
        );

        let tree = state.tree.expect("newest tree installed");
        assert!(tree.get("fresh.com").is_some());
    }

    #[test]
    fn test_stale_tree_does_not_replace_current_one() {
        let state = reduce(AppState::new(), AppAction::FetchIssued(1));
        let state = reduce(state, AppAction::FetchIssued(2));
        let state = reduce(
            state,
            AppAction::TreeReady {
                generation: 2,
                tree: build(["https://fresh.com/x"]),
            },
        );
        let state = reduce(
            state,
            AppAction::TreeReady {
                generation: 1,
                tree: build(["https://stale.com/x"]),
            },
        );

        let tree = state.tree.expect("tree present");
        assert!(tree.get("fresh.com").is_some());
        assert!(tree.get("stale.com").is_none());
    }

    #[test]
    fn test_disclosure_survives_tree_replacement() {
        let state = reduce(AppState::new(), AppAction::Toggle(path(&["a.com"])));
        let state = reduce(state, AppAction::FetchIssued(1));
        let state = reduce(
            state,
            AppAction::TreeReady {
                generation: 1,
                tree: build(["https://a.com/x"]),
            },
        );

        // Same path in the rebuilt tree stays expanded.
        assert!(state.disclosure.is_open(&path(&["a.com"])));
    }

    #[test]
    fn test_set_domain_and_limit() {
        let state = reduce(AppState::new(), AppAction::SetDomain("b.org".to_string()));
        let state = reduce(state, AppAction::SetLimit(5000));

        assert_eq!(state.domain, "b.org");
        assert_eq!(state.limit, 5000);
    }
}
