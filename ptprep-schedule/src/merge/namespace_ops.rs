use super::PrefixPolicy;
use std::{collections::HashSet, path::Path};

/// derives the namespace prefix of a feed from its schedule path: the name of
/// the parent directory, or the file name when there is no parent directory.
/// every character outside `[A-Za-z0-9]` becomes `_`. a blank result falls
/// back to `feed<ordinal>`.
pub fn derive_prefix(schedule_path: &Path, ordinal: usize) -> String {
    let candidate = schedule_path
        .parent()
        .and_then(|parent| parent.file_name())
        .or_else(|| schedule_path.file_name())
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_default();
    let sanitized = candidate
        .chars()
        .map(|c| if c.is_ascii_alphanumeric() { c } else { '_' })
        .collect::<String>();
    if sanitized.trim().is_empty() {
        format!("feed{ordinal}")
    } else {
        sanitized
    }
}

/// hands out the prefixes of one merge run
#[derive(Debug)]
pub struct NamespaceRegistry {
    policy: PrefixPolicy,
    claimed: HashSet<String>,
}

impl NamespaceRegistry {
    pub fn new(policy: PrefixPolicy) -> NamespaceRegistry {
        NamespaceRegistry {
            policy,
            claimed: HashSet::new(),
        }
    }

    /// the prefix for the feed at `ordinal` whose schedule lives at `schedule_path`
    pub fn claim(&mut self, schedule_path: &Path, ordinal: usize) -> String {
        let derived = derive_prefix(schedule_path, ordinal);
        let prefix = match self.policy {
            PrefixPolicy::Derived => {
                if self.claimed.contains(&derived) {
                    log::warn!(
                        "feed {ordinal} ({}) reuses prefix '{derived}' of an earlier feed",
                        schedule_path.display()
                    );
                }
                derived
            }
            PrefixPolicy::Disambiguated => {
                if self.overlaps_claimed(&derived) {
                    let disambiguated = self.disambiguate(&derived, ordinal);
                    log::info!(
                        "feed {ordinal} ({}) uses prefix '{disambiguated}' since '{derived}' overlaps an earlier feed",
                        schedule_path.display()
                    );
                    disambiguated
                } else {
                    derived
                }
            }
        };
        self.claimed.insert(prefix.clone());
        prefix
    }

    /// true if `candidate` equals a claimed prefix or either one is the other
    /// followed by `_`. only then can `<a>_<id>` and `<b>_<id>` spell the
    /// same merged id.
    fn overlaps_claimed(&self, candidate: &str) -> bool {
        self.claimed.iter().any(|claimed| {
            claimed == candidate
                || extends(candidate, claimed)
                || extends(claimed, candidate)
        })
    }

    /// drops the `_` separators of the derived prefix and appends the ordinal
    /// until nothing claimed overlaps. the result has no `_`, so it can only
    /// overlap a claimed prefix at least as long as itself.
    fn disambiguate(&self, derived: &str, ordinal: usize) -> String {
        let suffix = ordinal.to_string();
        let mut candidate = derived.replace('_', "");
        candidate.push_str(&suffix);
        while self.overlaps_claimed(&candidate) {
            candidate.push_str(&suffix);
        }
        candidate
    }
}

/// true if `longer` is `base` followed by `_`, e.g. `tpe_bus` extends `tpe`
fn extends(longer: &str, base: &str) -> bool {
    longer
        .strip_prefix(base)
        .is_some_and(|rest| rest.starts_with('_'))
}
