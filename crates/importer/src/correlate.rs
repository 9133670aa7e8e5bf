//! Snapshot correlation: walk the new document against an optional
//! previous export and classify every leaf as changed or unchanged.
//!
//! Both trees are keyed by Workona's stable identifiers, so lookup into
//! the old tree always uses the same map key as the new tree — never
//! the title, which the user may have renamed. A leaf is unchanged only
//! when an old leaf exists at the same key path and carries the exact
//! same URL; the URL is the one field assumed stable per resource
//! identity even when display metadata is edited. Old keys missing from
//! the new document are never visited, so nothing is ever deleted on
//! the strength of a snapshot.

use workona_export::{ResourceItem, TabItem, WorkspaceDocument};

/// Whether a leaf's output is stale relative to the previous export.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Verdict {
    Changed,
    Unchanged,
}

/// Which subtrees of each sub-workspace the walk descends into.
#[derive(Debug, Clone, Copy)]
pub struct Toggles {
    pub resources: bool,
    pub tabs: bool,
}

/// Borrowed view of a leaf item.
#[derive(Debug, Clone, Copy)]
pub enum LeafRef<'a> {
    Resource(&'a ResourceItem),
    Tab(&'a TabItem),
}

impl<'a> LeafRef<'a> {
    pub fn title(&self) -> &'a str {
        match self {
            LeafRef::Resource(item) => &item.title,
            LeafRef::Tab(tab) => &tab.title,
        }
    }

    pub fn url(&self) -> &'a str {
        match self {
            LeafRef::Resource(item) => &item.url,
            LeafRef::Tab(tab) => &tab.url,
        }
    }
}

/// One leaf of the new document together with its ancestry and verdict.
#[derive(Debug, Clone, Copy)]
pub struct LeafDecision<'a> {
    pub group_title: &'a str,
    pub sub_title: &'a str,
    /// Resource collection title; `None` for tabs.
    pub collection_title: Option<&'a str>,
    pub leaf: LeafRef<'a>,
    pub verdict: Verdict,
}

fn verdict(old_url: Option<&str>, new_url: &str) -> Verdict {
    match old_url {
        Some(old) if old == new_url => Verdict::Unchanged,
        _ => Verdict::Changed,
    }
}

/// Lazily walk the new document in insertion order, yielding a decision
/// per leaf. An absent old subtree at any level means every leaf below
/// it is `Changed`.
pub fn leaf_decisions<'a>(
    new: &'a WorkspaceDocument,
    old: Option<&'a WorkspaceDocument>,
    toggles: Toggles,
) -> impl Iterator<Item = LeafDecision<'a>> {
    new.workspaces.iter().flat_map(move |(group_key, group)| {
        let group_title: &'a str = &group.title;
        let old_group = old.and_then(|o| o.workspaces.get(group_key));

        group.workspaces.iter().flat_map(move |(sub_key, sub)| {
            let sub_title: &'a str = &sub.title;
            let old_sub = old_group.and_then(|g| g.workspaces.get(sub_key));

            let resources = toggles
                .resources
                .then(|| {
                    sub.resources.iter().flat_map(move |(coll_key, coll)| {
                        let coll_title: &'a str = &coll.title;
                        let old_coll = old_sub.and_then(|s| s.resources.get(coll_key));

                        coll.resources.iter().map(move |(item_key, item)| {
                            let old_item = old_coll.and_then(|c| c.resources.get(item_key));
                            LeafDecision {
                                group_title,
                                sub_title,
                                collection_title: Some(coll_title),
                                leaf: LeafRef::Resource(item),
                                verdict: verdict(old_item.map(|o| o.url.as_str()), &item.url),
                            }
                        })
                    })
                })
                .into_iter()
                .flatten();

            let tabs = toggles
                .tabs
                .then(|| {
                    sub.tabs.iter().map(move |(tab_key, tab)| {
                        let old_tab = old_sub.and_then(|s| s.tabs.get(tab_key));
                        LeafDecision {
                            group_title,
                            sub_title,
                            collection_title: None,
                            leaf: LeafRef::Tab(tab),
                            verdict: verdict(old_tab.map(|o| o.url.as_str()), &tab.url),
                        }
                    })
                })
                .into_iter()
                .flatten();

            resources.chain(tabs)
        })
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    const ALL: Toggles = Toggles {
        resources: true,
        tabs: true,
    };

    fn doc(url: &str) -> WorkspaceDocument {
        doc_with(url, "X", None)
    }

    fn doc_with(url: &str, title: &str, description: Option<&str>) -> WorkspaceDocument {
        let text = format!(
            r#"{{ "Workspaces": {{ "g1": {{ "title": "G", "workspaces": {{ "s1": {{
                "title": "S",
                "resources": {{ "c1": {{ "title": "R", "resources": {{
                    "r1": {{ "title": "{title}", "url": "{url}"{} }}
                }} }} }},
                "tabs": {{ "t1": {{ "title": "T", "url": "http://tab" }} }}
            }} }} }} }} }}"#,
            description
                .map(|d| format!(r#", "description": "{d}""#))
                .unwrap_or_default()
        );
        WorkspaceDocument::from_json(&text).unwrap()
    }

    #[test]
    fn all_changed_without_a_previous_document() {
        let new = doc("http://a");
        let decisions: Vec<_> = leaf_decisions(&new, None, ALL).collect();
        assert_eq!(decisions.len(), 2);
        assert!(decisions.iter().all(|d| d.verdict == Verdict::Changed));
    }

    #[test]
    fn same_url_at_same_key_is_unchanged() {
        let new = doc("http://a");
        let old = doc("http://a");
        let decisions: Vec<_> = leaf_decisions(&new, Some(&old), ALL).collect();
        assert!(decisions.iter().all(|d| d.verdict == Verdict::Unchanged));
    }

    #[test]
    fn url_is_the_only_change_oracle() {
        // Title and description edits do not make a leaf stale.
        let new = doc_with("http://a", "Renamed", Some("new words"));
        let old = doc_with("http://a", "Original", None);
        let decisions: Vec<_> = leaf_decisions(&new, Some(&old), ALL).collect();
        assert!(decisions.iter().all(|d| d.verdict == Verdict::Unchanged));
    }

    #[test]
    fn changed_url_at_same_key_is_changed() {
        let new = doc("http://new");
        let old = doc("http://old");
        let decisions: Vec<_> = leaf_decisions(&new, Some(&old), ALL).collect();
        let resource = decisions
            .iter()
            .find(|d| matches!(d.leaf, LeafRef::Resource(_)))
            .unwrap();
        assert_eq!(resource.verdict, Verdict::Changed);
        // The tab kept its url, so it stays unchanged.
        let tab = decisions
            .iter()
            .find(|d| matches!(d.leaf, LeafRef::Tab(_)))
            .unwrap();
        assert_eq!(tab.verdict, Verdict::Unchanged);
    }

    #[test]
    fn absent_ancestor_key_marks_descendants_changed() {
        let new = doc("http://a");
        // Same shape, but keyed under a different group id.
        let old = WorkspaceDocument::from_json(
            r#"{ "Workspaces": { "other-group": { "title": "G", "workspaces": { "s1": {
                "title": "S",
                "resources": { "c1": { "title": "R", "resources": {
                    "r1": { "title": "X", "url": "http://a" }
                } } },
                "tabs": { "t1": { "title": "T", "url": "http://tab" } }
            } } } } }"#,
        )
        .unwrap();
        let decisions: Vec<_> = leaf_decisions(&new, Some(&old), ALL).collect();
        assert!(decisions.iter().all(|d| d.verdict == Verdict::Changed));
    }

    #[test]
    fn lookup_is_by_key_not_title() {
        // Old tree has the same url under the same keys but every title
        // renamed; correlation must still find it.
        let new = doc_with("http://a", "New Title", None);
        let mut old = doc_with("http://a", "Old Title", None);
        old.workspaces.get_mut("g1").unwrap().title = "Renamed Group".to_string();
        let decisions: Vec<_> = leaf_decisions(&new, Some(&old), ALL).collect();
        assert!(decisions.iter().all(|d| d.verdict == Verdict::Unchanged));
    }

    #[test]
    fn toggles_prune_subtrees() {
        let new = doc("http://a");

        let only_tabs: Vec<_> = leaf_decisions(
            &new,
            None,
            Toggles {
                resources: false,
                tabs: true,
            },
        )
        .collect();
        assert_eq!(only_tabs.len(), 1);
        assert!(matches!(only_tabs[0].leaf, LeafRef::Tab(_)));

        let only_resources: Vec<_> = leaf_decisions(
            &new,
            None,
            Toggles {
                resources: true,
                tabs: false,
            },
        )
        .collect();
        assert_eq!(only_resources.len(), 1);
        assert!(matches!(only_resources[0].leaf, LeafRef::Resource(_)));
    }

    #[test]
    fn yields_resources_before_tabs_in_insertion_order() {
        let new = WorkspaceDocument::from_json(
            r#"{ "Workspaces": { "g1": { "title": "G", "workspaces": { "s1": {
                "title": "S",
                "resources": { "c1": { "title": "R", "resources": {
                    "r2": { "title": "Second Key First", "url": "http://1" },
                    "r1": { "title": "First Key Second", "url": "http://2" }
                } } },
                "tabs": { "t1": { "title": "T", "url": "http://3" } }
            } } } } }"#,
        )
        .unwrap();
        let titles: Vec<&str> = leaf_decisions(&new, None, ALL)
            .map(|d| d.leaf.title())
            .collect();
        assert_eq!(titles, vec!["Second Key First", "First Key Second", "T"]);
    }

    #[test]
    fn decisions_carry_ancestor_titles() {
        let new = doc("http://a");
        let decisions: Vec<_> = leaf_decisions(&new, None, ALL).collect();
        let resource = &decisions[0];
        assert_eq!(resource.group_title, "G");
        assert_eq!(resource.sub_title, "S");
        assert_eq!(resource.collection_title, Some("R"));
        let tab = &decisions[1];
        assert_eq!(tab.collection_title, None);
    }
}
