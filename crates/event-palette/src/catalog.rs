//! Candidate catalog: eligibility filtering, query matching and ranking.
//!
//! The catalog is a pure view over a borrowed [`ActionRegistry`] and
//! [`Localizer`]. Every call recomputes its result from scratch, so two calls
//! with the same inputs always produce the same sequence.

use crate::model::{ScriptSubject, SearchCandidate};
use crate::registry::ActionRegistry;
use crate::traits::Localizer;

/// Split a query into the uppercase words candidates are matched against.
///
/// Repeated whitespace produces empty words, which match every candidate.
pub fn search_words(query: &str) -> Vec<String> {
    query
        .to_uppercase()
        .split(char::is_whitespace)
        .map(str::to_string)
        .collect()
}

/// Produces the palette candidates for a subject and query.
pub struct CandidateCatalog<'a> {
    registry: &'a ActionRegistry,
    localizer: &'a dyn Localizer,
}

impl<'a> CandidateCatalog<'a> {
    /// Create a catalog over a registry and a localizer.
    pub fn new(registry: &'a ActionRegistry, localizer: &'a dyn Localizer) -> Self {
        Self {
            registry,
            localizer,
        }
    }

    /// Every candidate eligible for `subject`, in registry order.
    ///
    /// Deprecated definitions are never included; actor-only definitions only
    /// when the subject is an actor.
    pub fn full_list(&self, subject: impl Into<ScriptSubject>) -> Vec<SearchCandidate> {
        let is_actor = subject.into().is_actor();

        self.registry
            .iter()
            .filter(|def| !def.deprecated && (is_actor || !def.actor_only))
            .map(|def| {
                let display_name = self
                    .localizer
                    .localize(&def.id)
                    .or(def.name.as_deref().filter(|name| !name.is_empty()))
                    .unwrap_or(&def.id);
                SearchCandidate::new(def, display_name)
            })
            .collect()
    }

    /// Candidates matching every word of `query`, best match first.
    ///
    /// An empty query returns [`full_list`](Self::full_list) unchanged.
    /// Otherwise candidates are ordered by the earliest position at which
    /// any query word occurs in their search key; ties keep registry order.
    pub fn filtered_list(
        &self,
        query: &str,
        subject: impl Into<ScriptSubject>,
    ) -> Vec<SearchCandidate> {
        let full_list = self.full_list(subject);
        if query.is_empty() {
            return full_list;
        }

        let words = search_words(query);
        let mut ranked: Vec<(usize, SearchCandidate)> = full_list
            .into_iter()
            .filter(|candidate| candidate.matches_all(&words))
            .map(|candidate| {
                let first_match = candidate.earliest_match(&words).unwrap_or(usize::MAX);
                (first_match, candidate)
            })
            .collect();

        // sort_by_key is stable
        ranked.sort_by_key(|(first_match, _)| *first_match);

        log::trace!("Query {:?} matched {} candidates", query, ranked.len());
        ranked.into_iter().map(|(_, candidate)| candidate).collect()
    }

    /// Position of `id` in the unfiltered list for `subject`.
    pub fn full_list_position(&self, id: &str, subject: impl Into<ScriptSubject>) -> Option<usize> {
        self.full_list(subject)
            .iter()
            .position(|candidate| candidate.id == id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::ActionDefinition;
    use crate::traits::{NoLocalization, StringTable};
    use pretty_assertions::assert_eq;

    fn registry() -> ActionRegistry {
        ActionRegistry::new(vec![
            ActionDefinition::new("wait").with_name("Wait"),
            ActionDefinition::new("actorMoveTo")
                .with_name("Actor Move To")
                .actor_only(),
            ActionDefinition::new("sceneSwitch").with_name("Switch Scene"),
            ActionDefinition::new("actorHide")
                .with_name("Hide Actor")
                .actor_only()
                .deprecated(),
            ActionDefinition::new("oldFade").deprecated(),
            ActionDefinition::new("musicPlay"),
        ])
        .unwrap()
    }

    fn ids(list: &[SearchCandidate]) -> Vec<&str> {
        list.iter().map(|c| c.id.as_str()).collect()
    }

    #[test]
    fn test_search_words() {
        assert_eq!(search_words("to actor"), vec!["TO", "ACTOR"]);
        assert_eq!(search_words("a  b"), vec!["A", "", "B"]);
        assert_eq!(search_words("a\tb"), vec!["A", "B"]);
    }

    #[test]
    fn test_full_list_excludes_deprecated() {
        let registry = registry();
        let catalog = CandidateCatalog::new(&registry, &NoLocalization);

        for is_actor in [true, false] {
            let list = catalog.full_list(is_actor);
            assert!(list.iter().all(|c| !c.deprecated));
            assert!(!ids(&list).contains(&"oldFade"));
            assert!(!ids(&list).contains(&"actorHide"));
        }
    }

    #[test]
    fn test_full_list_context() {
        let registry = registry();
        let catalog = CandidateCatalog::new(&registry, &NoLocalization);

        assert_eq!(
            ids(&catalog.full_list(true)),
            vec!["wait", "actorMoveTo", "sceneSwitch", "musicPlay"]
        );
        assert_eq!(
            ids(&catalog.full_list(ScriptSubject::Trigger)),
            vec!["wait", "sceneSwitch", "musicPlay"]
        );
    }

    #[test]
    fn test_display_name_fallback() {
        let registry = registry();
        let mut strings = StringTable::new();
        strings.insert("wait", "Pause");
        let catalog = CandidateCatalog::new(&registry, &strings);

        let list = catalog.full_list(true);
        // Localized name wins
        assert_eq!(list[0].display_name, "Pause");
        assert_eq!(list[0].search_key, "PAUSE WAIT");
        // Built-in name
        assert_eq!(list[1].display_name, "Actor Move To");
        // Raw id
        assert_eq!(list[3].display_name, "musicPlay");
        assert_eq!(list[3].search_key, "MUSICPLAY MUSICPLAY");
    }

    #[test]
    fn test_empty_query_returns_full_list() {
        let registry = registry();
        let catalog = CandidateCatalog::new(&registry, &NoLocalization);
        assert_eq!(catalog.filtered_list("", true), catalog.full_list(true));
    }

    #[test]
    fn test_match_requires_all_words() {
        let registry = registry();
        let catalog = CandidateCatalog::new(&registry, &NoLocalization);

        assert_eq!(ids(&catalog.filtered_list("mo", true)), vec!["actorMoveTo"]);
        assert_eq!(ids(&catalog.filtered_list("to actor", true)), vec!["actorMoveTo"]);
        assert!(catalog.filtered_list("move wait", true).is_empty());
        // Actor-only entries stay hidden for other subjects
        assert!(catalog.filtered_list("mo", false).is_empty());
    }

    #[test]
    fn test_every_result_contains_every_word() {
        let registry = registry();
        let catalog = CandidateCatalog::new(&registry, &NoLocalization);

        for query in ["a", "s e", "scene sw", "T", "play music"] {
            let words = search_words(query);
            for candidate in catalog.filtered_list(query, true) {
                for word in &words {
                    assert!(candidate.search_key.contains(word.as_str()));
                }
            }
        }
    }

    #[test]
    fn test_ranked_by_earliest_match() {
        let registry = registry();
        let catalog = CandidateCatalog::new(&registry, &NoLocalization);

        // A: ACTOR MOVE TO at 0, WAIT WAIT at 1, MUSICPLAY at 7
        let list = catalog.filtered_list("a", true);
        assert_eq!(ids(&list), vec!["actorMoveTo", "wait", "musicPlay"]);

        // T: ACTOR at 2, WAIT at 3, SWITCH at 3 (tie keeps registry order)
        let list = catalog.filtered_list("t", true);
        assert_eq!(ids(&list), vec!["actorMoveTo", "wait", "sceneSwitch"]);
    }

    #[test]
    fn test_ties_keep_registry_order() {
        let registry = ActionRegistry::new(vec![
            ActionDefinition::new("b2").with_name("Beta"),
            ActionDefinition::new("a1").with_name("Bear"),
            ActionDefinition::new("c3").with_name("Best"),
        ])
        .unwrap();
        let catalog = CandidateCatalog::new(&registry, &NoLocalization);
        assert_eq!(ids(&catalog.filtered_list("be", true)), vec!["b2", "a1", "c3"]);
    }

    #[test]
    fn test_filtered_list_is_deterministic() {
        let registry = registry();
        let catalog = CandidateCatalog::new(&registry, &NoLocalization);
        for query in ["", "a", "e s", "actor"] {
            assert_eq!(
                catalog.filtered_list(query, true),
                catalog.filtered_list(query, true)
            );
        }
    }

    #[test]
    fn test_full_list_position() {
        let registry = registry();
        let catalog = CandidateCatalog::new(&registry, &NoLocalization);
        assert_eq!(catalog.full_list_position("sceneSwitch", true), Some(2));
        assert_eq!(catalog.full_list_position("sceneSwitch", false), Some(1));
        assert_eq!(catalog.full_list_position("actorMoveTo", false), None);
    }
}
