//! Name filter (pure).

use crate::model::entity::Entity;

/// Return the entities whose `name` contains `filter`, ignoring case.
///
/// Relative order is preserved. An empty filter returns every entity.
/// The input slice is never modified.
pub fn filter_entities(entities: &[Entity], filter: &str) -> Vec<Entity> {
    if filter.is_empty() {
        return entities.to_vec();
    }

    let needle = filter.to_lowercase();
    entities
        .iter()
        .filter(|entity| name_matches(&entity.name, &needle))
        .cloned()
        .collect()
}

/// Case-insensitive substring test. `needle` must already be lowercase.
fn name_matches(name: &str, needle: &str) -> bool {
    name.to_lowercase().contains(needle)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn people() -> Vec<Entity> {
        vec![
            Entity::new("Luke Skywalker", "172", "77"),
            Entity::new("C-3PO", "167", "75"),
            Entity::new("Leia Organa", "150", "49"),
            Entity::new("Owen Lars", "178", "120"),
        ]
    }

    #[test]
    fn empty_filter_returns_all_in_order() {
        let entities = people();
        assert_eq!(filter_entities(&entities, ""), entities);
    }

    #[test]
    fn matches_case_insensitively() {
        let result = filter_entities(&people(), "LE");
        let names: Vec<_> = result.iter().map(|e| e.name.as_str()).collect();
        assert_eq!(names, vec!["Leia Organa"]);
    }

    #[test]
    fn matches_anywhere_in_name() {
        let result = filter_entities(&people(), "s");
        let names: Vec<_> = result.iter().map(|e| e.name.as_str()).collect();
        assert_eq!(names, vec!["Luke Skywalker", "Owen Lars"]);
    }

    #[test]
    fn no_match_returns_empty() {
        assert!(filter_entities(&people(), "yoda").is_empty());
    }

    #[test]
    fn whitespace_is_a_literal_filter() {
        let result = filter_entities(&people(), " ");
        assert_eq!(result.len(), 3, "C-3PO has no space");
    }

    #[test]
    fn input_is_unchanged() {
        let entities = people();
        let before = entities.clone();
        let _ = filter_entities(&entities, "luke");
        assert_eq!(entities, before);
    }

    #[test]
    fn empty_collection() {
        assert!(filter_entities(&[], "le").is_empty());
        assert!(filter_entities(&[], "").is_empty());
    }
}
