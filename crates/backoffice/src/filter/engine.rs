use std::borrow::Cow;

use tracing::debug;

use super::FilterCriteria;
use crate::schema::ListSpec;

/// Read access to the fields a list view filters on.
///
/// Implemented by [`crate::model::Record`]; tests and callers can implement
/// it for their own row types to reuse the engine.
pub trait Filterable {
    /// Text of a searchable field, `None` when absent or not textual.
    fn text_field(&self, name: &str) -> Option<Cow<'_, str>>;

    /// Value of a facet field as compared against criteria, `None` when absent.
    fn facet_value(&self, name: &str) -> Option<Cow<'_, str>>;
}

/// Return the items matching `criteria`, in their original order.
///
/// Text matching is a case-insensitive substring test over the list's
/// searchable fields (any field may match). Facets are ANDed and compared
/// case-sensitively; [`super::ALL`] matches everything and facet names the
/// list does not declare are ignored.
pub fn filter<T>(items: &[T], list: &ListSpec, criteria: &FilterCriteria) -> Vec<T>
where
    T: Filterable + Clone,
{
    let predicate = Predicate::new(list, criteria);
    let matched: Vec<T> = items
        .iter()
        .filter(|item| predicate.matches(*item))
        .cloned()
        .collect();
    debug!(total = items.len(), matched = matched.len(), "filtered collection");
    matched
}

/// Single-item form of [`filter`].
pub fn matches<T: Filterable>(item: &T, list: &ListSpec, criteria: &FilterCriteria) -> bool {
    Predicate::new(list, criteria).matches(item)
}

/// Criteria resolved against one list: lowercased needle, known facets only.
struct Predicate<'a> {
    searchable: &'a [&'a str],
    needle: Option<String>,
    facets: Vec<(&'a str, &'a str)>,
}

impl<'a> Predicate<'a> {
    fn new(list: &'a ListSpec, criteria: &'a FilterCriteria) -> Self {
        let facets = criteria
            .active_facets()
            .filter(|(name, value)| {
                let known = list.has_facet(name);
                if !known {
                    debug!(facet = name, value, "ignoring unknown facet");
                }
                known
            })
            .collect();
        Self {
            searchable: list.searchable,
            needle: criteria.needle(),
            facets,
        }
    }

    fn matches<T: Filterable>(&self, item: &T) -> bool {
        self.text_matches(item) && self.facets_match(item)
    }

    fn text_matches<T: Filterable>(&self, item: &T) -> bool {
        let Some(needle) = &self.needle else {
            return true;
        };
        self.searchable.iter().any(|field| {
            item.text_field(field)
                .is_some_and(|text| text.to_lowercase().contains(needle.as_str()))
        })
    }

    fn facets_match<T: Filterable>(&self, item: &T) -> bool {
        self.facets
            .iter()
            .all(|(name, wanted)| item.facet_value(name).is_some_and(|v| v == *wanted))
    }
}
