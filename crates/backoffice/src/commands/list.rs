use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::filter::{filter, FilterCriteria};
use crate::schema::EntitySchema;
use crate::store::Repository;

/// Search and facet-filter an entity's collection.
///
/// An empty result carries the list view's empty-state message. Facets the
/// list does not declare are ignored by the filter and reported as warnings.
pub fn run<R: Repository>(repo: &R, schema: &EntitySchema, criteria: &FilterCriteria) -> Result<CmdResult> {
    let records = repo.list(schema.name)?;
    let listed = filter(&records, &schema.list, criteria);

    let mut result = CmdResult::default();
    for name in criteria.facets.keys() {
        if !schema.list.has_facet(name) {
            result.add_message(CmdMessage::warning(format!(
                "Ignoring unknown {} facet: {}",
                schema.name, name
            )));
        }
    }
    if listed.is_empty() {
        result.add_message(CmdMessage::info(format!("No {} found", schema.plural)));
    }
    Ok(result.with_listed(listed))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::entities::{CATEGORY, FAQ};
    use crate::store::memory::fixtures::RepoFixture;
    use crate::store::memory::InMemoryRepository;

    fn names(result: &CmdResult) -> Vec<&str> {
        result.listed.iter().map(|r| r.text("name").unwrap()).collect()
    }

    #[test]
    fn facet_keeps_original_order() {
        let fixture = RepoFixture::new().with_categories(&["ACTIVE", "ACTIVE", "ACTIVE", "INACTIVE"]);
        let result = run(
            &fixture.repo,
            &CATEGORY,
            &FilterCriteria::new().facet("status", "ACTIVE"),
        )
        .unwrap();
        assert_eq!(names(&result), vec!["Category 1", "Category 2", "Category 3"]);
        assert!(result.messages.is_empty());
    }

    #[test]
    fn search_matches_description() {
        let fixture = RepoFixture::new()
            .with_record(
                "category",
                &[("name", "Technology"), ("description", "Latest tech news"), ("status", "ACTIVE")],
            )
            .with_record("category", &[("name", "Design"), ("status", "ACTIVE")]);
        let result = run(&fixture.repo, &CATEGORY, &FilterCriteria::new().search("TECH")).unwrap();
        assert_eq!(names(&result), vec!["Technology"]);
    }

    #[test]
    fn empty_result_has_empty_state_message() {
        let repo = InMemoryRepository::new();
        let result = run(&repo, &FAQ, &FilterCriteria::new()).unwrap();
        assert!(result.listed.is_empty());
        assert_eq!(result.messages, vec![CmdMessage::info("No FAQs found")]);
    }

    #[test]
    fn unknown_facet_is_ignored_with_warning() {
        let fixture = RepoFixture::new().with_categories(&["ACTIVE", "INACTIVE"]);
        let result = run(
            &fixture.repo,
            &CATEGORY,
            &FilterCriteria::new().facet("colour", "red"),
        )
        .unwrap();
        assert_eq!(result.listed.len(), 2);
        assert_eq!(
            result.messages,
            vec![CmdMessage::warning("Ignoring unknown category facet: colour")]
        );
    }

    #[test]
    fn all_sentinel_lists_everything() {
        let fixture = RepoFixture::new().with_categories(&["ACTIVE", "INACTIVE"]);
        let result = run(
            &fixture.repo,
            &CATEGORY,
            &FilterCriteria::new().facet("status", "all"),
        )
        .unwrap();
        assert_eq!(result.listed.len(), 2);
    }
}
