//! Problems found in the primary file tree

use serde::{Deserialize, Serialize};

use super::diagnostic::{render_duplicate, IssueKind, Rule};
use crate::shared::models::{AreaKey, CategoryKey, Entry, IdKey};

/// Every kind of problem the hierarchy walker and reconciler can report.
///
/// Each variant carries only what its message needs; the affected entries
/// travel alongside in the owning `Diagnostic`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "SCREAMING_SNAKE_CASE")]
pub enum LintIssue {
    AreaDifferentFromJdex { area: AreaKey, jdex_name: String },
    AreaNotInJdex { area: AreaKey },
    CategoryDifferentFromJdex { category: CategoryKey, jdex_name: String },
    CategoryInWrongArea { category_area: AreaKey, file_area: AreaKey },
    CategoryNotInJdex { category: CategoryKey },
    DuplicateArea { area: AreaKey },
    DuplicateCategory { category: CategoryKey },
    DuplicateId { id: IdKey },
    FileOutsideId,
    IdDifferentFromJdex { id: IdKey, jdex_name: String },
    IdInWrongCategory { id_ac: CategoryKey, file_ac: CategoryKey },
    IdNotInJdex { id: IdKey },
    InvalidAreaName,
    InvalidCategoryName,
    InvalidIdName,
    NonemptyInbox { num_items: usize },
}

pub(crate) const LINT_RULES: &[Rule] = &[
    Rule {
        kind: "AREA_DIFFERENT_FROM_JDEX",
        explanation: "An area was found, the name of which is different from its corresponding JDex entry.",
        fix: "Update the one that is incorrect.",
    },
    Rule {
        kind: "AREA_NOT_IN_JDEX",
        explanation: "An area was found in your files that is missing from your JDex.",
        fix: "Go add a corresponding entry to your JDex, or delete this if it's unused.",
    },
    Rule {
        kind: "CATEGORY_DIFFERENT_FROM_JDEX",
        explanation: "A category was found, the name of which is different from its corresponding JDex entry.",
        fix: "Update the one that is incorrect.",
    },
    Rule {
        kind: "CATEGORY_IN_WRONG_AREA",
        explanation: "Some categories are in the wrong area.",
        fix: "Move them into the correct area folder.",
    },
    Rule {
        kind: "CATEGORY_NOT_IN_JDEX",
        explanation: "A category was found in the files that is missing from the JDex.",
        fix: "Go add a corresponding entry to your JDex.",
    },
    Rule {
        kind: "DUPLICATE_AREA",
        explanation: "Duplicate areas were used.",
        fix: "Assign a new area to one of them.",
    },
    Rule {
        kind: "DUPLICATE_CATEGORY",
        explanation: "Duplicate categories were used.",
        fix: "Assign a new category to one of them.",
    },
    Rule {
        kind: "DUPLICATE_ID",
        explanation: "Duplicate IDs were used.",
        fix: "Assign a new ID to one of them.",
    },
    Rule {
        kind: "FILE_OUTSIDE_ID",
        explanation: "Files were found outside of IDs.",
        fix: "Files should only be kept in IDs and not higher in the hierarchy.",
    },
    Rule {
        kind: "ID_DIFFERENT_FROM_JDEX",
        explanation: "An ID was found, the name of which is different from its corresponding JDex entry.",
        fix: "Update the one that is incorrect.",
    },
    Rule {
        kind: "ID_IN_WRONG_CATEGORY",
        explanation: "Some IDs are in the wrong category.",
        fix: "Move them into the correct category folder.",
    },
    Rule {
        kind: "ID_NOT_IN_JDEX",
        explanation: "An ID was found in the files that is missing from the JDex.",
        fix: "Go add a corresponding entry to your JDex.",
    },
    Rule {
        kind: "INVALID_AREA_NAME",
        explanation: "Some areas have invalid names.",
        fix: "Valid area names look like \"10-19 Life Admin\", so edit the names to match that format.",
    },
    Rule {
        kind: "INVALID_CATEGORY_NAME",
        explanation: "Some categories have invalid names.",
        fix: "Valid category names look like \"11 Me, Myself, & I\", so edit the names to match that format.",
    },
    Rule {
        kind: "INVALID_ID_NAME",
        explanation: "Some IDs have invalid names.",
        fix: "Valid ID names look like \"11.11 A Cool Project\", so edit the names to match that format.",
    },
    Rule {
        kind: "NONEMPTY_INBOX",
        explanation: "Files were found in an inbox.",
        fix: "Go sort them into the appropriate IDs.",
    },
];

impl IssueKind for LintIssue {
    fn kind_name(&self) -> &'static str {
        match self {
            LintIssue::AreaDifferentFromJdex { .. } => "AREA_DIFFERENT_FROM_JDEX",
            LintIssue::AreaNotInJdex { .. } => "AREA_NOT_IN_JDEX",
            LintIssue::CategoryDifferentFromJdex { .. } => "CATEGORY_DIFFERENT_FROM_JDEX",
            LintIssue::CategoryInWrongArea { .. } => "CATEGORY_IN_WRONG_AREA",
            LintIssue::CategoryNotInJdex { .. } => "CATEGORY_NOT_IN_JDEX",
            LintIssue::DuplicateArea { .. } => "DUPLICATE_AREA",
            LintIssue::DuplicateCategory { .. } => "DUPLICATE_CATEGORY",
            LintIssue::DuplicateId { .. } => "DUPLICATE_ID",
            LintIssue::FileOutsideId => "FILE_OUTSIDE_ID",
            LintIssue::IdDifferentFromJdex { .. } => "ID_DIFFERENT_FROM_JDEX",
            LintIssue::IdInWrongCategory { .. } => "ID_IN_WRONG_CATEGORY",
            LintIssue::IdNotInJdex { .. } => "ID_NOT_IN_JDEX",
            LintIssue::InvalidAreaName => "INVALID_AREA_NAME",
            LintIssue::InvalidCategoryName => "INVALID_CATEGORY_NAME",
            LintIssue::InvalidIdName => "INVALID_ID_NAME",
            LintIssue::NonemptyInbox { .. } => "NONEMPTY_INBOX",
        }
    }

    fn rules() -> &'static [Rule] {
        LINT_RULES
    }

    fn render(&self, files: &[Entry]) -> String {
        let subject = files.first().map(Entry::nesting_path).unwrap_or_default();
        match self {
            LintIssue::AreaDifferentFromJdex { jdex_name, .. }
            | LintIssue::CategoryDifferentFromJdex { jdex_name, .. }
            | LintIssue::IdDifferentFromJdex { jdex_name, .. } => {
                format!("{} [JDex name: {}]", subject, jdex_name)
            }
            LintIssue::AreaNotInJdex { area } => format!("{} [area: {}]", subject, area.range()),
            LintIssue::CategoryNotInJdex { category } => {
                format!("{} [category: {}]", subject, category)
            }
            LintIssue::IdNotInJdex { id } => format!("{} [ID: {}]", subject, id),
            LintIssue::CategoryInWrongArea {
                category_area,
                file_area,
            } => format!(
                "{} [in {} but should be in {}]",
                subject,
                file_area.range(),
                category_area.range()
            ),
            LintIssue::IdInWrongCategory { id_ac, file_ac } => {
                format!("{} [in {} but should be in {}]", subject, file_ac, id_ac)
            }
            LintIssue::DuplicateArea { area } => {
                render_duplicate(&format!("Area {}", area.range()), files)
            }
            LintIssue::DuplicateCategory { category } => {
                render_duplicate(&format!("Category {}", category), files)
            }
            LintIssue::DuplicateId { id } => render_duplicate(&format!("ID {}", id), files),
            LintIssue::NonemptyInbox { num_items } => {
                format!("{} [{} items]", subject, num_items)
            }
            LintIssue::FileOutsideId
            | LintIssue::InvalidAreaName
            | LintIssue::InvalidCategoryName
            | LintIssue::InvalidIdName => subject,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::Path;

    fn entry(nested: &[&str], name: &str) -> Entry {
        Entry::new(
            name,
            Path::new(name),
            nested.iter().map(|s| s.to_string()).collect(),
        )
    }

    #[test]
    fn test_kind_name_matches_serde_tag() {
        let samples = vec![
            LintIssue::AreaDifferentFromJdex {
                area: AreaKey::new("1"),
                jdex_name: "x".into(),
            },
            LintIssue::FileOutsideId,
            LintIssue::IdInWrongCategory {
                id_ac: CategoryKey::new("12"),
                file_ac: CategoryKey::new("11"),
            },
            LintIssue::InvalidIdName,
            LintIssue::NonemptyInbox { num_items: 2 },
        ];
        for issue in samples {
            let json = serde_json::to_value(&issue).unwrap();
            assert_eq!(json["type"], issue.kind_name());
        }
    }

    #[test]
    fn test_render_wrong_area() {
        let issue = LintIssue::CategoryInWrongArea {
            category_area: AreaKey::new("9"),
            file_area: AreaKey::new("1"),
        };
        let files = [entry(&["10-19 Life Admin"], "99 Bogus")];
        assert_eq!(
            issue.render(&files),
            "10-19 Life Admin/99 Bogus [in 10-19 but should be in 90-99]"
        );
    }

    #[test]
    fn test_render_duplicate_lists_every_entry() {
        let issue = LintIssue::DuplicateId {
            id: IdKey::new("11.11"),
        };
        let files = [
            entry(&["10-19 A", "11 B"], "11.11 One"),
            entry(&["10-19 A", "11 B"], "11.11 Two"),
        ];
        assert_eq!(
            issue.render(&files),
            "ID 11.11:\n    10-19 A/11 B/11.11 One\n    10-19 A/11 B/11.11 Two"
        );
    }

    #[test]
    fn test_render_inbox() {
        let issue = LintIssue::NonemptyInbox { num_items: 3 };
        let files = [entry(&["10-19 A", "11 B"], "11.01 Inbox")];
        assert_eq!(issue.render(&files), "10-19 A/11 B/11.01 Inbox [3 items]");
    }

    #[test]
    fn test_explain_uses_rule_table() {
        let explanation = LintIssue::FileOutsideId.explain();
        assert_eq!(explanation.explanation, "Files were found outside of IDs.");
    }
}
