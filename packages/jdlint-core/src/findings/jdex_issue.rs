//! Problems found while resolving the JDex

use serde::{Deserialize, Serialize};

use super::diagnostic::{render_duplicate, IssueKind, Rule};
use crate::shared::models::{AreaKey, CategoryKey, Entry, IdKey};

/// Every kind of problem the JDex resolver can report.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "SCREAMING_SNAKE_CASE")]
pub enum JdexIssue {
    JdexAreaHeaderDifferentFromArea { area: AreaKey, jdex_name: String },
    JdexAreaHeaderWithoutArea { area: AreaKey },
    JdexCategoryInWrongArea { category_area: AreaKey, file_area: AreaKey },
    JdexDuplicateArea { area: AreaKey },
    JdexDuplicateAreaHeader { area: AreaKey },
    JdexDuplicateCategory { category: CategoryKey },
    JdexDuplicateId { id: IdKey },
    JdexFileOutsideCategory,
    JdexIdInWrongCategory { id_ac: CategoryKey, file_ac: CategoryKey },
    JdexInvalidAreaName,
    JdexInvalidCategoryName,
    JdexInvalidIdName,
}

pub(crate) const JDEX_RULES: &[Rule] = &[
    Rule {
        kind: "JDEX_AREA_HEADER_DIFFERENT_FROM_AREA",
        explanation: "An area header was found, the name of which is different from its corresponding JDex entry.",
        fix: "Update the one that is incorrect.",
    },
    Rule {
        kind: "JDEX_AREA_HEADER_WITHOUT_AREA",
        explanation: "An area header was found in the JDex with no corresponding area entry.",
        fix: "Go add a corresponding entry to your JDex, or delete this header if it is no longer needed.",
    },
    Rule {
        kind: "JDEX_CATEGORY_IN_WRONG_AREA",
        explanation: "Some JDex categories are in the wrong area.",
        fix: "Move them into the correct area folder, or use a flat JDex structure.",
    },
    Rule {
        kind: "JDEX_DUPLICATE_AREA",
        explanation: "Duplicate areas were used in the JDex.",
        fix: "Assign a new area to one of them.",
    },
    Rule {
        kind: "JDEX_DUPLICATE_AREA_HEADER",
        explanation: "Duplicate headers were found for the same area in the JDex.",
        fix: "Delete the one that is incorrect or fix the area number.",
    },
    Rule {
        kind: "JDEX_DUPLICATE_CATEGORY",
        explanation: "Duplicate categories were used in the JDex.",
        fix: "Assign a new category to one of them.",
    },
    Rule {
        kind: "JDEX_DUPLICATE_ID",
        explanation: "Duplicate IDs were used in the JDex.",
        fix: "Assign a new ID to one of them.",
    },
    Rule {
        kind: "JDEX_FILE_OUTSIDE_CATEGORY",
        explanation: "JDex files were found outside of categories in a nested structure.",
        fix: "JDex files should be entirely flat, or nested under area then category.",
    },
    Rule {
        kind: "JDEX_ID_IN_WRONG_CATEGORY",
        explanation: "Some JDex IDs are in the wrong category.",
        fix: "Move them into the correct category folder, or use a flat JDex structure.",
    },
    Rule {
        kind: "JDEX_INVALID_AREA_NAME",
        explanation: "Some JDex areas have invalid names.",
        fix: "Valid area names look like \"10-19 Life Admin\", so edit the names to match that format.",
    },
    Rule {
        kind: "JDEX_INVALID_CATEGORY_NAME",
        explanation: "Some JDex categories have invalid names.",
        fix: "Valid category names look like \"11 Me, Myself, & I\", so edit the names to match that format.",
    },
    Rule {
        kind: "JDEX_INVALID_ID_NAME",
        explanation: "Some JDex IDs have invalid names.",
        fix: "Valid ID names look like \"11.11 A Cool Project\", so edit the names to match that format.",
    },
];

impl IssueKind for JdexIssue {
    fn kind_name(&self) -> &'static str {
        match self {
            JdexIssue::JdexAreaHeaderDifferentFromArea { .. } => {
                "JDEX_AREA_HEADER_DIFFERENT_FROM_AREA"
            }
            JdexIssue::JdexAreaHeaderWithoutArea { .. } => "JDEX_AREA_HEADER_WITHOUT_AREA",
            JdexIssue::JdexCategoryInWrongArea { .. } => "JDEX_CATEGORY_IN_WRONG_AREA",
            JdexIssue::JdexDuplicateArea { .. } => "JDEX_DUPLICATE_AREA",
            JdexIssue::JdexDuplicateAreaHeader { .. } => "JDEX_DUPLICATE_AREA_HEADER",
            JdexIssue::JdexDuplicateCategory { .. } => "JDEX_DUPLICATE_CATEGORY",
            JdexIssue::JdexDuplicateId { .. } => "JDEX_DUPLICATE_ID",
            JdexIssue::JdexFileOutsideCategory => "JDEX_FILE_OUTSIDE_CATEGORY",
            JdexIssue::JdexIdInWrongCategory { .. } => "JDEX_ID_IN_WRONG_CATEGORY",
            JdexIssue::JdexInvalidAreaName => "JDEX_INVALID_AREA_NAME",
            JdexIssue::JdexInvalidCategoryName => "JDEX_INVALID_CATEGORY_NAME",
            JdexIssue::JdexInvalidIdName => "JDEX_INVALID_ID_NAME",
        }
    }

    fn rules() -> &'static [Rule] {
        JDEX_RULES
    }

    fn render(&self, files: &[Entry]) -> String {
        let subject = files.first().map(Entry::nesting_path).unwrap_or_default();
        match self {
            JdexIssue::JdexAreaHeaderDifferentFromArea { jdex_name, .. } => {
                format!("{} [JDex name: {}]", subject, jdex_name)
            }
            JdexIssue::JdexAreaHeaderWithoutArea { area } => {
                format!("{} [area: {}]", subject, area.range())
            }
            JdexIssue::JdexCategoryInWrongArea {
                category_area,
                file_area,
            } => format!(
                "{} [in {} but should be in {}]",
                subject,
                file_area.range(),
                category_area.range()
            ),
            JdexIssue::JdexIdInWrongCategory { id_ac, file_ac } => {
                format!("{} [in {} but should be in {}]", subject, file_ac, id_ac)
            }
            JdexIssue::JdexDuplicateArea { area } | JdexIssue::JdexDuplicateAreaHeader { area } => {
                render_duplicate(&format!("Area {}", area.range()), files)
            }
            JdexIssue::JdexDuplicateCategory { category } => {
                render_duplicate(category.as_str(), files)
            }
            JdexIssue::JdexDuplicateId { id } => render_duplicate(id.as_str(), files),
            JdexIssue::JdexFileOutsideCategory
            | JdexIssue::JdexInvalidAreaName
            | JdexIssue::JdexInvalidCategoryName
            | JdexIssue::JdexInvalidIdName => subject,
        }
    }
}
