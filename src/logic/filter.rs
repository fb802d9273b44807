//! In-memory filtering and slicing of a materialized collection scan.

use std::collections::HashMap;

use serde_json::Value;

use crate::model::{Record, ResourceDef, IS_ACTIVE};

pub const DEFAULT_PER_PAGE: usize = 20;

/// Page selection parsed from the query string. Zero and non-numeric values
/// fall back to the defaults, matching the original surface.
#[derive(Debug, Clone, Copy)]
pub struct PageQuery {
    pub page: usize,
    pub per_page: usize,
}

impl PageQuery {
    pub fn from_params(params: &HashMap<String, String>) -> Self {
        Self {
            page: positive_or(params.get("page"), 1),
            per_page: positive_or(params.get("per_page"), DEFAULT_PER_PAGE),
        }
    }
}

fn positive_or(raw: Option<&String>, default: usize) -> usize {
    raw.and_then(|v| v.parse::<usize>().ok())
        .filter(|&v| v > 0)
        .unwrap_or(default)
}

/// `active_only` defaults to true unless the literal string "false" is
/// supplied.
pub fn active_only(params: &HashMap<String, String>) -> bool {
    params.get("active_only").map_or(true, |v| v != "false")
}

/// Conjunctive application of the resource's filter set. Equality params
/// that do not parse as integers are ignored, as are empty substring params.
pub fn apply_filters(
    def: &ResourceDef,
    params: &HashMap<String, String>,
    records: Vec<Record>,
) -> Vec<Record> {
    let mut filtered = records;

    if active_only(params) {
        filtered.retain(|record| {
            record.get(IS_ACTIVE).and_then(Value::as_bool).unwrap_or(false)
        });
    }

    for filter in def.equality_filters {
        if let Some(wanted) = params.get(filter.param).and_then(|v| v.parse::<i64>().ok()) {
            filtered.retain(|record| record.get(filter.field).and_then(Value::as_i64) == Some(wanted));
        }
    }

    for filter in def.substring_filters {
        if let Some(needle) = params.get(filter.param).filter(|v| !v.is_empty()) {
            let needle = needle.to_lowercase();
            filtered.retain(|record| {
                record
                    .get(filter.field)
                    .and_then(Value::as_str)
                    .is_some_and(|value| value.to_lowercase().contains(&needle))
            });
        }
    }

    filtered
}

/// One page of a filtered collection scan.
#[derive(Debug)]
pub struct ListPage {
    pub page: usize,
    pub per_page: usize,
    pub filtered_count: usize,
    pub items: Vec<Record>,
}

/// Slice `[(page-1)*per_page, page*per_page)` of the filtered sequence.
/// Out-of-range pages yield an empty list, not an error.
pub fn paginate(records: Vec<Record>, query: PageQuery) -> ListPage {
    let filtered_count = records.len();
    let items = records
        .into_iter()
        .skip((query.page - 1) * query.per_page)
        .take(query.per_page)
        .collect();
    ListPage {
        page: query.page,
        per_page: query.per_page,
        filtered_count,
        items,
    }
}
