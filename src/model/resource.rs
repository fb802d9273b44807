//! Static description of one REST resource served by the generic engine.
//!
//! Every entity type in the system follows the same list/create/read/update/
//! soft-delete pattern; what varies is captured here and looked up from the
//! registry at request time.

/// Equality or substring filter: query parameter name mapped to the record
/// field it matches against.
#[derive(Debug, Clone, Copy)]
pub struct FilterField {
    pub param: &'static str,
    pub field: &'static str,
}

/// Single foreign-key expansion. The id stored in `fk_field` is resolved in
/// `collection` and the referenced record is embedded in responses under
/// `response_key`. A dangling reference omits the key instead of failing.
#[derive(Debug, Clone, Copy)]
pub struct Expansion {
    pub fk_field: &'static str,
    pub collection: &'static str,
    pub id_field: &'static str,
    pub response_key: &'static str,
}

/// Whole related collection embedded alongside the primary payload, e.g. the
/// `projectTypes` table accompanying every transfer response.
#[derive(Debug, Clone, Copy)]
pub struct RelatedList {
    pub response_key: &'static str,
    pub collection: &'static str,
}

/// Array-of-business-ids field resolved to embedded records by point
/// lookups. List responses strip the field unless `include_param` is the
/// literal string `"true"`; item responses always resolve it.
#[derive(Debug, Clone, Copy)]
pub struct LinkField {
    pub field: &'static str,
    pub collection: &'static str,
    pub id_field: &'static str,
    pub include_param: &'static str,
}

/// One row of the resource configuration table.
#[derive(Debug, Clone, Copy)]
pub struct ResourceDef {
    /// Route segment, which doubles as the plural response key (`companies`).
    pub name: &'static str,
    /// Singular response key (`company`).
    pub singular: &'static str,
    /// Display name used in error messages (`Company`).
    pub display: &'static str,
    /// Collection path in the store.
    pub collection: &'static str,
    /// Business-id field. Positive integer, unique per collection, immutable
    /// after creation.
    pub id_field: &'static str,
    /// Fields that must be present in a create body.
    pub required: &'static [&'static str],
    pub equality_filters: &'static [FilterField],
    pub substring_filters: &'static [FilterField],
    pub expansions: &'static [Expansion],
    pub related_lists: &'static [RelatedList],
    pub link_fields: &'static [LinkField],
}
