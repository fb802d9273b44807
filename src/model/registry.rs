//! The resource configuration table: one [`ResourceDef`] per entity type,
//! resolved from the route segment at request time.

use super::resource::{Expansion, FilterField, LinkField, RelatedList, ResourceDef};

pub static STAFF: ResourceDef = ResourceDef {
    name: "staffs",
    singular: "staff",
    display: "Staff",
    collection: "staff",
    id_field: "staffId",
    required: &["staffName"],
    equality_filters: &[
        FilterField { param: "staff_id", field: "staffId" },
        FilterField { param: "company_id", field: "companyId" },
        FilterField { param: "daily_report_staff_id", field: "dailyReportStaffId" },
    ],
    substring_filters: &[FilterField { param: "staff_name", field: "staffName" }],
    expansions: &[],
    related_lists: &[],
    link_fields: &[
        LinkField {
            field: "jobCategories",
            collection: "jobCategories",
            id_field: "jobCategoryId",
            include_param: "job_categories",
        },
        LinkField {
            field: "companies",
            collection: "companies",
            id_field: "companyId",
            include_param: "companies",
        },
        LinkField {
            field: "officialPositions",
            collection: "officialPositions",
            id_field: "officialPositionId",
            include_param: "official_positions",
        },
        LinkField {
            field: "specialEducations",
            collection: "specialEducations",
            id_field: "specialEducationId",
            include_param: "special_educations",
        },
        LinkField {
            field: "skillTrainings",
            collection: "skillTrainings",
            id_field: "skillTrainingId",
            include_param: "skill_trainings",
        },
        LinkField {
            field: "licenses",
            collection: "licenses",
            id_field: "licenseId",
            include_param: "licenses",
        },
        LinkField {
            field: "projects",
            collection: "projects",
            id_field: "projectId",
            include_param: "projects",
        },
    ],
};

pub static COMPANIES: ResourceDef = ResourceDef {
    name: "companies",
    singular: "company",
    display: "Company",
    collection: "companies",
    id_field: "companyId",
    required: &["companyName"],
    equality_filters: &[FilterField { param: "company_id", field: "companyId" }],
    substring_filters: &[FilterField { param: "company_name", field: "companyName" }],
    expansions: &[],
    related_lists: &[],
    link_fields: &[],
};

pub static JOB_CATEGORIES: ResourceDef = ResourceDef {
    name: "jobCategories",
    singular: "jobCategory",
    display: "Job category",
    collection: "jobCategories",
    id_field: "jobCategoryId",
    required: &["jobCategoryName"],
    equality_filters: &[FilterField { param: "job_category_id", field: "jobCategoryId" }],
    substring_filters: &[FilterField { param: "job_category_name", field: "jobCategoryName" }],
    expansions: &[],
    related_lists: &[],
    link_fields: &[],
};

pub static OFFICIAL_POSITIONS: ResourceDef = ResourceDef {
    name: "officialPositions",
    singular: "officialPosition",
    display: "Official position",
    collection: "officialPositions",
    id_field: "officialPositionId",
    required: &["officialPositionName"],
    equality_filters: &[FilterField { param: "official_position_id", field: "officialPositionId" }],
    substring_filters: &[FilterField {
        param: "official_position_name",
        field: "officialPositionName",
    }],
    expansions: &[],
    related_lists: &[],
    link_fields: &[],
};

pub static SPECIAL_EDUCATIONS: ResourceDef = ResourceDef {
    name: "specialEducations",
    singular: "specialEducation",
    display: "Special education",
    collection: "specialEducations",
    id_field: "specialEducationId",
    required: &["specialEducationName"],
    equality_filters: &[FilterField { param: "special_education_id", field: "specialEducationId" }],
    substring_filters: &[FilterField {
        param: "special_education_name",
        field: "specialEducationName",
    }],
    expansions: &[],
    related_lists: &[],
    link_fields: &[],
};

pub static SKILL_TRAININGS: ResourceDef = ResourceDef {
    name: "skillTrainings",
    singular: "skillTraining",
    display: "Skill training",
    collection: "skillTrainings",
    id_field: "skillTrainingId",
    required: &["skillTrainingName"],
    equality_filters: &[FilterField { param: "skill_training_id", field: "skillTrainingId" }],
    substring_filters: &[FilterField { param: "skill_training_name", field: "skillTrainingName" }],
    expansions: &[],
    related_lists: &[],
    link_fields: &[],
};

pub static LICENSE_TYPES: ResourceDef = ResourceDef {
    name: "licenseTypes",
    singular: "licenseType",
    display: "License type",
    collection: "licenseTypes",
    id_field: "licenseTypeId",
    required: &["licenseTypeName"],
    equality_filters: &[FilterField { param: "license_type_id", field: "licenseTypeId" }],
    substring_filters: &[FilterField { param: "license_type_name", field: "licenseTypeName" }],
    expansions: &[],
    related_lists: &[],
    link_fields: &[],
};

pub static DOCUMENT_TYPES: ResourceDef = ResourceDef {
    name: "documentTypes",
    singular: "documentType",
    display: "Document type",
    collection: "documentTypes",
    id_field: "documentTypeId",
    required: &["documentTypeName"],
    equality_filters: &[FilterField { param: "document_type_id", field: "documentTypeId" }],
    substring_filters: &[FilterField { param: "document_type_name", field: "documentTypeName" }],
    expansions: &[],
    related_lists: &[],
    link_fields: &[],
};

pub static PROJECT_TYPES: ResourceDef = ResourceDef {
    name: "projectTypes",
    singular: "projectType",
    display: "Project type",
    collection: "projectTypes",
    id_field: "projectTypeId",
    required: &["projectTypeName"],
    equality_filters: &[FilterField { param: "project_type_id", field: "projectTypeId" }],
    substring_filters: &[FilterField { param: "project_type_name", field: "projectTypeName" }],
    expansions: &[],
    related_lists: &[],
    link_fields: &[],
};

pub static LICENSES: ResourceDef = ResourceDef {
    name: "licenses",
    singular: "license",
    display: "License",
    collection: "licenses",
    id_field: "licenseId",
    required: &["staffId", "licenseTypeId", "licenseNumber"],
    equality_filters: &[
        FilterField { param: "staff_id", field: "staffId" },
        FilterField { param: "license_type_id", field: "licenseTypeId" },
    ],
    substring_filters: &[],
    expansions: &[Expansion {
        fk_field: "licenseTypeId",
        collection: "licenseTypes",
        id_field: "licenseTypeId",
        response_key: "licenseType",
    }],
    related_lists: &[RelatedList { response_key: "licenseTypes", collection: "licenseTypes" }],
    link_fields: &[],
};

pub static PROJECTS: ResourceDef = ResourceDef {
    name: "projects",
    singular: "project",
    display: "Project",
    collection: "projects",
    id_field: "projectId",
    required: &["projectName"],
    equality_filters: &[
        FilterField { param: "project_id", field: "projectId" },
        FilterField { param: "project_type_id", field: "projectTypeId" },
    ],
    substring_filters: &[FilterField { param: "project_name", field: "projectName" }],
    expansions: &[Expansion {
        fk_field: "projectTypeId",
        collection: "projectTypes",
        id_field: "projectTypeId",
        response_key: "projectType",
    }],
    related_lists: &[RelatedList { response_key: "projectTypes", collection: "projectTypes" }],
    link_fields: &[],
};

pub static TRANSFERS: ResourceDef = ResourceDef {
    name: "transfers",
    singular: "transfer",
    display: "Transfer",
    collection: "transfers",
    id_field: "transferId",
    required: &["staffId"],
    equality_filters: &[FilterField { param: "staff_id", field: "staffId" }],
    substring_filters: &[],
    expansions: &[],
    related_lists: &[
        RelatedList { response_key: "projects", collection: "projects" },
        RelatedList { response_key: "projectTypes", collection: "projectTypes" },
    ],
    link_fields: &[],
};

pub static ATTACHED_DOCUMENTS: ResourceDef = ResourceDef {
    name: "attachedDocuments",
    singular: "attachedDocument",
    display: "Attached document",
    collection: "attachedDocuments",
    id_field: "attachedDocumentId",
    required: &["staffId", "documentTypeId"],
    equality_filters: &[
        FilterField { param: "staff_id", field: "staffId" },
        FilterField { param: "document_type_id", field: "documentTypeId" },
    ],
    substring_filters: &[],
    expansions: &[Expansion {
        fk_field: "documentTypeId",
        collection: "documentTypes",
        id_field: "documentTypeId",
        response_key: "documentType",
    }],
    related_lists: &[],
    link_fields: &[],
};

pub static RESOURCES: [&ResourceDef; 13] = [
    &STAFF,
    &COMPANIES,
    &JOB_CATEGORIES,
    &OFFICIAL_POSITIONS,
    &SPECIAL_EDUCATIONS,
    &SKILL_TRAININGS,
    &LICENSE_TYPES,
    &DOCUMENT_TYPES,
    &PROJECT_TYPES,
    &LICENSES,
    &PROJECTS,
    &TRANSFERS,
    &ATTACHED_DOCUMENTS,
];

/// Resolve a route segment to its resource definition.
pub fn resource_by_name(name: &str) -> Option<&'static ResourceDef> {
    RESOURCES.iter().copied().find(|def| def.name == name)
}
