//! Dashboard users and scheduled social posts.

use crate::schema::{EntitySchema, FieldSpec, ListSpec};

const USER_FIELDS: &[FieldSpec] = &[
    FieldSpec::text("name").required().length(2, 50),
    FieldSpec::email("email").required().max_length(254),
    FieldSpec::enumeration("role", &["ADMIN", "EDITOR", "VIEWER"]).default_text("VIEWER"),
    FieldSpec::text("phone").length(7, 20),
    FieldSpec::url("avatar"),
    FieldSpec::status(&["ACTIVE", "INACTIVE", "SUSPENDED"], "ACTIVE"),
];

pub const USER: EntitySchema = EntitySchema::new("user", "users", USER_FIELDS)
    .list(ListSpec::new(&["name", "email"], &["role", "status"]));

const SOCIAL_POST_FIELDS: &[FieldSpec] = &[
    FieldSpec::text("content").required().length(1, 2200),
    FieldSpec::enumeration("platform", &["FACEBOOK", "TWITTER", "INSTAGRAM", "LINKEDIN"])
        .required(),
    FieldSpec::datetime("scheduled_at"),
    FieldSpec::url("media_url"),
    FieldSpec::text_list("hashtags").length(1, 50),
    FieldSpec::status(&["DRAFT", "SCHEDULED", "PUBLISHED", "FAILED"], "DRAFT"),
];

pub const SOCIAL_POST: EntitySchema = EntitySchema::new("social_post", "social posts", SOCIAL_POST_FIELDS)
    .list(ListSpec::new(&["content"], &["platform", "status"]));
