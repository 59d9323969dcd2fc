//! Public-site content: blog, FAQ, services, portfolio, testimonials.

use super::{ACTIVE_STATUSES, LANGUAGES, PUBLISH_STATUSES, REVIEW_STATUSES};
use crate::schema::{EntitySchema, FieldSpec, ListSpec};

const CATEGORY_NAME: FieldSpec = FieldSpec::text("name").required().length(2, 50);
const CATEGORY_DESCRIPTION: FieldSpec = FieldSpec::text("description").max_length(500);

const CATEGORY_FIELDS: &[FieldSpec] = &[
    CATEGORY_NAME,
    CATEGORY_NAME.translated("name_ar"),
    FieldSpec::slug("slug").required().length(2, 50),
    CATEGORY_DESCRIPTION,
    CATEGORY_DESCRIPTION.translated("description_ar"),
    FieldSpec::status(ACTIVE_STATUSES, "ACTIVE"),
];

pub const CATEGORY: EntitySchema = EntitySchema::new("category", "categories", CATEGORY_FIELDS)
    .list(ListSpec::new(&["name", "description"], &["status"]));

const ARTICLE_TITLE: FieldSpec = FieldSpec::text("title").required().length(3, 200);
const ARTICLE_CONTENT: FieldSpec = FieldSpec::text("content").required().min_length(10);
const ARTICLE_EXCERPT: FieldSpec = FieldSpec::text("excerpt").max_length(500);

const ARTICLE_FIELDS: &[FieldSpec] = &[
    ARTICLE_TITLE,
    ARTICLE_TITLE.translated("title_ar"),
    FieldSpec::slug("slug").required().length(3, 200),
    ARTICLE_CONTENT,
    ARTICLE_CONTENT.translated("content_ar"),
    ARTICLE_EXCERPT,
    ARTICLE_EXCERPT.translated("excerpt_ar"),
    FieldSpec::uuid_ref("category_id").required(),
    FieldSpec::text_list("tags").length(1, 30),
    FieldSpec::url("featured_image"),
    FieldSpec::enumeration("language", LANGUAGES).default_text("en"),
    FieldSpec::status(PUBLISH_STATUSES, "DRAFT"),
];

pub const ARTICLE: EntitySchema = EntitySchema::new("article", "articles", ARTICLE_FIELDS)
    .list(ListSpec::new(&["title", "excerpt"], &["status", "language"]));

const FAQ_QUESTION: FieldSpec = FieldSpec::text("question").required().length(5, 500);
const FAQ_ANSWER: FieldSpec = FieldSpec::text("answer").required().length(10, 5000);

const FAQ_FIELDS: &[FieldSpec] = &[
    FAQ_QUESTION,
    FAQ_QUESTION.translated("question_ar"),
    FAQ_ANSWER,
    FAQ_ANSWER.translated("answer_ar"),
    FieldSpec::text("category").max_length(100),
    FieldSpec::integer("order").at_least(0.0).default_int(0),
    FieldSpec::status(ACTIVE_STATUSES, "ACTIVE"),
];

pub const FAQ: EntitySchema = EntitySchema::new("faq", "FAQs", FAQ_FIELDS)
    .list(ListSpec::new(&["question", "answer"], &["status", "category"]));

const SERVICE_TITLE: FieldSpec = FieldSpec::text("title").required().length(2, 100);
const SERVICE_DESCRIPTION: FieldSpec = FieldSpec::text("description").required().length(10, 2000);

const SERVICE_FIELDS: &[FieldSpec] = &[
    SERVICE_TITLE,
    SERVICE_TITLE.translated("title_ar"),
    FieldSpec::slug("slug").required().length(2, 100),
    SERVICE_DESCRIPTION,
    SERVICE_DESCRIPTION.translated("description_ar"),
    FieldSpec::text("icon").max_length(50),
    FieldSpec::number("price").at_least(0.0),
    FieldSpec::integer("order").at_least(0.0).default_int(0),
    FieldSpec::status(ACTIVE_STATUSES, "ACTIVE"),
];

pub const SERVICE: EntitySchema = EntitySchema::new("service", "services", SERVICE_FIELDS)
    .list(ListSpec::new(&["title", "description"], &["status"]));

const PORTFOLIO_TITLE: FieldSpec = FieldSpec::text("title").required().length(2, 200);
const PORTFOLIO_DESCRIPTION: FieldSpec =
    FieldSpec::text("description").required().length(10, 5000);

const PORTFOLIO_FIELDS: &[FieldSpec] = &[
    PORTFOLIO_TITLE,
    PORTFOLIO_TITLE.translated("title_ar"),
    FieldSpec::slug("slug").required().length(2, 200),
    PORTFOLIO_DESCRIPTION,
    PORTFOLIO_DESCRIPTION.translated("description_ar"),
    FieldSpec::text("client_name").max_length(100),
    FieldSpec::url("project_url"),
    FieldSpec::url("image"),
    FieldSpec::text_list("technologies").length(1, 50),
    FieldSpec::text("category").max_length(100),
    FieldSpec::boolean("featured").default_bool(false),
    FieldSpec::status(PUBLISH_STATUSES, "DRAFT"),
];

pub const PORTFOLIO: EntitySchema = EntitySchema::new("portfolio", "portfolio items", PORTFOLIO_FIELDS)
    .list(ListSpec::new(
        &["title", "description", "client_name"],
        &["status", "category"],
    ));

const TESTIMONIAL_CLIENT: FieldSpec = FieldSpec::text("client_name").required().length(2, 100);
const TESTIMONIAL_CONTENT: FieldSpec = FieldSpec::text("content").required().length(10, 1000);

const TESTIMONIAL_FIELDS: &[FieldSpec] = &[
    TESTIMONIAL_CLIENT,
    TESTIMONIAL_CLIENT.translated("client_name_ar"),
    FieldSpec::text("company").max_length(100),
    FieldSpec::text("position").max_length(100),
    TESTIMONIAL_CONTENT,
    TESTIMONIAL_CONTENT.translated("content_ar"),
    FieldSpec::integer("rating").required().range(1.0, 5.0),
    FieldSpec::url("avatar"),
    FieldSpec::boolean("featured").default_bool(false),
    FieldSpec::status(REVIEW_STATUSES, "PENDING"),
];

pub const TESTIMONIAL: EntitySchema = EntitySchema::new("testimonial", "testimonials", TESTIMONIAL_FIELDS)
    .list(ListSpec::new(
        &["client_name", "company", "content"],
        &["status"],
    ));
