//! Field and entity specifications.
//!
//! Schemas are plain `const` data: a list of [`FieldSpec`] descriptors plus
//! the entity's refinements and list configuration. The single validator in
//! [`super::validate`] interprets them, so adding an entity means declaring
//! data, not writing rules.

use std::collections::BTreeMap;

use super::failure::FieldError;
use super::value::FieldValue;

/// The primitive kind of a field.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum FieldKind {
    /// Free text, trimmed before length checks.
    Text,
    /// Any finite number (prices, budgets, amounts).
    Number,
    /// Whole number (ratings, ordering, progress).
    Integer,
    Boolean,
    /// Calendar date in `YYYY-MM-DD` form.
    Date,
    /// RFC 3339 timestamp, normalized to UTC.
    DateTime,
    /// Closed set of allowed values, compared exactly.
    Enum(&'static [&'static str]),
    /// Absolute `http`/`https` URL.
    Url,
    /// Identifier of a record in another collection.
    UuidRef,
    Email,
    /// Lowercase URL segment (`my-category`).
    Slug,
    /// List of short strings (tags, hashtags, technologies).
    TextList,
}

impl FieldKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Text => "text",
            Self::Number => "number",
            Self::Integer => "integer",
            Self::Boolean => "boolean",
            Self::Date => "date",
            Self::DateTime => "datetime",
            Self::Enum(_) => "enum",
            Self::Url => "url",
            Self::UuidRef => "uuid",
            Self::Email => "email",
            Self::Slug => "slug",
            Self::TextList => "list",
        }
    }

    /// Whether length bounds apply to this kind.
    pub fn is_textual(&self) -> bool {
        matches!(
            self,
            Self::Text | Self::Url | Self::Email | Self::Slug | Self::TextList
        )
    }
}

/// Value applied to an absent field when a record is created.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum FieldDefault {
    Text(&'static str),
    Integer(i64),
    Bool(bool),
}

impl FieldDefault {
    pub fn to_value(self) -> FieldValue {
        match self {
            FieldDefault::Text(s) => FieldValue::Text(s.to_string()),
            FieldDefault::Integer(n) => FieldValue::Integer(n),
            FieldDefault::Bool(b) => FieldValue::Bool(b),
        }
    }
}

/// Declaration of a single field.
///
/// Built with `const` constructors and chained modifiers:
///
/// ```
/// use backoffice::schema::FieldSpec;
///
/// const TITLE: FieldSpec = FieldSpec::text("title").required().length(3, 200);
/// const TITLE_AR: FieldSpec = TITLE.translated("title_ar");
///
/// assert!(!TITLE_AR.required);
/// assert_eq!(TITLE_AR.max_length, Some(200));
/// assert_eq!(TITLE_AR.translation_of, Some("title"));
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FieldSpec {
    pub name: &'static str,
    pub kind: FieldKind,
    pub required: bool,
    /// Inclusive character bounds, checked after trimming.
    /// For lists the bounds apply to every item.
    pub min_length: Option<usize>,
    pub max_length: Option<usize>,
    /// Inclusive numeric bounds.
    pub min: Option<f64>,
    pub max: Option<f64>,
    pub default: Option<FieldDefault>,
    /// Base field this one translates. Translations are never required.
    pub translation_of: Option<&'static str>,
}

impl FieldSpec {
    pub const fn new(name: &'static str, kind: FieldKind) -> Self {
        Self {
            name,
            kind,
            required: false,
            min_length: None,
            max_length: None,
            min: None,
            max: None,
            default: None,
            translation_of: None,
        }
    }

    pub const fn text(name: &'static str) -> Self {
        Self::new(name, FieldKind::Text)
    }

    pub const fn number(name: &'static str) -> Self {
        Self::new(name, FieldKind::Number)
    }

    pub const fn integer(name: &'static str) -> Self {
        Self::new(name, FieldKind::Integer)
    }

    pub const fn boolean(name: &'static str) -> Self {
        Self::new(name, FieldKind::Boolean)
    }

    pub const fn date(name: &'static str) -> Self {
        Self::new(name, FieldKind::Date)
    }

    pub const fn datetime(name: &'static str) -> Self {
        Self::new(name, FieldKind::DateTime)
    }

    pub const fn enumeration(name: &'static str, values: &'static [&'static str]) -> Self {
        Self::new(name, FieldKind::Enum(values))
    }

    pub const fn url(name: &'static str) -> Self {
        Self::new(name, FieldKind::Url)
    }

    pub const fn uuid_ref(name: &'static str) -> Self {
        Self::new(name, FieldKind::UuidRef)
    }

    pub const fn email(name: &'static str) -> Self {
        Self::new(name, FieldKind::Email)
    }

    pub const fn slug(name: &'static str) -> Self {
        Self::new(name, FieldKind::Slug)
    }

    pub const fn text_list(name: &'static str) -> Self {
        Self::new(name, FieldKind::TextList)
    }

    /// The lifecycle `status` field: an enum with a creation default.
    pub const fn status(values: &'static [&'static str], default: &'static str) -> Self {
        Self::enumeration("status", values).default_text(default)
    }

    pub const fn required(mut self) -> Self {
        self.required = true;
        self
    }

    pub const fn length(mut self, min: usize, max: usize) -> Self {
        self.min_length = Some(min);
        self.max_length = Some(max);
        self
    }

    pub const fn min_length(mut self, min: usize) -> Self {
        self.min_length = Some(min);
        self
    }

    pub const fn max_length(mut self, max: usize) -> Self {
        self.max_length = Some(max);
        self
    }

    pub const fn range(mut self, min: f64, max: f64) -> Self {
        self.min = Some(min);
        self.max = Some(max);
        self
    }

    pub const fn at_least(mut self, min: f64) -> Self {
        self.min = Some(min);
        self
    }

    pub const fn default_text(mut self, value: &'static str) -> Self {
        self.default = Some(FieldDefault::Text(value));
        self
    }

    pub const fn default_int(mut self, value: i64) -> Self {
        self.default = Some(FieldDefault::Integer(value));
        self
    }

    pub const fn default_bool(mut self, value: bool) -> Self {
        self.default = Some(FieldDefault::Bool(value));
        self
    }

    /// Derive the localized twin of this field.
    ///
    /// The twin keeps the kind and bounds of its base but is always optional
    /// and never defaulted.
    pub const fn translated(self, name: &'static str) -> Self {
        Self {
            name,
            required: false,
            default: None,
            translation_of: Some(self.name),
            ..self
        }
    }

    /// Allowed values for enum fields.
    pub fn allowed_values(&self) -> Option<&'static [&'static str]> {
        match self.kind {
            FieldKind::Enum(values) => Some(values),
            _ => None,
        }
    }

    pub fn is_translation(&self) -> bool {
        self.translation_of.is_some()
    }

    /// Human-readable label used in validation messages.
    ///
    /// `client_id` becomes `Client ID`, `title_ar` becomes `Title (Arabic)`.
    pub fn label(&self) -> String {
        label_for(self.name)
    }
}

pub(crate) fn label_for(name: &str) -> String {
    if name == "id" {
        return "ID".to_string();
    }
    let (base, suffix) = match name.strip_suffix("_ar") {
        Some(base) => (base, " (Arabic)"),
        None => (name, ""),
    };
    let base = match base.strip_suffix("_id") {
        Some(stem) => format!("{} ID", stem),
        None => base.to_string(),
    };
    let spaced = base.replace('_', " ");
    let mut chars = spaced.chars();
    let capitalized = match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect::<String>(),
        None => String::new(),
    };
    format!("{}{}", capitalized, suffix)
}

/// A rule spanning more than one field.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Refinement {
    /// `end` must not precede `start`. Checked only when both are present.
    DateOrder {
        start: &'static str,
        end: &'static str,
    },
}

impl Refinement {
    pub fn check(&self, fields: &BTreeMap<String, FieldValue>) -> Option<FieldError> {
        match self {
            Refinement::DateOrder { start, end } => {
                let from = fields.get(*start)?.as_date()?;
                let to = fields.get(*end)?.as_date()?;
                if to < from {
                    Some(FieldError::new(
                        *end,
                        format!(
                            "{} must be on or after {}",
                            label_for(end),
                            label_for(start).to_lowercase()
                        ),
                    ))
                } else {
                    None
                }
            }
        }
    }

    /// Fields whose change requires the rule to be re-checked.
    pub fn fields(&self) -> [&'static str; 2] {
        match self {
            Refinement::DateOrder { start, end } => [*start, *end],
        }
    }
}

/// Which fields an entity's list view searches and filters on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ListSpec {
    /// Text fields checked by free-text search.
    pub searchable: &'static [&'static str],
    /// Categorical fields that accept exact-match filters.
    pub facets: &'static [&'static str],
}

impl ListSpec {
    pub const fn new(searchable: &'static [&'static str], facets: &'static [&'static str]) -> Self {
        Self { searchable, facets }
    }

    pub fn has_facet(&self, name: &str) -> bool {
        self.facets.contains(&name)
    }
}

/// Declarative contract of one record type.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EntitySchema {
    /// Singular identifier, e.g. `category`.
    pub name: &'static str,
    /// Plural used in list empty states, e.g. `categories`.
    pub plural: &'static str,
    pub fields: &'static [FieldSpec],
    pub refinements: &'static [Refinement],
    pub list: ListSpec,
}

impl EntitySchema {
    /// Key of the identifier in payloads and records.
    pub const ID_FIELD: &'static str = "id";

    pub const fn new(
        name: &'static str,
        plural: &'static str,
        fields: &'static [FieldSpec],
    ) -> Self {
        Self {
            name,
            plural,
            fields,
            refinements: &[],
            list: ListSpec::new(&[], &[]),
        }
    }

    pub const fn refine(mut self, refinements: &'static [Refinement]) -> Self {
        self.refinements = refinements;
        self
    }

    pub const fn list(mut self, list: ListSpec) -> Self {
        self.list = list;
        self
    }

    /// Display name of the entity, e.g. `Social post`.
    pub fn label(&self) -> String {
        label_for(self.name)
    }

    pub fn field(&self, name: &str) -> Option<&'static FieldSpec> {
        self.fields.iter().find(|field| field.name == name)
    }

    pub fn declares(&self, name: &str) -> bool {
        self.field(name).is_some()
    }

    pub fn status_field(&self) -> Option<&'static FieldSpec> {
        self.field("status")
    }

    /// Closed set of lifecycle values, empty when the entity has no status.
    pub fn statuses(&self) -> &'static [&'static str] {
        self.status_field()
            .and_then(FieldSpec::allowed_values)
            .unwrap_or(&[])
    }

    pub fn default_status(&self) -> Option<&'static str> {
        match self.status_field()?.default? {
            FieldDefault::Text(value) => Some(value),
            _ => None,
        }
    }

    /// Localized twins paired with their base field.
    pub fn translations(&self) -> impl Iterator<Item = (&'static FieldSpec, &'static FieldSpec)> + '_ {
        self.fields.iter().filter_map(|twin| {
            let base = self.field(twin.translation_of?)?;
            Some((base, twin))
        })
    }
}

/// Whether a payload creates a record or patches an existing one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, serde::Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Mode {
    Create,
    Update,
}

#[cfg(test)]
mod tests {
    use super::*;

    const NAME: FieldSpec = FieldSpec::text("name").required().length(2, 50);

    #[test]
    fn translated_twin_inherits_bounds_but_is_optional() {
        let twin = NAME.translated("name_ar");
        assert_eq!(twin.name, "name_ar");
        assert_eq!(twin.kind, FieldKind::Text);
        assert_eq!(twin.min_length, Some(2));
        assert_eq!(twin.max_length, Some(50));
        assert!(!twin.required);
        assert_eq!(twin.translation_of, Some("name"));
    }

    #[test]
    fn translated_twin_drops_default() {
        let base = FieldSpec::text("language").default_text("en");
        assert_eq!(base.translated("language_ar").default, None);
    }

    #[test]
    fn status_constructor_sets_default() {
        let status = FieldSpec::status(&["DRAFT", "PUBLISHED"], "DRAFT");
        assert_eq!(status.name, "status");
        assert_eq!(status.default, Some(FieldDefault::Text("DRAFT")));
        assert_eq!(status.allowed_values(), Some(&["DRAFT", "PUBLISHED"][..]));
    }

    #[test]
    fn labels_are_humanized() {
        assert_eq!(label_for("name"), "Name");
        assert_eq!(label_for("client_id"), "Client ID");
        assert_eq!(label_for("title_ar"), "Title (Arabic)");
        assert_eq!(label_for("featured_image"), "Featured image");
        assert_eq!(label_for("id"), "ID");
    }

    #[test]
    fn date_order_refinement() {
        let rule = Refinement::DateOrder {
            start: "start_date",
            end: "end_date",
        };
        let date = |s: &str| FieldValue::Date(s.parse().unwrap());

        let mut fields = BTreeMap::new();
        fields.insert("start_date".to_string(), date("2024-03-01"));
        assert!(rule.check(&fields).is_none(), "missing end is not checked");

        fields.insert("end_date".to_string(), date("2024-03-01"));
        assert!(rule.check(&fields).is_none(), "same day is allowed");

        fields.insert("end_date".to_string(), date("2024-02-01"));
        let err = rule.check(&fields).unwrap();
        assert_eq!(err.field, "end_date");
        assert_eq!(err.message, "End date must be on or after start date");
    }

    #[test]
    fn schema_lookups() {
        const FIELDS: &[FieldSpec] = &[
            NAME,
            NAME.translated("name_ar"),
            FieldSpec::status(&["ACTIVE", "INACTIVE"], "ACTIVE"),
        ];
        const SCHEMA: EntitySchema = EntitySchema::new("thing", "things", FIELDS)
            .list(ListSpec::new(&["name"], &["status"]));

        assert!(SCHEMA.declares("name_ar"));
        assert!(!SCHEMA.declares("id"));
        assert_eq!(SCHEMA.statuses(), &["ACTIVE", "INACTIVE"]);
        assert_eq!(SCHEMA.default_status(), Some("ACTIVE"));
        let pairs: Vec<_> = SCHEMA
            .translations()
            .map(|(base, twin)| (base.name, twin.name))
            .collect();
        assert_eq!(pairs, vec![("name", "name_ar")]);
        assert!(SCHEMA.list.has_facet("status"));
        assert!(!SCHEMA.list.has_facet("priority"));
    }
}
