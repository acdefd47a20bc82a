use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;
use std::fmt;

#[derive(Debug, Clone, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct EntityId(pub String);

impl fmt::Display for EntityId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<&str> for EntityId {
    fn from(value: &str) -> Self {
        Self(value.to_string())
    }
}

/// Accepts strings, numbers, `null`, and populated references (`{ "_id": .. }`)
/// for display fields whose JSON type the backend does not pin down.
fn lenient_text<'de, D: Deserializer<'de>>(deserializer: D) -> Result<String, D::Error> {
    let value = Option::<Value>::deserialize(deserializer)?;
    Ok(match value {
        None | Some(Value::Null) => String::new(),
        Some(Value::String(s)) => s,
        Some(Value::Object(map)) => map
            .get("_id")
            .and_then(Value::as_str)
            .map(str::to_string)
            .unwrap_or_default(),
        Some(other) => other.to_string(),
    })
}

fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Job {
    #[serde(rename = "_id")]
    pub id: EntityId,
    #[serde(default, deserialize_with = "lenient_text")]
    pub company: String,
    #[serde(default, deserialize_with = "lenient_text")]
    pub position: String,
    #[serde(default, deserialize_with = "lenient_text")]
    pub location: String,
    #[serde(default, deserialize_with = "lenient_text")]
    pub role: String,
    #[serde(default, deserialize_with = "lenient_text")]
    pub level: String,
    #[serde(default, deserialize_with = "lenient_text")]
    pub experience: String,
    #[serde(default, deserialize_with = "lenient_text")]
    pub salary: String,
    #[serde(default, deserialize_with = "lenient_text")]
    pub posted: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Project {
    #[serde(rename = "_id")]
    pub id: EntityId,
    #[serde(default, deserialize_with = "lenient_text")]
    pub project_title: String,
    #[serde(default, deserialize_with = "lenient_text")]
    pub project_description: String,
    #[serde(default, deserialize_with = "lenient_text")]
    pub project_status: String,
    #[serde(default, deserialize_with = "lenient_text")]
    pub upload_date: String,
    #[serde(default, deserialize_with = "lenient_text")]
    pub user_id: String,
}

impl Project {
    /// Still being worked on: hidden when only completed projects are shown.
    #[must_use]
    pub fn is_open(&self) -> bool {
        matches!(self.project_status.as_str(), "In Progress" | "Pending")
    }

    /// Upload date rendered as a calendar day when the backend sent RFC 3339.
    #[must_use]
    pub fn uploaded_on(&self) -> String {
        chrono::DateTime::parse_from_rfc3339(&self.upload_date)
            .map(|dt| dt.format("%Y-%m-%d").to_string())
            .unwrap_or_else(|_| self.upload_date.clone())
    }
}

/// A comment left on someone's project.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Review {
    #[serde(rename = "_id")]
    pub id: EntityId,
    #[serde(default, deserialize_with = "lenient_text")]
    pub comment: String,
    #[serde(default, deserialize_with = "lenient_text")]
    pub user_id: String,
    #[serde(default, deserialize_with = "lenient_text")]
    pub project_id: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    Admin,
    Company,
    #[default]
    #[serde(other)]
    Individual,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    #[serde(rename = "_id")]
    pub id: EntityId,
    #[serde(default, deserialize_with = "null_as_default")]
    pub role: Role,
    #[serde(default, deserialize_with = "lenient_text")]
    pub first_name: String,
    #[serde(default, deserialize_with = "lenient_text")]
    pub last_name: String,
    #[serde(default, deserialize_with = "lenient_text")]
    pub name: String,
    #[serde(default, deserialize_with = "lenient_text")]
    pub email: String,
    #[serde(default, deserialize_with = "lenient_text")]
    pub location: String,
    #[serde(default, deserialize_with = "lenient_text")]
    pub bio: String,
    #[serde(default, deserialize_with = "lenient_text")]
    pub description: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub skills: Vec<String>,
}

impl User {
    /// Companies greet by organisation name, everyone else by first name.
    #[must_use]
    pub fn display_name(&self) -> &str {
        match self.role {
            Role::Company => &self.name,
            _ => &self.first_name,
        }
    }

    #[must_use]
    pub fn edit_fields(&self) -> Vec<FieldSpec> {
        match self.role {
            Role::Company => vec![
                FieldSpec::text("Name", "name", &self.name),
                FieldSpec::text("Email", "email", &self.email),
                FieldSpec::text("Location", "location", &self.location),
                FieldSpec::text("Description", "description", &self.description),
            ],
            Role::Admin | Role::Individual => vec![
                FieldSpec::text("First name", "firstName", &self.first_name),
                FieldSpec::text("Last name", "lastName", &self.last_name),
                FieldSpec::text("Email", "email", &self.email),
                FieldSpec::text("Location", "location", &self.location),
                FieldSpec::text("Bio", "bio", &self.bio),
                FieldSpec::list("Skills", "skills", &self.skills),
            ],
        }
    }
}

/// Authenticated-session context handed to every API call.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Session {
    pub token: String,
    pub user: User,
}

/// Any entity the backend can hand back from an update.
#[derive(Debug, Clone, PartialEq)]
pub enum Record {
    Job(Job),
    Project(Project),
    User(User),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldKind {
    Text,
    /// Comma-separated in the form, a JSON array on the wire.
    List,
}

#[derive(Debug, Clone, PartialEq)]
pub struct FieldSpec {
    pub label: &'static str,
    pub key: &'static str,
    pub kind: FieldKind,
    pub value: String,
}

impl FieldSpec {
    #[must_use]
    pub fn text(label: &'static str, key: &'static str, value: &str) -> Self {
        Self {
            label,
            key,
            kind: FieldKind::Text,
            value: value.to_string(),
        }
    }

    #[must_use]
    pub fn list(label: &'static str, key: &'static str, values: &[String]) -> Self {
        Self {
            label,
            key,
            kind: FieldKind::List,
            value: values.join(", "),
        }
    }
}

/// An entity shown as a card on one of the "my ..." list pages.
pub trait Listing: Clone + fmt::Debug + PartialEq {
    fn id(&self) -> &EntityId;
    fn heading(&self) -> &str;
    fn subheading(&self) -> &str;
    fn details(&self) -> Vec<(&'static str, String)>;
    fn matches(&self, query: &str) -> bool;
    fn edit_fields(&self) -> Vec<FieldSpec>;

    fn is_open(&self) -> bool {
        false
    }

    /// Rows taken by the rendered card: borders, heading, subheading, details.
    fn card_height(&self) -> u16 {
        4 + self.details().len() as u16
    }
}

fn contains_ci(haystack: &str, needle: &str) -> bool {
    haystack.to_lowercase().contains(needle)
}

impl Listing for Job {
    fn id(&self) -> &EntityId {
        &self.id
    }

    fn heading(&self) -> &str {
        &self.company
    }

    fn subheading(&self) -> &str {
        &self.position
    }

    fn details(&self) -> Vec<(&'static str, String)> {
        vec![
            ("Location", self.location.clone()),
            ("Role", self.role.clone()),
            ("Level", self.level.clone()),
            ("Experience", self.experience.clone()),
            ("Salary", self.salary.clone()),
            ("Posted", self.posted.clone()),
        ]
    }

    fn matches(&self, query: &str) -> bool {
        let query = query.to_lowercase();
        [&self.company, &self.position, &self.location, &self.role]
            .iter()
            .any(|field| contains_ci(field, &query))
    }

    fn edit_fields(&self) -> Vec<FieldSpec> {
        vec![
            FieldSpec::text("Company", "company", &self.company),
            FieldSpec::text("Position", "position", &self.position),
            FieldSpec::text("Location", "location", &self.location),
            FieldSpec::text("Role", "role", &self.role),
            FieldSpec::text("Level", "level", &self.level),
            FieldSpec::text("Experience", "experience", &self.experience),
            FieldSpec::text("Salary", "salary", &self.salary),
        ]
    }
}

impl Listing for Project {
    fn id(&self) -> &EntityId {
        &self.id
    }

    fn heading(&self) -> &str {
        &self.project_title
    }

    fn subheading(&self) -> &str {
        &self.project_description
    }

    fn details(&self) -> Vec<(&'static str, String)> {
        vec![
            ("Status", self.project_status.clone()),
            ("Uploaded", self.uploaded_on()),
            ("User ID", self.user_id.clone()),
        ]
    }

    fn matches(&self, query: &str) -> bool {
        let query = query.to_lowercase();
        contains_ci(&self.project_title, &query) || contains_ci(&self.project_description, &query)
    }

    fn edit_fields(&self) -> Vec<FieldSpec> {
        vec![
            FieldSpec::text("Title", "projectTitle", &self.project_title),
            FieldSpec::text("Description", "projectDescription", &self.project_description),
            FieldSpec::text("Status", "projectStatus", &self.project_status),
        ]
    }

    fn is_open(&self) -> bool {
        Project::is_open(self)
    }
}
