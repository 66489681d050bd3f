//! Wire DTOs for the Applymandu REST API.
//!
//! DESIGN
//! ======
//! Every endpoint decodes into an explicit type here instead of poking at
//! untyped JSON, so a drifted server contract fails at the boundary.

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

use std::fmt;

use serde::de::{self, MapAccess, Visitor};
use serde::{Deserialize, Deserializer, Serialize};

/// Account role. Each role has its own token slot and API prefix.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Role {
    #[serde(rename = "jobseeker", alias = "job_seeker")]
    JobSeeker,
    #[serde(rename = "employer")]
    Employer,
    #[serde(rename = "admin")]
    Admin,
}

impl Role {
    pub const ALL: [Role; 3] = [Role::JobSeeker, Role::Employer, Role::Admin];

    /// Persistent storage key for this role's bearer token.
    pub fn token_key(self) -> &'static str {
        match self {
            Self::JobSeeker => "JOBSEEKER_TOKEN",
            Self::Employer => "EMPLOYER_TOKEN",
            Self::Admin => "ADMIN_TOKEN",
        }
    }

    /// Path segment used for role-scoped API endpoints.
    pub fn api_prefix(self) -> &'static str {
        match self {
            Self::JobSeeker => "jobseeker",
            Self::Employer => "employer",
            Self::Admin => "admin",
        }
    }

    /// Root of the protected section for this role.
    pub fn dashboard_path(self) -> &'static str {
        match self {
            Self::JobSeeker => "/dashboard/jobseeker",
            Self::Employer => "/dashboard/employer",
            Self::Admin => "/admin",
        }
    }

    /// Where unauthorized visitors of this role's section are sent.
    pub fn unauthorized_redirect(self) -> &'static str {
        match self {
            Self::JobSeeker | Self::Employer => "/",
            Self::Admin => "/admin-login",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::JobSeeker => "Job Seeker",
            Self::Employer => "Employer",
            Self::Admin => "Admin",
        }
    }
}

/// The authenticated identity for the current tab.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionUser {
    #[serde(deserialize_with = "deserialize_id")]
    pub id: String,
    pub email: String,
    pub name: String,
    pub role: Role,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct LoginRequest<'a> {
    pub email: &'a str,
    pub password: &'a str,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct RegisterRequest<'a> {
    pub name: &'a str,
    pub email: &'a str,
    pub password: &'a str,
    pub password_confirmation: &'a str,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct TwoFactorRequest<'a> {
    pub email: &'a str,
    pub code: &'a str,
}

/// Reply to login, registration and two-factor verification.
///
/// When `two_factor_required` is set the server has withheld the token and
/// user until the second factor is verified.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
pub struct AuthPayload {
    #[serde(default)]
    pub token: Option<String>,
    #[serde(default)]
    pub user: Option<SessionUser>,
    #[serde(default)]
    pub two_factor_required: bool,
}

/// Generic `{ "message": "..." }` acknowledgement.
#[derive(Clone, Debug, Default, PartialEq, Eq, Deserialize)]
pub struct MessagePayload {
    #[serde(default)]
    pub message: Option<String>,
}

/// A job posting as listed by the public API.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Job {
    #[serde(deserialize_with = "deserialize_id")]
    pub id: String,
    pub title: String,
    #[serde(default)]
    pub company: Option<String>,
    #[serde(default)]
    pub location: Option<String>,
    /// Remaining posting fields, carried through untouched for rendering.
    #[serde(flatten)]
    pub extra: serde_json::Map<String, serde_json::Value>,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct ApplicationRequest<'a> {
    pub cover_letter: &'a str,
}

/// Field name → messages, in the order the server sent them.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
pub struct ValidationErrors(Vec<(String, Vec<String>)>);

impl ValidationErrors {
    pub fn new(fields: Vec<(String, Vec<String>)>) -> Self {
        Self(fields)
    }

    /// First message of the first failing field.
    pub fn first(&self) -> Option<(&str, &str)> {
        self.0
            .iter()
            .find_map(|(field, messages)| messages.first().map(|m| (field.as_str(), m.as_str())))
    }

    pub fn first_message(&self) -> Option<&str> {
        self.first().map(|(_, message)| message)
    }

    pub fn field(&self, name: &str) -> Option<&[String]> {
        self.0.iter().find(|(field, _)| field == name).map(|(_, m)| m.as_slice())
    }

    pub fn is_empty(&self) -> bool {
        self.0.iter().all(|(_, messages)| messages.is_empty())
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }
}

impl<'de> Deserialize<'de> for ValidationErrors {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        #[derive(Deserialize)]
        #[serde(untagged)]
        enum OneOrMany {
            One(String),
            Many(Vec<String>),
        }

        struct OrderedFields;

        impl<'de> Visitor<'de> for OrderedFields {
            type Value = ValidationErrors;

            fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str("a map of field names to messages")
            }

            fn visit_map<A>(self, mut map: A) -> Result<Self::Value, A::Error>
            where
                A: MapAccess<'de>,
            {
                let mut fields = Vec::with_capacity(map.size_hint().unwrap_or(0));
                while let Some((field, messages)) = map.next_entry::<String, OneOrMany>()? {
                    let messages = match messages {
                        OneOrMany::One(message) => vec![message],
                        OneOrMany::Many(messages) => messages,
                    };
                    fields.push((field, messages));
                }
                Ok(ValidationErrors(fields))
            }
        }

        deserializer.deserialize_map(OrderedFields)
    }
}

/// Accept ids sent either as JSON numbers or strings.
fn deserialize_id<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    let value = serde_json::Value::deserialize(deserializer)?;
    match value {
        serde_json::Value::String(id) if !id.is_empty() => Ok(id),
        serde_json::Value::Number(number) => Ok(number.to_string()),
        other => Err(de::Error::custom(format!("expected string or number id, got {other}"))),
    }
}
