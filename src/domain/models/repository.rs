use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;
use uuid::Uuid;

/// A cataloged code repository and its like counter.
///
/// `title`, `url` and `techs` hold whatever JSON the client last sent for
/// them, unchecked. A field the client left out is absent and is omitted
/// from the JSON form; an explicit `null` is kept.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Repository {
    id: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    title: Option<Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    url: Option<Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    techs: Option<Value>,
    likes: u64,
}

impl Repository {
    pub fn new(details: RepositoryInput) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            title: details.title,
            url: details.url,
            techs: details.techs,
            likes: 0,
        }
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn title(&self) -> Option<&Value> {
        self.title.as_ref()
    }

    pub fn url(&self) -> Option<&Value> {
        self.url.as_ref()
    }

    pub fn techs(&self) -> Option<&Value> {
        self.techs.as_ref()
    }

    pub fn likes(&self) -> u64 {
        self.likes
    }

    /// Overwrites title, url and techs. Fields missing from `details` become
    /// absent; `id` and `likes` are untouched.
    pub fn replace_details(&mut self, details: RepositoryInput) {
        self.title = details.title;
        self.url = details.url;
        self.techs = details.techs;
    }

    pub fn like(&mut self) -> u64 {
        self.likes = self.likes.saturating_add(1);
        self.likes
    }

    pub fn has_id(&self, id: &str) -> bool {
        self.id == id
    }

    pub fn summary(&self) -> String {
        let title = match &self.title {
            Some(Value::String(title)) => title.clone(),
            Some(other) => other.to_string(),
            None => "<untitled>".to_string(),
        };
        format!("{} ({}, {} likes)", title, self.id, self.likes)
    }
}

/// Client-supplied fields of a repository.
///
/// Each field keeps any JSON value as sent, `null` included. Unknown keys
/// such as `id` or `likes` are ignored when decoding.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct RepositoryInput {
    #[serde(default, deserialize_with = "present")]
    pub title: Option<Value>,
    #[serde(default, deserialize_with = "present")]
    pub url: Option<Value>,
    #[serde(default, deserialize_with = "present")]
    pub techs: Option<Value>,
}

// `Option<Value>` would read `null` as `None`; a key that is there stays there.
fn present<'de, D>(deserializer: D) -> Result<Option<Value>, D::Error>
where
    D: Deserializer<'de>,
{
    Value::deserialize(deserializer).map(Some)
}

impl RepositoryInput {
    pub fn new(title: &str, url: &str, techs: &[&str]) -> Self {
        Self {
            title: Some(Value::from(title)),
            url: Some(Value::from(url)),
            techs: Some(Value::from(techs.to_vec())),
        }
    }
}
