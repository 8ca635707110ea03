use serde::{Deserialize, Serialize};

pub const IMAGE_BASE_URL: &str = "https://image.tmdb.org/t/p";
pub const PROFILE_SIZE: &str = "w200";
pub const POSTER_SIZE: &str = "w500";

/// Build an absolute image URL from a relative image path
pub fn image_url(path: &str, size: &str) -> String {
    format!("{}/{}{}", IMAGE_BASE_URL, size, path)
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Actor {
    pub id: u64,
    pub name: String,
    #[serde(default)]
    pub profile_path: Option<String>,
    #[serde(default)]
    pub popularity: f64,
}

impl Actor {
    pub fn new(id: u64, name: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
            profile_path: None,
            popularity: 0.0,
        }
    }

    pub fn image_url(&self) -> Option<String> {
        self.profile_path
            .as_deref()
            .map(|p| image_url(p, PROFILE_SIZE))
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Movie {
    pub id: u64,
    pub title: String,
    #[serde(default)]
    pub poster_path: Option<String>,
    #[serde(default)]
    pub release_date: Option<String>,
}

impl Movie {
    pub fn new(id: u64, title: impl Into<String>) -> Self {
        Self {
            id,
            title: title.into(),
            poster_path: None,
            release_date: None,
        }
    }

    pub fn image_url(&self) -> Option<String> {
        self.poster_path
            .as_deref()
            .map(|p| image_url(p, POSTER_SIZE))
    }
}

/// One credited performer of a movie
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CastMember {
    pub id: u64,
    pub name: String,
    #[serde(default)]
    pub profile_path: Option<String>,
    #[serde(default)]
    pub character: Option<String>,
}

impl CastMember {
    pub fn new(id: u64, name: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
            profile_path: None,
            character: None,
        }
    }

    pub fn image_url(&self) -> Option<String> {
        self.profile_path
            .as_deref()
            .map(|p| image_url(p, PROFILE_SIZE))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MediaType {
    Person,
    Movie,
    #[serde(other)]
    Other,
}

impl MediaType {
    pub fn as_str(&self) -> &'static str {
        match self {
            MediaType::Person => "person",
            MediaType::Movie => "movie",
            MediaType::Other => "other",
        }
    }
}

/// A single entry of a multi-type search
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SearchResult {
    pub id: u64,
    pub media_type: MediaType,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub profile_path: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub poster_path: Option<String>,
    #[serde(default)]
    pub popularity: f64,
}

impl SearchResult {
    pub fn display_name(&self) -> &str {
        self.name
            .as_deref()
            .or(self.title.as_deref())
            .unwrap_or("Untitled")
    }

    pub fn image_path(&self) -> Option<&str> {
        self.profile_path
            .as_deref()
            .or(self.poster_path.as_deref())
    }

    /// View a movie result as a [`Movie`]
    pub fn as_movie(&self) -> Option<Movie> {
        (self.media_type == MediaType::Movie).then(|| Movie {
            id: self.id,
            title: self
                .title
                .clone()
                .unwrap_or_else(|| "Untitled Movie".to_string()),
            poster_path: self.poster_path.clone(),
            release_date: None,
        })
    }

    /// View a person result as an [`Actor`]
    pub fn as_actor(&self) -> Option<Actor> {
        (self.media_type == MediaType::Person).then(|| Actor {
            id: self.id,
            name: self.name.clone().unwrap_or_default(),
            profile_path: self.profile_path.clone(),
            popularity: self.popularity,
        })
    }
}

#[derive(Debug, Clone, Deserialize)]
pub(crate) struct MovieCreditsResponse {
    #[serde(default)]
    pub cast: Vec<CastMember>,
}

#[derive(Debug, Clone, Deserialize)]
pub(crate) struct PersonMovieCreditsResponse {
    #[serde(default)]
    pub cast: Vec<Movie>,
}

#[derive(Debug, Clone, Deserialize)]
pub(crate) struct SearchResponse<T> {
    #[serde(default = "Vec::new")]
    pub results: Vec<T>,
}
