//! Media request types.

use serde::{Deserialize, Serialize};
use std::str::FromStr;
use thiserror::Error;

/// Errors raised while constructing a [`MediaRequest`].
///
/// These are the only hard failures of the resolution core; everything past
/// construction degrades gracefully instead of erroring.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum RequestError {
    #[error("No title variants provided")]
    NoTitles,

    #[error("Episode request without season/episode identifiers: {0}")]
    MissingEpisodeIdentifiers(String),

    #[error("Invalid year: {0}")]
    InvalidYear(String),

    #[error("Invalid stream id: {0}")]
    InvalidStreamId(String),

    #[error("Unknown media kind: {0}")]
    UnknownKind(String),
}

/// What kind of item is being searched for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MediaKind {
    Movie,
    #[serde(alias = "series")]
    Episode,
}

impl MediaKind {
    pub fn is_episode(&self) -> bool {
        matches!(self, MediaKind::Episode)
    }
}

impl FromStr for MediaKind {
    type Err = RequestError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "movie" | "film" => Ok(MediaKind::Movie),
            "series" | "episode" | "tv" => Ok(MediaKind::Episode),
            other => Err(RequestError::UnknownKind(other.to_string())),
        }
    }
}

/// Canonical identity being resolved into playable files.
///
/// Immutable once built. Title variants are trimmed, de-duplicated and keep
/// their first-occurrence order and case. Episode requests always carry a
/// season and an episode number.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MediaRequest {
    kind: MediaKind,
    titles: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    year: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    season: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    episode: Option<u32>,
}

impl MediaRequest {
    /// Build a movie request.
    pub fn movie<I, S>(titles: I, year: Option<&str>) -> Result<Self, RequestError>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Ok(Self {
            kind: MediaKind::Movie,
            titles: dedupe_titles(titles)?,
            year: parse_year(year)?,
            season: None,
            episode: None,
        })
    }

    /// Build a series episode request.
    pub fn episode<I, S>(titles: I, season: u32, episode: u32) -> Result<Self, RequestError>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Ok(Self {
            kind: MediaKind::Episode,
            titles: dedupe_titles(titles)?,
            year: None,
            season: Some(season),
            episode: Some(episode),
        })
    }

    /// Build a request from a catalog stream id.
    ///
    /// Movies use a bare id (`tt0111161`); episodes append season and episode
    /// (`tt0903747:1:4`). The URL-encoded separator `%3A` is accepted too.
    /// Episode segments that exist but are not numeric default to 0.
    pub fn from_stream_id<I, S>(
        kind: MediaKind,
        stream_id: &str,
        titles: I,
        year: Option<&str>,
    ) -> Result<Self, RequestError>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let normalized = stream_id.replace("%3A", ":").replace("%3a", ":");
        let parts: Vec<&str> = normalized.split(':').map(str::trim).collect();

        if parts.first().map_or(true, |id| id.is_empty()) {
            return Err(RequestError::InvalidStreamId(stream_id.to_string()));
        }

        match kind {
            MediaKind::Movie => Self::movie(titles, year),
            MediaKind::Episode => {
                if parts.len() < 3 {
                    return Err(RequestError::MissingEpisodeIdentifiers(
                        stream_id.to_string(),
                    ));
                }
                let season = parts[parts.len() - 2].parse().unwrap_or(0);
                let episode = parts[parts.len() - 1].parse().unwrap_or(0);
                let mut request = Self::episode(titles, season, episode)?;
                request.year = parse_year(year)?;
                Ok(request)
            }
        }
    }

    pub fn kind(&self) -> MediaKind {
        self.kind
    }

    /// Title variants in priority order.
    pub fn titles(&self) -> &[String] {
        &self.titles
    }

    /// Requested release year as a 4-digit string.
    pub fn year(&self) -> Option<&str> {
        self.year.as_deref()
    }

    /// Requested year as a number.
    pub fn year_number(&self) -> Option<i32> {
        self.year.as_deref().and_then(|y| y.parse().ok())
    }

    pub fn season(&self) -> Option<u32> {
        self.season
    }

    pub fn episode_number(&self) -> Option<u32> {
        self.episode
    }
}

fn dedupe_titles<I, S>(titles: I) -> Result<Vec<String>, RequestError>
where
    I: IntoIterator<Item = S>,
    S: Into<String>,
{
    let mut out: Vec<String> = Vec::new();
    for title in titles {
        let title: String = title.into();
        let title = title.trim();
        if title.is_empty() || out.iter().any(|t| t == title) {
            continue;
        }
        out.push(title.to_string());
    }

    if out.is_empty() {
        return Err(RequestError::NoTitles);
    }
    Ok(out)
}

fn parse_year(year: Option<&str>) -> Result<Option<String>, RequestError> {
    let Some(raw) = year.map(str::trim).filter(|y| !y.is_empty()) else {
        return Ok(None);
    };

    // Catalogs report running series as "2022–" or "2019-2023".
    let head: String = raw.chars().take_while(|c| c.is_ascii_digit()).collect();
    if head.len() == 4 {
        Ok(Some(head))
    } else {
        Err(RequestError::InvalidYear(raw.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_movie_request_dedupes_titles_in_order() {
        let request = MediaRequest::movie(
            vec!["The Rip", "  The Rip ", "Rip", "", "The Rip"],
            Some("2024"),
        )
        .unwrap();

        assert_eq!(request.kind(), MediaKind::Movie);
        assert_eq!(request.titles(), &["The Rip".to_string(), "Rip".to_string()]);
        assert_eq!(request.year(), Some("2024"));
        assert_eq!(request.year_number(), Some(2024));
        assert!(request.season().is_none());
    }

    #[test]
    fn test_titles_keep_case() {
        let request = MediaRequest::movie(vec!["Up", "UP"], None).unwrap();
        assert_eq!(request.titles().len(), 2);
    }

    #[test]
    fn test_empty_titles_rejected() {
        let result = MediaRequest::movie(Vec::<String>::new(), None);
        assert_eq!(result.unwrap_err(), RequestError::NoTitles);

        let result = MediaRequest::episode(vec!["   "], 1, 1);
        assert_eq!(result.unwrap_err(), RequestError::NoTitles);
    }

    #[test]
    fn test_year_with_range_suffix() {
        let request = MediaRequest::movie(vec!["Dune"], Some("2021–")).unwrap();
        assert_eq!(request.year(), Some("2021"));
    }

    #[test]
    fn test_invalid_year_rejected() {
        let result = MediaRequest::movie(vec!["Dune"], Some("21"));
        assert!(matches!(result, Err(RequestError::InvalidYear(_))));
    }

    #[test]
    fn test_episode_request() {
        let request = MediaRequest::episode(vec!["Breaking Bad"], 1, 4).unwrap();
        assert_eq!(request.kind(), MediaKind::Episode);
        assert_eq!(request.season(), Some(1));
        assert_eq!(request.episode_number(), Some(4));
    }

    #[test]
    fn test_from_stream_id_episode() {
        let request = MediaRequest::from_stream_id(
            MediaKind::Episode,
            "tt0903747%3A2%3A7",
            vec!["Breaking Bad"],
            None,
        )
        .unwrap();
        assert_eq!(request.season(), Some(2));
        assert_eq!(request.episode_number(), Some(7));
    }

    #[test]
    fn test_from_stream_id_non_numeric_defaults_to_zero() {
        let request = MediaRequest::from_stream_id(
            MediaKind::Episode,
            "tt0903747:x:4",
            vec!["Breaking Bad"],
            None,
        )
        .unwrap();
        assert_eq!(request.season(), Some(0));
        assert_eq!(request.episode_number(), Some(4));
    }

    #[test]
    fn test_from_stream_id_episode_without_identifiers() {
        let result = MediaRequest::from_stream_id(
            MediaKind::Episode,
            "tt0903747",
            vec!["Breaking Bad"],
            None,
        );
        assert!(matches!(
            result,
            Err(RequestError::MissingEpisodeIdentifiers(_))
        ));
    }

    #[test]
    fn test_from_stream_id_empty() {
        let result = MediaRequest::from_stream_id(MediaKind::Movie, "", vec!["Dune"], None);
        assert!(matches!(result, Err(RequestError::InvalidStreamId(_))));
    }

    #[test]
    fn test_media_kind_from_str() {
        assert_eq!("movie".parse::<MediaKind>().unwrap(), MediaKind::Movie);
        assert_eq!("series".parse::<MediaKind>().unwrap(), MediaKind::Episode);
        assert!("album".parse::<MediaKind>().is_err());
    }

    #[test]
    fn test_media_kind_serialization() {
        assert_eq!(serde_json::to_string(&MediaKind::Movie).unwrap(), "\"movie\"");
        let kind: MediaKind = serde_json::from_str("\"series\"").unwrap();
        assert_eq!(kind, MediaKind::Episode);
    }
}
