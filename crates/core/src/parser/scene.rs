//! Filename parser for scene-style release names.
//!
//! Parses names like:
//! - "Blade.Runner.2049.2017.2160p.UHD.BluRay.x265-GROUP.mkv"
//! - "Breaking Bad S01E04 1080p WEB-DL DDP5.1 H 264.mkv"
//! - "[Group] Show - 1x04 - Episode Name [720p].mp4"

use once_cell::sync::Lazy;
use regex_lite::{Captures, Regex};
use tracing::trace;

use crate::tags::{self, AUDIO_RULES, CHANNEL_RULES, CODEC_RULES, SOURCE_RULES};

use super::types::{FilenameParser, ParsedAttributes};

const VIDEO_EXTENSIONS: &[&str] = &[
    "mkv", "mp4", "avi", "m4v", "mov", "wmv", "ts", "m2ts", "webm", "mpg", "mpeg", "flv",
];

static LEADING_GROUP: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^\s*\[[^\]]*\]\s*").expect("valid regex"));

static SEASON_EPISODE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?i)\bs(\d{1,2})\s?e(\d{1,3})((?:\s?-?\s?e\d{1,3})*)").expect("valid regex")
});

static CROSS_EPISODE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?i)\b(\d{1,2})x(\d{2,3})\b").expect("valid regex"));

static VERBOSE_EPISODE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?i)\bseason\s*(\d{1,2})\s*-?\s*episode\s*(\d{1,3})\b").expect("valid regex")
});

static EXTRA_EPISODE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?i)e(\d{1,3})").expect("valid regex"));

static YEAR: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\b(19\d{2}|20\d{2})\b").expect("valid regex"));

static RESOLUTION: Lazy<Regex> = Lazy::new(|| {
    Regex::new(
        r"(?i)\b(\d{3,4}x\d{3,4}p?|2160p|1440p|1080p|1080i|720p|576p|480p|360p|4k|uhd|fhd)\b",
    )
    .expect("valid regex")
});

static QUALITY_MARKER: Lazy<Regex> = Lazy::new(|| {
    Regex::new(
        r"(?i)\b(bluray|blu-ray|bdrip|brrip|web-dl|webdl|webrip|web|hdtv|remux|dvdrip|x264|x265|h264|h265|hevc|hdr|hdr10|proper|repack|extended|unrated|remastered|dual|multi|complete)\b",
    )
    .expect("valid regex")
});

static RELEASE_GROUP: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"-([A-Za-z0-9]+)\s*$").expect("valid regex"));

/// Regex-based parser for scene release filenames.
#[derive(Debug, Clone, Default)]
pub struct SceneNameParser;

impl SceneNameParser {
    pub fn new() -> Self {
        Self
    }
}

impl FilenameParser for SceneNameParser {
    fn name(&self) -> &str {
        "scene"
    }

    fn parse(&self, filename: &str) -> ParsedAttributes {
        let stem = strip_extension(filename);
        let cleaned: String = stem
            .chars()
            .map(|c| if c == '.' || c == '_' { ' ' } else { c })
            .collect();
        let cleaned = LEADING_GROUP.replace(&cleaned, "").into_owned();

        let mut attrs = ParsedAttributes::default();
        // Start offsets of everything that ends the title.
        let mut markers: Vec<usize> = Vec::new();

        if let Some((start, seasons, episodes)) = find_episode(&cleaned) {
            markers.push(start);
            attrs.seasons = seasons;
            attrs.episodes = episodes;
        }

        if let Some(m) = find(&RESOLUTION, &cleaned) {
            markers.push(m.0);
            attrs.resolution = Some(m.1.to_lowercase());
        }

        if let Some(m) = find(&QUALITY_MARKER, &cleaned) {
            markers.push(m.0);
        }

        let boundary = markers.iter().copied().min();
        if let Some((start, year)) = find_year(&cleaned, boundary) {
            markers.push(start);
            attrs.year = Some(year);
        }

        let end = markers.into_iter().min().unwrap_or(cleaned.len());
        let title = cleaned[..end]
            .trim_end_matches(|c: char| c.is_whitespace() || "-([{".contains(c))
            .trim();
        if !title.is_empty() {
            attrs.title = Some(title.split_whitespace().collect::<Vec<_>>().join(" "));
        }

        let hay = tags::haystack(stem);
        attrs.source = tags::detect(&hay, SOURCE_RULES).map(String::from);
        attrs.codec = tags::detect(&hay, CODEC_RULES).map(String::from);
        attrs.audio = tags::detect(&hay, AUDIO_RULES).map(String::from);
        attrs.channels = tags::detect(&hay, CHANNEL_RULES).map(String::from);
        attrs.hdr = tags::detect_hdr(&hay).into_iter().map(String::from).collect();

        attrs.group = RELEASE_GROUP
            .captures(stem)
            .and_then(|c| c.get(1))
            .map(|m| m.as_str().to_string())
            .filter(|g| !g.chars().all(|c| c.is_ascii_digit()));

        trace!(
            filename = filename,
            title = ?attrs.title,
            year = ?attrs.year,
            seasons = ?attrs.seasons,
            episodes = ?attrs.episodes,
            resolution = ?attrs.resolution,
            "Parsed filename"
        );

        attrs
    }
}

fn strip_extension(filename: &str) -> &str {
    match filename.rsplit_once('.') {
        Some((stem, ext)) if VIDEO_EXTENSIONS.contains(&ext.to_lowercase().as_str()) => stem,
        _ => filename,
    }
}

fn find(re: &Regex, text: &str) -> Option<(usize, String)> {
    let caps = re.captures(text)?;
    let m = caps.get(1).or_else(|| caps.get(0))?;
    Some((caps.get(0)?.start(), m.as_str().to_string()))
}

fn number(caps: &Captures<'_>, group: usize) -> Option<u32> {
    caps.get(group).and_then(|m| m.as_str().parse().ok())
}

/// Locate the first episode marker: `S01E04[E05]`, then `1x04`, then
/// `Season 1 Episode 4`.
fn find_episode(text: &str) -> Option<(usize, Vec<u32>, Vec<u32>)> {
    if let Some(caps) = SEASON_EPISODE.captures(text) {
        let start = caps.get(0)?.start();
        let season = number(&caps, 1)?;
        let mut episodes = vec![number(&caps, 2)?];
        if let Some(tail) = caps.get(3) {
            let extra: Vec<u32> = EXTRA_EPISODE
                .captures_iter(tail.as_str())
                .filter_map(|c| number(&c, 1))
                .collect();
            // `E01-E03` is a range, `E01E02E03` a list.
            let is_range = extra.len() == 1 && tail.as_str().contains('-');
            if is_range && extra[0] > episodes[0] && extra[0] - episodes[0] <= 50 {
                episodes = (episodes[0]..=extra[0]).collect();
            } else {
                episodes.extend(extra);
            }
        }
        return Some((start, vec![season], episodes));
    }

    for re in [&*CROSS_EPISODE, &*VERBOSE_EPISODE] {
        if let Some(caps) = re.captures(text) {
            let start = caps.get(0)?.start();
            return Some((start, vec![number(&caps, 1)?], vec![number(&caps, 2)?]));
        }
    }

    None
}

/// Pick the release year.
///
/// A year at the very start is taken as part of the title ("2012", "1917").
/// Among the rest, the last one before the first metadata marker wins, so
/// "Blade Runner 2049 2017 1080p" yields 2017.
fn find_year(text: &str, boundary: Option<usize>) -> Option<(usize, String)> {
    let candidates: Vec<(usize, String)> = YEAR
        .captures_iter(text)
        .filter_map(|c| c.get(1))
        .filter(|m| !text[..m.start()].trim().is_empty())
        .map(|m| (m.start(), m.as_str().to_string()))
        .collect();

    match boundary {
        Some(limit) => candidates
            .iter()
            .filter(|(start, _)| *start < limit)
            .last()
            .cloned()
            .or_else(|| candidates.first().cloned()),
        None => candidates.last().cloned(),
    }
}
