//! Human-readable stream labels.
//!
//! Display only: nothing here feeds back into filtering or ranking. Absent
//! attributes are left out of the label instead of being guessed.

use serde::Serialize;

use crate::resolver::Candidate;
use crate::text::words;

const SIZE_UNITS: &[&str] = &["B", "KB", "MB", "GB", "TB"];

/// Format a byte count with 1024-based units, e.g. `18.4 GB`.
pub fn hr_size(bytes: u64) -> String {
    let mut value = bytes as f64;
    let mut unit = 0;
    while value >= 1024.0 && unit < SIZE_UNITS.len() - 1 {
        value /= 1024.0;
        unit += 1;
    }

    if unit == 0 {
        format!("{} {}", bytes, SIZE_UNITS[0])
    } else {
        format!("{:.1} {}", value, SIZE_UNITS[unit])
    }
}

/// Display name for a resolution token.
pub fn resolution_label(resolution: Option<&str>) -> String {
    match resolution.map(|r| r.trim().to_lowercase()) {
        Some(r) if r == "2160p" || r == "4k" || r == "uhd" => "2160p (4k)".to_string(),
        Some(r) if r == "1080p" || r == "fhd" => "1080p (Full HD)".to_string(),
        Some(r) if r == "720p" || r == "hd" => "720p (HD)".to_string(),
        Some(r) if !r.is_empty() => r,
        _ => "Unknown".to_string(),
    }
}

/// Filename without its extension, dots turned into spaces.
pub fn clean_filename(name: &str) -> String {
    let stem = match name.rsplit_once('.') {
        Some((stem, ext)) if !stem.is_empty() && !ext.contains(' ') => stem,
        _ => name,
    };
    stem.replace('.', " ")
}

/// Two-part label shown for a candidate: a short name and detail lines.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StreamLabel {
    pub name: String,
    pub details: Vec<String>,
}

impl StreamLabel {
    pub fn for_candidate(candidate: &Candidate) -> Self {
        let attrs = &candidate.attributes;
        let filename = &candidate.item.name;

        let mut hdr: Vec<String> = attrs.hdr.clone();
        let has_dv_token = words(filename).iter().any(|w| w.eq_ignore_ascii_case("DV"));
        if has_dv_token && !hdr.iter().any(|h| h.eq_ignore_ascii_case("DV")) {
            hdr.push("DV".to_string());
        }
        let hdr = if hdr.is_empty() {
            "SDR".to_string()
        } else {
            hdr.join(" ")
        };

        let mut first = vec![hdr];
        let audio: Vec<&str> = [attrs.audio.as_deref(), attrs.channels.as_deref()]
            .into_iter()
            .flatten()
            .collect();
        if !audio.is_empty() {
            first.push(audio.join(" - "));
        }
        if let Some(size) = candidate.item.size {
            first.push(hr_size(size));
        }

        let second: Vec<&str> = [attrs.source.as_deref(), attrs.codec.as_deref()]
            .into_iter()
            .flatten()
            .collect();

        let mut details = vec![first.join(" | ")];
        if !second.is_empty() {
            details.push(second.join(" | "));
        }
        details.push(clean_filename(filename));

        Self {
            name: resolution_label(attrs.resolution()),
            details,
        }
    }

    /// Detail lines joined with newlines.
    pub fn title(&self) -> String {
        self.details.join("\n")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parser::{FilenameParser, ParsedAttributes, SceneNameParser};
    use crate::store::RawListingItem;

    fn candidate(name: &str, size: Option<u64>) -> Candidate {
        let mut item = RawListingItem::new("1", name);
        item.size = size;
        Candidate {
            attributes: SceneNameParser::new().parse(name),
            item,
            url: String::new(),
            sort_key: 0,
        }
    }

    #[test]
    fn test_hr_size() {
        assert_eq!(hr_size(0), "0 B");
        assert_eq!(hr_size(512), "512 B");
        assert_eq!(hr_size(1536), "1.5 KB");
        assert_eq!(hr_size(19_756_849_562), "18.4 GB");
    }

    #[test]
    fn test_resolution_label() {
        assert_eq!(resolution_label(Some("2160p")), "2160p (4k)");
        assert_eq!(resolution_label(Some("1080p")), "1080p (Full HD)");
        assert_eq!(resolution_label(Some("720p")), "720p (HD)");
        assert_eq!(resolution_label(Some("480p")), "480p");
        assert_eq!(resolution_label(None), "Unknown");
    }

    #[test]
    fn test_full_label() {
        let label = StreamLabel::for_candidate(&candidate(
            "Dune.Part.Two.2024.2160p.WEB-DL.DV.HDR10+.DDP5.1.Atmos.H.265.mkv",
            Some(19_756_849_562),
        ));

        assert_eq!(label.name, "2160p (4k)");
        assert_eq!(
            label.details,
            vec![
                "HDR10+ DV | Atmos - 5.1 | 18.4 GB",
                "WEB-DL | H.265",
                "Dune Part Two 2024 2160p WEB-DL DV HDR10+ DDP5 1 Atmos H 265",
            ]
        );
    }

    #[test]
    fn test_sparse_label() {
        let label = StreamLabel::for_candidate(&candidate("home video.mp4", None));
        assert_eq!(label.name, "Unknown");
        assert_eq!(label.details, vec!["SDR", "home video"]);
        assert_eq!(label.title(), "SDR\nhome video");
    }

    #[test]
    fn test_dvd_is_not_dolby_vision() {
        let mut c = candidate("Heat.1995.DVDRip.mkv", None);
        c.attributes = ParsedAttributes::default();
        let label = StreamLabel::for_candidate(&c);
        assert_eq!(label.details[0], "SDR");
    }
}
