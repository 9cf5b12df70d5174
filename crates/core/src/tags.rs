//! Substring rule tables for release tags.
//!
//! Each table is ordered; the first rule with a matching needle wins, so
//! specific needles (`DTS-HD`) sit above general ones (`DTS`). Matching is
//! done against the upper-cased filename with spaces and underscores turned
//! into dots. The results are for display only and never affect ranking.

/// One `(needles, tag)` rule.
#[derive(Debug, Clone, Copy)]
pub struct TagRule {
    pub needles: &'static [&'static str],
    pub tag: &'static str,
    /// Needle must not run on into a letter or digit (`DTS.X` but not `DTS.X264`).
    pub whole: bool,
}

const fn rule(needles: &'static [&'static str], tag: &'static str) -> TagRule {
    TagRule {
        needles,
        tag,
        whole: false,
    }
}

const fn word(needles: &'static [&'static str], tag: &'static str) -> TagRule {
    TagRule {
        needles,
        tag,
        whole: true,
    }
}

pub const CODEC_RULES: &[TagRule] = &[
    rule(&["X265", "H265", "H.265", "HEVC"], "H.265"),
    rule(&["X264", "H264", "H.264", "AVC"], "H.264"),
    rule(&["AV1"], "AV1"),
    rule(&["VP9"], "VP9"),
    rule(&["XVID", "DIVX"], "XviD"),
];

pub const AUDIO_RULES: &[TagRule] = &[
    rule(&["ATMOS"], "Atmos"),
    rule(&["TRUEHD", "TRUE.HD"], "TrueHD"),
    rule(&["DTS-HD", "DTSHD"], "DTS-HD"),
    word(&["DTS-X", "DTSX", "DTS.X"], "DTS:X"),
    rule(&["DTS"], "DTS"),
    rule(&["DDP", "DD+", "EAC3", "E-AC-3"], "DD+"),
    rule(&["DD5", "DD2", "AC3"], "DD"),
    rule(&["AAC"], "AAC"),
    rule(&["OPUS"], "Opus"),
    rule(&["FLAC"], "FLAC"),
];

pub const CHANNEL_RULES: &[TagRule] = &[
    rule(&["7.1", "8CH"], "7.1"),
    rule(&["5.1", "6CH"], "5.1"),
    rule(&["2.0", "2CH"], "2.0"),
];

pub const DOLBY_VISION_RULES: &[TagRule] = &[rule(&["DOLBY.VISION", "DOLBYVISION", "DOVI"], "DV")];

pub const HDR_RULES: &[TagRule] = &[
    rule(&["HDR10+", "HDR10PLUS"], "HDR10+"),
    rule(&["HDR10"], "HDR10"),
    rule(&["HLG"], "HLG"),
    rule(&["HDR"], "HDR"),
];

pub const SOURCE_RULES: &[TagRule] = &[
    rule(&["REMUX"], "Remux"),
    rule(&["BLURAY", "BLU-RAY", "BDRIP", "BRRIP"], "BluRay"),
    rule(&["WEB-DL", "WEBDL"], "WEB-DL"),
    rule(&["WEBRIP", "WEB-RIP"], "WEBRip"),
    rule(&["HDTV"], "HDTV"),
    rule(&["DVDRIP", "DVD"], "DVD"),
    rule(&["WEB"], "WEB"),
];

/// Upper-case `name` and unify word separators to dots.
pub fn haystack(name: &str) -> String {
    name.to_uppercase()
        .chars()
        .map(|c| if c == ' ' || c == '_' { '.' } else { c })
        .collect()
}

/// First tag whose rule matches `haystack`.
pub fn detect(haystack: &str, rules: &[TagRule]) -> Option<&'static str> {
    rules
        .iter()
        .find(|r| r.needles.iter().any(|n| r.matches(haystack, n)))
        .map(|r| r.tag)
}

impl TagRule {
    fn matches(&self, haystack: &str, needle: &str) -> bool {
        if !self.whole {
            return haystack.contains(needle);
        }
        haystack.match_indices(needle).any(|(at, _)| {
            haystack[at + needle.len()..]
                .chars()
                .next()
                .map_or(true, |next| !next.is_alphanumeric())
        })
    }
}

/// HDR tags present in `haystack`: Dolby Vision first, then one HDR format.
pub fn detect_hdr(haystack: &str) -> Vec<&'static str> {
    [detect(haystack, DOLBY_VISION_RULES), detect(haystack, HDR_RULES)]
        .into_iter()
        .flatten()
        .collect()
}
