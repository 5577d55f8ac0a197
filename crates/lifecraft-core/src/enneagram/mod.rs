//! Enneagram screener and instinct scoring.
//!
//! The screener has 45 Likert items, five per type. Responses are summed per
//! type and normalised into probabilities; the instinct battery works the same
//! way over the three instinctual variants. Item banks and type profiles are
//! available in English and Korean.

mod items;
pub mod profiles;

pub use items::{instinct_items, screener_items, InstinctItem, ScreenerItem};
pub use profiles::{
    profile, subtype_description, wing_description, LocalizedProfile, TypeProfile,
};

use crate::error::{LifecraftError, Result};
use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, HashSet};
use std::fmt;
use std::str::FromStr;

pub const TYPE_COUNT: usize = 9;
pub const LIKERT_MIN: u8 = 1;
pub const LIKERT_MAX: u8 = 5;

const HIGH_CONFIDENCE_LEAD: f64 = 0.20;
const MEDIUM_CONFIDENCE_LEAD: f64 = 0.07;

// ---------------------------------------------------------------------------
// Locale
// ---------------------------------------------------------------------------

/// Language of item wording and profile text.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Locale {
    #[default]
    #[serde(rename = "en")]
    En,
    #[serde(rename = "kr", alias = "ko")]
    Kr,
}

impl Locale {
    pub fn as_str(self) -> &'static str {
        match self {
            Locale::En => "en",
            Locale::Kr => "kr",
        }
    }
}

impl fmt::Display for Locale {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Locale {
    type Err = LifecraftError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "en" => Ok(Locale::En),
            "kr" | "ko" => Ok(Locale::Kr),
            _ => Err(LifecraftError::InvalidLocale(s.to_string())),
        }
    }
}

// ---------------------------------------------------------------------------
// Instinct
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Instinct {
    Sp,
    So,
    Sx,
}

impl Instinct {
    pub fn as_str(self) -> &'static str {
        match self {
            Instinct::Sp => "sp",
            Instinct::So => "so",
            Instinct::Sx => "sx",
        }
    }

    pub fn display_name(self, locale: Locale) -> &'static str {
        match (self, locale) {
            (Instinct::Sp, Locale::En) => "Self Preservation",
            (Instinct::So, Locale::En) => "Social",
            (Instinct::Sx, Locale::En) => "Intimate",
            (Instinct::Sp, Locale::Kr) => "자기보존",
            (Instinct::So, Locale::Kr) => "사회적",
            (Instinct::Sx, Locale::Kr) => "친밀",
        }
    }
}

impl FromStr for Instinct {
    type Err = LifecraftError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "sp" => Ok(Instinct::Sp),
            "so" => Ok(Instinct::So),
            "sx" => Ok(Instinct::Sx),
            _ => Err(LifecraftError::InvalidInstinct(s.to_string())),
        }
    }
}

pub fn type_name(enneagram_type: u8, locale: Locale) -> Option<&'static str> {
    profile(enneagram_type).map(|p| p.name.get(locale))
}

// ---------------------------------------------------------------------------
// Responses
// ---------------------------------------------------------------------------

/// One answer. `value` is kept wide so out-of-range input reaches
/// validation instead of failing to decode.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Response {
    pub item_id: String,
    pub value: i64,
}

impl Response {
    pub fn new(item_id: impl Into<String>, value: i64) -> Self {
        Self {
            item_id: item_id.into(),
            value,
        }
    }

    /// The value as a Likert score; only meaningful after [`check_likert`].
    fn score(&self) -> u32 {
        u32::try_from(self.value).unwrap_or(0)
    }
}

fn check_likert(responses: &[Response]) -> Result<()> {
    let range = i64::from(LIKERT_MIN)..=i64::from(LIKERT_MAX);
    match responses.iter().find(|r| !range.contains(&r.value)) {
        Some(bad) => Err(LifecraftError::InvalidLikert {
            item: bad.item_id.clone(),
            value: bad.value,
        }),
        None => Ok(()),
    }
}

/// First response per item id, in submission order.
fn first_responses<'a>(responses: &'a [Response]) -> impl Iterator<Item = &'a Response> {
    let mut seen: HashSet<&'a str> = HashSet::new();
    responses
        .iter()
        .filter(move |&r| seen.insert(r.item_id.as_str()))
}

// ---------------------------------------------------------------------------
// Screener scoring
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Confidence {
    High,
    Medium,
    Low,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TypeScores {
    /// Summed Likert values, keyed by type 1..=9.
    pub raw: BTreeMap<u8, u32>,
    /// `raw / total`; uniform when nothing was answered.
    pub probabilities: BTreeMap<u8, f64>,
}

pub fn score_screener(responses: &[Response]) -> Result<TypeScores> {
    check_likert(responses)?;

    let mut raw = [0u32; TYPE_COUNT];
    for response in first_responses(responses) {
        if let Some(t) = items::screener_type(&response.item_id) {
            raw[(t - 1) as usize] += response.score();
        }
    }

    let total: u32 = raw.iter().sum();
    let probabilities: Vec<f64> = if total == 0 {
        vec![1.0 / TYPE_COUNT as f64; TYPE_COUNT]
    } else {
        raw.iter().map(|r| *r as f64 / total as f64).collect()
    };

    Ok(TypeScores {
        raw: (1..=TYPE_COUNT as u8).zip(raw).collect(),
        probabilities: (1..=TYPE_COUNT as u8).zip(probabilities).collect(),
    })
}

/// Band from how far the leading type is ahead of the runner-up.
pub fn confidence_band(probabilities: &BTreeMap<u8, f64>) -> Confidence {
    let mut sorted: Vec<f64> = probabilities.values().copied().collect();
    sorted.sort_by(|a, b| b.total_cmp(a));
    if sorted.len() < 2 {
        return Confidence::Low;
    }
    let lead = sorted[0] - sorted[1];
    if lead >= HIGH_CONFIDENCE_LEAD {
        Confidence::High
    } else if lead >= MEDIUM_CONFIDENCE_LEAD {
        Confidence::Medium
    } else {
        Confidence::Low
    }
}

/// Highest probability wins; ties go to the lowest type number.
pub fn primary_type(probabilities: &BTreeMap<u8, f64>) -> u8 {
    let mut best = 1;
    let mut score = f64::NEG_INFINITY;
    for (t, p) in probabilities {
        if *p > score {
            best = *t;
            score = *p;
        }
    }
    best
}

// ---------------------------------------------------------------------------
// Instinct scoring
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct InstinctScores {
    pub sp: u32,
    pub so: u32,
    pub sx: u32,
    pub dominant: Instinct,
}

pub fn score_instincts(responses: &[Response]) -> Result<InstinctScores> {
    check_likert(responses)?;

    let (mut sp, mut so, mut sx) = (0u32, 0u32, 0u32);
    for response in first_responses(responses) {
        let Some(instinct) = items::instinct_of(&response.item_id) else {
            continue;
        };
        let slot = match instinct {
            Instinct::Sp => &mut sp,
            Instinct::So => &mut so,
            Instinct::Sx => &mut sx,
        };
        *slot += response.score();
    }

    // Ties resolve in sp, so, sx order.
    let mut dominant = Instinct::Sp;
    let mut best = sp;
    for (instinct, value) in [(Instinct::So, so), (Instinct::Sx, sx)] {
        if value > best {
            dominant = instinct;
            best = value;
        }
    }

    Ok(InstinctScores { sp, so, sx, dominant })
}

// ---------------------------------------------------------------------------
// Assessment
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Assessment {
    pub locale: Locale,
    pub scores: TypeScores,
    pub primary_type: u8,
    pub type_name: &'static str,
    pub confidence: Confidence,
    pub profile: LocalizedProfile,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub instincts: Option<InstinctScores>,
    /// Subtype text for the primary type and dominant instinct.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub subtype: Option<&'static str>,
}

pub fn assess(
    screener: &[Response],
    instincts: Option<&[Response]>,
    locale: Locale,
) -> Result<Assessment> {
    let scores = score_screener(screener)?;
    let primary = primary_type(&scores.probabilities);
    let confidence = confidence_band(&scores.probabilities);
    let instincts = instincts.map(score_instincts).transpose()?;
    let profile = profile(primary)
        .ok_or_else(|| LifecraftError::InvalidEnneagramType(primary.to_string()))?;

    Ok(Assessment {
        locale,
        type_name: profile.name.get(locale),
        primary_type: primary,
        confidence,
        profile: profile.localized(locale),
        subtype: instincts.map(|i| profile.subtype(i.dominant).get(locale)),
        scores,
        instincts,
    })
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    fn answer_all(favoured: u8) -> Vec<Response> {
        screener_items(Locale::En)
            .iter()
            .map(|item| {
                let value = if item.enneagram_type == favoured { 5 } else { 1 };
                Response::new(item.id, value)
            })
            .collect()
    }

    #[test]
    fn clear_profile_is_high_confidence() {
        let scores = score_screener(&answer_all(4)).unwrap();
        assert_eq!(scores.raw[&4], 25);
        assert_eq!(scores.raw[&1], 5);
        assert_eq!(primary_type(&scores.probabilities), 4);
        assert_eq!(confidence_band(&scores.probabilities), Confidence::High);
    }

    #[test]
    fn probabilities_sum_to_one() {
        let responses = vec![
            Response::new("s1_01", 3),
            Response::new("s1_12", 4),
            Response::new("s1_33", 2),
            Response::new("s1_45", 5),
        ];
        let scores = score_screener(&responses).unwrap();
        let sum: f64 = scores.probabilities.values().sum();
        assert!((sum - 1.0).abs() < 1e-9, "{sum}");
    }

    #[test]
    fn empty_responses_are_uniform_and_low() {
        let scores = score_screener(&[]).unwrap();
        assert!(scores
            .probabilities
            .values()
            .all(|p| (p - 1.0 / 9.0).abs() < 1e-12));
        assert_eq!(primary_type(&scores.probabilities), 1);
        assert_eq!(confidence_band(&scores.probabilities), Confidence::Low);
    }

    #[test]
    fn duplicates_and_unknown_items_are_ignored() {
        let responses = vec![
            Response::new("s1_06", 5),
            Response::new("s1_06", 1),
            Response::new("bogus", 5),
            Response::new("i_01", 5),
        ];
        let scores = score_screener(&responses).unwrap();
        assert_eq!(scores.raw[&2], 5);
        assert_eq!(scores.raw.values().sum::<u32>(), 5);
        assert_eq!(scores.probabilities[&2], 1.0);
    }

    #[test]
    fn out_of_range_values_are_rejected() {
        let err = score_screener(&[Response::new("s1_01", 6)]).unwrap_err();
        assert!(matches!(err, LifecraftError::InvalidLikert { value: 6, .. }));
        assert!(score_instincts(&[Response::new("i_01", 0)]).is_err());

        for value in [300, -1] {
            let err = score_screener(&[Response::new("s1_02", value)]).unwrap_err();
            assert_eq!(
                err.to_string(),
                format!("invalid response value {value} for item 's1_02': must be 1-5")
            );
        }
    }

    #[test]
    fn ties_go_to_lowest_type() {
        let responses = vec![Response::new("s1_36", 4), Response::new("s1_11", 4)];
        let scores = score_screener(&responses).unwrap();
        assert_eq!(primary_type(&scores.probabilities), 3);
        assert_eq!(confidence_band(&scores.probabilities), Confidence::Low);
    }

    #[test]
    fn medium_band_boundary() {
        // 0.40 vs 0.30 leads by 0.10.
        let probabilities: BTreeMap<u8, f64> =
            [(1, 0.40), (2, 0.30), (3, 0.30)].into_iter().collect();
        assert_eq!(confidence_band(&probabilities), Confidence::Medium);
    }

    #[test]
    fn instinct_dominant_and_ties() {
        let responses = vec![
            Response::new("i_03", 5),
            Response::new("i_09", 4),
            Response::new("i_01", 2),
            Response::new("i_02", 3),
        ];
        let scores = score_instincts(&responses).unwrap();
        assert_eq!((scores.sp, scores.so, scores.sx), (2, 3, 9));
        assert_eq!(scores.dominant, Instinct::Sx);

        let tied = score_instincts(&[Response::new("i_02", 4), Response::new("i_04", 4)]).unwrap();
        assert_eq!(tied.dominant, Instinct::So);
        assert_eq!(score_instincts(&[]).unwrap().dominant, Instinct::Sp);
    }

    #[test]
    fn locale_parsing() {
        assert_eq!("en".parse::<Locale>().unwrap(), Locale::En);
        assert_eq!("KR".parse::<Locale>().unwrap(), Locale::Kr);
        assert_eq!("ko".parse::<Locale>().unwrap(), Locale::Kr);
        assert!(matches!(
            "fr".parse::<Locale>(),
            Err(LifecraftError::InvalidLocale(_))
        ));
        let parsed: Locale = serde_json::from_str("\"ko\"").unwrap();
        assert_eq!(parsed, Locale::Kr);
        assert_eq!(serde_json::to_string(&Locale::Kr).unwrap(), "\"kr\"");
    }

    #[test]
    fn korean_answers_score_like_english() {
        let korean: Vec<Response> = screener_items(Locale::Kr)
            .iter()
            .map(|item| Response::new(item.id, if item.enneagram_type == 6 { 5 } else { 2 }))
            .collect();
        let result = assess(&korean, None, Locale::Kr).unwrap();
        assert_eq!(result.primary_type, 6);
        assert_eq!(result.type_name, "충성가");
        assert_eq!(result.profile.nickname, "회의론자");

        let english = assess(&korean, None, Locale::En).unwrap();
        assert_eq!(english.scores, result.scores);
        assert_eq!(english.type_name, "The Loyalist");
        assert_eq!(type_name(6, Locale::Kr), Some("충성가"));
        assert_eq!(type_name(0, Locale::En), None);
    }

    #[test]
    fn assessment_json_shape() {
        let instincts = [Response::new("i_05", 5)];
        let result = assess(&answer_all(9), Some(&instincts), Locale::En).unwrap();
        assert_eq!(result.primary_type, 9);
        assert_eq!(result.type_name, "The Peacemaker");
        assert!(result.subtype.unwrap().starts_with("Self-Preservation Nine"));
        let json = serde_json::to_value(&result).unwrap();
        assert_eq!(json["primaryType"], 9);
        assert_eq!(json["locale"], "en");
        assert_eq!(json["confidence"], "high");
        assert_eq!(json["scores"]["raw"]["9"], 25);
        assert_eq!(json["instincts"]["dominant"], "sp");
        assert_eq!(json["profile"]["growthDirection"], 3);
        assert_eq!(json["profile"]["wings"], serde_json::json!([8, 1]));
    }
}
