//! Data types exchanged with the question-bank backend

use crate::{Error, Result};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// One of the four fixed answer choices of a question
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OptionKey {
    /// Option A
    A,
    /// Option B
    B,
    /// Option C
    C,
    /// Option D
    D,
}

impl OptionKey {
    /// All options in display order
    pub const ALL: [Self; 4] = [Self::A, Self::B, Self::C, Self::D];

    /// Wire form used by the backend (`"a"` .. `"d"`)
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::A => "a",
            Self::B => "b",
            Self::C => "c",
            Self::D => "d",
        }
    }

    /// Upper-case label shown to users
    #[must_use]
    pub const fn label(self) -> char {
        match self {
            Self::A => 'A',
            Self::B => 'B',
            Self::C => 'C',
            Self::D => 'D',
        }
    }
}

impl fmt::Display for OptionKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for OptionKey {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "a" => Ok(Self::A),
            "b" => Ok(Self::B),
            "c" => Ok(Self::C),
            "d" => Ok(Self::D),
            other => Err(Error::validation(
                "option",
                format!("option must be one of a/b/c/d, got {other:?}"),
            )),
        }
    }
}

/// Integer percentage of `count` within `total`, rounded half up
///
/// Zero responses yield 0 rather than a division by zero.
#[must_use]
pub fn percentage(count: u64, total: u64) -> u64 {
    if total == 0 {
        return 0;
    }
    let count = u128::from(count.min(total));
    let total = u128::from(total);
    let rounded = (count * 200 + total) / (total * 2);
    u64::try_from(rounded).unwrap_or(100).min(100)
}

/// A question as listed by `GET /api/questions`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Question {
    /// Stable identifier
    pub id: i64,
    /// Question text, may contain newlines
    pub question: String,
    /// Text of option A
    pub option_a: String,
    /// Text of option B
    pub option_b: String,
    /// Text of option C
    pub option_c: String,
    /// Text of option D
    pub option_d: String,
    /// Responses recorded for option A
    #[serde(default)]
    pub count_a: u64,
    /// Responses recorded for option B
    #[serde(default)]
    pub count_b: u64,
    /// Responses recorded for option C
    #[serde(default)]
    pub count_c: u64,
    /// Responses recorded for option D
    #[serde(default)]
    pub count_d: u64,
    /// Best upload score among responses choosing A
    #[serde(default)]
    pub max_score_a: Option<f64>,
    /// Best upload score among responses choosing B
    #[serde(default)]
    pub max_score_b: Option<f64>,
    /// Best upload score among responses choosing C
    #[serde(default)]
    pub max_score_c: Option<f64>,
    /// Best upload score among responses choosing D
    #[serde(default)]
    pub max_score_d: Option<f64>,
    /// Confirmed correct option, as stored by the backend
    #[serde(default)]
    pub correct_option: Option<String>,
}

/// Per-option view of a question
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct OptionStat<'a> {
    /// Which option this is
    pub key: OptionKey,
    /// Option text
    pub text: &'a str,
    /// Responses for this option
    pub count: u64,
    /// Best recorded score for this option
    pub max_score: Option<f64>,
}

impl OptionStat<'_> {
    /// Highest score worth showing: only for options somebody picked and
    /// only when the backend reported a finite number
    #[must_use]
    pub fn top_score(&self) -> Option<f64> {
        match self.max_score {
            Some(score) if self.count > 0 && score.is_finite() => Some(score),
            _ => None,
        }
    }
}

impl Question {
    /// Statistics for a single option
    #[must_use]
    pub fn option(&self, key: OptionKey) -> OptionStat<'_> {
        let (text, count, max_score) = match key {
            OptionKey::A => (&self.option_a, self.count_a, self.max_score_a),
            OptionKey::B => (&self.option_b, self.count_b, self.max_score_b),
            OptionKey::C => (&self.option_c, self.count_c, self.max_score_c),
            OptionKey::D => (&self.option_d, self.count_d, self.max_score_d),
        };
        OptionStat {
            key,
            text,
            count,
            max_score,
        }
    }

    /// Statistics for all four options in display order
    #[must_use]
    pub fn options(&self) -> [OptionStat<'_>; 4] {
        OptionKey::ALL.map(|key| self.option(key))
    }

    /// Sum of the four option counts
    #[must_use]
    pub const fn total_responses(&self) -> u64 {
        self.count_a
            .saturating_add(self.count_b)
            .saturating_add(self.count_c)
            .saturating_add(self.count_d)
    }

    /// Share of responses for `key`, in whole percent
    #[must_use]
    pub fn percentage(&self, key: OptionKey) -> u64 {
        percentage(self.option(key).count, self.total_responses())
    }

    /// The confirmed correct option, if the stored value is a valid key
    #[must_use]
    pub fn confirmed_option(&self) -> Option<OptionKey> {
        self.correct_option.as_deref().and_then(|raw| raw.parse().ok())
    }

    /// Whether `key` is the confirmed correct option
    #[must_use]
    pub fn is_confirmed(&self, key: OptionKey) -> bool {
        self.confirmed_option() == Some(key)
    }
}

/// One page of questions
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct QuestionPage {
    /// Questions on this page
    #[serde(default)]
    pub questions: Vec<Question>,
    /// Number of questions matching the filter
    pub total: u64,
    /// Page number (1-based)
    pub page: u32,
    /// Number of pages
    pub pages: u32,
}

/// Aggregate counts from `GET /api/stats`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct StatsSnapshot {
    /// Questions in the bank
    pub total_questions: u64,
    /// Responses recorded across all questions
    pub total_answers: u64,
    /// Uploads processed
    pub total_uploads: u64,
}

/// Counts reported by a successful upload
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct UploadSummary {
    /// Questions found in the pasted HTML
    pub extracted: u64,
    /// Questions that were new to the bank
    pub added: u64,
    /// Existing questions whose counts were incremented
    pub updated: u64,
}

/// Effects undone by deleting an upload record
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct RevertSummary {
    /// Questions removed because that upload added them
    #[serde(default)]
    pub reverted_added: u64,
    /// Answer-count increments rolled back
    #[serde(default)]
    pub reverted_updated: u64,
}

impl RevertSummary {
    /// Human-readable summary, omitting lines whose count is zero
    #[must_use]
    pub fn message(&self) -> String {
        let mut lines = vec!["Upload record deleted.".to_string()];
        if self.reverted_added > 0 {
            lines.push(format!("Removed {} added question(s)", self.reverted_added));
        }
        if self.reverted_updated > 0 {
            lines.push(format!("Reverted {} answer count(s)", self.reverted_updated));
        }
        lines.join("\n")
    }
}

/// One entry of the upload history
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UploadRecord {
    /// Identifier
    pub id: i64,
    /// Timestamp as stored by the backend
    pub uploaded_at: String,
    /// Questions added by this upload
    #[serde(default)]
    pub questions_added: u64,
    /// Questions whose counts this upload incremented
    #[serde(default)]
    pub questions_updated: u64,
    /// Score entered with the upload
    #[serde(default)]
    pub score: Option<f64>,
}

impl UploadRecord {
    /// Timestamp as `YYYY-MM-DD HH:MM:SS` (ISO `T` form normalized), or the
    /// raw value if it cannot be parsed
    #[must_use]
    pub fn uploaded_at_display(&self) -> String {
        chrono::NaiveDateTime::parse_from_str(&self.uploaded_at, "%Y-%m-%d %H:%M:%S")
            .or_else(|_| {
                chrono::NaiveDateTime::parse_from_str(&self.uploaded_at, "%Y-%m-%dT%H:%M:%S%.f")
            })
            .map_or_else(
                |_| self.uploaded_at.clone(),
                |ts| ts.format("%Y-%m-%d %H:%M:%S").to_string(),
            )
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::float_cmp)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use proptest::prelude::*;
    use rstest::rstest;

    fn question(counts: [u64; 4]) -> Question {
        Question {
            id: 7,
            question: "Which robot may enter the base zone?".to_string(),
            option_a: "Hero".to_string(),
            option_b: "Engineer".to_string(),
            option_c: "Sentry".to_string(),
            option_d: "Drone".to_string(),
            count_a: counts[0],
            count_b: counts[1],
            count_c: counts[2],
            count_d: counts[3],
            max_score_a: None,
            max_score_b: None,
            max_score_c: None,
            max_score_d: None,
            correct_option: None,
        }
    }

    #[rstest]
    #[case("a", OptionKey::A)]
    #[case("B", OptionKey::B)]
    #[case(" c ", OptionKey::C)]
    #[case("D", OptionKey::D)]
    fn test_option_key_parsing(#[case] raw: &str, #[case] expected: OptionKey) {
        assert_eq!(raw.parse::<OptionKey>().unwrap(), expected);
    }

    #[test]
    fn test_option_key_rejects_unknown() {
        let err = "e".parse::<OptionKey>().unwrap_err();
        assert!(matches!(err, Error::Validation { .. }));
    }

    #[test]
    fn test_option_key_serializes_lowercase() {
        assert_eq!(serde_json::to_string(&OptionKey::C).unwrap(), "\"c\"");
        assert_eq!(OptionKey::C.label(), 'C');
    }

    #[rstest]
    #[case(0, 0, 0)]
    #[case(1, 3, 33)]
    #[case(2, 3, 67)]
    #[case(1, 8, 13)]
    #[case(1, 200, 1)]
    #[case(1, 201, 0)]
    #[case(5, 5, 100)]
    fn test_percentage_rounds_half_up(#[case] count: u64, #[case] total: u64, #[case] pct: u64) {
        assert_eq!(percentage(count, total), pct);
    }

    proptest! {
        #[test]
        fn prop_percentage_is_bounded(counts in proptest::array::uniform4(0u64..10_000)) {
            let q = question(counts);
            for key in OptionKey::ALL {
                let pct = q.percentage(key);
                prop_assert!(pct <= 100);
                if q.total_responses() == 0 {
                    prop_assert_eq!(pct, 0);
                }
            }
        }
    }

    #[test]
    fn test_total_responses_sums_counts() {
        let q = question([3, 0, 1, 6]);
        assert_eq!(q.total_responses(), 10);
        assert_eq!(q.percentage(OptionKey::D), 60);
        assert_eq!(q.percentage(OptionKey::B), 0);
    }

    #[test]
    fn test_confirmed_option_is_case_insensitive() {
        let mut q = question([1, 1, 1, 1]);
        q.correct_option = Some("C".to_string());

        assert_eq!(q.confirmed_option(), Some(OptionKey::C));
        assert!(q.is_confirmed(OptionKey::C));
        assert!(!q.is_confirmed(OptionKey::A));

        q.correct_option = Some(String::new());
        assert_eq!(q.confirmed_option(), None);
    }

    #[test]
    fn test_top_score_requires_responses_and_finite_value() {
        let mut q = question([2, 0, 1, 0]);
        q.max_score_a = Some(92.5);
        q.max_score_b = Some(80.0);
        q.max_score_c = Some(f64::NAN);

        assert_eq!(q.option(OptionKey::A).top_score(), Some(92.5));
        assert_eq!(q.option(OptionKey::B).top_score(), None);
        assert_eq!(q.option(OptionKey::C).top_score(), None);
        assert_eq!(q.option(OptionKey::D).top_score(), None);
    }

    #[test]
    fn test_question_deserializes_with_missing_scores() {
        let raw = serde_json::json!({
            "id": 12,
            "question": "Line one\nLine two",
            "question_hash": "ignored",
            "option_a": "1", "option_b": "2", "option_c": "3", "option_d": "4",
            "count_a": 4, "count_b": 0, "count_c": 0, "count_d": 1,
            "max_score_a": 88.0,
            "max_score_b": null,
            "correct_option": null,
            "created_at": "2025-04-01 10:00:00"
        });

        let q: Question = serde_json::from_value(raw).unwrap();
        assert_eq!(q.total_responses(), 5);
        assert_eq!(q.max_score_a, Some(88.0));
        assert_eq!(q.max_score_d, None);
        assert_eq!(q.confirmed_option(), None);
    }

    #[test]
    fn test_revert_message_lists_both_counts() {
        let summary = RevertSummary {
            reverted_added: 4,
            reverted_updated: 9,
        };
        let message = summary.message();

        assert!(message.contains("Removed 4 added question(s)"));
        assert!(message.contains("Reverted 9 answer count(s)"));
    }

    #[test]
    fn test_revert_message_omits_zero_lines() {
        let summary = RevertSummary {
            reverted_added: 0,
            reverted_updated: 3,
        };
        let message = summary.message();

        assert!(!message.contains("Removed"));
        assert!(message.contains("Reverted 3"));

        let summary = RevertSummary {
            reverted_added: 0,
            reverted_updated: 0,
        };
        assert_eq!(summary.message(), "Upload record deleted.");
    }

    #[test]
    fn test_uploaded_at_display() {
        let mut record = UploadRecord {
            id: 1,
            uploaded_at: "2025-05-04 21:07:45".to_string(),
            questions_added: 2,
            questions_updated: 5,
            score: Some(96.0),
        };
        assert_eq!(record.uploaded_at_display(), "2025-05-04 21:07:45");

        record.uploaded_at = "2025-05-04T21:07:45.250".to_string();
        assert_eq!(record.uploaded_at_display(), "2025-05-04 21:07:45");

        record.uploaded_at = "yesterday".to_string();
        assert_eq!(record.uploaded_at_display(), "yesterday");
    }

    #[test]
    fn test_uploads_in_same_minute_stay_distinct() {
        let at = |uploaded_at: &str| UploadRecord {
            id: 1,
            uploaded_at: uploaded_at.to_string(),
            questions_added: 0,
            questions_updated: 0,
            score: None,
        };

        assert_ne!(
            at("2025-05-04 21:07:05").uploaded_at_display(),
            at("2025-05-04 21:07:45").uploaded_at_display()
        );
    }
}
