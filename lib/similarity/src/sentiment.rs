//! Keyword sentiment scorer
//!
//! Classifies free text as positive or negative by averaging the values of
//! the known keywords it contains.

use ahash::AHashMap;
use serde::{Serialize, Serializer};
use std::fmt;

/// Keywords and their polarity (1 = positive, 0 = negative)
pub const KEYWORDS: &[(&str, u8)] = &[
    ("love", 1),
    ("amazing", 1),
    ("good", 1),
    ("great", 1),
    ("happy", 1),
    ("awesome", 1),
    ("hate", 0),
    ("terrible", 0),
    ("bad", 0),
    ("awful", 0),
    ("sad", 0),
];

/// Binary sentiment of a text
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Sentiment {
    Negative = 0,
    Positive = 1,
}

impl Sentiment {
    #[inline]
    pub fn as_u8(self) -> u8 {
        self as u8
    }

    /// Value as a feature column entry
    #[inline]
    pub fn as_feature(self) -> f64 {
        f64::from(self.as_u8())
    }
}

impl fmt::Display for Sentiment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Sentiment::Positive => f.write_str("GOOD"),
            Sentiment::Negative => f.write_str("BAD"),
        }
    }
}

// Serialized as 0/1 to match the HTTP responses
impl Serialize for Sentiment {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_u8(self.as_u8())
    }
}

/// Dictionary-lookup sentiment scorer
#[derive(Debug, Clone)]
pub struct KeywordSentiment {
    words: AHashMap<&'static str, u8>,
}

impl Default for KeywordSentiment {
    fn default() -> Self {
        Self {
            words: KEYWORDS.iter().copied().collect(),
        }
    }
}

impl KeywordSentiment {
    pub fn new() -> Self {
        Self::default()
    }

    /// Classify one text; no recognized words means `Negative`
    pub fn predict_text(&self, text: &str) -> Sentiment {
        let lowered = text.to_lowercase();
        let mut score = 0u32;
        let mut count = 0u32;

        for token in lowered.split_whitespace() {
            if let Some(&value) = self.words.get(token) {
                score += u32::from(value);
                count += 1;
            }
        }

        if count == 0 {
            return Sentiment::Negative;
        }

        if f64::from(score) / f64::from(count) >= 0.5 {
            Sentiment::Positive
        } else {
            Sentiment::Negative
        }
    }

    pub fn predict_many<S: AsRef<str>>(&self, texts: &[S]) -> Vec<Sentiment> {
        texts.iter().map(|t| self.predict_text(t.as_ref())).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_positive_text() {
        let scorer = KeywordSentiment::new();
        assert_eq!(scorer.predict_text("I love this great day"), Sentiment::Positive);
    }

    #[test]
    fn test_negative_text() {
        let scorer = KeywordSentiment::new();
        assert_eq!(scorer.predict_text("This is terrible and awful"), Sentiment::Negative);
    }

    #[test]
    fn test_unknown_and_empty_default_negative() {
        let scorer = KeywordSentiment::new();
        assert_eq!(scorer.predict_text("xyz qwerty"), Sentiment::Negative);
        assert_eq!(scorer.predict_text(""), Sentiment::Negative);
        assert_eq!(scorer.predict_text("   "), Sentiment::Negative);
    }

    #[test]
    fn test_case_insensitive() {
        let scorer = KeywordSentiment::new();
        assert_eq!(scorer.predict_text("AWESOME"), Sentiment::Positive);
        assert_eq!(scorer.predict_text("Sad"), Sentiment::Negative);
    }

    #[test]
    fn test_even_split_is_positive() {
        let scorer = KeywordSentiment::new();
        // one positive, one negative: average 0.5
        assert_eq!(scorer.predict_text("good but sad"), Sentiment::Positive);
        // one positive, two negative: average 0.33
        assert_eq!(scorer.predict_text("good bad awful"), Sentiment::Negative);
    }

    #[test]
    fn test_punctuation_is_not_stripped() {
        let scorer = KeywordSentiment::new();
        // "good!" is not a keyword, so nothing is recognized
        assert_eq!(scorer.predict_text("good!"), Sentiment::Negative);
    }

    #[test]
    fn test_predict_many_and_serialize() {
        let scorer = KeywordSentiment::new();
        let texts = vec!["I feel good".to_string(), "I hate homework".to_string()];
        let sentiments = scorer.predict_many(&texts);
        assert_eq!(sentiments, vec![Sentiment::Positive, Sentiment::Negative]);
        assert_eq!(serde_json::to_string(&sentiments).unwrap(), "[1,0]");
        assert_eq!(Sentiment::Positive.as_feature(), 1.0);
    }
}
