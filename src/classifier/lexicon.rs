//! Built-in rule-based sentiment backend.
//!
//! Scores a message by looking its words up in a polarity lexicon, with two
//! adjustments: a negation word flips the sign of the next sentiment word
//! ("not good" reads negative), and an intensifier scales it ("really good"
//! reads stronger than "good"). The mean polarity picks the label; the
//! confidence reflects how strong the signal was and how much of the text
//! it came from.

use std::collections::{HashMap, HashSet};

use super::{Classification, Classifier, ClassifierError};

/// Mean polarity above this is labelled positive, below its negation
/// negative, anything between neutral.
const POLARITY_EDGE: f64 = 0.1;

pub struct LexiconClassifier {
    polarities: HashMap<&'static str, f64>,
    negations: HashSet<&'static str>,
    intensifiers: HashMap<&'static str, f64>,
}

/// What the lexicon saw in one message.
struct TextSignal {
    /// Mean adjusted polarity of the matched words, clamped to [-1.0, 1.0].
    polarity: f64,
    matched: usize,
    tokens: usize,
}

impl LexiconClassifier {
    pub fn new() -> Self {
        let polarities: HashMap<&'static str, f64> = [
            // positive
            ("love", 0.9),
            ("loved", 0.9),
            ("loves", 0.9),
            ("amazing", 0.8),
            ("awesome", 0.8),
            ("excellent", 0.8),
            ("fantastic", 0.8),
            ("brilliant", 0.8),
            ("perfect", 0.8),
            ("delighted", 0.8),
            ("great", 0.7),
            ("wonderful", 0.7),
            ("best", 0.7),
            ("impressed", 0.7),
            ("impressive", 0.7),
            ("happy", 0.6),
            ("enjoy", 0.6),
            ("enjoyed", 0.6),
            ("beautiful", 0.6),
            ("recommend", 0.6),
            ("recommended", 0.6),
            ("pleased", 0.6),
            ("satisfied", 0.6),
            ("good", 0.5),
            ("glad", 0.5),
            ("nice", 0.5),
            ("cool", 0.5),
            ("fun", 0.5),
            ("helpful", 0.5),
            ("smooth", 0.5),
            ("like", 0.4),
            ("liked", 0.4),
            ("likes", 0.4),
            ("solid", 0.4),
            ("fast", 0.4),
            ("easy", 0.4),
            ("thanks", 0.4),
            ("thank", 0.4),
            ("works", 0.3),
            // negative
            ("hate", -0.9),
            ("hated", -0.9),
            ("hates", -0.9),
            ("scam", -0.9),
            ("terrible", -0.8),
            ("awful", -0.8),
            ("horrible", -0.8),
            ("worst", -0.8),
            ("garbage", -0.8),
            ("useless", -0.7),
            ("disappointed", -0.7),
            ("disappointing", -0.7),
            ("crash", -0.7),
            ("crashes", -0.7),
            ("crashed", -0.7),
            ("trash", -0.7),
            ("broken", -0.6),
            ("buggy", -0.6),
            ("annoying", -0.6),
            ("annoyed", -0.6),
            ("frustrating", -0.6),
            ("frustrated", -0.6),
            ("angry", -0.6),
            ("fail", -0.6),
            ("fails", -0.6),
            ("failed", -0.6),
            ("failure", -0.6),
            ("waste", -0.6),
            ("bad", -0.5),
            ("poor", -0.5),
            ("sad", -0.5),
            ("upset", -0.5),
            ("bug", -0.5),
            ("bugs", -0.5),
            ("laggy", -0.5),
            ("boring", -0.5),
            ("ugly", -0.5),
            ("confusing", -0.5),
            ("mess", -0.5),
            ("slow", -0.4),
            ("wrong", -0.4),
            ("confused", -0.4),
        ]
        .into_iter()
        .collect();

        let negations: HashSet<&'static str> = [
            "not", "no", "never", "don't", "dont", "doesn't", "doesnt", "didn't", "didnt",
            "can't", "cant", "won't", "wont", "isn't", "isnt", "wasn't", "wasnt", "nothing",
            "hardly", "barely",
        ]
        .into_iter()
        .collect();

        let intensifiers: HashMap<&'static str, f64> = [
            ("extremely", 2.0),
            ("incredibly", 1.8),
            ("absolutely", 1.8),
            ("totally", 1.6),
            ("very", 1.5),
            ("super", 1.5),
            ("really", 1.4),
            ("so", 1.3),
            ("quite", 1.2),
            ("pretty", 1.2),
            ("somewhat", 0.7),
            ("slightly", 0.5),
        ]
        .into_iter()
        .collect();

        Self {
            polarities,
            negations,
            intensifiers,
        }
    }

    fn score_text(&self, text: &str) -> TextSignal {
        let mut scores: Vec<f64> = Vec::new();
        let mut tokens = 0usize;

        let mut negate_next = false;
        let mut intensifier: f64 = 1.0;

        for raw in text.split_whitespace() {
            let word = normalize(raw);
            if word.is_empty() {
                // pure punctuation, leave modifiers alone
                continue;
            }
            tokens += 1;

            if self.negations.contains(word.as_str()) {
                negate_next = true;
                continue;
            }

            if let Some(multiplier) = self.intensifiers.get(word.as_str()) {
                intensifier = *multiplier;
                continue;
            }

            if let Some(base) = self.polarities.get(word.as_str()) {
                let mut score = *base;
                if negate_next {
                    score = -score;
                    negate_next = false;
                }
                score *= intensifier;
                intensifier = 1.0;
                scores.push(score);
            } else {
                // unknown word breaks the modifier chain
                negate_next = false;
                intensifier = 1.0;
            }
        }

        let polarity = if scores.is_empty() {
            0.0
        } else {
            let mean = scores.iter().sum::<f64>() / scores.len() as f64;
            mean.clamp(-1.0, 1.0)
        };

        TextSignal {
            polarity,
            matched: scores.len(),
            tokens,
        }
    }
}

impl Classifier for LexiconClassifier {
    fn classify(&self, text: &str) -> Result<Classification, ClassifierError> {
        if text.trim().is_empty() {
            return Err(ClassifierError::EmptyText);
        }

        let signal = self.score_text(text);

        let label = if signal.polarity > POLARITY_EDGE {
            "positive"
        } else if signal.polarity < -POLARITY_EDGE {
            "negative"
        } else {
            "neutral"
        };

        Ok(Classification {
            label: label.to_string(),
            score: confidence(&signal),
        })
    }
}

impl Default for LexiconClassifier {
    fn default() -> Self {
        Self::new()
    }
}

/// Confidence grows with signal strength and with how much of the text the
/// lexicon recognised. Capped below 1.0; a rule-based scorer is never certain.
fn confidence(signal: &TextSignal) -> f64 {
    let coverage = if signal.tokens == 0 {
        0.0
    } else {
        (signal.matched as f64 / signal.tokens as f64).min(1.0)
    };
    let strength = signal.polarity.abs();

    (0.35 + 0.45 * strength + 0.20 * coverage).min(0.95)
}

fn normalize(token: &str) -> String {
    token
        .trim_matches(|c: char| !c.is_alphanumeric())
        .to_lowercase()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn classify(text: &str) -> Classification {
        LexiconClassifier::new().classify(text).unwrap()
    }

    #[test]
    fn labels_positive_text() {
        let result = classify("I love this!");
        assert_eq!(result.label, "positive");
        assert!(result.score > 0.75);
    }

    #[test]
    fn labels_negative_text() {
        let result = classify("this is terrible and buggy");
        assert_eq!(result.label, "negative");
        assert!(result.score > 0.5);
    }

    #[test]
    fn labels_neutral_when_nothing_matches() {
        let result = classify("the meeting moved to tuesday");
        assert_eq!(result.label, "neutral");
    }

    #[test]
    fn negation_flips_the_label() {
        assert_eq!(classify("good").label, "positive");
        assert_eq!(classify("not good").label, "negative");
        assert_eq!(classify("never works").label, "negative");
    }

    #[test]
    fn intensifier_strengthens_the_signal() {
        let plain = classify("good");
        let intense = classify("extremely good");

        assert_eq!(intense.label, "positive");
        assert!(intense.score > plain.score);
    }

    #[test]
    fn mixed_signals_land_on_neutral() {
        let result = classify("good ideas but buggy execution");
        assert_eq!(result.label, "neutral");
    }

    #[test]
    fn punctuation_does_not_hide_words() {
        let result = classify("awesome!!!");
        assert_eq!(result.label, "positive");
    }

    #[test]
    fn empty_text_is_rejected() {
        let backend = LexiconClassifier::new();
        assert!(matches!(
            backend.classify("   "),
            Err(ClassifierError::EmptyText)
        ));
    }

    #[test]
    fn confidence_stays_inside_the_unit_interval() {
        for text in [
            "absolutely love love love it",
            "hate hate hate",
            "nothing to report",
            "extremely extremely good",
        ] {
            let result = classify(text);
            assert!(result.score > 0.0 && result.score < 1.0, "text: {text}");
        }
    }
}
