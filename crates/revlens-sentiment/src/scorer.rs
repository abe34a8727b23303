//! Weighted word lexicon for product-review sentiment.

/// Product-review word weights.
///
/// Keys are lowercase single words. Values in `(0.0, 1.0]` are positive,
/// in `[-1.0, 0.0)` are negative. The final score is clamped to `[-1.0, 1.0]`.
pub(crate) const LEXICON: &[(&str, f32)] = &[
    // Positive signals
    ("great", 0.4),
    ("good", 0.3),
    ("excellent", 0.5),
    ("amazing", 0.5),
    ("awesome", 0.5),
    ("fantastic", 0.5),
    ("perfect", 0.5),
    ("best", 0.5),
    ("love", 0.5),
    ("loved", 0.5),
    ("loving", 0.5),
    ("nice", 0.3),
    ("recommend", 0.4),
    ("recommended", 0.4),
    ("quality", 0.3),
    ("value", 0.3),
    ("worth", 0.4),
    ("happy", 0.4),
    ("satisfied", 0.4),
    ("fast", 0.3),
    ("smooth", 0.3),
    ("durable", 0.3),
    ("superb", 0.5),
    // Negative signals
    ("bad", -0.4),
    ("worst", -0.6),
    ("terrible", -0.6),
    ("horrible", -0.6),
    ("awful", -0.6),
    ("poor", -0.4),
    ("waste", -0.6),
    ("useless", -0.6),
    ("broken", -0.5),
    ("broke", -0.5),
    ("defective", -0.6),
    ("fake", -0.6),
    ("damaged", -0.5),
    ("disappointed", -0.5),
    ("disappointing", -0.5),
    ("problem", -0.3),
    ("problems", -0.3),
    ("issue", -0.4),
    ("issues", -0.4),
    ("slow", -0.3),
    ("cheap", -0.3),
    ("refund", -0.4),
    ("average", -0.2),
];

/// Score a text string using the review lexicon.
///
/// Splits text into lowercase words, sums matching weights, and clamps
/// the result to `[-1.0, 1.0]`. Returns `0.0` for empty or unknown text.
#[must_use]
pub fn lexicon_score(text: &str) -> f32 {
    let mut score = 0.0_f32;
    for word in text.split_whitespace() {
        let w = word
            .trim_matches(|c: char| !c.is_alphabetic())
            .to_lowercase();
        for &(lex_word, weight) in LEXICON {
            if w == lex_word {
                score += weight;
                break;
            }
        }
    }
    score.clamp(-1.0, 1.0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_string_returns_zero() {
        assert_eq!(lexicon_score(""), 0.0);
    }

    #[test]
    fn whitespace_only_returns_zero() {
        assert_eq!(lexicon_score("   "), 0.0);
    }

    #[test]
    fn unknown_text_returns_zero() {
        assert_eq!(lexicon_score("the quick brown fox"), 0.0);
    }

    #[test]
    fn positive_keyword_returns_positive() {
        let score = lexicon_score("this phone is great");
        assert!(score > 0.0, "expected positive score, got {score}");
    }

    #[test]
    fn negative_keyword_returns_negative() {
        let score = lexicon_score("arrived broken");
        assert!(score < 0.0, "expected negative score, got {score}");
    }

    #[test]
    fn mixed_text_returns_intermediate() {
        let score = lexicon_score("great screen but terrible battery");
        // great (+0.4) + terrible (-0.6) = -0.2
        assert!(
            score > -1.0 && score < 1.0,
            "expected intermediate score, got {score}"
        );
    }

    #[test]
    fn score_clamps_to_positive_one() {
        // Stack many positives
        let text = "great excellent best love recommend quality amazing perfect awesome";
        let score = lexicon_score(text);
        assert_eq!(score, 1.0, "expected score clamped to 1.0, got {score}");
    }

    #[test]
    fn score_clamps_to_negative_one() {
        // Stack many negatives
        let text = "terrible worst broken defective useless awful waste horrible damaged";
        let score = lexicon_score(text);
        assert_eq!(score, -1.0, "expected score clamped to -1.0, got {score}");
    }

    #[test]
    fn punctuation_stripped_from_words() {
        // "amazing!" should match "amazing"
        let score = lexicon_score("amazing!");
        assert!(
            score > 0.0,
            "expected positive score for 'amazing!', got {score}"
        );
    }

    #[test]
    fn matching_is_case_insensitive() {
        assert_eq!(lexicon_score("GREAT"), lexicon_score("great"));
    }
}
