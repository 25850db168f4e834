use std::collections::HashMap;

use super::encoder::normalize_symptom;

/// The ordered vocabulary of symptom names a model bundle was trained on.
///
/// Index assignment is positional and immutable: the i-th term owns feature
/// position i for the lifetime of the loaded bundle. Terms are normalized at
/// construction with the same routine applied to request input, so encoder
/// lookups are exact string matches. A reverse map backs the lookup; the
/// observable behavior is identical to scanning the term list.
#[derive(Debug, Clone)]
pub struct Vocabulary {
    terms: Vec<String>,
    index: HashMap<String, usize>,
}

impl Vocabulary {
    /// Builds a vocabulary from terms in feature order, normalizing each one.
    ///
    /// Fails when a term normalizes to the empty string or when two terms
    /// collide after normalization. Either would corrupt the positional index
    /// assignment the classifier was trained against.
    pub fn from_terms<I, S>(terms: I) -> Result<Self, String>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut normalized = Vec::new();
        let mut index = HashMap::new();
        for (pos, raw) in terms.into_iter().enumerate() {
            let term = normalize_symptom(raw.as_ref())
                .ok_or_else(|| format!("term at position {} is empty after normalization", pos))?;
            if let Some(prev) = index.insert(term.clone(), pos) {
                return Err(format!(
                    "duplicate term '{}' at positions {} and {}",
                    term, prev, pos
                ));
            }
            normalized.push(term);
        }
        Ok(Self {
            terms: normalized,
            index,
        })
    }

    /// Number of terms, which is also the feature-vector length.
    pub fn len(&self) -> usize {
        self.terms.len()
    }

    pub fn is_empty(&self) -> bool {
        self.terms.is_empty()
    }

    /// Feature index of a normalized symptom name, if the vocabulary knows it.
    pub fn index_of(&self, symptom: &str) -> Option<usize> {
        self.index.get(symptom).copied()
    }

    /// Terms in feature order.
    pub fn terms(&self) -> &[String] {
        &self.terms
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.terms.iter().map(String::as_str)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_terms_keep_their_positions() {
        let vocab = Vocabulary::from_terms(vec!["fever", "cough", "fatigue"]).unwrap();
        assert_eq!(vocab.len(), 3);
        assert_eq!(vocab.index_of("fever"), Some(0));
        assert_eq!(vocab.index_of("cough"), Some(1));
        assert_eq!(vocab.index_of("fatigue"), Some(2));
        assert_eq!(vocab.index_of("headache"), None);
    }

    #[test]
    fn test_terms_are_normalized_at_construction() {
        let vocab = Vocabulary::from_terms(vec![" Fever ", "COUGH"]).unwrap();
        assert_eq!(vocab.terms(), ["fever", "cough"]);
        assert_eq!(vocab.index_of("fever"), Some(0));
        // Lookup expects normalized input; raw forms do not match.
        assert_eq!(vocab.index_of(" Fever "), None);
    }

    #[test]
    fn test_duplicate_terms_are_rejected() {
        let result = Vocabulary::from_terms(vec!["fever", "cough", "fever"]);
        assert!(result.is_err());
    }

    #[test]
    fn test_normalization_collisions_are_rejected() {
        // Distinct raw terms that collapse to the same normalized term.
        let result = Vocabulary::from_terms(vec!["Fever", "fever "]);
        assert!(result.is_err());
    }

    #[test]
    fn test_blank_terms_are_rejected() {
        let result = Vocabulary::from_terms(vec!["fever", "   "]);
        assert!(result.is_err());
    }
}
