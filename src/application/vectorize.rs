//! Content vectorization over the event corpus.
//!
//! Builds one term vocabulary from every event's `title + description` and
//! represents each event as a tf-idf vector in that space. The vocabulary is
//! rebuilt from the snapshot on every call; vectors from different builds are
//! not comparable.
//!
//! Term weight is raw term frequency times smoothed inverse document
//! frequency, `ln((1 + n) / (1 + df)) + 1`, and each document vector is
//! L2-normalized. Dimension indices follow alphabetical term order, so
//! vector values do not depend on corpus input order.

use std::collections::{BTreeMap, HashMap, HashSet};

use crate::domain::entities::event::Event;

pub struct VectorSpace {
    terms: Vec<String>,
    vectors: HashMap<String, Vec<f64>>,
    ids: Vec<String>,
}

impl VectorSpace {
    /// Build the space from the full corpus. A single event, or all-empty
    /// text, still produces a valid (possibly zero-dimensional) space.
    pub fn build(events: &[Event]) -> Self {
        let stop_words: HashSet<String> = stop_words::get(stop_words::LANGUAGE::English)
            .into_iter()
            .collect();

        let docs: Vec<(String, Vec<String>)> = events
            .iter()
            .map(|e| (e.id.clone(), tokenize(&e.content_text(), &stop_words)))
            .collect();

        // Document frequency per term; BTreeMap gives the alphabetical
        // dimension ordering for free.
        let mut document_frequency: BTreeMap<String, usize> = BTreeMap::new();
        for (_, tokens) in &docs {
            let distinct: HashSet<&String> = tokens.iter().collect();
            for term in distinct {
                *document_frequency.entry(term.clone()).or_default() += 1;
            }
        }

        let terms: Vec<String> = document_frequency.keys().cloned().collect();
        let term_index: HashMap<&str, usize> = terms
            .iter()
            .enumerate()
            .map(|(i, t)| (t.as_str(), i))
            .collect();

        let corpus_size = docs.len() as f64;
        let idf: Vec<f64> = terms
            .iter()
            .map(|t| {
                let df = document_frequency[t] as f64;
                ((1.0 + corpus_size) / (1.0 + df)).ln() + 1.0
            })
            .collect();

        let mut vectors = HashMap::new();
        let mut ids = Vec::with_capacity(docs.len());
        for (id, tokens) in docs {
            let mut vector = vec![0.0_f64; terms.len()];
            for token in &tokens {
                if let Some(&i) = term_index.get(token.as_str()) {
                    vector[i] += 1.0;
                }
            }
            for (i, value) in vector.iter_mut().enumerate() {
                *value *= idf[i];
            }
            normalize(&mut vector);
            ids.push(id.clone());
            vectors.insert(id, vector);
        }

        Self {
            terms,
            vectors,
            ids,
        }
    }

    pub fn dimension(&self) -> usize {
        self.terms.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }

    /// Event ids present in the space, in corpus order.
    pub fn event_ids(&self) -> &[String] {
        &self.ids
    }

    pub fn vector(&self, event_id: &str) -> Option<&[f64]> {
        self.vectors.get(event_id).map(|v| v.as_slice())
    }

    pub fn contains(&self, event_id: &str) -> bool {
        self.vectors.contains_key(event_id)
    }
}

fn tokenize(text: &str, stop_words: &HashSet<String>) -> Vec<String> {
    text.to_lowercase()
        .split(|c: char| !c.is_alphanumeric())
        .filter(|t| t.chars().count() >= 2)
        .filter(|t| !stop_words.contains(*t))
        .map(str::to_string)
        .collect()
}

fn normalize(vector: &mut [f64]) {
    let norm = vector.iter().map(|v| v * v).sum::<f64>().sqrt();
    if norm > 0.0 {
        for v in vector.iter_mut() {
            *v /= norm;
        }
    }
}

/// Cosine similarity between two vectors of the same space. Defined as 0
/// when either operand is the zero vector, so callers never see NaN.
pub fn cosine_similarity(a: &[f64], b: &[f64]) -> f64 {
    if a.len() != b.len() || a.is_empty() {
        return 0.0;
    }
    let mut dot = 0.0_f64;
    let mut norm_a = 0.0_f64;
    let mut norm_b = 0.0_f64;
    for (x, y) in a.iter().zip(b.iter()) {
        dot += x * y;
        norm_a += x * x;
        norm_b += y * y;
    }
    let denom = norm_a.sqrt() * norm_b.sqrt();
    if denom == 0.0 {
        0.0
    } else {
        dot / denom
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn event(title: &str, description: &str) -> Event {
        Event::new(
            title.to_string(),
            description.to_string(),
            None,
            "100".to_string(),
            "0".to_string(),
            None,
        )
    }

    #[test]
    fn test_shared_dimensionality() {
        let events = vec![
            event("Jazz night", "Live jazz downtown"),
            event("Rust meetup", "Systems programming talks"),
        ];
        let space = VectorSpace::build(&events);
        assert!(space.dimension() > 0);
        let a = space.vector(&events[0].id).unwrap();
        let b = space.vector(&events[1].id).unwrap();
        assert_eq!(a.len(), b.len());
        assert_eq!(a.len(), space.dimension());
    }

    #[test]
    fn test_single_event_corpus() {
        let events = vec![event("Solo show", "One performer")];
        let space = VectorSpace::build(&events);
        assert_eq!(space.event_ids().len(), 1);
        assert!(space.dimension() > 0);
    }

    #[test]
    fn test_all_empty_text_is_valid() {
        let events = vec![event("", ""), event("", "")];
        let space = VectorSpace::build(&events);
        assert_eq!(space.dimension(), 0);
        assert_eq!(space.vector(&events[0].id).unwrap().len(), 0);
    }

    #[test]
    fn test_stop_words_dropped() {
        let events = vec![event("the and of", "concert")];
        let space = VectorSpace::build(&events);
        assert_eq!(space.dimension(), 1);
        assert!(space.terms.contains(&"concert".to_string()));
    }

    #[test]
    fn test_values_independent_of_corpus_order() {
        let a = event("Jazz night", "Live jazz downtown");
        let b = event("Rust meetup", "Systems programming talks");
        let forward = VectorSpace::build(&[a.clone(), b.clone()]);
        let reversed = VectorSpace::build(&[b.clone(), a.clone()]);
        assert_eq!(forward.vector(&a.id).unwrap(), reversed.vector(&a.id).unwrap());
        assert_eq!(forward.vector(&b.id).unwrap(), reversed.vector(&b.id).unwrap());
    }

    #[test]
    fn test_cosine_zero_vector_is_zero() {
        assert_eq!(cosine_similarity(&[0.0, 0.0], &[1.0, 2.0]), 0.0);
        assert_eq!(cosine_similarity(&[], &[]), 0.0);
    }

    #[test]
    fn test_cosine_bounds() {
        let identical = cosine_similarity(&[0.5, 0.5], &[0.5, 0.5]);
        assert!((identical - 1.0).abs() < 1e-9);
        let orthogonal = cosine_similarity(&[1.0, 0.0], &[0.0, 1.0]);
        assert_eq!(orthogonal, 0.0);
    }

    #[test]
    fn test_similar_text_scores_higher() {
        let a = event("Jazz night", "Live jazz music downtown");
        let b = event("Jazz brunch", "Morning jazz music with food");
        let c = event("Rust meetup", "Systems programming talks");
        let space = VectorSpace::build(&[a.clone(), b.clone(), c.clone()]);
        let va = space.vector(&a.id).unwrap();
        let vb = space.vector(&b.id).unwrap();
        let vc = space.vector(&c.id).unwrap();
        assert!(cosine_similarity(va, vb) > cosine_similarity(va, vc));
    }
}
