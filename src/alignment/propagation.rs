use crate::types::{AlignmentPair, ScriptToken};

/// Hypothesis interval resolved for each script token position, plus match
/// counters for the alignment summary.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PropagatedTimings {
    /// One slot per script token; `Some(h)` points into the hypothesis
    /// sequence the alignment was computed against.
    pub mapped: Vec<Option<usize>>,
    pub matched: usize,
    pub missing: usize,
}

/// Walks the full script token sequence and assigns each word token the
/// hypothesis interval its alignment pair points at.
///
/// `alignment` must have been computed over exactly the word tokens of
/// `script_tokens`, in order. After the pair pass, non-word tokens inherit
/// the most recent interval so punctuation renders adjacent to the preceding
/// spoken word. Word tokens are never backfilled: an unmatched word stays
/// unmatched and is counted in `missing`.
pub fn propagate(script_tokens: &[ScriptToken], alignment: &[AlignmentPair]) -> PropagatedTimings {
    let word_indices: Vec<usize> = script_tokens
        .iter()
        .enumerate()
        .filter(|(_, token)| token.is_word)
        .map(|(idx, _)| idx)
        .collect();

    let mut mapped = vec![None; script_tokens.len()];
    let mut matched = 0usize;
    let mut missing = 0usize;

    for pair in alignment {
        let Some(ref_idx) = pair.ref_index else {
            continue;
        };
        let script_idx = word_indices[ref_idx];
        match pair.hyp_index {
            Some(hyp_idx) => {
                mapped[script_idx] = Some(hyp_idx);
                matched += 1;
            }
            None => missing += 1,
        }
    }

    let mut last_interval = None;
    for (idx, token) in script_tokens.iter().enumerate() {
        if mapped[idx].is_some() {
            last_interval = mapped[idx];
        } else if !token.is_word && last_interval.is_some() {
            mapped[idx] = last_interval;
        }
    }

    PropagatedTimings {
        mapped,
        matched,
        missing,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::alignment::edit_distance::align_sequences;
    use crate::alignment::tokenization::tokenize;

    fn reference_of(tokens: &[ScriptToken]) -> Vec<String> {
        tokens
            .iter()
            .filter(|t| t.is_word)
            .map(|t| t.normalized.clone())
            .collect()
    }

    #[test]
    fn all_words_matched() {
        let tokens = tokenize("hello world");
        let reference = reference_of(&tokens);
        let hypothesis = vec!["hello".to_string(), "world".to_string()];
        let alignment = align_sequences(&reference, &hypothesis);

        let result = propagate(&tokens, &alignment);
        assert_eq!(result.matched, 2);
        assert_eq!(result.missing, 0);
        assert_eq!(result.mapped, vec![Some(0), Some(1)]);
    }

    #[test]
    fn unmatched_word_stays_unmatched() {
        let tokens = tokenize("a b c");
        let reference = reference_of(&tokens);
        let hypothesis = vec!["a".to_string(), "c".to_string()];
        let alignment = align_sequences(&reference, &hypothesis);

        let result = propagate(&tokens, &alignment);
        assert_eq!(result.matched, 2);
        assert_eq!(result.missing, 1);
        assert_eq!(result.mapped, vec![Some(0), None, Some(1)]);
    }

    #[test]
    fn non_word_token_inherits_previous_interval() {
        let tokens = tokenize("wait — no");
        assert!(!tokens[1].is_word);
        let reference = reference_of(&tokens);
        let hypothesis = vec!["wait".to_string(), "no".to_string()];
        let alignment = align_sequences(&reference, &hypothesis);

        let result = propagate(&tokens, &alignment);
        assert_eq!(result.mapped, vec![Some(0), Some(0), Some(1)]);
        assert_eq!(result.matched, 2);
        assert_eq!(result.missing, 0);
    }

    #[test]
    fn leading_non_word_token_has_no_interval_to_inherit() {
        let tokens = tokenize("— hello");
        let reference = reference_of(&tokens);
        let hypothesis = vec!["hello".to_string()];
        let alignment = align_sequences(&reference, &hypothesis);

        let result = propagate(&tokens, &alignment);
        assert_eq!(result.mapped, vec![None, Some(0)]);
    }

    #[test]
    fn empty_script_produces_empty_mapping() {
        let tokens = tokenize("");
        let result = propagate(&tokens, &[]);
        assert!(result.mapped.is_empty());
        assert_eq!(result.matched, 0);
        assert_eq!(result.missing, 0);
    }
}
