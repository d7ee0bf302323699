use thiserror::Error;

/// The anchor value was not present in the sequence
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("'{0}' not found")]
pub struct AnchorNotFound(pub String);

/// Replace the first occurrence of `anchor` with `replacements`, keeping
/// everything around it in place.
pub fn splice<I>(sequence: &[String], anchor: &str, replacements: I) -> Result<Vec<String>, AnchorNotFound>
where
    I: IntoIterator<Item = String>,
{
    splice_where(sequence, anchor, |entry| entry == anchor, replacements)
}

/// Like [`splice`], but the anchor is the first entry accepted by `matches`.
/// `anchor` only names the target in the error.
pub fn splice_where<F, I>(
    sequence: &[String],
    anchor: &str,
    matches: F,
    replacements: I,
) -> Result<Vec<String>, AnchorNotFound>
where
    F: Fn(&str) -> bool,
    I: IntoIterator<Item = String>,
{
    let position = sequence
        .iter()
        .position(|entry| matches(entry))
        .ok_or_else(|| AnchorNotFound(anchor.to_string()))?;

    let mut result = Vec::with_capacity(sequence.len());
    result.extend_from_slice(&sequence[..position]);
    result.extend(replacements);
    result.extend_from_slice(&sequence[position + 1..]);
    Ok(result)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn strings(items: &[&str]) -> Vec<String> {
        items.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_splice_preserves_order_and_adjacency() {
        let sequence = strings(&["A", "SOURCE", "B"]);
        let result = splice(&sequence, "SOURCE", strings(&["intro", "t1", "t2"])).unwrap();
        assert_eq!(result, strings(&["A", "intro", "t1", "t2", "B"]));
    }

    #[test]
    fn test_splice_at_edges() {
        let first = splice(&strings(&["SOURCE", "B"]), "SOURCE", strings(&["x"])).unwrap();
        assert_eq!(first, strings(&["x", "B"]));

        let last = splice(&strings(&["A", "SOURCE"]), "SOURCE", strings(&["x"])).unwrap();
        assert_eq!(last, strings(&["A", "x"]));
    }

    #[test]
    fn test_splice_with_no_replacements_removes_anchor() {
        let result = splice(&strings(&["A", "SOURCE", "B"]), "SOURCE", Vec::new()).unwrap();
        assert_eq!(result, strings(&["A", "B"]));
    }

    #[test]
    fn test_splice_only_first_occurrence() {
        let result = splice(&strings(&["S", "A", "S"]), "S", strings(&["x"])).unwrap();
        assert_eq!(result, strings(&["x", "A", "S"]));
    }

    #[test]
    fn test_splice_where_uses_matcher() {
        let sequence = strings(&["./A", "./SOURCE", "./B"]);
        let result = splice_where(
            &sequence,
            "SOURCE",
            |entry| entry.trim_start_matches("./") == "SOURCE",
            strings(&["x"]),
        )
        .unwrap();
        assert_eq!(result, strings(&["./A", "x", "./B"]));
    }

    #[test]
    fn test_splice_missing_anchor() {
        let err = splice(&strings(&["A", "B"]), "SOURCE", strings(&["x"])).unwrap_err();
        assert_eq!(err, AnchorNotFound("SOURCE".to_string()));
    }
}
