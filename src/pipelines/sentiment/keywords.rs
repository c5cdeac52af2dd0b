use std::collections::HashMap;

/// Keywords kept per entry.
const ENTRY_KEYWORD_LIMIT: usize = 5;

/// Minimum token length (in characters) to count as significant.
const MIN_WORD_LEN: usize = 4;

/// Extract the top 5 significant words from an entry's text.
///
/// Tokens are maximal alphabetic runs (accented letters included) of at least
/// four characters, lowercased, ranked by frequency descending with ties
/// broken by first occurrence.
pub fn extract_keywords(text: &str) -> Vec<String> {
    rank_by_frequency(significant_words(text), ENTRY_KEYWORD_LIMIT)
}

fn significant_words(text: &str) -> impl Iterator<Item = String> + '_ {
    text.split(|c: char| !c.is_alphabetic())
        .filter(|word| word.chars().count() >= MIN_WORD_LEN)
        .map(|word| word.to_lowercase())
}

/// Rank words by frequency descending, ties by first occurrence, keeping the
/// top `limit`. Shared by per-entry extraction and global aggregation.
pub(crate) fn rank_by_frequency<I>(words: I, limit: usize) -> Vec<String>
where
    I: IntoIterator<Item = String>,
{
    let mut counts: HashMap<String, (usize, usize)> = HashMap::new();
    for (position, word) in words.into_iter().enumerate() {
        let entry = counts.entry(word).or_insert((0, position));
        entry.0 += 1;
    }

    let mut ranked: Vec<(String, (usize, usize))> = counts.into_iter().collect();
    ranked.sort_by(|a, b| b.1 .0.cmp(&a.1 .0).then(a.1 .1.cmp(&b.1 .1)));
    ranked.into_iter().take(limit).map(|(word, _)| word).collect()
}
