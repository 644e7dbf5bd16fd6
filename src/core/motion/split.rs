//! Splitting rendered text into word fragments for word-by-word reveals.

/// A piece of split text: either a word or the exact whitespace run between words.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Fragment {
    Word(String),
    Space(String),
}

impl Fragment {
    pub fn text(&self) -> &str {
        match self {
            Fragment::Word(text) | Fragment::Space(text) => text,
        }
    }

    pub fn is_word(&self) -> bool {
        matches!(self, Fragment::Word(_))
    }
}

/// Split text into alternating word and whitespace fragments.
///
/// Whitespace runs are kept verbatim, so joining every fragment's text
/// reproduces the input exactly.
pub fn split_words(text: &str) -> Vec<Fragment> {
    let mut fragments = Vec::new();
    let mut current = String::new();
    let mut in_space = false;

    for ch in text.chars() {
        let is_space = ch.is_whitespace();
        if !current.is_empty() && is_space != in_space {
            fragments.push(make_fragment(std::mem::take(&mut current), in_space));
        }
        in_space = is_space;
        current.push(ch);
    }

    if !current.is_empty() {
        fragments.push(make_fragment(current, in_space));
    }

    fragments
}

fn make_fragment(text: String, space: bool) -> Fragment {
    if space {
        Fragment::Space(text)
    } else {
        Fragment::Word(text)
    }
}

/// Number of word fragments.
pub fn word_count(fragments: &[Fragment]) -> usize {
    fragments.iter().filter(|f| f.is_word()).count()
}

/// Concatenate fragment text back into a string.
pub fn join_fragments(fragments: &[Fragment]) -> String {
    fragments.iter().map(Fragment::text).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_split_simple_sentence() {
        let fragments = split_words("Close more deals");

        assert_eq!(
            fragments,
            vec![
                Fragment::Word("Close".into()),
                Fragment::Space(" ".into()),
                Fragment::Word("more".into()),
                Fragment::Space(" ".into()),
                Fragment::Word("deals".into()),
            ]
        );
    }

    #[test]
    fn test_split_keeps_irregular_whitespace() {
        let text = "  Sales never\tstop  \n";
        let fragments = split_words(text);

        assert_eq!(word_count(&fragments), 3);
        assert_eq!(join_fragments(&fragments), text);
        assert_eq!(fragments[0], Fragment::Space("  ".into()));
        assert_eq!(fragments[4], Fragment::Space("\t".into()));
    }

    #[test]
    fn test_split_empty_and_blank() {
        assert!(split_words("").is_empty());

        let blank = split_words("   ");
        assert_eq!(word_count(&blank), 0);
        assert_eq!(blank.len(), 1);
    }

    #[test]
    fn test_split_punctuation_stays_with_words() {
        let fragments = split_words("Track Visits. Capture Proof.");
        let words: Vec<_> = fragments
            .iter()
            .filter(|f| f.is_word())
            .map(Fragment::text)
            .collect();

        assert_eq!(words, ["Track", "Visits.", "Capture", "Proof."]);
    }
}
