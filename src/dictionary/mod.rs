use std::collections::HashSet;
use std::fs;
use std::path::Path;

/// An immutable, case-insensitive word list. Built once per session and
/// never mutated afterwards, so sharing across calls needs no locking.
pub struct Dictionary {
    words: HashSet<String>,
}

impl Dictionary {
    /// Load a dictionary from a line-delimited word list. A missing or
    /// unreadable file degrades to an empty dictionary instead of failing;
    /// callers relying on a populated set should check `len()`.
    pub fn load<P: AsRef<Path>>(path: P) -> Self {
        let path = path.as_ref();
        match fs::read_to_string(path) {
            Ok(content) => {
                let words: HashSet<String> = content
                    .lines()
                    .map(|line| line.trim().to_uppercase())
                    .filter(|word| !word.is_empty())
                    .collect();
                tracing::info!("Loaded {} words into dictionary", words.len());
                Self { words }
            }
            Err(err) => {
                tracing::warn!(
                    "Could not read dictionary at {}: {}. Continuing with an empty dictionary.",
                    path.display(),
                    err
                );
                Self::empty()
            }
        }
    }

    /// Create an empty dictionary (for testing)
    pub fn empty() -> Self {
        Self {
            words: HashSet::new(),
        }
    }

    /// Build a dictionary from an in-memory word list.
    pub fn from_words<I, S>(words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        Self {
            words: words
                .into_iter()
                .map(|word| word.as_ref().trim().to_uppercase())
                .filter(|word| !word.is_empty())
                .collect(),
        }
    }

    /// Check if a word exists in the dictionary (case-insensitive).
    pub fn contains(&self, word: &str) -> bool {
        let word = word.trim();
        if word.is_empty() {
            return false;
        }
        self.words.contains(&word.to_uppercase())
    }

    /// Get the number of words in the dictionary
    pub fn len(&self) -> usize {
        self.words.len()
    }

    /// Check if dictionary is empty
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    /// Iterate over every word, uppercased. The generator scans this.
    pub fn words(&self) -> impl Iterator<Item = &str> {
        self.words.iter().map(String::as_str)
    }
}
