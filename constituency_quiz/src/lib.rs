/*!
Matching and progress tracking for a constituency guessing game.

The player types the names of the constituencies of the Lok Sabha. Every change of the
input text is compared, after normalization, against the canonical name and the alternate
spellings of every constituency of a reference [`Dataset`]. The constituencies that match
and were not guessed before are recorded in the [`QuizSession`], grouped by state or union
territory, and the input gets cleared.

```
use constituency_quiz::builder::Builder;
use constituency_quiz::QuizSession;
# use constituency_quiz::QuizErrors;

let dataset = Builder::new()
    .constituency("Kerala", "Wayanad", &[])?
    .constituency("Kerala", "Thiruvananthapuram", &["Trivandrum".to_string()])?
    .build();

let mut session = QuizSession::new(dataset);
let outcome = session.set_input("trivandrum");
assert!(outcome.is_match());
assert_eq!(session.input(), "");
assert_eq!(session.correct_count(), 1);

let table = session.table();
assert_eq!(table[0].region, "Kerala");
assert_eq!(table[0].guessed_count(), 1);
assert_eq!(table[0].total, 2);
# Ok::<(), QuizErrors>(())
```
*/

pub mod builder;
mod config;
pub mod manual;

use log::{debug, info};
use regex::Regex;

use std::{
    collections::{BTreeMap, HashMap},
    sync::LazyLock,
};

pub use crate::config::*;

// The parts of a name that are not significant for the comparison: the word "and", the
// ampersand, whitespace, hyphens, and anything following a backslash. Only ASCII letters,
// digits and `_` count as word characters around "and".
static NAME_NOISE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?-u:\b)and(?-u:\b)|&|\s+|-+|\\.+").expect("static pattern")
});

/// Normalizes a name for comparison.
///
/// The name is lower-cased and the word "and", `&`, whitespace, hyphens and anything after a
/// backslash are removed. Removing a token may glue together a new one (`"a-nd"` gives
/// `"and"`), so the pass is repeated until nothing changes.
///
/// ```
/// use constituency_quiz::normalize_name;
///
/// assert_eq!(normalize_name("Daman & Diu"), "damandiu");
/// assert_eq!(normalize_name("Andaman and Nicobar Islands"), "andamannicobarislands");
/// assert_eq!(normalize_name("Ratnagiri-Sindhudurg"), "ratnagirisindhudurg");
/// ```
pub fn normalize_name(name: &str) -> String {
    let mut current = name.to_string();
    loop {
        let lowered = current.to_lowercase();
        let next = NAME_NOISE.replace_all(&lowered, "").into_owned();
        if next == current {
            return current;
        }
        current = next;
    }
}

// A constituency with the normalized forms of all its accepted names.
#[derive(Debug, Clone)]
struct DatasetEntry {
    constituency: Constituency,
    // The normalized canonical name first, then the normalized alternate spellings.
    keys: Vec<String>,
}

impl DatasetEntry {
    fn new(constituency: Constituency) -> DatasetEntry {
        let keys = std::iter::once(&constituency.name)
            .chain(constituency.alternate_spellings.iter())
            .map(|s| normalize_name(s))
            .collect();
        DatasetEntry { constituency, keys }
    }

    fn matches(&self, normalized_input: &str) -> bool {
        self.keys.iter().any(|k| k == normalized_input)
    }
}

/// The reference list of constituencies, and the vernacular labels of the regions.
///
/// A dataset is immutable once built. Use the [`builder::Builder`] to assemble one.
#[derive(Debug, Clone, Default)]
pub struct Dataset {
    entries: Vec<DatasetEntry>,
    vernaculars: HashMap<String, Option<String>>,
}

impl Dataset {
    /// A dataset without any constituency. Nothing ever matches against it.
    pub fn empty() -> Dataset {
        Dataset::default()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn constituencies(&self) -> impl Iterator<Item = &Constituency> {
        self.entries.iter().map(|e| &e.constituency)
    }

    /// The number of constituencies of the given region.
    pub fn region_total(&self, region: &str) -> usize {
        self.constituencies().filter(|c| c.region == region).count()
    }

    /// The vernacular label of a region, if any.
    pub fn vernacular(&self, region: &str) -> Option<&str> {
        self.vernaculars.get(region).and_then(|v| v.as_deref())
    }
}

/// The state of one game.
///
/// The session owns the input text and the progress. The only way to change them is to
/// change the input, through [`QuizSession::set_input`] (or the keystroke helpers built on
/// top of it).
///
/// Invariant: `correct_count` is the total number of names over all the regions of
/// `guesses`, and no name appears twice within a region.
#[derive(Debug, Clone)]
pub struct QuizSession {
    dataset: Dataset,
    // Sorted by region name, names in guess order.
    guesses: BTreeMap<String, Vec<String>>,
    correct_count: usize,
    input: String,
}

impl QuizSession {
    pub fn new(dataset: Dataset) -> QuizSession {
        QuizSession {
            dataset,
            guesses: BTreeMap::new(),
            correct_count: 0,
            input: String::new(),
        }
    }

    pub fn dataset(&self) -> &Dataset {
        &self.dataset
    }

    /// The current content of the input field.
    pub fn input(&self) -> &str {
        &self.input
    }

    /// The number of constituencies guessed so far.
    pub fn correct_count(&self) -> usize {
        self.correct_count
    }

    /// The names guessed for a region, in guess order.
    pub fn guessed(&self, region: &str) -> &[String] {
        self.guesses.get(region).map(Vec::as_slice).unwrap_or(&[])
    }

    pub fn is_guessed(&self, region: &str, name: &str) -> bool {
        self.guessed(region).iter().any(|n| n == name)
    }

    /// Replaces the input text and evaluates it against the dataset.
    ///
    /// Every constituency not guessed yet whose canonical name or one of its alternate
    /// spellings has the same normalized form as the input is recorded. Several
    /// constituencies may be recorded at once when their names collide after normalization.
    /// If anything was recorded the input is cleared, otherwise the text is kept as typed.
    pub fn set_input(&mut self, text: &str) -> GuessOutcome {
        self.input = text.to_string();
        let normalized = normalize_name(text);
        let candidates = self.unguessed_matches(&normalized);
        debug!(
            "set_input: input: {:?} normalized: {:?} matches: {:?}",
            text, normalized, candidates
        );

        let mut new_guesses: Vec<Guess> = Vec::new();
        for guess in candidates {
            if self.record(&guess) {
                info!("Guessed {} ({})", guess.name, guess.region);
                new_guesses.push(guess);
            }
        }

        if !new_guesses.is_empty() {
            self.input.clear();
        }
        GuessOutcome { new_guesses }
    }

    /// Appends one character to the input, as a keystroke would.
    pub fn type_char(&mut self, c: char) -> GuessOutcome {
        let mut text = self.input.clone();
        text.push(c);
        self.set_input(&text)
    }

    /// Removes the last character of the input, as a keystroke would.
    pub fn backspace(&mut self) -> GuessOutcome {
        let mut text = self.input.clone();
        text.pop();
        self.set_input(&text)
    }

    /// The progress table: one row per region with at least one guess, sorted by region name.
    ///
    /// The order is the byte order of the names, so upper case sorts before lower case
    /// ("NCT of Delhi" comes before "Nagaland").
    pub fn table(&self) -> Vec<RegionProgress> {
        self.guesses
            .iter()
            .map(|(region, names)| RegionProgress {
                region: region.clone(),
                vernacular: self.dataset.vernacular(region).map(str::to_string),
                guessed: names.clone(),
                total: self.dataset.region_total(region),
            })
            .collect()
    }

    fn unguessed_matches(&self, normalized_input: &str) -> Vec<Guess> {
        // The empty string is the normalized form of an empty field.
        if normalized_input.is_empty() {
            return Vec::new();
        }
        self.dataset
            .entries
            .iter()
            .filter(|e| e.matches(normalized_input))
            .map(|e| &e.constituency)
            .filter(|c| !self.is_guessed(&c.region, &c.name))
            .map(|c| Guess {
                region: c.region.clone(),
                name: c.name.clone(),
            })
            .collect()
    }

    // Returns false if the constituency was already recorded.
    fn record(&mut self, guess: &Guess) -> bool {
        let names = self.guesses.entry(guess.region.clone()).or_default();
        if names.contains(&guess.name) {
            return false;
        }
        names.push(guess.name.clone());
        self.correct_count += 1;
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::builder::Builder;
    use proptest::prelude::*;

    fn init() {
        let _ = env_logger::builder().is_test(true).try_init();
    }

    fn alts(names: &[&str]) -> Vec<String> {
        names.iter().map(|s| s.to_string()).collect()
    }

    fn sample_dataset() -> Dataset {
        Builder::new()
            .constituency("Kerala", "Wayanad", &[])
            .unwrap()
            .constituency("Kerala", "Thiruvananthapuram", &alts(&["Trivandrum"]))
            .unwrap()
            .constituency("Bihar", "Aurangabad", &[])
            .unwrap()
            .constituency("Bihar", "Pataliputra", &[])
            .unwrap()
            .constituency("Maharashtra", "Aurangabad", &alts(&["Chhatrapati Sambhajinagar"]))
            .unwrap()
            .constituency("Maharashtra", "Ratnagiri-Sindhudurg", &[])
            .unwrap()
            .vernacular("Kerala", Some("കേരളം"))
            .vernacular("Bihar", Some("बिहार"))
            .vernacular("Maharashtra", None)
            .build()
    }

    fn total_guessed(session: &QuizSession) -> usize {
        session.table().iter().map(|r| r.guessed_count()).sum()
    }

    #[test]
    fn normalize_lowercases_and_strips_separators() {
        assert_eq!(normalize_name("Wayanad"), "wayanad");
        assert_eq!(normalize_name("WAY ANAD"), "wayanad");
        assert_eq!(normalize_name("  Way\tanad \n"), "wayanad");
        assert_eq!(normalize_name("Ratnagiri--Sindhudurg"), "ratnagirisindhudurg");
        assert_eq!(normalize_name("Daman & Diu"), "damandiu");
        assert_eq!(normalize_name("Jammu and Kashmir"), "jammukashmir");
        assert_eq!(normalize_name(""), "");
    }

    #[test]
    fn normalize_keeps_and_inside_words() {
        assert_eq!(normalize_name("Chandni Chowk"), "chandnichowk");
        assert_eq!(normalize_name("Anandpur Sahib"), "anandpursahib");
        assert_eq!(normalize_name("Nagaland"), "nagaland");
    }

    #[test]
    fn normalize_backslash_drops_the_rest_of_the_line() {
        // Only a literal backslash introduces the dropped fragment.
        assert_eq!(normalize_name("Wayanad\\ (SC)"), "wayanad");
        assert_eq!(normalize_name("Wayanad (SC)"), "wayanad(sc)");
        assert_eq!(normalize_name("Wayanad.SC"), "wayanad.sc");
        // A trailing backslash on its own is not followed by anything and stays.
        assert_eq!(normalize_name("Wayanad\\"), "wayanad\\");
    }

    #[test]
    fn normalize_and_next_to_non_ascii_letters() {
        // Non-ASCII letters are not word characters for the boundary around "and".
        assert_eq!(normalize_name("Mahéand"), "mahé");
        assert_eq!(normalize_name("andé"), "é");
        assert_eq!(normalize_name("Café and Bar"), "cafébar");
        assert_eq!(normalize_name("Ōandō"), "ōō");
        assert_eq!(normalize_name("Bandé"), "bandé");
    }

    #[test]
    fn normalize_reaches_a_fixed_point() {
        assert_eq!(normalize_name("a-nd"), "");
        assert_eq!(normalize_name("(a nd)"), "()");
        assert_eq!(normalize_name("Bar a nd Baz"), "barandbaz");
        assert_eq!(normalize_name("an&d"), "");
    }

    proptest! {
        #[test]
        fn normalize_is_idempotent(s in "[a-zA-Z &\\-\\\\.\t]{0,24}") {
            let once = normalize_name(&s);
            prop_assert_eq!(normalize_name(&once), once);
        }

        #[test]
        fn normalize_is_idempotent_on_any_text(s in "\\PC{0,16}") {
            let once = normalize_name(&s);
            prop_assert_eq!(normalize_name(&once), once);
        }
    }

    #[test]
    fn matches_regardless_of_case_and_spacing() {
        init();
        for text in ["wayanad", "Wayanad", "WAYANAD", "way anad"] {
            let mut session = QuizSession::new(sample_dataset());
            let outcome = session.set_input(text);
            assert_eq!(
                outcome.new_guesses,
                vec![Guess {
                    region: "Kerala".to_string(),
                    name: "Wayanad".to_string()
                }]
            );
            assert_eq!(session.input(), "");
            assert_eq!(session.guessed("Kerala"), &["Wayanad".to_string()]);
            assert_eq!(session.correct_count(), 1);
        }
    }

    #[test]
    fn alternate_spelling_records_the_canonical_name() {
        let mut session = QuizSession::new(sample_dataset());
        assert!(session.set_input("Trivandrum").is_match());
        assert_eq!(session.guessed("Kerala"), &["Thiruvananthapuram".to_string()]);
    }

    #[test]
    fn no_match_keeps_the_input() {
        let mut session = QuizSession::new(sample_dataset());
        let outcome = session.set_input("Wayan");
        assert!(!outcome.is_match());
        assert_eq!(session.input(), "Wayan");
        assert_eq!(session.correct_count(), 0);
        assert!(session.table().is_empty());
    }

    #[test]
    fn guessing_twice_changes_nothing() {
        let mut session = QuizSession::new(sample_dataset());
        assert!(session.set_input("Wayanad").is_match());
        let outcome = session.set_input("way-anad");
        assert!(!outcome.is_match());
        assert_eq!(session.input(), "way-anad");
        assert_eq!(session.correct_count(), 1);
        assert_eq!(session.guessed("Kerala").len(), 1);
    }

    #[test]
    fn colliding_names_are_all_recorded_at_once() {
        let mut session = QuizSession::new(sample_dataset());
        let outcome = session.set_input("aurangabad");
        assert_eq!(outcome.new_guesses.len(), 2);
        assert_eq!(session.correct_count(), 2);
        assert_eq!(session.guessed("Bihar"), &["Aurangabad".to_string()]);
        assert_eq!(session.guessed("Maharashtra"), &["Aurangabad".to_string()]);
        assert_eq!(session.input(), "");
    }

    #[test]
    fn collision_only_records_what_is_left() {
        let mut session = QuizSession::new(sample_dataset());
        // The alternate spelling only belongs to the Maharashtra entry.
        assert!(session.set_input("Chhatrapati Sambhajinagar").is_match());
        let outcome = session.set_input("Aurangabad");
        assert_eq!(
            outcome.new_guesses,
            vec![Guess {
                region: "Bihar".to_string(),
                name: "Aurangabad".to_string()
            }]
        );
        assert_eq!(session.correct_count(), 2);
    }

    #[test]
    fn empty_input_never_matches() {
        let dataset = Builder::new()
            .constituency("Goa", "North Goa", &alts(&["", " - "]))
            .unwrap()
            .build();
        let mut session = QuizSession::new(dataset);
        assert!(!session.set_input("").is_match());
        assert!(!session.set_input("  ").is_match());
        assert_eq!(session.input(), "  ");
        assert_eq!(session.correct_count(), 0);
    }

    #[test]
    fn empty_dataset_never_matches() {
        let mut session = QuizSession::new(Dataset::empty());
        assert!(!session.set_input("Wayanad").is_match());
        assert_eq!(session.input(), "Wayanad");
    }

    #[test]
    fn typing_matches_on_the_last_keystroke() {
        let mut session = QuizSession::new(sample_dataset());
        let mut matched = Vec::new();
        for c in "Pataliputra".chars() {
            matched.push(session.type_char(c).is_match());
        }
        assert_eq!(matched.iter().filter(|m| **m).count(), 1);
        assert_eq!(matched.last(), Some(&true));
        assert_eq!(session.input(), "");
        assert_eq!(session.guessed("Bihar"), &["Pataliputra".to_string()]);
    }

    #[test]
    fn backspace_is_an_input_change() {
        let mut session = QuizSession::new(sample_dataset());
        for c in "Wayanadx".chars() {
            session.type_char(c);
        }
        // "Wayanad" matched before the extra character was typed.
        assert_eq!(session.input(), "x");
        session.backspace();
        assert_eq!(session.input(), "");
        assert_eq!(session.correct_count(), 1);
    }

    #[test]
    fn table_is_sorted_by_region() {
        let mut session = QuizSession::new(sample_dataset());
        session.set_input("Ratnagiri Sindhudurg");
        session.set_input("Wayanad");
        session.set_input("Pataliputra");
        let regions: Vec<String> = session.table().into_iter().map(|r| r.region).collect();
        assert_eq!(regions, vec!["Bihar", "Kerala", "Maharashtra"]);
    }

    #[test]
    fn table_rows_carry_totals_and_labels() {
        let mut session = QuizSession::new(sample_dataset());
        session.set_input("Trivandrum");
        session.set_input("Wayanad");
        session.set_input("Ratnagiri-Sindhudurg");
        let table = session.table();

        assert_eq!(table[0].region, "Kerala");
        assert_eq!(table[0].vernacular.as_deref(), Some("കേരളം"));
        assert_eq!(table[0].total, 2);
        assert_eq!(table[0].guessed_names(), "Thiruvananthapuram, Wayanad");

        assert_eq!(table[1].region, "Maharashtra");
        assert_eq!(table[1].vernacular, None);
        assert_eq!(table[1].guessed_count(), 1);
        assert_eq!(table[1].total, 2);
    }

    const SAMPLE_GUESSES: &[&str] = &[
        "wayanad",
        "WAY ANAD",
        "Trivandrum",
        "Thiruvananthapuram",
        "aurangabad",
        "Chhatrapati Sambhajinagar",
        "Pataliputra",
        "Ratnagiri Sindhudurg",
        "Kollam",
        "",
    ];

    proptest! {
        #[test]
        fn correct_count_always_matches_the_table(
            picks in prop::collection::vec(0..SAMPLE_GUESSES.len(), 0..30)
        ) {
            let mut session = QuizSession::new(sample_dataset());
            for idx in picks {
                let before = session.correct_count();
                let outcome = session.set_input(SAMPLE_GUESSES[idx]);
                prop_assert_eq!(session.correct_count(), total_guessed(&session));
                prop_assert_eq!(session.correct_count(), before + outcome.new_guesses.len());
                prop_assert!(session.correct_count() <= session.dataset().len());
                for row in session.table() {
                    let mut names = row.guessed.clone();
                    names.sort();
                    names.dedup();
                    prop_assert_eq!(names.len(), row.guessed.len());
                }
            }
        }
    }

    #[test]
    fn table_order_is_the_byte_order() {
        let dataset = Builder::new()
            .constituency("Nagaland", "Nagaland", &[])
            .unwrap()
            .constituency("NCT of Delhi", "Chandni Chowk", &[])
            .unwrap()
            .build();
        let mut session = QuizSession::new(dataset);
        session.set_input("Nagaland");
        session.set_input("Chandni Chowk");
        let regions: Vec<String> = session.table().into_iter().map(|r| r.region).collect();
        assert_eq!(regions, vec!["NCT of Delhi", "Nagaland"]);
    }

    #[test]
    fn correct_count_matches_the_table() {
        let mut session = QuizSession::new(sample_dataset());
        for text in [
            "wayanad",
            "nothing",
            "aurangabad",
            "Aurangabad",
            "trivandrum",
            "Thiruvananthapuram",
            "",
        ] {
            session.set_input(text);
            assert_eq!(session.correct_count(), total_guessed(&session));
        }
        assert_eq!(session.correct_count(), 4);
    }
}
