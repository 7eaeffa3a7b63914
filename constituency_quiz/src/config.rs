// ********* Input data structures ***********

use std::error::Error;
use std::fmt::Display;

/// The number of seats in the Lok Sabha.
///
/// It is only used as the denominator of the running counter, independently of how many
/// constituencies the loaded dataset actually contains.
pub const LOK_SABHA_SEATS: u32 = 543;

/// A parliamentary constituency, as found in the reference dataset.
#[derive(Eq, PartialEq, Debug, Clone, Hash)]
pub struct Constituency {
    /// The state or union territory.
    pub region: String,
    /// The canonical name, which is also the name that gets displayed once guessed.
    pub name: String,
    /// The code of the constituency within its region, if the source provides one.
    pub code: Option<String>,
    /// Other accepted spellings, in the order of the source. Never missing, possibly empty.
    pub alternate_spellings: Vec<String>,
}

// ******** Output data structures *********

/// A constituency that was recorded as guessed.
#[derive(Eq, PartialEq, Debug, Clone, Hash, PartialOrd, Ord)]
pub struct Guess {
    pub region: String,
    pub name: String,
}

/// What happened to the progress after one change of the input text.
#[derive(Eq, PartialEq, Debug, Clone, Default)]
pub struct GuessOutcome {
    /// The constituencies newly recorded by this change, in dataset order.
    pub new_guesses: Vec<Guess>,
}

impl GuessOutcome {
    /// True if at least one constituency was recorded (and the input got cleared).
    pub fn is_match(&self) -> bool {
        !self.new_guesses.is_empty()
    }
}

/// One row of the progress table.
#[derive(Eq, PartialEq, Debug, Clone)]
pub struct RegionProgress {
    pub region: String,
    pub vernacular: Option<String>,
    /// The guessed names, in the order they were guessed.
    pub guessed: Vec<String>,
    /// The number of constituencies of this region in the dataset.
    pub total: usize,
}

impl RegionProgress {
    pub fn guessed_count(&self) -> usize {
        self.guessed.len()
    }

    /// The guessed names as displayed in the table.
    pub fn guessed_names(&self) -> String {
        self.guessed.join(", ")
    }
}

/// Errors raised when assembling a dataset.
#[derive(Eq, PartialEq, Debug, Clone)]
pub enum QuizErrors {
    /// The canonical name is empty once normalized. It would match an empty input.
    EmptyName { region: String, name: String },
    /// The same canonical name appears twice within one region.
    DuplicateConstituency { region: String, name: String },
}

impl Error for QuizErrors {}

impl Display for QuizErrors {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            QuizErrors::EmptyName { region, name } => {
                write!(f, "constituency {:?} in {} has an empty name", name, region)
            }
            QuizErrors::DuplicateConstituency { region, name } => {
                write!(f, "constituency {} appears more than once in {}", name, region)
            }
        }
    }
}
