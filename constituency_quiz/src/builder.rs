use log::info;
use std::collections::{HashMap, HashSet};

pub use crate::config::*;
use crate::{normalize_name, Dataset, DatasetEntry};

/// A builder for assembling a dataset.
///
/// The builder checks the constraints that the matching relies on: a canonical name is
/// never empty once normalized, and a region never holds the same name twice.
///
/// ```
/// pub use constituency_quiz::builder::Builder;
/// # use constituency_quiz::QuizErrors;
///
/// let dataset = Builder::new()
///     .constituency("Goa", "North Goa", &[])?
///     .constituency("Goa", "South Goa", &[])?
///     .vernacular("Goa", Some("गोंय"))
///     .build();
///
/// assert_eq!(dataset.len(), 2);
/// assert_eq!(dataset.vernacular("Goa"), Some("गोंय"));
///
/// # Ok::<(), QuizErrors>(())
/// ```
#[derive(Debug, Default)]
pub struct Builder {
    pub(crate) _constituencies: Vec<Constituency>,
    pub(crate) _vernaculars: HashMap<String, Option<String>>,
    _seen: HashSet<(String, String)>,
}

impl Builder {
    pub fn new() -> Builder {
        Builder::default()
    }

    /// Adds a constituency with its alternate spellings.
    pub fn constituency(
        mut self,
        region: &str,
        name: &str,
        alternate_spellings: &[String],
    ) -> Result<Builder, QuizErrors> {
        self.add_constituency(&Constituency {
            region: region.to_string(),
            name: name.to_string(),
            code: None,
            alternate_spellings: alternate_spellings.to_vec(),
        })?;
        Ok(self)
    }

    /// Adds a constituency.
    ///
    /// Fails if its name is empty once normalized, or if the region already has a
    /// constituency with the same name.
    pub fn add_constituency(&mut self, constituency: &Constituency) -> Result<(), QuizErrors> {
        if normalize_name(&constituency.name).is_empty() {
            return Err(QuizErrors::EmptyName {
                region: constituency.region.clone(),
                name: constituency.name.clone(),
            });
        }
        let key = (constituency.region.clone(), constituency.name.clone());
        if !self._seen.insert(key) {
            return Err(QuizErrors::DuplicateConstituency {
                region: constituency.region.clone(),
                name: constituency.name.clone(),
            });
        }
        self._constituencies.push(constituency.clone());
        Ok(())
    }

    /// Sets the vernacular label of a region. The last label set for a region wins.
    pub fn vernacular(mut self, region: &str, label: Option<&str>) -> Builder {
        self.add_vernacular(region, label);
        self
    }

    pub fn add_vernacular(&mut self, region: &str, label: Option<&str>) {
        self._vernaculars
            .insert(region.to_string(), label.map(str::to_string));
    }

    pub fn build(self) -> Dataset {
        let entries: Vec<DatasetEntry> = self
            ._constituencies
            .into_iter()
            .map(DatasetEntry::new)
            .collect();
        let num_regions = entries
            .iter()
            .map(|e| e.constituency.region.as_str())
            .collect::<HashSet<&str>>()
            .len();
        info!(
            "Dataset: {} constituencies in {} regions, {} vernacular labels",
            entries.len(),
            num_regions,
            self._vernaculars.len()
        );
        Dataset {
            entries,
            vernaculars: self._vernaculars,
        }
    }
}
