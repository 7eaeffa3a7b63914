use crate::quiz::*;

use serde::{Deserialize, Serialize};
use serde_json::Value as JSValue;

#[derive(Eq, PartialEq, Debug, Clone, Serialize, Deserialize)]
pub struct DataSource {
    pub provider: String,
    #[serde(rename = "filePath")]
    pub file_path: String,
    #[serde(rename = "excelWorksheetName")]
    pub excel_worksheet_name: Option<String>,
}

#[derive(Eq, PartialEq, Debug, Clone, Default, Serialize, Deserialize)]
pub struct QuizConfig {
    pub title: Option<String>,
    #[serde(rename = "totalSeats")]
    pub total_seats: Option<u32>,
    #[serde(rename = "dataSource")]
    pub data_source: Option<DataSource>,
    #[serde(rename = "vernacularFilePath")]
    pub vernacular_file_path: Option<String>,
}

/// A constituency, as written in the JSON list.
#[derive(PartialEq, Debug, Clone, Serialize, Deserialize)]
pub struct RawConstituency {
    #[serde(rename = "State/UT")]
    pub region: String,
    #[serde(rename = "PC_Code")]
    pub code: Option<JSValue>,
    #[serde(rename = "PCName")]
    pub name: String,
    // Missing in some versions of the list, or null.
    #[serde(rename = "Alternate Spellings")]
    pub alternate_spellings: Option<Vec<String>>,
}

#[derive(Eq, PartialEq, Debug, Clone, Serialize, Deserialize)]
pub struct RawVernacular {
    #[serde(rename = "State")]
    pub region: String,
    #[serde(rename = "Vernacular")]
    pub label: Option<String>,
}

pub fn read_config(path: &str) -> QuizResult<QuizConfig> {
    let contents = fs::read_to_string(path).context(OpeningJsonSnafu { path })?;
    let config: QuizConfig = serde_json::from_str(&contents).context(ParsingJsonSnafu {})?;
    Ok(config)
}

pub fn read_summary(path: &str) -> QuizResult<JSValue> {
    let contents = fs::read_to_string(path).context(OpeningJsonSnafu { path })?;
    let js: JSValue = serde_json::from_str(contents.as_str()).context(ParsingJsonSnafu {})?;
    Ok(js)
}
