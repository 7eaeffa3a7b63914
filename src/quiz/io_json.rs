// Readers for the JSON lists of constituencies and vernacular labels.

use crate::quiz::{io_common::read_js_code, *};

pub fn read_json_constituencies(path: &str) -> QuizResult<Vec<Constituency>> {
    let contents = fs::read_to_string(path).context(OpeningJsonSnafu { path })?;
    let raw: Vec<RawConstituency> =
        serde_json::from_str(contents.as_str()).context(ParsingJsonSnafu {})?;
    debug!("read_json_constituencies: {} records in {:?}", raw.len(), path);
    Ok(raw.into_iter().map(raw_to_constituency).collect())
}

fn raw_to_constituency(raw: RawConstituency) -> Constituency {
    Constituency {
        code: read_js_code(&raw.code),
        region: raw.region,
        name: raw.name,
        alternate_spellings: raw.alternate_spellings.unwrap_or_default(),
    }
}

pub fn read_json_vernaculars(path: &str) -> QuizResult<Vec<(String, Option<String>)>> {
    let contents = fs::read_to_string(path).context(OpeningJsonSnafu { path })?;
    let raw: Vec<RawVernacular> =
        serde_json::from_str(contents.as_str()).context(ParsingJsonSnafu {})?;
    debug!("read_json_vernaculars: {} labels in {:?}", raw.len(), path);
    Ok(raw
        .into_iter()
        .map(|rv| (rv.region, rv.label.filter(|l| !l.is_empty())))
        .collect())
}
