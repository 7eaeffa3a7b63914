// Reading the list of constituencies from the Excel sheet it is published in.

use calamine::{open_workbook, DataType, Range, Reader, Xlsx};
use std::collections::HashMap;

use crate::quiz::{io_common::split_alternate_names, *};

// Accepted header names, the name of the published sheet first.
const REGION_COLUMNS: &[&str] = &["State", "State/UT"];
const NAME_COLUMNS: &[&str] = &["PC Name", "PCName"];
const CODE_COLUMNS: &[&str] = &["PC Code", "PC_Code"];
const ALTERNATE_COLUMNS: &[&str] = &["Alternative Names", "Alternate Spellings"];

#[derive(Eq, PartialEq, Debug, Clone)]
struct ColumnIndexes {
    region: usize,
    name: usize,
    code: Option<usize>,
    alternates: Option<usize>,
}

pub fn read_xlsx_constituencies(
    path: &str,
    worksheet_name: Option<&str>,
) -> QuizResult<Vec<Constituency>> {
    let wrange = get_range(path, worksheet_name)?;

    let mut iter = wrange.rows();
    let header = iter.next().context(EmptyExcelSnafu {})?;
    debug!("read_xlsx_constituencies: header: {:?}", header);
    let cols = get_col_indexes(header)?;
    debug!("read_xlsx_constituencies: columns: {:?}", cols);

    let mut res: Vec<Constituency> = Vec::new();
    for (idx, row) in iter.enumerate() {
        // The header is the first line of the sheet.
        let lineno = (idx + 2) as u64;
        if let Some(c) = read_row(row, &cols, lineno)? {
            res.push(c);
        }
    }
    Ok(res)
}

fn get_range(path: &str, worksheet_name: Option<&str>) -> QuizResult<Range<DataType>> {
    debug!("get_range: path: {:?} worksheet: {:?}", path, worksheet_name);
    let mut workbook: Xlsx<_> = open_workbook(path).context(OpeningExcelSnafu { path })?;

    // A worksheet name was provided, use it.
    if let Some(worksheet_name) = worksheet_name {
        workbook
            .worksheet_range(worksheet_name)
            .context(ExcelMissingWorksheetSnafu { worksheet_name })?
            .context(OpeningExcelSnafu { path })
    } else {
        let all_worksheets = workbook.worksheets();
        match all_worksheets.as_slice() {
            [] => EmptyExcelSnafu {}.fail(),
            [(worksheet_name, wrange)] => {
                debug!("get_range: using the only worksheet {:?}", worksheet_name);
                Ok(wrange.clone())
            }
            _ => ExcelAmbiguousWorksheetSnafu {
                names: all_worksheets
                    .iter()
                    .map(|(name, _)| name.clone())
                    .collect::<Vec<String>>(),
            }
            .fail(),
        }
    }
}

fn get_col_indexes(header: &[DataType]) -> QuizResult<ColumnIndexes> {
    let col_names: HashMap<String, usize> = header
        .iter()
        .enumerate()
        .filter_map(|(idx, x)| match x {
            DataType::String(s) => Some((s.trim().to_string(), idx)),
            _ => None,
        })
        .collect();

    let find = |names: &[&str]| names.iter().find_map(|n| col_names.get(*n).cloned());

    Ok(ColumnIndexes {
        region: find(REGION_COLUMNS).context(ExcelMissingColumnSnafu {
            column_name: REGION_COLUMNS[0],
        })?,
        name: find(NAME_COLUMNS).context(ExcelMissingColumnSnafu {
            column_name: NAME_COLUMNS[0],
        })?,
        code: find(CODE_COLUMNS),
        alternates: find(ALTERNATE_COLUMNS),
    })
}

// Fully empty lines are skipped.
fn read_row(
    row: &[DataType],
    cols: &ColumnIndexes,
    lineno: u64,
) -> QuizResult<Option<Constituency>> {
    let region = cell_text(row.get(cols.region), lineno)?;
    let name = cell_text(row.get(cols.name), lineno)?;
    let (region, name) = match (region, name) {
        (Some(region), Some(name)) => (region, name),
        (None, None) => {
            debug!("read_row: skipping empty line {}", lineno);
            return Ok(None);
        }
        _ => {
            return ExcelWrongCellTypeSnafu {
                lineno,
                content: format!("{:?}", row),
            }
            .fail()
        }
    };

    let code = match cols.code {
        Some(idx) => cell_text(row.get(idx), lineno)?,
        None => None,
    };
    let alternate_spellings = match cols.alternates {
        Some(idx) => cell_text(row.get(idx), lineno)?
            .map(|s| split_alternate_names(&s))
            .unwrap_or_default(),
        None => Vec::new(),
    };

    Ok(Some(Constituency {
        region,
        name,
        code,
        alternate_spellings,
    }))
}

fn cell_text(cell: Option<&DataType>, lineno: u64) -> QuizResult<Option<String>> {
    match cell {
        None | Some(DataType::Empty) => Ok(None),
        Some(DataType::String(s)) if s.trim().is_empty() => Ok(None),
        Some(DataType::String(s)) => Ok(Some(s.trim().to_string())),
        Some(DataType::Int(i)) => Ok(Some(i.to_string())),
        Some(DataType::Float(f)) => Ok(Some(f.to_string())),
        Some(c) => ExcelWrongCellTypeSnafu {
            lineno,
            content: format!("{:?}", c),
        }
        .fail(),
    }
}
