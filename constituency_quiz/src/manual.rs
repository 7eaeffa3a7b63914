/*!

This is the long-form manual for `constituency_quiz` and `pcquiz`.

## Playing

```bash
pcquiz --data constituencies.json --vernacular state_to_vernacular.json
```

Type the name of a constituency. As soon as the text matches a constituency that was not
guessed yet, it is added to the table and the field is cleared. The counter shows the number
of correct guesses over the 543 seats of the Lok Sabha. Press `Esc` to leave.

The comparison ignores case, spaces, hyphens, `&` and the word "and". Some constituencies
also accept other spellings (`Trivandrum` for `Thiruvananthapuram`). Constituencies that
share a name in several states (`Aurangabad`, `Hamirpur`, `Maharajganj`) are all recorded by
the same guess.

## Input formats

The following formats are supported for the list of constituencies:
* `json` (default) the JSON list of constituencies
* `xlsx` the Excel sheet the JSON list is made from

### `json`

A list of records:

```json
[
  { "State/UT": "Kerala", "PC_Code": 4, "PCName": "Wayanad", "Alternate Spellings": [] },
  { "State/UT": "Kerala", "PC_Code": 20, "PCName": "Thiruvananthapuram", "Alternate Spellings": ["Trivandrum"] }
]
```

`PC_Code` is optional. `Alternate Spellings` may be omitted or `null`.

### `xlsx`

The first row of the worksheet is the header. The columns `State` and `PC Name` are
required (`State/UT` and `PCName` are accepted too). The columns `PC Code` and
`Alternative Names` are optional. Alternative names are separated by a comma and a space
in a single cell.

If the workbook has several worksheets, the name of the worksheet must be given with
`--excel-worksheet-name`.

In both formats, a record whose name is empty (once spaces, hyphens and the like are
removed), or whose name already appears in the same state, is skipped with a warning. If the
file cannot be read at all, the game starts with no constituency to guess.

### Vernacular labels

An optional JSON list associating a region with a label in its own script:

```json
[
  { "State": "Bihar", "Vernacular": "बिहार" },
  { "State": "Chandigarh", "Vernacular": null }
]
```

## Configuration file

All the options can be gathered in a configuration file passed with `--config`. Paths are
relative to the directory of the configuration file. Options given on the command line take
precedence.

```json
{
  "title": "Guess the Lok Sabha Constituencies!",
  "totalSeats": 543,
  "dataSource": {
    "provider": "json",
    "filePath": "constituencies.json"
  },
  "vernacularFilePath": "state_to_vernacular.json"
}
```

## Replaying guesses

`--guesses FILE` (or `--guesses stdin`) replaces the terminal with a list of guesses, one per
line. Each line replaces the content of the field. With `--type-keys`, each line is typed one
character at a time into an empty field, the way it would be typed in the terminal.

`--out FILE` (or `--out stdout`) writes the final progress as JSON:

```json
{
  "config": {
    "constituencies": 543,
    "dataset": "constituencies.json",
    "title": "Guess the Lok Sabha Constituencies!",
    "totalSeats": 543
  },
  "correct": 1,
  "pendingInput": "",
  "regions": [
    {
      "constituencies": ["Wayanad"],
      "guessed": 1,
      "region": "Kerala",
      "total": 20,
      "vernacular": "കേരളം"
    }
  ]
}
```

`--reference FILE` compares that summary with a reference summary and fails if they differ.

## Logging

Logs go to the standard error. Use `--verbose` or the `RUST_LOG` environment variable
(`RUST_LOG=debug`) to see them.
*/
