use clap::Parser;

/// A game: guess all the constituencies of the Lok Sabha.
#[derive(Parser, Debug, Clone, Default)]
#[clap(author, version, about, long_about = None)]
pub struct Args {
    /// (file path, optional) A JSON configuration file. The options given on the command line
    /// take precedence over the ones in the file.
    #[clap(short, long, value_parser)]
    pub config: Option<String>,

    /// (file path) The list of constituencies. Setting this option overrides the path that may
    /// be specified with the --config option.
    #[clap(short, long, value_parser)]
    pub data: Option<String>,

    /// (default json) The format of the list of constituencies: json or xlsx.
    #[clap(long, value_parser)]
    pub input_type: Option<String>,

    /// (default: the only worksheet) When using an Excel file, indicates the name of the worksheet to use.
    #[clap(long, value_parser)]
    pub excel_worksheet_name: Option<String>,

    /// (file path, optional) The JSON file associating each state with a vernacular label.
    #[clap(long, value_parser)]
    pub vernacular: Option<String>,

    /// (default 543) The denominator of the counter.
    #[clap(long, value_parser)]
    pub total_seats: Option<u32>,

    /// (file path or 'stdin') If specified, the guesses are read from this source, one per line,
    /// instead of the interactive terminal.
    #[clap(short, long, value_parser)]
    pub guesses: Option<String>,

    /// When replaying guesses, types each line one character at a time.
    #[clap(long, takes_value = false)]
    pub type_keys: bool,

    /// (file path, 'stdout' or empty) If specified, the progress at the end of the game is written
    /// in JSON format to the given location.
    #[clap(short, long, value_parser)]
    pub out: Option<String>,

    /// (file path) A reference file containing a progress summary in JSON format. If provided,
    /// pcquiz will check that the final progress matches the reference.
    #[clap(short, long, value_parser)]
    pub reference: Option<String>,

    // Other arguments
    /// If passed as an argument, will turn on verbose logging to the standard error.
    #[clap(long, takes_value = false)]
    pub verbose: bool,
}
