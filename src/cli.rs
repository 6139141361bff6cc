use clap::Parser;

#[derive(Parser, Debug)]
#[command(name = "zipzone")]
#[command(version)]
#[command(about = "A ZIP-code delivery-coverage lookup with HTTP URL support", long_about = None)]
#[command(after_help = "Examples:\n  \
  zipzone coverage.csv 08901 08817      classify two ZIP codes\n  \
  zipzone -l coverage.csv               list all covered ZIP codes\n  \
  zipzone -v https://example.com/coverage.csv   verbose listing from a remote source")]
pub struct Cli {
    /// Coverage CSV file path or HTTP URL
    #[arg(value_name = "SOURCE")]
    pub source: String,

    /// ZIP codes to classify
    #[arg(value_name = "ZIPS")]
    pub zips: Vec<String>,

    /// List covered ZIPs (short format)
    #[arg(short = 'l')]
    pub list: bool,

    /// List verbosely with zone, city, and delivery days
    #[arg(short = 'v')]
    pub verbose: bool,

    /// Quiet mode (-qq => quieter)
    #[arg(short = 'q', action = clap::ArgAction::Count)]
    pub quiet: u8,
}

impl Cli {
    pub fn is_http_url(&self) -> bool {
        self.source.starts_with("http://") || self.source.starts_with("https://")
    }

    pub fn is_quiet(&self) -> bool {
        self.quiet > 0
    }

    pub fn is_very_quiet(&self) -> bool {
        self.quiet > 1
    }
}
