use clap::ValueEnum;
use wc_engine::options as engine_options;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
#[value(rename_all = "lowercase")]
pub enum OutputFormat {
    /// `<count> <file>` per statistic
    #[default]
    Plain,
    /// One JSON object per statistic
    Jsonl,
}

impl From<OutputFormat> for engine_options::OutputFormat {
    fn from(format: OutputFormat) -> Self {
        match format {
            OutputFormat::Plain => Self::Plain,
            OutputFormat::Jsonl => Self::Jsonl,
        }
    }
}
