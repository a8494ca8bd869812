use clap::{Parser, ValueEnum};
use xml_name_char::Property;

/// Validates and times the XML name classifiers
#[derive(Parser, Debug)]
#[command(name = "xml-name-char-harness")]
pub struct Options {
    /// Passes over the whole code point space
    #[arg(long, default_value_t = 100)]
    pub times: u32,

    /// Passes over ASCII [default: 8000 x times]
    #[arg(long)]
    ascii_times: Option<u32>,

    /// Which property to measure
    #[arg(long, value_enum, default_value_t = PropertyArg::All)]
    property: PropertyArg,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum PropertyArg {
    NameStart,
    Name,
    All,
}

impl Options {
    pub fn ascii_times(&self) -> u32 {
        self.ascii_times.unwrap_or_else(|| self.times.saturating_mul(8000))
    }

    pub fn properties(&self) -> Vec<Property> {
        match self.property {
            PropertyArg::NameStart => vec![Property::NameStart],
            PropertyArg::Name => vec![Property::Name],
            PropertyArg::All => Property::ALL.to_vec(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults() {
        let options = Options::try_parse_from(["harness"]).unwrap();
        assert_eq!(options.times, 100);
        assert_eq!(options.ascii_times(), 800_000);
        assert_eq!(options.properties(), Property::ALL);
    }

    #[test]
    fn ascii_times_follows_times() {
        let options = Options::try_parse_from(["harness", "--times", "3"]).unwrap();
        assert_eq!(options.ascii_times(), 24_000);
        let options =
            Options::try_parse_from(["harness", "--times", "3", "--ascii-times", "5"]).unwrap();
        assert_eq!(options.ascii_times(), 5);
    }

    #[test]
    fn property() {
        let options = Options::try_parse_from(["harness", "--property", "name-start"]).unwrap();
        assert_eq!(options.properties(), [Property::NameStart]);
        let options = Options::try_parse_from(["harness", "--property", "name"]).unwrap();
        assert_eq!(options.properties(), [Property::Name]);
    }

    #[test]
    fn rejects_bad_arguments() {
        assert!(Options::try_parse_from(["harness", "--times", "-1"]).is_err());
        assert!(Options::try_parse_from(["harness", "--property", "pi"]).is_err());
        assert!(Options::try_parse_from(["harness", "--verbose"]).is_err());
    }
}
