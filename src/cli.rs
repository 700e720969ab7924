use chrono::NaiveDate;

use crate::error::{Result, ScoresError};
use crate::schedule::parse_date;

pub const USAGE: &str = "usage: nba_scores [DD/MM/YYYY]\n\nPrints a summary of every NBA game played on the given date (default: today).";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Summarise(NaiveDate),
    Help,
}

/// Reads the arguments after the program name. No date means `today`.
pub fn parse_args<I>(args: I, today: NaiveDate) -> Result<Command>
where
    I: IntoIterator<Item = String>,
{
    let args = args.into_iter().collect::<Vec<_>>();
    match args.as_slice() {
        [] => Ok(Command::Summarise(today)),
        [flag] if flag == "-h" || flag == "--help" => Ok(Command::Help),
        [raw] => parse_date(raw).map(Command::Summarise),
        _ => Err(ScoresError::Usage(format!("too many arguments\n{USAGE}"))),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2020, 1, 5).unwrap()
    }

    fn args(list: &[&str]) -> Vec<String> {
        list.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn no_argument_means_today() {
        assert_eq!(
            parse_args(args(&[]), today()).unwrap(),
            Command::Summarise(today())
        );
    }

    #[test]
    fn help_flags() {
        assert_eq!(parse_args(args(&["-h"]), today()).unwrap(), Command::Help);
        assert_eq!(parse_args(args(&["--help"]), today()).unwrap(), Command::Help);
    }

    #[test]
    fn explicit_date() {
        let expected = NaiveDate::from_ymd_opt(2019, 12, 25).unwrap();
        assert_eq!(
            parse_args(args(&["25/12/2019"]), today()).unwrap(),
            Command::Summarise(expected)
        );
    }

    #[test]
    fn bad_or_extra_arguments_are_usage_errors() {
        assert!(matches!(
            parse_args(args(&["yesterday"]), today()),
            Err(ScoresError::Usage(_))
        ));
        assert!(matches!(
            parse_args(args(&["25/12/2019", "--verbose"]), today()),
            Err(ScoresError::Usage(_))
        ));
    }
}
