//! Functions for handling function arguments.

use std::{convert::Infallible, io::Write, path::PathBuf};

use ipsum::{config::Config, parse_count, ValenceSetting};

use crate::error_code;

const VERSION: &str = concat!(env!("CARGO_CRATE_NAME"), " ", env!("CARGO_PKG_VERSION"));
const HELP: &str = r#"ipsum

Lorem ipsum placeholder text. Prints paragraphs built from a fixed vocabulary, with a random
number of sentences, random sentence endings and some commas, colons, semicolons and dashes
thrown in. How much inner punctuation appears is controlled by punctuation.valence in the
configuration, or the IPSUM_PUNCTUATION_VALENCE environment variable: a number between 0 and 1,
or false to disable it.

More configuration options are listed in the default configuration.

USAGE:
  ipsum [FLAGS] [OPTIONS] [CONFIG]

ARGS:
  [CONFIG]
    Configuration to use. If not provided, the default configuration path will be checked. If no
    configuration is found, the default configuration will be used instead. All configuration
    values are optional, and will fall back to a default value.

OPTIONS:
  -p, --paragraphs <N>              Number of paragraphs
  -s, --sentences <N[,N...]>        Sentences per paragraph, one value for all or one each
  -a, --avg-words <X>               Average number of words per sentence
      --seed <N>                    Seed for reproducible output
      --valence <X>                 Punctuation valence, overrides config and environment
      --words <N>                   Print N random words instead of paragraphs
      --starts <N>                  Print N random paragraph starters instead of paragraphs

FLAGS:
  -h, --help                        Print help information and exit
  -V, --version                     Print version information and exit
      --print-default-config        Print default configuration and exit
      --no-collapse                 With --words, print one word per line"#;

/// What to print.
#[derive(Debug, Clone, PartialEq)]
pub(crate) enum Mode {
    Paragraphs,
    Words { n: usize, collapse: bool },
    Starts(usize),
}

/// Values given on the command line, taking priority over the configuration.
#[derive(Debug, Clone, Default, PartialEq)]
pub(crate) struct Overrides {
    pub paragraphs: Option<usize>,
    pub sentences: Option<Vec<usize>>,
    pub avg_words_per_sentence: Option<f64>,
    pub seed: Option<u64>,
    pub valence: Option<ValenceSetting>,
}

impl Overrides {
    /// Writes the generator overrides into `config`. The valence is left alone, since it also
    /// has to win over the environment.
    pub fn apply(&self, config: &mut Config) {
        if let Some(p) = self.paragraphs {
            config.generator.paragraphs = p;
        }
        if let Some(s) = &self.sentences {
            config.generator.sentences = s.clone();
        }
        if let Some(a) = self.avg_words_per_sentence {
            config.generator.avg_words_per_sentence = a;
        }
        if let Some(seed) = self.seed {
            config.generator.seed = seed;
        }
    }
}

/// Everything parsed from the command line.
#[derive(Debug, Clone, PartialEq)]
pub(crate) struct Invocation {
    /// Config read from a path given as argument, if any.
    pub config: Option<Config>,
    pub overrides: Overrides,
    pub mode: Mode,
}

/// Parses arguments into an [`Invocation`], or an exit code that should be used.
/// Writes all output to the provided writer.
///
/// Will print helpful information, so the caller should preferably exit using the provided code
/// immediately if possible.
pub(crate) fn parse_args<W: Write>(
    mut pargs: pico_args::Arguments,
    output_writer: &mut W,
) -> Result<Invocation, i32> {
    if pargs.contains(["-h", "--help"]) {
        writeln!(output_writer, "{HELP}").map_err(|_| error_code::UNKNOWN_ERROR)?;
        return Err(0);
    } else if pargs.contains(["-V", "--version"]) {
        writeln!(output_writer, "{VERSION}",).map_err(|_| error_code::UNKNOWN_ERROR)?;
        return Err(0);
    } else if pargs.contains("--print-default-config") {
        let toml = toml::to_string_pretty(&Config::default())
            .expect("should be able to serialize default config");
        write!(output_writer, "{toml}").map_err(|_| error_code::UNKNOWN_ERROR)?;
        return Err(0);
    }

    let (overrides, mode) = match parse_options(&mut pargs) {
        Ok(parsed) => parsed,
        Err(e) => {
            writeln!(output_writer, "{e}").map_err(|_| error_code::UNKNOWN_ERROR)?;
            return Err(error_code::ARGUMENT_ERROR);
        }
    };

    let remaining = pargs.finish();

    let config = if remaining.is_empty() {
        None
    } else if remaining.len() == 1 && !remaining[0].to_string_lossy().starts_with('-') {
        let pb = PathBuf::from(&remaining[0]);
        if let Some(actual) = Config::from_path(&pb) {
            Some(actual)
        } else {
            writeln!(
                output_writer,
                "File at '{}' could not be parsed as proper config",
                pb.to_string_lossy()
            )
            .map_err(|_| error_code::UNKNOWN_ERROR)?;
            return Err(error_code::UNPARSEABLE_CONFIG);
        }
    } else {
        writeln!(output_writer, "{HELP}").map_err(|_| error_code::UNKNOWN_ERROR)?;
        return Err(error_code::ARGUMENT_ERROR);
    };

    Ok(Invocation {
        config,
        overrides,
        mode,
    })
}

fn parse_options(pargs: &mut pico_args::Arguments) -> Result<(Overrides, Mode), String> {
    let to_string = |e: pico_args::Error| e.to_string();

    let overrides = Overrides {
        paragraphs: pargs
            .opt_value_from_fn(["-p", "--paragraphs"], parse_positive)
            .map_err(to_string)?,
        sentences: pargs
            .opt_value_from_fn(["-s", "--sentences"], parse_sentences)
            .map_err(to_string)?,
        avg_words_per_sentence: pargs
            .opt_value_from_str(["-a", "--avg-words"])
            .map_err(to_string)?,
        seed: pargs.opt_value_from_str("--seed").map_err(to_string)?,
        valence: pargs
            .opt_value_from_fn("--valence", parse_valence)
            .map_err(to_string)?,
    };

    let words: Option<usize> = pargs
        .opt_value_from_fn("--words", parse_any_count)
        .map_err(to_string)?;
    let starts: Option<usize> = pargs
        .opt_value_from_fn("--starts", parse_any_count)
        .map_err(to_string)?;
    let collapse = !pargs.contains("--no-collapse");

    let mode = match (words, starts) {
        (Some(_), Some(_)) => return Err("--words and --starts cannot be combined".to_string()),
        (Some(n), None) => Mode::Words { n, collapse },
        (None, Some(n)) => Mode::Starts(n),
        (None, None) => Mode::Paragraphs,
    };

    Ok((overrides, mode))
}

fn parse_positive(s: &str) -> ipsum::Result<usize> {
    parse_count(s, false)
}

fn parse_any_count(s: &str) -> ipsum::Result<usize> {
    parse_count(s, true)
}

fn parse_sentences(s: &str) -> ipsum::Result<Vec<usize>> {
    s.split(',').map(|c| parse_count(c, false)).collect()
}

fn parse_valence(s: &str) -> Result<ValenceSetting, Infallible> {
    Ok(ValenceSetting::parse(s))
}
