#![forbid(unsafe_code)]
mod args;
mod error_code;

use std::{fs, io::Write, process::exit, sync::Mutex};

use args::{Invocation, Mode};
use ipsum::{config::Config, Generator, Valence, ValenceSetting};
use rand::{rngs::SmallRng, SeedableRng};
use tracing_subscriber::{filter::LevelFilter, prelude::*};

/// Sets up logging as described by the config. Returns an exit code on failure.
fn init_logging(config: &Config) -> Result<(), i32> {
    let level: LevelFilter = match config.logging.level.parse() {
        Ok(l) => l,
        Err(_) => {
            eprintln!("Unknown log level '{}'", config.logging.level);
            return Err(error_code::BAD_CONFIG);
        }
    };

    // stdout carries the generated text, so logs go to stderr
    let (pretty, ugly) = if config.logging.no_stdout {
        (None, None)
    } else if config.logging.print_pretty_logs {
        (
            Some(
                tracing_subscriber::fmt::layer()
                    .pretty()
                    .with_writer(std::io::stderr),
            ),
            None,
        )
    } else {
        (
            None,
            Some(tracing_subscriber::fmt::layer().with_writer(std::io::stderr)),
        )
    };

    // None will be ignored, so we will in reality only have one
    let subscriber = tracing_subscriber::Registry::default()
        .with(pretty)
        .with(ugly);

    let json_log = if config.logging.output_path.is_empty() {
        None
    } else {
        match fs::OpenOptions::new()
            .append(true)
            .create(true)
            .open(&config.logging.output_path)
        {
            Ok(file) => Some(
                tracing_subscriber::fmt::layer()
                    .json()
                    .with_writer(Mutex::new(file)),
            ),
            Err(e) => {
                eprintln!(
                    "failed to open log path '{}' due to error:\n\t{}",
                    config.logging.output_path, e
                );
                return Err(error_code::CANNOT_OPEN_LOG_FILE);
            }
        }
    };

    // Set file logging (or not, if we had no output path)
    let subscriber = subscriber.with(json_log).with(level);
    tracing::subscriber::set_global_default(subscriber).map_err(|_| error_code::UNKNOWN_ERROR)
}

/// Picks the config to use: the one given as argument, the one at the default path, or the
/// default one.
fn load_config(given: Option<Config>) -> Config {
    if let Some(config) = given {
        return config;
    }
    Config::read_from_default_path().unwrap_or_else(|| {
        if let Some(pb) = Config::default_path().filter(|p| p.exists()) {
            eprintln!(
                "Config at '{}' could not be parsed, using a default instead...",
                pb.to_string_lossy(),
            );
        }
        Config::default()
    })
}

/// Generates and writes the requested text. Returns an exit code on failure.
fn generate<W: Write>(
    config: &Config,
    valence_override: Option<ValenceSetting>,
    mode: Mode,
    output: &mut W,
) -> Result<(), i32> {
    let vocabulary = config.generator.vocabulary().map_err(|e| {
        eprintln!("Could not load vocabulary due to error:\n\t{e}");
        error_code::CANNOT_READ_GENERATOR_DATA_FILE
    })?;

    let rng = if config.generator.seed == 0 {
        SmallRng::from_entropy()
    } else {
        SmallRng::seed_from_u64(config.generator.seed)
    };

    let text = match mode {
        Mode::Words { n, collapse } => Generator::new(rng, &vocabulary, Valence::default())
            .words(n, collapse)
            .to_string(),
        Mode::Starts(n) => Generator::new(rng, &vocabulary, Valence::default())
            .starts(n)
            .join("\n"),
        Mode::Paragraphs => {
            // Check the request before looking at the valence, so bad input fails cleanly
            let request = config.generator.request().map_err(|e| {
                eprintln!("{e}");
                error_code::BAD_CONFIG
            })?;
            let setting = valence_override.unwrap_or_else(|| config.valence_setting());
            let valence = setting.resolve_or_default(true);
            tracing::info!("Generating {} paragraph(s)", request.paragraphs());

            Generator::new(rng, &vocabulary, valence)
                .paragraphs(&request)
                .map_err(|e| {
                    tracing::error!("Generation failed: {e}");
                    error_code::GENERATION_FAILED
                })?
                .to_string()
        }
    };

    if !text.is_empty() {
        writeln!(output, "{text}").map_err(|_| error_code::UNKNOWN_ERROR)?;
    }
    Ok(())
}

fn main() {
    let pargs = pico_args::Arguments::from_env();
    let Invocation {
        config,
        overrides,
        mode,
    } = match args::parse_args(pargs, &mut std::io::stdout()) {
        Ok(i) => i,
        Err(code) => exit(code),
    };

    let mut config = load_config(config);
    overrides.apply(&mut config);

    if let Err(code) = init_logging(&config) {
        exit(code);
    }

    if let Err(code) = generate(&config, overrides.valence, mode, &mut std::io::stdout().lock()) {
        exit(code);
    }
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use ipsum::{config::Config, ValenceSetting};
    use tempfile::NamedTempFile;

    use crate::{args::Mode, error_code, generate};

    fn output(config: &Config, valence: Option<ValenceSetting>, mode: Mode) -> String {
        let mut buf: Vec<u8> = vec![];
        generate(config, valence, mode, &mut buf).unwrap();
        String::from_utf8(buf).unwrap()
    }

    fn seeded() -> Config {
        let mut config = Config::default();
        config.generator.seed = 7;
        config
    }

    #[test]
    fn prints_requested_paragraphs() {
        let mut config = seeded();
        config.generator.paragraphs = 3;
        let out = output(&config, None, Mode::Paragraphs);
        assert_eq!(out.trim_end().split("\n\n").count(), 3);
    }

    #[test]
    fn seeded_output_is_stable() {
        let config = seeded();
        assert_eq!(
            output(&config, None, Mode::Paragraphs),
            output(&config, None, Mode::Paragraphs)
        );
    }

    #[test]
    fn disabled_valence_override() {
        let mut config = seeded();
        config.generator.paragraphs = 4;
        config.generator.sentences = vec![6];
        let out = output(
            &config,
            Some(ValenceSetting::Flag(false)),
            Mode::Paragraphs,
        );
        assert!(!out.contains([',', ':', ';', '\u{2013}']));
    }

    #[test]
    fn prints_words() {
        let config = seeded();
        let out = output(
            &config,
            None,
            Mode::Words {
                n: 4,
                collapse: true,
            },
        );
        assert_eq!(out.trim_end().split(' ').count(), 4);

        let out = output(
            &config,
            None,
            Mode::Words {
                n: 4,
                collapse: false,
            },
        );
        assert_eq!(out.lines().count(), 4);
    }

    #[test]
    fn zero_words_prints_nothing() {
        let config = seeded();
        let out = output(
            &config,
            None,
            Mode::Words {
                n: 0,
                collapse: true,
            },
        );
        assert!(out.is_empty());
    }

    #[test]
    fn prints_starts() {
        let out = output(&seeded(), None, Mode::Starts(3));
        assert_eq!(out.lines().count(), 3);
    }

    #[test]
    fn custom_vocabulary_is_used() {
        let mut words = NamedTempFile::new().unwrap();
        writeln!(words, "zzz").unwrap();
        let mut config = seeded();
        config.generator.words_path = words.path().to_string_lossy().into_owned();
        let out = output(
            &config,
            None,
            Mode::Words {
                n: 3,
                collapse: true,
            },
        );
        assert_eq!(out, "zzz zzz zzz\n");
    }

    #[test]
    fn bad_request_is_bad_config() {
        let mut config = seeded();
        config.generator.paragraphs = 2;
        config.generator.sentences = vec![1, 2, 3];
        let mut buf: Vec<u8> = vec![];
        assert_eq!(
            generate(&config, None, Mode::Paragraphs, &mut buf),
            Err(error_code::BAD_CONFIG)
        );
        assert!(buf.is_empty());
    }

    #[test]
    fn missing_vocabulary_file() {
        let mut config = seeded();
        config.generator.starters_path = "/nonexistent/ipsum/starters.txt".to_string();
        let mut buf: Vec<u8> = vec![];
        assert_eq!(
            generate(&config, None, Mode::Paragraphs, &mut buf),
            Err(error_code::CANNOT_READ_GENERATOR_DATA_FILE)
        );
    }
}
