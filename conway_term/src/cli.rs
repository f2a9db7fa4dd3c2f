// cli.rs - Command-line flags for the terminal driver

use std::time::Duration;

use anyhow::{Context, Result, anyhow, bail};
use clap::{Arg, ArgAction, ArgMatches, Command, value_parser};
use conway::{GridConfig, SeedPolicy, patterns};

use crate::game::GameConfig;

pub fn build_cli() -> Command {
    Command::new("life")
        .about("Conway's Game of Life in the terminal")
        .arg(
            Arg::new("size")
                .long("size")
                .value_parser(value_parser!(i64))
                .default_value("10")
                .allow_negative_numbers(true)
                .help("Width and height of the grid"),
        )
        .arg(
            Arg::new("width")
                .long("width")
                .value_parser(value_parser!(i64))
                .allow_negative_numbers(true)
                .help("Grid width (overrides --size)"),
        )
        .arg(
            Arg::new("height")
                .long("height")
                .value_parser(value_parser!(i64))
                .allow_negative_numbers(true)
                .help("Grid height (overrides --size)"),
        )
        .arg(
            Arg::new("rate")
                .long("rate")
                .value_parser(parse_duration)
                .default_value("1s")
                .help("Time between generations, e.g. 500ms, 1.5s, 1m30s"),
        )
        .arg(
            Arg::new("seed")
                .long("seed")
                .value_parser(value_parser!(u64))
                .help("Seed for the random starting grid"),
        )
        .arg(
            Arg::new("pattern")
                .long("pattern")
                .conflicts_with("seed")
                .help("Start from a named pattern instead of a random grid"),
        )
        .arg(
            Arg::new("generations")
                .long("generations")
                .value_parser(value_parser!(u64))
                .help("Stop after rendering this generation"),
        )
        .arg(
            Arg::new("halt-on-cycle")
                .long("halt-on-cycle")
                .action(ArgAction::SetTrue)
                .help("Stop once the grid repeats a recent state"),
        )
        .arg(
            Arg::new("list-patterns")
                .long("list-patterns")
                .action(ArgAction::SetTrue)
                .exclusive(true)
                .help("Print the available pattern names and exit"),
        )
}

/// Turns parsed flags into the loop's configuration.
pub fn matches_to_config(matches: &ArgMatches) -> Result<GameConfig> {
    let size = *matches.get_one::<i64>("size").unwrap_or(&10);
    let width = matches.get_one::<i64>("width").copied().unwrap_or(size);
    let height = matches.get_one::<i64>("height").copied().unwrap_or(size);

    // Placeholder seed; replaced once the dimensions are known to be valid.
    let mut grid = GridConfig::from_signed(width, height, SeedPolicy::default())?;
    grid.seed = match matches.get_one::<String>("pattern") {
        Some(name) => {
            let pattern = patterns::find(name).ok_or_else(|| {
                anyhow!("unknown pattern {name:?}; try --list-patterns")
            })?;
            SeedPolicy::Fixed(pattern.to_cells(grid.width, grid.height)?)
        }
        None => SeedPolicy::Random { seed: matches.get_one::<u64>("seed").copied() },
    };

    Ok(GameConfig {
        grid,
        rate: matches
            .get_one::<Duration>("rate")
            .copied()
            .context("missing --rate")?,
        generations: matches.get_one::<u64>("generations").copied(),
        halt_on_cycle: matches.get_flag("halt-on-cycle"),
    })
}

/// Parses durations written like `300ms`, `1.5s` or `1h2m3s`.
/// Valid units are `ns`, `us` (or `µs`), `ms`, `s`, `m` and `h`.
/// A bare `0` is accepted; any other number needs a unit.
pub fn parse_duration(input: &str) -> Result<Duration> {
    let s = input.trim();
    if s == "0" {
        return Ok(Duration::ZERO);
    }
    if s.is_empty() {
        bail!("empty duration");
    }

    let mut total = Duration::ZERO;
    let mut rest = s;
    while !rest.is_empty() {
        let num_len = rest
            .find(|c: char| !(c.is_ascii_digit() || c == '.'))
            .unwrap_or(rest.len());
        if num_len == 0 {
            bail!("invalid duration {input:?}: expected a number");
        }
        let value: f64 = rest[..num_len]
            .parse()
            .with_context(|| format!("invalid duration {input:?}"))?;
        rest = &rest[num_len..];

        let unit_len = rest
            .find(|c: char| c.is_ascii_digit() || c == '.')
            .unwrap_or(rest.len());
        #[rustfmt::skip]
        let nanos_per_unit = match &rest[..unit_len] {
            "ns"        => 1.0,
            "us" | "µs" => 1e3,
            "ms"        => 1e6,
            "s"         => 1e9,
            "m"         => 60e9,
            "h"         => 3600e9,
            ""          => bail!("invalid duration {input:?}: missing unit"),
            unit        => bail!("invalid duration {input:?}: unknown unit {unit:?}"),
        };
        rest = &rest[unit_len..];

        let nanos = (value * nanos_per_unit).round();
        if !nanos.is_finite() || nanos >= u64::MAX as f64 {
            bail!("invalid duration {input:?}: out of range");
        }
        total = total
            .checked_add(Duration::from_nanos(nanos as u64))
            .with_context(|| format!("invalid duration {input:?}: out of range"))?;
    }
    Ok(total)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config(args: &[&str]) -> Result<GameConfig> {
        let argv = std::iter::once("life").chain(args.iter().copied());
        matches_to_config(&build_cli().try_get_matches_from(argv)?)
    }

    #[test]
    fn durations() {
        assert_eq!(parse_duration("1s").unwrap(), Duration::from_secs(1));
        assert_eq!(parse_duration("250ms").unwrap(), Duration::from_millis(250));
        assert_eq!(parse_duration("1.5s").unwrap(), Duration::from_millis(1500));
        assert_eq!(parse_duration("1m30s").unwrap(), Duration::from_secs(90));
        assert_eq!(parse_duration("2h").unwrap(), Duration::from_secs(7200));
        assert_eq!(parse_duration("10us").unwrap(), Duration::from_micros(10));
        assert_eq!(parse_duration("0").unwrap(), Duration::ZERO);
    }

    #[test]
    fn bad_durations() {
        for input in ["", "5", "s", "3 parsecs", "1x", "-1s", "1..2s"] {
            assert!(parse_duration(input).is_err(), "{input:?} should not parse");
        }
    }

    #[test]
    fn defaults() {
        let config = config(&[]).unwrap();
        assert_eq!((config.grid.width, config.grid.height), (10, 10));
        assert_eq!(config.grid.seed, SeedPolicy::Random { seed: None });
        assert_eq!(config.rate, Duration::from_secs(1));
        assert_eq!(config.generations, None);
        assert!(!config.halt_on_cycle);
    }

    #[test]
    fn width_and_height_override_size() {
        let config = config(&["--size", "6", "--width", "9"]).unwrap();
        assert_eq!((config.grid.width, config.grid.height), (9, 6));
    }

    #[test]
    fn non_positive_size_is_invalid_dimension() {
        for size in ["0", "-4"] {
            let err = config(&["--size", size]).unwrap_err();
            assert!(
                matches!(err.downcast_ref::<conway::Error>(), Some(conway::Error::InvalidDimension { .. })),
                "{err}"
            );
        }
    }

    #[test]
    fn oversized_grid_is_invalid_dimension() {
        let cases: [&[&str]; 2] = [
            &["--size", "5000000000"],
            &["--size", "5000000000", "--pattern", "glider"],
        ];
        for args in cases {
            let err = config(args).unwrap_err();
            assert!(
                matches!(err.downcast_ref::<conway::Error>(), Some(conway::Error::InvalidDimension { .. })),
                "{err}"
            );
        }
    }

    #[test]
    fn pattern_becomes_fixed_seed() {
        let config = config(&["--size", "5", "--pattern", "blinker"]).unwrap();
        let SeedPolicy::Fixed(cells) = &config.grid.seed else {
            panic!("expected a fixed seed");
        };
        assert_eq!(cells.iter().filter(|c| c.is_alive()).count(), 3);
    }

    #[test]
    fn unknown_pattern_is_rejected() {
        let err = config(&["--pattern", "spaceship"]).unwrap_err();
        assert!(err.to_string().contains("unknown pattern"));
    }

    #[test]
    fn seed_rate_and_limits() {
        let config = config(&[
            "--seed", "42", "--rate", "100ms", "--generations", "5", "--halt-on-cycle",
        ])
        .unwrap();
        assert_eq!(config.grid.seed, SeedPolicy::Random { seed: Some(42) });
        assert_eq!(config.rate, Duration::from_millis(100));
        assert_eq!(config.generations, Some(5));
        assert!(config.halt_on_cycle);
    }
}
