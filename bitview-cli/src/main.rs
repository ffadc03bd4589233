use anyhow::{bail, Context, Result};
use bitview::prelude::*;
use clap::Parser;
use log::debug;
use num_traits::Unsigned;

#[derive(Parser)]
#[command(name = "bitview", about = "Bit manipulation on fixed-width integers")]
struct Args {
    /// Width of the integers to operate on.
    #[arg(long, default_value_t = 32, value_parser = parse_width)]
    bits: u32,

    /// Treat integers as signed.
    #[arg(long)]
    signed: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(clap::Subcommand)]
enum Command {
    #[command(flatten)]
    Value(ValueCommand),

    /// Find the element missing from a permutation of `0..=n` minus one.
    Missing { values: Vec<String> },

    /// Draw horizontal lines on a blank monochrome screen.
    Line {
        /// Screen width in pixels, a multiple of 8.
        #[arg(long)]
        width: usize,

        /// Screen height in pixels.
        #[arg(long)]
        height: usize,

        /// Lines given as `x1:x2:y`.
        #[arg(value_parser = parse_line)]
        lines: Vec<(usize, usize, usize)>,
    },

    /// Write a fraction in `[0, 1)` as binary digits.
    Fraction { value: f64 },
}

/// Commands that operate on integers of the width chosen by `--bits`.
#[derive(clap::Subcommand)]
enum ValueCommand {
    /// Count the set bits of a value.
    Count { value: String },

    /// Print every bit of a value, most significant first.
    Bits { value: String },

    /// Print the mask with bits `start..=end` set.
    Mask { start: u32, end: u32 },

    /// Replace bits `i..=j` of `n` with the low bits of `m`.
    Insert { n: String, m: String, i: u32, j: u32 },

    /// Find the next greater value with the same number of set bits.
    Greater { value: String },

    /// Find the next lesser value with the same number of set bits.
    Lesser { value: String },

    /// Count the bit positions at which two values differ.
    Hamming { a: String, b: String },

    /// Exchange every even bit with its odd neighbor.
    Swap { value: String },
}

fn parse_width(text: &str) -> Result<u32, String> {
    match text.parse() {
        Ok(bits @ (8 | 16 | 32 | 64)) => Ok(bits),
        _ => Err(format!("{text} is not one of 8, 16, 32, 64")),
    }
}

fn parse_line(text: &str) -> Result<(usize, usize, usize), String> {
    let fields: Vec<usize> = text
        .split(':')
        .map(str::parse)
        .collect::<Result<_, _>>()
        .map_err(|e| format!("{text}: {e}"))?;
    match fields[..] {
        [x1, x2, y] => Ok((x1, x2, y)),
        _ => Err(format!("{text} is not of the form x1:x2:y")),
    }
}

/// Parses a decimal, `0b`, `0o`, or `0x` integer, optionally negative, into `T`.
fn parse_integer<T: Integral>(text: &str) -> Result<T> {
    let (negative, digits) = match text.strip_prefix('-') {
        Some(rest) => (true, rest),
        None => (false, text),
    };
    let (radix, digits) = match digits.get(..2) {
        Some("0b" | "0B") => (2, &digits[2..]),
        Some("0o" | "0O") => (8, &digits[2..]),
        Some("0x" | "0X") => (16, &digits[2..]),
        _ => (10, digits),
    };
    if digits.starts_with(|c: char| c == '+' || c == '-') {
        bail!("invalid integer {text:?}");
    }
    let magnitude = i128::from_str_radix(&digits.replace('_', ""), radix)
        .with_context(|| format!("invalid integer {text:?}"))?;
    let value = if negative { -magnitude } else { magnitude };
    num_traits::cast(value).with_context(|| {
        format!(
            "{text} does not fit in a {}-bit {} integer",
            T::WIDTH,
            if T::SIGNED { "signed" } else { "unsigned" },
        )
    })
}

fn format_value<T: Integral>(value: T) -> String {
    let digits = T::WIDTH as usize + 2;
    format!("{value} ({value:#0digits$b})")
}

fn run<T: Integral>(command: &ValueCommand) -> Result<String> {
    Ok(match command {
        ValueCommand::Count { value } => count(parse_integer::<T>(value)?).to_string(),
        ValueCommand::Bits { value } => {
            let value = parse_integer::<T>(value)?;
            BitView::new(&value)
                .iter()
                .rev()
                .map(|bit| if bit { '1' } else { '0' })
                .collect()
        }
        ValueCommand::Mask { start, end } => {
            format_value(mask::<T>(*start, *end).context("cannot build mask")?)
        }
        ValueCommand::Insert { n, m, i, j } => {
            let n = parse_integer::<T>(n)?;
            let m = parse_integer::<T>(m)?;
            format_value(insert_bit_pattern(n, m, *i, *j).context("cannot insert pattern")?)
        }
        ValueCommand::Greater { value } => {
            let value = parse_integer::<T>(value)?;
            let greater =
                get_binary_greater(value).with_context(|| format!("no next greater for {value}"))?;
            format_value(greater)
        }
        ValueCommand::Lesser { value } => {
            let value = parse_integer::<T>(value)?;
            let lesser =
                get_binary_lesser(value).with_context(|| format!("no next lesser for {value}"))?;
            format_value(lesser)
        }
        ValueCommand::Hamming { a, b } => {
            let a = parse_integer::<T>(a)?;
            let b = parse_integer::<T>(b)?;
            get_hamming_distance(a, b).to_string()
        }
        ValueCommand::Swap { value } => {
            format_value(swap_even_with_odd_bits(parse_integer::<T>(value)?))
        }
    })
}

fn run_missing<T: Integral + Unsigned>(values: &[String]) -> Result<String> {
    let sequence = values
        .iter()
        .map(|value| parse_integer::<T>(value))
        .collect::<Result<Vec<_>>>()?;
    let missing = find_missing_element(&sequence).context("cannot find the missing element")?;
    Ok(missing.to_string())
}

fn run_line(width: usize, height: usize, lines: &[(usize, usize, usize)]) -> Result<String> {
    let mut screen = Screen::new(width, height)?;
    for &(x1, x2, y) in lines {
        screen
            .draw_horizontal_line(x1, x2, y)
            .with_context(|| format!("cannot draw {x1}:{x2}:{y}"))?;
    }
    Ok(screen.to_string().trim_end().to_owned())
}

fn run_fraction(value: f64) -> Result<String> {
    binary_fraction(value).with_context(|| format!("cannot write {value} in binary"))
}

fn main() -> Result<()> {
    env_logger::init();
    let args = Args::parse();
    debug!(
        "operating on {}-bit {} integers",
        args.bits,
        if args.signed { "signed" } else { "unsigned" },
    );

    let output = match &args.command {
        Command::Value(command) => match (args.bits, args.signed) {
            (8, false) => run::<u8>(command),
            (16, false) => run::<u16>(command),
            (32, false) => run::<u32>(command),
            (_, false) => run::<u64>(command),
            (8, true) => run::<i8>(command),
            (16, true) => run::<i16>(command),
            (32, true) => run::<i32>(command),
            (_, true) => run::<i64>(command),
        },
        Command::Missing { .. } if args.signed => {
            bail!("missing elements are only defined for unsigned integers")
        }
        Command::Missing { values } => match args.bits {
            8 => run_missing::<u8>(values),
            16 => run_missing::<u16>(values),
            32 => run_missing::<u32>(values),
            _ => run_missing::<u64>(values),
        },
        Command::Line {
            width,
            height,
            lines,
        } => run_line(*width, *height, lines),
        Command::Fraction { value } => run_fraction(*value),
    }?;
    println!("{output}");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_integer() {
        assert_eq!(parse_integer::<u8>("200").unwrap(), 200);
        assert_eq!(parse_integer::<u8>("0b1010_1010").unwrap(), 0xaa);
        assert_eq!(parse_integer::<u32>("0xdead_beef").unwrap(), 0xdead_beef);
        assert_eq!(parse_integer::<u16>("0o17").unwrap(), 15);
        assert_eq!(parse_integer::<i8>("-128").unwrap(), i8::MIN);
        assert_eq!(parse_integer::<i16>("-0x10").unwrap(), -16);
        assert!(parse_integer::<u8>("256").is_err());
        assert!(parse_integer::<u8>("-1").is_err());
        assert!(parse_integer::<u32>("0xg").is_err());
        assert!(parse_integer::<u32>("").is_err());
        assert!(parse_integer::<i32>("0b-101").is_err());
        assert!(parse_integer::<i32>("--5").is_err());
        assert!(parse_integer::<i32>("-0x-10").is_err());
        assert!(parse_integer::<i32>("0x+10").is_err());
    }

    #[test]
    fn test_parse_line() {
        assert_eq!(parse_line("3:12:0"), Ok((3, 12, 0)));
        assert!(parse_line("3:12").is_err());
        assert!(parse_line("3:x:0").is_err());
    }

    #[test]
    fn test_parse_width() {
        assert_eq!(parse_width("16"), Ok(16));
        assert!(parse_width("12").is_err());
        assert!(parse_width("128").is_err());
    }

    #[test]
    fn test_args() {
        let args = Args::try_parse_from(["bitview", "--bits", "8", "greater", "0b0110"]).unwrap();
        assert_eq!(args.bits, 8);
        assert!(!args.signed);
        assert!(matches!(
            args.command,
            Command::Value(ValueCommand::Greater { value }) if value == "0b0110"
        ));

        let args =
            Args::try_parse_from(["bitview", "line", "--width", "16", "--height", "2", "3:12:0"])
                .unwrap();
        assert!(matches!(
            args.command,
            Command::Line { width: 16, height: 2, ref lines } if lines == &[(3, 12, 0)]
        ));

        let args = Args::try_parse_from(["bitview", "fraction", "0.75"]).unwrap();
        assert!(matches!(args.command, Command::Fraction { value } if value == 0.75));
    }

    #[test]
    fn test_run_value_commands() {
        let greater = ValueCommand::Greater {
            value: "0b0110".to_owned(),
        };
        assert_eq!(run::<u8>(&greater).unwrap(), "9 (0b00001001)");
        let lesser = ValueCommand::Lesser {
            value: "9".to_owned(),
        };
        assert_eq!(run::<u8>(&lesser).unwrap(), "6 (0b00000110)");
        let swap = ValueCommand::Swap {
            value: "-128".to_owned(),
        };
        assert_eq!(run::<i8>(&swap).unwrap(), "64 (0b01000000)");
        let count = ValueCommand::Count {
            value: "0xffff".to_owned(),
        };
        assert_eq!(run::<u16>(&count).unwrap(), "16");
        let bits = ValueCommand::Bits {
            value: "6".to_owned(),
        };
        assert_eq!(run::<u8>(&bits).unwrap(), "00000110");
        let mask = ValueCommand::Mask { start: 2, end: 5 };
        assert_eq!(run::<u8>(&mask).unwrap(), "60 (0b00111100)");
        let hamming = ValueCommand::Hamming {
            a: "0b11101".to_owned(),
            b: "0b01111".to_owned(),
        };
        assert_eq!(run::<u32>(&hamming).unwrap(), "2");
    }

    #[test]
    fn test_run_other_commands() {
        let values = ["3", "0", "4", "1"].map(str::to_owned);
        assert_eq!(run_missing::<u16>(&values).unwrap(), "2");
        assert_eq!(
            run_line(16, 2, &[(0, 15, 0), (6, 9, 1)]).unwrap(),
            "\u{2588}".repeat(16)
                + "\n"
                + &"\u{2591}".repeat(6)
                + &"\u{2588}".repeat(4)
                + &"\u{2591}".repeat(6)
        );
        assert_eq!(run_fraction(0.75).unwrap(), "0.11");
        assert!(run_fraction(0.72).is_err());
    }

    #[test]
    fn test_run_reports_library_errors() {
        let error = run::<u8>(&ValueCommand::Greater {
            value: "255".to_owned(),
        })
        .unwrap_err();
        assert_eq!(error.to_string(), "no next greater for 255");
        assert!(run_missing::<u8>(&["0".to_owned(), "7".to_owned()]).is_err());
        assert!(run_line(12, 1, &[]).is_err());
    }
}
