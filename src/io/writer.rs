//! Result writer
//!
//! Writes the universe back in the loader's layout: body count, radius, then
//! `x y vx vy mass label` per body in scientific notation, so the output can
//! be fed straight back in as the next run's input.

use std::io::{self, Write};

use crate::simulation::states::Universe;

const SIGNIFICANT_DIGITS: usize = 5;

/// `v` with four fractional digits and a signed exponent of at least two
/// digits, e.g. `-8.3425e-11`, `1.0000e+00`
///
/// Rounds half-up from the shortest decimal that parses back to `v`, so
/// `-3.14165` prints as `-3.1417e+00` even though the stored binary value
/// sits just below the tie.
pub fn format_scientific(v: f64) -> String {
    if v.is_nan() {
        return "NaN".to_string();
    }
    if v.is_infinite() {
        return if v > 0.0 { "Infinity" } else { "-Infinity" }.to_string();
    }

    // shortest round-trip digits, e.g. "3.14165e0"
    let shortest = format!("{:e}", v.abs());
    let (mantissa, exponent) = shortest.split_once('e').unwrap_or((shortest.as_str(), "0"));
    let mut exponent: i32 = exponent.parse().unwrap_or(0);
    let mut digits: Vec<u8> = mantissa
        .bytes()
        .filter(u8::is_ascii_digit)
        .map(|b| b - b'0')
        .collect();

    if digits.len() > SIGNIFICANT_DIGITS {
        let round_up = digits[SIGNIFICANT_DIGITS] >= 5;
        digits.truncate(SIGNIFICANT_DIGITS);
        if round_up && carry(&mut digits) {
            // 9.99995 -> 1.0000e+01
            digits.insert(0, 1);
            digits.truncate(SIGNIFICANT_DIGITS);
            exponent += 1;
        }
    }
    digits.resize(SIGNIFICANT_DIGITS, 0);

    let fraction: String = digits[1..].iter().map(|d| char::from(b'0' + d)).collect();
    format!(
        "{}{}.{}e{}{:02}",
        if v.is_sign_negative() { "-" } else { "" },
        digits[0],
        fraction,
        if exponent < 0 { '-' } else { '+' },
        exponent.abs(),
    )
}

/// Add one to the last digit; `true` when the carry runs off the front
fn carry(digits: &mut [u8]) -> bool {
    for d in digits.iter_mut().rev() {
        if *d == 9 {
            *d = 0;
        } else {
            *d += 1;
            return false;
        }
    }
    true
}

pub fn write_universe<W: Write>(out: &mut W, universe: &Universe) -> io::Result<()> {
    writeln!(out, "{}", universe.len())?;
    // shortest representation that parses back to the same radius
    writeln!(out, "{:e}", universe.radius)?;

    for b in &universe.bodies {
        let p = b.position();
        let v = b.velocity();
        writeln!(
            out,
            "{} {} {} {} {} {}",
            format_scientific(p.x),
            format_scientific(p.y),
            format_scientific(v.x),
            format_scientific(v.y),
            format_scientific(b.mass()),
            b.label(),
        )?;
    }

    out.flush()
}

pub fn universe_to_string(universe: &Universe) -> String {
    let mut buf = Vec::new();
    // writing into a Vec cannot fail
    let _ = write_universe(&mut buf, universe);
    String::from_utf8_lossy(&buf).into_owned()
}
