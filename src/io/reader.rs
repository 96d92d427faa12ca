//! Universe text loader
//!
//! ```text
//! 2
//! 2.50e11
//! 1.4960e+11 0.0000e+00 0.0000e+00 2.9800e+04 5.9740e+24 earth.gif
//! 0.0000e+00 0.0000e+00 0.0000e+00 0.0000e+00 1.9890e+30 sun.gif
//! ```
//!
//! Line 1 is the body count, line 2 the universe radius, then one
//! whitespace-separated `x y vx vy mass label` record per body. Blank lines
//! are skipped.

use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use log::{debug, warn};

use crate::io::error::UniverseFileError;
use crate::simulation::states::{Body, NVec2, Universe};

const RECORD_FIELDS: [&str; 5] = ["x", "y", "vx", "vy", "mass"];

pub fn read_universe_file(path: &Path) -> Result<Universe, UniverseFileError> {
    let universe = read_universe(BufReader::new(File::open(path)?))?;
    debug!("loaded {} bodies from {}", universe.len(), path.display());
    Ok(universe)
}

pub fn parse_universe(text: &str) -> Result<Universe, UniverseFileError> {
    read_universe(text.as_bytes())
}

pub fn read_universe<R: BufRead>(reader: R) -> Result<Universe, UniverseFileError> {
    let mut lines = Vec::new();
    for (i, line) in reader.lines().enumerate() {
        let line = line?;
        if !line.trim().is_empty() {
            lines.push((i + 1, line));
        }
    }
    let mut lines = lines.into_iter();

    let (count_line, count_text) = lines.next().ok_or(UniverseFileError::MissingHeader("body count"))?;
    let declared: usize = count_text.trim().parse().map_err(|_| UniverseFileError::InvalidBodyCount {
        line: count_line,
        value: count_text.trim().to_string(),
    })?;

    let (radius_line, radius_text) = lines.next().ok_or(UniverseFileError::MissingHeader("universe radius"))?;
    let radius = parse_number(radius_line, "universe radius", radius_text.trim())?;

    let bodies = lines
        .map(|(line, text)| parse_body(line, &text))
        .collect::<Result<Vec<_>, _>>()?;

    if bodies.len() != declared {
        return Err(UniverseFileError::BodyCountMismatch {
            declared,
            found: bodies.len(),
        });
    }

    Ok(Universe::new(bodies, radius))
}

fn parse_body(line: usize, text: &str) -> Result<Body, UniverseFileError> {
    let fields: Vec<&str> = text.split_whitespace().collect();
    if fields.len() < 6 {
        return Err(UniverseFileError::MissingFields {
            line,
            found: fields.len(),
        });
    }
    if fields.len() > 6 {
        warn!("line {}: ignoring {} extra fields", line, fields.len() - 6);
    }

    let mut values = [0.0; 5];
    for (k, field) in RECORD_FIELDS.into_iter().enumerate() {
        values[k] = parse_number(line, field, fields[k])?;
    }
    let [x, y, vx, vy, mass] = values;

    if !(mass > 0.0) {
        warn!("line {}: body {:?} has non-positive mass {}", line, fields[5], mass);
    }

    Ok(Body::new(NVec2::new(x, y), NVec2::new(vx, vy), mass, fields[5]))
}

fn parse_number(line: usize, field: &'static str, value: &str) -> Result<f64, UniverseFileError> {
    value.parse().map_err(|_| UniverseFileError::InvalidNumber {
        line,
        field,
        value: value.to_string(),
    })
}
