//!
//! The shell `time` output.
//!

use super::error::Error;

///
/// Converts a `time` duration such as `0m1.5s` into seconds.
///
pub fn parse(raw: &str) -> Result<f64, Error> {
    let error = || Error::Time {
        raw: raw.to_owned(),
    };

    let trimmed = raw.trim();
    let (minutes, seconds) = trimmed.split_once('m').ok_or_else(error)?;
    let minutes = minutes.parse::<f64>().map_err(|_| error())?;
    let seconds = seconds
        .strip_suffix('s')
        .unwrap_or(seconds)
        .parse::<f64>()
        .map_err(|_| error())?;
    Ok(minutes * 60.0 + seconds)
}
