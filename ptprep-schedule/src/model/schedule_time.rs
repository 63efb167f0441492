use serde::{Deserialize, Serialize};
use std::{fmt::Display, str::FromStr};

/// a time of day or time offset in seconds. values beyond 24 hours are
/// valid (service days run past midnight).
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Serialize, Deserialize)]
pub struct ScheduleTime(f64);

impl ScheduleTime {
    pub fn from_seconds(seconds: f64) -> ScheduleTime {
        ScheduleTime(seconds)
    }

    pub fn seconds(&self) -> f64 {
        self.0
    }
}

impl FromStr for ScheduleTime {
    type Err = String;

    /// accepts `HH:MM:SS[.fff]`, `HH:MM` and plain seconds
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        let (sign, body) = match trimmed.strip_prefix('-') {
            Some(rest) => (-1.0, rest),
            None => (1.0, trimmed),
        };
        let parts = body.split(':').collect::<Vec<_>>();
        let seconds = match parts.as_slice() {
            [secs] => parse_component(secs, "seconds")?,
            [h, m] => parse_component(h, "hours")? * 3600.0 + parse_component(m, "minutes")? * 60.0,
            [h, m, secs] => {
                parse_component(h, "hours")? * 3600.0
                    + parse_component(m, "minutes")? * 60.0
                    + parse_component(secs, "seconds")?
            }
            _ => return Err(format!("unsupported time format '{s}'")),
        };
        Ok(ScheduleTime(sign * seconds))
    }
}

fn parse_component(value: &str, name: &str) -> Result<f64, String> {
    let parsed = value
        .parse::<f64>()
        .map_err(|e| format!("invalid {name} '{value}': {e}"))?;
    if !parsed.is_finite() || parsed < 0.0 {
        return Err(format!("invalid {name} '{value}'"));
    }
    Ok(parsed)
}

impl Display for ScheduleTime {
    /// writes `HH:MM:SS`, appending up to millisecond precision only when
    /// the value has a fractional part
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if self.0 < 0.0 {
            write!(f, "-")?;
        }
        let millis = (self.0.abs() * 1000.0).round() as u64;
        let whole = millis / 1000;
        let fraction = millis % 1000;
        let (h, m, s) = (whole / 3600, (whole % 3600) / 60, whole % 60);
        write!(f, "{h:02}:{m:02}:{s:02}")?;
        if fraction > 0 {
            let digits = format!("{fraction:03}");
            write!(f, ".{}", digits.trim_end_matches('0'))?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::ScheduleTime;

    #[test]
    fn test_parse_and_format() {
        let t: ScheduleTime = "06:30:15".parse().unwrap();
        assert_eq!(t.seconds(), 23415.0);
        assert_eq!(t.to_string(), "06:30:15");
    }

    #[test]
    fn test_past_midnight() {
        let t: ScheduleTime = "25:05:00".parse().unwrap();
        assert_eq!(t.seconds(), 90300.0);
        assert_eq!(t.to_string(), "25:05:00");
    }

    #[test]
    fn test_zero_is_a_real_value() {
        let t: ScheduleTime = "00:00:00".parse().unwrap();
        assert_eq!(t.seconds(), 0.0);
        assert_eq!(t.to_string(), "00:00:00");
    }

    #[test]
    fn test_fractional_and_short_forms() {
        let t: ScheduleTime = "00:01:02.5".parse().unwrap();
        assert_eq!(t.to_string(), "00:01:02.5");
        let hm: ScheduleTime = "07:45".parse().unwrap();
        assert_eq!(hm.seconds(), 27900.0);
        let secs: ScheduleTime = "90".parse().unwrap();
        assert_eq!(secs.to_string(), "00:01:30");
    }

    #[test]
    fn test_invalid() {
        assert!("".parse::<ScheduleTime>().is_err());
        assert!("ab:00:00".parse::<ScheduleTime>().is_err());
        assert!("1:2:3:4".parse::<ScheduleTime>().is_err());
        assert!("undefined".parse::<ScheduleTime>().is_err());
    }
}
