use super::GtfsCoordinateError;
use proj4rs::proj::Proj;
use std::fmt::Display;

pub const DEFAULT_TARGET_CRS: &str = "EPSG:3826";

const WGS84_DEFINITION: &str = "+proj=longlat +datum=WGS84 +no_defs";

/// a projection from WGS84 longitude/latitude into a named target CRS.
pub struct TargetCrs {
    name: String,
    source: Proj,
    target: Proj,
    geographic: bool,
}

impl TargetCrs {
    /// resolves an EPSG code (`EPSG:3826`), an alias (`WGS84`) or a raw
    /// proj string (`+proj=tmerc ...`).
    pub fn from_name(name: &str) -> Result<TargetCrs, GtfsCoordinateError> {
        let definition = proj_definition(name).ok_or_else(|| GtfsCoordinateError::UnsupportedCrs {
            name: name.to_string(),
            reason: String::from("no projection definition is known for this name"),
        })?;
        let source = Proj::from_proj_string(WGS84_DEFINITION).map_err(unsupported(name))?;
        let target = Proj::from_proj_string(&definition).map_err(unsupported(name))?;
        let geographic = definition.contains("+proj=longlat") || definition.contains("+proj=latlong");
        Ok(TargetCrs {
            name: name.to_string(),
            source,
            target,
            geographic,
        })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// column suffix: the name upper-cased, keeping only letters and digits
    pub fn column_suffix(&self) -> String {
        self.name
            .to_uppercase()
            .chars()
            .filter(|c| c.is_ascii_alphanumeric())
            .collect()
    }

    /// projects a WGS84 coordinate given in degrees. returns None for
    /// coordinates outside the valid range or that the projection rejects.
    pub fn project(&self, lon: f64, lat: f64) -> Option<(f64, f64)> {
        if !lon.is_finite() || !lat.is_finite() || lat.abs() > 90.0 || lon.abs() > 180.0 {
            return None;
        }
        let mut point = (lon.to_radians(), lat.to_radians(), 0.0);
        proj4rs::transform::transform(&self.source, &self.target, &mut point).ok()?;
        let (x, y) = if self.geographic {
            (point.0.to_degrees(), point.1.to_degrees())
        } else {
            (point.0, point.1)
        };
        if x.is_finite() && y.is_finite() {
            Some((x, y))
        } else {
            None
        }
    }
}

fn unsupported<E: Display>(name: &str) -> impl Fn(E) -> GtfsCoordinateError + '_ {
    move |e| GtfsCoordinateError::UnsupportedCrs {
        name: name.to_string(),
        reason: e.to_string(),
    }
}

fn proj_definition(name: &str) -> Option<String> {
    let trimmed = name.trim();
    if trimmed.starts_with("+proj=") {
        return Some(trimmed.to_string());
    }
    let upper = trimmed.to_uppercase();
    let definition = match upper.as_str() {
        "EPSG:3826" | "TWD97_TM2" => String::from(
            "+proj=tmerc +lat_0=0 +lon_0=121 +k=0.9999 +x_0=250000 +y_0=0 +ellps=GRS80 +towgs84=0,0,0 +units=m +no_defs",
        ),
        "EPSG:3825" => String::from(
            "+proj=tmerc +lat_0=0 +lon_0=119 +k=0.9999 +x_0=250000 +y_0=0 +ellps=GRS80 +towgs84=0,0,0 +units=m +no_defs",
        ),
        "EPSG:3857" => String::from(
            "+proj=merc +a=6378137 +b=6378137 +lat_ts=0 +lon_0=0 +x_0=0 +y_0=0 +k=1 +units=m +no_defs",
        ),
        "EPSG:4326" | "WGS84" => String::from(WGS84_DEFINITION),
        other => utm_definition(other)?,
    };
    Some(definition)
}

/// WGS84 / UTM zones, EPSG:326NN (north) and EPSG:327NN (south)
fn utm_definition(upper: &str) -> Option<String> {
    let code: u32 = upper.strip_prefix("EPSG:")?.parse().ok()?;
    let (zone, south) = match code {
        32601..=32660 => (code - 32600, false),
        32701..=32760 => (code - 32700, true),
        _ => return None,
    };
    let hemisphere = if south { " +south" } else { "" };
    Some(format!(
        "+proj=utm +zone={zone}{hemisphere} +datum=WGS84 +units=m +no_defs"
    ))
}
