use anyhow::{Context, Result};
use raster2d::types::validate_points;
use raster2d::{Point, Polygon};
use std::fs;
use std::path::Path;

/// Parse `"x,y"` into a point (clap value parser).
pub fn parse_point(s: &str) -> Result<Point, String> {
    let [x, y] = parse_floats::<2>(s)?;
    Ok(Point::new(x, y))
}

/// Segment given as `"x1,y1,x2,y2"`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Segment {
    pub a: Point,
    pub b: Point,
}

pub fn parse_segment(s: &str) -> Result<Segment, String> {
    let [x1, y1, x2, y2] = parse_floats::<4>(s)?;
    Ok(Segment {
        a: Point::new(x1, y1),
        b: Point::new(x2, y2),
    })
}

/// Parse `"x,y"` into integer pixel coordinates.
pub fn parse_pixel(s: &str) -> Result<(i32, i32), String> {
    let mut parts = s.split(',').map(str::trim);
    let (Some(x), Some(y), None) = (parts.next(), parts.next(), parts.next()) else {
        return Err(format!("expected `x,y`, got `{s}`"));
    };
    let x = x.parse().map_err(|e| format!("bad x in `{s}`: {e}"))?;
    let y = y.parse().map_err(|e| format!("bad y in `{s}`: {e}"))?;
    Ok((x, y))
}

fn parse_floats<const N: usize>(s: &str) -> Result<[f64; N], String> {
    let values: Vec<f64> = s
        .split(',')
        .map(|v| v.trim().parse::<f64>())
        .collect::<Result<_, _>>()
        .map_err(|e| format!("bad number in `{s}`: {e}"))?;
    let values: [f64; N] = values
        .try_into()
        .map_err(|v: Vec<f64>| format!("expected {N} comma-separated numbers, got {}", v.len()))?;
    if values.iter().any(|v| !v.is_finite()) {
        return Err(format!("non-finite number in `{s}`"));
    }
    Ok(values)
}

/// Point list from a JSON file holding `[[x, y], ...]`.
pub fn load_points(path: &Path) -> Result<Vec<Point>> {
    let text =
        fs::read_to_string(path).with_context(|| format!("reading {}", path.display()))?;
    let raw: Vec<[f64; 2]> = serde_json::from_str(&text)
        .with_context(|| format!("parsing {} as [[x, y], ...]", path.display()))?;
    let points: Vec<Point> = raw.into_iter().map(|[x, y]| Point::new(x, y)).collect();
    validate_points(&points).with_context(|| format!("validating {}", path.display()))?;
    tracing::debug!(path = %path.display(), n = points.len(), "loaded points");
    Ok(points)
}

pub fn load_polygon(path: &Path) -> Result<Polygon> {
    let points = load_points(path)?;
    Polygon::new(points).with_context(|| format!("{} is not a polygon", path.display()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn parses_points_and_segments() {
        assert_eq!(parse_point("1.5, -2"), Ok(Point::new(1.5, -2.0)));
        assert!(parse_point("1,2,3").is_err());
        assert!(parse_point("a,2").is_err());
        assert!(parse_point("inf,2").is_err());
        let seg = parse_segment("0,0,10,5").unwrap();
        assert_eq!(seg.b, Point::new(10.0, 5.0));
        assert_eq!(parse_pixel("3,-4"), Ok((3, -4)));
        assert!(parse_pixel("3.5,4").is_err());
        assert!(parse_pixel("3").is_err());
    }

    #[test]
    fn loads_point_json() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("pts.json");
        fs::write(&path, "[[0, 0], [4, 0], [4, 3], [0, 0]]").unwrap();
        let pts = load_points(&path).unwrap();
        assert_eq!(pts.len(), 4);
        // closing vertex is dropped for polygons
        assert_eq!(load_polygon(&path).unwrap().len(), 3);
    }

    #[test]
    fn reports_bad_files_with_path() {
        let dir = tempdir().unwrap();
        let missing = dir.path().join("missing.json");
        let err = load_points(&missing).unwrap_err();
        assert!(format!("{err:#}").contains("missing.json"));

        let bad = dir.path().join("bad.json");
        fs::write(&bad, r#"{"x": 1}"#).unwrap();
        assert!(load_points(&bad).is_err());

        let short = dir.path().join("short.json");
        fs::write(&short, "[[0, 0], [1, 1]]").unwrap();
        let err = load_polygon(&short).unwrap_err();
        assert!(format!("{err:#}").contains("at least 3 vertices"));
    }
}
