//! Boundary loading from `GeoJSON`
//!
//! Country and province outlines arrive as feature collections whose records carry
//! names or codes. A selector picks the records forming the region of interest and
//! every polygon part of those records is dissolved into one multipolygon.

use std::path::{Path, PathBuf};

use geo::{Geometry, MultiPolygon, Polygon};
use geojson::{Feature, GeoJson, JsonValue};
use tracing::{debug, warn};

use crate::io::error::{MaskError, Result};

/// Chooses features by the value of one property
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FeatureSelector {
    /// Property name to inspect
    pub property: String,
    /// Accepted values, compared as text
    pub values: Vec<String>,
}

impl FeatureSelector {
    /// Select features whose `property` equals any of `values`
    pub fn new(
        property: impl Into<String>,
        values: impl IntoIterator<Item = impl Into<String>>,
    ) -> Self {
        Self {
            property: property.into(),
            values: values.into_iter().map(Into::into).collect(),
        }
    }

    /// Whether `feature` carries an accepted value
    pub fn matches(&self, feature: &Feature) -> bool {
        feature
            .property(&self.property)
            .and_then(property_text)
            .is_some_and(|text| self.values.contains(&text))
    }
}

// Numbers and booleans are matched through their JSON text so codes like 156 work
fn property_text(value: &JsonValue) -> Option<String> {
    match value {
        JsonValue::String(text) => Some(text.clone()),
        JsonValue::Number(number) => Some(number.to_string()),
        JsonValue::Bool(flag) => Some(flag.to_string()),
        _ => None,
    }
}

/// Read a boundary file and dissolve the selected parts into one region
///
/// # Errors
///
/// Returns an error if the file cannot be read, is not valid `GeoJSON`, or no
/// polygonal geometry remains after selection
pub fn load_boundary(
    path: &Path,
    selector: Option<&FeatureSelector>,
) -> Result<MultiPolygon<f64>> {
    let text = std::fs::read_to_string(path).map_err(|source| MaskError::BoundaryLoad {
        path: path.to_path_buf(),
        source,
    })?;
    let geojson = text.parse::<GeoJson>().map_err(|e| parse_error(path, &e))?;

    boundary_from_geojson(geojson, selector, path)
}

/// Dissolve the selected polygon parts of an already parsed document
///
/// `origin` is only used in error messages.
///
/// # Errors
///
/// Returns an error if a geometry cannot be converted or no polygonal
/// geometry remains after selection
pub fn boundary_from_geojson(
    geojson: GeoJson,
    selector: Option<&FeatureSelector>,
    origin: &Path,
) -> Result<MultiPolygon<f64>> {
    let mut parts = Vec::new();

    match geojson {
        GeoJson::FeatureCollection(collection) => {
            for feature in collection.features {
                collect_feature(feature, selector, origin, &mut parts)?;
            }
        }
        GeoJson::Feature(feature) => collect_feature(feature, selector, origin, &mut parts)?,
        GeoJson::Geometry(geometry) => {
            if selector.is_some() {
                warn!(path = %origin.display(), "bare geometry has no properties, selector ignored");
            }
            collect_geometry(convert(geometry, origin)?, &mut parts);
        }
    }

    if parts.is_empty() {
        return Err(MaskError::NoRegion {
            path: origin.to_path_buf(),
        });
    }

    debug!(path = %origin.display(), parts = parts.len(), "dissolving boundary parts");
    Ok(dissolve(&parts))
}

/// Union polygon parts so shared edges between records disappear
pub fn dissolve(parts: &[Polygon<f64>]) -> MultiPolygon<f64> {
    geo::unary_union(parts)
}

fn collect_feature(
    feature: Feature,
    selector: Option<&FeatureSelector>,
    origin: &Path,
    parts: &mut Vec<Polygon<f64>>,
) -> Result<()> {
    if !selector.is_none_or(|s| s.matches(&feature)) {
        return Ok(());
    }

    if let Some(geometry) = feature.geometry {
        collect_geometry(convert(geometry, origin)?, parts);
    }
    Ok(())
}

fn convert(geometry: geojson::Geometry, origin: &Path) -> Result<Geometry<f64>> {
    geo_types::Geometry::<f64>::try_from(geometry).map_err(|e| parse_error(origin, &e))
}

fn collect_geometry(geometry: Geometry<f64>, parts: &mut Vec<Polygon<f64>>) {
    match geometry {
        Geometry::Polygon(polygon) => parts.push(polygon),
        Geometry::MultiPolygon(multi) => parts.extend(multi),
        Geometry::Rect(rect) => parts.push(rect.to_polygon()),
        Geometry::Triangle(triangle) => parts.push(triangle.to_polygon()),
        Geometry::GeometryCollection(collection) => {
            for member in collection {
                collect_geometry(member, parts);
            }
        }
        other => warn!(kind = geometry_kind(&other), "skipping non-polygonal geometry"),
    }
}

const fn geometry_kind(geometry: &Geometry<f64>) -> &'static str {
    match geometry {
        Geometry::Point(_) => "Point",
        Geometry::Line(_) => "Line",
        Geometry::LineString(_) => "LineString",
        Geometry::Polygon(_) => "Polygon",
        Geometry::MultiPoint(_) => "MultiPoint",
        Geometry::MultiLineString(_) => "MultiLineString",
        Geometry::MultiPolygon(_) => "MultiPolygon",
        Geometry::GeometryCollection(_) => "GeometryCollection",
        Geometry::Rect(_) => "Rect",
        Geometry::Triangle(_) => "Triangle",
    }
}

fn parse_error(path: &Path, reason: &impl ToString) -> MaskError {
    MaskError::BoundaryParse {
        path: PathBuf::from(path),
        reason: reason.to_string(),
    }
}
