//! Scan command implementation

use crate::cli::ScanArgs;
use crate::output::OutputWriter;
use crate::output_types::{ScanOutput, ScanStep};
use anyhow::{Context, Result};
use geojson::GeoJson;
use overwatch_core::config::LayeredConfig;
use overwatch_core::models::{Crs, Geometry};
use overwatch_geo::spatial::{area, bounding_box};
use overwatch_sync::ScannedAreaAccumulator;
use std::fs;

pub fn execute(args: ScanArgs, config: &LayeredConfig, output: &OutputWriter) -> Result<()> {
    let content = fs::read_to_string(&args.path)
        .with_context(|| format!("Failed to read extents file: {}", args.path.display()))?;
    let geojson: GeoJson = content
        .parse()
        .with_context(|| format!("Failed to parse GeoJSON: {}", args.path.display()))?;
    let extents = extract_geometries(&geojson)?;
    tracing::info!(
        path = %args.path.display(),
        extents = extents.len(),
        overlay_id = %args.overlay,
        "Accumulating scanned area"
    );

    let accumulator = ScannedAreaAccumulator::new(
        Crs::from_epsg(config.scanned_area_crs.value),
        config.geometry_validity.value,
    );
    let extent_crs = Crs::from_epsg(args.extent_crs);

    let mut scanned: Option<Geometry> = None;
    let mut steps = Vec::with_capacity(extents.len());

    for (index, extent) in extents.iter().enumerate() {
        let status = match extent {
            Some(extent) => {
                match accumulator.accumulate(&args.overlay, scanned.as_ref(), extent, &extent_crs) {
                    Ok(next) => {
                        scanned = Some(next);
                        "merged".to_string()
                    }
                    Err(err) => {
                        tracing::debug!(step = index + 1, error = %err, "Extent rejected");
                        output.warning(format!("Extent {} skipped: {}", index + 1, err));
                        format!("failed: {}", err)
                    }
                }
            }
            None => {
                output.warning(format!("Extent {} has no geometry", index + 1));
                "failed: no geometry".to_string()
            }
        };

        steps.push(ScanStep {
            step: index + 1,
            status,
            polygon_count: scanned.as_ref().map_or(0, |geometry| geometry.polygons().len()),
            area: scanned.as_ref().map_or(0.0, area),
        });
    }

    let total_area = scanned.as_ref().map_or(0.0, area);
    let polygon_count = scanned.as_ref().map_or(0, |geometry| geometry.polygons().len());
    let bbox = scanned.as_ref().and_then(bounding_box);

    if output.is_json() {
        output.result(ScanOutput {
            overlay_id: args.overlay,
            crs: accumulator.crs().epsg,
            steps,
            area: total_area,
            polygon_count,
            bbox,
            scanned_area: scanned.as_ref().map(Geometry::to_geojson),
        })?;
        return Ok(());
    }

    output.section(format!("Scanned area for {}", args.overlay));
    output.table(steps);
    output.kv("CRS", format!("EPSG:{}", accumulator.crs().epsg));
    output.kv("Polygons", polygon_count);
    output.kv("Area", format!("{:.6}", total_area));
    if let Some([min_x, min_y, max_x, max_y]) = bbox {
        output.kv("Extent", format!("{} {} {} {}", min_x, min_y, max_x, max_y));
    }

    Ok(())
}

/// Every geometry in the document, in order. Features without a geometry
/// yield `None` so step numbers match feature positions.
fn extract_geometries(geojson: &GeoJson) -> Result<Vec<Option<Geometry>>> {
    let geometries: Vec<Option<&geojson::Geometry>> = match geojson {
        GeoJson::FeatureCollection(collection) => {
            collection.features.iter().map(|feature| feature.geometry.as_ref()).collect()
        }
        GeoJson::Feature(feature) => vec![feature.geometry.as_ref()],
        GeoJson::Geometry(geometry) => vec![Some(geometry)],
    };

    geometries
        .into_iter()
        .map(|geometry| {
            geometry
                .map(|geometry| {
                    let value = serde_json::to_value(geometry)?;
                    Geometry::from_geojson(&value).context("Unsupported geometry in extents file")
                })
                .transpose()
        })
        .collect()
}
