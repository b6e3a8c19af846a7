use super::chart_kind::ChartKind;
use crate::core::Observation;
use plotters::prelude::*;
use serde::Serialize;
use std::collections::BTreeMap;
use std::fs;
use std::ops::Range;
use std::path::{Path, PathBuf};
use strum::IntoEnumIterator;
use thiserror::Error;

const CHART_SIZE: (u32, u32) = (800, 600);
const POINT_SIZE: i32 = 5;

#[derive(Debug, Error)]
pub enum VizError {
    #[error("failed to render {chart}: {message}")]
    Chart {
        chart: &'static str,
        message: String,
    },

    #[error("failed to prepare chart directory {path}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// The identifiers of a complete chart batch, keyed by chart name. Only
/// ever constructed once all four artifacts have been written; a batch
/// that fails partway reports nothing.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ChartSet(BTreeMap<&'static str, &'static str>);

impl ChartSet {
    fn complete() -> ChartSet {
        ChartSet(
            ChartKind::iter()
                .map(|kind| (kind.key(), kind.file_name()))
                .collect(),
        )
    }

    pub fn get(&self, key: &str) -> Option<&'static str> {
        self.0.get(key).copied()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

/// Regenerates the chart artifacts from a store snapshot.
///
/// All charts are written to a fixed output directory under fixed names,
/// overwriting the previous batch. An empty snapshot produces no charts;
/// a rendering failure fails the whole batch.
pub struct ChartRenderer {
    out_dir: PathBuf,
}

impl ChartRenderer {
    pub fn new(out_dir: impl Into<PathBuf>) -> ChartRenderer {
        ChartRenderer {
            out_dir: out_dir.into(),
        }
    }

    pub fn out_dir(&self) -> &Path {
        &self.out_dir
    }

    pub fn render_all(
        &self,
        observations: &[Observation],
    ) -> Result<Option<ChartSet>, VizError> {
        if observations.is_empty() {
            return Ok(None);
        }

        fs::create_dir_all(&self.out_dir).map_err(|source| VizError::Io {
            path: self.out_dir.clone(),
            source,
        })?;

        for kind in ChartKind::iter() {
            self.render_chart(kind, observations)?;
        }
        Ok(Some(ChartSet::complete()))
    }

    fn render_chart(
        &self,
        kind: ChartKind,
        observations: &[Observation],
    ) -> Result<(), VizError> {
        let path = self.out_dir.join(kind.file_name());
        let result = match kind {
            ChartKind::IncomeVsScore => draw_scatter(
                &path,
                kind.title(),
                "Annual Income (k$)",
                "Spending Score (1-100)",
                &points(observations, |o| (o.income as f64, o.score as f64)),
            ),
            ChartKind::AgeVsScore => draw_scatter(
                &path,
                kind.title(),
                "Age",
                "Spending Score (1-100)",
                &points(observations, |o| (o.age as f64, o.score as f64)),
            ),
            ChartKind::AgeVsIncome => draw_scatter(
                &path,
                kind.title(),
                "Age",
                "Annual Income (k$)",
                &points(observations, |o| (o.age as f64, o.income as f64)),
            ),
            ChartKind::ClusterDistribution => draw_counts(
                &path,
                kind.title(),
                &cluster_counts(observations),
            ),
        };
        result.map_err(|message| VizError::Chart {
            chart: kind.key(),
            message,
        })
    }
}

/// Observations per cluster label, in label order.
pub fn cluster_counts(observations: &[Observation]) -> BTreeMap<usize, usize> {
    let mut counts = BTreeMap::new();
    for observation in observations {
        *counts.entry(observation.cluster).or_insert(0) += 1;
    }
    counts
}

fn points(
    observations: &[Observation],
    position: impl Fn(&Observation) -> (f64, f64),
) -> Vec<(f64, f64, usize)> {
    observations
        .iter()
        .map(|o| {
            let (x, y) = position(o);
            (x, y, o.cluster)
        })
        .collect()
}

fn draw_scatter(
    path: &Path,
    title: &str,
    x_desc: &str,
    y_desc: &str,
    points: &[(f64, f64, usize)],
) -> Result<(), String> {
    let root = SVGBackend::new(path, CHART_SIZE).into_drawing_area();
    root.fill(&WHITE).map_err(|e| e.to_string())?;

    let (x_range, y_range) = axis_ranges(points);
    let mut chart = ChartBuilder::on(&root)
        .caption(title, ("sans-serif", 28))
        .margin(12)
        .x_label_area_size(48)
        .y_label_area_size(56)
        .build_cartesian_2d(x_range, y_range)
        .map_err(|e| e.to_string())?;

    chart
        .configure_mesh()
        .x_desc(x_desc)
        .y_desc(y_desc)
        .draw()
        .map_err(|e| e.to_string())?;

    let mut labels: Vec<usize> = points.iter().map(|p| p.2).collect();
    labels.sort_unstable();
    labels.dedup();

    for label in labels {
        let color = Palette99::pick(label).to_rgba();
        chart
            .draw_series(
                points
                    .iter()
                    .filter(|p| p.2 == label)
                    .map(|&(x, y, _)| Circle::new((x, y), POINT_SIZE, color.filled())),
            )
            .map_err(|e| e.to_string())?
            .label(format!("Cluster {label}"))
            .legend(move |(x, y)| Circle::new((x, y), POINT_SIZE, color.filled()));
    }

    chart
        .configure_series_labels()
        .border_style(&BLACK)
        .background_style(&WHITE.mix(0.8))
        .draw()
        .map_err(|e| e.to_string())?;

    root.present().map_err(|e| e.to_string())
}

fn draw_counts(
    path: &Path,
    title: &str,
    counts: &BTreeMap<usize, usize>,
) -> Result<(), String> {
    let root = SVGBackend::new(path, CHART_SIZE).into_drawing_area();
    root.fill(&WHITE).map_err(|e| e.to_string())?;

    let max_label = counts.keys().max().copied().unwrap_or(0);
    let max_count = counts.values().max().copied().unwrap_or(0) as f64;

    let mut chart = ChartBuilder::on(&root)
        .caption(title, ("sans-serif", 28))
        .margin(12)
        .x_label_area_size(48)
        .y_label_area_size(56)
        .build_cartesian_2d(
            -0.5..(max_label as f64 + 0.5),
            0.0..(max_count * 1.1).max(1.0),
        )
        .map_err(|e| e.to_string())?;

    chart
        .configure_mesh()
        .x_desc("Cluster")
        .y_desc("Number of Customers")
        .x_labels(max_label + 2)
        .x_label_formatter(&|x| format!("{}", x.round() as i64))
        .draw()
        .map_err(|e| e.to_string())?;

    chart
        .draw_series(counts.iter().map(|(&label, &count)| {
            let color = Palette99::pick(label).to_rgba();
            Rectangle::new(
                [
                    (label as f64 - 0.35, 0.0),
                    (label as f64 + 0.35, count as f64),
                ],
                color.filled(),
            )
        }))
        .map_err(|e| e.to_string())?;

    root.present().map_err(|e| e.to_string())
}

fn axis_ranges(points: &[(f64, f64, usize)]) -> (Range<f64>, Range<f64>) {
    let mut x_min = f64::INFINITY;
    let mut x_max = f64::NEG_INFINITY;
    let mut y_min = f64::INFINITY;
    let mut y_max = f64::NEG_INFINITY;
    for &(x, y, _) in points {
        x_min = x_min.min(x);
        x_max = x_max.max(x);
        y_min = y_min.min(y);
        y_max = y_max.max(y);
    }
    (padded(x_min, x_max), padded(y_min, y_max))
}

fn padded(min: f64, max: f64) -> Range<f64> {
    let span = max - min;
    let pad = if span > 0.0 { span * 0.05 } else { 1.0 };
    (min - pad)..(max + pad)
}
