use std::path::Path;

use anyhow::{Context, Result};

use crate::bucket::hue_distance;
use crate::color::Color;
use crate::interaction::{CompanionMode, Interaction};

/// One bucket of the strip, flattened to display colors.
#[derive(Debug, Clone, PartialEq)]
pub struct BucketRow {
    pub index: usize,
    pub hue: u16,
    pub tradeoff: u16,
    pub p1_bright: Color,
    pub p1_dark: Color,
    pub p2_hue: u16,
    pub separation: u16,
    pub deficit: f32,
    pub p2_bright: Color,
    pub p2_dark: Color,
}

/// Plain-text snapshot of every bucket and its frontier companion.
#[derive(Debug, Clone)]
pub struct StripReport {
    pub header: Vec<(String, String)>,
    pub rows: Vec<BucketRow>,
}

impl StripReport {
    pub fn from_interaction(state: &Interaction) -> Self {
        let selection = state.selection();
        let mode = match selection.companion_mode {
            CompanionMode::Locked => "locked",
            CompanionMode::Independent => "independent",
        };
        let header = vec![
            ("model".to_string(), selection.cost_model.to_string()),
            ("companion".to_string(), mode.to_string()),
            ("role1-hue".to_string(), format!("{:.1}", selection.role1_hue)),
            ("role2-hue".to_string(), format!("{:.1}", selection.role2_hue)),
            (
                "selected-bucket".to_string(),
                state.selected_bucket().to_string(),
            ),
        ];

        let rows = state
            .buckets()
            .iter()
            .enumerate()
            .map(|(index, bucket)| {
                let companion = state.bucket_companion(index);
                BucketRow {
                    index,
                    hue: bucket.hue.round() as u16,
                    tradeoff: bucket.tradeoff(),
                    p1_bright: Color::from_lch(bucket.bright.lightness, bucket.bright.chroma, bucket.hue),
                    p1_dark: Color::from_lch(bucket.dark.lightness, bucket.dark.chroma, bucket.hue),
                    p2_hue: companion.hue,
                    separation: hue_distance(bucket.hue, companion.hue as f32).round() as u16,
                    deficit: companion.deficit,
                    p2_bright: companion.bright_color(),
                    p2_dark: companion.dark_color(),
                }
            })
            .collect();

        Self { header, rows }
    }

    /// Serialize as `key = value` header lines followed by one line per bucket.
    pub fn serialize(&self) -> String {
        let mut out = String::new();
        for (key, value) in &self.header {
            out.push_str(&format!("{key} = {value}\n"));
        }
        for row in &self.rows {
            out.push_str(&format!(
                "bucket = {:>2} hue={:>3} tradeoff={:>3} p1={} p1-dark={} p2-hue={:>3} sep={:>3} deficit={:.4} p2={} p2-dark={}\n",
                row.index,
                row.hue,
                row.tradeoff,
                row.p1_bright,
                row.p1_dark,
                row.p2_hue,
                row.separation,
                row.deficit,
                row.p2_bright,
                row.p2_dark,
            ));
        }
        out
    }

    pub fn write_to(&self, path: &Path) -> Result<()> {
        std::fs::write(path, self.serialize())
            .with_context(|| format!("failed to write report to {}", path.display()))?;
        log::info!("wrote report to {}", path.display());
        Ok(())
    }
}
