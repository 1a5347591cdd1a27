use std::path::PathBuf;

use anyhow::Result;
use clap::Parser;

use crate::color::Color;
use crate::frontier::{CostModel, MAX_SEPARATION};
use crate::interaction::{CompanionMode, InteractionConfig};

/// Derive a contrasting companion hue for a base hue and explore the
/// hue-separation vs chroma/lightness tradeoff.
#[derive(Parser, Debug)]
#[command(name = "huepair", version, about)]
pub struct Args {
    /// Initial role-1 hue in degrees
    #[arg(long, default_value_t = 0.0, allow_negative_numbers = true)]
    pub hue: f32,

    /// Seed role 1 from a hex color's Oklch hue instead of --hue
    #[arg(long, conflicts_with = "hue")]
    pub color: Option<String>,

    /// How the companion pays for hue separation
    #[arg(short, long, value_enum, default_value_t = CostModel::ChromaOnly)]
    pub model: CostModel,

    /// Keep role 2 independent of the frontier
    #[arg(long)]
    pub unlocked: bool,

    /// Role-2 hue in degrees while unlocked (defaults to the complement)
    #[arg(long, requires = "unlocked", allow_negative_numbers = true)]
    pub role2_hue: Option<f32>,

    /// Initial minimum hue separation for every bucket
    #[arg(short, long, default_value_t = MAX_SEPARATION,
          value_parser = clap::value_parser!(u16).range(0..=MAX_SEPARATION as i64))]
    pub tradeoff: u16,

    /// Chrome colors for dark or light terminals
    #[arg(long, value_enum, default_value_t = ThemeMode::Dark)]
    pub theme: ThemeMode,

    /// Swap the P1/P2 labels
    #[arg(long)]
    pub swap: bool,

    /// Write the bucket report to this file instead of stdout
    #[arg(short, long, conflicts_with = "tui")]
    pub output: Option<PathBuf>,

    /// Launch interactive TUI mode
    #[arg(long)]
    pub tui: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum ThemeMode {
    Dark,
    Light,
}

impl Args {
    /// Role-1 hue from `--color` when given, else `--hue`.
    pub fn role1_hue(&self) -> Result<f32> {
        match &self.color {
            Some(hex) => Ok(Color::from_hex(hex)?.hue()),
            None => Ok(self.hue),
        }
    }

    pub fn interaction_config(&self) -> Result<InteractionConfig> {
        Ok(InteractionConfig {
            role1_hue: self.role1_hue()?,
            role2_hue: self.role2_hue,
            cost_model: self.model,
            companion_mode: if self.unlocked {
                CompanionMode::Independent
            } else {
                CompanionMode::Locked
            },
            initial_tradeoff: self.tradeoff,
            swapped: self.swap,
        })
    }
}
