//! Interaction state: per-bucket tradeoffs, the active selection and the
//! pointer drag mode.
//!
//! [`Interaction`] is the only owner of mutable state. The frontier builder,
//! resolver and painter read it through accessors; every tradeoff write goes
//! through a gesture transition below. Each transition returns `true` when
//! the view needs a redraw, after the state change is complete.

use log::debug;

use crate::bucket::{bucket_index_of, hue_degree, hue_of_bucket, normalize_hue, BUCKET_COUNT, BUCKET_STEP};
use crate::frontier::{clamp_separation, compute_pareto, CostModel, Frontier, MAX_SEPARATION};
use crate::gamut::{Shade, ShadeTable};
use crate::layout::{Point, StripLayout};
use crate::resolve::{companion_on, Companion};

/// Whether role 2 follows the frontier or is set independently.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CompanionMode {
    Locked,
    Independent,
}

impl CompanionMode {
    pub fn toggled(self) -> Self {
        match self {
            CompanionMode::Locked => CompanionMode::Independent,
            CompanionMode::Independent => CompanionMode::Locked,
        }
    }
}

/// The single pointer drag in progress, if any.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DragMode {
    Idle,
    DraggingGraphHandle,
    DraggingBucketSlider(usize),
}

/// What an idle pointer is over. Only drives highlighting.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HoverTarget {
    None,
    Bucket(usize),
    Slider(usize),
    Plot,
    ModelToggle,
}

/// One base-hue bucket with its cached shades.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HueBucket {
    pub hue: f32,
    pub bright: Shade,
    pub dark: Shade,
    tradeoff: u16,
}

impl HueBucket {
    /// Minimum hue separation demanded for this bucket, `0..=180`.
    pub fn tradeoff(&self) -> u16 {
        self.tradeoff
    }
}

/// Role colors currently shown.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Selection {
    pub role1_hue: f32,
    pub role2_hue: f32,
    pub companion_mode: CompanionMode,
    pub cost_model: CostModel,
    /// Swap the P1/P2 labels without touching the colors.
    pub swapped: bool,
}

/// Startup settings for [`Interaction`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct InteractionConfig {
    pub role1_hue: f32,
    /// Role-2 hue used while unlocked.
    pub role2_hue: Option<f32>,
    pub cost_model: CostModel,
    pub companion_mode: CompanionMode,
    pub initial_tradeoff: u16,
    pub swapped: bool,
}

impl Default for InteractionConfig {
    fn default() -> Self {
        Self {
            role1_hue: 0.0,
            role2_hue: None,
            cost_model: CostModel::ChromaOnly,
            companion_mode: CompanionMode::Locked,
            initial_tradeoff: MAX_SEPARATION,
            swapped: false,
        }
    }
}

pub struct Interaction {
    shades: ShadeTable,
    buckets: Vec<HueBucket>,
    selection: Selection,
    drag: DragMode,
    hover: HoverTarget,
    layout: StripLayout,
}

impl Interaction {
    pub fn new(config: InteractionConfig, layout: StripLayout) -> Self {
        Self::with_shades(ShadeTable::new(), config, layout)
    }

    /// Build around an existing shade table.
    pub fn with_shades(shades: ShadeTable, config: InteractionConfig, layout: StripLayout) -> Self {
        let tradeoff = config.initial_tradeoff.min(MAX_SEPARATION);
        let buckets = (0..BUCKET_COUNT)
            .map(|i| {
                let hue = hue_of_bucket(i);
                HueBucket {
                    hue,
                    bright: shades.bright(hue),
                    dark: shades.dark(hue),
                    tradeoff,
                }
            })
            .collect();

        let role1_hue = normalize_hue(config.role1_hue);
        let role2_hue = normalize_hue(config.role2_hue.unwrap_or(role1_hue + 180.0));
        let mut interaction = Self {
            shades,
            buckets,
            selection: Selection {
                role1_hue,
                role2_hue,
                companion_mode: config.companion_mode,
                cost_model: config.cost_model,
                swapped: config.swapped,
            },
            drag: DragMode::Idle,
            hover: HoverTarget::None,
            layout,
        };
        interaction.rederive();
        interaction
    }

    // --- read accessors ---

    pub fn buckets(&self) -> &[HueBucket] {
        &self.buckets
    }

    pub fn tradeoff(&self, index: usize) -> u16 {
        self.buckets[index].tradeoff
    }

    pub fn selection(&self) -> &Selection {
        &self.selection
    }

    pub fn selected_bucket(&self) -> usize {
        bucket_index_of(self.selection.role1_hue)
    }

    /// Integer degree of the role-1 hue used for frontier queries.
    pub fn role1_degree(&self) -> u16 {
        hue_degree(self.selection.role1_hue)
    }

    pub fn drag_mode(&self) -> DragMode {
        self.drag
    }

    pub fn hover(&self) -> HoverTarget {
        self.hover
    }

    pub fn shades(&self) -> &ShadeTable {
        &self.shades
    }

    pub fn layout(&self) -> &StripLayout {
        &self.layout
    }

    /// Frontier for the current role-1 hue and cost model.
    pub fn selected_frontier(&self) -> Frontier {
        compute_pareto(
            &self.shades,
            self.selection.role1_hue,
            self.selection.cost_model,
        )
    }

    /// Frontier for bucket `index` under the current cost model.
    pub fn bucket_frontier(&self, index: usize) -> Frontier {
        compute_pareto(
            &self.shades,
            self.buckets[index].hue,
            self.selection.cost_model,
        )
    }

    /// Frontier companion of bucket `index` at its own tradeoff.
    pub fn bucket_companion(&self, index: usize) -> Companion {
        companion_on(
            &self.bucket_frontier(index),
            &self.shades,
            self.buckets[index].tradeoff as f32,
        )
    }

    /// Frontier companion of the current role-1 hue at the selected
    /// bucket's tradeoff.
    pub fn selected_companion(&self) -> Companion {
        companion_on(
            &self.selected_frontier(),
            &self.shades,
            self.tradeoff(self.selected_bucket()) as f32,
        )
    }

    /// Graph handle in normalised plot coordinates:
    /// `(tradeoff / 180, deficit(tradeoff) / plot_scale)`.
    pub fn handle_position(&self) -> (f32, f32) {
        let frontier = self.selected_frontier();
        let tradeoff = self.tradeoff(self.selected_bucket());
        let deficit = frontier.at(tradeoff as f32).deficit;
        (
            tradeoff as f32 / MAX_SEPARATION as f32,
            deficit / frontier.plot_scale(),
        )
    }

    /// Graph handle in surface coordinates.
    pub fn handle_point(&self) -> Point {
        let (fx, fy) = self.handle_position();
        self.layout.plot_point(fx, fy)
    }

    // --- external inputs ---

    /// The surface was resized.
    pub fn set_layout(&mut self, layout: StripLayout) -> bool {
        if self.layout == layout {
            return false;
        }
        self.layout = layout;
        true
    }

    /// Role-color feed: a new role-1 hue from the host.
    pub fn set_role1_hue(&mut self, hue: f32) -> bool {
        self.selection.role1_hue = normalize_hue(hue);
        self.rederive();
        true
    }

    /// Role-2 hue from the host. Ignored while role 2 is locked to the frontier.
    pub fn set_role2_hue(&mut self, hue: f32) -> bool {
        if self.selection.companion_mode == CompanionMode::Locked {
            return false;
        }
        self.selection.role2_hue = normalize_hue(hue);
        true
    }

    /// Wheel: rotate role 1 by one bucket per step.
    pub fn scroll(&mut self, steps: i32) -> bool {
        if steps == 0 {
            return false;
        }
        self.set_role1_hue(self.selection.role1_hue + steps as f32 * BUCKET_STEP)
    }

    pub fn toggle_cost_model(&mut self) -> bool {
        self.selection.cost_model = self.selection.cost_model.toggled();
        debug!("cost model -> {}", self.selection.cost_model);
        self.rederive();
        true
    }

    pub fn toggle_companion_mode(&mut self) -> bool {
        self.selection.companion_mode = self.selection.companion_mode.toggled();
        debug!("companion mode -> {:?}", self.selection.companion_mode);
        self.rederive();
        true
    }

    pub fn toggle_swap(&mut self) -> bool {
        self.selection.swapped = !self.selection.swapped;
        true
    }

    // --- pointer gestures ---

    pub fn pointer_down(&mut self, x: f32, y: f32) -> bool {
        if self.drag != DragMode::Idle {
            // a release was lost; the new press starts over
            self.drag = DragMode::Idle;
        }

        if self.layout.in_toggle(x, y) {
            return self.toggle_cost_model();
        }

        if self.layout.in_plot(x, y) {
            self.drag = DragMode::DraggingGraphHandle;
            debug!("drag start: graph handle");
            let selected = self.selected_bucket();
            self.set_tradeoff(selected, self.layout.separation_from_plot(x));
            return true;
        }

        if let Some(index) = self.layout.slider_at(x, y) {
            self.drag = DragMode::DraggingBucketSlider(index);
            debug!("drag start: slider {index}");
            self.set_tradeoff(index, self.layout.separation_from_slider(y));
            return true;
        }

        if let Some(index) = self.layout.bucket_at(x, y) {
            self.select_bucket(index);
            return true;
        }

        false
    }

    pub fn pointer_move(&mut self, x: f32, y: f32) -> bool {
        match self.drag {
            DragMode::DraggingGraphHandle => {
                let selected = self.selected_bucket();
                self.set_tradeoff(selected, self.layout.separation_from_plot(x))
            }
            DragMode::DraggingBucketSlider(index) => {
                self.set_tradeoff(index, self.layout.separation_from_slider(y))
            }
            DragMode::Idle => {
                let hover = self.hover_target_at(x, y);
                let changed = hover != self.hover;
                self.hover = hover;
                changed
            }
        }
    }

    pub fn pointer_up(&mut self) -> bool {
        if self.drag == DragMode::Idle {
            return false;
        }
        debug!("drag end: {:?}", self.drag);
        self.drag = DragMode::Idle;
        true
    }

    // --- internals ---

    fn hover_target_at(&self, x: f32, y: f32) -> HoverTarget {
        if self.layout.in_plot(x, y) {
            HoverTarget::Plot
        } else if self.layout.in_toggle(x, y) {
            HoverTarget::ModelToggle
        } else if let Some(index) = self.layout.slider_at(x, y) {
            HoverTarget::Slider(index)
        } else if let Some(index) = self.layout.bucket_at(x, y) {
            HoverTarget::Bucket(index)
        } else {
            HoverTarget::None
        }
    }

    fn select_bucket(&mut self, index: usize) {
        debug_assert!(index < BUCKET_COUNT);
        self.selection.role1_hue = self.buckets[index].hue;
        debug!("selected bucket {index} ({} deg)", self.selection.role1_hue);
        self.rederive();
    }

    /// Store a tradeoff and re-derive role 2 if it belongs to the selection.
    fn set_tradeoff(&mut self, index: usize, separation: u16) -> bool {
        debug_assert!(index < BUCKET_COUNT);
        let separation = clamp_separation(separation as f32);
        if self.buckets[index].tradeoff == separation {
            return false;
        }
        self.buckets[index].tradeoff = separation;
        if index == self.selected_bucket() {
            self.rederive();
        }
        true
    }

    /// Recompute the role-2 hue when it is locked to the frontier.
    fn rederive(&mut self) {
        if self.selection.companion_mode == CompanionMode::Locked {
            let companion = self.selected_companion();
            self.selection.role2_hue = companion.hue as f32;
        }
    }
}

#[cfg(test)]
mod tests {
    use std::sync::OnceLock;

    use super::*;
    use crate::bucket::hue_distance;

    fn shades() -> ShadeTable {
        static TABLE: OnceLock<ShadeTable> = OnceLock::new();
        TABLE.get_or_init(ShadeTable::new).clone()
    }

    fn interaction(config: InteractionConfig) -> Interaction {
        Interaction::with_shades(shades(), config, StripLayout::default())
    }

    fn slider_point(layout: &StripLayout, index: usize, separation: u16) -> (f32, f32) {
        let x = layout.column_rect(layout.slider, index).center().x;
        (x, layout.slider_y(separation))
    }

    #[test]
    fn starts_idle_with_derived_companion() {
        let state = interaction(InteractionConfig::default());
        assert_eq!(state.drag_mode(), DragMode::Idle);
        assert_eq!(state.selected_bucket(), 0);
        assert!(state.buckets().iter().all(|b| b.tradeoff() == 180));
        assert_eq!(state.selection().role2_hue, 180.0);
    }

    #[test]
    fn clicking_a_bucket_selects_it() {
        let mut state = interaction(InteractionConfig::default());
        let layout = *state.layout();
        let center = layout.column_rect(layout.bands.p2_bright, 12).center();

        assert!(state.pointer_down(center.x, center.y));
        assert_eq!(state.selected_bucket(), 12);
        assert_eq!(state.selection().role1_hue, 120.0);
        assert_eq!(state.drag_mode(), DragMode::Idle);
        assert_eq!(state.selection().role2_hue, 300.0);
    }

    #[test]
    fn dragging_a_slider_updates_only_that_bucket() {
        let mut state = interaction(InteractionConfig::default());
        let layout = *state.layout();
        let role2_before = state.selection().role2_hue;

        let (x, y) = slider_point(&layout, 5, 90);
        assert!(state.pointer_down(x, y));
        assert_eq!(state.drag_mode(), DragMode::DraggingBucketSlider(5));
        assert_eq!(state.tradeoff(5), 90);

        state.pointer_move(x + 40.0, layout.slider_y(30));
        assert_eq!(state.tradeoff(5), 30);

        for (i, bucket) in state.buckets().iter().enumerate() {
            if i != 5 {
                assert_eq!(bucket.tradeoff(), 180, "bucket {i} changed");
            }
        }
        assert_eq!(state.selection().role2_hue, role2_before);

        assert!(state.pointer_up());
        assert_eq!(state.drag_mode(), DragMode::Idle);
        assert!(!state.pointer_up());
    }

    #[test]
    fn dragging_the_selected_slider_rederives() {
        let mut state = interaction(InteractionConfig::default());
        let layout = *state.layout();

        let (x, y) = slider_point(&layout, 0, 0);
        state.pointer_down(x, y);
        assert_eq!(state.tradeoff(0), 0);
        assert_eq!(state.selection().role2_hue, 0.0);
    }

    #[test]
    fn slider_drag_clamps_past_the_track() {
        let mut state = interaction(InteractionConfig::default());
        let layout = *state.layout();
        let (x, y) = slider_point(&layout, 3, 60);
        state.pointer_down(x, y);

        state.pointer_move(x, layout.slider.y - 50.0);
        assert_eq!(state.tradeoff(3), 0);
        state.pointer_move(x, layout.slider.bottom() + 50.0);
        assert_eq!(state.tradeoff(3), 180);
    }

    #[test]
    fn graph_drag_targets_the_selected_bucket() {
        let mut state = interaction(InteractionConfig {
            role1_hue: 240.0,
            ..Default::default()
        });
        let layout = *state.layout();
        let selected = state.selected_bucket();
        assert_eq!(selected, 24);

        let y = layout.plot.center().y;
        assert!(state.pointer_down(layout.plot.x, y));
        assert_eq!(state.drag_mode(), DragMode::DraggingGraphHandle);
        assert_eq!(state.tradeoff(selected), 0);

        state.pointer_move(layout.plot.center().x, y);
        assert_eq!(state.tradeoff(selected), 90);
        let changed = state
            .buckets()
            .iter()
            .enumerate()
            .filter(|(_, b)| b.tradeoff() != 180)
            .count();
        assert_eq!(changed, 1);

        let (fx, fy) = state.handle_position();
        let frontier = state.selected_frontier();
        assert_eq!(fx, 0.5);
        assert_eq!(fy, frontier.at(90.0).deficit / frontier.plot_scale());
        assert_eq!(state.selection().role2_hue, frontier.at(90.0).companion_hue as f32);

        state.pointer_up();
        assert_eq!(state.drag_mode(), DragMode::Idle);
    }

    #[test]
    fn handle_follows_selection_changes() {
        let mut state = interaction(InteractionConfig::default());
        let layout = *state.layout();

        let (x, y) = slider_point(&layout, 7, 45);
        state.pointer_down(x, y);
        state.pointer_up();
        assert_eq!(state.handle_position().0, 1.0);

        let center = layout.column_rect(layout.bands.p1_bright, 7).center();
        state.pointer_down(center.x, center.y);
        assert_eq!(state.handle_position().0, 45.0 / 180.0);
        let point = state.handle_point();
        assert_eq!(point.x, layout.plot.x + 0.25 * layout.plot.w);
    }

    #[test]
    fn toggling_model_keeps_tradeoffs() {
        let mut state = interaction(InteractionConfig {
            role1_hue: 120.0,
            initial_tradeoff: 90,
            ..Default::default()
        });
        let before = state.selected_companion();
        let toggle = state.layout().toggle.center();

        assert!(state.pointer_down(toggle.x, toggle.y));
        assert_eq!(state.selection().cost_model, CostModel::ChromaLightness);
        assert!(state.buckets().iter().all(|b| b.tradeoff() == 90));
        assert_eq!(state.drag_mode(), DragMode::Idle);

        let after = state.selected_companion();
        assert!(hue_distance(after.hue as f32, 120.0) >= 90.0);
        assert_ne!(
            (before.bright.lightness, before.bright.chroma),
            (after.bright.lightness, after.bright.chroma)
        );
        assert_eq!(state.selection().role2_hue, after.hue as f32);
    }

    #[test]
    fn hover_changes_only_the_highlight() {
        let mut state = interaction(InteractionConfig::default());
        let layout = *state.layout();
        let center = layout.column_rect(layout.bands.p1_dark, 9).center();
        let selection = *state.selection();

        assert!(state.pointer_move(center.x, center.y));
        assert_eq!(state.hover(), HoverTarget::Bucket(9));
        assert!(!state.pointer_move(center.x, center.y));
        assert_eq!(*state.selection(), selection);
        assert!(state.buckets().iter().all(|b| b.tradeoff() == 180));

        state.pointer_move(layout.plot.center().x, layout.plot.center().y);
        assert_eq!(state.hover(), HoverTarget::Plot);
        state.pointer_move(0.0, 0.0);
        assert_eq!(state.hover(), HoverTarget::None);
    }

    #[test]
    fn unlocked_role2_is_independent() {
        let mut state = interaction(InteractionConfig {
            companion_mode: CompanionMode::Independent,
            role2_hue: Some(42.0),
            ..Default::default()
        });
        assert_eq!(state.selection().role2_hue, 42.0);
        assert!(state.set_role2_hue(400.0));
        assert_eq!(state.selection().role2_hue, 40.0);

        let layout = *state.layout();
        let (x, y) = slider_point(&layout, 0, 10);
        state.pointer_down(x, y);
        assert_eq!(state.selection().role2_hue, 40.0);

        state.toggle_companion_mode();
        assert_eq!(state.selection().companion_mode, CompanionMode::Locked);
        assert_eq!(
            state.selection().role2_hue,
            state.selected_companion().hue as f32
        );
        assert!(!state.set_role2_hue(10.0));
    }

    #[test]
    fn role_feed_normalizes_and_rederives() {
        let mut state = interaction(InteractionConfig::default());
        state.set_role1_hue(-30.0);
        assert_eq!(state.selection().role1_hue, 330.0);
        assert_eq!(state.selected_bucket(), 33);
        assert_eq!(state.selection().role2_hue, 150.0);

        state.scroll(4);
        assert_eq!(state.selection().role1_hue, 10.0);
        assert!(!state.scroll(0));
    }

    #[test]
    fn new_press_while_dragging_ends_the_old_drag() {
        let mut state = interaction(InteractionConfig::default());
        let layout = *state.layout();
        let (x, y) = slider_point(&layout, 2, 20);
        state.pointer_down(x, y);
        let (x, y) = slider_point(&layout, 8, 40);
        state.pointer_down(x, y);
        assert_eq!(state.drag_mode(), DragMode::DraggingBucketSlider(8));
        assert_eq!(state.tradeoff(2), 20);
        assert_eq!(state.tradeoff(8), 40);
    }

    #[test]
    fn press_outside_every_region_does_nothing() {
        let mut state = interaction(InteractionConfig::default());
        assert!(!state.pointer_down(1.0, 0.0));
        assert_eq!(state.drag_mode(), DragMode::Idle);
    }
}
