//! End-to-end board generation
//!
//! Runs one single-owner pass: sample the image, allocate units per color,
//! pick the primary color, place every unit, then project the slots onto
//! container coordinates. Each pass builds its own statistics and matrix,
//! and all randomness comes from the caller's source.

use crate::budget::allocator::{allocate_all, round_budget, split_budget};
use crate::budget::{ColorUnitSet, UnitId, UnitQuota};
use crate::io::error::Result;
use crate::layout::{LayoutProjector, PhysicalPosition, Projection};
use crate::palette::{ColorClassifier, Palette};
use crate::pipeline::config::GenerationConfig;
use crate::placement::{
    PlacedUnit, PlacementEngine, RandomSource, SlotMatrix, select_primary,
};
use crate::sampling::{BlockPlacement, ColorStat, GridSampler, PixelSurface};
use log::{info, warn};

/// Everything produced by one generation pass
#[derive(Debug, Clone)]
pub struct Generation {
    /// Matched cells per label
    pub totals: ColorStat,
    /// Matched border cells per label
    pub edge_totals: ColorStat,
    /// Board block events
    pub blocks: Vec<BlockPlacement>,
    /// Color placed by priority, `None` when no border cell matched
    pub primary: Option<String>,
    /// Generated units grouped by color
    pub units: ColorUnitSet,
    /// Slot matrix column count
    pub columns: usize,
    /// Slot matrix row count
    pub rows: usize,
    /// Slot assignments in placement order
    pub placed: Vec<PlacedUnit>,
    /// Container coordinates in row-major slot order
    pub positions: Vec<PhysicalPosition>,
    /// Units that found no slot
    pub dropped: Vec<UnitId>,
    /// Highest occupied unit row
    pub last_active_row: usize,
    /// Container height for the unit layout
    pub bounding_height: f32,
}

impl Generation {
    /// Number of placed units
    pub fn placed_count(&self) -> usize {
        self.placed.len()
    }

    /// Number of units left unplaced
    pub fn dropped_count(&self) -> usize {
        self.dropped.len()
    }

    /// Number of units generated
    pub fn total_units(&self) -> usize {
        self.units.total_units()
    }

    /// Quota of a placed or dropped unit
    pub fn unit(&self, id: UnitId) -> Option<&UnitQuota> {
        self.units.get(id)
    }

    /// Labels per slot as `grid[row][col]`
    pub fn slot_labels(&self) -> Vec<Vec<Option<&str>>> {
        let mut grid = vec![vec![None; self.columns]; self.rows];
        for placed in &self.placed {
            let label = self.unit(placed.unit).map(|quota| quota.label.as_str());
            if let Some(slot) = grid
                .get_mut(placed.row)
                .and_then(|row| row.get_mut(placed.col))
            {
                *slot = label;
            }
        }
        grid
    }
}

/// Turns images into board layouts
#[derive(Debug, Clone)]
pub struct LevelGenerator {
    sampler: GridSampler,
    projector: LayoutProjector,
    config: GenerationConfig,
}

impl LevelGenerator {
    /// Create a generator for a palette and validated configuration
    ///
    /// # Errors
    ///
    /// Returns an error if the configuration fails validation
    pub fn new(palette: Palette, config: GenerationConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self {
            sampler: GridSampler::new(ColorClassifier::new(palette), config.block_spacing),
            projector: LayoutProjector::new(config.unit_spacing_x, config.unit_spacing_y)
                .with_margin(config.bounding_margin),
            config,
        })
    }

    /// Configuration in use
    pub const fn config(&self) -> &GenerationConfig {
        &self.config
    }

    /// Run one full generation pass over `image`
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The image has a zero dimension
    /// - The column policy resolves to zero columns
    pub fn generate<S, R>(&self, image: &S, rng: &mut R) -> Result<Generation>
    where
        S: PixelSurface + ?Sized,
        R: RandomSource + ?Sized,
    {
        let config = &self.config;
        let report = self
            .sampler
            .sample(image, config.grid_width, config.grid_height)?;
        let columns = config.column_policy.columns(config.difficulty, rng)?;
        let engine = PlacementEngine::new(columns, config.difficulty)?;

        let Some(primary) = select_primary(&report.edge_totals) else {
            warn!("No border cell matched the palette; skipping unit placement");
            let projection = self.projector.project(&SlotMatrix::new(columns, 0));
            return Ok(Generation {
                totals: report.totals,
                edge_totals: report.edge_totals,
                blocks: report.blocks,
                primary: None,
                units: ColorUnitSet::new(),
                columns,
                rows: 0,
                placed: Vec::new(),
                positions: projection.positions,
                dropped: Vec::new(),
                last_active_row: projection.last_active_row,
                bounding_height: projection.bounding_height,
            });
        };
        info!(
            "Primary color '{primary}' with {} border cells",
            report.edge_totals.get(&primary)
        );

        let mut units = allocate_all(&report.totals);
        if config.pad_primary {
            pad_primary_units(&mut units, &report.totals, &primary, columns);
        }

        let rows = config.row_policy.rows(units.total_units(), columns);
        let outcome = engine.place(
            units.units_of(&primary),
            units.units_excluding(Some(&primary)),
            rows,
            rng,
        );
        let Projection {
            positions,
            last_active_row,
            bounding_height,
        } = self.projector.project(&outcome.matrix);

        info!(
            "Placed {} of {} units into {columns}x{rows} slots",
            outcome.placed_count(),
            units.total_units()
        );

        Ok(Generation {
            totals: report.totals,
            edge_totals: report.edge_totals,
            blocks: report.blocks,
            primary: Some(primary),
            units,
            columns,
            rows,
            placed: outcome.placed,
            positions,
            dropped: outcome.dropped,
            last_active_row,
            bounding_height,
        })
    }
}

/// Grow the primary color's units so the unit total fills whole rows
///
/// The primary budget is re-split across the larger count, so each unit
/// carries less; splits that bottom out at one increment per unit can push
/// the primary total above its rounded budget.
pub fn pad_primary_units(
    units: &mut ColorUnitSet,
    totals: &ColorStat,
    primary: &str,
    columns: usize,
) {
    if columns == 0 {
        return;
    }
    let remainder = units.total_units() % columns;
    if remainder == 0 {
        return;
    }

    let count = units.units_of(primary).len() + columns - remainder;
    let budget = round_budget(totals.get(primary));
    units.replace(primary, split_budget(primary, budget, count));
}

#[cfg(test)]
#[path = "../../tests/unit/pipeline/generator.rs"]
mod unit_tests;
