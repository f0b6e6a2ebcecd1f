//! Plain-text report of a generation pass

use crate::pipeline::Generation;
use std::fmt;

const VACANT: &str = ".";

/// Displays totals, unit budgets and the occupied slot rows of one board
pub struct BoardSummary<'a> {
    name: &'a str,
    generation: &'a Generation,
}

impl<'a> BoardSummary<'a> {
    /// Summary titled `name`
    pub const fn new(name: &'a str, generation: &'a Generation) -> Self {
        Self { name, generation }
    }

    fn write_totals(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let generation = self.generation;
        writeln!(f, "  totals:")?;
        if generation.totals.is_empty() {
            return writeln!(f, "    (no matched cells)");
        }
        for (label, count) in generation.totals.iter() {
            writeln!(
                f,
                "    {label}: {count} cells, {} on edge",
                generation.edge_totals.get(label)
            )?;
        }
        Ok(())
    }

    fn write_units(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "  units:")?;
        for (label, ids) in self.generation.units.groups() {
            let bullets: Vec<String> = ids
                .iter()
                .filter_map(|&id| self.generation.unit(id))
                .map(|quota| quota.bullets.to_string())
                .collect();
            writeln!(f, "    {label}: [{}]", bullets.join(", "))?;
        }
        Ok(())
    }

    fn write_matrix(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let generation = self.generation;
        if generation.placed.is_empty() {
            return Ok(());
        }

        let grid = generation.slot_labels();
        let width = grid
            .iter()
            .flatten()
            .map(|label| label.unwrap_or(VACANT).len())
            .max()
            .unwrap_or(1);

        writeln!(f, "  matrix:")?;
        for row in grid.iter().take(generation.last_active_row + 1) {
            let cells: Vec<String> = row
                .iter()
                .map(|label| format!("{:<width$}", label.unwrap_or(VACANT)))
                .collect();
            writeln!(f, "    {}", cells.join(" | ").trim_end())?;
        }
        Ok(())
    }
}

impl fmt::Display for BoardSummary<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let generation = self.generation;
        writeln!(f, "{}", self.name)?;
        match &generation.primary {
            Some(primary) => writeln!(
                f,
                "  primary: {primary} ({} edge cells)",
                generation.edge_totals.get(primary)
            )?,
            None => writeln!(f, "  primary: none")?,
        }
        writeln!(
            f,
            "  slots: {}x{}, placed {}, dropped {}, height {}",
            generation.columns,
            generation.rows,
            generation.placed_count(),
            generation.dropped_count(),
            generation.bounding_height
        )?;
        self.write_totals(f)?;
        self.write_units(f)?;
        self.write_matrix(f)
    }
}

#[cfg(test)]
#[path = "../../tests/unit/io/summary.rs"]
mod unit_tests;
