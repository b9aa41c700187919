//! Board state and per-step outcome reporting.

use quilt_core::VariantId;

/// The solver's state machine.
///
/// `Resolved` and `Contradiction` are terminal; only
/// [`Board::reset`](crate::Board::reset) leaves them.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum BoardState {
    /// At least one cell is uncollapsed and no domain is empty.
    Running,
    /// Every cell is collapsed.
    Resolved,
    /// Some cell's domain was reduced to empty.
    Contradiction,
}

/// Result of a single [`Board::step`](crate::Board::step).
///
/// Both terminal variants are ordinary control-flow values the driver
/// must branch on; typically a `Contradiction` is answered with
/// [`Board::reset`](crate::Board::reset).
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum StepOutcome {
    /// One cell collapsed and propagation completed; uncollapsed cells
    /// remain.
    Progressed(StepReport),
    /// The board is fully collapsed, either before this step or by it.
    Resolved,
    /// Some domain was reduced to empty, either before this step or by
    /// it.
    Contradiction,
}

/// What a progressing step did, for telemetry and overlays.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct StepReport {
    /// Row of the collapsed cell.
    pub row: usize,
    /// Column of the collapsed cell.
    pub col: usize,
    /// The variant the cell collapsed to.
    pub variant: VariantId,
    /// Domain entries removed during the step, counting the collapse
    /// itself, any depletion sweep, and all propagation narrowing.
    pub reductions: u64,
    /// Cells processed by the propagation worklist.
    pub visited: u64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn terminal_states_are_distinct() {
        assert_ne!(BoardState::Resolved, BoardState::Contradiction);
        assert_ne!(BoardState::Running, BoardState::Resolved);
    }

    #[test]
    fn report_is_copyable_into_outcome() {
        let report = StepReport {
            row: 1,
            col: 2,
            variant: VariantId(3),
            reductions: 4,
            visited: 5,
        };
        let outcome = StepOutcome::Progressed(report);
        assert_eq!(outcome, StepOutcome::Progressed(report));
    }
}
