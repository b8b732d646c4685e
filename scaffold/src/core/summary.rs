//! Day outcome classification and run tallying.

/// How a single day's generation changed the filesystem.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DayOutcome {
    /// The day directory did not exist and was created.
    Created,
    /// The directory already existed and at least one file was added.
    Updated,
    /// Directory and every templated file were already present.
    Unchanged,
}

impl DayOutcome {
    /// Classify one generation pass. Creation and update are mutually
    /// exclusive for the tally, with creation taking priority: a day whose
    /// directory was just created counts as created even when files were
    /// also written into it.
    pub fn classify(created_dir: bool, wrote_files: bool) -> Self {
        if created_dir {
            Self::Created
        } else if wrote_files {
            Self::Updated
        } else {
            Self::Unchanged
        }
    }
}

/// Created/updated tally for a full run, folded over day outcomes.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Summary {
    pub created: u32,
    pub updated: u32,
}

impl Summary {
    /// Fold one day outcome into the tally.
    pub fn record(mut self, outcome: DayOutcome) -> Self {
        match outcome {
            DayOutcome::Created => self.created += 1,
            DayOutcome::Updated => self.updated += 1,
            DayOutcome::Unchanged => {}
        }
        self
    }
}
