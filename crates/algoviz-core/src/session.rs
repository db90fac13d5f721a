//! One visualizer session: the campus graph, a tree and an array
//!
//! All user-facing input arrives here as raw text and is validated before any
//! engine sees it. A rejected input leaves every engine untouched.

use serde::Serialize;
use tracing::{debug, instrument};

use crate::bst::{Bst, NodeId, SearchOutcome, Traversal, TraversalOrder};
use crate::config::VizConfig;
use crate::error::{Result, VizError};
use crate::graph::{self, campus_graph, Algorithm, Graph, PathResult};
use crate::pacing::PacingConfig;
use crate::sort::SortState;

/// Preset trees offered as one-click samples
pub const SAMPLE_SETS: [[i64; 7]; 3] = [
    [50, 30, 70, 20, 40, 60, 80],
    [100, 50, 150, 25, 75, 125, 175],
    [45, 23, 67, 12, 34, 56, 89],
];

/// A value accepted into the tree and the node that now holds it
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Inserted {
    pub value: i64,
    pub id: NodeId,
}

#[derive(Debug)]
pub struct Session {
    graph: Graph,
    tree: Bst,
    sort: SortState,
    config: VizConfig,
}

impl Session {
    /// Build a session over the campus graph with a random array
    pub fn new(config: VizConfig) -> Result<Self> {
        let sort = SortState::new(config.sort.clone());
        Self::assemble(config, sort)
    }

    /// Same as [`Session::new`] with a reproducible array
    pub fn seeded(config: VizConfig, seed: u64) -> Result<Self> {
        let sort = SortState::seeded(config.sort.clone(), seed);
        Self::assemble(config, sort)
    }

    fn assemble(config: VizConfig, sort: SortState) -> Result<Self> {
        config.validate()?;
        Ok(Self {
            graph: campus_graph()?,
            tree: Bst::with_layout(config.tree),
            sort,
            config,
        })
    }

    pub fn graph(&self) -> &Graph {
        &self.graph
    }

    pub fn tree(&self) -> &Bst {
        &self.tree
    }

    pub fn sort(&self) -> &SortState {
        &self.sort
    }

    /// Mutable array access; a running sort keeps this borrow until it ends
    pub fn sort_mut(&mut self) -> &mut SortState {
        &mut self.sort
    }

    pub fn config(&self) -> &VizConfig {
        &self.config
    }

    pub fn pacing(&self) -> PacingConfig {
        PacingConfig::from_animation(&self.config.animation)
    }

    /// Parse and range-check a value, then insert it
    #[instrument(skip(self))]
    pub fn insert(&mut self, raw: &str) -> Result<NodeId> {
        let value = self.insertable(raw)?;
        Ok(self.tree.insert(value))
    }

    /// Insert every value of a preset, numbered from 1.
    ///
    /// Presets skip the range check; one of them exceeds the default limit.
    pub fn insert_sample(&mut self, number: usize) -> Result<Vec<Inserted>> {
        self.insert_sample_with(number, |_, _| {})
    }

    /// Like [`Session::insert_sample`], calling `after_each` once per insert
    pub fn insert_sample_with<F>(&mut self, number: usize, mut after_each: F) -> Result<Vec<Inserted>>
    where
        F: FnMut(&Bst, Inserted),
    {
        let values = sample_set(number)?;
        debug!(number, "insert_sample");
        Ok(values
            .iter()
            .map(|&value| {
                let inserted = Inserted {
                    value,
                    id: self.tree.insert(value),
                };
                after_each(&self.tree, inserted);
                inserted
            })
            .collect())
    }

    /// Insert several raw values; nothing is inserted unless all are valid
    pub fn insert_many<S: AsRef<str>>(&mut self, raws: &[S]) -> Result<Vec<Inserted>> {
        let values = raws
            .iter()
            .map(|raw| self.insertable(raw.as_ref()))
            .collect::<Result<Vec<i64>>>()?;
        let ids = self.tree.insert_all(&values);
        Ok(values
            .into_iter()
            .zip(ids)
            .map(|(value, id)| Inserted { value, id })
            .collect())
    }

    /// Search for any integer
    pub fn search(&self, raw: &str) -> Result<SearchOutcome> {
        let value = parse_integer(raw, "search value")?;
        Ok(self.tree.search(value))
    }

    pub fn traverse(&self, order: TraversalOrder) -> Traversal<'_> {
        self.tree.traverse(order)
    }

    pub fn clear_tree(&mut self) {
        self.tree.clear();
    }

    pub fn find_path(&self, start: &str, dest: &str, algorithm: Algorithm) -> Result<PathResult> {
        graph::find_path(&self.graph, algorithm, start, dest)
    }

    /// Resize and regenerate the array
    pub fn resize_array(&mut self, size: usize) -> Result<()> {
        self.sort.resize(size)
    }

    pub fn reset_array(&mut self) {
        self.sort.reset();
    }

    /// Replace the array with fixed input, keeping the configured limits
    pub fn load_array(&mut self, values: Vec<i64>) -> Result<()> {
        let limits = &self.config.sort;
        if !(limits.min_size..=limits.max_size).contains(&values.len()) {
            return Err(VizError::invalid_value(
                "array size",
                format!(
                    "{} (expected {}..={})",
                    values.len(),
                    limits.min_size,
                    limits.max_size
                ),
            ));
        }
        if let Some(bad) = values
            .iter()
            .find(|v| !(limits.min_value..=limits.max_value).contains(*v))
        {
            return Err(VizError::invalid_value(
                "array element",
                format!(
                    "{} (expected {}..={})",
                    bad, limits.min_value, limits.max_value
                ),
            ));
        }
        self.sort.load(values);
        Ok(())
    }

    fn insertable(&self, raw: &str) -> Result<i64> {
        let (min, max) = (self.config.bst.min_value, self.config.bst.max_value);
        let value = parse_integer(raw, "bst value")?;
        if !(min..=max).contains(&value) {
            return Err(VizError::invalid_value(
                "bst value",
                format!("{} (expected a number between {} and {})", value, min, max),
            ));
        }
        Ok(value)
    }
}

/// Preset values by 1-based number
pub fn sample_set(number: usize) -> Result<&'static [i64]> {
    number
        .checked_sub(1)
        .and_then(|i| SAMPLE_SETS.get(i))
        .map(|set| set.as_slice())
        .ok_or_else(|| {
            VizError::invalid_value(
                "sample set",
                format!("{} (expected 1..={})", number, SAMPLE_SETS.len()),
            )
        })
}

/// Parse trimmed text as an integer, naming `context` in the error
pub fn parse_integer(raw: &str, context: &str) -> Result<i64> {
    let trimmed = raw.trim();
    trimmed
        .parse::<i64>()
        .map_err(|_| VizError::invalid_value(context, format!("{:?} is not an integer", trimmed)))
}
