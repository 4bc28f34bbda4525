//! Word search over a `Board`.
//!
//! The search is a level-synchronous frontier expansion: the frontier starts as
//! one single-cell path per occurrence of the word's first letter, and each
//! following letter replaces it with every extension of a frontier path onto an
//! adjacent, not-yet-used cell holding that letter. The word is on the board iff
//! the frontier survives the last letter.
//!
//! The number of live paths can grow exponentially with the word length on
//! boards with many repeated letters. `SearchBudget` caps the number of paths
//! one search may create.
use crate::engine::{Board, Position};
use log::{debug, trace};

/// Upper bound on the number of candidate paths a single search may create.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct SearchBudget {
    max_paths: Option<u64>,
}

impl SearchBudget {
    /// No limit; the search always runs to completion.
    pub fn unlimited() -> Self {
        SearchBudget { max_paths: None }
    }

    /// Allows at most `limit` candidate paths (seeds included) to be created.
    pub fn max_paths(limit: u64) -> Self {
        SearchBudget {
            max_paths: Some(limit),
        }
    }

    fn is_exhausted(&self, created: u64) -> bool {
        self.max_paths.is_some_and(|limit| created >= limit)
    }
}

/// Result of a budgeted search.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum SearchOutcome {
    /// The word can be traced; holds one witness path, first letter first.
    Found(Vec<Position>),
    /// The search completed and no path spells the word.
    NotFound,
    /// The budget ran out before the search could decide.
    BudgetExhausted { expanded: u64 },
}

impl SearchOutcome {
    pub fn is_found(&self) -> bool {
        matches!(self, SearchOutcome::Found(_))
    }
}

impl Board {
    /// Returns true if `target` can be traced on the board by moving between
    /// horizontally, vertically or diagonally adjacent cells without reusing a
    /// cell.
    ///
    /// Letters are compared exactly (no case folding). An empty `target` is
    /// never found.
    ///
    /// # Examples
    /// ```
    /// use boggle_solver::utils::board_from_str_array;
    /// let board = board_from_str_array(&["ILAW", "BNGE", "IUAO", "ASRL"]).unwrap();
    /// assert!(board.contains("BINGO"));
    /// assert!(!board.contains("BUNGIE"));
    /// assert!(!board.contains(""));
    /// ```
    pub fn contains(&self, target: &str) -> bool {
        self.find_path(target).is_some()
    }

    /// Like `contains`, but returns a witness path for `target` when one exists.
    ///
    /// When several paths spell the word, the one returned is the first found
    /// when seeds are taken in row-major order.
    pub fn find_path(&self, target: &str) -> Option<Vec<Position>> {
        match self.search(target, SearchBudget::unlimited()) {
            SearchOutcome::Found(path) => Some(path),
            _ => None,
        }
    }

    /// Runs the frontier search for `target` under `budget`.
    ///
    /// With `SearchBudget::unlimited()` the outcome is never `BudgetExhausted`
    /// and agrees with `contains`.
    pub fn search(&self, target: &str, budget: SearchBudget) -> SearchOutcome {
        let letters: Vec<char> = target.chars().collect();
        let Some((&first, rest)) = letters.split_first() else {
            return SearchOutcome::NotFound;
        };

        // A path visits each cell at most once.
        if letters.len() > self.cell_count() {
            debug!(
                "'{}' has {} letters but the board only has {} cells",
                target,
                letters.len(),
                self.cell_count()
            );
            return SearchOutcome::NotFound;
        }
        if let Some(missing) = letters.iter().find(|&&c| self.positions_of(c).is_empty()) {
            debug!("'{}' needs '{}', which is not on the board", target, missing);
            return SearchOutcome::NotFound;
        }

        // Every occurrence of the first letter seeds a single-cell path.
        let mut expanded: u64 = 0;
        let mut candidates: Vec<Vec<Position>> = Vec::new();
        for &pos in self.positions_of(first) {
            if budget.is_exhausted(expanded) {
                return SearchOutcome::BudgetExhausted { expanded };
            }
            expanded += 1;
            candidates.push(vec![pos]);
        }
        trace!("level 0: '{}' -> {} candidate paths", first, candidates.len());

        for (step, &letter) in rest.iter().enumerate() {
            let is_last = step + 1 == rest.len();
            let mut next_candidates = Vec::new();

            for path in &candidates {
                let Some(&tail) = path.last() else {
                    continue;
                };
                for neighbor in self.neighbors(tail) {
                    // Wrong letter, or the cell is already part of this path.
                    if self.get_letter(neighbor) != letter || path.contains(&neighbor) {
                        continue;
                    }
                    if budget.is_exhausted(expanded) {
                        debug!("budget exhausted on '{}' after {} paths", target, expanded);
                        return SearchOutcome::BudgetExhausted { expanded };
                    }
                    expanded += 1;

                    let mut extended = Vec::with_capacity(path.len() + 1);
                    extended.extend_from_slice(path);
                    extended.push(neighbor);
                    // No later letter can prune it, so the first full path wins.
                    if is_last {
                        debug!("found '{}' after {} paths", target, expanded);
                        return SearchOutcome::Found(extended);
                    }
                    next_candidates.push(extended);
                }
            }

            trace!(
                "level {}: '{}' -> {} candidate paths",
                step + 1,
                letter,
                next_candidates.len()
            );
            if next_candidates.is_empty() {
                debug!(
                    "'{}' dead-ends at letter {} after {} paths",
                    target,
                    step + 1,
                    expanded
                );
                return SearchOutcome::NotFound;
            }
            candidates = next_candidates;
        }

        // Only single-letter targets reach this point.
        candidates
            .into_iter()
            .next()
            .map_or(SearchOutcome::NotFound, SearchOutcome::Found)
    }

    /// Returns true if `path` is a valid trace of `target`: same length, no cell
    /// used twice, consecutive cells adjacent, and the letters match in order.
    pub fn is_witness(&self, path: &[Position], target: &str) -> bool {
        let letters: Vec<char> = target.chars().collect();
        if path.is_empty() || path.len() != letters.len() {
            return false;
        }
        let in_bounds = path
            .iter()
            .all(|p| p.col < self.width() && p.row < self.height());
        if !in_bounds {
            return false;
        }
        let distinct = path
            .iter()
            .enumerate()
            .all(|(i, p)| !path[..i].contains(p));
        let connected = path.windows(2).all(|pair| pair[0].is_adjacent(&pair[1]));
        let spelled = path
            .iter()
            .zip(&letters)
            .all(|(&p, &c)| self.get_letter(p) == c);
        distinct && connected && spelled
    }
}
