//! Single-character marker search-and-replace over incoming grid lines.

use crate::error::MarkerError;
use quadrille_core::Vector;
use smallvec::SmallVec;

/// Locates a marker character in raw grid lines, recording where it was
/// found and erasing it from the returned line.
///
/// One scanner instance covers one grid-construction pass: feed each raw
/// line through [`scan_line`](MarkerScanner::scan_line) before pushing it
/// into a grid, then read the collected positions — typically via
/// [`single_result`](MarkerScanner::single_result) when exactly one marker
/// (a start tile, say) is expected.
///
/// # Examples
///
/// ```
/// use quadrille_core::Vector;
/// use quadrille_grid::MarkerScanner;
///
/// let mut scanner = MarkerScanner::with_max_count('S', '.', 1);
/// assert_eq!(scanner.scan_line("..S..", 0)?, ".....");
/// assert_eq!(scanner.scan_line(".....", 1)?, ".....");
/// assert_eq!(scanner.single_result()?, Vector::new(2, 0));
/// # Ok::<(), quadrille_grid::MarkerError>(())
/// ```
#[derive(Clone, Debug)]
pub struct MarkerScanner {
    search: char,
    replace: char,
    max_count: Option<usize>,
    // Inline capacity 2: the common case is a single start marker.
    found: SmallVec<[Vector; 2]>,
}

impl MarkerScanner {
    /// A scanner with no limit on the number of occurrences.
    pub fn new(search: char, replace: char) -> Self {
        Self {
            search,
            replace,
            max_count: None,
            found: SmallVec::new(),
        }
    }

    /// A scanner that fails as soon as more than `max_count` occurrences
    /// would be recorded across all scanned lines.
    pub fn with_max_count(search: char, replace: char, max_count: usize) -> Self {
        Self {
            max_count: Some(max_count),
            ..Self::new(search, replace)
        }
    }

    /// The marker character this scanner searches for.
    pub fn search_char(&self) -> char {
        self.search
    }

    /// The character written in place of each found marker.
    pub fn replace_char(&self) -> char {
        self.replace
    }

    /// All positions recorded so far, in discovery order.
    pub fn positions(&self) -> &[Vector] {
        &self.found
    }

    /// Scan one raw line, recording and erasing every marker occurrence.
    ///
    /// `y` is the row index the line will occupy in the grid; each
    /// occurrence is recorded as `(character_index, y)` — character index,
    /// not byte offset, so the positions are valid cell coordinates for
    /// non-ASCII lines too.
    ///
    /// Occurrences are processed left to right, and the count limit is
    /// checked per occurrence *before* it is recorded: a line can fail
    /// midway with the earlier occurrences already recorded. Returns the
    /// line with every occurrence replaced; all other characters and the
    /// character length are preserved.
    pub fn scan_line(&mut self, line: &str, y: i32) -> Result<String, MarkerError> {
        let mut out = String::with_capacity(line.len());
        for (x, ch) in line.chars().enumerate() {
            if ch != self.search {
                out.push(ch);
                continue;
            }
            if let Some(limit) = self.max_count {
                if self.found.len() + 1 > limit {
                    return Err(MarkerError::TooManyMatches {
                        marker: self.search,
                        limit,
                    });
                }
            }
            self.found.push(Vector::new(x as i32, y));
            out.push(self.replace);
        }
        Ok(out)
    }

    /// The single recorded position.
    ///
    /// The expected terminal call after scanning all lines when exactly one
    /// marker is expected; zero or several recorded positions is a caller
    /// error.
    pub fn single_result(&self) -> Result<Vector, MarkerError> {
        match self.found.as_slice() {
            [only] => Ok(*only),
            _ => Err(MarkerError::WrongMatchCount {
                marker: self.search,
                found: self.found.len(),
            }),
        }
    }
}
