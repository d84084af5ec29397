use slotmap::SlotMap;

use crate::geometry::{Direction, DirectionArc};

slotmap::new_key_type! {
    /// Unique identifier for a cell in the coverage arrangement.
    struct CellKey;
}

/// Coverage state of one cell of the circle of directions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Depth {
    /// No forbidden arc covers the cell.
    Unblocked,
    /// Exactly one forbidden arc covers the cell; the payload is the index
    /// of the blocking edge.
    SingleBlocker(usize),
    /// Two or more forbidden arcs cover the cell. Saturating: the blockers
    /// are no longer tracked.
    MultiplyBlocked,
}

impl Depth {
    fn deepen(&mut self, edge: usize) {
        *self = match *self {
            Self::Unblocked => Self::SingleBlocker(edge),
            Self::SingleBlocker(_) | Self::MultiplyBlocked => Self::MultiplyBlocked,
        };
    }
}

/// One cell: a maximal clockwise span of directions with uniform coverage.
///
/// A cell starts at `start` (owning it when `start_closed`) and ends at the
/// next cell's start, which it owns when that neighbour starts open. Two
/// neighbouring cells may share their start direction only when the first
/// is closed and the second open, leaving the first a single point.
#[derive(Debug, Clone)]
struct Cell<D> {
    start: D,
    start_closed: bool,
    depth: Depth,
    next: CellKey,
}

/// Subdivision of the circle of directions by coverage depth.
///
/// Cells form a circular singly linked list in clockwise order. Each cell
/// records whether it is covered by zero, one or at least two of the
/// forbidden arcs inserted so far. Inserting an arc refines the cells its
/// endpoints fall in, deepens the covered cells and merges neighbouring
/// cells that are blocked twice, so once every direction is covered twice
/// the subdivision collapses to a single cell.
#[derive(Debug)]
pub struct CoverageArrangement<D> {
    cells: SlotMap<CellKey, Cell<D>>,
    head: CellKey,
}

impl<D: Direction> CoverageArrangement<D> {
    /// Seeds the subdivision with the forbidden arc of edge 0: the swept
    /// part of the circle gets depth one, the complement stays free.
    #[must_use]
    pub fn new(first_arc: DirectionArc<D>) -> Self {
        debug_assert!(!first_arc.is_degenerate(), "arc must span a nonzero sweep");
        let mut cells = SlotMap::with_key();
        let covered = cells.insert(Cell {
            start: first_arc.start,
            start_closed: false,
            depth: Depth::SingleBlocker(0),
            next: CellKey::default(),
        });
        let complement = cells.insert(Cell {
            start: first_arc.end,
            start_closed: true,
            depth: Depth::Unblocked,
            next: covered,
        });
        cells[covered].next = complement;
        Self { cells, head: covered }
    }

    /// Refines the subdivision with the forbidden arc of `edge`.
    ///
    /// Every cell that existed on entry is visited once: cells fully inside
    /// the arc are deepened, cells containing an arc endpoint are split at
    /// it and the covered parts deepened. Cells created by the splits are
    /// not revisited. A final pass merges adjacent cells blocked twice.
    ///
    /// Callers only ever insert half-circles. A narrower arc starting
    /// exactly at an open cell boundary and ending inside the same cell is
    /// refused its split there and leaves the cell's depth unchanged.
    pub fn insert(&mut self, arc: &DirectionArc<D>, edge: usize) {
        debug_assert!(!arc.is_degenerate(), "arc must span a nonzero sweep");
        let mut cur = self.head;
        let mut done = false;
        while !done {
            let next = self.cells[cur].next;
            if next == self.head {
                done = true;
            }
            self.update_cell(cur, next, arc, edge);
            cur = next;
        }
        self.merge_blocked_runs();
    }

    /// Whether every direction is blocked by at least two edges. The merge
    /// pass makes this equivalent to the subdivision being a single cell.
    #[must_use]
    pub fn fully_blocked(&self) -> bool {
        self.cells.len() == 1
    }

    /// Collects the cells covered by exactly one arc, in sequence order
    /// from the head: the blocking edge together with the clockwise span
    /// of the cell. Point cells come out as degenerate arcs.
    #[must_use]
    pub fn single_cover_ranges(&self) -> Vec<(usize, DirectionArc<D>)> {
        let mut ranges = Vec::new();
        let mut cur = self.head;
        loop {
            let cell = &self.cells[cur];
            if let Depth::SingleBlocker(edge) = cell.depth {
                let end = self.cells[cell.next].start.clone();
                ranges.push((edge, DirectionArc::new(cell.start.clone(), end)));
            }
            cur = cell.next;
            if cur == self.head {
                break;
            }
        }
        ranges
    }

    /// Updates the single cell `cur` (ending at `next`) against the arc.
    fn update_cell(&mut self, cur: CellKey, next: CellKey, arc: &DirectionArc<D>, edge: usize) {
        if self.cells[cur].depth == Depth::MultiplyBlocked {
            return;
        }
        let cell_start = self.cells[cur].start.clone();
        let cell_start_closed = self.cells[cur].start_closed;
        let cell_end = self.cells[next].start.clone();
        let cell_end_closed = !self.cells[next].start_closed;

        if covers_cell(cell_start_closed, cell_end_closed, &cell_start, &cell_end, arc) {
            self.cells[cur].depth.deepen(edge);
            return;
        }
        let starts_inside = eps_clockwise_inside(&arc.start, &cell_start, &cell_end);
        let ends_inside = eps_counterclockwise_inside(&arc.end, &cell_start, &cell_end);
        match (starts_inside, ends_inside) {
            (true, true) => {
                // Both endpoints fall in this cell. The arc either nests
                // inside it or wraps around the rest of the circle and
                // covers both of its ends.
                let nested = !arc.end.cw_in_between(&cell_end, &arc.start);
                if nested {
                    let mut middle = self.cells[cur].clone();
                    middle.start = arc.start.clone();
                    middle.start_closed = false;
                    middle.depth.deepen(edge);
                    let mut tail = self.cells[cur].clone();
                    tail.start = arc.end.clone();
                    tail.start_closed = true;
                    let anchor = self.link_if_legal(cur, next, cur, middle).unwrap_or(cur);
                    self.link_if_legal(cur, next, anchor, tail);
                } else {
                    let mut gap = self.cells[cur].clone();
                    gap.start = arc.end.clone();
                    gap.start_closed = true;
                    let mut reentry = self.cells[cur].clone();
                    reentry.start = arc.start.clone();
                    reentry.start_closed = false;
                    reentry.depth.deepen(edge);
                    let anchor = self.link_if_legal(cur, next, cur, gap).unwrap_or(cur);
                    self.link_if_legal(cur, next, anchor, reentry);
                    self.cells[cur].depth.deepen(edge);
                }
            }
            (true, false) => {
                // The arc enters the cell and sweeps out through its end.
                let mut covered = self.cells[cur].clone();
                covered.start = arc.start.clone();
                covered.start_closed = false;
                covered.depth.deepen(edge);
                self.link_if_legal(cur, next, cur, covered);
            }
            (false, true) => {
                // The arc sweeps in through the cell's start and ends here;
                // the part past the arc end keeps the old depth.
                let mut rest = self.cells[cur].clone();
                rest.start = arc.end.clone();
                rest.start_closed = true;
                self.cells[cur].depth.deepen(edge);
                self.link_if_legal(cur, next, cur, rest);
            }
            (false, false) => {}
        }
    }

    /// Inserts `cell` after `anchor` unless it would denote an empty span:
    /// sharing a start with `cur` or `next` is only legal when the
    /// closed/open flags leave the earlier cell a point of its own.
    fn link_if_legal(
        &mut self,
        cur: CellKey,
        next: CellKey,
        anchor: CellKey,
        cell: Cell<D>,
    ) -> Option<CellKey> {
        let fits_before_next = (cell.start_closed && !self.cells[next].start_closed)
            || cell.start != self.cells[next].start;
        let fits_after_cur = (self.cells[cur].start_closed && !cell.start_closed)
            || cell.start != self.cells[cur].start;
        if !fits_before_next || !fits_after_cur {
            return None;
        }
        let successor = self.cells[anchor].next;
        let key = self.cells.insert(Cell { next: successor, ..cell });
        self.cells[anchor].next = key;
        if successor == self.head {
            self.head = key;
        }
        Some(key)
    }

    /// Collapses each run of consecutive multiply blocked cells into its
    /// first member. Runs are taken in sequence order from the head; a run
    /// straddling the head stays split in two, which nothing observes.
    fn merge_blocked_runs(&mut self) {
        let mut in_run = self.cells[self.head].depth == Depth::MultiplyBlocked;
        let mut prev = self.head;
        let mut cur = self.cells[self.head].next;
        while cur != self.head {
            let next = self.cells[cur].next;
            if self.cells[cur].depth == Depth::MultiplyBlocked {
                if in_run {
                    self.cells[prev].next = next;
                    self.cells.remove(cur);
                } else {
                    in_run = true;
                    prev = cur;
                }
            } else {
                in_run = false;
                prev = cur;
            }
            cur = next;
        }
    }
}

/// Whether the whole cell, less any boundary direction it does not own,
/// lies inside the open arc.
fn covers_cell<D: Direction>(
    cell_start_closed: bool,
    cell_end_closed: bool,
    cell_start: &D,
    cell_end: &D,
    arc: &DirectionArc<D>,
) -> bool {
    // A boundary the cell owns may not sit on the arc's open boundary.
    if (cell_start_closed && *cell_start == arc.start)
        || (cell_end_closed && *cell_end == arc.end)
    {
        return false;
    }
    // A cell with interior touching the arc's far boundary pokes outside.
    if (*cell_start == arc.end || *cell_end == arc.start) && cell_start != cell_end {
        return false;
    }
    // Neither cell boundary may fall in the arc's open complement, and the
    // cell must run from boundary to boundary without wrapping through it.
    !cell_start.cw_in_between(&arc.end, &arc.start)
        && !cell_end.cw_in_between(&arc.end, &arc.start)
        && !cell_start.cw_in_between(cell_end, &arc.start)
}

/// Whether a sweep setting out clockwise from `p` immediately enters the
/// cell spanning `cell_start` to `cell_end`.
fn eps_clockwise_inside<D: Direction>(p: &D, cell_start: &D, cell_end: &D) -> bool {
    if cell_start == cell_end {
        // Point cells have no interior.
        return false;
    }
    if *p == *cell_end {
        return false;
    }
    if *p == *cell_start {
        return true;
    }
    p.cw_in_between(cell_start, cell_end)
}

/// Whether a sweep arriving clockwise at `p` spends its final stretch
/// inside the cell spanning `cell_start` to `cell_end`.
fn eps_counterclockwise_inside<D: Direction>(p: &D, cell_start: &D, cell_end: &D) -> bool {
    if cell_start == cell_end {
        return false;
    }
    if *p == *cell_start {
        return false;
    }
    if *p == *cell_end {
        return true;
    }
    p.cw_in_between(cell_start, cell_end)
}
