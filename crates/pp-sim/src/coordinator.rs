//! The `Coordinator` struct and its pipeline stages.

use pp_core::{
    GridPoint, ParkingSpot, PathConfig, PathError, PathResult, Puck, PuckId, SimRng, SpotId, Stage,
};
use tracing::{debug, info};

use crate::{NoopObserver, PathObserver, RunSummary};

// ── Coordinator ───────────────────────────────────────────────────────────────

/// Owns the pucks and parking spots for one run and drives them through the
/// pipeline:
///
/// 1. **Populate**: [`populate_spots`][Self::populate_spots] and
///    [`populate_pucks`][Self::populate_pucks].
/// 2. **Assign**: [`assign_nearest`][Self::assign_nearest] once per puck.
/// 3. **Compact**: [`fill_gaps`][Self::fill_gaps] when
///    [`has_gaps`][Self::has_gaps] reports a hole in the occupied block.
/// 4. **Work**: [`process_all`][Self::process_all].
///
/// The puck sequence is ordered tail → head: the last element is the head
/// puck, the one the work cycle processes next.
///
/// Create via [`Coordinator::new`] or [`CoordinatorBuilder`][crate::CoordinatorBuilder].
pub struct Coordinator {
    config: PathConfig,
    rng:    SimRng,
    pucks:  Vec<Puck>,
    spots:  Vec<ParkingSpot>,
}

impl Coordinator {
    /// An empty coordinator: no spots, no pucks.
    pub fn new(config: PathConfig) -> PathResult<Self> {
        config.validate()?;
        Ok(Self {
            rng: SimRng::new(config.seed),
            config,
            pucks: Vec::new(),
            spots: Vec::new(),
        })
    }

    // ── Accessors ─────────────────────────────────────────────────────────

    pub fn config(&self) -> &PathConfig {
        &self.config
    }

    /// Pucks in sequence order (tail first, head last).
    pub fn pucks(&self) -> &[Puck] {
        &self.pucks
    }

    /// Spots in path order (index 0 = tail, last = head).
    pub fn spots(&self) -> &[ParkingSpot] {
        &self.spots
    }

    /// Occupancy flags in path order.
    pub fn occupancy(&self) -> Vec<bool> {
        self.spots.iter().map(ParkingSpot::is_occupied).collect()
    }

    // ── Population ────────────────────────────────────────────────────────

    /// Append between 1 and `config.max_pucks` pucks at random positions in
    /// `[0, grid_extent]²`.  Returns how many were added.
    pub fn populate_pucks(&mut self) -> usize {
        let count = self.rng.gen_range(1..=self.config.max_pucks);
        for _ in 0..count {
            let position = self.rng.grid_point(self.config.grid_extent);
            self.add_puck(position);
        }
        debug!(count, "populated pucks");
        count
    }

    /// Append a single puck at a fixed position.
    pub fn add_puck(&mut self, position: GridPoint) -> PuckId {
        let id = PuckId(self.pucks.len() as u32);
        self.pucks.push(Puck::new(id, position));
        id
    }

    /// Lay out the nine parking spots, replacing any existing ones.  Pucks
    /// keep their positions but no longer count as parked.
    pub fn populate_spots(&mut self) {
        self.spots = ParkingSpot::layout();
        for puck in &mut self.pucks {
            puck.unpark();
        }
        debug!(count = self.spots.len(), "populated parking spots");
    }

    // ── Assignment ────────────────────────────────────────────────────────

    /// Move `puck` onto the nearest unoccupied spot and mark that spot
    /// occupied.
    ///
    /// Spots are scanned in path order and only a strictly closer spot
    /// replaces the current best, so equidistant candidates resolve to the
    /// lowest index.  A puck that is already parked gives up its spot first.
    pub fn assign_nearest(&mut self, puck: PuckId) -> PathResult<SpotId> {
        let idx = self.puck_index(puck)?;
        let from = self.pucks[idx].position();

        let previous = self.pucks[idx].spot();
        let mut best: Option<(usize, i64)> = None;
        for (i, spot) in self.spots.iter().enumerate() {
            let free = !spot.is_occupied() || previous == Some(spot.id());
            if !free {
                continue;
            }
            let d = from.distance_sq(spot.position());
            if best.is_none_or(|(_, min)| d < min) {
                best = Some((i, d));
            }
        }
        let (target, _) = best.ok_or(PathError::NoAvailableSpot { puck })?;

        if let Some(prev) = previous
            && let Some(old) = self.spots.get_mut(prev.index())
            && old.is_occupied()
        {
            old.toggle_occupied();
        }

        let spot = &mut self.spots[target];
        spot.toggle_occupied();
        self.pucks[idx].park(spot.id(), spot.position());

        debug!(
            %puck,
            from = %from,
            to = %spot.position(),
            distance = from.distance(spot.position()),
            "assigned puck to nearest spot"
        );
        Ok(spot.id())
    }

    /// Assign every puck, in sequence order, to its nearest free spot.
    ///
    /// Fails before touching any state if there are more pucks than spots.
    pub fn assign_all(&mut self) -> PathResult<()> {
        self.assign_all_observed(&mut NoopObserver)
    }

    fn assign_all_observed<O: PathObserver>(&mut self, observer: &mut O) -> PathResult<()> {
        if self.pucks.len() > self.spots.len() {
            return Err(PathError::TooManyPucks {
                pucks: self.pucks.len(),
                spots: self.spots.len(),
            });
        }
        let ids: Vec<PuckId> = self.pucks.iter().map(Puck::id).collect();
        for id in ids {
            let from = self.pucks[self.puck_index(id)?].position();
            let spot = self.assign_nearest(id)?;
            observer.on_assign(id, from, spot, self.spots[spot.index()].position());
        }
        Ok(())
    }

    // ── Compaction ────────────────────────────────────────────────────────

    /// `true` if a free spot appears anywhere after the first occupied spot,
    /// i.e. the occupied spots are not one block ending at the head.
    pub fn has_gaps(&self) -> bool {
        let mut seen_occupied = false;
        for spot in &self.spots {
            if spot.is_occupied() {
                seen_occupied = true;
            } else if seen_occupied {
                return true;
            }
        }
        false
    }

    /// Shift the occupied block to the head end of the path.
    ///
    /// With `k` occupied spots the last `k` spots end up occupied and the
    /// rest free.  Pucks keep their sequence order and are re-seated tail →
    /// head onto the occupied spots.  Returns `Ok(false)` without doing
    /// anything when there are no gaps.
    pub fn fill_gaps(&mut self) -> PathResult<bool> {
        if !self.has_gaps() {
            return Ok(false);
        }

        let occupied = self.spots.iter().filter(|s| s.is_occupied()).count();
        if occupied != self.pucks.len() {
            return Err(PathError::OccupancyMismatch {
                occupied,
                pucks: self.pucks.len(),
            });
        }

        let first = self.spots.len() - occupied;
        for (i, spot) in self.spots.iter_mut().enumerate() {
            if spot.is_occupied() != (i >= first) {
                spot.toggle_occupied();
            }
        }

        for (puck, spot) in self.pucks.iter_mut().zip(&self.spots[first..]) {
            puck.park(spot.id(), spot.position());
        }

        debug!(occupied, first_index = first, "compacted pucks toward the head");
        Ok(true)
    }

    // ── Work cycle ────────────────────────────────────────────────────────

    /// Process every puck once: mark the head puck processed, then rotate the
    /// sequence so the head moves to the tail.  After `n` steps the sequence
    /// is back in its original order.  Spot occupancy is untouched.
    ///
    /// Returns the number of pucks processed.
    pub fn process_all(&mut self) -> usize {
        self.process_all_observed(&mut NoopObserver)
    }

    fn process_all_observed<O: PathObserver>(&mut self, observer: &mut O) -> usize {
        let n = self.pucks.len();
        for _ in 0..n {
            if let Some(head) = self.pucks.last_mut() {
                head.mark_processed();
                debug!(puck = %head.id(), at = %head.position(), "processed head puck");
                observer.on_work(head);
            }
            self.pucks.rotate_right(1);
        }
        n
    }

    // ── Full pipeline ─────────────────────────────────────────────────────

    /// Run populate → assign → compact → work once.
    ///
    /// Spots and pucks are only generated when the respective collection is
    /// still empty, so fixed pucks added beforehand are kept.
    pub fn run<O: PathObserver>(&mut self, observer: &mut O) -> PathResult<RunSummary> {
        if self.spots.is_empty() {
            self.populate_spots();
        }
        if self.pucks.is_empty() {
            self.populate_pucks();
        }
        info!(pucks = self.pucks.len(), spots = self.spots.len(), "board populated");
        observer.on_stage(Stage::Populated, &self.pucks, &self.spots);

        self.assign_all_observed(observer)?;
        observer.on_stage(Stage::Assigned, &self.pucks, &self.spots);

        let had_gaps = self.fill_gaps()?;
        info!(had_gaps, "occupied spots are contiguous");
        observer.on_stage(Stage::Compacted, &self.pucks, &self.spots);

        let processed = self.process_all_observed(observer);
        info!(processed, "work cycle complete");
        observer.on_stage(Stage::Processed, &self.pucks, &self.spots);

        let summary = RunSummary {
            pucks: self.pucks.len(),
            had_gaps,
            processed,
            final_positions: self.pucks.iter().map(Puck::position).collect(),
        };
        observer.on_run_end(&summary);
        Ok(summary)
    }

    // ── Helpers ───────────────────────────────────────────────────────────

    fn puck_index(&self, puck: PuckId) -> PathResult<usize> {
        self.pucks
            .iter()
            .position(|p| p.id() == puck)
            .ok_or(PathError::PuckNotFound(puck))
    }
}
