//! Human-readable stdout trace of a run, optionally teeing into a CSV
//! observer.

use pp_core::{GridPoint, ParkingSpot, Puck, PuckId, SpotId, Stage};
use pp_output::{CsvWriter, PathOutputObserver};
use pp_sim::{PathObserver, RunSummary};

/// Prints each stage of the pipeline and forwards every callback to the CSV
/// observer when one is attached.
pub struct TracePrinter {
    pub output: Option<PathOutputObserver<CsvWriter>>,
}

impl TracePrinter {
    pub fn new(output: Option<PathOutputObserver<CsvWriter>>) -> Self {
        Self { output }
    }
}

impl PathObserver for TracePrinter {
    fn on_stage(&mut self, stage: Stage, pucks: &[Puck], spots: &[ParkingSpot]) {
        println!();
        println!("── {stage} ──");
        match stage {
            Stage::Populated => {
                println!("{} pucks, {} parking spots", pucks.len(), spots.len());
                for p in pucks {
                    println!("  {:<10} at {}", p.id().to_string(), p.position());
                }
            }
            Stage::Assigned | Stage::Compacted => {
                println!("{:<6} {:<12} {:<8}", "Spot", "Position", "Occupied");
                for s in spots {
                    println!(
                        "{:<6} {:<12} {:<8}",
                        s.id().0,
                        s.position().to_string(),
                        if s.is_occupied() { "yes" } else { "no" },
                    );
                }
            }
            Stage::Processed => {
                println!("{:<10} {:<12} {:<8}", "Puck", "Position", "Done");
                for p in pucks {
                    println!(
                        "{:<10} {:<12} {:<8}",
                        p.id().to_string(),
                        p.position().to_string(),
                        if p.is_processed() { "yes" } else { "no" },
                    );
                }
            }
        }

        if let Some(out) = self.output.as_mut() {
            out.on_stage(stage, pucks, spots);
        }
    }

    fn on_assign(&mut self, puck: PuckId, from: GridPoint, spot: SpotId, to: GridPoint) {
        println!("  {puck}: {from} → spot {} at {to}", spot.0);
        if let Some(out) = self.output.as_mut() {
            out.on_assign(puck, from, spot, to);
        }
    }

    fn on_work(&mut self, puck: &Puck) {
        println!("  working on {} at {}", puck.id(), puck.position());
        if let Some(out) = self.output.as_mut() {
            out.on_work(puck);
        }
    }

    fn on_run_end(&mut self, summary: &RunSummary) {
        println!();
        println!(
            "Processed {}/{} pucks (gaps found: {})",
            summary.processed, summary.pucks, summary.had_gaps
        );
        if let Some(out) = self.output.as_mut() {
            out.on_run_end(summary);
        }
    }
}
