use std::io::Write;

use super::ObserverFailure;
use super::SolveEvent;
use super::SolveObserver;
use super::SolveProgress;
use crate::optimisation::OptimisationDirection;

/// An observer which prints a `Time / LB / UB / Gap` table whenever the bound or the incumbent
/// changes. A row is only printed once both are known.
#[derive(Debug)]
pub struct BoundsReporter<W> {
    writer: W,
    direction: OptimisationDirection,
}

impl<W: Write> BoundsReporter<W> {
    pub fn new(writer: W, direction: OptimisationDirection) -> Self {
        BoundsReporter { writer, direction }
    }

    pub fn into_inner(self) -> W {
        self.writer
    }

    fn write(&mut self, progress: &SolveProgress<'_>) -> std::io::Result<()> {
        match progress.event {
            SolveEvent::StartSolve => {
                writeln!(self.writer, "Time\tLB\tUB\tGap")?;
                writeln!(self.writer, "=============================")
            }
            SolveEvent::Solution | SolveEvent::ObjectiveBoundUpdate => {
                let (Some(bound), Some(incumbent), Some(gap)) =
                    (progress.bound, progress.incumbent, progress.gap)
                else {
                    return Ok(());
                };

                let (lower, upper) = match self.direction {
                    OptimisationDirection::Minimise => (bound, incumbent),
                    OptimisationDirection::Maximise => (incumbent, bound),
                };
                writeln!(
                    self.writer,
                    "{:.1}\t{lower}\t{upper}\t{:.1}%",
                    progress.elapsed.as_secs_f64(),
                    100.0 * gap
                )
            }
            SolveEvent::EndSolve => self.writer.flush(),
        }
    }
}

impl<W: Write> SolveObserver for BoundsReporter<W> {
    fn on_event(&mut self, progress: &SolveProgress<'_>) -> Result<(), ObserverFailure> {
        self.write(progress)
            .map_err(|error| ObserverFailure::new(format!("could not write bounds: {error}")))
    }
}

#[cfg(test)]
mod tests {
    use std::time::Duration;

    use super::BoundsReporter;
    use crate::observers::SolveEvent;
    use crate::observers::SolveObserver;
    use crate::observers::SolveProgress;
    use crate::optimisation::OptimisationDirection;

    #[test]
    fn rows_are_printed_once_both_sides_are_known() {
        let mut reporter = BoundsReporter::new(vec![], OptimisationDirection::Minimise);
        let mut progress = SolveProgress {
            event: SolveEvent::StartSolve,
            bound: None,
            incumbent: None,
            elapsed: Duration::from_millis(1500),
            gap: None,
            solution: None,
        };
        reporter.on_event(&progress).expect("writing to a vec");

        progress.event = SolveEvent::ObjectiveBoundUpdate;
        progress.bound = Some(5);
        reporter.on_event(&progress).expect("writing to a vec");

        progress.event = SolveEvent::Solution;
        progress.incumbent = Some(10);
        progress.gap = Some(0.5);
        reporter.on_event(&progress).expect("writing to a vec");

        let output = String::from_utf8(reporter.into_inner()).expect("utf8");
        assert_eq!(
            output,
            "Time\tLB\tUB\tGap\n=============================\n1.5\t5\t10\t50.0%\n"
        );
    }
}
