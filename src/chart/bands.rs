//! Grouping daily records into continuous plottable bands.
//!
//! Scanning the year in date order, the assembler keeps two cursors: the
//! primary band accepting ordinary entries, and the wrap band accepting the
//! after-midnight spill-over fragments produced by splitting. Continuity
//! breaks close a cursor; the next entry that needs one lazily opens a new
//! band. Bands appear in the output in the order they were first opened, so
//! each one renders as an independent series with no jump on the
//! hour-of-day axis.

use crate::chart::splitter::{SplitRiseSet, split};
use crate::chart::types::{ChartMode, DailyRiseSet, DaylightBand, DaylightRegime};

/// Assembles the bands for one mode from the year's unsplit daily records,
/// given in ascending date order.
pub(crate) fn assemble(mode: ChartMode, records: &[DailyRiseSet]) -> Vec<DaylightBand> {
    let assembly = records.iter().cloned().fold(
        Assembly::new(mode),
        |mut assembly, record| {
            assembly.accept(record);
            assembly
        },
    );
    assembly.finish()
}

/// The accumulator threaded through the scan: all bands opened so far plus
/// the two open-band cursors (indices into `bands`).
struct Assembly {
    mode: ChartMode,
    bands: Vec<DaylightBand>,
    primary: Option<usize>,
    wrap: Option<usize>,
}

impl Assembly {
    fn new(mode: ChartMode) -> Self {
        Self {
            mode,
            bands: Vec::new(),
            primary: None,
            wrap: None,
        }
    }

    fn accept(&mut self, record: DailyRiseSet) {
        match split(record) {
            SplitRiseSet::Split { primary, wrap } => {
                let wrap_band = self.ensure_wrap_open();
                let primary_band = self.ensure_primary_open();
                self.bands[primary_band].push(primary);
                self.bands[wrap_band].push(wrap);
            }
            SplitRiseSet::Whole(record)
                if record.regime() == DaylightRegime::AllNighttime =>
            {
                // A continuous daylight run has ended. All-night days
                // contribute no plot points, and the wrap band is not
                // affected by this path.
                self.primary = None;
            }
            SplitRiseSet::Whole(record) => {
                // An unsplit day ends any wraparound run.
                self.wrap = None;
                let primary_band = self.ensure_primary_open();
                self.bands[primary_band].push(record);
            }
        }
    }

    fn ensure_primary_open(&mut self) -> usize {
        match self.primary {
            Some(index) => index,
            None => {
                let index = self.open_band();
                self.primary = Some(index);
                index
            }
        }
    }

    fn ensure_wrap_open(&mut self) -> usize {
        match self.wrap {
            Some(index) => index,
            None => {
                let index = self.open_band();
                self.wrap = Some(index);
                index
            }
        }
    }

    fn open_band(&mut self) -> usize {
        let index = self.bands.len();
        self.bands.push(DaylightBand::new(index, self.mode));
        index
    }

    fn finish(self) -> Vec<DaylightBand> {
        self.bands
    }
}
