//! Per-page-load analysis session.
//!
//! Tracks the uploaded image and where the simulated analysis stands.
//! Every analysis run gets a fresh [`RequestId`]; completions carrying an
//! older id are rejected so a stale timer can never overwrite newer state.
//! File reads are guarded the same way with an [`IntakeTicket`].

use std::fmt;

use crate::diagnosis::DiagnosisRecord;
use crate::error::MediPlantError;

/// Identifies one analysis run within a session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct RequestId(u64);

impl RequestId {
    pub fn new(value: u64) -> Self {
        Self(value)
    }

    pub fn value(self) -> u64 {
        self.0
    }
}

impl fmt::Display for RequestId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// Identifies one file read. Only the most recently issued ticket may
/// deliver an image.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct IntakeTicket(u64);

impl fmt::Display for IntakeTicket {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "upload #{}", self.0)
    }
}

/// Analysis state machine: `Idle -> Analyzing -> Done`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum AnalysisPhase {
    /// Nothing in flight, no result
    Idle,
    /// Waiting for the simulated delay to elapse
    Analyzing(RequestId),
    /// Result available
    Done(&'static DiagnosisRecord),
}

#[derive(Debug, Clone, PartialEq)]
pub struct Session {
    uploaded_image: Option<String>,
    phase: AnalysisPhase,
    next_request: u64,
    intake_generation: u64,
    reading: bool,
}

impl Default for Session {
    fn default() -> Self {
        Self::new()
    }
}

impl Session {
    pub fn new() -> Self {
        Self {
            uploaded_image: None,
            phase: AnalysisPhase::Idle,
            next_request: 1,
            intake_generation: 0,
            reading: false,
        }
    }

    /// Data URI of the uploaded image, if any.
    pub fn uploaded_image(&self) -> Option<&str> {
        self.uploaded_image.as_deref()
    }

    pub fn phase(&self) -> AnalysisPhase {
        self.phase
    }

    pub fn is_analyzing(&self) -> bool {
        matches!(self.phase, AnalysisPhase::Analyzing(_))
    }

    pub fn prediction(&self) -> Option<&'static DiagnosisRecord> {
        match self.phase {
            AnalysisPhase::Done(record) => Some(record),
            _ => None,
        }
    }

    /// True while the latest file read has not delivered yet.
    pub fn is_reading(&self) -> bool {
        self.reading
    }

    /// The request currently awaiting completion.
    pub fn pending_request(&self) -> Option<RequestId> {
        match self.phase {
            AnalysisPhase::Analyzing(id) => Some(id),
            _ => None,
        }
    }

    /// Register a file read that is about to start.
    ///
    /// Reads started earlier can no longer deliver their image.
    pub fn start_intake(&mut self) -> IntakeTicket {
        self.intake_generation += 1;
        self.reading = true;
        IntakeTicket(self.intake_generation)
    }

    fn is_current_intake(&self, ticket: IntakeTicket) -> bool {
        self.reading && ticket.0 == self.intake_generation
    }

    /// Hand over the image read under `ticket` and start analyzing it.
    ///
    /// Fails with [`MediPlantError::StaleIntake`], leaving the session
    /// untouched, if a newer read or a reset came in meanwhile.
    pub fn accept_intake(
        &mut self,
        ticket: IntakeTicket,
        image: String,
    ) -> Result<RequestId, MediPlantError> {
        if !self.is_current_intake(ticket) {
            return Err(MediPlantError::StaleIntake { ticket });
        }
        self.reading = false;
        Ok(self.begin_analysis(image))
    }

    /// The read under `ticket` failed.
    pub fn abandon_intake(&mut self, ticket: IntakeTicket) {
        if self.is_current_intake(ticket) {
            self.reading = false;
        }
    }

    /// Store a freshly read image and start a new analysis run.
    ///
    /// Any previous prediction is dropped. Any run still in flight is
    /// superseded by the returned id.
    pub fn begin_analysis(&mut self, image: String) -> RequestId {
        let request = RequestId(self.next_request);
        self.next_request += 1;

        if let Some(previous) = self.pending_request() {
            tracing::debug!(%previous, %request, "superseding in-flight analysis");
        }

        self.uploaded_image = Some(image);
        self.phase = AnalysisPhase::Analyzing(request);
        request
    }

    /// Deliver the result for `request`.
    ///
    /// Fails with [`MediPlantError::Superseded`], leaving the session
    /// untouched, unless `request` is the run currently in flight.
    pub fn complete(
        &mut self,
        request: RequestId,
        record: &'static DiagnosisRecord,
    ) -> Result<(), MediPlantError> {
        if self.pending_request() != Some(request) {
            return Err(MediPlantError::Superseded { request });
        }
        self.phase = AnalysisPhase::Done(record);
        Ok(())
    }

    /// Back to `Idle`, clearing the image and any prediction.
    ///
    /// The counters keep counting so runs and reads started before the
    /// reset stay superseded.
    pub fn reset(&mut self) {
        self.uploaded_image = None;
        self.phase = AnalysisPhase::Idle;
        self.intake_generation += 1;
        self.reading = false;
    }
}
