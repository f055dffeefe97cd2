use crate::AnswerMap;

/// Where a session is in the question sequence.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    /// Waiting for an answer to the question at this index.
    Answering(usize),

    /// Every question has been answered.
    Complete,
}

/// Mutable state of one survey session.
///
/// Owned by `SurveyEngine`; callers only ever see it by shared reference.
/// The completion flag is derived from the phase, so it cannot disagree
/// with the current index.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SessionState {
    phase: Phase,
    answers: AnswerMap,
}

impl SessionState {
    /// The state a session starts in: first question, no answers.
    pub fn initial() -> Self {
        Self {
            phase: Phase::Answering(0),
            answers: AnswerMap::new(),
        }
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn answers(&self) -> &AnswerMap {
        &self.answers
    }

    pub fn is_complete(&self) -> bool {
        self.phase == Phase::Complete
    }

    /// Index of the question being answered, or `total` once complete.
    pub fn current_index(&self, total: usize) -> usize {
        match self.phase {
            Phase::Answering(index) => index,
            Phase::Complete => total,
        }
    }

    pub(crate) fn set_phase(&mut self, phase: Phase) {
        self.phase = phase;
    }

    pub(crate) fn answers_mut(&mut self) -> &mut AnswerMap {
        &mut self.answers
    }

    pub(crate) fn into_answers(self) -> AnswerMap {
        self.answers
    }
}

impl Default for SessionState {
    fn default() -> Self {
        Self::initial()
    }
}

/// How far a session has progressed: `current` answered out of `total`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Progress {
    pub current: usize,
    pub total: usize,
}

impl Progress {
    pub fn new(current: usize, total: usize) -> Self {
        Self { current, total }
    }

    /// Fraction answered, in `[0, 1]`.
    pub fn ratio(&self) -> f64 {
        if self.total == 0 {
            return 0.0;
        }
        self.current as f64 / self.total as f64
    }

    /// Whole percent answered, rounded down.
    pub fn percent(&self) -> u8 {
        if self.total == 0 {
            return 0;
        }
        (self.current.min(self.total) * 100 / self.total) as u8
    }

    /// One-based number of the question on screen ("Question 3 of 5").
    pub fn position(&self) -> usize {
        (self.current + 1).min(self.total)
    }
}
