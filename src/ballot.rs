//! Simulated ballot flow from candidate selection to submission.
//!
//! A [Ballot] walks one voter through selecting a candidate and submitting
//! a vote. Submission passes through a timed "generating" phase standing in
//! for transaction confirmation or, for the zero-knowledge variant, proof
//! generation. The flow has no failure modes: every invalid transition is
//! a silent no-op, and a submission in flight cannot be canceled.
//!
//! Nothing here is real cryptography. The proof attached to a
//! zero-knowledge ballot is a random placeholder with no relationship to
//! the selected candidate.

use commonware_utils::hex;
use rand::RngCore;
use std::time::{Duration, SystemTime};

/// How long zero-knowledge proof generation is simulated to take.
pub const PROOF_DELAY: Duration = Duration::from_secs(2);

/// How long plain on-chain confirmation is simulated to take.
pub const CONFIRM_DELAY: Duration = Duration::from_secs(1);

/// Number of random bytes in a placeholder proof (64 hex characters).
const PROOF_LEN: usize = 32;

/// Which pipeline a ballot submits through.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Kind {
    /// The vote is recorded in the clear.
    Traditional,
    /// The vote is wrapped in a placeholder proof before submission.
    ZeroKnowledge,
}

/// Externally visible state of a ballot.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Status {
    /// No candidate chosen yet.
    NotSelected,
    /// A candidate is chosen but nothing has been submitted.
    Selected,
    /// Submission is in flight and completes at a deadline.
    Generating,
    /// The vote is on the simulated chain.
    Submitted,
}

/// One voter's progress through a simulated vote.
pub struct Ballot {
    kind: Kind,
    choices: usize,
    selected: Option<usize>,
    deadline: Option<SystemTime>,
    submitted: bool,
    proof: Option<String>,
}

impl Ballot {
    /// Create a ballot over `choices` candidates.
    pub fn new(kind: Kind, choices: usize) -> Self {
        Self {
            kind,
            choices,
            selected: None,
            deadline: None,
            submitted: false,
            proof: None,
        }
    }

    /// Which pipeline this ballot submits through.
    pub fn kind(&self) -> Kind {
        self.kind
    }

    /// Current state, derived from what has happened so far.
    pub fn status(&self) -> Status {
        if self.submitted {
            Status::Submitted
        } else if self.deadline.is_some() {
            Status::Generating
        } else if self.selected.is_some() {
            Status::Selected
        } else {
            Status::NotSelected
        }
    }

    /// The chosen candidate, if any.
    pub fn selected(&self) -> Option<usize> {
        self.selected
    }

    /// The placeholder proof attached at submission, if any.
    ///
    /// Set if and only if a zero-knowledge ballot has been submitted.
    pub fn proof(&self) -> Option<&str> {
        self.proof.as_deref()
    }

    /// When the in-flight submission completes, if one is pending.
    pub fn deadline(&self) -> Option<SystemTime> {
        self.deadline
    }

    /// Choose the candidate at `choice`.
    ///
    /// Permitted only before submission begins and while a wallet session
    /// is active. Re-selection is allowed; everything else is a no-op.
    pub fn select(&mut self, choice: usize, connected: bool) {
        if !connected || choice >= self.choices {
            return;
        }
        match self.status() {
            Status::NotSelected | Status::Selected => self.selected = Some(choice),
            Status::Generating | Status::Submitted => {}
        }
    }

    /// Begin submission at `now`.
    ///
    /// Valid only when a candidate is selected and nothing has been
    /// submitted; otherwise a no-op. Once begun, submission cannot be
    /// canceled and completes when [Self::tick] observes the deadline.
    pub fn submit(&mut self, now: SystemTime) {
        if self.status() != Status::Selected {
            return;
        }
        let delay = match self.kind {
            Kind::Traditional => CONFIRM_DELAY,
            Kind::ZeroKnowledge => PROOF_DELAY,
        };
        self.deadline = Some(now + delay);
    }

    /// Complete an in-flight submission whose deadline has passed.
    ///
    /// Draws the placeholder proof from `rng` for zero-knowledge ballots.
    pub fn tick<R: RngCore>(&mut self, now: SystemTime, rng: &mut R) {
        let Some(deadline) = self.deadline else {
            return;
        };
        if now < deadline {
            return;
        }
        self.deadline = None;
        self.submitted = true;
        if self.kind == Kind::ZeroKnowledge {
            let mut raw = [0u8; PROOF_LEN];
            rng.fill_bytes(&mut raw);
            self.proof = Some(hex(&raw));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use commonware_macros::test_traced;
    use commonware_runtime::{deterministic, Clock, Runner};

    #[test]
    fn test_select_requires_connection() {
        let mut ballot = Ballot::new(Kind::Traditional, 3);
        ballot.select(1, false);
        assert_eq!(ballot.status(), Status::NotSelected);
        assert_eq!(ballot.selected(), None);

        ballot.select(1, true);
        assert_eq!(ballot.status(), Status::Selected);
        assert_eq!(ballot.selected(), Some(1));
    }

    #[test]
    fn test_select_unknown_choice_ignored() {
        let mut ballot = Ballot::new(Kind::Traditional, 3);
        ballot.select(3, true);
        assert_eq!(ballot.status(), Status::NotSelected);
    }

    #[test]
    fn test_reselection_allowed() {
        let mut ballot = Ballot::new(Kind::ZeroKnowledge, 3);
        ballot.select(0, true);
        ballot.select(2, true);
        assert_eq!(ballot.selected(), Some(2));
    }

    #[test]
    fn test_submit_requires_selection() {
        let mut ballot = Ballot::new(Kind::ZeroKnowledge, 3);
        ballot.submit(std::time::UNIX_EPOCH);
        assert_eq!(ballot.status(), Status::NotSelected);
        assert_eq!(ballot.deadline(), None);
    }

    #[test_traced]
    fn test_zero_knowledge_flow() {
        let executor = deterministic::Runner::default();
        executor.start(|mut context| async move {
            let mut ballot = Ballot::new(Kind::ZeroKnowledge, 3);
            ballot.select(1, true);
            ballot.submit(context.current());
            assert_eq!(ballot.status(), Status::Generating);

            // Ticks before the deadline leave the submission in flight.
            ballot.tick(context.current(), &mut context);
            assert_eq!(ballot.status(), Status::Generating);

            let deadline = ballot.deadline().expect("submission should be pending");
            context.sleep_until(deadline).await;
            ballot.tick(context.current(), &mut context);
            assert_eq!(ballot.status(), Status::Submitted);
            assert_eq!(ballot.selected(), Some(1));

            // The placeholder is 64 lowercase hex characters.
            let proof = ballot.proof().expect("proof should be set");
            assert_eq!(proof.len(), 64);
            assert!(proof
                .chars()
                .all(|c| c.is_ascii_hexdigit() && !c.is_ascii_uppercase()));
        });
    }

    #[test_traced]
    fn test_traditional_flow_has_no_proof() {
        let executor = deterministic::Runner::default();
        executor.start(|mut context| async move {
            let mut ballot = Ballot::new(Kind::Traditional, 3);
            ballot.select(0, true);
            ballot.submit(context.current());
            assert_eq!(ballot.status(), Status::Generating);

            let deadline = ballot.deadline().expect("submission should be pending");
            context.sleep_until(deadline).await;
            ballot.tick(context.current(), &mut context);
            assert_eq!(ballot.status(), Status::Submitted);
            assert_eq!(ballot.proof(), None);
        });
    }

    #[test_traced]
    fn test_double_submit_changes_nothing() {
        let executor = deterministic::Runner::default();
        executor.start(|mut context| async move {
            let mut ballot = Ballot::new(Kind::ZeroKnowledge, 3);
            ballot.select(2, true);
            ballot.submit(context.current());
            let deadline = ballot.deadline().expect("submission should be pending");
            context.sleep_until(deadline).await;
            ballot.tick(context.current(), &mut context);
            let proof = ballot.proof().expect("proof should be set").to_string();

            // Submitting again leaves the proof and selection unchanged.
            ballot.submit(context.current());
            assert_eq!(ballot.status(), Status::Submitted);
            assert_eq!(ballot.deadline(), None);
            ballot.tick(context.current(), &mut context);
            assert_eq!(ballot.proof(), Some(proof.as_str()));
            assert_eq!(ballot.selected(), Some(2));
        });
    }

    #[test_traced]
    fn test_selection_locked_while_generating() {
        let executor = deterministic::Runner::default();
        executor.start(|context| async move {
            let mut ballot = Ballot::new(Kind::ZeroKnowledge, 3);
            ballot.select(0, true);
            ballot.submit(context.current());
            let deadline = ballot.deadline();

            // Selection and repeat submission are ignored while in flight.
            ballot.select(2, true);
            assert_eq!(ballot.selected(), Some(0));
            ballot.submit(context.current());
            assert_eq!(ballot.deadline(), deadline);
        });
    }

    #[test_traced]
    fn test_submission_survives_disconnect() {
        let executor = deterministic::Runner::default();
        executor.start(|mut context| async move {
            let mut ballot = Ballot::new(Kind::ZeroKnowledge, 3);
            ballot.select(1, true);
            ballot.submit(context.current());

            // Disconnecting the wallet only gates future selections; the
            // in-flight submission still completes.
            ballot.select(2, false);
            let deadline = ballot.deadline().expect("submission should be pending");
            context.sleep_until(deadline).await;
            ballot.tick(context.current(), &mut context);
            assert_eq!(ballot.status(), Status::Submitted);
        });
    }
}
