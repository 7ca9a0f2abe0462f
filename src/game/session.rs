//! file: session.rs
//! author: Jacob Xie
//! date: 2025/12/20 10:31:17 Saturday
//! brief: round state machine, one transition per action
//!
//! Every transition consumes the session and returns a [`Step`]: the next
//! session plus the commands the host has to run (fetches, reveal timer).
//! Nothing in here touches the network or the clock.

use super::{Candidate, Guess, Phase, RoundOutcome};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Slot {
    Current,
    Challenger,
}

/// Issued with every fetch. Only the most recent ticket of a slot may fill it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct FetchTicket {
    pub slot: Slot,
    seq: u64,
}

/// Arms one reveal timer. A promotion carrying any other token is dropped.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct RevealToken(u64);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    Fetch(FetchTicket),
    ScheduleReveal(RevealToken),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Step {
    pub session: Session,
    pub commands: Vec<Command>,
}

impl Step {
    fn idle(session: Session) -> Self {
        Self {
            session,
            commands: Vec::new(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Session {
    current: Option<Candidate>,
    challenger: Option<Candidate>,
    score: u32,
    high_score: u32,
    outcome: RoundOutcome,
    pending_current: Option<u64>,
    pending_challenger: Option<u64>,
    armed_reveal: Option<u64>,
    next_seq: u64,
}

impl Session {
    pub fn current(&self) -> Option<&Candidate> {
        self.current.as_ref()
    }

    pub fn challenger(&self) -> Option<&Candidate> {
        self.challenger.as_ref()
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    pub fn high_score(&self) -> u32 {
        self.high_score
    }

    pub fn outcome(&self) -> RoundOutcome {
        self.outcome
    }

    pub fn phase(&self) -> Phase {
        match self.outcome {
            RoundOutcome::Lost => Phase::Lost,
            RoundOutcome::Won => Phase::Revealing,
            RoundOutcome::InProgress if self.both_present() => Phase::Guessing,
            RoundOutcome::InProgress => Phase::Loading,
        }
    }

    /// True while the higher/lower controls should be live.
    pub fn accepts_guess(&self) -> bool {
        self.outcome == RoundOutcome::InProgress && self.both_present()
    }

    pub fn is_pending(&self, ticket: FetchTicket) -> bool {
        self.pending(ticket.slot) == Some(ticket.seq)
    }

    /// Starts a fresh game: both slots emptied and refetched, score zeroed.
    pub fn initialize(mut self) -> Step {
        self.score = 0;
        self.outcome = RoundOutcome::InProgress;
        self.armed_reveal = None;
        self.refill_both()
    }

    pub fn submit_guess(mut self, guess: Guess) -> Step {
        let verdict = match (&self.current, &self.challenger) {
            (Some(current), Some(challenger)) if self.outcome == RoundOutcome::InProgress => {
                Some(guess.is_correct(current, challenger))
            }
            _ => None,
        };
        let Some(correct) = verdict else {
            return Step::idle(self);
        };

        if correct {
            let token = self.issue();
            self.armed_reveal = Some(token);
            self.outcome = RoundOutcome::Won;
            Step {
                session: self,
                commands: vec![Command::ScheduleReveal(RevealToken(token))],
            }
        } else {
            self.outcome = RoundOutcome::Lost;
            Step::idle(self)
        }
    }

    /// Ends the reveal pause: the challenger becomes current and a new one is fetched.
    pub fn complete_reveal(mut self, token: RevealToken) -> Step {
        if self.outcome != RoundOutcome::Won || self.armed_reveal != Some(token.0) {
            return Step::idle(self);
        }
        self.armed_reveal = None;
        self.current = self.challenger.take();
        self.score += 1;
        self.high_score = self.high_score.max(self.score);
        self.outcome = RoundOutcome::InProgress;

        let ticket = self.book(Slot::Challenger);
        Step {
            session: self,
            commands: vec![Command::Fetch(ticket)],
        }
    }

    pub fn restart(mut self) -> Step {
        if self.outcome != RoundOutcome::Lost {
            return Step::idle(self);
        }
        self.score = 0;
        self.outcome = RoundOutcome::InProgress;
        self.armed_reveal = None;
        self.refill_both()
    }

    /// Stores a fetched candidate. Results for superseded tickets are dropped.
    pub fn resolve_fetch(mut self, ticket: FetchTicket, candidate: Candidate) -> Session {
        if !self.is_pending(ticket) {
            return self;
        }
        *self.pending_mut(ticket.slot) = None;
        match ticket.slot {
            Slot::Current => self.current = Some(candidate),
            Slot::Challenger => self.challenger = Some(candidate),
        }
        self
    }

    /// The slot stays empty until the next restart. No retry.
    pub fn fail_fetch(mut self, ticket: FetchTicket) -> Session {
        if self.is_pending(ticket) {
            *self.pending_mut(ticket.slot) = None;
        }
        self
    }

    fn both_present(&self) -> bool {
        self.current.is_some() && self.challenger.is_some()
    }

    fn refill_both(mut self) -> Step {
        self.current = None;
        self.challenger = None;
        let current = self.book(Slot::Current);
        let challenger = self.book(Slot::Challenger);
        Step {
            session: self,
            commands: vec![Command::Fetch(current), Command::Fetch(challenger)],
        }
    }

    fn book(&mut self, slot: Slot) -> FetchTicket {
        let seq = self.issue();
        *self.pending_mut(slot) = Some(seq);
        FetchTicket { slot, seq }
    }

    fn issue(&mut self) -> u64 {
        self.next_seq += 1;
        self.next_seq
    }

    fn pending(&self, slot: Slot) -> Option<u64> {
        match slot {
            Slot::Current => self.pending_current,
            Slot::Challenger => self.pending_challenger,
        }
    }

    fn pending_mut(&mut self, slot: Slot) -> &mut Option<u64> {
        match slot {
            Slot::Current => &mut self.pending_current,
            Slot::Challenger => &mut self.pending_challenger,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn dish(id: u64, calories: u32) -> Candidate {
        Candidate::new(id, format!("dish {id}"), format!("https://img.test/{id}.jpg"), calories)
    }

    fn tickets(step: &Step) -> Vec<FetchTicket> {
        step.commands
            .iter()
            .filter_map(|command| match command {
                Command::Fetch(ticket) => Some(*ticket),
                Command::ScheduleReveal(_) => None,
            })
            .collect()
    }

    fn reveal_token(step: &Step) -> RevealToken {
        match step.commands.as_slice() {
            [Command::ScheduleReveal(token)] => *token,
            other => panic!("expected a single reveal, got {other:?}"),
        }
    }

    fn ready(current: u32, challenger: u32) -> Session {
        let step = Session::default().initialize();
        let issued = tickets(&step);
        step.session
            .resolve_fetch(issued[0], dish(1, current))
            .resolve_fetch(issued[1], dish(2, challenger))
    }

    #[test]
    fn fresh_session_is_loading() {
        let session = Session::default();
        assert_eq!(session.phase(), Phase::Loading);
        assert!(!session.accepts_guess());
    }

    #[test]
    fn initialize_requests_both_slots() {
        let step = Session::default().initialize();
        let slots: Vec<Slot> = tickets(&step).iter().map(|ticket| ticket.slot).collect();
        assert_eq!(slots, vec![Slot::Current, Slot::Challenger]);
        assert_eq!(step.session.outcome(), RoundOutcome::InProgress);
        assert_eq!(step.session.score(), 0);
    }

    #[test]
    fn fetches_may_resolve_in_any_order() {
        let step = Session::default().initialize();
        let issued = tickets(&step);
        let session = step
            .session
            .resolve_fetch(issued[1], dish(2, 300))
            .resolve_fetch(issued[0], dish(1, 200));
        assert_eq!(session.current().map(|c| c.id), Some(1));
        assert_eq!(session.challenger().map(|c| c.id), Some(2));
        assert_eq!(session.phase(), Phase::Guessing);
    }

    #[test]
    fn guess_while_loading_is_ignored() {
        let step = Session::default().initialize();
        let issued = tickets(&step);
        let half = step.session.resolve_fetch(issued[0], dish(1, 200));
        let after = half.clone().submit_guess(Guess::Higher);
        assert!(after.commands.is_empty());
        assert_eq!(after.session, half);
    }

    #[test]
    fn correct_guess_reveals_then_promotes() {
        let session = ready(500, 600);
        let step = session.submit_guess(Guess::Higher);
        let token = reveal_token(&step);
        assert_eq!(step.session.phase(), Phase::Revealing);
        assert_eq!(step.session.score(), 0);

        let promoted = step.session.complete_reveal(token);
        assert_eq!(promoted.session.current(), Some(&dish(2, 600)));
        assert!(promoted.session.challenger().is_none());
        assert_eq!(promoted.session.score(), 1);
        assert_eq!(promoted.session.high_score(), 1);
        assert_eq!(
            tickets(&promoted).iter().map(|t| t.slot).collect::<Vec<_>>(),
            vec![Slot::Challenger]
        );
    }

    #[test]
    fn guess_during_reveal_is_ignored() {
        let step = ready(500, 500).submit_guess(Guess::Lower);
        let revealing = step.session.clone();
        let again = step.session.submit_guess(Guess::Higher);
        assert!(again.commands.is_empty());
        assert_eq!(again.session, revealing);
    }

    #[test]
    fn wrong_guess_freezes_the_board() {
        let session = ready(500, 600);
        let lost = session.clone().submit_guess(Guess::Lower);
        assert!(lost.commands.is_empty());
        assert_eq!(lost.session.outcome(), RoundOutcome::Lost);
        assert_eq!(lost.session.current(), session.current());
        assert_eq!(lost.session.challenger(), session.challenger());
        assert_eq!(lost.session.score(), session.score());
    }

    #[test]
    fn restart_only_from_lost() {
        let session = ready(500, 600);
        let step = session.clone().restart();
        assert!(step.commands.is_empty());
        assert_eq!(step.session, session);
    }

    #[test]
    fn restart_keeps_high_score() {
        let won = ready(100, 200).submit_guess(Guess::Higher);
        let token = reveal_token(&won);
        let promoted = won.session.complete_reveal(token);
        let refill = tickets(&promoted)[0];
        let session = promoted.session.resolve_fetch(refill, dish(3, 50));
        let lost = session.submit_guess(Guess::Higher).session;
        assert_eq!(lost.outcome(), RoundOutcome::Lost);

        let restarted = lost.restart();
        assert_eq!(restarted.session.score(), 0);
        assert_eq!(restarted.session.high_score(), 1);
        assert_eq!(restarted.session.phase(), Phase::Loading);
        assert_eq!(tickets(&restarted).len(), 2);
    }

    #[test]
    fn stale_fetch_is_dropped() {
        let step = Session::default().initialize();
        let old = tickets(&step);
        let again = step.session.initialize();
        let fresh = tickets(&again);

        let session = again.session.resolve_fetch(old[0], dish(9, 900));
        assert!(session.current().is_none());
        let session = session.resolve_fetch(fresh[0], dish(1, 100));
        assert_eq!(session.current().map(|c| c.id), Some(1));
    }

    #[test]
    fn failed_fetch_leaves_slot_empty() {
        let step = Session::default().initialize();
        let issued = tickets(&step);
        let session = step
            .session
            .resolve_fetch(issued[0], dish(1, 100))
            .fail_fetch(issued[1]);
        assert!(session.challenger().is_none());
        assert!(!session.is_pending(issued[1]));
        assert_eq!(session.phase(), Phase::Loading);

        let late = session.resolve_fetch(issued[1], dish(2, 200));
        assert!(late.challenger().is_none());
    }

    #[test]
    fn stale_reveal_token_does_not_promote() {
        let step = ready(100, 100).submit_guess(Guess::Higher);
        let session = step.session;
        let bogus = RevealToken(u64::MAX);
        let ignored = session.clone().complete_reveal(bogus);
        assert!(ignored.commands.is_empty());
        assert_eq!(ignored.session, session);
    }
}
