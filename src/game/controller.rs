//! file: controller.rs
//! author: Jacob Xie
//! date: 2025/12/20 12:20:14 Saturday
//! brief: gpui entity driving the session
//!
//! All session changes happen here on the foreground thread. Fetches run on
//! the background executor and report back through the weak entity handle;
//! the reveal pause is a held `Task`, so dropping it cancels the promotion.

use std::{sync::Arc, time::Duration};

use gpui::{App, Context, FocusHandle, Focusable, Task, actions};
use tracing::{debug, error, info};

use super::{Candidate, Command, FetchTicket, Guess, RevealToken, RoundOutcome, Session, Step};
use crate::{error::FetchError, provider::RecipeProvider};

actions!(calorie_duel, [GuessHigher, GuessLower, RestartGame, QuitGame]);

pub struct CalorieGame {
    session: Session,
    provider: Arc<dyn RecipeProvider>,
    reveal_delay: Duration,
    reveal_task: Option<Task<()>>,
    focus_handle: FocusHandle,
}

impl CalorieGame {
    pub fn new(
        provider: Arc<dyn RecipeProvider>,
        reveal_delay: Duration,
        cx: &mut Context<Self>,
    ) -> Self {
        let mut game = Self {
            session: Session::default(),
            provider,
            reveal_delay,
            reveal_task: None,
            focus_handle: cx.focus_handle(),
        };
        game.apply(Session::initialize, cx);
        game
    }

    pub fn session(&self) -> &Session {
        &self.session
    }

    pub(super) fn handle_guess(&mut self, guess: Guess, cx: &mut Context<Self>) {
        if !self.session.accepts_guess() {
            debug!(guess = guess.label(), phase = ?self.session.phase(), "guess ignored");
            return;
        }
        self.apply(|session| session.submit_guess(guess), cx);

        match self.session.outcome() {
            RoundOutcome::Won => info!(guess = guess.label(), "correct guess"),
            RoundOutcome::Lost => info!(
                guess = guess.label(),
                score = self.session.score(),
                high_score = self.session.high_score(),
                "wrong guess, game over"
            ),
            RoundOutcome::InProgress => {}
        }
    }

    pub(super) fn handle_restart(&mut self, cx: &mut Context<Self>) {
        if self.session.outcome() != RoundOutcome::Lost {
            return;
        }
        self.reveal_task = None;
        info!(high_score = self.session.high_score(), "restarting");
        self.apply(Session::restart, cx);
    }

    fn apply(&mut self, transition: impl FnOnce(Session) -> Step, cx: &mut Context<Self>) {
        let Step { session, commands } = transition(std::mem::take(&mut self.session));
        self.session = session;
        for command in commands {
            match command {
                Command::Fetch(ticket) => self.spawn_fetch(ticket, cx),
                Command::ScheduleReveal(token) => self.schedule_reveal(token, cx),
            }
        }
        cx.notify();
    }

    fn spawn_fetch(&mut self, ticket: FetchTicket, cx: &mut Context<Self>) {
        debug!(slot = ?ticket.slot, "fetching candidate");
        let provider = Arc::clone(&self.provider);
        let fetch = cx
            .background_executor()
            .spawn(async move { provider.fetch_random_candidate() });

        cx.spawn(async move |this, cx| {
            let result = fetch.await;
            this.update(cx, |game, cx| game.finish_fetch(ticket, result, cx))
                .ok();
        })
        .detach();
    }

    fn finish_fetch(
        &mut self,
        ticket: FetchTicket,
        result: Result<Candidate, FetchError>,
        cx: &mut Context<Self>,
    ) {
        let session = std::mem::take(&mut self.session);
        self.session = match result {
            Ok(candidate) if !session.is_pending(ticket) => {
                debug!(slot = ?ticket.slot, recipe_id = candidate.id, "dropping stale candidate");
                session
            }
            Ok(candidate) => {
                debug!(
                    slot = ?ticket.slot,
                    recipe_id = candidate.id,
                    name = %candidate.name,
                    "candidate ready"
                );
                session.resolve_fetch(ticket, candidate)
            }
            Err(err) => {
                error!(slot = ?ticket.slot, %err, "recipe fetch failed");
                session.fail_fetch(ticket)
            }
        };
        cx.notify();
    }

    fn schedule_reveal(&mut self, token: RevealToken, cx: &mut Context<Self>) {
        let timer = cx.background_executor().timer(self.reveal_delay);
        self.reveal_task = Some(cx.spawn(async move |this, cx| {
            timer.await;
            this.update(cx, |game, cx| {
                game.apply(|session| session.complete_reveal(token), cx);
                info!(
                    score = game.session.score(),
                    high_score = game.session.high_score(),
                    "next round"
                );
            })
            .ok();
        }));
    }
}

impl Focusable for CalorieGame {
    fn focus_handle(&self, _: &App) -> FocusHandle {
        self.focus_handle.clone()
    }
}
