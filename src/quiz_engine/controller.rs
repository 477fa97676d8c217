use std::mem;
use std::sync::{Mutex, PoisonError};

use rand::{rngs::StdRng, Rng, SeedableRng};
use tokio::sync::watch;

use crate::quiz_engine::{
    config::QuizConfig,
    generator::generate_questions,
    session::{QuizPhase, QuizState},
    source::QuizDataSource,
};

/// Runs one player's quiz: fetches entities, generates questions and applies
/// commands, publishing every new [`QuizState`] on a watch channel.
///
/// At most one load is in flight. `start` and `reset` called while loading
/// are ignored and return the current state.
pub struct QuizController<D, R = StdRng> {
    source: D,
    rng: Mutex<R>,
    config: QuizConfig,
    state: watch::Sender<QuizState>,
}

impl<D: QuizDataSource> QuizController<D, StdRng> {
    #[must_use]
    pub fn new(source: D) -> Self {
        Self::with_rng(source, StdRng::from_entropy())
    }
}

impl<D: QuizDataSource, R: Rng + Send> QuizController<D, R> {
    #[must_use]
    pub fn with_rng(source: D, rng: R) -> Self {
        let (state, _) = watch::channel(QuizState::new());
        Self {
            source,
            rng: Mutex::new(rng),
            config: QuizConfig::default(),
            state,
        }
    }

    #[must_use]
    pub fn with_config(mut self, config: QuizConfig) -> Self {
        self.config = config;
        self
    }

    /// Snapshot of the latest state.
    pub fn state(&self) -> QuizState {
        self.state.borrow().clone()
    }

    /// Receiver that observes every state published from now on.
    pub fn subscribe(&self) -> watch::Receiver<QuizState> {
        self.state.subscribe()
    }

    /// Load entities and generate a new quiz.
    ///
    /// Only acts from `Idle` (including after a failed load). Fetch failures
    /// are reported through `has_error`, never as an `Err`.
    pub async fn start(&self) -> QuizState {
        let began = self.state.send_if_modified(|s| match s.phase() {
            QuizPhase::Idle => {
                *s = mem::take(s).begin_loading();
                true
            }
            phase => {
                tracing::debug!(%phase, "start ignored");
                false
            }
        });
        if !began {
            return self.state();
        }
        self.load().await
    }

    /// Submit `choice` for the current question. A no-op without one.
    pub fn answer(&self, choice: &str) -> QuizState {
        self.state.send_if_modified(|s| {
            let before = s.current_index();
            *s = mem::take(s).answer(choice);
            s.current_index() != before
        });
        self.state()
    }

    /// Throw away the current quiz and load a fresh one.
    pub async fn reset(&self) -> QuizState {
        let began = self.state.send_if_modified(|s| {
            if s.is_loading() {
                tracing::debug!("reset ignored: load in flight");
                return false;
            }
            *s = mem::take(s).reset();
            true
        });
        if !began {
            return self.state();
        }
        self.load().await
    }

    async fn load(&self) -> QuizState {
        let mut pending = PendingLoad::new(&self.state);
        let fetched = tokio::try_join!(self.source.fetch_characters(), self.source.fetch_spells());

        match fetched {
            Ok((characters, spells)) => {
                let questions = {
                    let mut rng = self.rng.lock().unwrap_or_else(PoisonError::into_inner);
                    generate_questions(&mut *rng, &characters, &spells, self.config)
                };
                if questions.is_empty() {
                    tracing::warn!(
                        characters = characters.len(),
                        spells = spells.len(),
                        "no questions could be generated"
                    );
                }
                pending.disarm();
                self.state.send_modify(|s| *s = mem::take(s).finish_loading(questions));
            }
            Err(err) => {
                tracing::warn!(error = %err, "failed to load quiz data");
                pending.disarm();
                self.state.send_modify(|s| *s = mem::take(s).fail_loading());
            }
        }
        self.state()
    }
}

/// Fails the in-flight load if the future driving it is dropped before it
/// settles, so a cancelled `start`/`reset` never leaves the state loading.
struct PendingLoad<'a> {
    state: &'a watch::Sender<QuizState>,
    armed: bool,
}

impl<'a> PendingLoad<'a> {
    fn new(state: &'a watch::Sender<QuizState>) -> Self {
        Self { state, armed: true }
    }

    fn disarm(&mut self) {
        self.armed = false;
    }
}

impl Drop for PendingLoad<'_> {
    fn drop(&mut self) {
        if self.armed {
            tracing::warn!("quiz load cancelled before it settled");
            self.state.send_modify(|s| *s = mem::take(s).fail_loading());
        }
    }
}
