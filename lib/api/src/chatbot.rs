//! Fixed-question screening chatbot
//!
//! An [`Assessment`] walks a user through [`QUESTIONS`] one at a time,
//! counting "yes" answers. [`SessionStore`] keeps one assessment per session
//! id so independent users never share counters.

use ahash::AHashMap;
use parking_lot::RwLock;
use std::sync::Arc;
use std::time::{Duration, Instant};
use tracing::{debug, info};
use uuid::Uuid;

/// Screening questions in the order they are asked
pub const QUESTIONS: &[&str] = &[
    // Social isolation
    "Have you intentionally withdrawn from social activities or friends recently?",
    "Do you frequently feel isolated or alone, even when you are with others?",
    "Are you spending significantly more time by yourself than you used to?",
    "Have you started avoiding family gatherings or social events?",
    "Has your addiction or substance use led you to isolate yourself from your peers?",
    // Financial issues
    "Have you experienced financial difficulties or debt directly related to your habit?",
    "Are you frequently running out of money because of the cost of your addiction?",
    "Have you ever borrowed or stolen money to support your substance use or habit?",
    "Do you spend money on your addiction instead of essential items like food or tuition?",
    // Health and risk
    "Have you noticed a decline in your overall physical health since your habit started?",
    "Are you experiencing new or worsening mental health issues like anxiety or depression?",
    "When you stop using or engaging in your habit, do you experience physical discomfort or sickness?",
    "Have you engaged in dangerous or reckless activities while under the influence of a substance?",
    "Do you ignore obvious dangers or consequences when pursuing your habit?",
];

/// Yes-count at or above which the result is a concern
pub const DEFAULT_THRESHOLD: usize = 5;

#[derive(Debug, Clone)]
pub struct SequencerConfig {
    pub questions: Arc<[String]>,
    pub threshold: usize,
}

impl Default for SequencerConfig {
    fn default() -> Self {
        Self {
            questions: QUESTIONS.iter().map(|q| q.to_string()).collect(),
            threshold: DEFAULT_THRESHOLD,
        }
    }
}

/// Outcome category of a completed assessment
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Category {
    AddictionConcern,
    LowerRisk,
}

impl Category {
    pub fn as_str(&self) -> &'static str {
        match self {
            Category::AddictionConcern => "ADDICTION_CONCERN",
            Category::LowerRisk => "LOWER_RISK",
        }
    }
}

/// What the chatbot says next
#[derive(Debug, Clone, PartialEq)]
pub enum Reply {
    /// Ask question `number` (1-based)
    Question { number: usize, text: String },
    /// The answer was not understood; ask question `number` again
    Reask { number: usize, text: String },
    /// All questions answered
    Complete {
        score: usize,
        total: usize,
        category: Category,
        conclusion: String,
    },
    /// No assessment is running for this session
    NotStarted,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Answer {
    Yes,
    No,
}

/// Substring match, "yes" taking precedence over "no"
fn parse_answer(message: &str) -> Option<Answer> {
    let message = message.trim().to_lowercase();
    if message.contains("yes") {
        Some(Answer::Yes)
    } else if message.contains("no") {
        Some(Answer::No)
    } else {
        None
    }
}

/// Progress through one run of the questions
#[derive(Debug, Clone)]
pub struct Assessment {
    config: SequencerConfig,
    /// Index of the question currently awaiting an answer
    index: usize,
    yes_count: usize,
}

impl Assessment {
    /// Begin a run and return the first question
    pub fn start(config: SequencerConfig) -> (Self, Reply) {
        let assessment = Self {
            config,
            index: 0,
            yes_count: 0,
        };
        let reply = assessment.current_question();
        (assessment, reply)
    }

    #[inline]
    pub fn index(&self) -> usize {
        self.index
    }

    #[inline]
    pub fn yes_count(&self) -> usize {
        self.yes_count
    }

    pub fn is_complete(&self) -> bool {
        self.index >= self.config.questions.len()
    }

    fn current_question(&self) -> Reply {
        match self.config.questions.get(self.index) {
            Some(text) => Reply::Question {
                number: self.index + 1,
                text: text.clone(),
            },
            None => self.finish(),
        }
    }

    /// Record an answer to the current question.
    ///
    /// Unrecognized input re-asks the same question without touching the
    /// counters.
    pub fn answer(&mut self, message: &str) -> Reply {
        if self.is_complete() {
            return self.finish();
        }

        match parse_answer(message) {
            None => Reply::Reask {
                number: self.index + 1,
                text: self.config.questions[self.index].clone(),
            },
            Some(answer) => {
                if answer == Answer::Yes {
                    self.yes_count += 1;
                }
                self.index += 1;
                self.current_question()
            }
        }
    }

    fn finish(&self) -> Reply {
        let score = self.yes_count;
        let total = self.config.questions.len();

        let (category, conclusion) = if score >= self.config.threshold {
            (
                Category::AddictionConcern,
                format!(
                    "Based on your score of {} out of {}, your responses indicate a **potential for addiction or problematic substance/habit use**. It is highly recommended that you speak with a healthcare professional or a licensed counselor for a formal evaluation and support.",
                    score, total
                ),
            )
        } else {
            (
                Category::LowerRisk,
                format!(
                    "Your score is {} out of {}. While this does not indicate an immediate high risk based on this screening, if you have any concerns about your habit, you should still consider speaking with a professional.",
                    score, total
                ),
            )
        };

        Reply::Complete {
            score,
            total,
            category,
            conclusion,
        }
    }
}

/// Idle time after which an unfinished session is dropped
pub const DEFAULT_SESSION_TTL: Duration = Duration::from_secs(30 * 60);

#[derive(Debug)]
struct Session {
    assessment: Assessment,
    touched: Instant,
}

/// In-memory assessments keyed by session id.
///
/// Sessions idle for longer than the TTL are evicted on the next `start` or
/// `answer`.
#[derive(Debug)]
pub struct SessionStore {
    config: SequencerConfig,
    ttl: Duration,
    sessions: RwLock<AHashMap<Uuid, Session>>,
}

impl Default for SessionStore {
    fn default() -> Self {
        Self::new(SequencerConfig::default())
    }
}

impl SessionStore {
    pub fn new(config: SequencerConfig) -> Self {
        Self {
            config,
            ttl: DEFAULT_SESSION_TTL,
            sessions: RwLock::new(AHashMap::new()),
        }
    }

    pub fn with_ttl(mut self, ttl: Duration) -> Self {
        self.ttl = ttl;
        self
    }

    fn prune(&self, sessions: &mut AHashMap<Uuid, Session>, now: Instant) {
        let before = sessions.len();
        sessions.retain(|_, s| now.duration_since(s.touched) <= self.ttl);
        let evicted = before - sessions.len();
        if evicted > 0 {
            debug!("Evicted {} idle assessment sessions", evicted);
        }
    }

    /// Open a new session and return its id with the first question
    pub fn start(&self) -> (Uuid, Reply) {
        let id = Uuid::new_v4();
        let (assessment, reply) = Assessment::start(self.config.clone());
        let now = Instant::now();

        let mut sessions = self.sessions.write();
        self.prune(&mut sessions, now);
        sessions.insert(id, Session { assessment, touched: now });
        info!("Assessment session {} started", id);
        (id, reply)
    }

    /// Answer the current question of a session.
    ///
    /// A completed session is removed, so the next run starts fresh.
    pub fn answer(&self, id: &Uuid, message: &str) -> Reply {
        let now = Instant::now();
        let mut sessions = self.sessions.write();
        self.prune(&mut sessions, now);
        let Some(session) = sessions.get_mut(id) else {
            return Reply::NotStarted;
        };

        session.touched = now;
        let assessment = &mut session.assessment;
        let reply = assessment.answer(message);
        if let Reply::Complete { score, ref category, .. } = reply {
            sessions.remove(id);
            info!("Assessment session {} complete: score {} ({})", id, score, category.as_str());
        } else {
            debug!("Assessment session {} at question {}", id, assessment.index() + 1);
        }
        reply
    }

    /// Drop a session without completing it
    pub fn end(&self, id: &Uuid) -> bool {
        self.sessions.write().remove(id).is_some()
    }

    pub fn active_sessions(&self) -> usize {
        self.sessions.read().len()
    }

    pub fn config(&self) -> &SequencerConfig {
        &self.config
    }

    pub fn ttl(&self) -> Duration {
        self.ttl
    }
}
