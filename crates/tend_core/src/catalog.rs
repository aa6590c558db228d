//! Built-in practice curriculum.
//!
//! Six modules, three micro-lessons each. The catalog is read-only:
//! it is built once at startup and consumed by reference everywhere.
//! Lesson text is the content, not the logic — the engine never
//! interprets answers.

/// Therapeutic phase order. The stability module is deliberately not
/// part of the sequence: it stays available as supplementary content
/// but never gates phase advancement.
pub const PHASES: [&str; 5] = [
    "regulation",
    "deprivation",
    "anger",
    "intimacy",
    "identity",
];

/// Module id of the grounding anchor added to every daily plan.
pub const REGULATION: &str = "regulation";

/// XP awarded for the first completion of a lesson.
pub const XP_PER_LESSON: u32 = 10;

/// One practice step inside a lesson.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PracticeStep {
    /// Breathing instruction, acknowledgement only.
    Breath { text: &'static str },
    /// Body-awareness instruction, acknowledgement only.
    Body { text: &'static str },
    /// Choose one option from a fixed set.
    Pick {
        text: &'static str,
        options: &'static [&'static str],
    },
    /// Free-form text input, must be non-empty.
    Text { text: &'static str },
}

impl PracticeStep {
    fn breath(text: &'static str) -> Self {
        Self::Breath { text }
    }

    fn body(text: &'static str) -> Self {
        Self::Body { text }
    }

    fn pick(text: &'static str, options: &'static [&'static str]) -> Self {
        Self::Pick { text, options }
    }

    fn text(text: &'static str) -> Self {
        Self::Text { text }
    }

    /// Instructional text shown for this step.
    pub fn instruction(&self) -> &'static str {
        match self {
            Self::Breath { text }
            | Self::Body { text }
            | Self::Pick { text, .. }
            | Self::Text { text } => text,
        }
    }

    /// Selectable options, for pick steps only.
    pub fn options(&self) -> Option<&'static [&'static str]> {
        match self {
            Self::Pick { options, .. } => Some(options),
            _ => None,
        }
    }

    /// Whether advancing past this step requires an answer.
    pub fn needs_input(&self) -> bool {
        matches!(self, Self::Pick { .. } | Self::Text { .. })
    }

    /// Answer-map key for this step at the given index, if it takes input.
    pub fn answer_key(&self, step_index: usize) -> Option<String> {
        match self {
            Self::Pick { .. } => Some(format!("pick_{}", step_index)),
            Self::Text { .. } => Some(format!("text_{}", step_index)),
            _ => None,
        }
    }
}

/// A single micro-practice unit.
#[derive(Debug, Clone)]
pub struct Lesson {
    pub id: &'static str,
    pub title: &'static str,
    pub teach: &'static str,
    pub practice: Vec<PracticeStep>,
    pub reflect: &'static str,
}

impl Lesson {
    fn new(
        id: &'static str,
        title: &'static str,
        teach: &'static str,
        practice: Vec<PracticeStep>,
        reflect: &'static str,
    ) -> Self {
        Self {
            id,
            title,
            teach,
            practice,
            reflect,
        }
    }
}

/// A thematic group of lessons addressing one therapeutic topic.
#[derive(Debug, Clone)]
pub struct Module {
    pub id: &'static str,
    pub title: &'static str,
    pub rationale: &'static str,
    pub lessons: Vec<Lesson>,
}

/// The full read-only curriculum.
#[derive(Debug, Clone)]
pub struct Catalog {
    modules: Vec<Module>,
}

impl Catalog {
    /// Build the built-in curriculum.
    pub fn builtin() -> Self {
        Self {
            modules: vec![
                regulation(),
                deprivation(),
                anger(),
                intimacy(),
                identity(),
                stability(),
            ],
        }
    }

    pub fn modules(&self) -> &[Module] {
        &self.modules
    }

    pub fn module(&self, id: &str) -> Option<&Module> {
        self.modules.iter().find(|m| m.id == id)
    }

    /// Look up a lesson anywhere in the catalog, with its owning module.
    pub fn lesson(&self, id: &str) -> Option<(&Module, &Lesson)> {
        self.modules
            .iter()
            .find_map(|m| m.lessons.iter().find(|l| l.id == id).map(|l| (m, l)))
    }

    /// Module for a phase index. Out-of-range indexes clamp to the
    /// last phase instead of failing.
    pub fn phase_module(&self, phase_index: usize) -> &Module {
        let id = crate::phase::phase_module_id(phase_index);
        self.module(id)
            .unwrap_or_else(|| panic!("phase module {} missing from catalog", id))
    }

    pub fn lesson_count(&self) -> usize {
        self.modules.iter().map(|m| m.lessons.len()).sum()
    }
}

fn regulation() -> Module {
    Module {
        id: "regulation",
        title: "Body & regulation",
        rationale: "Lower baseline tension. Without it, everything gets solved \
                    through performance or alcohol.",
        lessons: vec![
            Lesson::new(
                "regulation-1",
                "Extended exhale (2 min)",
                "The goal is not to relax. The goal is to signal safety to the \
                 nervous system. A longer exhale raises parasympathetic tone.",
                vec![
                    PracticeStep::breath("Breathe in for 4 seconds, out for 6. 10 cycles."),
                    PracticeStep::body("Loosen the jaw, shoulders, belly. Just notice the tension."),
                ],
                "After the exercise: how much tension is in your body (0-10)?",
            ),
            Lesson::new(
                "regulation-2",
                "Orienting in space (60 s)",
                "Hypervigilance drops when you orient: the eyes scan safe \
                 features and the brain gets a here-and-now signal.",
                vec![
                    PracticeStep::body("Look at 5 things that are pleasant or neutral. Name them out loud."),
                    PracticeStep::body("Find 3 solid points (chair, table, floor). Feel the support."),
                ],
                "What changed in your body (0-10)?",
            ),
            Lesson::new(
                "regulation-3",
                "Micro-release (30-90 s)",
                "A short release works better than grand plans. Regularity \
                 rewrites the system.",
                vec![
                    PracticeStep::body("Press your palms together for 5 seconds, then release. 5 repetitions."),
                    PracticeStep::body("Yawn or swallow. Let the tongue drop from the roof of the mouth."),
                ],
                "Where does your default tension sit most?",
            ),
        ],
    }
}

fn deprivation() -> Module {
    Module {
        id: "deprivation",
        title: "Emotional deprivation",
        rationale: "The core belief: 'I am not a priority.' You teach the body \
                    to receive care and to name needs.",
        lessons: vec![
            Lesson::new(
                "deprivation-1",
                "Naming needs (3 min)",
                "Deprivation often means needs stay blurred. First they have to \
                 be named without shame.",
                vec![
                    PracticeStep::pick(
                        "Pick one need for today",
                        &["calm", "closeness", "recognition", "rest", "clarity", "support"],
                    ),
                    PracticeStep::text("One sentence: 'Today I need...'"),
                ],
                "How hard was it to admit the need (0-10)?",
            ),
            Lesson::new(
                "deprivation-2",
                "Micro-request (5 min)",
                "A corrective experience happens when you ask and the world does \
                 not collapse. Start with a mini request.",
                vec![
                    PracticeStep::text("Write one micro-request (e.g. 'Could we talk for 10 minutes today?')"),
                    PracticeStep::pick(
                        "Who could you send it to?",
                        &["partner", "friend", "sibling", "colleague", "therapist", "someone else"],
                    ),
                ],
                "What are you afraid will happen when you ask?",
            ),
            Lesson::new(
                "deprivation-3",
                "Receiving (not only giving)",
                "Self-sacrifice plus deprivation: you give so the relationship \
                 survives. Now you practice receiving without earning it.",
                vec![
                    PracticeStep::pick(
                        "Pick one thing you will receive today",
                        &["a compliment", "help", "time", "tenderness", "forgiveness", "doing nothing"],
                    ),
                    PracticeStep::text("One sentence: 'Thank you, I'll take it.'"),
                ],
                "What feelings come up when receiving (shame/relief/resistance)?",
            ),
        ],
    }
}

fn anger() -> Module {
    Module {
        id: "anger",
        title: "Anger & boundaries",
        rationale: "Suppressed anger turns into demandingness, tension and body \
                    symptoms. You learn to feel and express anger safely.",
        lessons: vec![
            Lesson::new(
                "anger-1",
                "Anger is not aggression (2 min)",
                "Anger is information: something crossed a boundary. Aggression \
                 is behavior. The goal is to feel anger without causing harm.",
                vec![
                    PracticeStep::pick(
                        "Where do you feel anger in your body?",
                        &["chest", "neck", "stomach", "hands", "jaw", "not sure"],
                    ),
                    PracticeStep::body("Clench your fists for 3 seconds, then release. 10 times."),
                ],
                "What is the anger protecting? (a need, a boundary, a value)",
            ),
            Lesson::new(
                "anger-2",
                "One boundary (4 min)",
                "Boundaries are born in small sentences, not in arguments. We \
                 practice the format.",
                vec![
                    PracticeStep::text("Complete the sentence: 'When ____, I need ____.'"),
                    PracticeStep::text("Alternative: 'Not now. I'll get back to you in ____.'"),
                ],
                "How safe does saying 'no' feel to you (0-10)?",
            ),
            Lesson::new(
                "anger-3",
                "Anger without punishment (3 min)",
                "When anger was punished in childhood, the body holds it. Today \
                 you practice letting anger exist without a fight.",
                vec![
                    PracticeStep::body("Put a hand on your chest. Say quietly: 'My anger is allowed.'"),
                    PracticeStep::body("Find one safe outlet: brisk walk, squats, or shaking out your hands for 30 seconds."),
                ],
                "What would you do differently today if anger could be safe?",
            ),
        ],
    }
}

fn intimacy() -> Module {
    Module {
        id: "intimacy",
        title: "Intimacy without alarm",
        rationale: "Closeness triggers abandonment, deprivation and control at \
                    once. You learn to tolerate closeness in small doses.",
        lessons: vec![
            Lesson::new(
                "intimacy-1",
                "Closeness by percentage (3 min)",
                "Instead of 'be close' versus 'run away' we train a scale. 20% \
                 closeness is a win.",
                vec![
                    PracticeStep::pick(
                        "Pick today's closeness percentage",
                        &["10%", "20%", "30%", "40%", "50%"],
                    ),
                    PracticeStep::text("What does it mean concretely? (e.g. a 10-second hug, an open sentence, holding hands)"),
                ],
                "How loud was the alarm at that idea (0-10)?",
            ),
            Lesson::new(
                "intimacy-2",
                "Staying with one flaw (4 min)",
                "Perfectionism in a relationship is protection. The training: \
                 notice a flaw and not leave in your head.",
                vec![
                    PracticeStep::text("Trigger: what 'small flaw' will you tolerate today without shutting down?"),
                    PracticeStep::text("A sentence for yourself: 'This is discomfort, not danger.'"),
                ],
                "What are you afraid will happen if you tolerate imperfection?",
            ),
            Lesson::new(
                "intimacy-3",
                "A safe frame (5 min)",
                "When anxiety is high, the goal is not performance. The goal is \
                 a safe frame: agreement, a stop signal, pace.",
                vec![
                    PracticeStep::pick(
                        "Pick one element of safety",
                        &["a stop word", "pause any time", "slow pace", "lights on", "touch only today", "aftercare"],
                    ),
                    PracticeStep::text("One sentence you will say to your partner: 'I need ... to feel safe.'"),
                ],
                "What small step is realistic today without overload?",
            ),
        ],
    }
}

fn identity() -> Module {
    Module {
        id: "identity",
        title: "Identity beyond performance",
        rationale: "When worth equals grades, an adapted self takes over. Here \
                    the authentic self is rebuilt through experience.",
        lessons: vec![
            Lesson::new(
                "identity-1",
                "Values (3 min)",
                "Identity is not an answer in your head. It is the repeated \
                 'what I choose'.",
                vec![
                    PracticeStep::pick(
                        "Pick one value",
                        &["honesty", "creativity", "kindness", "freedom", "calm", "courage"],
                    ),
                    PracticeStep::text("One micro-action today that lives that value."),
                ],
                "How does the 'I' feel when it lines up with a value?",
            ),
            Lesson::new(
                "identity-2",
                "Self without performance (2 min)",
                "The nervous system is used to earning safety. We practice 'I am \
                 OK even without achieving'.",
                vec![
                    PracticeStep::body("Do nothing for 2 minutes. Just sit. If criticism shows up, notice it."),
                    PracticeStep::text("Name the critic's voice in one word (e.g. 'Coach', 'Inspector')."),
                ],
                "What are you afraid will happen when you do 'nothing'?",
            ),
            Lesson::new(
                "identity-3",
                "The inner child's voice (4 min)",
                "The vulnerable part of you tends to be suppressed. We give it a \
                 small, safe space.",
                vec![
                    PracticeStep::text("Complete: 'If I did not have to be afraid, I would want...'"),
                    PracticeStep::text("Complete: 'Today it will help me if...'"),
                ],
                "What emotion showed up (one word)?",
            ),
        ],
    }
}

fn stability() -> Module {
    Module {
        id: "stability",
        title: "Alcohol - replacing regulation",
        rationale: "Alcohol is not character. It is a regulation tool. The goal \
                    is other tools and less need for it.",
        lessons: vec![
            Lesson::new(
                "stability-1",
                "Trigger map (3 min)",
                "First we map, we do not fight. Trigger, tension, alcohol, \
                 relief, debt. The goal is to interrupt earlier.",
                vec![
                    PracticeStep::pick(
                        "Today's trigger",
                        &["stress", "loneliness", "social anxiety", "intimacy", "conflict", "reward"],
                    ),
                    PracticeStep::text("What was the signal in your body (one sentence)?"),
                ],
                "When did it start today? (time/event)",
            ),
            Lesson::new(
                "stability-2",
                "The 10-minute delay (4 min)",
                "The goal is not 'never'. The goal is 10 minutes of space so the \
                 brain leaves the tunnel.",
                vec![
                    PracticeStep::body("When the craving comes: set 10 minutes. Do the extended exhale or the orienting practice."),
                    PracticeStep::pick(
                        "Which substitute regulator will you use today?",
                        &["breathing", "a shower", "a walk", "food", "calling someone", "music"],
                    ),
                ],
                "After 10 minutes: craving level (0-10)?",
            ),
            Lesson::new(
                "stability-3",
                "Safety plan (2 min)",
                "Heavy drinking or withdrawal symptoms belong with a doctor. \
                 This practice is a supplement, not a replacement.",
                vec![
                    PracticeStep::text("One sentence: 'When it gets big, I will...' (a person/place/support)"),
                    PracticeStep::text("One supportive activity for tonight (be concrete)."),
                ],
                "How realistic is keeping the plan (0-10)?",
            ),
        ],
    }
}
