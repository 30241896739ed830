//! Interpretive text attached to numerology numbers.

/// Keywords, strengths, challenges and suggestions for one core number.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Reading {
    pub number: u32,
    pub keywords: &'static str,
    pub strengths: &'static [&'static str],
    pub challenges: &'static [&'static str],
    pub suggestions: &'static [&'static str],
}

impl Reading {
    /// Reading for 1-9, 11 or 22.
    #[must_use]
    pub fn for_number(number: u32) -> Option<&'static Self> {
        READINGS.iter().find(|reading| reading.number == number)
    }

    #[must_use]
    pub const fn is_master(&self) -> bool {
        crate::numerology::is_master(self.number)
    }
}

/// Theme sentence for a personal year 1-9.
#[must_use]
pub fn year_theme(personal_year: u32) -> Option<&'static str> {
    YEAR_THEMES
        .iter()
        .find(|(year, _)| *year == personal_year)
        .map(|(_, theme)| *theme)
}

const READINGS: [Reading; 11] = [
    Reading {
        number: 1,
        keywords: "Initiative • Identity • Leadership",
        strengths: &["Determination and autonomy", "Natural leadership", "Ability to start projects"],
        challenges: &["Impatience, excess control", "Tendency toward competitive isolation"],
        suggestions: &[
            "Define your vision in one sentence",
            "Delegate at least one task today",
            "Celebrate small wins",
        ],
    },
    Reading {
        number: 2,
        keywords: "Cooperation • Sensitivity • Diplomacy",
        strengths: &["Listening and mediation", "Relational intuition", "Creating harmony"],
        challenges: &["Too much compliance", "Avoiding conflict"],
        suggestions: &[
            "Set clear boundaries",
            "Ask for written feedback",
            "Learn to say a kind 'no'",
        ],
    },
    Reading {
        number: 3,
        keywords: "Expression • Creativity • Sociability",
        strengths: &["Vivid communication", "Storytelling talent", "Contagious enthusiasm"],
        challenges: &["Inconsistency and scattering", "Overexposure"],
        suggestions: &[
            "Write one page every day",
            "Cut the superfluous by 20%",
            "Schedule a fixed creative slot",
        ],
    },
    Reading {
        number: 4,
        keywords: "Order • Method • Concreteness",
        strengths: &["Reliability and discipline", "Systems thinking", "Resilience"],
        challenges: &["Rigidity, perfectionism", "Fear of change"],
        suggestions: &[
            "Work in time blocks",
            "Focus on the essentials first",
            "Introduce small daily improvements",
        ],
    },
    Reading {
        number: 5,
        keywords: "Freedom • Versatility • Experience",
        strengths: &["Quick adaptability", "Exploratory curiosity", "Dynamic energy"],
        challenges: &["Scattering, impulsiveness", "Trouble keeping routines"],
        suggestions: &[
            "Run a 5-day sprint on one topic",
            "Limit your channels of attention",
            "Set up a daily micro-routine",
        ],
    },
    Reading {
        number: 6,
        keywords: "Care • Responsibility • Balance",
        strengths: &["Sense of duty", "Attention to others", "Aesthetic taste"],
        challenges: &["Taking on too much", "Emotional control"],
        suggestions: &[
            "Carve out 15 minutes for yourself",
            "Ask those close to you for support",
            "Take care of one aesthetic detail",
        ],
    },
    Reading {
        number: 7,
        keywords: "Research • Introspection • Learning",
        strengths: &["Deep analysis", "Critical thinking", "Independence"],
        challenges: &["Too much abstraction", "Social withdrawal"],
        suggestions: &[
            "Study 30 minutes a day",
            "Share one insight a week",
            "Practice silence and walks",
        ],
    },
    Reading {
        number: 8,
        keywords: "Action • Autonomy • Pragmatism",
        strengths: &["Focus on results", "Resource management", "Decisive courage"],
        challenges: &["Workaholism", "Purely utilitarian outlook"],
        suggestions: &[
            "Set quarterly goals",
            "Fix a stopping time",
            "Acknowledge other people's merits",
        ],
    },
    Reading {
        number: 9,
        keywords: "Vision • Idealism • Service",
        strengths: &["Broad perspective", "Empathy", "Ability to close cycles"],
        challenges: &["Disillusionment", "Wasted energy"],
        suggestions: &[
            "Pick one concrete cause",
            "Define the limits of your commitment",
            "Practice letting go",
        ],
    },
    Reading {
        number: 11,
        keywords: "Inspiration • Elevated vision (Master Number)",
        strengths: &["Deep insights", "Subtle charisma", "Spiritual creativity"],
        challenges: &["Nervous overload", "Self-doubt"],
        suggestions: &[
            "Practice grounding",
            "Turn insights into concrete actions",
            "Look for mentoring or a sounding board",
        ],
    },
    Reading {
        number: 22,
        keywords: "Architect • Large-scale achievement (Master Number)",
        strengths: &[
            "Vision plus execution",
            "Ability to build solid structures",
            "Systems leadership",
        ],
        challenges: &["Inner pressure", "Perfectionism paralysis"],
        suggestions: &[
            "Split the project into stages",
            "Prototype right away",
            "Write down your decisions",
        ],
    },
];

const YEAR_THEMES: [(u32, &str); 9] = [
    (1, "New beginnings, sowing energy. A good time to launch projects."),
    (2, "Relationships and collaboration. Patience and listening are needed."),
    (3, "Expression and creativity. A good time to communicate and get noticed."),
    (4, "Structure and foundations. Time for discipline and organization."),
    (5, "Change and freedom. Chances to travel or experiment."),
    (6, "Care, home, responsibility. Consolidate and look after others."),
    (7, "Study, introspection, research. A time for analysis."),
    (8, "Results and leadership. Focus on career and resources."),
    (9, "Endings and renewal. Time to let go and prepare for what is next."),
];
