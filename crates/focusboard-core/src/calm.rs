//! Built-in calm-down guidance and tips.
//!
//! Static content only. Nothing here touches application state.

use serde::Serialize;

/// A short self-regulation exercise.
#[derive(Debug, Clone, Serialize)]
pub struct Exercise {
    pub name: &'static str,
    pub steps: &'static [&'static str],
}

/// The payload shown when the user asks for help calming down.
#[derive(Debug, Clone, Serialize)]
pub struct CalmDownGuide {
    pub title: &'static str,
    pub intro: &'static str,
    pub exercises: &'static [Exercise],
}

static GUIDE: CalmDownGuide = CalmDownGuide {
    title: "Take a Moment to Breathe",
    intro: "Try these calming techniques:",
    exercises: &[
        Exercise {
            name: "Box Breathing",
            steps: &[
                "Breathe in for 4 counts",
                "Hold for 4 counts",
                "Breathe out for 4 counts",
                "Hold for 4 counts",
                "Repeat 4 times",
            ],
        },
        Exercise {
            name: "5-4-3-2-1 Grounding",
            steps: &[
                "Name 5 things you can see",
                "4 things you can touch",
                "3 things you can hear",
                "2 things you can smell",
                "1 thing you can taste",
            ],
        },
    ],
};

/// Tips shown next to the timer.
pub const SUCCESS_TIPS: &[&str] = &[
    "Break tasks into small steps",
    "Take breaks between focus sessions",
    "Celebrate small wins",
    "One task at a time",
];

pub fn guide() -> &'static CalmDownGuide {
    &GUIDE
}

impl CalmDownGuide {
    /// Plain-text rendering for terminals and logs.
    pub fn render(&self) -> String {
        let mut out = format!("{}\n\n{}\n", self.title, self.intro);
        for exercise in self.exercises {
            out.push_str(&format!("\n{}:\n", exercise.name));
            for step in exercise.steps {
                out.push_str(&format!("  {step}\n"));
            }
        }
        out
    }
}

/// Render the tip list under its heading.
pub fn render_tips() -> String {
    let mut out = String::from("Tips for Success:\n");
    for tip in SUCCESS_TIPS {
        out.push_str(&format!("  - {tip}\n"));
    }
    out
}
