use tracing::debug;

/// The seven wizard screens, in display order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Step {
    General,
    About,
    Skills,
    Projects,
    Experience,
    Education,
    Confirm,
}

impl Step {
    pub const ALL: [Step; 7] = [
        Step::General,
        Step::About,
        Step::Skills,
        Step::Projects,
        Step::Experience,
        Step::Education,
        Step::Confirm,
    ];

    pub fn index(self) -> usize {
        self as usize
    }

    pub fn from_index(index: usize) -> Option<Step> {
        Self::ALL.get(index).copied()
    }

    pub fn title(self) -> &'static str {
        match self {
            Step::General => "general",
            Step::About => "about",
            Step::Skills => "skills",
            Step::Projects => "projects",
            Step::Experience => "experience",
            Step::Education => "education",
            Step::Confirm => "confirm",
        }
    }

    /// Heading shown at the top of the step.
    pub fn label(self) -> &'static str {
        match self {
            Step::General => "General Information",
            Step::About => "About",
            Step::Skills => "Skills",
            Step::Projects => "Projects",
            Step::Experience => "Experience",
            Step::Education => "Education",
            Step::Confirm => "Confirm",
        }
    }
}

pub const LAST_STEP_INDEX: usize = Step::ALL.len() - 1;

/// Tracks the visible step. Movement is never gated on a step's contents;
/// the draft is only validated when it is submitted.
#[derive(Debug, Clone, Default)]
pub struct StepNavigator {
    current: usize,
}

impl StepNavigator {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn current(&self) -> Step {
        Step::ALL[self.current]
    }

    pub fn current_index(&self) -> usize {
        self.current
    }

    /// Moves to `index`, clamped to the last step, and returns the step the
    /// view should scroll to.
    pub fn go_to(&mut self, index: usize) -> Step {
        let target = index.min(LAST_STEP_INDEX);
        if target != self.current {
            debug!(
                from = self.current().title(),
                to = Step::ALL[target].title(),
                "wizard step changed"
            );
        }
        self.current = target;
        self.current()
    }

    pub fn next(&mut self) -> Step {
        self.go_to(self.current + 1)
    }

    pub fn previous(&mut self) -> Step {
        self.go_to(self.current.saturating_sub(1))
    }

    /// Records a step the user reached by swiping rather than by the buttons.
    pub fn sync(&mut self, index: usize) -> Step {
        self.go_to(index)
    }

    pub fn is_first(&self) -> bool {
        self.current == 0
    }

    pub fn is_last(&self) -> bool {
        self.current == LAST_STEP_INDEX
    }
}
