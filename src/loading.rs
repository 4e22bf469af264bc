/// Rotating status lines shown while the backend works
use crate::workflow::Phase;

pub const ROTATE_INTERVAL_MS: u32 = 2_500;

const EXTRACTING: &[&str] = &[
    "Fetching your blog post...",
    "Pulling out the article text...",
    "Skipping the navigation and ads...",
];

const IDEAS: &[&str] = &[
    "Reading your content...",
    "Brainstorming interactive tool ideas...",
    "Picking the ideas your readers will love...",
];

const TOOL: &[&str] = &[
    "Generating tool...",
    "Writing the markup...",
    "Styling the layout...",
    "Wiring up the interactivity...",
];

const UPDATING: &[&str] = &[
    "Applying your feedback...",
    "Reworking the tool...",
    "Double-checking the changes...",
];

const PUBLISHING: &[&str] = &["Publishing your tool...", "Uploading to hosting..."];

pub fn messages_for(phase: Phase) -> &'static [&'static str] {
    match phase {
        Phase::Idle => &[],
        Phase::ExtractingContent => EXTRACTING,
        Phase::GeneratingIdeas => IDEAS,
        Phase::GeneratingTool => TOOL,
        Phase::Updating => UPDATING,
        Phase::Publishing => PUBLISHING,
    }
}

/// Cycles through the messages for one phase
#[derive(Debug, Clone, PartialEq)]
pub struct LoadingMessages {
    messages: &'static [&'static str],
    index: usize,
}

impl LoadingMessages {
    pub fn for_phase(phase: Phase) -> LoadingMessages {
        LoadingMessages {
            messages: messages_for(phase),
            index: 0,
        }
    }

    pub fn current(&self) -> Option<&'static str> {
        self.messages.get(self.index).copied()
    }

    pub fn advance(&mut self) {
        if !self.messages.is_empty() {
            self.index = (self.index + 1) % self.messages.len();
        }
    }
}
