/// State for the create-a-tool flow: content → ideas → tool → feedback → publish
use crate::api::PublishedTool;
use crate::content::ContentKind;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Phase {
    #[default]
    Idle,
    ExtractingContent,
    GeneratingIdeas,
    GeneratingTool,
    Updating,
    Publishing,
}

impl Phase {
    pub fn is_busy(&self) -> bool {
        !matches!(self, Phase::Idle)
    }
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct Workflow {
    pub content: String,
    pub kind: ContentKind,
    pub ideas: Vec<String>,
    pub selected_idea: Option<String>,
    /// Raw blob from the backend; the preview re-parses it on every change
    pub tool: String,
    pub feedback: String,
    pub show_other_ideas: bool,
    pub published: Option<PublishedTool>,
    pub phase: Phase,
}

impl Workflow {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start over with new content
    pub fn begin_submission(&mut self, kind: ContentKind) {
        *self = Workflow {
            kind,
            phase: match kind {
                ContentKind::Text => Phase::GeneratingIdeas,
                ContentKind::Url => Phase::ExtractingContent,
            },
            ..Workflow::new()
        };
    }

    pub fn content_extracted(&mut self) {
        self.phase = Phase::GeneratingIdeas;
    }

    /// Keep the (possibly extracted) content for later generate/update calls
    pub fn ideas_ready(&mut self, content: String, ideas: Vec<String>) {
        self.content = content;
        self.ideas = ideas;
        self.phase = Phase::Idle;
    }

    pub fn select_idea(&mut self, idea: &str) {
        self.selected_idea = Some(idea.to_string());
        self.tool.clear();
        self.feedback.clear();
        self.show_other_ideas = false;
        self.published = None;
        self.phase = Phase::GeneratingTool;
    }

    pub fn tool_ready(&mut self, tool: String) {
        self.tool = tool;
        self.phase = Phase::Idle;
    }

    pub fn set_feedback(&mut self, feedback: String) {
        self.feedback = feedback;
    }

    pub fn can_update(&self) -> bool {
        !self.tool.is_empty() && !self.feedback.trim().is_empty() && !self.phase.is_busy()
    }

    /// Returns false when there is nothing to send
    pub fn begin_update(&mut self) -> bool {
        if !self.can_update() {
            return false;
        }
        self.phase = Phase::Updating;
        true
    }

    /// A revised tool replaces the old one and invalidates any earlier publish
    pub fn feedback_applied(&mut self, tool: String) {
        self.tool = tool;
        self.feedback.clear();
        self.published = None;
        self.phase = Phase::Idle;
    }

    pub fn begin_publish(&mut self) -> bool {
        if self.tool.is_empty() || self.phase.is_busy() {
            return false;
        }
        self.phase = Phase::Publishing;
        true
    }

    pub fn published(&mut self, tool: PublishedTool) {
        self.published = Some(tool);
        self.phase = Phase::Idle;
    }

    pub fn show_other_ideas(&mut self) {
        self.show_other_ideas = true;
    }

    /// Any backend failure drops back to idle, keeping what we already have
    pub fn fail(&mut self) {
        self.phase = Phase::Idle;
    }

    pub fn other_ideas(&self) -> Vec<&str> {
        self.ideas
            .iter()
            .filter(|idea| Some(idea.as_str()) != self.selected_idea.as_deref())
            .map(String::as_str)
            .collect()
    }

    /// Idea picker is shown until a tool exists
    pub fn show_idea_picker(&self) -> bool {
        !self.phase.is_busy() && !self.ideas.is_empty() && self.tool.is_empty()
    }

    pub fn has_tool(&self) -> bool {
        !self.tool.is_empty()
    }
}
