use super::constants::GUIDE_TRANSITION_SEC;
use super::sections::{resolve_index, GuideAction, LayoutError, Section, Side, UnmatchedPolicy};
use smallvec::SmallVec;

/// Everything the guide panel displays, copied whole from one section.
#[derive(Clone, Debug, PartialEq)]
pub struct GuideContent {
    pub section: &'static str,
    pub side: Side,
    pub title: &'static str,
    pub message: &'static str,
    pub tips: SmallVec<[&'static str; 4]>,
    pub action: Option<GuideAction>,
}

impl From<&Section> for GuideContent {
    fn from(s: &Section) -> Self {
        Self {
            section: s.id,
            side: s.side,
            title: s.title,
            message: s.message,
            tips: s.tips.iter().copied().collect(),
            action: s.action,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum GuidePhase {
    Showing,
    /// Panel is fading out; `target` is adopted once `remaining` runs out.
    Transitioning { target: usize, remaining: f32 },
    Dismissed,
}

/// Changes the page needs to mirror in the DOM.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GuideEvent {
    Hiding { target: &'static str },
    Adopted(&'static str),
    /// The reader scrolled back before the pending section was adopted.
    Cancelled,
    Dismissed,
    Reopened(&'static str),
}

#[derive(Clone, Copy, Debug)]
pub struct GuideView<'a> {
    pub visible: bool,
    pub transitioning: bool,
    pub dismissed: bool,
    pub content: &'a GuideContent,
}

pub struct GuideSelector {
    sections: &'static [Section],
    policy: UnmatchedPolicy,
    delay_sec: f32,
    phase: GuidePhase,
    content: GuideContent,
    displayed: usize,
    last_matched: usize,
    torn_down: bool,
}

impl GuideSelector {
    /// Starts showing the section that matches `initial_scroll` (nearest one
    /// if nothing matches, whatever the policy).
    pub fn new(
        sections: &'static [Section],
        initial_scroll: f32,
        policy: UnmatchedPolicy,
    ) -> Result<Self, LayoutError> {
        let initial = resolve_index(sections, initial_scroll, policy)
            .or_else(|| resolve_index(sections, initial_scroll, UnmatchedPolicy::ClampNearest))
            .ok_or(LayoutError::Empty)?;
        Ok(Self {
            sections,
            policy,
            delay_sec: GUIDE_TRANSITION_SEC,
            phase: GuidePhase::Showing,
            content: GuideContent::from(&sections[initial]),
            displayed: initial,
            last_matched: initial,
            torn_down: false,
        })
    }

    pub fn with_transition_delay(mut self, delay_sec: f32) -> Self {
        self.delay_sec = delay_sec.max(0.0);
        self
    }

    pub fn sections(&self) -> &'static [Section] {
        self.sections
    }

    pub fn phase(&self) -> GuidePhase {
        self.phase
    }

    pub fn content(&self) -> &GuideContent {
        &self.content
    }

    pub fn action(&self) -> Option<GuideAction> {
        self.content.action
    }

    pub fn last_matched(&self) -> &'static str {
        self.sections[self.last_matched].id
    }

    pub fn is_torn_down(&self) -> bool {
        self.torn_down
    }

    pub fn view(&self) -> GuideView<'_> {
        let dismissed = self.phase == GuidePhase::Dismissed;
        GuideView {
            visible: !dismissed,
            transitioning: matches!(self.phase, GuidePhase::Transitioning { .. }),
            dismissed,
            content: &self.content,
        }
    }

    /// Section ids in order, flagging the one on display.
    pub fn progress(&self) -> impl Iterator<Item = (&'static str, bool)> + '_ {
        self.sections
            .iter()
            .enumerate()
            .map(move |(i, s)| (s.id, i == self.displayed))
    }

    pub fn on_scroll(&mut self, scroll_y: f32) -> Option<GuideEvent> {
        if self.torn_down {
            return None;
        }
        let idx = resolve_index(self.sections, scroll_y, self.policy)?;
        self.last_matched = idx;
        match self.phase {
            GuidePhase::Dismissed => None,
            GuidePhase::Showing if idx == self.displayed => None,
            GuidePhase::Showing => Some(self.begin_transition(idx)),
            GuidePhase::Transitioning { .. } if idx == self.displayed => {
                self.phase = GuidePhase::Showing;
                Some(GuideEvent::Cancelled)
            }
            GuidePhase::Transitioning { target, .. } if target == idx => None,
            GuidePhase::Transitioning { .. } => Some(self.begin_transition(idx)),
        }
    }

    pub fn tick(&mut self, dt_sec: f32) -> Option<GuideEvent> {
        if self.torn_down {
            return None;
        }
        let GuidePhase::Transitioning { target, remaining } = self.phase else {
            return None;
        };
        let remaining = remaining - dt_sec.max(0.0);
        if remaining > 0.0 {
            self.phase = GuidePhase::Transitioning { target, remaining };
            return None;
        }
        self.adopt(target);
        self.phase = GuidePhase::Showing;
        Some(GuideEvent::Adopted(self.content.section))
    }

    pub fn dismiss(&mut self) -> Option<GuideEvent> {
        if self.torn_down || self.phase == GuidePhase::Dismissed {
            return None;
        }
        self.phase = GuidePhase::Dismissed;
        Some(GuideEvent::Dismissed)
    }

    /// Back to showing, with the section the reader is on now.
    pub fn reopen(&mut self) -> Option<GuideEvent> {
        if self.torn_down || self.phase != GuidePhase::Dismissed {
            return None;
        }
        self.adopt(self.last_matched);
        self.phase = GuidePhase::Showing;
        Some(GuideEvent::Reopened(self.content.section))
    }

    /// Drops any pending transition; every later call is a no-op.
    pub fn teardown(&mut self) {
        if let GuidePhase::Transitioning { .. } = self.phase {
            self.phase = GuidePhase::Showing;
        }
        self.torn_down = true;
    }

    fn begin_transition(&mut self, target: usize) -> GuideEvent {
        self.phase = GuidePhase::Transitioning {
            target,
            remaining: self.delay_sec,
        };
        GuideEvent::Hiding {
            target: self.sections[target].id,
        }
    }

    fn adopt(&mut self, idx: usize) {
        if idx != self.displayed {
            log::debug!(
                "[guide] {} -> {}",
                self.sections[self.displayed].id,
                self.sections[idx].id
            );
        }
        self.displayed = idx;
        self.content = GuideContent::from(&self.sections[idx]);
    }
}
