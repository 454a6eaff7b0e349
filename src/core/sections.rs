use std::collections::HashSet;
use thiserror::Error;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Side {
    Left,
    Right,
}

impl Side {
    pub fn as_str(self) -> &'static str {
        match self {
            Side::Left => "left",
            Side::Right => "right",
        }
    }
}

/// Side effect requested by a guide action button. The guide only names it;
/// the page performs it.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ActionTarget {
    /// Smooth-scroll to the element with this id.
    ScrollTo(&'static str),
    /// Assign this href to the document location.
    Navigate(&'static str),
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct GuideAction {
    pub label: &'static str,
    pub target: ActionTarget,
}

/// Maps a vertical scroll range `[start, end)` to guide content.
#[derive(Clone, Debug, PartialEq)]
pub struct Section {
    pub id: &'static str,
    pub start: f32,
    pub end: f32,
    pub side: Side,
    pub title: &'static str,
    pub message: &'static str,
    pub tips: &'static [&'static str],
    pub action: Option<GuideAction>,
}

impl Section {
    #[inline]
    pub fn contains(&self, scroll_y: f32) -> bool {
        scroll_y >= self.start && scroll_y < self.end
    }

    #[inline]
    fn distance_to(&self, scroll_y: f32) -> f32 {
        if scroll_y < self.start {
            self.start - scroll_y
        } else if scroll_y >= self.end {
            scroll_y - self.end
        } else {
            0.0
        }
    }
}

pub static SECTIONS: &[Section] = &[
    Section {
        id: "hero",
        start: 0.0,
        end: 600.0,
        side: Side::Right,
        title: "Welcome to SHCC! 👋",
        message: "I'm Dr. Sarah, your virtual guide. Let me show you how we're revolutionizing healthcare in Africa.",
        tips: &[
            "Explore our two world-class institutions",
            "Scroll down to see our impressive stats",
            "Click on any institution to learn more",
        ],
        action: None,
    },
    Section {
        id: "stats",
        start: 600.0,
        end: 1200.0,
        side: Side::Left,
        title: "Our Impact by Numbers 📊",
        message: "These statistics represent years of dedication to medical excellence and patient care.",
        tips: &[
            "40+ academic programs across specialties",
            "15K+ students and patients served annually",
            "100+ active research projects",
            "50+ international partnerships",
        ],
        action: None,
    },
    Section {
        id: "institutions",
        start: 1200.0,
        end: 2400.0,
        side: Side::Right,
        title: "Two Pillars of Excellence 🏥",
        message: "Our Faculty of Medicine and Hospital work in perfect harmony to advance healthcare.",
        tips: &[
            "Faculty: 15+ programs, 120+ expert faculty",
            "Hospital: 25+ specialties, 350 beds",
            "Combined: 50K+ patients treated yearly",
            "Click any card to explore in detail",
        ],
        action: Some(GuideAction {
            label: "Explore Institutions",
            target: ActionTarget::ScrollTo("institutions"),
        }),
    },
    Section {
        id: "testimonials",
        start: 2400.0,
        end: 3200.0,
        side: Side::Left,
        title: "Hear from Our Community 💬",
        message: "Real stories from doctors, faculty, and students who are part of the SHCC family.",
        tips: &[
            "World-class research opportunities",
            "State-of-the-art medical facilities",
            "Supportive learning environment",
            "International recognition",
        ],
        action: None,
    },
    Section {
        id: "mission",
        start: 3200.0,
        end: 4000.0,
        side: Side::Right,
        title: "Our Vision for the Future 🌟",
        message: "We're committed to transforming healthcare across Africa and setting global standards.",
        tips: &[
            "Excellence: World-class standards",
            "Innovation: Cutting-edge research",
            "Compassion: Patient-centered care",
            "Collaboration: Global partnerships",
        ],
        action: None,
    },
    Section {
        id: "cta",
        start: 4000.0,
        end: 10000.0,
        side: Side::Left,
        title: "Ready to Join Us? 🚀",
        message: "Your journey in healthcare innovation starts here. Let's shape the future together!",
        tips: &[
            "Apply for our medical programs",
            "Schedule a hospital tour",
            "Join our research initiatives",
            "Connect with our admissions team",
        ],
        action: Some(GuideAction {
            label: "Get Started",
            target: ActionTarget::Navigate("#contact"),
        }),
    },
];

/// What to do with a scroll offset that no section range covers.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum UnmatchedPolicy {
    /// Use the section whose range is closest to the offset.
    #[default]
    ClampNearest,
    /// Keep whatever the guide last matched.
    RetainLast,
}

/// Index of the first section whose range contains `scroll_y`. List order
/// breaks ties if ranges overlap.
pub fn find_index(sections: &[Section], scroll_y: f32) -> Option<usize> {
    sections.iter().position(|s| s.contains(scroll_y))
}

pub fn nearest_index(sections: &[Section], scroll_y: f32) -> Option<usize> {
    if scroll_y.is_nan() {
        return None;
    }
    let mut best: Option<(usize, f32)> = None;
    for (i, s) in sections.iter().enumerate() {
        let d = s.distance_to(scroll_y);
        match best {
            Some((_, bd)) if d >= bd => {}
            _ => best = Some((i, d)),
        }
    }
    best.map(|(i, _)| i)
}

pub fn resolve_index(sections: &[Section], scroll_y: f32, policy: UnmatchedPolicy) -> Option<usize> {
    find_index(sections, scroll_y).or_else(|| match policy {
        UnmatchedPolicy::ClampNearest => nearest_index(sections, scroll_y),
        UnmatchedPolicy::RetainLast => None,
    })
}

pub fn find_section(sections: &[Section], scroll_y: f32) -> Option<&Section> {
    find_index(sections, scroll_y).map(|i| &sections[i])
}

pub fn resolve_section(
    sections: &[Section],
    scroll_y: f32,
    policy: UnmatchedPolicy,
) -> Option<&Section> {
    resolve_index(sections, scroll_y, policy).map(|i| &sections[i])
}

#[derive(Debug, Error, PartialEq)]
pub enum LayoutError {
    #[error("section table is empty")]
    Empty,
    #[error("section `{id}` has an empty range [{start}, {end})")]
    EmptyRange {
        id: &'static str,
        start: f32,
        end: f32,
    },
    #[error("gap between `{before}` (ends at {end}) and `{after}` (starts at {start})")]
    Gap {
        before: &'static str,
        after: &'static str,
        end: f32,
        start: f32,
    },
    #[error("`{before}` (ends at {end}) overlaps `{after}` (starts at {start})")]
    Overlap {
        before: &'static str,
        after: &'static str,
        end: f32,
        start: f32,
    },
    #[error("duplicate section id `{0}`")]
    DuplicateId(&'static str),
}

/// Checks that ranges are non-empty, increasing and contiguous, and that ids
/// are unique.
pub fn validate_layout(sections: &[Section]) -> Result<(), LayoutError> {
    if sections.is_empty() {
        return Err(LayoutError::Empty);
    }
    let mut seen = HashSet::with_capacity(sections.len());
    for s in sections {
        if s.end <= s.start {
            return Err(LayoutError::EmptyRange {
                id: s.id,
                start: s.start,
                end: s.end,
            });
        }
        if !seen.insert(s.id) {
            return Err(LayoutError::DuplicateId(s.id));
        }
    }
    for pair in sections.windows(2) {
        let (a, b) = (&pair[0], &pair[1]);
        if a.end < b.start {
            return Err(LayoutError::Gap {
                before: a.id,
                after: b.id,
                end: a.end,
                start: b.start,
            });
        }
        if a.end > b.start {
            return Err(LayoutError::Overlap {
                before: a.id,
                after: b.id,
                end: a.end,
                start: b.start,
            });
        }
    }
    Ok(())
}
