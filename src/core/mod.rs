pub mod avatar;
pub mod carousel;
pub mod constants;
pub mod guide;
pub mod narration;
pub mod page;
pub mod particles;
pub mod sections;
pub mod smoothing;

pub use guide::{GuideEvent, GuideSelector};
pub use narration::Utterance;
pub use page::{FrameUpdate, PageState};
pub use particles::{FieldParams, ParticleField};
pub use sections::{ActionTarget, Side, UnmatchedPolicy, SECTIONS};
