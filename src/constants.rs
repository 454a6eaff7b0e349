// DOM hooks the page markup provides. Optional ones are skipped when absent.

// Canvases
pub const BG_CANVAS_ID: &str = "bg-canvas";
pub const AVATAR_CANVAS_ID: &str = "avatar-canvas"; // optional dust layer

// Guide panel
pub const GUIDE_PANEL_ID: &str = "guide-panel";
pub const GUIDE_TITLE_ID: &str = "guide-title";
pub const GUIDE_MESSAGE_ID: &str = "guide-message";
pub const GUIDE_TIPS_ID: &str = "guide-tips";
pub const GUIDE_ACTION_ID: &str = "guide-action";
pub const GUIDE_DISMISS_ID: &str = "guide-dismiss";
pub const GUIDE_REOPEN_ID: &str = "guide-reopen";
pub const GUIDE_PROGRESS_ID: &str = "guide-progress";

// Avatar widget
pub const AVATAR_ID: &str = "guide-avatar";
pub const AVATAR_LABEL_ID: &str = "avatar-label";
pub const AVATAR_SPEECH_ID: &str = "avatar-speech";
pub const AVATAR_EXPAND_ID: &str = "avatar-expand";
pub const AVATAR_NARRATE_ID: &str = "avatar-narrate";
pub const AVATAR_OPEN_ID: &str = "avatar-open";

// Page effects
pub const HERO_CONTENT_ID: &str = "hero-content";
pub const SPOTLIGHT_ID: &str = "spotlight";
pub const TESTIMONIAL_ID_PREFIX: &str = "testimonial-";

// Classes toggled on the guide panel
pub const CLASS_HIDDEN: &str = "hidden";
pub const CLASS_FADING: &str = "guide-fading";
pub const CLASS_ACTIVE: &str = "active";

// Spotlight tint
pub const SPOTLIGHT_RGBA: &str = "rgba(0, 84, 64, 0.08)";
