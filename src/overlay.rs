use crate::constants::*;
use crate::core::avatar::{section_description, section_link, AvatarPose};
use crate::core::page::HeroParallax;
use crate::core::GuideSelector;
use crate::dom;
use glam::Vec2;
use web_sys as web;

#[inline]
pub fn show(document: &web::Document, id: &str) {
    if let Some(el) = document.get_element_by_id(id) {
        _ = el.class_list().remove_1(CLASS_HIDDEN);
        // fallback for environments without CSS class
        _ = el.set_attribute("style", "");
    }
}

#[inline]
pub fn hide(document: &web::Document, id: &str) {
    if let Some(el) = document.get_element_by_id(id) {
        _ = el.class_list().add_1(CLASS_HIDDEN);
        // fallback
        _ = el.set_attribute("style", "display:none");
    }
}

/// Mirrors the guide selector into the panel: content, side, fade and
/// dismissed state.
pub fn render_guide(document: &web::Document, guide: &GuideSelector) {
    let view = guide.view();
    if view.dismissed {
        hide(document, GUIDE_PANEL_ID);
        show(document, GUIDE_REOPEN_ID);
        return;
    }
    hide(document, GUIDE_REOPEN_ID);
    show(document, GUIDE_PANEL_ID);

    let content = view.content;
    dom::set_class(document, GUIDE_PANEL_ID, CLASS_FADING, view.transitioning);
    if let Some(panel) = document.get_element_by_id(GUIDE_PANEL_ID) {
        _ = panel.set_attribute("data-side", content.side.as_str());
        _ = panel.set_attribute("data-section", content.section);
    }
    dom::set_text(document, GUIDE_TITLE_ID, content.title);
    dom::set_text(document, GUIDE_MESSAGE_ID, content.message);
    fill_list(document, GUIDE_TIPS_ID, content.tips.iter().map(|t| (*t, false)));

    match content.action {
        Some(action) => {
            dom::set_text(document, GUIDE_ACTION_ID, action.label);
            show(document, GUIDE_ACTION_ID);
        }
        None => hide(document, GUIDE_ACTION_ID),
    }

    fill_list(document, GUIDE_PROGRESS_ID, guide.progress().map(|(_, on)| ("", on)));
}

/// Replaces the children of `#id` with one `<li>` per item.
fn fill_list<'a>(
    document: &web::Document,
    id: &str,
    items: impl Iterator<Item = (&'a str, bool)>,
) {
    let Some(list) = document.get_element_by_id(id) else {
        return;
    };
    list.set_inner_html("");
    for (text, active) in items {
        let Ok(li) = document.create_element("li") else {
            continue;
        };
        if !text.is_empty() {
            li.set_text_content(Some(text));
        }
        if active {
            _ = li.class_list().add_1(CLASS_ACTIVE);
        }
        _ = list.append_child(&li);
    }
}

/// Publishes the pose as CSS custom properties for the avatar scene to read.
pub fn apply_avatar_pose(document: &web::Document, pose: AvatarPose) {
    let props = [
        ("--avatar-pitch", pose.rotation.x),
        ("--avatar-yaw", pose.rotation.y),
        ("--avatar-x", pose.position.x),
        ("--avatar-y", pose.position.y),
        ("--avatar-z", pose.position.z),
        ("--avatar-scale", pose.scale),
    ];
    for (name, value) in props {
        dom::set_style(document, AVATAR_ID, name, &format!("{:.4}", value));
    }
}

pub fn render_avatar_label(document: &web::Document, key: &str) {
    let heading = if key == "home" {
        "Virtual Guide".to_owned()
    } else {
        key.to_uppercase()
    };
    dom::set_text(document, AVATAR_LABEL_ID, &format!("{} — {}", heading, section_description(key)));
    if let Some(el) = document.get_element_by_id(AVATAR_OPEN_ID) {
        _ = el.set_attribute("href", section_link(key));
    }
}

pub fn render_avatar_toggles(document: &web::Document, speech_on: bool, expanded: bool) {
    dom::set_text(document, AVATAR_SPEECH_ID, if speech_on { "🔊" } else { "🔈" });
    dom::set_text(document, AVATAR_EXPAND_ID, if expanded { "▾" } else { "▴" });
    dom::set_class(document, AVATAR_ID, "expanded", expanded);
}

pub fn apply_hero_parallax(document: &web::Document, p: HeroParallax) {
    dom::set_style(
        document,
        HERO_CONTENT_ID,
        "transform",
        &format!("translateY({:.1}px)", p.offset_px),
    );
    dom::set_style(document, HERO_CONTENT_ID, "opacity", &format!("{:.3}", p.opacity));
}

pub fn apply_spotlight(document: &web::Document, center_pct: Vec2) {
    dom::set_style(
        document,
        SPOTLIGHT_ID,
        "background",
        &format!(
            "radial-gradient(circle at {:.1}% {:.1}%, {} 0%, transparent 65%)",
            center_pct.x, center_pct.y, SPOTLIGHT_RGBA
        ),
    );
}

pub fn show_testimonial(document: &web::Document, index: usize, count: usize) {
    for i in 0..count {
        let id = format!("{}{}", TESTIMONIAL_ID_PREFIX, i);
        dom::set_class(document, &id, CLASS_ACTIVE, i == index);
    }
}
