use crate::{
    animation::interpolate::interpolate_clamped,
    foundation::core::{Fps, FrameIndex, Rgba8Premul, Vec2},
    foundation::error::PitchResult,
    pitch::palette::COLORS,
    pitch::scenes::{BOUNCY, SMOOTH, canvas_for, cursor_visible, entrance, fade_window, remap},
    visual::model::{Element, TextRole, VisualDescription},
};

const PANEL_FILL: Rgba8Premul = Rgba8Premul::from_hex_rgb(0x1E1E2E);
const FIELD_FILL: Rgba8Premul = Rgba8Premul::from_hex_rgb(0x313244);
const TRACK_OFF: Rgba8Premul = Rgba8Premul::from_hex_rgb(0x45475A);
const INPUT_TEXT: Rgba8Premul = Rgba8Premul::from_hex_rgb(0xCDD6F4);
const PLACEHOLDER_TEXT: Rgba8Premul = Rgba8Premul::from_hex_rgb(0x6C7086);
const LABEL_TEXT: Rgba8Premul = Rgba8Premul::from_hex_rgb(0xA6ADC8);
const SECTION_TEXT: Rgba8Premul = Rgba8Premul::from_hex_rgb(0x89B4FA);
const COUNT_TEXT: Rgba8Premul = Rgba8Premul::from_hex_rgb(0xA6E3A1);

const PLACEHOLDER: &str = "Type a command... e.g. 'add button Click Me'";

/// A command typed into the input field: `(text, start frame, typing frames)`.
const COMMANDS: [(&str, u64, u64); 4] = [
    ("add label hel", 10, 25),
    ("add card User Profile", 55, 30),
    ("add progress 60", 105, 25),
    ("add switch Dark Model", 150, 30),
];

/// Frames after typing finishes during which the full command stays in the field.
const LINGER: u64 = 15;

const LABEL_AT: u64 = 40;
const CARD_AT: u64 = 90;
const PROGRESS_AT: u64 = 135;
const SWITCH_AT: u64 = 185;
const TOGGLE_AT: u64 = 210;

/// Text currently shown in the command field, or `None` between commands.
pub(crate) fn current_command(local: FrameIndex) -> PitchResult<Option<String>> {
    for (text, start, typing) in COMMANDS {
        if local.0 >= start && local.0 < start + typing + LINGER {
            let progress = interpolate_clamped(
                local.0 as f64,
                &[start as f64, (start + typing) as f64],
                &[0.0, 1.0],
            )?;
            let len = text.chars().count();
            let shown = (len as f64 * progress).floor() as usize;
            return Ok(Some(text.chars().take(shown).collect()));
        }
    }
    Ok(None)
}

/// Number of widgets generated so far.
pub(crate) fn widget_count(local: FrameIndex) -> usize {
    [LABEL_AT, CARD_AT, PROGRESS_AT, SWITCH_AT]
        .iter()
        .filter(|at| local.0 >= **at)
        .count()
}

/// Commands are typed one by one and each spawns a widget in the generated UI list.
pub fn demo_scene(local: FrameIndex, fps: Fps) -> PitchResult<VisualDescription> {
    let panel = entrance(local, fps, 0, SMOOTH)?;
    let command = current_command(local)?;
    let cursor = if cursor_visible(local) { 1.0 } else { 0.0 };

    let mut desc = canvas_for("demo");
    desc.push(
        Element::text(
            "title",
            "实时演示 - 自然语言生成 UI",
            TextRole::Heading,
            COLORS.text_primary,
        )
        .opacity(panel),
    )
    .push(Element::panel("panel", Vec2::new(1000.0, 640.0), 16.0, PANEL_FILL).scale(panel))
    .push(
        Element::text(
            "panel_heading",
            "Natural Language UI Generation",
            TextRole::Subtitle,
            COLORS.text_primary,
        )
        .scale(panel),
    )
    .push(
        Element::text(
            "panel_hint",
            "Type commands to dynamically generate UI widgets in real-time.",
            TextRole::Caption,
            LABEL_TEXT,
        )
        .scale(panel),
    )
    .push(
        Element::text("input_label", "Command Input", TextRole::Caption, SECTION_TEXT)
            .scale(panel),
    )
    .push(Element::panel("input_field", Vec2::new(760.0, 44.0), 6.0, FIELD_FILL).scale(panel));

    let input = match &command {
        Some(text) if !text.is_empty() => {
            Element::text("input", text.as_str(), TextRole::Mono, INPUT_TEXT)
        }
        _ => Element::text("input", PLACEHOLDER, TextRole::Mono, PLACEHOLDER_TEXT),
    };
    desc.push(input.scale(panel))
        .push(
            Element::glyph("input_cursor", "|", SECTION_TEXT)
                .opacity(cursor)
                .scale(panel),
        )
        .push(
            Element::text("generate", "Generate", TextRole::Caption, COLORS.text_primary)
                .scale(panel),
        )
        .push(
            Element::text(
                "widget_count",
                format!("{} widgets", widget_count(local)),
                TextRole::Caption,
                COUNT_TEXT,
            )
            .scale(panel),
        );

    if local.0 >= LABEL_AT {
        let s = entrance(local, fps, LABEL_AT, BOUNCY)?;
        desc.push(
            Element::text("widget_label", "hel", TextRole::Body, INPUT_TEXT)
                .scale(s)
                .opacity(remap(s, 0.0, 1.0)?),
        );
    }

    if local.0 >= CARD_AT {
        let s = entrance(local, fps, CARD_AT, BOUNCY)?;
        let opacity = remap(s, 0.0, 1.0)?;
        desc.push(
            Element::panel("widget_card", Vec2::new(944.0, 80.0), 8.0, COLORS.text_primary)
                .stroke(Rgba8Premul::from_hex_rgb(0xE0E0E0))
                .scale(s)
                .opacity(opacity),
        )
        .push(
            Element::text("widget_card_title", "user profile", TextRole::Body, LABEL_TEXT)
                .scale(s)
                .opacity(opacity),
        )
        .push(
            Element::text(
                "widget_card_body",
                "This is a dynamically generated card widget.",
                TextRole::Caption,
                PLACEHOLDER_TEXT,
            )
            .scale(s)
            .opacity(opacity),
        );
    }

    if local.0 >= PROGRESS_AT {
        let s = entrance(local, fps, PROGRESS_AT, BOUNCY)?;
        let opacity = remap(s, 0.0, 1.0)?;
        let fill = interpolate_clamped(
            local.0 as f64,
            &[PROGRESS_AT as f64, (PROGRESS_AT + 30) as f64],
            &[0.0, 60.0],
        )?;
        desc.push(
            Element::text(
                "widget_progress_label",
                format!("Progress: {}%", fill.round()),
                TextRole::Caption,
                LABEL_TEXT,
            )
            .scale(s)
            .opacity(opacity),
        )
        .push(
            Element::bar("widget_progress", fill / 100.0, COLORS.primary)
                .scale(s)
                .opacity(opacity),
        );
    }

    if local.0 >= SWITCH_AT {
        let s = entrance(local, fps, SWITCH_AT, BOUNCY)?;
        let opacity = remap(s, 0.0, 1.0)?;
        let knob = entrance(local, fps, TOGGLE_AT, 15.0)?;
        let track = if local.0 >= TOGGLE_AT {
            COLORS.primary
        } else {
            TRACK_OFF
        };
        desc.push(
            Element::text("widget_switch_label", "dark model", TextRole::Body, INPUT_TEXT)
                .scale(s)
                .opacity(opacity),
        )
        .push(
            Element::panel("widget_switch_track", Vec2::new(44.0, 24.0), 12.0, track)
                .scale(s)
                .opacity(opacity),
        )
        .push(
            Element::panel("widget_switch_knob", Vec2::new(20.0, 20.0), 10.0, COLORS.text_primary)
                .translate(remap(knob, 0.0, 20.0)?, 0.0)
                .opacity(opacity),
        );
    }

    desc.push(
        Element::text(
            "footer",
            "无限组件类型 · 即时生成 · 无需编写代码",
            TextRole::Body,
            COLORS.accent,
        )
        .opacity(fade_window(local, 220.0, 240.0)?),
    );
    Ok(desc)
}

#[cfg(test)]
#[path = "../../../tests/unit/pitch/scenes/demo.rs"]
mod tests;
