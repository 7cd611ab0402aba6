use crate::{
    foundation::core::{Fps, FrameIndex, Vec2},
    foundation::error::PitchResult,
    pitch::palette::COLORS,
    pitch::scenes::{SMOOTH, canvas_for, entrance, fade_window, remap},
    visual::model::{Element, TextRole, VisualDescription},
};

const COLUMNS: [&str; 4] = ["指标", "React", "Flutter", "Splash"];

/// `(metric, react, flutter, splash, delay)`.
const ROWS: [(&str, &str, &str, &str, u64); 5] = [
    ("包体积", "150KB+", "2MB+", "800KB", 15),
    ("首次绘制", "500ms+", "300ms+", "<50ms", 30),
    ("60fps 保证", "否", "部分", "是", 45),
    ("内存占用", "高", "中", "低", 60),
    ("AI 原生", "否", "否", "是", 75),
];

const FEATURES: [(&str, &str, &str); 3] = [
    ("🦀", "Rust 安全", "内存安全，无 GC 暂停"),
    ("⚡", "GPU 加速", "原生渲染，丝滑60fps"),
    ("🌐", "跨平台", "iOS/Android/桌面/Web"),
];

/// Comparison table rows slide in one after another, then the feature cards fade up.
pub fn tech_scene(local: FrameIndex, fps: Fps) -> PitchResult<VisualDescription> {
    let title = entrance(local, fps, 0, SMOOTH)?;
    let features = fade_window(local, 100.0, 120.0)?;

    let mut desc = canvas_for("tech");
    desc.push(
        Element::text("title", "技术差异化优势", TextRole::Heading, COLORS.text_primary)
            .opacity(title),
    )
    .push(
        Element::text(
            "subtitle",
            "原生性能 + 动态灵活 + Rust 安全",
            TextRole::Subtitle,
            COLORS.text_secondary,
        )
        .opacity(title),
    );

    for (i, column) in COLUMNS.iter().enumerate() {
        let fill = if i == COLUMNS.len() - 1 {
            COLORS.accent
        } else {
            COLORS.primary
        };
        desc.push(
            Element::panel(format!("header_{i}_cell"), Vec2::new(240.0, 56.0), 0.0, fill)
                .opacity(title),
        )
        .push(
            Element::text(format!("header_{i}"), *column, TextRole::Body, COLORS.text_primary)
                .opacity(title),
        );
    }

    for (r, (metric, react, flutter, splash, delay)) in ROWS.iter().enumerate() {
        let progress = entrance(local, fps, *delay, SMOOTH)?;
        let dx = remap(progress, -30.0, 0.0)?;
        let cells = [
            (*metric, COLORS.text_primary),
            (*react, COLORS.chart[3]),
            (*flutter, COLORS.chart[2]),
            (*splash, COLORS.accent),
        ];
        let highlight = COLORS.accent.fade(0x20);
        desc.push(
            Element::panel(format!("row_{r}_highlight"), Vec2::new(240.0, 56.0), 0.0, highlight)
                .opacity(progress)
                .translate(dx, 0.0),
        );
        for (c, (text, color)) in cells.into_iter().enumerate() {
            desc.push(
                Element::text(format!("row_{r}_{c}"), text, TextRole::Body, color)
                    .opacity(progress)
                    .translate(dx, 0.0),
            );
        }
    }

    for (i, (icon, heading, body)) in FEATURES.iter().enumerate() {
        let card = Vec2::new(360.0, 160.0);
        desc.push(
            Element::panel(format!("feature_{i}_card"), card, 16.0, COLORS.bg_card)
                .stroke(COLORS.primary.fade(0x30))
                .opacity(features),
        )
        .push(
            Element::glyph(format!("feature_{i}_icon"), *icon, COLORS.text_primary)
                .opacity(features),
        )
        .push(
            Element::text(format!("feature_{i}"), *heading, TextRole::Subtitle, COLORS.text_primary)
                .opacity(features),
        )
        .push(
            Element::text(
                format!("feature_{i}_body"),
                *body,
                TextRole::Caption,
                COLORS.text_secondary,
            )
            .opacity(features),
        );
    }
    Ok(desc)
}

#[cfg(test)]
#[path = "../../../tests/unit/pitch/scenes/tech.rs"]
mod tests;
