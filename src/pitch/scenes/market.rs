use crate::{
    foundation::core::{Fps, FrameIndex},
    foundation::error::PitchResult,
    pitch::palette::COLORS,
    pitch::scenes::{SMOOTH, canvas_for, entrance, fade_window, remap},
    visual::model::{Element, TextRole, VisualDescription},
};

/// Bars are drawn relative to this market size (billions USD).
const MAX_VALUE: f64 = 70.0;

struct Segment {
    label: &'static str,
    detail: &'static str,
    value: f64,
    delay: u64,
    chart: usize,
}

const SEGMENTS: [Segment; 3] = [
    Segment {
        label: "低代码/无代码",
        detail: "138亿 → 650亿美元 | CAGR 30%",
        value: 65.0,
        delay: 20,
        chart: 0,
    },
    Segment {
        label: "AI 代码生成",
        detail: "12亿 → 120亿美元 | CAGR 40%",
        value: 12.0,
        delay: 40,
        chart: 1,
    },
    Segment {
        label: "跨平台 UI",
        detail: "80亿 → 250亿美元 | CAGR 18%",
        value: 25.0,
        delay: 60,
        chart: 2,
    },
];

const AUDIENCES: [(&str, &str); 4] = [
    ("👨‍💻", "企业开发者"),
    ("🤖", "AI/ML 团队"),
    ("📊", "业务分析师"),
    ("🔧", "IoT 嵌入式"),
];

/// Market segment bars grow in sequence, followed by the positioning callout and audiences.
pub fn market_scene(local: FrameIndex, fps: Fps) -> PitchResult<VisualDescription> {
    let title = entrance(local, fps, 0, SMOOTH)?;
    let highlight = fade_window(local, 120.0, 140.0)?;
    let audiences = fade_window(local, 140.0, 160.0)?;

    let mut desc = canvas_for("market");
    desc.push(
        Element::text("title", "市场机遇", TextRole::Heading, COLORS.text_primary)
            .opacity(title),
    )
    .push(
        Element::text(
            "subtitle",
            "5000 亿美元的开发者工具市场",
            TextRole::Subtitle,
            COLORS.text_secondary,
        )
        .opacity(title),
    );

    for (i, seg) in SEGMENTS.iter().enumerate() {
        let progress = entrance(local, fps, seg.delay, SMOOTH)?;
        let width = remap(progress, 0.0, seg.value / MAX_VALUE)?;
        let color = COLORS.chart[seg.chart];
        desc.push(Element::text(
            format!("segment_{i}"),
            seg.label,
            TextRole::Body,
            COLORS.text_primary,
        ))
        .push(Element::text(
            format!("segment_{i}_detail"),
            seg.detail,
            TextRole::Caption,
            COLORS.text_secondary,
        ))
        .push(Element::bar(format!("segment_{i}_bar"), width, color))
        .push(
            Element::text(
                format!("segment_{i}_value"),
                format!("${}B", seg.value),
                TextRole::Caption,
                COLORS.text_primary,
            )
            .opacity(progress),
        );
    }

    desc.push(
        Element::text(
            "highlight",
            "Splash 处于三个高增长细分市场的 交汇点",
            TextRole::Subtitle,
            COLORS.text_primary,
        )
        .opacity(highlight)
        .translate(0.0, remap(highlight, 20.0, 0.0)?),
    );

    for (i, (icon, label)) in AUDIENCES.iter().enumerate() {
        desc.push(
            Element::glyph(format!("audience_{i}_icon"), *icon, COLORS.text_primary)
                .opacity(audiences),
        )
        .push(
            Element::text(
                format!("audience_{i}"),
                *label,
                TextRole::Caption,
                COLORS.text_secondary,
            )
            .opacity(audiences),
        );
    }
    Ok(desc)
}

#[cfg(test)]
#[path = "../../../tests/unit/pitch/scenes/market.rs"]
mod tests;
