use crate::{
    eval::evaluator::{EvaluatedFrame, EvaluatedLayer},
    foundation::core::{Rgba8Premul, Transform2D, Vec2},
    foundation::math::Fnv1a64,
    timeline::model::ActivePosition,
    visual::model::{Background, Element, ElementKind, TextRole},
};

/// 128-bit content hash of an evaluated frame.
///
/// Two frames with equal fingerprints describe the same picture (ignoring the frame index and
/// local frame counters), so a renderer may reuse the earlier raster.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, serde::Serialize)]
pub struct FrameFingerprint {
    /// High 64 bits.
    pub hi: u64,
    /// Low 64 bits.
    pub lo: u64,
}

struct PairHasher {
    a: Fnv1a64,
    b: Fnv1a64,
}

impl PairHasher {
    fn new() -> Self {
        Self {
            a: Fnv1a64::new(Fnv1a64::OFFSET_BASIS),
            b: Fnv1a64::new(0x9ae1_6a3b_2f90_404f),
        }
    }

    fn u8(&mut self, v: u8) {
        self.a.write_u8(v);
        self.b.write_u8(v);
    }

    fn u64(&mut self, v: u64) {
        self.a.write_u64(v);
        self.b.write_u64(v);
    }

    fn f64(&mut self, v: f64) {
        self.a.write_f64(v);
        self.b.write_f64(v);
    }

    fn str(&mut self, s: &str) {
        self.a.write_str(s);
        self.b.write_str(s);
    }

    fn vec2(&mut self, v: Vec2) {
        self.f64(v.x);
        self.f64(v.y);
    }

    fn color(&mut self, c: Rgba8Premul) {
        for ch in [c.r, c.g, c.b, c.a] {
            self.u8(ch);
        }
    }

    fn transform(&mut self, t: &Transform2D) {
        self.vec2(t.translate);
        self.f64(t.rotation_rad);
        self.vec2(t.scale);
        self.vec2(t.anchor);
    }

    fn finish(self) -> FrameFingerprint {
        FrameFingerprint {
            hi: self.a.finish(),
            lo: self.b.finish(),
        }
    }
}

/// Hash everything that affects the picture of `frame`.
pub fn fingerprint_frame(frame: &EvaluatedFrame) -> FrameFingerprint {
    let mut h = PairHasher::new();
    match &frame.position {
        ActivePosition::InScene { .. } => h.u8(0),
        ActivePosition::InTransition { kind, .. } => {
            h.u8(1);
            h.str(&kind.name());
        }
    }
    h.u64(frame.layers.len() as u64);
    for layer in &frame.layers {
        write_layer(&mut h, layer);
    }
    h.finish()
}

fn write_layer(h: &mut PairHasher, layer: &EvaluatedLayer) {
    h.str(&layer.scene_id);
    h.f64(layer.composite.opacity);
    h.vec2(layer.composite.offset);
    match layer.composite.reveal {
        Some(reveal) => {
            h.u8(1);
            h.u8(reveal.direction as u8);
            h.f64(reveal.fraction);
        }
        None => h.u8(0),
    }

    match layer.visual.background {
        Background::Solid { color } => {
            h.u8(0);
            h.color(color);
        }
        Background::LinearGradient {
            angle_deg,
            from,
            to,
        } => {
            h.u8(1);
            h.f64(angle_deg);
            h.color(from);
            h.color(to);
        }
    }

    h.u64(layer.visual.elements.len() as u64);
    for el in &layer.visual.elements {
        write_element(h, el);
    }
}

fn write_element(h: &mut PairHasher, el: &Element) {
    h.str(&el.id);
    h.f64(el.opacity);
    h.transform(&el.transform);
    match &el.kind {
        ElementKind::Text {
            text,
            role,
            color,
            visible_chars,
        } => {
            h.u8(0);
            h.str(text);
            h.u8(role_tag(*role));
            h.color(*color);
            match visible_chars {
                Some(n) => {
                    h.u8(1);
                    h.u64(*n as u64);
                }
                None => h.u8(0),
            }
        }
        ElementKind::Panel {
            size,
            corner_radius,
            fill,
            stroke,
        } => {
            h.u8(1);
            h.vec2(*size);
            h.f64(*corner_radius);
            h.color(*fill);
            match stroke {
                Some(c) => {
                    h.u8(1);
                    h.color(*c);
                }
                None => h.u8(0),
            }
        }
        ElementKind::Bar {
            fill_fraction,
            color,
        } => {
            h.u8(2);
            h.f64(*fill_fraction);
            h.color(*color);
        }
        ElementKind::Glyph { symbol, color } => {
            h.u8(3);
            h.str(symbol);
            h.color(*color);
        }
    }
}

fn role_tag(role: TextRole) -> u8 {
    match role {
        TextRole::Title => 0,
        TextRole::Heading => 1,
        TextRole::Subtitle => 2,
        TextRole::Body => 3,
        TextRole::Caption => 4,
        TextRole::Mono => 5,
    }
}

#[cfg(test)]
#[path = "../../tests/unit/eval/fingerprint.rs"]
mod tests;
