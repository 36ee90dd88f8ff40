//! Animatable property sets and their CSS rendering.

/// An RGBA colour, alpha in `[0, 1]`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rgba {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: f64,
}

impl Rgba {
    pub const TRANSPARENT: Rgba = Rgba::new(0, 0, 0, 0.0);

    pub const fn new(r: u8, g: u8, b: u8, a: f64) -> Self {
        Self { r, g, b, a }
    }

    fn lerp(self, other: Rgba, t: f64) -> Rgba {
        let channel = |a: u8, b: u8| lerp(f64::from(a), f64::from(b), t).round().clamp(0.0, 255.0) as u8;
        Rgba {
            r: channel(self.r, other.r),
            g: channel(self.g, other.g),
            b: channel(self.b, other.b),
            a: lerp(self.a, other.a, t),
        }
    }

    fn css(self) -> String {
        format!("rgba({}, {}, {}, {})", self.r, self.g, self.b, round(self.a))
    }
}

/// Clip-path shapes. Values are percentages of the element box.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Clip {
    /// `inset(top right bottom left)`
    Inset { top: f64, right: f64, bottom: f64, left: f64 },
    /// `circle(radius at 50% 50%)`
    Circle { radius: f64 },
}

impl Clip {
    /// Fully clipped from the top edge down; animating to `Clip::open()` wipes
    /// the element in from the bottom.
    pub const fn wiped_up() -> Clip {
        Clip::Inset { top: 100.0, right: 0.0, bottom: 0.0, left: 0.0 }
    }

    pub const fn open() -> Clip {
        Clip::Inset { top: 0.0, right: 0.0, bottom: 0.0, left: 0.0 }
    }

    fn rest(self) -> Clip {
        match self {
            Clip::Inset { .. } => Clip::open(),
            Clip::Circle { .. } => Clip::Circle { radius: 100.0 },
        }
    }

    fn lerp(self, other: Clip, t: f64) -> Clip {
        match (self, other) {
            (
                Clip::Inset { top, right, bottom, left },
                Clip::Inset { top: t2, right: r2, bottom: b2, left: l2 },
            ) => Clip::Inset {
                top: lerp(top, t2, t),
                right: lerp(right, r2, t),
                bottom: lerp(bottom, b2, t),
                left: lerp(left, l2, t),
            },
            (Clip::Circle { radius }, Clip::Circle { radius: r2 }) => {
                Clip::Circle { radius: lerp(radius, r2, t) }
            }
            _ if t < 1.0 => self,
            _ => other,
        }
    }

    fn css(self) -> String {
        match self {
            Clip::Inset { top, right, bottom, left } => format!(
                "inset({}% {}% {}% {}%)",
                round(top),
                round(right),
                round(bottom),
                round(left)
            ),
            Clip::Circle { radius } => format!("circle({}% at 50% 50%)", round(radius)),
        }
    }
}

/// A sparse set of animatable properties. `None` means "not animated".
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Props {
    pub opacity: Option<f64>,
    /// Horizontal offset in px.
    pub x: Option<f64>,
    /// Vertical offset in px.
    pub y: Option<f64>,
    /// Vertical offset as a percentage of the element's own height.
    pub y_percent: Option<f64>,
    pub scale: Option<f64>,
    pub scale_x: Option<f64>,
    /// Degrees.
    pub rotate: Option<f64>,
    /// Degrees.
    pub rotate_x: Option<f64>,
    /// Blur radius in px.
    pub blur: Option<f64>,
    /// Letter spacing in em.
    pub letter_spacing: Option<f64>,
    pub clip: Option<Clip>,
    /// Height in px.
    pub height: Option<f64>,
    pub background: Option<Rgba>,
    pub border_color: Option<Rgba>,
    /// Numeric text content, rendered zero-padded to two digits.
    pub counter: Option<f64>,
}

macro_rules! setters {
    ($($field:ident: $ty:ty),* $(,)?) => {
        $(
            pub fn $field(mut self, value: $ty) -> Self {
                self.$field = Some(value);
                self
            }
        )*
    };
}

impl Props {
    pub fn new() -> Self {
        Self::default()
    }

    setters! {
        opacity: f64,
        x: f64,
        y: f64,
        y_percent: f64,
        scale: f64,
        scale_x: f64,
        rotate: f64,
        rotate_x: f64,
        blur: f64,
        letter_spacing: f64,
        clip: Clip,
        height: f64,
        background: Rgba,
        border_color: Rgba,
        counter: f64,
    }

    pub fn is_empty(&self) -> bool {
        *self == Props::default()
    }

    /// The resting value of every property set in `self`: full opacity,
    /// identity transform, no blur, open clip. Properties without a natural
    /// rest value (height, colours, counter, letter spacing) are kept as is.
    pub fn rest(&self) -> Props {
        Props {
            opacity: self.opacity.map(|_| 1.0),
            x: self.x.map(|_| 0.0),
            y: self.y.map(|_| 0.0),
            y_percent: self.y_percent.map(|_| 0.0),
            scale: self.scale.map(|_| 1.0),
            scale_x: self.scale_x.map(|_| 1.0),
            rotate: self.rotate.map(|_| 0.0),
            rotate_x: self.rotate_x.map(|_| 0.0),
            blur: self.blur.map(|_| 0.0),
            letter_spacing: self.letter_spacing,
            clip: self.clip.map(Clip::rest),
            height: self.height,
            background: self.background,
            border_color: self.border_color,
            counter: self.counter,
        }
    }

    /// Interpolate towards `other`. A property set on only one side is taken
    /// from that side unchanged.
    pub fn lerp(&self, other: &Props, t: f64) -> Props {
        fn num(a: Option<f64>, b: Option<f64>, t: f64) -> Option<f64> {
            match (a, b) {
                (Some(a), Some(b)) => Some(lerp(a, b, t)),
                (a, b) => b.or(a),
            }
        }
        fn with<T: Copy>(a: Option<T>, b: Option<T>, t: f64, f: fn(T, T, f64) -> T) -> Option<T> {
            match (a, b) {
                (Some(a), Some(b)) => Some(f(a, b, t)),
                (a, b) => b.or(a),
            }
        }

        Props {
            opacity: num(self.opacity, other.opacity, t),
            x: num(self.x, other.x, t),
            y: num(self.y, other.y, t),
            y_percent: num(self.y_percent, other.y_percent, t),
            scale: num(self.scale, other.scale, t),
            scale_x: num(self.scale_x, other.scale_x, t),
            rotate: num(self.rotate, other.rotate, t),
            rotate_x: num(self.rotate_x, other.rotate_x, t),
            blur: num(self.blur, other.blur, t),
            letter_spacing: num(self.letter_spacing, other.letter_spacing, t),
            clip: with(self.clip, other.clip, t, Clip::lerp),
            height: num(self.height, other.height, t),
            background: with(self.background, other.background, t, Rgba::lerp),
            border_color: with(self.border_color, other.border_color, t, Rgba::lerp),
            counter: num(self.counter, other.counter, t),
        }
    }

    /// Copy into `self` every property that `self` does not set yet.
    pub fn fill_missing(&mut self, other: &Props) {
        fn fill<T: Copy>(slot: &mut Option<T>, value: Option<T>) {
            if slot.is_none() {
                *slot = value;
            }
        }
        fill(&mut self.opacity, other.opacity);
        fill(&mut self.x, other.x);
        fill(&mut self.y, other.y);
        fill(&mut self.y_percent, other.y_percent);
        fill(&mut self.scale, other.scale);
        fill(&mut self.scale_x, other.scale_x);
        fill(&mut self.rotate, other.rotate);
        fill(&mut self.rotate_x, other.rotate_x);
        fill(&mut self.blur, other.blur);
        fill(&mut self.letter_spacing, other.letter_spacing);
        fill(&mut self.clip, other.clip);
        fill(&mut self.height, other.height);
        fill(&mut self.background, other.background);
        fill(&mut self.border_color, other.border_color);
        fill(&mut self.counter, other.counter);
    }

    /// Keep only the properties that `mask` sets.
    pub fn only(&self, mask: &Props) -> Props {
        fn keep<T: Copy, U>(value: Option<T>, mask: Option<U>) -> Option<T> {
            mask.and(value)
        }
        Props {
            opacity: keep(self.opacity, mask.opacity),
            x: keep(self.x, mask.x),
            y: keep(self.y, mask.y),
            y_percent: keep(self.y_percent, mask.y_percent),
            scale: keep(self.scale, mask.scale),
            scale_x: keep(self.scale_x, mask.scale_x),
            rotate: keep(self.rotate, mask.rotate),
            rotate_x: keep(self.rotate_x, mask.rotate_x),
            blur: keep(self.blur, mask.blur),
            letter_spacing: keep(self.letter_spacing, mask.letter_spacing),
            clip: keep(self.clip, mask.clip),
            height: keep(self.height, mask.height),
            background: keep(self.background, mask.background),
            border_color: keep(self.border_color, mask.border_color),
            counter: keep(self.counter, mask.counter),
        }
    }

    /// Overwrite `self` with every property `other` sets.
    pub fn overlay(&mut self, other: &Props) {
        let mut merged = other.clone();
        merged.fill_missing(self);
        *self = merged;
    }

    /// The CSS `transform` for the transform properties set, if any.
    pub fn transform(&self) -> Option<String> {
        let mut parts = Vec::new();
        if self.x.is_some() || self.y.is_some() {
            parts.push(format!(
                "translate({}px, {}px)",
                round(self.x.unwrap_or(0.0)),
                round(self.y.unwrap_or(0.0))
            ));
        }
        if let Some(percent) = self.y_percent {
            parts.push(format!("translateY({}%)", round(percent)));
        }
        if let Some(deg) = self.rotate {
            parts.push(format!("rotate({}deg)", round(deg)));
        }
        if let Some(deg) = self.rotate_x {
            parts.push(format!("rotateX({}deg)", round(deg)));
        }
        if let Some(scale) = self.scale {
            parts.push(format!("scale({})", round(scale)));
        }
        if let Some(scale_x) = self.scale_x {
            parts.push(format!("scaleX({})", round(scale_x)));
        }
        (!parts.is_empty()).then(|| parts.join(" "))
    }

    /// CSS declarations for every style property set, in a stable order.
    pub fn declarations(&self) -> Vec<(&'static str, String)> {
        let mut out = Vec::new();
        if let Some(opacity) = self.opacity {
            out.push(("opacity", round(opacity.clamp(0.0, 1.0)).to_string()));
        }
        if let Some(transform) = self.transform() {
            out.push(("transform", transform));
        }
        if let Some(blur) = self.blur {
            out.push(("filter", format!("blur({}px)", round(blur.max(0.0)))));
        }
        if let Some(spacing) = self.letter_spacing {
            out.push(("letter-spacing", format!("{}em", round(spacing))));
        }
        if let Some(clip) = self.clip {
            out.push(("clip-path", clip.css()));
        }
        if let Some(height) = self.height {
            out.push(("height", format!("{}px", round(height.max(0.0)))));
        }
        if let Some(background) = self.background {
            out.push(("background-color", background.css()));
        }
        if let Some(border) = self.border_color {
            out.push(("border-color", border.css()));
        }
        out
    }

    /// Text content for counter targets.
    pub fn text(&self) -> Option<String> {
        self.counter.map(|value| format!("{:02}", value.max(0.0).floor() as u64))
    }
}

pub(crate) fn lerp(a: f64, b: f64, t: f64) -> f64 {
    if t == 0.0 {
        a
    } else if t == 1.0 {
        b
    } else {
        a + (b - a) * t
    }
}

fn round(value: f64) -> f64 {
    (value * 1000.0).round() / 1000.0
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn rest_returns_identity_for_set_properties_only() {
        let from = Props::new().y(200.0).scale(6.0).opacity(0.0).blur(25.0);
        assert_eq!(from.rest(), Props::new().y(0.0).scale(1.0).opacity(1.0).blur(0.0));
    }

    #[test]
    fn lerp_keeps_one_sided_values() {
        let a = Props::new().opacity(0.0).y(20.0);
        let b = Props::new().opacity(1.0).scale(1.2);
        let mid = a.lerp(&b, 0.5);
        assert_eq!(mid.opacity, Some(0.5));
        assert_eq!(mid.y, Some(20.0));
        assert_eq!(mid.scale, Some(1.2));
    }

    #[test]
    fn fill_missing_does_not_overwrite() {
        let mut a = Props::new().opacity(0.3);
        a.fill_missing(&Props::new().opacity(1.0).y(5.0));
        assert_eq!(a, Props::new().opacity(0.3).y(5.0));
    }

    #[test]
    fn overlay_prefers_other() {
        let mut a = Props::new().opacity(0.3).x(4.0);
        a.overlay(&Props::new().opacity(1.0));
        assert_eq!(a, Props::new().opacity(1.0).x(4.0));
    }

    #[test]
    fn transform_composes_in_fixed_order() {
        let props = Props::new().scale(1.5).y(-50.0).rotate(-25.0);
        assert_eq!(
            props.transform().as_deref(),
            Some("translate(0px, -50px) rotate(-25deg) scale(1.5)")
        );
        assert_eq!(Props::new().opacity(1.0).transform(), None);
    }

    #[test]
    fn declarations_render_css() {
        let props = Props::new()
            .opacity(0.25)
            .blur(20.0)
            .clip(Clip::Circle { radius: 40.0 })
            .border_color(Rgba::new(255, 31, 31, 1.0));
        assert_eq!(
            props.declarations(),
            vec![
                ("opacity", "0.25".to_string()),
                ("filter", "blur(20px)".to_string()),
                ("clip-path", "circle(40% at 50% 50%)".to_string()),
                ("border-color", "rgba(255, 31, 31, 1)".to_string()),
            ]
        );
    }

    #[test]
    fn counter_renders_zero_padded_floor() {
        assert_eq!(Props::new().counter(7.9).text().as_deref(), Some("07"));
        assert_eq!(Props::new().counter(100.0).text().as_deref(), Some("100"));
        assert_eq!(Props::new().opacity(1.0).text(), None);
    }

    #[test]
    fn clip_wipe_interpolates() {
        let mid = Clip::wiped_up().lerp(Clip::open(), 0.5);
        assert_eq!(mid, Clip::Inset { top: 50.0, right: 0.0, bottom: 0.0, left: 0.0 });
    }

    #[test]
    fn colour_interpolates_per_channel() {
        let mid = Rgba::TRANSPARENT.lerp(Rgba::new(255, 31, 31, 0.03), 0.5);
        assert_eq!(mid, Rgba::new(128, 16, 16, 0.015));
    }
}
