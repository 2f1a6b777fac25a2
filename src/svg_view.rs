use yew::prelude::*;

/// Spiral outlines drawn in a 100x100 view box.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) enum SpiralShape {
    /// Tight shell used for the logo, back button, end mark and avatar.
    Compact,
    /// Wider shell used for the empty state and the about hero.
    Open,
}

impl SpiralShape {
    fn path(self) -> &'static str {
        match self {
            SpiralShape::Compact => {
                "M 50 50 Q 50 30, 70 30 Q 90 30, 90 50 Q 90 80, 60 80 Q 20 80, 20 40 Q 20 10, 50 10"
            }
            SpiralShape::Open => {
                "M 50 50 Q 50 20, 80 20 Q 100 20, 100 50 Q 100 90, 60 90 Q 10 90, 10 40 Q 10 5, 50 5"
            }
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub(crate) struct SpiralDot {
    pub(crate) radius: f64,
    pub(crate) fill: AttrValue,
}

#[derive(Properties, PartialEq)]
pub(crate) struct SpiralProps {
    pub(crate) width: u32,
    pub(crate) height: u32,
    #[prop_or_default]
    pub(crate) class: Classes,
    #[prop_or(SpiralShape::Compact)]
    pub(crate) shape: SpiralShape,
    #[prop_or(AttrValue::from("currentColor"))]
    pub(crate) stroke: AttrValue,
    #[prop_or(AttrValue::from("1.5"))]
    pub(crate) stroke_width: AttrValue,
    #[prop_or_default]
    pub(crate) style: Option<AttrValue>,
    #[prop_or_default]
    pub(crate) dot: Option<SpiralDot>,
    /// Extra SVG children, e.g. `<defs>` for gradients.
    #[prop_or_default]
    pub(crate) children: Html,
}

#[function_component(Spiral)]
pub(crate) fn spiral(props: &SpiralProps) -> Html {
    let dot = props.dot.as_ref().map(|dot| {
        html! {
            <circle cx="50" cy="50" r={dot.radius.to_string()} fill={dot.fill.clone()} />
        }
    });
    html! {
        <svg
            width={props.width.to_string()}
            height={props.height.to_string()}
            viewBox="0 0 100 100"
            class={props.class.clone()}
            style={props.style.clone()}
        >
            { props.children.clone() }
            <path
                d={props.shape.path()}
                fill="none"
                stroke={props.stroke.clone()}
                stroke-width={props.stroke_width.clone()}
            />
            { for dot }
        </svg>
    }
}

pub(crate) const GRADIENT_ID: &str = "largeSpiralGradient";

/// Amber to blue to green gradient spiral on the about page.
#[function_component(GradientSpiral)]
pub(crate) fn gradient_spiral() -> Html {
    let defs = html! {
        <defs>
            <linearGradient id={GRADIENT_ID} x1="0%" y1="0%" x2="100%" y2="100%">
                <stop offset="0%" stop-color="#f59e0b" />
                <stop offset="50%" stop-color="#3b82f6" />
                <stop offset="100%" stop-color="#10b981" />
            </linearGradient>
        </defs>
    };
    html! {
        <Spiral
            width={300}
            height={300}
            class={classes!("large-colorful-spiral")}
            shape={SpiralShape::Open}
            stroke={format!("url(#{GRADIENT_ID})")}
            dot={SpiralDot { radius: 3.0, fill: "#44403c".into() }}
        >
            { defs }
        </Spiral>
    }
}
