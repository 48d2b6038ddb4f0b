use anyhow::Context as _;

use crate::{
    animation::shape::Shape,
    carousel::config::SliderConfig,
    foundation::error::SlideFxResult,
    stage::capability::CompletionPolicy,
};

/// viewBox every item outline is drawn in.
pub const ITEM_VIEW_BOX: &str = "0 0 80 60";

/// Style values the host applies to the list and its items.
#[derive(Clone, Debug, PartialEq, serde::Serialize)]
pub struct ListLayout {
    /// Width of the list element, in percent of the viewport.
    pub list_width_percent: f64,
    /// Width of each item, in percent of the list.
    pub item_width_percent: f64,
    /// `transition` declaration for the list; absent without completion support.
    pub transition: Option<String>,
    /// Whether navigation arrows are created.
    pub has_nav: bool,
}

impl ListLayout {
    /// Layout for `len` items.
    pub fn new(len: usize, config: &SliderConfig, policy: CompletionPolicy) -> Self {
        let n = len.max(1) as f64;
        let transition = match policy {
            CompletionPolicy::TransitionEnd => Some(format!(
                "transform {}ms {}",
                config.speed.0,
                config.easing.css_name()
            )),
            CompletionPolicy::Immediate => None,
        };
        Self {
            list_width_percent: 100.0 * n,
            item_width_percent: 100.0 / n,
            transition,
            has_nav: len > 1,
        }
    }
}

/// CSS `transform` value for a list offset.
pub fn css_transform(translate_percent: f64) -> String {
    let v = if translate_percent == 0.0 {
        0.0
    } else {
        translate_percent
    };
    format!("translate3d({v}%,0,0)")
}

/// SVG markup placed first inside each item, drawing `shape` stretched to the item box.
///
/// The markup is checked with `usvg` before it is returned.
pub fn item_svg_markup(shape: &Shape) -> SlideFxResult<String> {
    let markup = format!(
        concat!(
            "<svg xmlns=\"http://www.w3.org/2000/svg\" width=\"100%\" height=\"100%\" ",
            "viewBox=\"{}\" preserveAspectRatio=\"none\"><path d=\"{}\"/></svg>"
        ),
        ITEM_VIEW_BOX,
        shape.d()
    );
    let opts = usvg::Options::default();
    usvg::Tree::from_str(&markup, &opts).context("parse item svg markup")?;
    Ok(markup)
}

#[cfg(test)]
#[path = "../../tests/unit/carousel/layout.rs"]
mod tests;
