use leptos::html;
use leptos::prelude::*;

/// Height of a pinned section's scroll track, as a CSS length. The frame
/// stays stuck for one extra viewport per unit of `distance`.
pub(crate) fn pin_distance(distance: f64) -> String {
    format!("{}vh", (distance.max(0.0) * 100.0).round())
}

/// A tall track with a sticky full-screen frame. The frame only sticks once
/// `pinned` is set, which happens after the section's animations registered;
/// until then the content lays out as a normal stacked section.
#[component]
pub fn PinTrack(
    track: NodeRef<html::Section>,
    pinned: ReadSignal<bool>,
    distance: f64,
    #[prop(optional, into)] id: Option<String>,
    #[prop(optional, into)] class: String,
    children: Children,
) -> impl IntoView {
    let style = format!("--pin-distance: {}", pin_distance(distance));

    view! {
        <section
            node_ref=track
            id=id
            class=format!("pin-track {class}")
            class:pinned=move || pinned.get()
            style=style
        >
            <div class="pin-frame">{children()}</div>
        </section>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn distance_is_in_viewport_heights() {
        assert_eq!(pin_distance(2.0), "200vh");
        assert_eq!(pin_distance(4.0), "400vh");
    }

    #[test]
    fn negative_distance_does_not_pin() {
        assert_eq!(pin_distance(-1.0), "0vh");
    }
}
