//! Color picker dropdown

use dioxus::prelude::*;

use jotter_core::ColorId;

use crate::state::AppState;

/// Indicator swatch that opens the four palette swatches.
///
/// Clicking the indicator toggles the dropdown; clicking a swatch picks the
/// color and closes it.
#[component]
pub fn ColorPicker() -> Element {
    let mut state = use_context::<AppState>();
    let (indicator, is_open) = {
        let board = state.board.read();
        (board.indicator_color(), board.is_picker_open())
    };
    let colors = (state.theme)().palette();

    rsx! {
        div {
            class: if is_open { "colors-dropdown opened" } else { "colors-dropdown" },
            title: "{indicator.name}",
            style: "
                position: relative;
                width: 32px;
                height: 32px;
                border-radius: 6px;
                border: 1px solid {colors.border};
                cursor: pointer;
                background: {indicator.hex};
            ",
            onclick: move |_| state.board.write().toggle_picker(),

            if is_open {
                div {
                    class: "suggest",
                    style: "
                        position: absolute;
                        top: 38px;
                        left: 0;
                        display: flex;
                        gap: 6px;
                        padding: 6px;
                        border-radius: 6px;
                        border: 1px solid {colors.border};
                        background: {colors.bg_primary};
                        z-index: 10;
                    ",

                    for color_id in ColorId::all() {
                        {
                            let swatch = color_id.color();
                            let index = color_id.index();

                            rsx! {
                                div {
                                    key: "{index}",
                                    class: "color-option",
                                    title: "{swatch.name}",
                                    style: "
                                        width: 24px;
                                        height: 24px;
                                        border-radius: 4px;
                                        background: {swatch.hex};
                                    ",
                                    onclick: move |evt: MouseEvent| {
                                        evt.stop_propagation();
                                        state.board.write().select_color(color_id);
                                    },
                                }
                            }
                        }
                    }
                }
            }
        }
    }
}
