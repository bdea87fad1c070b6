//! Modal for choosing a square crop of a picked image.
//!
//! The modal only measures and edits the selection. The caller owns the
//! picked file and runs the export with the natural-pixel rectangle this
//! component reports on confirm.

use leptos::prelude::*;

use crate::util::crop::{CropRect, MIN_CROP_SIZE};

#[component]
pub fn ImageCropperModal(
    /// Object URL of the picked image.
    src: String,
    #[prop(into)] busy: Signal<bool>,
    on_cancel: Callback<()>,
    /// Receives the selection in natural image pixels.
    on_confirm: Callback<CropRect>,
) -> impl IntoView {
    let img_ref = NodeRef::<leptos::html::Img>::new();
    let displayed = RwSignal::new((0.0_f64, 0.0_f64));
    let natural = RwSignal::new((0.0_f64, 0.0_f64));
    let crop = RwSignal::new(CropRect { x: 0.0, y: 0.0, width: 0.0, height: 0.0 });
    let drag_from = RwSignal::new(None::<(f64, f64)>);

    let on_load = move |_| {
        #[cfg(feature = "hydrate")]
        {
            if let Some(img) = img_ref.get() {
                let shown = (f64::from(img.client_width()), f64::from(img.client_height()));
                displayed.set(shown);
                natural.set((f64::from(img.natural_width()), f64::from(img.natural_height())));
                crop.set(CropRect::centered_square(shown.0, shown.1));
            }
        }
        #[cfg(not(feature = "hydrate"))]
        let _ = img_ref;
    };

    let on_pointer_down = move |ev: leptos::ev::PointerEvent| {
        ev.prevent_default();
        drag_from.set(Some((f64::from(ev.client_x()), f64::from(ev.client_y()))));
    };
    let on_pointer_move = move |ev: leptos::ev::PointerEvent| {
        let Some((x0, y0)) = drag_from.get_untracked() else {
            return;
        };
        let (x1, y1) = (f64::from(ev.client_x()), f64::from(ev.client_y()));
        let (w, h) = displayed.get_untracked();
        crop.update(|c| *c = c.moved_by(x1 - x0, y1 - y0, w, h));
        drag_from.set(Some((x1, y1)));
    };
    let end_drag = move |_| drag_from.set(None);

    let max_side = move || {
        let (w, h) = displayed.get();
        w.min(h)
    };
    let on_resize = move |ev| {
        if let Ok(side) = event_target_value(&ev).parse::<f64>() {
            let (w, h) = displayed.get_untracked();
            crop.update(|c| *c = c.resized(side, w, h));
        }
    };

    let confirm = move |_| {
        let selection = crop.get_untracked().to_natural(displayed.get_untracked(), natural.get_untracked());
        if !selection.is_empty() {
            on_confirm.run(selection);
        }
    };

    view! {
        <div class="dialog-backdrop" on:click=move |_| on_cancel.run(())>
            <div class="dialog cropper" on:click=move |ev| ev.stop_propagation()>
                <h2>"Crop your photo"</h2>
                <div
                    class="cropper__stage"
                    on:pointermove=on_pointer_move
                    on:pointerup=end_drag
                    on:pointerleave=end_drag
                >
                    <img class="cropper__image" node_ref=img_ref src=src alt="Selected image" on:load=on_load draggable="false"/>
                    <div
                        class="cropper__selection"
                        style=move || crop.get().overlay_style()
                        on:pointerdown=on_pointer_down
                    ></div>
                </div>
                <label class="dialog__label">
                    "Size"
                    <input
                        class="cropper__zoom"
                        type="range"
                        min=MIN_CROP_SIZE.to_string()
                        max=move || max_side().to_string()
                        step="1"
                        prop:value=move || crop.get().width.round().to_string()
                        on:input=on_resize
                    />
                </label>
                <div class="dialog__actions">
                    <button class="btn" on:click=move |_| on_cancel.run(()) disabled=move || busy.get()>
                        "Cancel"
                    </button>
                    <button class="btn btn--primary" on:click=confirm disabled=move || busy.get()>
                        {move || if busy.get() { "Uploading..." } else { "Save photo" }}
                    </button>
                </div>
            </div>
        </div>
    }
}
